use crate::{
    radio::{prelude::EsbStatus, Nrf24, Nrf24Error},
    types::{ObserveTx, StatusFlags},
    Events, Transport,
};

use super::{commands, fields, registers, Tally};

impl<T: Transport> EsbStatus for Nrf24<T> {
    type StatusErrorType = Nrf24Error<T::Error>;

    fn read_status(&mut self) -> Result<u8, Self::StatusErrorType> {
        self.read_register(registers::STATUS)
    }

    fn status_flags(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        self.read_status().map(StatusFlags::from_bits)
    }

    fn clear_status(&mut self, status: u8) -> Result<(), Self::StatusErrorType> {
        if status & (fields::RX_DR.mask | fields::TX_DS.mask) == 0 {
            return Ok(());
        }
        self.write_register(registers::STATUS, status & !fields::MAX_RT.mask)
    }

    fn read_and_clear_status(&mut self) -> Result<u8, Self::StatusErrorType> {
        let status = self.read_status()?;
        self.clear_status(status)?;
        Ok(status)
    }

    fn clear_all_status(&mut self) -> Result<(), Self::StatusErrorType> {
        let mut tally = Tally::new();
        if let Some(status) = tally.track(self.read_status()) {
            tally.track(self.write_register(registers::STATUS, status));
        }
        // writing RF_CH resets PLOS_CNT
        if let Some(channel) = tally.track(self.read_register(registers::RF_CH)) {
            tally.track(self.write_register(registers::RF_CH, channel));
        }
        tally.finish()
    }

    fn clear_tx_fail(&mut self) -> Result<(), Self::StatusErrorType> {
        self.write_register(registers::STATUS, fields::MAX_RT.mask)
    }

    fn clear_all_fifo(&mut self) -> Result<(), Self::StatusErrorType> {
        let mut tally = Tally::new();
        tally.track(self.command(commands::FLUSH_TX));
        tally.track(self.command(commands::FLUSH_RX));
        tally.finish()
    }

    fn clear_all(&mut self) -> Result<(), Self::StatusErrorType> {
        let mut tally = Tally::new();
        tally.track(self.clear_all_fifo());
        tally.track(self.clear_all_status());
        tally.finish()
    }

    fn read_observe(&mut self) -> Result<ObserveTx, Self::StatusErrorType> {
        self.read_register(registers::OBSERVE_TX)
            .map(ObserveTx::from_bits)
    }

    fn poll_events(&mut self) -> Result<Events, Self::StatusErrorType> {
        self.read_and_clear_status().map(Events::decode)
    }
}
