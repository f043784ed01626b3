use crate::{
    radio::{prelude::EsbFifo, Nrf24, Nrf24Error},
    types::FifoStatus,
    Role, Transport,
};

use super::{commands, fields, registers};

/// The largest payload the radio's FIFOs can hold.
const MAX_PAYLOAD: usize = 32;

/// Describes a payload read by [`EsbFifo::rx_read()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Received {
    /// The number of bytes written to the buffer.
    pub len: usize,
    /// The pipe that received the payload.
    pub pipe: u8,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Received {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Received {=usize} bytes on pipe {=u8}", self.len, self.pipe)
    }
}

fn truncate(data: &[u8]) -> &[u8] {
    &data[..data.len().min(MAX_PAYLOAD)]
}

impl<T: Transport> EsbFifo for Nrf24<T> {
    type FifoErrorType = Nrf24Error<T::Error>;

    fn fifo_status(&mut self) -> Result<FifoStatus, Self::FifoErrorType> {
        self.read_register(registers::FIFO_STATUS)
            .map(FifoStatus::from_bits)
    }

    fn tx_has_space(&mut self) -> Result<bool, Self::FifoErrorType> {
        Ok(!self.fifo_status()?.tx_full())
    }

    fn tx_is_empty(&mut self) -> Result<bool, Self::FifoErrorType> {
        Ok(self.fifo_status()?.tx_empty())
    }

    fn rx_has_data(&mut self) -> Result<bool, Self::FifoErrorType> {
        Ok(!self.fifo_status()?.rx_empty())
    }

    fn rx_is_full(&mut self) -> Result<bool, Self::FifoErrorType> {
        Ok(self.fifo_status()?.rx_full())
    }

    fn tx_write(&mut self, data: &[u8]) -> Result<(), Self::FifoErrorType> {
        match self.role {
            Role::Transmitter => self.tx_write_payload(data),
            Role::Receiver => self.tx_write_ack(data, self.ack_pipe),
        }
    }

    fn tx_write_no_ack(&mut self, data: &[u8]) -> Result<(), Self::FifoErrorType> {
        if self.role == Role::Receiver {
            return Err(Nrf24Error::NotAsTx);
        }
        self.command_with_data(commands::W_TX_PAYLOAD_NO_ACK, truncate(data))
    }

    fn tx_write_ack(&mut self, data: &[u8], pipe: u8) -> Result<(), Self::FifoErrorType> {
        if pipe > 5 {
            return Err(Nrf24Error::InvalidPipe(pipe));
        }
        self.command_with_data(commands::W_ACK_PAYLOAD | pipe, truncate(data))
    }

    fn tx_write_payload(&mut self, data: &[u8]) -> Result<(), Self::FifoErrorType> {
        self.command_with_data(commands::W_TX_PAYLOAD, truncate(data))
    }

    fn tx_reuse(&mut self) -> Result<(), Self::FifoErrorType> {
        self.command(commands::REUSE_TX_PL)
    }

    fn set_ack_pipe(&mut self, pipe: u8) -> Result<(), Self::FifoErrorType> {
        if pipe > 5 {
            return Err(Nrf24Error::InvalidPipe(pipe));
        }
        self.ack_pipe = pipe;
        Ok(())
    }

    fn ack_pipe(&self) -> u8 {
        self.ack_pipe
    }

    fn rx_read(&mut self, buf: &mut [u8; 32]) -> Result<Received, Self::FifoErrorType> {
        let mut width = [0u8];
        self.command_read(commands::R_RX_PL_WID, &mut width)?;
        if width[0] == 0 {
            debug!("no data in RX FIFO");
            return Err(Nrf24Error::NoData);
        }
        let len = (width[0] as usize).min(MAX_PAYLOAD);
        let pipe = self.read_field(fields::RX_P_NO)?;
        self.command_read(commands::R_RX_PAYLOAD, &mut buf[..len])?;
        Ok(Received { len, pipe })
    }

    fn tx_flush(&mut self) -> Result<(), Self::FifoErrorType> {
        self.command(commands::FLUSH_TX)
    }

    fn rx_flush(&mut self) -> Result<(), Self::FifoErrorType> {
        self.command(commands::FLUSH_RX)
    }
}
