use crate::{
    radio::{prelude::EsbPower, Nrf24, Nrf24Error},
    Transport,
};

use super::fields;

impl<T: Transport> EsbPower for Nrf24<T> {
    type PowerErrorType = Nrf24Error<T::Error>;

    fn power_up(&mut self) -> Result<(), Self::PowerErrorType> {
        self.modify_field(fields::PWR_UP, 1)
    }

    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        self.modify_field(fields::PWR_UP, 0)
    }

    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType> {
        Ok(self.read_field(fields::PWR_UP)? == 1)
    }

    fn radio_on(&mut self) -> Result<(), Self::PowerErrorType> {
        self.transport
            .set_chip_enable(true)
            .map_err(Nrf24Error::Transport)?;
        self.radio_on = true;
        Ok(())
    }

    fn radio_off(&mut self) -> Result<(), Self::PowerErrorType> {
        self.transport
            .set_chip_enable(false)
            .map_err(Nrf24Error::Transport)?;
        self.radio_on = false;
        Ok(())
    }

    fn is_radio_on(&self) -> bool {
        self.radio_on
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::EsbPower;
    use crate::{
        radio::{nrf24::registers, Nrf24Error},
        test::{mk_device, BusFault, Op, RegisterStore},
    };
    use std::vec;

    #[test]
    fn power_up_down() {
        let mut store = RegisterStore::default();
        store.set_reg(registers::CONFIG, 0x0C);
        let mut device = mk_device(&mut store);
        assert!(!device.is_powered().unwrap());
        device.power_up().unwrap();
        assert!(device.is_powered().unwrap());
        assert_eq!(device.transport.reg(registers::CONFIG), 0x0E);
        device.power_down().unwrap();
        assert!(!device.is_powered().unwrap());
        assert_eq!(store.reg(registers::CONFIG), 0x0C);
    }

    #[test]
    fn radio_on_off() {
        let mut store = RegisterStore::default();
        let mut device = mk_device(&mut store);
        assert!(!device.is_radio_on());
        device.radio_on().unwrap();
        assert!(device.is_radio_on());
        assert!(device.transport.ce);
        device.radio_off().unwrap();
        assert!(!device.is_radio_on());
        assert_eq!(store.ops, vec![Op::ChipEnable(true), Op::ChipEnable(false)]);
    }

    #[test]
    fn radio_flag_unchanged_on_failure() {
        let mut store = RegisterStore::default();
        store.fail_all = true;
        let mut device = mk_device(&mut store);
        assert_eq!(device.radio_on(), Err(Nrf24Error::Transport(BusFault)));
        assert!(!device.is_radio_on());
    }
}
