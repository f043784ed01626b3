use crate::{
    radio::{prelude::EsbDetails, Nrf24, Nrf24Error},
    Transport,
};

#[cfg(any(
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
use super::{fields, registers};

#[cfg(feature = "std")]
extern crate std;

/// Registers holding a full address, printed after the field table.
#[cfg(any(
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
const ADDRESSES: [(&str, u8); 3] = [
    ("TX_ADDR", registers::TX_ADDR),
    ("RX_ADDR_P0", registers::RX_ADDR_P0),
    ("RX_ADDR_P1", registers::RX_ADDR_P1),
];

impl<T: Transport> EsbDetails for Nrf24<T> {
    type DetailsErrorType = Nrf24Error<T::Error>;

    #[cfg(feature = "defmt")]
    #[cfg(target_os = "none")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        defmt::println!("Primary Mode______________{}", self.role);
        defmt::println!("Radio on__________________{=bool}", self.radio_on);
        defmt::println!("ACK payload pipe__________{=u8}", self.ack_pipe);
        for field in fields::ALL {
            let value = self.read_field(field)?;
            defmt::println!(
                "{=str} (reg {=u8:#04x}, mask {=u8:#04x})__{=u8:#04x}",
                field.name,
                field.register,
                field.mask,
                value
            );
        }
        for (name, reg) in ADDRESSES {
            let mut address = [0u8; 5];
            self.read_registers(reg, &mut address)?;
            defmt::println!("{=str}__{=[u8; 5]:02X}", name, address);
        }
        Ok(())
    }

    #[cfg(not(target_os = "none"))]
    #[cfg(feature = "std")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        std::println!("Primary Mode______________{}", self.role);
        std::println!("Radio on__________________{}", self.radio_on);
        std::println!("ACK payload pipe__________{}", self.ack_pipe);
        for field in fields::ALL {
            let value = self.read_field(field)?;
            std::println!(
                "{:_<26}{value:#04x} (reg {:#04x}, mask {:#04x})",
                field.name,
                field.register,
                field.mask,
            );
        }
        for (name, reg) in ADDRESSES {
            let mut address = [0u8; 5];
            self.read_registers(reg, &mut address)?;
            std::println!("{name:_<26}{address:02X?}");
        }
        Ok(())
    }

    #[cfg(not(any(
        all(feature = "defmt", target_os = "none"),
        all(feature = "std", not(target_os = "none"))
    )))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use super::EsbDetails;
    use crate::test::{mk_device, RegisterStore};

    #[test]
    fn print_details_only_reads() {
        let mut store = RegisterStore::default();
        let mut device = mk_device(&mut store);
        device.print_details().unwrap();
        assert!(store.written().is_empty());
        #[cfg(feature = "std")]
        assert_eq!(store.ops.len(), super::fields::ALL.len() + super::ADDRESSES.len());
    }

    #[test]
    fn print_details_fails_on_bus_error() {
        let mut store = RegisterStore::default();
        store.fail_all = true;
        let mut device = mk_device(&mut store);
        let result = device.print_details();
        #[cfg(feature = "std")]
        assert!(result.is_err());
        #[cfg(not(feature = "std"))]
        assert!(result.is_ok());
    }
}
