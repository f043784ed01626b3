//! The bus binding that a [`Nrf24`](crate::radio::Nrf24) drives.

use embedded_hal::{
    delay::DelayNs,
    digital::OutputPin,
    spi::{Operation, SpiDevice},
};

/// The capabilities required from a platform to talk to the radio.
///
/// Every SPI method is exactly one bus transaction (CSN asserted for its whole
/// duration). Buffers never exceed 33 bytes: an opcode plus a 32 byte payload.
pub trait Transport {
    type Error;

    /// Prepare the platform resources. Called once by
    /// [`Nrf24::init()`](fn@crate::radio::Nrf24::init).
    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Release the platform resources. Called once by
    /// [`Nrf24::deinit()`](fn@crate::radio::Nrf24::deinit).
    fn deinit(&mut self) {}

    /// Drive the radio's CE pin.
    fn set_chip_enable(&mut self, high: bool) -> Result<(), Self::Error>;

    /// Send `buf`, ignoring anything clocked in.
    fn spi_send(&mut self, buf: &[u8]) -> Result<(), Self::Error>;

    /// Send `first` then `second` within the same transaction.
    fn spi_send_then_send(&mut self, first: &[u8], second: &[u8]) -> Result<(), Self::Error>;

    /// Send `write` then clock in `read.len()` bytes within the same transaction.
    fn spi_send_then_receive(&mut self, write: &[u8], read: &mut [u8]) -> Result<(), Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        T::init(self)
    }

    fn deinit(&mut self) {
        T::deinit(self)
    }

    fn set_chip_enable(&mut self, high: bool) -> Result<(), Self::Error> {
        T::set_chip_enable(self, high)
    }

    fn spi_send(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        T::spi_send(self, buf)
    }

    fn spi_send_then_send(&mut self, first: &[u8], second: &[u8]) -> Result<(), Self::Error> {
        T::spi_send_then_send(self, first, second)
    }

    fn spi_send_then_receive(&mut self, write: &[u8], read: &mut [u8]) -> Result<(), Self::Error> {
        T::spi_send_then_receive(self, write, read)
    }
}

/// An collection of error types to describe hardware malfunctions in [`HalTransport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HalError<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error.
    Gpo(DO),
}

/// A [`Transport`] built on `embedded-hal` traits.
///
/// The radio's CSN pin (aka Chip Select pin) shall be defined
/// when instantiating the [`SpiDevice`] object (passed to the `spi` parameter).
pub struct HalTransport<SPI, DO, DELAY> {
    spi: SPI,
    ce_pin: DO,
    delay_impl: DELAY,
}

impl<SPI, DO, DELAY> HalTransport<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Time for the radio to settle after power-on reset, in microseconds.
    const SETTLE_US: u32 = 5000;

    pub fn new(spi: SPI, ce_pin: DO, delay_impl: DELAY) -> Self {
        Self {
            spi,
            ce_pin,
            delay_impl,
        }
    }

    /// Give back the bus, CE pin and delay objects.
    pub fn release(self) -> (SPI, DO, DELAY) {
        (self.spi, self.ce_pin, self.delay_impl)
    }
}

impl<SPI, DO, DELAY> Transport for HalTransport<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type Error = HalError<SPI::Error, DO::Error>;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.ce_pin.set_low().map_err(HalError::Gpo)?;
        // configuration bits may not stick if written before the radio settles
        self.delay_impl.delay_us(Self::SETTLE_US);
        Ok(())
    }

    fn deinit(&mut self) {
        // nothing useful can be done about a failing pin while tearing down
        let _ = self.ce_pin.set_low();
    }

    fn set_chip_enable(&mut self, high: bool) -> Result<(), Self::Error> {
        if high {
            self.ce_pin.set_high().map_err(HalError::Gpo)
        } else {
            self.ce_pin.set_low().map_err(HalError::Gpo)
        }
    }

    fn spi_send(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        self.spi.write(buf).map_err(HalError::Spi)
    }

    fn spi_send_then_send(&mut self, first: &[u8], second: &[u8]) -> Result<(), Self::Error> {
        self.spi
            .transaction(&mut [Operation::Write(first), Operation::Write(second)])
            .map_err(HalError::Spi)
    }

    fn spi_send_then_receive(&mut self, write: &[u8], read: &mut [u8]) -> Result<(), Self::Error> {
        self.spi
            .transaction(&mut [Operation::Write(write), Operation::Read(read)])
            .map_err(HalError::Spi)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{HalTransport, Transport};
    use crate::{
        radio::nrf24::{commands, registers},
        spi_test_expects,
    };
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction},
        spi::{Mock as SpiMock, Transaction as SpiTransaction},
    };
    use std::vec;

    fn mk_transport(
        ce_expectations: &[PinTransaction],
        spi_expectations: &[SpiTransaction<u8>],
    ) -> (HalTransport<SpiMock<u8>, PinMock, NoopDelay>, SpiMock<u8>, PinMock) {
        let spi = SpiMock::new(spi_expectations);
        let ce_pin = PinMock::new(ce_expectations);
        let transport = HalTransport::new(spi.clone(), ce_pin.clone(), NoopDelay);
        (transport, spi, ce_pin)
    }

    #[test]
    fn init_drives_ce_low() {
        let (mut transport, mut spi, mut ce_pin) =
            mk_transport(&[PinTransaction::set(PinState::Low)], &[]);
        transport.init().unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn chip_enable() {
        let (mut transport, mut spi, mut ce_pin) = mk_transport(
            &[
                PinTransaction::set(PinState::High),
                PinTransaction::set(PinState::Low),
            ],
            &[],
        );
        transport.set_chip_enable(true).unwrap();
        transport.set_chip_enable(false).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn register_write_framing() {
        let spi_expectations = spi_test_expects![
            // write_register(RF_CH, 76)
            (vec![registers::RF_CH | commands::W_REGISTER, 76u8]),
        ];
        let (mut transport, mut spi, mut ce_pin) = mk_transport(&[], &spi_expectations);
        transport
            .spi_send(&[registers::RF_CH | commands::W_REGISTER, 76])
            .unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn address_write_framing() {
        let spi_expectations = spi_test_expects![
            // write_registers(TX_ADDR, [0xE7; 5])
            (vec![registers::TX_ADDR | commands::W_REGISTER], vec![0xE7u8; 5]),
        ];
        let (mut transport, mut spi, mut ce_pin) = mk_transport(&[], &spi_expectations);
        transport
            .spi_send_then_send(&[registers::TX_ADDR | commands::W_REGISTER], &[0xE7; 5])
            .unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn register_read_framing() {
        let spi_expectations = spi_test_expects![
            // read_register(FIFO_STATUS)
            (vec![registers::FIFO_STATUS] => vec![0x11u8]),
        ];
        let (mut transport, mut spi, mut ce_pin) = mk_transport(&[], &spi_expectations);
        let mut buf = [0u8; 1];
        transport
            .spi_send_then_receive(&[registers::FIFO_STATUS], &mut buf)
            .unwrap();
        assert_eq!(buf[0], 0x11);
        spi.done();
        ce_pin.done();
    }
}
