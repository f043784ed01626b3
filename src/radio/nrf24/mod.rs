use crate::{RegVal, Role, Transport};

mod bits;
pub use bits::{get_bits, set_bits, Field};
mod constants;
pub use constants::{commands, fields, registers, DEFAULT_REGISTERS};
mod details;
mod fifo;
pub use fifo::Received;
mod init;
mod power;
mod role;
mod status;
mod user_config;

/// An collection of error types to describe radio and bus failures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<E> {
    /// A single transport transaction failed.
    Transport(E),
    /// A multi-step operation finished, but `failed` of its steps did not succeed.
    ///
    /// Steps are never skipped because an earlier one failed.
    Incomplete { failed: u8 },
    /// The radio did not echo back what was written to it.
    DeviceNotFound,
    /// The RX FIFO reported a payload width of 0.
    NoData,
    /// The operation is only allowed in [`Role::Transmitter`].
    NotAsTx,
    /// A pipe number greater than 5 was given.
    InvalidPipe(u8),
}

/// Counts failed steps of a multi-step operation.
pub(crate) struct Tally {
    failed: u8,
}

impl Tally {
    pub(crate) const fn new() -> Self {
        Self { failed: 0 }
    }

    /// Take note of a step's result, giving back its value on success.
    pub(crate) fn track<V, E>(&mut self, result: Result<V, Nrf24Error<E>>) -> Option<V> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                let failed = match err {
                    Nrf24Error::Incomplete { failed } => failed,
                    _ => 1,
                };
                self.failed = self.failed.saturating_add(failed);
                warn!("step failed ({} so far)", self.failed);
                None
            }
        }
    }

    pub(crate) fn finish<E>(self) -> Result<(), Nrf24Error<E>> {
        if self.failed == 0 {
            Ok(())
        } else {
            Err(Nrf24Error::Incomplete {
                failed: self.failed,
            })
        }
    }
}

/// A driver for one nRF24L01 radio.
///
/// The instance owns its [`Transport`]. To keep ownership elsewhere, pass
/// `&mut transport` instead; [`Transport`] is implemented for mutable references.
pub struct Nrf24<T> {
    transport: T,
    role: Role,
    ack_pipe: u8,
    radio_on: bool,
}

impl<T: Transport> Nrf24<T> {
    fn opcode_read(reg: u8) -> u8 {
        commands::R_REGISTER | (reg & registers::ADDRESS_MASK)
    }

    fn opcode_write(reg: u8) -> u8 {
        commands::W_REGISTER | (reg & registers::ADDRESS_MASK)
    }

    /// Send a command that consists of a single byte.
    fn command(&mut self, opcode: u8) -> Result<(), Nrf24Error<T::Error>> {
        self.transport
            .spi_send(&[opcode])
            .map_err(Nrf24Error::Transport)
    }

    /// Send a command followed by a data buffer.
    fn command_with_data(&mut self, opcode: u8, data: &[u8]) -> Result<(), Nrf24Error<T::Error>> {
        self.transport
            .spi_send_then_send(&[opcode], data)
            .map_err(Nrf24Error::Transport)
    }

    /// Send a command and read back `buf.len()` bytes.
    fn command_read(&mut self, opcode: u8, buf: &mut [u8]) -> Result<(), Nrf24Error<T::Error>> {
        self.transport
            .spi_send_then_receive(&[opcode], buf)
            .map_err(Nrf24Error::Transport)
    }

    /// Read a single byte register.
    pub fn read_register(&mut self, reg: u8) -> Result<u8, Nrf24Error<T::Error>> {
        let mut buf = [0u8];
        self.command_read(Self::opcode_read(reg), &mut buf)?;
        Ok(buf[0])
    }

    /// Read `buf.len()` bytes from a register (e.g. 5 for an address register).
    pub fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Nrf24Error<T::Error>> {
        self.command_read(Self::opcode_read(reg), buf)
    }

    /// Write a single byte register.
    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Nrf24Error<T::Error>> {
        self.transport
            .spi_send(&[Self::opcode_write(reg), value])
            .map_err(Nrf24Error::Transport)
    }

    /// Write several bytes to a register (e.g. 5 for an address register).
    pub fn write_registers(&mut self, reg: u8, values: &[u8]) -> Result<(), Nrf24Error<T::Error>> {
        self.command_with_data(Self::opcode_write(reg), values)
    }

    /// Read a register, replace the bits covered by `mask` with `value`, and write it back.
    ///
    /// `mask` must be contiguous; see [`set_bits()`].
    /// Nothing is written if the read fails.
    pub fn modify_register_bits(
        &mut self,
        reg: u8,
        mask: u8,
        value: u8,
    ) -> Result<(), Nrf24Error<T::Error>> {
        let current = self.read_register(reg)?;
        self.write_register(reg, set_bits(current, mask, value))
    }

    /// Set a named [`Field`] to `value` (read-modify-write).
    pub fn modify_field(&mut self, field: Field, value: u8) -> Result<(), Nrf24Error<T::Error>> {
        self.modify_register_bits(field.register, field.mask, value)
    }

    /// Read a named [`Field`].
    pub fn read_field(&mut self, field: Field) -> Result<u8, Nrf24Error<T::Error>> {
        self.read_register(field.register).map(|value| field.get(value))
    }

    /// Set every bit of `mask` in a register (read-modify-write).
    pub fn set_register_bits(&mut self, reg: u8, mask: u8) -> Result<(), Nrf24Error<T::Error>> {
        let current = self.read_register(reg)?;
        self.write_register(reg, current | mask)
    }

    /// Clear every bit of `mask` in a register (read-modify-write).
    pub fn reset_register_bits(&mut self, reg: u8, mask: u8) -> Result<(), Nrf24Error<T::Error>> {
        let current = self.read_register(reg)?;
        self.write_register(reg, current & !mask)
    }

    /// Write `value` to a register only if it holds something else.
    ///
    /// Returns `true` if a write was issued.
    pub fn sync_register(&mut self, reg: u8, value: u8) -> Result<bool, Nrf24Error<T::Error>> {
        if self.read_register(reg)? == value {
            return Ok(false);
        }
        self.write_register(reg, value)?;
        Ok(true)
    }

    /// Write each [`RegVal`] in order.
    ///
    /// Every entry is attempted. Failures are reported as a count in
    /// [`Nrf24Error::Incomplete`].
    pub fn write_register_list(&mut self, list: &[RegVal]) -> Result<(), Nrf24Error<T::Error>> {
        let mut tally = Tally::new();
        for entry in list {
            tally.track(self.write_register(entry.reg, entry.val));
        }
        tally.finish()
    }

    /// Send the ACTIVATE command.
    ///
    /// Older nRF24L01 (non-plus) chips need this before DYNPD and FEATURE can be
    /// written. nRF24L01+ chips ignore it.
    pub fn activate(&mut self) -> Result<(), Nrf24Error<T::Error>> {
        self.transport
            .spi_send(&[commands::ACTIVATE, commands::ACTIVATE_MAGIC])
            .map_err(Nrf24Error::Transport)
    }
}
