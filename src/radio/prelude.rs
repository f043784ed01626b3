//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use nrf24::radio::prelude::*;
//! ```

use crate::{
    types::{FifoStatus, ObserveTx, StatusFlags},
    Events, RegVal, Role,
};

use super::{Received, UserConfig};

/// A trait to represent power and radio (CE pin) control
/// for an ESB capable transceiver.
pub trait EsbPower {
    type PowerErrorType;

    /// Set the `PWR_UP` bit in the CONFIG register.
    ///
    /// The radio needs up to 1.5 ms (depending on crystal) to reach standby mode
    /// before [`EsbPower::radio_on()`] has any effect.
    fn power_up(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Clear the `PWR_UP` bit in the CONFIG register.
    ///
    /// In full power down mode (a sleep state), the radio will consume approximately
    /// 900nA (.0009mA). Register contents are kept.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Is the `PWR_UP` bit set?
    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType>;

    /// Drive CE high, allowing the radio to transmit or listen.
    fn radio_on(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Drive CE low, putting the radio in standby mode.
    fn radio_off(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Was the radio last switched on with [`EsbPower::radio_on()`]?
    fn is_radio_on(&self) -> bool;
}

/// A trait to represent manipulation of status flags
/// for an ESB capable transceiver.
pub trait EsbStatus {
    type StatusErrorType;

    /// Read the raw STATUS register.
    fn read_status(&mut self) -> Result<u8, Self::StatusErrorType>;

    /// Read the STATUS register as a typed snapshot.
    fn status_flags(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;

    /// Clear the RX_DR and TX_DS flags present in a previously read `status`.
    ///
    /// MAX_RT is never cleared here, because clearing it resumes a held
    /// transmission. Use [`EsbStatus::clear_tx_fail()`] for that.
    /// Nothing is written if neither RX_DR nor TX_DS is set in `status`.
    fn clear_status(&mut self, status: u8) -> Result<(), Self::StatusErrorType>;

    /// Read the STATUS register, then clear the flags it reported
    /// (see [`EsbStatus::clear_status()`]). Returns the value read.
    fn read_and_clear_status(&mut self) -> Result<u8, Self::StatusErrorType>;

    /// Clear every IRQ flag (MAX_RT included) and the lost packet counter.
    fn clear_all_status(&mut self) -> Result<(), Self::StatusErrorType>;

    /// Clear only the MAX_RT flag.
    ///
    /// A transmitter holds its current payload after reaching the retransmit
    /// limit. This resumes it.
    fn clear_tx_fail(&mut self) -> Result<(), Self::StatusErrorType>;

    /// Flush both FIFOs.
    fn clear_all_fifo(&mut self) -> Result<(), Self::StatusErrorType>;

    /// Flush both FIFOs, then clear every status flag.
    fn clear_all(&mut self) -> Result<(), Self::StatusErrorType>;

    /// Read the auto-retransmit and lost packet counters.
    fn read_observe(&mut self) -> Result<ObserveTx, Self::StatusErrorType>;

    /// Read and clear STATUS, then decode what was read into [`Events`].
    ///
    /// This is the step to call in an event loop.
    fn poll_events(&mut self) -> Result<Events, Self::StatusErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for an ESB capable transceiver.
pub trait EsbFifo {
    type FifoErrorType;

    /// Read the FIFO_STATUS register as a typed snapshot.
    fn fifo_status(&mut self) -> Result<FifoStatus, Self::FifoErrorType>;

    /// Is there a free slot in the TX FIFO?
    fn tx_has_space(&mut self) -> Result<bool, Self::FifoErrorType>;

    /// Is the TX FIFO empty?
    fn tx_is_empty(&mut self) -> Result<bool, Self::FifoErrorType>;

    /// Is there at least one payload in the RX FIFO?
    fn rx_has_data(&mut self) -> Result<bool, Self::FifoErrorType>;

    /// Are all 3 RX FIFO slots occupied?
    fn rx_is_full(&mut self) -> Result<bool, Self::FifoErrorType>;

    /// Put `data` into the TX FIFO according to the current role.
    ///
    /// As a transmitter this is a plain payload. As a receiver this is an ACK
    /// payload for the pipe selected with [`EsbFifo::set_ack_pipe()`].
    ///
    /// No check for free space is made; use [`EsbFifo::tx_has_space()`] first.
    /// Only the first 32 bytes of `data` are used.
    fn tx_write(&mut self, data: &[u8]) -> Result<(), Self::FifoErrorType>;

    /// Put `data` into the TX FIFO as a payload that requests no ACK.
    ///
    /// This is rejected as a receiver (`NotAsTx`) without touching the bus.
    fn tx_write_no_ack(&mut self, data: &[u8]) -> Result<(), Self::FifoErrorType>;

    /// Put `data` into the TX FIFO as an ACK payload for `pipe` (0 - 5).
    fn tx_write_ack(&mut self, data: &[u8], pipe: u8) -> Result<(), Self::FifoErrorType>;

    /// Put `data` into the TX FIFO as a plain payload.
    fn tx_write_payload(&mut self, data: &[u8]) -> Result<(), Self::FifoErrorType>;

    /// Transmit the last sent payload again, for as long as CE is high.
    fn tx_reuse(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Select the pipe that [`EsbFifo::tx_write()`] attaches ACK payloads to.
    ///
    /// The selection is kept until changed or until the device is re-initialized.
    fn set_ack_pipe(&mut self, pipe: u8) -> Result<(), Self::FifoErrorType>;

    /// The pipe set by [`EsbFifo::set_ack_pipe()`].
    fn ack_pipe(&self) -> u8;

    /// Read the payload on top of the RX FIFO into `buf`.
    ///
    /// The caller should confirm data is available with [`EsbFifo::rx_has_data()`].
    /// Otherwise the reported width and pipe may not belong together.
    fn rx_read(&mut self, buf: &mut [u8; 32]) -> Result<Received, Self::FifoErrorType>;

    /// Discard everything in the TX FIFO.
    fn tx_flush(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Discard everything in the RX FIFO.
    fn rx_flush(&mut self) -> Result<(), Self::FifoErrorType>;
}

/// A trait to represent the primary role of an ESB capable transceiver.
pub trait EsbRole {
    type RoleErrorType;

    /// Change the primary role.
    ///
    /// Nothing happens if `role` is the current role. Otherwise both FIFOs are
    /// flushed and all status flags are cleared before the PRIM_RX bit is updated.
    fn switch_role(&mut self, role: Role) -> Result<(), Self::RoleErrorType>;

    /// Update the PRIM_RX bit without flushing FIFOs or clearing flags.
    ///
    /// The caller asserts that leftover payloads and flags do not matter.
    fn switch_role_directly(&mut self, role: Role) -> Result<(), Self::RoleErrorType>;

    /// The role this instance believes the radio is in.
    fn role(&self) -> Role;

    fn is_receiver(&self) -> bool {
        self.role() == Role::Receiver
    }

    fn is_transmitter(&self) -> bool {
        self.role() == Role::Transmitter
    }
}

/// A trait to apply a [`UserConfig`] to an ESB capable transceiver.
pub trait EsbUserConfig {
    type ConfigErrorType;

    /// Write every register governed by [`UserConfig`].
    fn write_config_directly(&mut self, config: &UserConfig) -> Result<(), Self::ConfigErrorType>;

    /// Write only the registers whose fields differ between `old` and `new`.
    ///
    /// Without `old`, this is the same as [`EsbUserConfig::write_config_directly()`].
    fn write_config_diff(
        &mut self,
        old: Option<&UserConfig>,
        new: &UserConfig,
    ) -> Result<(), Self::ConfigErrorType>;

    /// Reconstruct a [`UserConfig`] from the radio's registers.
    ///
    /// This issues 10 register reads. Avoid calling it in a tight loop.
    fn read_config(&mut self) -> Result<UserConfig, Self::ConfigErrorType>;

    /// Like [`EsbUserConfig::write_config_directly()`], but switches the radio
    /// off for the duration of the update if it is on.
    fn write_config(&mut self, config: &UserConfig) -> Result<(), Self::ConfigErrorType>;
}

/// A trait to represent the lifecycle of an ESB capable transceiver.
pub trait EsbDevice {
    type DeviceErrorType;

    /// Verify that a radio is connected and responding.
    ///
    /// The pipe 0 address is changed, read back and then always restored.
    fn check_device(&mut self) -> Result<(), Self::DeviceErrorType>;

    /// [`EsbDevice::setup_with()`] the default [`UserConfig`] and
    /// [`DEFAULT_REGISTERS`](constant@crate::radio::DEFAULT_REGISTERS).
    fn setup(&mut self, role: Role) -> Result<(), Self::DeviceErrorType>;

    /// Bring the radio into a known, running state.
    ///
    /// 1. [`EsbDevice::check_device()`]; on failure nothing else is done.
    /// 2. Power down and switch the radio off.
    /// 3. Flush both FIFOs and clear all status flags.
    /// 4. Write `registers`, then `config`.
    /// 5. Set the role, power up and switch the radio on.
    ///
    /// This is safe to call again at any time.
    fn setup_with(
        &mut self,
        role: Role,
        config: &UserConfig,
        registers: &[RegVal],
    ) -> Result<(), Self::DeviceErrorType>;
}

/// A trait to dump the radio's configuration for debugging.
pub trait EsbDetails {
    type DetailsErrorType;

    /// Print every register field with its live value, followed by the
    /// TX and pipe 0/1 addresses.
    ///
    /// Output goes to `defmt::println!()` on bare metal targets with the
    /// `defmt` feature, or to `std::println!()` with the `std` feature.
    /// Otherwise this does nothing.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}
