#![doc = include_str!("../README.md")]
//!
//! ## Register API
//!
//! - [`Nrf24::read_register()`](fn@crate::radio::Nrf24::read_register)
//! - [`Nrf24::read_registers()`](fn@crate::radio::Nrf24::read_registers)
//! - [`Nrf24::write_register()`](fn@crate::radio::Nrf24::write_register)
//! - [`Nrf24::write_registers()`](fn@crate::radio::Nrf24::write_registers)
//! - [`Nrf24::modify_register_bits()`](fn@crate::radio::Nrf24::modify_register_bits)
//! - [`Nrf24::write_register_list()`](fn@crate::radio::Nrf24::write_register_list)
//! - [`get_bits()`] and [`set_bits()`]
//!
//! ## Basic API
//!
//! - [`Nrf24::init()`](fn@crate::radio::Nrf24::init)
//! - [`Nrf24::deinit()`](fn@crate::radio::Nrf24::deinit)
//! - [`EsbDevice::setup()`](fn@crate::radio::prelude::EsbDevice::setup)
//! - [`EsbRole::switch_role()`](fn@crate::radio::prelude::EsbRole::switch_role)
//! - [`EsbFifo::tx_write()`](fn@crate::radio::prelude::EsbFifo::tx_write)
//! - [`EsbFifo::rx_read()`](fn@crate::radio::prelude::EsbFifo::rx_read)
//! - [`EsbStatus::poll_events()`](fn@crate::radio::prelude::EsbStatus::poll_events)
//! - [`Events::decode()`]
//! - [`EsbDetails::print_details()`](fn@crate::radio::prelude::EsbDetails::print_details)
//!
//! ## Configuration API
//!
//! - [`UserConfig`](struct@crate::radio::UserConfig)
//! - [`EsbUserConfig::write_config()`](fn@crate::radio::prelude::EsbUserConfig::write_config)
//! - [`EsbUserConfig::write_config_diff()`](fn@crate::radio::prelude::EsbUserConfig::write_config_diff)
//! - [`EsbUserConfig::read_config()`](fn@crate::radio::prelude::EsbUserConfig::read_config)
//! - [`DEFAULT_REGISTERS`](constant@crate::radio::DEFAULT_REGISTERS)
//!
#![no_std]

#[macro_use]
mod fmt;

mod types;
pub use types::{DataRate, FifoStatus, ObserveTx, RegVal, RfPower, Role, StatusFlags};
mod events;
pub use events::Events;
mod transport;
pub use transport::{HalError, HalTransport, Transport};
pub mod radio;
pub use radio::nrf24::{get_bits, set_bits, Field};
