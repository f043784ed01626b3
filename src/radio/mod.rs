//! A module to encapsulate all things related to radio operation.
pub mod prelude;

pub mod nrf24;
pub use nrf24::{Nrf24, Nrf24Error, Received, DEFAULT_REGISTERS};

mod config;
pub use config::UserConfig;
