//! This module defines value types shared by the radio implementation.
//! These types carry no bus access of their own.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// The radio's primary role.
///
/// The role decides what [`EsbFifo::tx_write()`](fn@crate::radio::prelude::EsbFifo::tx_write)
/// puts into the TX FIFO and whether a "TX failed" event is meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Primary transmitter (PTX). This is the role the radio powers up with.
    Transmitter,
    /// Primary receiver (PRX). Outgoing data is attached to automatic ACK packets.
    Receiver,
}

impl Role {
    /// The value of the `PRIM_RX` bit in the CONFIG register.
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            Role::Transmitter => 0,
            Role::Receiver => 1,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & 1 {
            0 => Role::Transmitter,
            _ => Role::Receiver,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Role {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Role::Transmitter => defmt::write!(fmt, "PTX"),
            Role::Receiver => defmt::write!(fmt, "PRX"),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Role::Transmitter => write!(f, "PTX"),
            Role::Receiver => write!(f, "PRX"),
        }
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataRate {
    /// represents 1 Mbps
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
}

impl DataRate {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 1,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value {
            0 => DataRate::Mbps1,
            _ => DataRate::Mbps2,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
        }
    }
}

/// RF output power. The units dBm (decibel-milliwatts or dB<sub>mW</sub>)
/// represents a logarithmic signal loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RfPower {
    /// -18 dBm
    Neg18dBm,
    /// -12 dBm
    Neg12dBm,
    /// -6 dBm
    Neg6dBm,
    /// 0 dBm
    Zero,
}

impl RfPower {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            RfPower::Neg18dBm => 0,
            RfPower::Neg12dBm => 1,
            RfPower::Neg6dBm => 2,
            RfPower::Zero => 3,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value {
            0 => RfPower::Neg18dBm,
            1 => RfPower::Neg12dBm,
            2 => RfPower::Neg6dBm,
            _ => RfPower::Zero,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RfPower {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            RfPower::Neg18dBm => defmt::write!(fmt, "-18 dBm"),
            RfPower::Neg12dBm => defmt::write!(fmt, "-12 dBm"),
            RfPower::Neg6dBm => defmt::write!(fmt, "-6 dBm"),
            RfPower::Zero => defmt::write!(fmt, "0 dBm"),
        }
    }
}

impl Display for RfPower {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            RfPower::Neg18dBm => write!(f, "-18 dBm"),
            RfPower::Neg12dBm => write!(f, "-12 dBm"),
            RfPower::Neg6dBm => write!(f, "-6 dBm"),
            RfPower::Zero => write!(f, "0 dBm"),
        }
    }
}

/// A register address paired with the value to write there.
///
/// Lists of these are applied in order by
/// [`Nrf24::write_register_list()`](fn@crate::radio::Nrf24::write_register_list).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegVal {
    pub reg: u8,
    pub val: u8,
}

impl RegVal {
    pub const fn new(reg: u8, val: u8) -> Self {
        Self { reg, val }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RegVal {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "RegVal {=u8:#x} <- {=u8:#x}", self.reg, self.val)
    }
}

/// A snapshot of the STATUS register.
///
/// Use [`StatusFlags::from_bits`] on a byte returned by
/// [`EsbStatus::read_status()`](fn@crate::radio::prelude::EsbStatus::read_status).
#[bitfield(u8, new = false, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// A flag to describe if RX Data Ready to read.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent.
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// A flag to describe if the maximum number of retransmits was reached.
    #[bits(1, access = RO)]
    pub max_rt: bool,

    /// The pipe number of the payload on top of the RX FIFO. `7` means empty.
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// A flag to describe if the TX FIFO is full.
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags. Useful for STATUS and CONFIG registers.
    pub const IRQ_MASK: u8 = 0x70;
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}, rx_pipe: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt(),
            self.rx_pipe()
        )
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}, rx_pipe: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt(),
            self.rx_pipe()
        )
    }
}

/// A snapshot of the FIFO_STATUS register.
#[bitfield(u8, new = false, order = Msb)]
pub struct FifoStatus {
    #[bits(1)]
    _padding: u8,

    /// The last TX payload is being reused (see `REUSE_TX_PL` command).
    #[bits(1, access = RO)]
    pub tx_reuse: bool,

    #[bits(1, access = RO)]
    pub tx_full: bool,

    #[bits(1, access = RO)]
    pub tx_empty: bool,

    #[bits(2)]
    _reserved: u8,

    #[bits(1, access = RO)]
    pub rx_full: bool,

    #[bits(1, access = RO)]
    pub rx_empty: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for FifoStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "FifoStatus tx_full: {}, tx_empty: {}, rx_full: {}, rx_empty: {}",
            self.tx_full(),
            self.tx_empty(),
            self.rx_full(),
            self.rx_empty()
        )
    }
}

/// A snapshot of the OBSERVE_TX register.
#[bitfield(u8, new = false, order = Msb)]
pub struct ObserveTx {
    /// Count of lost packets. Reset by writing the RF_CH register.
    #[bits(4, access = RO)]
    pub plos_cnt: u8,

    /// Count of retransmitted packets for the last transmission.
    #[bits(4, access = RO)]
    pub arc_cnt: u8,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ObserveTx {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ObserveTx plos_cnt: {}, arc_cnt: {}",
            self.plos_cnt(),
            self.arc_cnt()
        )
    }
}
