//! Decoding of the STATUS register into application events.

use bitflags::bitflags;

use crate::radio::nrf24::fields;

bitflags! {
    /// Events that a caller's loop reacts to.
    ///
    /// [`Events::TX_SENT`] and [`Events::HAS_RX_DATA`] may be reported together
    /// ([`Events::TX_RX_OK`]). [`Events::TX_FAIL`] is always reported alone.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Events: u8 {
        /// A payload was sent (and acknowledged if auto-ack is enabled).
        const TX_SENT = 1 << 0;
        /// The RX FIFO holds at least one payload.
        const HAS_RX_DATA = 1 << 1;
        /// The retransmit budget was exhausted without an acknowledgement.
        ///
        /// Only meaningful in [`Role::Transmitter`](crate::Role::Transmitter).
        /// Transmission stays on hold until the flag is cleared with
        /// [`EsbStatus::clear_tx_fail()`](fn@crate::radio::prelude::EsbStatus::clear_tx_fail).
        const TX_FAIL = 1 << 2;
        /// Sent and received in the same status snapshot.
        const TX_RX_OK = Self::TX_SENT.bits() | Self::HAS_RX_DATA.bits();
    }
}

impl Events {
    /// STATUS bits that matter for the fast path: IRQ flags and the RX pipe field.
    const EVENT_MASK: u8 = 0x7E;
    /// The value of [`Self::EVENT_MASK`] bits when nothing happened (RX pipe = 7).
    const IDLE: u8 = 0x0E;

    /// Turn a captured STATUS byte into an event set.
    ///
    /// This performs no I/O. The RX pipe field is consulted in addition to the
    /// RX_DR flag because the flag may have been cleared already while the
    /// RX FIFO still holds data.
    pub fn decode(status: u8) -> Self {
        if status & Self::EVENT_MASK == Self::IDLE {
            return Self::empty();
        }

        let mut events = Self::empty();
        if fields::TX_DS.get(status) != 0 {
            events |= Self::TX_SENT;
        }
        if fields::RX_DR.get(status) != 0 || fields::RX_P_NO.get(status) <= 5 {
            events |= Self::HAS_RX_DATA;
        }
        if fields::MAX_RT.get(status) != 0 {
            events = Self::TX_FAIL;
        }
        events
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Events {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Events({=u8:#x})", self.bits())
    }
}
