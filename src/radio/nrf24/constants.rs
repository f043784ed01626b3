use super::bits::Field;
use crate::RegVal;

/// Register addresses for the nRF24L01.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const OBSERVE_TX: u8 = 0x08;
    pub const RPD: u8 = 0x09;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const RX_ADDR_P1: u8 = 0x0B;
    pub const RX_ADDR_P2: u8 = 0x0C;
    pub const RX_ADDR_P3: u8 = 0x0D;
    pub const RX_ADDR_P4: u8 = 0x0E;
    pub const RX_ADDR_P5: u8 = 0x0F;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;
    pub const RX_PW_P1: u8 = 0x12;
    pub const RX_PW_P2: u8 = 0x13;
    pub const RX_PW_P3: u8 = 0x14;
    pub const RX_PW_P4: u8 = 0x15;
    pub const RX_PW_P5: u8 = 0x16;
    pub const FIFO_STATUS: u8 = 0x17;
    pub const DYNPD: u8 = 0x1C;
    pub const FEATURE: u8 = 0x1D;

    /// Only the lower 5 bits of a register command carry the address.
    pub const ADDRESS_MASK: u8 = 0x1F;
}

/// SPI command opcodes for the nRF24L01.
pub mod commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    pub const ACTIVATE: u8 = 0x50;
    /// The byte that must follow [`ACTIVATE`].
    pub const ACTIVATE_MAGIC: u8 = 0x73;
    pub const R_RX_PL_WID: u8 = 0x60;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    /// OR'd with the target pipe number (0 - 5).
    pub const W_ACK_PAYLOAD: u8 = 0xA8;
    pub const W_TX_PAYLOAD_NO_ACK: u8 = 0xB0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const REUSE_TX_PL: u8 = 0xE3;
    pub const NOP: u8 = 0xFF;
}

/// The canonical table of named register fields.
///
/// Every mask is contiguous, as required by [`get_bits`](fn@crate::get_bits)
/// and [`set_bits`](fn@crate::set_bits).
pub mod fields {
    use super::{registers, Field};

    // CONFIG
    pub const MASK_RX_DR: Field = Field::new("MASK_RX_DR", registers::CONFIG, 1 << 6);
    pub const MASK_TX_DS: Field = Field::new("MASK_TX_DS", registers::CONFIG, 1 << 5);
    pub const MASK_MAX_RT: Field = Field::new("MASK_MAX_RT", registers::CONFIG, 1 << 4);
    pub const EN_CRC: Field = Field::new("EN_CRC", registers::CONFIG, 1 << 3);
    pub const CRCO: Field = Field::new("CRCO", registers::CONFIG, 1 << 2);
    pub const PWR_UP: Field = Field::new("PWR_UP", registers::CONFIG, 1 << 1);
    pub const PRIM_RX: Field = Field::new("PRIM_RX", registers::CONFIG, 1);

    // EN_AA, EN_RXADDR (one bit per pipe)
    pub const ENAA: Field = Field::new("ENAA", registers::EN_AA, 0x3F);
    pub const ERX: Field = Field::new("ERX", registers::EN_RXADDR, 0x3F);

    // SETUP_AW
    pub const AW: Field = Field::new("AW", registers::SETUP_AW, 0x03);

    // SETUP_RETR
    pub const ARD: Field = Field::new("ARD", registers::SETUP_RETR, 0xF0);
    pub const ARC: Field = Field::new("ARC", registers::SETUP_RETR, 0x0F);

    // RF_CH
    pub const RF_CH: Field = Field::new("RF_CH", registers::RF_CH, 0x7F);

    // RF_SETUP
    pub const RF_DR: Field = Field::new("RF_DR", registers::RF_SETUP, 1 << 3);
    pub const RF_PWR: Field = Field::new("RF_PWR", registers::RF_SETUP, 0x06);

    // STATUS
    pub const RX_DR: Field = Field::new("RX_DR", registers::STATUS, 1 << 6);
    pub const TX_DS: Field = Field::new("TX_DS", registers::STATUS, 1 << 5);
    pub const MAX_RT: Field = Field::new("MAX_RT", registers::STATUS, 1 << 4);
    pub const RX_P_NO: Field = Field::new("RX_P_NO", registers::STATUS, 0x0E);
    pub const STATUS_TX_FULL: Field = Field::new("TX_FULL", registers::STATUS, 1);

    // OBSERVE_TX
    pub const PLOS_CNT: Field = Field::new("PLOS_CNT", registers::OBSERVE_TX, 0xF0);
    pub const ARC_CNT: Field = Field::new("ARC_CNT", registers::OBSERVE_TX, 0x0F);

    // RPD
    pub const RPD: Field = Field::new("RPD", registers::RPD, 1);

    // FIFO_STATUS
    pub const TX_REUSE: Field = Field::new("TX_REUSE", registers::FIFO_STATUS, 1 << 6);
    pub const TX_FULL: Field = Field::new("TX_FULL", registers::FIFO_STATUS, 1 << 5);
    pub const TX_EMPTY: Field = Field::new("TX_EMPTY", registers::FIFO_STATUS, 1 << 4);
    pub const RX_FULL: Field = Field::new("RX_FULL", registers::FIFO_STATUS, 1 << 1);
    pub const RX_EMPTY: Field = Field::new("RX_EMPTY", registers::FIFO_STATUS, 1);

    // RX_PW_P0 - RX_PW_P5
    pub const RX_PW_P0: Field = Field::new("RX_PW_P0", registers::RX_PW_P0, 0x3F);
    pub const RX_PW_P1: Field = Field::new("RX_PW_P1", registers::RX_PW_P1, 0x3F);
    pub const RX_PW_P2: Field = Field::new("RX_PW_P2", registers::RX_PW_P2, 0x3F);
    pub const RX_PW_P3: Field = Field::new("RX_PW_P3", registers::RX_PW_P3, 0x3F);
    pub const RX_PW_P4: Field = Field::new("RX_PW_P4", registers::RX_PW_P4, 0x3F);
    pub const RX_PW_P5: Field = Field::new("RX_PW_P5", registers::RX_PW_P5, 0x3F);

    // DYNPD
    pub const DPL: Field = Field::new("DPL", registers::DYNPD, 0x3F);

    // FEATURE
    pub const EN_DPL: Field = Field::new("EN_DPL", registers::FEATURE, 1 << 2);
    pub const EN_ACK_PAY: Field = Field::new("EN_ACK_PAY", registers::FEATURE, 1 << 1);
    pub const EN_DYN_ACK: Field = Field::new("EN_DYN_ACK", registers::FEATURE, 1);

    /// The bit for a given `pipe` in EN_AA, EN_RXADDR or DYNPD.
    pub const fn pipe_mask(pipe: u8) -> u8 {
        1 << pipe
    }

    /// All fields, in register order.
    pub const ALL: [Field; 38] = [
        MASK_RX_DR, MASK_TX_DS, MASK_MAX_RT, EN_CRC, CRCO, PWR_UP, PRIM_RX,
        ENAA, ERX, AW, ARD, ARC, RF_CH, RF_DR, RF_PWR,
        RX_DR, TX_DS, MAX_RT, RX_P_NO, STATUS_TX_FULL,
        PLOS_CNT, ARC_CNT, RPD,
        RX_PW_P0, RX_PW_P1, RX_PW_P2, RX_PW_P3, RX_PW_P4, RX_PW_P5,
        TX_REUSE, TX_FULL, TX_EMPTY, RX_FULL, RX_EMPTY,
        DPL, EN_DPL, EN_ACK_PAY, EN_DYN_ACK,
    ];
}

/// The register values applied by
/// [`EsbDevice::setup()`](fn@crate::radio::prelude::EsbDevice::setup).
///
/// - PTX role, powered down
/// - channel 2
/// - 2 byte CRC
/// - 5 byte address width
/// - auto-ack enabled on all pipes
/// - 9 retransmits with 750 us delay
/// - all IRQ sources unmasked
/// - dynamic payloads, ACK payloads and no-ACK payloads enabled
pub const DEFAULT_REGISTERS: [RegVal; 13] = [
    RegVal::new(registers::CONFIG, 0x0C),
    RegVal::new(registers::EN_AA, 0x3F),
    RegVal::new(registers::EN_RXADDR, 0x01),
    RegVal::new(registers::SETUP_AW, 0x03),
    RegVal::new(registers::SETUP_RETR, 0x29),
    RegVal::new(registers::RF_CH, 0x02),
    RegVal::new(registers::RF_SETUP, 0x0F),
    RegVal::new(registers::RX_ADDR_P2, 0xC3),
    RegVal::new(registers::RX_ADDR_P3, 0xC4),
    RegVal::new(registers::RX_ADDR_P4, 0xC5),
    RegVal::new(registers::RX_ADDR_P5, 0xC6),
    RegVal::new(registers::DYNPD, 0x3F),
    RegVal::new(registers::FEATURE, 0x07),
];
