use crate::{DataRate, RfPower};

/// The addresses of the TX pipe and the 6 RX pipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PipeAddresses {
    tx_address: [u8; 5],
    pipe0: [u8; 5],
    pipe1: [u8; 5],
    /// The LSByte of pipes 2 - 5.
    pipe_lsb: [u8; 4],
}

impl Default for PipeAddresses {
    fn default() -> Self {
        Self {
            tx_address: [0xE7; 5],
            pipe0: [0xE7; 5],
            pipe1: [0xC2; 5],
            pipe_lsb: [0xC3, 0xC4, 0xC5, 0xC6],
        }
    }
}

impl PipeAddresses {
    fn set_tx_address(&mut self, address: &[u8]) {
        let len = address.len().min(5);
        self.tx_address[..len].copy_from_slice(&address[..len]);
    }

    fn set_rx_address(&mut self, pipe: u8, address: &[u8]) {
        let len = address.len().min(5);
        if len == 0 {
            return;
        }
        match pipe {
            0 => self.pipe0[..len].copy_from_slice(&address[..len]),
            1 => self.pipe1[..len].copy_from_slice(&address[..len]),
            2..=5 => self.pipe_lsb[pipe as usize - 2] = address[0],
            _ => (),
        }
    }

    fn get_rx_address(&self, pipe: u8, address: &mut [u8]) {
        let len = address.len().min(5);
        if len == 0 {
            return;
        }
        match pipe {
            0 => address[..len].copy_from_slice(&self.pipe0[..len]),
            1 => address[..len].copy_from_slice(&self.pipe1[..len]),
            2..=5 => {
                address[0] = self.pipe_lsb[pipe as usize - 2];
                // upper bytes are shared with pipe 1
                address[1..len].copy_from_slice(&self.pipe1[1..len]);
            }
            _ => (),
        }
    }
}

/// The user-facing configuration of the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`UserConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use nrf24::{radio::UserConfig, DataRate};
///
/// let config = UserConfig::default()
///     .with_channel(42)
///     .with_data_rate(DataRate::Mbps1)
///     .with_pipe_enabled(1, true);
/// assert_eq!(config.channel(), 42);
/// assert!(config.is_pipe_enabled(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserConfig {
    data_rate: DataRate,
    rf_power: RfPower,
    channel: u8,
    pipes: PipeAddresses,
    pub(crate) rx_pipes_enabled: u8,
    pub(crate) auto_ack: u8,
}

impl Default for UserConfig {
    /// Instantiate a [`UserConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`UserConfig::data_rate()`] | [`DataRate::Mbps2`] |
    /// | [`UserConfig::rf_power()`] | [`RfPower::Zero`] |
    /// | [`UserConfig::channel()`] | `2` |
    /// | [`UserConfig::tx_address()`] | `[0xE7; 5]` |
    /// | [`UserConfig::auto_ack()`] | `0x3F` (enabled for pipes 0 - 5) |
    ///
    /// ## Default RX pipes' configuration
    ///
    /// | pipe number | state  | address     |
    /// |-------------|--------|-------------|
    /// |      0      | open   | `[0xE7; 5]` |
    /// |      1      | closed | `[0xC2; 5]` |
    /// |      2[^1]  | closed | `0xC3`      |
    /// |      3[^1]  | closed | `0xC4`      |
    /// |      4[^1]  | closed | `0xC5`      |
    /// |      5[^1]  | closed | `0xC6`      |
    ///
    /// [^1]: The remaining 4 address bytes of pipes 2 - 5 are borrowed from pipe 1.
    fn default() -> Self {
        Self {
            data_rate: DataRate::Mbps2,
            rf_power: RfPower::Zero,
            channel: 2,
            pipes: PipeAddresses::default(),
            rx_pipes_enabled: 1,
            auto_ack: 0x3F,
        }
    }
}

impl UserConfig {
    /// Returns the value set by [`UserConfig::with_data_rate()`].
    pub const fn data_rate(&self) -> DataRate {
        self.data_rate
    }

    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self { data_rate, ..self }
    }

    /// Returns the value set by [`UserConfig::with_rf_power()`].
    pub const fn rf_power(&self) -> RfPower {
        self.rf_power
    }

    pub fn with_rf_power(self, rf_power: RfPower) -> Self {
        Self { rf_power, ..self }
    }

    /// Returns the value set by [`UserConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the channel (over the air frequency).
    ///
    /// This value is clamped to range [0, 125].
    /// The radio's frequency can be determined by the following equation:
    /// ```text
    /// frequency (in MHz) = channel + 2400
    /// ```
    pub fn with_channel(self, value: u8) -> Self {
        Self {
            channel: value.min(125),
            ..self
        }
    }

    /// Get the address set by [`UserConfig::with_tx_address()`]
    pub fn tx_address(&self, address: &mut [u8]) {
        let len = address.len().min(5);
        address[..len].copy_from_slice(&self.pipes.tx_address[..len]);
    }

    /// Set the TX address. Up to 5 bytes are used.
    pub fn with_tx_address(self, address: &[u8]) -> Self {
        let mut pipes = self.pipes;
        pipes.set_tx_address(address);
        Self { pipes, ..self }
    }

    /// Get the address of a specified RX `pipe`.
    ///
    /// For pipes 2 - 5, the first byte is the pipe's own LSByte and the
    /// remaining bytes are borrowed from pipe 1.
    /// Nothing is written for a `pipe` greater than 5.
    pub fn rx_address(&self, pipe: u8, address: &mut [u8]) {
        self.pipes.get_rx_address(pipe, address);
    }

    /// Set the address of a specified RX `pipe`.
    ///
    /// This does nothing if the given `pipe` is greater than `5`.
    /// For pipes 2 - 5, only the first byte of `address` is used.
    ///
    /// This does not open the pipe, see [`UserConfig::with_pipe_enabled()`].
    pub fn with_rx_address(self, pipe: u8, address: &[u8]) -> Self {
        let mut pipes = self.pipes;
        pipes.set_rx_address(pipe, address);
        Self { pipes, ..self }
    }

    /// Is a specified RX pipe open (`true`) or closed (`false`)?
    pub fn is_pipe_enabled(&self, pipe: u8) -> bool {
        pipe < 6 && self.rx_pipes_enabled & (1 << pipe) > 0
    }

    /// Open or close a RX pipe. Pipes greater than 5 are ignored.
    pub fn with_pipe_enabled(self, pipe: u8, enable: bool) -> Self {
        Self {
            rx_pipes_enabled: with_pipe_bit(self.rx_pipes_enabled, pipe, enable),
            ..self
        }
    }

    /// The open pipes as a bit mask (bit `n` for pipe `n`).
    pub const fn rx_pipes_enabled(&self) -> u8 {
        self.rx_pipes_enabled
    }

    /// Is auto-ack enabled for a specified RX pipe?
    pub fn is_auto_ack(&self, pipe: u8) -> bool {
        pipe < 6 && self.auto_ack & (1 << pipe) > 0
    }

    /// Enable or disable auto-ack for a RX pipe. Pipes greater than 5 are ignored.
    pub fn with_auto_ack(self, pipe: u8, enable: bool) -> Self {
        Self {
            auto_ack: with_pipe_bit(self.auto_ack, pipe, enable),
            ..self
        }
    }

    /// The auto-ack pipes as a bit mask (bit `n` for pipe `n`).
    pub const fn auto_ack(&self) -> u8 {
        self.auto_ack
    }
}

fn with_pipe_bit(mask: u8, pipe: u8, enable: bool) -> u8 {
    match pipe {
        0..=5 if enable => mask | (1 << pipe),
        0..=5 => mask & !(1 << pipe),
        _ => mask,
    }
}
