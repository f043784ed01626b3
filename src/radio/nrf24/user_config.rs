use crate::{
    radio::{
        prelude::{EsbPower, EsbUserConfig},
        Nrf24, Nrf24Error, UserConfig,
    },
    DataRate, RfPower, Transport,
};

use super::{fields, registers, Tally};

impl<T: Transport> Nrf24<T> {
    /// Update the data rate and power bits of RF_SETUP, keeping the rest.
    fn write_rf_setup(&mut self, config: &UserConfig) -> Result<(), Nrf24Error<T::Error>> {
        let current = self.read_register(registers::RF_SETUP)?;
        let value = fields::RF_DR.set(current, config.data_rate().into_bits());
        let value = fields::RF_PWR.set(value, config.rf_power().into_bits());
        self.write_register(registers::RF_SETUP, value)
    }

    /// Pipes 0 and 1 get all 5 bytes. Pipes 2 - 5 only get their LSByte.
    fn write_pipe_address(
        &mut self,
        config: &UserConfig,
        pipe: u8,
    ) -> Result<(), Nrf24Error<T::Error>> {
        let mut address = [0u8; 5];
        config.rx_address(pipe, &mut address);
        let reg = registers::RX_ADDR_P0 + pipe;
        if pipe < 2 {
            self.write_registers(reg, &address)
        } else {
            self.write_register(reg, address[0])
        }
    }
}

impl<T: Transport> EsbUserConfig for Nrf24<T> {
    type ConfigErrorType = Nrf24Error<T::Error>;

    fn write_config_directly(&mut self, config: &UserConfig) -> Result<(), Self::ConfigErrorType> {
        let mut tally = Tally::new();
        tally.track(self.write_rf_setup(config));
        tally.track(self.write_register(registers::RF_CH, fields::RF_CH.set(0, config.channel())));
        tally.track(self.write_register(
            registers::EN_RXADDR,
            fields::ERX.set(0, config.rx_pipes_enabled()),
        ));
        tally.track(self.write_register(registers::EN_AA, fields::ENAA.set(0, config.auto_ack())));

        let mut address = [0u8; 5];
        config.tx_address(&mut address);
        tally.track(self.write_registers(registers::TX_ADDR, &address));
        for pipe in 0..6 {
            tally.track(self.write_pipe_address(config, pipe));
        }
        tally.finish()
    }

    fn write_config_diff(
        &mut self,
        old: Option<&UserConfig>,
        new: &UserConfig,
    ) -> Result<(), Self::ConfigErrorType> {
        let old = match old {
            Some(old) => old,
            None => return self.write_config_directly(new),
        };
        let mut tally = Tally::new();

        if old.data_rate() != new.data_rate() || old.rf_power() != new.rf_power() {
            tally.track(self.write_rf_setup(new));
        }
        if old.channel() != new.channel() {
            tally.track(self.write_register(registers::RF_CH, fields::RF_CH.set(0, new.channel())));
        }
        if old.rx_pipes_enabled() != new.rx_pipes_enabled() {
            tally.track(self.write_register(
                registers::EN_RXADDR,
                fields::ERX.set(0, new.rx_pipes_enabled()),
            ));
        }
        if old.auto_ack() != new.auto_ack() {
            tally.track(self.write_register(registers::EN_AA, fields::ENAA.set(0, new.auto_ack())));
        }

        let (mut before, mut after) = ([0u8; 5], [0u8; 5]);
        old.tx_address(&mut before);
        new.tx_address(&mut after);
        if before != after {
            tally.track(self.write_registers(registers::TX_ADDR, &after));
        }
        for pipe in 0..6 {
            old.rx_address(pipe, &mut before);
            new.rx_address(pipe, &mut after);
            // pipes 2 - 5 only own their LSByte
            let differs = if pipe < 2 {
                before != after
            } else {
                before[0] != after[0]
            };
            if differs {
                tally.track(self.write_pipe_address(new, pipe));
            }
        }
        tally.finish()
    }

    fn read_config(&mut self) -> Result<UserConfig, Self::ConfigErrorType> {
        let mut tally = Tally::new();
        let mut config = UserConfig::default();

        if let Some(value) = tally.track(self.read_register(registers::EN_RXADDR)) {
            config.rx_pipes_enabled = fields::ERX.get(value);
        }
        if let Some(value) = tally.track(self.read_register(registers::EN_AA)) {
            config.auto_ack = fields::ENAA.get(value);
        }
        if let Some(value) = tally.track(self.read_register(registers::RF_CH)) {
            config = config.with_channel(fields::RF_CH.get(value));
        }
        if let Some(value) = tally.track(self.read_register(registers::RF_SETUP)) {
            config = config
                .with_data_rate(DataRate::from_bits(fields::RF_DR.get(value)))
                .with_rf_power(RfPower::from_bits(fields::RF_PWR.get(value)));
        }

        let mut address = [0u8; 5];
        if tally
            .track(self.read_registers(registers::TX_ADDR, &mut address))
            .is_some()
        {
            config = config.with_tx_address(&address);
        }
        for pipe in 0..2 {
            if tally
                .track(self.read_registers(registers::RX_ADDR_P0 + pipe, &mut address))
                .is_some()
            {
                config = config.with_rx_address(pipe, &address);
            }
        }
        for pipe in 2..6 {
            if let Some(lsb) = tally.track(self.read_register(registers::RX_ADDR_P0 + pipe)) {
                config = config.with_rx_address(pipe, &[lsb]);
            }
        }

        tally.finish()?;
        Ok(config)
    }

    fn write_config(&mut self, config: &UserConfig) -> Result<(), Self::ConfigErrorType> {
        let was_on = self.radio_on;
        let mut tally = Tally::new();
        if was_on {
            tally.track(self.radio_off());
        }
        tally.track(self.write_config_directly(config));
        if was_on {
            tally.track(self.radio_on());
        }
        tally.finish()
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::EsbUserConfig;
    use crate::{
        radio::{nrf24::registers, prelude::EsbPower, Nrf24Error, UserConfig},
        test::{mk_device, Op, RegisterStore},
        DataRate, RfPower,
    };
    use std::{vec, vec::Vec};

    /// Every register written by `write_config_directly()`, in order.
    const ALL_CONFIG_REGISTERS: [u8; 11] = [
        registers::RF_SETUP,
        registers::RF_CH,
        registers::EN_RXADDR,
        registers::EN_AA,
        registers::TX_ADDR,
        registers::RX_ADDR_P0,
        registers::RX_ADDR_P1,
        registers::RX_ADDR_P2,
        registers::RX_ADDR_P3,
        registers::RX_ADDR_P4,
        registers::RX_ADDR_P5,
    ];

    fn written_by_diff(old: Option<&UserConfig>, new: &UserConfig) -> Vec<u8> {
        let mut store = RegisterStore::default();
        let mut device = mk_device(&mut store);
        device.write_config_diff(old, new).unwrap();
        store.written()
    }

    #[test]
    fn write_directly() {
        let config = UserConfig::default()
            .with_channel(76)
            .with_rf_power(RfPower::Neg12dBm)
            .with_data_rate(DataRate::Mbps1)
            .with_pipe_enabled(1, true)
            .with_auto_ack(5, false)
            .with_rx_address(1, &[1, 2, 3, 4, 5])
            .with_rx_address(4, &[0x44]);
        let mut store = RegisterStore::default();
        // LNA bit and a reserved bit survive
        store.set_reg(registers::RF_SETUP, 0x81);
        let mut device = mk_device(&mut store);
        device.write_config_directly(&config).unwrap();
        assert_eq!(store.written(), ALL_CONFIG_REGISTERS);
        assert_eq!(store.reg(registers::RF_SETUP), 0x83);
        assert_eq!(store.reg(registers::RF_CH), 76);
        assert_eq!(store.reg(registers::EN_RXADDR), 0x03);
        assert_eq!(store.reg(registers::EN_AA), 0x1F);
        assert_eq!(store.regs[registers::RX_ADDR_P1 as usize], [1, 2, 3, 4, 5]);
        assert_eq!(store.reg(registers::RX_ADDR_P4), 0x44);
        // pipes 2 - 5 are single byte writes
        assert!(store
            .ops
            .contains(&Op::Send(vec![0x20 | registers::RX_ADDR_P4, 0x44])));
    }

    #[test]
    fn diff_without_old_writes_everything() {
        let config = UserConfig::default().with_channel(9);
        assert_eq!(written_by_diff(None, &config), ALL_CONFIG_REGISTERS);
    }

    #[test]
    fn diff_of_equal_configs_writes_nothing() {
        let config = UserConfig::default().with_channel(9).with_tx_address(b"node1");
        assert!(written_by_diff(Some(&config), &config).is_empty());
    }

    #[test]
    fn diff_writes_only_changed_registers() {
        let old = UserConfig::default();
        let cases = [
            (old.with_channel(40), vec![registers::RF_CH]),
            (old.with_rf_power(RfPower::Neg6dBm), vec![registers::RF_SETUP]),
            (old.with_data_rate(DataRate::Mbps1), vec![registers::RF_SETUP]),
            (old.with_pipe_enabled(2, true), vec![registers::EN_RXADDR]),
            (old.with_auto_ack(0, false), vec![registers::EN_AA]),
            (old.with_tx_address(&[1]), vec![registers::TX_ADDR]),
            (old.with_rx_address(0, &[1]), vec![registers::RX_ADDR_P0]),
            (old.with_rx_address(3, &[1]), vec![registers::RX_ADDR_P3]),
            (
                old.with_channel(3).with_rx_address(5, &[0]),
                vec![registers::RF_CH, registers::RX_ADDR_P5],
            ),
        ];
        for (new, expected) in cases {
            let written = written_by_diff(Some(&old), &new);
            assert_eq!(written, expected);
            assert!(written.iter().all(|reg| ALL_CONFIG_REGISTERS.contains(reg)));
        }
    }

    #[test]
    fn pipe1_change_does_not_rewrite_lsb_pipes() {
        let old = UserConfig::default();
        let new = old.with_rx_address(1, &[0xC2, 0x11]);
        assert_eq!(
            written_by_diff(Some(&old), &new),
            vec![registers::RX_ADDR_P1]
        );
    }

    #[test]
    fn read_back() {
        let config = UserConfig::default()
            .with_channel(125)
            .with_rf_power(RfPower::Neg18dBm)
            .with_pipe_enabled(5, true)
            .with_auto_ack(3, false)
            .with_tx_address(&[9, 8, 7, 6, 5])
            .with_rx_address(0, &[9, 8, 7, 6, 5])
            .with_rx_address(2, &[0x22]);
        let mut store = RegisterStore::default();
        let mut device = mk_device(&mut store);
        device.write_config_directly(&config).unwrap();
        assert_eq!(device.read_config().unwrap(), config);
        // reads never write
        let before = device.transport.written().len();
        device.read_config().unwrap();
        assert_eq!(store.written().len(), before);
    }

    #[test]
    fn read_counts_failures() {
        let mut store = RegisterStore::default();
        store.fail_all = true;
        let mut device = mk_device(&mut store);
        assert_eq!(
            device.read_config(),
            Err(Nrf24Error::Incomplete { failed: 11 })
        );
    }

    #[test]
    fn write_counts_failures() {
        let mut store = RegisterStore::default();
        store.fail_writes = true;
        let mut device = mk_device(&mut store);
        assert_eq!(
            device.write_config_directly(&UserConfig::default()),
            Err(Nrf24Error::Incomplete { failed: 11 })
        );
        // nothing was skipped
        assert_eq!(store.written(), ALL_CONFIG_REGISTERS);
    }

    #[test]
    fn write_pauses_radio() {
        let mut store = RegisterStore::default();
        let mut device = mk_device(&mut store);
        device.write_config(&UserConfig::default()).unwrap();
        assert!(!device.is_radio_on());
        assert!(!device.transport.ops.contains(&Op::ChipEnable(false)));

        device.radio_on().unwrap();
        device.transport.ops.clear();
        device.write_config(&UserConfig::default()).unwrap();
        assert!(device.is_radio_on());
        assert_eq!(store.ops.first(), Some(&Op::ChipEnable(false)));
        assert_eq!(store.ops.last(), Some(&Op::ChipEnable(true)));
        assert!(store.ce);
    }
}
