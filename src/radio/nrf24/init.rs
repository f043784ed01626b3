use crate::{
    radio::{
        prelude::{EsbDevice, EsbPower, EsbStatus, EsbUserConfig},
        Nrf24, Nrf24Error, UserConfig,
    },
    RegVal, Role, Transport,
};

use super::{fields, registers, Tally, DEFAULT_REGISTERS};

impl<T: Transport> Nrf24<T> {
    /// Bind a `transport` and initialize it.
    ///
    /// No register of the radio is touched. Use
    /// [`EsbDevice::setup()`](fn@crate::radio::prelude::EsbDevice::setup)
    /// to bring the radio into a known state afterwards.
    pub fn init(mut transport: T) -> Result<Self, Nrf24Error<T::Error>> {
        trace!("enter init");
        if let Err(err) = transport.init() {
            error!("transport init failed");
            return Err(Nrf24Error::Transport(err));
        }
        Ok(Self {
            transport,
            role: Role::Transmitter,
            ack_pipe: 0,
            radio_on: false,
        })
    }

    /// Power down, switch the radio off and give back the transport.
    ///
    /// Failures while powering down are logged and otherwise ignored.
    pub fn deinit(mut self) -> T {
        trace!("enter deinit");
        if self.power_down().is_err() {
            warn!("power down failed during deinit");
        }
        if self.radio_off().is_err() {
            warn!("radio off failed during deinit");
        }
        self.transport.deinit();
        debug!("device deinit [ok]");
        self.transport
    }
}

impl<T: Transport> EsbDevice for Nrf24<T> {
    type DeviceErrorType = Nrf24Error<T::Error>;

    fn check_device(&mut self) -> Result<(), Self::DeviceErrorType> {
        trace!("enter check_device");
        let mut backup = [0u8; 5];
        self.read_registers(registers::RX_ADDR_P0, &mut backup)?;

        let mut probe = backup;
        for (i, byte) in probe.iter_mut().enumerate() {
            *byte = byte.wrapping_add(i as u8);
        }
        trace!("probe address {:?}", probe);

        let mut readback = [0u8; 5];
        let written = self.write_registers(registers::RX_ADDR_P0, &probe);
        let read = self.read_registers(registers::RX_ADDR_P0, &mut readback);
        trace!("read back {:?}", readback);
        // the original address is restored whatever the outcome
        let restored = self.write_registers(registers::RX_ADDR_P0, &backup);
        trace!("restored {:?}", backup);
        written?;
        read?;
        restored?;

        if readback != probe {
            error!("device not found");
            return Err(Nrf24Error::DeviceNotFound);
        }
        debug!("check device success");
        Ok(())
    }

    fn setup(&mut self, role: Role) -> Result<(), Self::DeviceErrorType> {
        self.setup_with(role, &UserConfig::default(), &DEFAULT_REGISTERS)
    }

    fn setup_with(
        &mut self,
        role: Role,
        config: &UserConfig,
        registers: &[RegVal],
    ) -> Result<(), Self::DeviceErrorType> {
        trace!("enter setup");
        self.role = role;
        if let Err(err) = self.check_device() {
            error!("check device failed");
            return Err(err);
        }

        let mut tally = Tally::new();
        // soft reset
        tally.track(self.power_down());
        tally.track(self.radio_off());
        tally.track(self.clear_all());

        tally.track(self.write_register_list(registers));
        tally.track(self.write_config_directly(config));
        tally.track(self.modify_field(fields::PRIM_RX, role.into_bits()));

        tally.track(self.power_up());
        tally.track(self.radio_on());

        let result = tally.finish();
        match result {
            Ok(()) => info!("device setup [ok] as {}", role),
            Err(_) => error!("device setup [fail]"),
        }
        result
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::EsbDevice;
    use crate::{
        radio::{
            nrf24::{registers, Nrf24},
            prelude::{EsbPower, EsbRole},
            Nrf24Error, UserConfig, DEFAULT_REGISTERS,
        },
        test::{mk_device, BusFault, Op, RegisterStore},
        RegVal, Role,
    };
    use std::vec;

    #[test]
    fn init_binds_transport() {
        let mut store = RegisterStore::default();
        let device = mk_device(&mut store);
        assert_eq!(device.role(), Role::Transmitter);
        assert!(!device.is_radio_on());
        assert!(store.initialized);
        // no bus traffic
        assert!(store.ops.is_empty());
    }

    #[test]
    fn init_failure() {
        let mut store = RegisterStore {
            fail_init: true,
            ..Default::default()
        };
        assert!(matches!(
            Nrf24::init(&mut store),
            Err(Nrf24Error::Transport(BusFault))
        ));
    }

    #[test]
    fn deinit_releases_transport() {
        let mut store = RegisterStore::default();
        store.set_reg(registers::CONFIG, 0x0E);
        let mut device = mk_device(&mut store);
        device.radio_on().unwrap();
        let transport = device.deinit();
        assert!(transport.deinitialized);
        assert!(!transport.ce);
        assert_eq!(store.reg(registers::CONFIG), 0x0C);
    }

    #[test]
    fn check_device_restores_on_success() {
        let mut store = RegisterStore::default();
        store.regs[registers::RX_ADDR_P0 as usize] = [1, 2, 3, 4, 5];
        let mut device = mk_device(&mut store);
        device.check_device().unwrap();
        assert_eq!(store.regs[registers::RX_ADDR_P0 as usize], [1, 2, 3, 4, 5]);
        assert_eq!(
            store.ops[1],
            Op::SendThenSend(vec![0x2A], vec![1, 3, 5, 7, 9])
        );
    }

    #[test]
    fn check_device_restores_on_failure() {
        let mut store = RegisterStore::default();
        store.regs[registers::RX_ADDR_P0 as usize] = [0xE7; 5];
        store.corrupt_readback = true;
        let mut device = mk_device(&mut store);
        assert_eq!(device.check_device(), Err(Nrf24Error::DeviceNotFound));
        assert_eq!(store.regs[registers::RX_ADDR_P0 as usize], [0xE7; 5]);
        assert_eq!(
            store.ops.last(),
            Some(&Op::SendThenSend(vec![0x2A], vec![0xE7; 5]))
        );
    }

    #[test]
    fn setup_aborts_when_device_missing() {
        let mut store = RegisterStore::default();
        store.corrupt_readback = true;
        store.set_reg(registers::CONFIG, 0x0E);
        let mut device = mk_device(&mut store);
        assert_eq!(
            device.setup(Role::Receiver),
            Err(Nrf24Error::DeviceNotFound)
        );
        // only the check touched the radio
        assert_eq!(
            store.written(),
            vec![registers::RX_ADDR_P0, registers::RX_ADDR_P0]
        );
        assert!(!store.ops.iter().any(|op| matches!(op, Op::ChipEnable(_))));
        assert_eq!(store.reg(registers::CONFIG), 0x0E);
    }

    fn assert_default_state(store: &RegisterStore) {
        // PWR_UP set, PRIM_RX clear
        assert_eq!(store.reg(registers::CONFIG), 0x0E);
        for entry in DEFAULT_REGISTERS.iter().skip(1) {
            assert_eq!(store.reg(entry.reg), entry.val, "register {:#x}", entry.reg);
        }
        assert_eq!(store.regs[registers::TX_ADDR as usize], [0xE7; 5]);
        assert_eq!(store.regs[registers::RX_ADDR_P0 as usize], [0xE7; 5]);
        assert_eq!(store.regs[registers::RX_ADDR_P1 as usize], [0xC2; 5]);
        assert!(store.ce);
    }

    #[test]
    fn setup_from_zeroed_registers() {
        let mut store = RegisterStore {
            regs: [[0; 5]; 32],
            ..Default::default()
        };
        let mut device = mk_device(&mut store);
        device.setup(Role::Transmitter).unwrap();
        assert!(device.is_radio_on());
        assert!(device.is_powered().unwrap());
        assert_default_state(&store);
    }

    #[test]
    fn setup_is_repeatable() {
        let mut store = RegisterStore::default();
        let mut device = mk_device(&mut store);
        device.setup(Role::Transmitter).unwrap();
        device.setup(Role::Transmitter).unwrap();
        assert_default_state(&store);
    }

    #[test]
    fn setup_with_custom_values() {
        let mut store = RegisterStore::default();
        let config = UserConfig::default()
            .with_channel(100)
            .with_pipe_enabled(1, true);
        let list = [
            RegVal::new(registers::CONFIG, 0x08),
            RegVal::new(registers::SETUP_RETR, 0x5F),
        ];
        let mut device = mk_device(&mut store);
        device.setup_with(Role::Receiver, &config, &list).unwrap();
        assert!(device.is_receiver());
        assert_eq!(store.reg(registers::CONFIG), 0x0B);
        assert_eq!(store.reg(registers::SETUP_RETR), 0x5F);
        assert_eq!(store.reg(registers::RF_CH), 100);
        assert_eq!(store.reg(registers::EN_RXADDR), 0x03);
    }
}
