use crate::{
    radio::{
        prelude::{EsbRole, EsbStatus},
        Nrf24, Nrf24Error,
    },
    Role, Transport,
};

use super::{fields, Tally};

impl<T: Transport> EsbRole for Nrf24<T> {
    type RoleErrorType = Nrf24Error<T::Error>;

    fn switch_role(&mut self, role: Role) -> Result<(), Self::RoleErrorType> {
        if self.role == role {
            return Ok(());
        }
        debug!("switching role to {}", role);
        self.role = role;
        let mut tally = Tally::new();
        tally.track(self.clear_all());
        tally.track(self.modify_field(fields::PRIM_RX, role.into_bits()));
        tally.finish()
    }

    fn switch_role_directly(&mut self, role: Role) -> Result<(), Self::RoleErrorType> {
        if self.role == role {
            return Ok(());
        }
        self.role = role;
        self.modify_field(fields::PRIM_RX, role.into_bits())
    }

    fn role(&self) -> Role {
        self.role
    }
}
