use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Fixed register addresses on the inverter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum Register {
    Day = 40002,
    ForceChargeEnable = 41001,
    ChargeCurrent = 41007,
    MinSoc = 41009,
}

impl Register {
    pub fn address(self) -> u16 {
        self.into()
    }

    /// Number of consecutive registers written or read at this address.
    pub fn width(self) -> u16 {
        match self {
            Register::ForceChargeEnable => 6,
            Register::Day | Register::ChargeCurrent | Register::MinSoc => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_match_register_map() {
        assert_eq!(Register::Day.address(), 40002);
        assert_eq!(Register::ForceChargeEnable.address(), 41001);
        assert_eq!(Register::ChargeCurrent.address(), 41007);
        assert_eq!(Register::MinSoc.address(), 41009);
    }

    #[test]
    fn enable_block_ends_before_charge_current() {
        let enable = Register::ForceChargeEnable;
        assert_eq!(
            enable.address() + enable.width(),
            Register::ChargeCurrent.address()
        );
    }

    #[test]
    fn unknown_address_is_rejected() {
        assert!(Register::try_from(41002_u16).is_err());
        assert_eq!(Register::try_from(41009_u16).unwrap(), Register::MinSoc);
    }
}
