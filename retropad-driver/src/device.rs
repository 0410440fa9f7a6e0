use crate::config::input::ControllerIdentity;

/// Everything the host's device enumerator reports about a connected
/// controller. Handed in per event; never stored by the translation core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub vendor_id: u16,
    pub product_id: u16,
    pub descriptor: String,
    /// 1-based player number reported by the host, 0 if unassigned.
    pub player_slot: u8,
    pub analog_capable: bool,
}

impl DeviceInfo {
    /// Derives the controller's stable identity. Pure; equal fields always
    /// produce equal identities.
    #[must_use]
    pub fn identity(&self) -> ControllerIdentity {
        ControllerIdentity::new(self.vendor_id, self.product_id, &self.descriptor)
    }

    /// Default port to use when no explicit order entry exists for this
    /// device, derived from the host-reported player slot.
    #[must_use]
    pub fn fallback_port(&self) -> i32 {
        i32::from(self.player_slot.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(player_slot: u8) -> DeviceInfo {
        DeviceInfo {
            vendor_id: 0x054c,
            product_id: 0x09cc,
            descriptor: "bluetooth:aa:bb".into(),
            player_slot,
            analog_capable: true,
        }
    }

    #[test]
    fn identity_ignores_player_slot() {
        assert_eq!(device(1).identity(), device(2).identity());
    }

    #[test]
    fn fallback_port_is_zero_based_and_clamped() {
        assert_eq!(0, device(0).fallback_port());
        assert_eq!(0, device(1).fallback_port());
        assert_eq!(3, device(4).fallback_port());
    }
}
