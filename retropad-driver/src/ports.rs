use crate::config::input::{ControllerIdentity, PortAssignment};
use rustc_hash::FxHashMap;

/// Maps controller identities to logical player ports. The order table is
/// replaced wholesale on reload; lookups always produce a value.
#[derive(Debug, Clone, Default)]
pub struct PortResolver {
    order: FxHashMap<ControllerIdentity, i32>,
}

impl PortResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_order(&mut self, assignments: impl IntoIterator<Item = PortAssignment>) {
        self.order = assignments
            .into_iter()
            .map(|assignment| (assignment.controller, assignment.port))
            .collect();
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }

    /// The explicit port for this controller if one is configured (which may
    /// be negative for a disabled slot), else the fallback clamped to >= 0.
    #[must_use]
    pub fn port_for(&self, identity: &ControllerIdentity, fallback: i32) -> i32 {
        self.order.get(identity).copied().unwrap_or_else(|| fallback.max(0))
    }

    /// Whether any explicit ordering exists. The front end uses this to
    /// decide whether to display auto-detected ordering instead.
    #[must_use]
    pub fn has_custom_order(&self) -> bool {
        !self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(descriptor: &str) -> ControllerIdentity {
        ControllerIdentity::new(0x045e, 0x028e, descriptor)
    }

    #[test]
    fn explicit_order_wins_over_fallback() {
        let mut resolver = PortResolver::new();
        resolver.set_order([
            PortAssignment { controller: identity("one"), port: 1 },
            PortAssignment { controller: identity("two"), port: 0 },
        ]);

        assert!(resolver.has_custom_order());
        assert_eq!(1, resolver.port_for(&identity("one"), 0));
        assert_eq!(0, resolver.port_for(&identity("two"), 3));
    }

    #[test]
    fn fallback_is_clamped_to_zero() {
        let resolver = PortResolver::new();
        assert_eq!(0, resolver.port_for(&identity("one"), -1));
        assert_eq!(2, resolver.port_for(&identity("one"), 2));
    }

    #[test]
    fn negative_explicit_ports_are_preserved() {
        let mut resolver = PortResolver::new();
        resolver.set_order([PortAssignment { controller: identity("one"), port: -1 }]);
        assert_eq!(-1, resolver.port_for(&identity("one"), 0));
    }

    #[test]
    fn clear_restores_fallback_for_every_id() {
        let mut resolver = PortResolver::new();
        resolver.set_order([
            PortAssignment { controller: identity("one"), port: 3 },
            PortAssignment { controller: identity("two"), port: 2 },
        ]);

        resolver.clear();

        assert!(!resolver.has_custom_order());
        assert_eq!(0, resolver.port_for(&identity("one"), 0));
        assert_eq!(1, resolver.port_for(&identity("two"), 1));
    }

    #[test]
    fn set_order_replaces_wholesale() {
        let mut resolver = PortResolver::new();
        resolver.set_order([PortAssignment { controller: identity("one"), port: 3 }]);
        resolver.set_order([PortAssignment { controller: identity("two"), port: 1 }]);

        assert_eq!(0, resolver.port_for(&identity("one"), 0));
        assert_eq!(1, resolver.port_for(&identity("two"), 0));
    }
}
