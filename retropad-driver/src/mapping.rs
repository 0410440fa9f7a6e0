use crate::config::input::{ControllerIdentity, InputSource, RetroButton};
use crate::keys::{self, keycode};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

pub type MappingTable = FxHashMap<InputSource, RetroButton>;

/// Per-controller mapping tables. The store exclusively owns the tables and
/// hands out immutable snapshots; reloads replace a table wholesale, never
/// mutate one in place.
#[derive(Debug, Clone, Default)]
pub struct MappingStore {
    mappings: FxHashMap<ControllerIdentity, Arc<MappingTable>>,
}

impl MappingStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_all(&mut self, mappings: FxHashMap<ControllerIdentity, MappingTable>) {
        self.mappings =
            mappings.into_iter().map(|(identity, table)| (identity, Arc::new(table))).collect();
    }

    pub fn set_for(&mut self, identity: ControllerIdentity, table: MappingTable) {
        self.mappings.insert(identity, Arc::new(table));
    }

    pub fn clear(&mut self) {
        self.mappings.clear();
    }

    #[must_use]
    pub fn table_for(&self, identity: &ControllerIdentity) -> Option<&Arc<MappingTable>> {
        self.mappings.get(identity)
    }

    /// Translates a discrete button press for the given controller.
    ///
    /// Two-tier fallback: an explicit mapping wins; otherwise the default
    /// swap applies (A/B and X/Y exchanged, everything else passed through).
    /// The swap is the only behavior a user sees on an unconfigured device.
    #[must_use]
    pub fn translate_button(&self, identity: &ControllerIdentity, code: u16) -> u16 {
        translate_with(self.mappings.get(identity).map(Arc::as_ref), code)
    }

    /// The physical button codes this controller has bound to gameplay
    /// actions. Feeds single-key hotkey suppression.
    #[must_use]
    pub fn mapped_button_codes(&self, identity: &ControllerIdentity) -> FxHashSet<u16> {
        self.mappings.get(identity).map(|table| button_codes(table)).unwrap_or_default()
    }

    #[must_use]
    pub fn all_mapped_button_codes(&self) -> FxHashMap<ControllerIdentity, FxHashSet<u16>> {
        self.mappings
            .iter()
            .map(|(identity, table)| (identity.clone(), button_codes(table)))
            .collect()
    }
}

/// Single-table button translation. This is the bare mapper for callers that
/// already hold a table snapshot; [`MappingStore::translate_button`] is the
/// same logic behind the per-controller lookup.
#[must_use]
pub fn translate_with(table: Option<&MappingTable>, code: u16) -> u16 {
    if let Some(table) = table {
        if let Some(&button) = table.get(&InputSource::Button { code }) {
            return keys::retro_button_keycode(button);
        }
    }

    default_swap(code)
}

fn button_codes(table: &MappingTable) -> FxHashSet<u16> {
    table
        .keys()
        .filter_map(|source| match *source {
            InputSource::Button { code } => Some(code),
            InputSource::Axis { .. } => None,
        })
        .collect()
}

// A/B and X/Y are exchanged for unconfigured devices to match the dominant
// regional layout convention; all other codes pass through untouched.
fn default_swap(code: u16) -> u16 {
    match code {
        keycode::BUTTON_B => keycode::BUTTON_A,
        keycode::BUTTON_A => keycode::BUTTON_B,
        keycode::BUTTON_X => keycode::BUTTON_Y,
        keycode::BUTTON_Y => keycode::BUTTON_X,
        _ => code,
    }
}
