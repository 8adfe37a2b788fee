use crate::catalog::domain::ResolvedModuleIdentifier;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// `(group, name)` coordinates of a module
pub type ModuleCoordinates = (String, String);

/// ModuleDeduplicator service for merging duplicate module resolutions
///
/// This service contains pure business logic and has no I/O dependencies.
pub struct ModuleDeduplicator;

impl ModuleDeduplicator {
    /// Merges identifiers sharing `(group, name)` into the one with the maximum version
    ///
    /// Inputs are folded left to right; on equal versions the identifier seen
    /// first is kept, so its component reference stays stable.
    ///
    /// # Returns
    /// A mapping sorted ascending by `(group, name)` with exactly one entry per pair
    pub fn dedup<I>(modules: I) -> BTreeMap<ModuleCoordinates, ResolvedModuleIdentifier>
    where
        I: IntoIterator<Item = ResolvedModuleIdentifier>,
    {
        let mut merged: BTreeMap<ModuleCoordinates, ResolvedModuleIdentifier> = BTreeMap::new();

        for id in modules {
            match merged.entry(id.coordinates()) {
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
                Entry::Occupied(mut slot) => {
                    if id.version() > slot.get().version() {
                        slot.insert(id);
                    }
                }
            }
        }

        merged
    }
}
