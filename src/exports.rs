use std::collections::{BTreeMap, HashMap};

use crate::envs::ENTRIES;

/// A place the configuration can be published to under its export keys.
pub trait ExportRegistry {
    fn register(&mut self, key: &'static str, value: &'static str);
}

impl ExportRegistry for HashMap<String, String> {
    fn register(&mut self, key: &'static str, value: &'static str) {
        self.insert(key.to_owned(), value.to_owned());
    }
}

impl ExportRegistry for BTreeMap<&'static str, &'static str> {
    fn register(&mut self, key: &'static str, value: &'static str) {
        self.insert(key, value);
    }
}

/// Publishes `BackendURL` and `GitHubRepoURL` into `registry` if one is
/// present. Returns whether anything was registered.
///
/// Passing `None` is the normal case for hosts without an export mechanism:
/// nothing is created and the constants remain the only way to read the
/// values.
pub fn export_into<R>(registry: Option<&mut R>) -> bool
where
    R: ExportRegistry + ?Sized,
{
    match registry {
        Some(registry) => {
            for (key, value) in ENTRIES {
                registry.register(key, value);
            }
            tracing::debug!(keys = ?crate::EXPORT_KEYS, "config exported");
            true
        }
        None => {
            tracing::debug!("no export registry, config stays ambient only");
            false
        }
    }
}

/// The exported mapping as an owned value.
pub fn exported() -> BTreeMap<&'static str, &'static str> {
    let mut map = BTreeMap::new();
    export_into(Some(&mut map));
    map
}
