//! The Registry - immutable flag lookup.

use crate::FlagDefinition;
use std::collections::HashMap;

/// Source of flag definitions handed to the batch engine.
pub trait FlagRegistry {
    /// Find a flag by a loosely typed name.
    fn lookup(&self, name: &str) -> Option<&FlagDefinition>;
}

/// Normalized form used for fuzzy matching: ASCII lowercase, dashes removed.
pub fn normalize_flag_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// The Registry provides runtime lookup of flag definitions.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct Registry {
    /// Flag definitions in registration order.
    flags: Vec<FlagDefinition>,
    /// Exact name lookup.
    names: HashMap<String, usize>,
    /// Normalized name lookup; the first registered flag wins.
    fuzzy_names: HashMap<String, usize>,
}

impl Registry {
    pub(crate) fn new(flags: Vec<FlagDefinition>) -> Self {
        let mut names = HashMap::new();
        let mut fuzzy_names = HashMap::new();
        for (i, flag) in flags.iter().enumerate() {
            names.insert(flag.name.clone(), i);
            fuzzy_names.entry(normalize_flag_name(&flag.name)).or_insert(i);
        }
        Self {
            flags,
            names,
            fuzzy_names,
        }
    }

    /// Get a flag by its exact name.
    pub fn get(&self, name: &str) -> Option<&FlagDefinition> {
        self.names.get(name).map(|&i| &self.flags[i])
    }

    /// Get the number of flags.
    pub fn flag_count(&self) -> usize {
        self.flags.len()
    }
}

impl FlagRegistry for Registry {
    fn lookup(&self, name: &str) -> Option<&FlagDefinition> {
        self.get(name).or_else(|| {
            self.fuzzy_names
                .get(&normalize_flag_name(name))
                .map(|&i| &self.flags[i])
        })
    }
}
