//! Configuration for which inflection filters get installed and under which names.

use crate::constants::{legacy, FILTER_NAMES};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::warn;
use serde::Deserialize;

/// Selection of inflection filters to install.
///
/// The default configuration installs all filters under their canonical
/// names and no aliases. Hosts that keep their own settings can embed it as a
/// `Deserialize` field.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InflectionConfig {
    /// Filters to install. `None` installs every filter.
    #[serde(default)]
    pub filters: Option<Vec<String>>,
    /// Filters removed from the selection above.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Extra filter names, mapped to the canonical filter they call.
    #[serde(default)]
    pub aliases: IndexMap<String, String>,
}

impl InflectionConfig {
    /// All filters plus `humanize_inflection`, the name older filter tables
    /// used for `humanize`.
    pub fn with_legacy_aliases() -> Self {
        let mut aliases = IndexMap::new();
        aliases.insert(legacy::HUMANIZE_ALIAS.to_string(), "humanize".to_string());
        Self { aliases, ..Default::default() }
    }

    pub fn validate(&self) -> Result<()> {
        let names = self.filters.iter().flatten().chain(&self.exclude);
        for name in names.chain(self.aliases.values()) {
            canonical_name(name)?;
        }
        for alias in self.aliases.keys() {
            if alias.trim().is_empty() {
                return Err(Error::ConfigValidation("alias names must not be empty".into()));
            }
        }
        Ok(())
    }

    /// Builds the filter table described by this configuration.
    ///
    /// Canonical names come first, in the order of [`FILTER_NAMES`] (or of
    /// `filters` when given), followed by the aliases.
    pub fn resolve(&self) -> Result<IndexMap<String, &'static str>> {
        self.validate()?;

        let selected: Vec<&'static str> = match &self.filters {
            Some(filters) => filters
                .iter()
                .map(|name| canonical_name(name))
                .collect::<Result<_>>()?,
            None => FILTER_NAMES.to_vec(),
        };

        let mut table = IndexMap::new();
        for name in selected {
            if !self.exclude.iter().any(|excluded| excluded == name) {
                table.insert(name.to_string(), name);
            }
        }
        for (alias, target) in &self.aliases {
            let target = canonical_name(target)?;
            if let Some(shadowed) = table.insert(alias.clone(), target) {
                if shadowed != target {
                    warn!("Alias '{alias}' replaces filter '{shadowed}' with '{target}'");
                }
            }
        }
        Ok(table)
    }
}

/// Looks up `name` among the canonical filter names.
pub fn canonical_name(name: &str) -> Result<&'static str> {
    FILTER_NAMES
        .iter()
        .find(|known| **known == name)
        .copied()
        .ok_or_else(|| Error::unknown_filter(name))
}
