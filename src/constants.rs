//! Constants used throughout the inflection filters

/// Canonical filter names, in registration order
pub const FILTER_NAMES: [&str; 12] = [
    "camelize",
    "dasherize",
    "humanize",
    "ordinal",
    "ordinalize",
    "parameterize",
    "pluralize",
    "singularize",
    "tableize",
    "titleize",
    "transliterate",
    "underscore",
];

/// Name reported by the inflection extension
pub const EXTENSION_NAME: &str = "inflection";

/// Default separator used by `parameterize`
pub const DEFAULT_SEPARATOR: &str = "-";

/// Default for the `uppercase_first_letter` argument of `camelize`
pub const DEFAULT_UPPERCASE_FIRST_LETTER: bool = true;

/// Legacy aliases kept for templates written against older filter tables
pub mod legacy {
    pub const HUMANIZE_ALIAS: &str = "humanize_inflection";
}

/// Keyword argument names accepted by the parameterized filters
pub mod params {
    pub const UPPERCASE_FIRST_LETTER: &str = "uppercase_first_letter";
    pub const SEPARATOR: &str = "separator";
}
