//! String inflection filters for [MiniJinja](https://docs.rs/minijinja).
//!
//! Installs `camelize`, `dasherize`, `humanize`, `ordinal`, `ordinalize`,
//! `parameterize`, `pluralize`, `singularize`, `tableize`, `titleize`,
//! `transliterate` and `underscore` into an environment's filter table:
//!
//! ```
//! use minijinja::Environment;
//!
//! let mut env = Environment::new();
//! minijinja_inflection::install(&mut env);
//!
//! let out = env
//!     .render_str("{{ 'device_type' | camelize(false) }} {{ 21 | ordinalize }}", ())
//!     .unwrap();
//! assert_eq!(out, "deviceType 21st");
//! ```

/// Defines custom error types.
pub mod error;

/// Constants shared across modules.
pub mod constants;

/// Selection of filters and aliases to install.
pub mod config;

/// Registration of the filters into an environment.
pub mod extension;

/// Extension traits for external types.
pub mod ext;

/// The string inflection operations behind each filter.
pub mod inflection;

/// Filter wrappers and a small template renderer.
pub mod renderer;

pub use config::InflectionConfig;
pub use constants::FILTER_NAMES;
pub use error::{Error, Result};
pub use extension::{install, Extension, InflectionExtension};
