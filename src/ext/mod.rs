/// Extension traits for types from other crates.
///
/// Each extension trait lives in its own file named after the type it
/// extends:
/// - `environment.rs` - Extensions for `minijinja::Environment`
pub mod environment;

pub use environment::EnvironmentExt;
