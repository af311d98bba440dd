//! Registration of the inflection filters into a MiniJinja environment.

use crate::config::InflectionConfig;
use crate::constants::{EXTENSION_NAME, FILTER_NAMES};
use crate::error::{Error, Result};
use crate::renderer::filters::*;
use indexmap::IndexMap;
use log::{debug, info};
use minijinja::Environment;

/// Something that installs capabilities into a template environment.
pub trait Extension {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Installs the extension's filters into `env`.
    ///
    /// Filters already present under the same names are replaced; every other
    /// entry of the environment is left untouched.
    fn register(&self, env: &mut Environment<'_>) -> Result<()>;
}

/// Installs all twelve inflection filters under their canonical names.
///
/// # Example
/// ```
/// use minijinja::Environment;
///
/// let mut env = Environment::new();
/// minijinja_inflection::install(&mut env);
/// let rendered = env.render_str("{{ 'device_type' | camelize }}", ()).unwrap();
/// assert_eq!(rendered, "DeviceType");
/// ```
pub fn install(env: &mut Environment<'_>) {
    for name in FILTER_NAMES {
        add_filter(env, name, name);
    }
    info!("Installed {} inflection filters", FILTER_NAMES.len());
}

/// Installs the inflection filter backing `canonical` under `key`.
///
/// Returns `false` if `canonical` is not one of [`FILTER_NAMES`].
fn add_filter(env: &mut Environment<'_>, key: &str, canonical: &str) -> bool {
    let key = key.to_string();
    match canonical {
        "camelize" => env.add_filter(key, camelize_filter),
        "dasherize" => env.add_filter(key, dasherize),
        "humanize" => env.add_filter(key, humanize),
        "ordinal" => env.add_filter(key, ordinal),
        "ordinalize" => env.add_filter(key, ordinalize),
        "parameterize" => env.add_filter(key, parameterize_filter),
        "pluralize" => env.add_filter(key, pluralize),
        "singularize" => env.add_filter(key, singularize),
        "tableize" => env.add_filter(key, tableize),
        "titleize" => env.add_filter(key, titleize),
        "transliterate" => env.add_filter(key, transliterate),
        "underscore" => env.add_filter(key, underscore),
        _ => return false,
    }
    true
}

/// Configurable variant of [`install`].
///
/// Installs the subset of filters selected by an [`InflectionConfig`], plus
/// its aliases. The configuration is validated before anything is
/// registered, so a rejected configuration leaves the environment untouched.
#[derive(Debug, Default, Clone)]
pub struct InflectionExtension {
    config: InflectionConfig,
}

impl InflectionExtension {
    /// Creates an extension installing every filter under its canonical name.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InflectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InflectionConfig {
        &self.config
    }

    /// Resolves the filter table this extension would install.
    ///
    /// # Returns
    /// * `Result<IndexMap<String, &'static str>>` - filter key mapped to the
    ///   canonical filter backing it, in registration order
    pub fn filter_table(&self) -> Result<IndexMap<String, &'static str>> {
        self.config.resolve()
    }
}

impl Extension for InflectionExtension {
    fn name(&self) -> &str {
        EXTENSION_NAME
    }

    fn register(&self, env: &mut Environment<'_>) -> Result<()> {
        let table = self.filter_table()?;
        for (key, canonical) in &table {
            debug!("Registering filter '{key}' -> {canonical}");
            if !add_filter(env, key, canonical) {
                return Err(Error::unknown_filter(*canonical));
            }
        }
        info!("Extension '{}' installed {} filters", self.name(), table.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::legacy::HUMANIZE_ALIAS;
    use minijinja::ErrorKind;

    fn render(env: &Environment<'_>, template: &str) -> String {
        env.render_str(template, ()).unwrap()
    }

    fn shout(value: &str) -> String {
        format!("{value}!")
    }

    fn stale(_: &str) -> String {
        "stale".to_string()
    }

    #[test]
    fn test_install_registers_every_filter() {
        let mut env = Environment::new();
        install(&mut env);
        for name in FILTER_NAMES {
            let value = if name.starts_with("ordinal") { "7" } else { "'word'" };
            let template = format!("{{{{ {value} | {name} }}}}");
            assert!(env.render_str(&template, ()).is_ok(), "filter '{name}' missing");
        }
    }

    #[test]
    fn test_install_keeps_unrelated_filters() {
        let mut env = Environment::new();
        env.add_filter("shout", shout);
        install(&mut env);
        assert_eq!(render(&env, "{{ 'hey' | shout }}"), "hey!");
        assert_eq!(render(&env, "{{ 'hey' | upper }}"), "HEY");
    }

    #[test]
    fn test_install_overwrites_same_name() {
        let mut env = Environment::new();
        env.add_filter("pluralize", stale);
        install(&mut env);
        assert_eq!(render(&env, "{{ 'mouse' | pluralize }}"), "mice");
    }

    #[test]
    fn test_unknown_canonical_is_rejected() {
        let mut env = Environment::new();
        assert!(!add_filter(&mut env, "x", "shout"));
    }

    #[test]
    fn test_extension_installs_configured_subset() {
        let config = InflectionConfig {
            filters: Some(vec!["camelize".into(), "humanize".into()]),
            ..Default::default()
        };
        let mut env = Environment::new();
        InflectionExtension::with_config(config).register(&mut env).unwrap();
        assert_eq!(render(&env, "{{ 'device_type' | camelize }}"), "DeviceType");
        let err = env.render_str("{{ 'mouse' | pluralize }}", ()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownFilter);
    }

    #[test]
    fn test_extension_legacy_alias() {
        let mut env = Environment::new();
        InflectionExtension::with_config(InflectionConfig::with_legacy_aliases())
            .register(&mut env)
            .unwrap();
        let template = format!("{{{{ 'author_id' | {HUMANIZE_ALIAS} }}}}");
        assert_eq!(render(&env, &template), "Author");
        assert_eq!(render(&env, "{{ 'author_id' | humanize }}"), "Author");
    }

    #[test]
    fn test_invalid_config_registers_nothing() {
        let config = InflectionConfig {
            filters: Some(vec!["camelize".into(), "shout".into()]),
            ..Default::default()
        };
        let mut env = Environment::new();
        let result = InflectionExtension::with_config(config).register(&mut env);
        assert!(matches!(result, Err(Error::UnknownFilter { ref name, .. }) if name == "shout"));
        let err = env.render_str("{{ 'a_b' | camelize }}", ()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownFilter);
    }

    #[test]
    fn test_extension_name() {
        assert_eq!(InflectionExtension::new().name(), "inflection");
    }
}
