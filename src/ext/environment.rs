use minijinja::Environment;

use crate::extension::install;

/// Extension trait for `minijinja::Environment` to install the inflection filters
pub trait EnvironmentExt: Sized {
    /// Merges every inflection filter into the environment's filter table.
    ///
    /// # Examples
    /// ```
    /// use minijinja::Environment;
    /// use minijinja_inflection::ext::EnvironmentExt;
    ///
    /// let mut env = Environment::new();
    /// env.add_inflection_filters();
    /// assert_eq!(env.render_str("{{ 'mice' | singularize }}", ()).unwrap(), "mouse");
    /// ```
    fn add_inflection_filters(&mut self);

    /// Builder-style variant of [`EnvironmentExt::add_inflection_filters`].
    ///
    /// # Examples
    /// ```
    /// use minijinja::Environment;
    /// use minijinja_inflection::ext::EnvironmentExt;
    ///
    /// let env = Environment::new().with_inflection_filters();
    /// assert_eq!(env.render_str("{{ 3 | ordinalize }}", ()).unwrap(), "3rd");
    /// ```
    fn with_inflection_filters(mut self) -> Self {
        self.add_inflection_filters();
        self
    }
}

impl EnvironmentExt for Environment<'_> {
    fn add_inflection_filters(&mut self) {
        install(self);
    }
}
