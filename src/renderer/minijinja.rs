use crate::{
    config::InflectionConfig,
    error::Result,
    extension::{install, Extension, InflectionExtension},
    renderer::interface::TemplateRenderer,
};
use minijinja::Environment;

/// MiniJinja-based template rendering engine with the inflection filters installed.
#[derive(Clone)]
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer with every inflection filter installed.
    pub fn new() -> Self {
        let mut env = Environment::new();
        install(&mut env);
        Self { env }
    }

    /// Creates a renderer whose filters are selected by `config`.
    pub fn with_config(config: InflectionConfig) -> Result<Self> {
        let mut env = Environment::new();
        InflectionExtension::with_config(config).register(&mut env)?;
        Ok(Self { env })
    }

    /// Wraps an existing environment, merging the inflection filters into it.
    pub fn from_environment(mut env: Environment<'static>) -> Self {
        install(&mut env);
        Self { env }
    }

    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String> {
        let mut env = self.env.clone();
        let name = template_name.unwrap_or("temp");
        env.add_template(name, template)?;
        let tmpl = env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }

    fn evaluate(
        &self,
        expr_str: &str,
        context: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        let expr = self.env.compile_expression(expr_str)?;
        let value = expr.eval(context)?;
        Ok(serde_json::to_value(&value)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
    use serde_json::json;

    fn test_template(template: &str, expected: &str) {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer.render(template, &json!({}), None).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_inflection_filters() {
        test_template("{{ 'device_type' | camelize }}", "DeviceType");
        test_template("{{ 'device_type' | camelize(false) }}", "deviceType");
        test_template("{{ 'puni_puni' | dasherize }}", "puni-puni");
        test_template("{{ 'employee_salary' | humanize }}", "Employee salary");
        test_template("{{ 21 | ordinal }}", "st");
        test_template("{{ 21 | ordinalize }}", "21st");
        test_template("{{ 'Donald E. Knuth' | parameterize }}", "donald-e-knuth");
        test_template("{{ 'octopus' | pluralize }}", "octopi");
        test_template("{{ 'mice' | singularize }}", "mouse");
        test_template("{{ 'UserAccount' | tableize }}", "user_accounts");
        test_template("{{ 'api_responses' | titleize }}", "Api Responses");
        test_template("{{ 'Crème brûlée' | transliterate }}", "Creme brulee");
        test_template("{{ 'DeviceType' | underscore }}", "device_type");
    }

    #[test]
    fn test_filters_read_context() {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer
            .render("{{ model | tableize }}", &json!({ "model": "OrderItem" }), None)
            .unwrap();
        assert_eq!(result, "order_items");
    }

    #[test]
    fn test_evaluate() {
        let renderer = MiniJinjaRenderer::new();
        let value = renderer.evaluate("n | ordinalize", &json!({ "n": 112 })).unwrap();
        assert_eq!(value, json!("112th"));
    }

    #[test]
    fn test_html_templates_are_escaped() {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer
            .render("{{ '<b>_x' | humanize }}", &json!({}), Some("page.html"))
            .unwrap();
        assert_eq!(result, "&lt;b&gt; x");
    }

    #[test]
    fn test_from_environment_keeps_existing_globals() {
        let mut env = minijinja::Environment::new();
        env.add_global("site", "My Site");
        let renderer = MiniJinjaRenderer::from_environment(env);
        let result = renderer.render("{{ site | parameterize }}", &json!({}), None).unwrap();
        assert_eq!(result, "my-site");
    }
}
