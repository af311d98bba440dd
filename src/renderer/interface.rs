use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    /// * `template_name` - Optional name for the template (used in error messages
    ///   and to pick the auto-escaping mode)
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String>;

    /// Evaluates a template expression and returns its value.
    ///
    /// # Arguments
    /// * `expr` - Expression to evaluate, e.g. `name | pluralize`
    /// * `context` - Context variables for evaluation
    ///
    /// # Returns
    /// * `Result<serde_json::Value>` - The value of the expression
    fn evaluate(&self, expr: &str, context: &serde_json::Value)
        -> Result<serde_json::Value>;
}
