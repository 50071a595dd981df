//! Compiled template set and HTML rendering.

use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

/// Name of the full home page template.
pub const HOME: &str = "home.html";
/// Name of the task-list fragment.
pub const TASK_LIST: &str = "task_list.html";
/// Name of the empty add-task form fragment.
pub const NEW_TASK_FORM: &str = "new_task_form.html";
/// Name of the pre-filled edit form fragment.
pub const EDIT_TASK_FORM: &str = "edit_task_form.html";

const HOME_SOURCE: &str = include_str!("../../templates/home.html");
const TASK_LIST_SOURCE: &str = include_str!("../../templates/task_list.html");
const NEW_TASK_FORM_SOURCE: &str = include_str!("../../templates/new_task_form.html");
const EDIT_TASK_FORM_SOURCE: &str = include_str!("../../templates/edit_task_form.html");

/// Template lookup or execution failure.
#[derive(Debug, Error)]
#[error("template rendering failed: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// Compiled template set shared read-only across requests.
///
/// All templates are embedded at compile time and added to the environment
/// once at startup; the `.html` template names keep minijinja's automatic
/// HTML escaping active for user-supplied descriptions.
#[derive(Debug)]
pub struct TemplateEngine {
    environment: Environment<'static>,
}

impl TemplateEngine {
    /// Compiles the template set.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when any template source fails to compile.
    pub fn new() -> Result<Self, RenderError> {
        let mut environment = Environment::new();
        environment.add_template(HOME, HOME_SOURCE)?;
        environment.add_template(TASK_LIST, TASK_LIST_SOURCE)?;
        environment.add_template(NEW_TASK_FORM, NEW_TASK_FORM_SOURCE)?;
        environment.add_template(EDIT_TASK_FORM, EDIT_TASK_FORM_SOURCE)?;
        Ok(Self { environment })
    }

    /// Renders the named template with the given context value.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the name is unknown or execution fails.
    pub fn render<S>(&self, name: &str, ctx: S) -> Result<String, RenderError>
    where
        S: Serialize,
    {
        let template = self.environment.get_template(name)?;
        Ok(template.render(ctx)?)
    }
}
