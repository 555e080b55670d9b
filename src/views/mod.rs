//! HTML page rendering for the enhancement form.

use serde::Serialize;
use tera::Tera;

use crate::error::AppResult;
use crate::models::{ModelChoice, ParsedResult, PromptComponents};

const INDEX_TEMPLATE: &str = "index.html";

/// Compiles the embedded templates once at startup.
pub fn init_templates() -> AppResult<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_template(INDEX_TEMPLATE, include_str!("../../templates/index.html"))?;
    Ok(tera)
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelOption {
    pub id: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FormValues {
    pub api_key: String,
    pub role: String,
    pub context: String,
    pub task: String,
}

impl FormValues {
    pub fn from_parts(api_key: &str, components: &PromptComponents) -> Self {
        Self {
            api_key: api_key.to_string(),
            role: components.role.clone(),
            context: components.context.clone(),
            task: components.task.clone(),
        }
    }
}

/// Everything the form page can show in one render.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageView {
    pub form: FormValues,
    pub selected_model: ModelChoice,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub result: Option<ParsedResult>,
}

impl PageView {
    fn model_options(&self) -> Vec<ModelOption> {
        ModelChoice::ALL
            .into_iter()
            .map(|model| ModelOption {
                id: model.id(),
                label: model.label(),
                selected: model == self.selected_model,
            })
            .collect()
    }
}

pub fn render_page(tera: &Tera, view: &PageView) -> AppResult<String> {
    let mut context = tera::Context::new();
    context.insert("form", &view.form);
    context.insert("models", &view.model_options());
    context.insert("warning", &view.warning);
    context.insert("error", &view.error);
    context.insert("result", &view.result);

    Ok(tera.render(INDEX_TEMPLATE, &context)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_selects_cheapest_model() {
        let tera = init_templates().unwrap();
        let html = render_page(&tera, &PageView::default()).unwrap();

        assert!(html.contains(r#"<option value="gpt-3.5-turbo" selected>"#));
        assert!(html.contains(r#"<option value="gpt-4">"#));
        assert!(!html.contains("Download Enhanced Prompt"));
    }

    #[test]
    fn test_result_page_escapes_model_output() {
        let tera = init_templates().unwrap();
        let view = PageView {
            result: Some(ParsedResult::new("<b>notes</b>", "Do <script>x</script>")),
            ..PageView::default()
        };
        let html = render_page(&tera, &view).unwrap();

        assert!(html.contains("&lt;b&gt;notes&lt;&#x2F;b&gt;"));
        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("Download Enhanced Prompt"));
        assert!(html.contains(r#"action="/download""#));
    }

    #[test]
    fn test_warning_and_error_render() {
        let tera = init_templates().unwrap();
        let view = PageView {
            warning: Some("Please fill in all three prompt components".to_string()),
            error: Some("Error calling OpenAI API: boom".to_string()),
            ..PageView::default()
        };
        let html = render_page(&tera, &view).unwrap();

        assert!(html.contains("Please fill in all three prompt components"));
        assert!(html.contains("Error calling OpenAI API: boom"));
        assert!(!html.contains("Prompt enhanced successfully!"));
    }
}
