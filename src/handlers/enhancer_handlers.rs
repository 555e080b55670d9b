use actix_web::{http::header, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tera::Tera;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{ModelChoice, PromptComponents};
use crate::services::{EnhancementSubmission, PromptEnhancerService};
use crate::views::{render_page, FormValues, PageView};

pub const DOWNLOAD_FILE_NAME: &str = "enhanced_prompt.txt";

const NO_USABLE_CONTENT: &str =
    "The model response did not contain a usable analysis and enhanced prompt. Please try again.";

/// Form fields posted by the page. Everything defaults to empty so that a
/// missing field is reported as a validation warning rather than a 400.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EnhanceForm {
    pub api_key: String,
    pub model: String,
    pub role: String,
    pub context: String,
    pub task: String,
}

/// JSON body for `POST /api/enhance`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EnhanceApiRequest {
    pub api_key: String,
    pub model: Option<String>,
    pub role: String,
    pub context: String,
    pub task: String,
}

#[derive(Debug, Serialize)]
pub struct EnhanceApiResponse {
    pub request_id: Uuid,
    pub model: ModelChoice,
    pub analysis: String,
    pub enhanced_prompt: String,
    pub displayable: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DownloadForm {
    pub enhanced_prompt: String,
}

fn parse_model(model: Option<&str>) -> AppResult<ModelChoice> {
    match model.map(str::trim) {
        None | Some("") => Ok(ModelChoice::default()),
        Some(id) => id.parse(),
    }
}

fn to_submission(
    api_key: String,
    model: Option<&str>,
    components: PromptComponents,
) -> AppResult<EnhancementSubmission> {
    Ok(EnhancementSubmission {
        api_key,
        model: parse_model(model)?,
        components,
    })
}

// Rendered pages can carry the submitted API key
fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .body(body)
}

/// GET / - the empty form
pub async fn index(tera: web::Data<Tera>) -> Result<HttpResponse, AppError> {
    Ok(html(render_page(&tera, &PageView::default())?))
}

/// POST /enhance - form submission, answered with the re-rendered page
#[instrument(skip(form, service, tera), fields(model = %form.model))]
pub async fn enhance_form(
    form: web::Form<EnhanceForm>,
    service: web::Data<PromptEnhancerService>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let components = PromptComponents::new(form.role, form.context, form.task);
    let mut view = PageView {
        form: FormValues::from_parts(&form.api_key, &components),
        selected_model: parse_model(Some(&form.model)).unwrap_or_default(),
        ..PageView::default()
    };

    let outcome = match to_submission(form.api_key, Some(&form.model), components) {
        Ok(submission) => service.enhance(&submission).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(outcome) if outcome.result.is_displayable() => {
            info!(request_id = %outcome.request_id, "Rendering enhanced prompt");
            view.result = Some(outcome.result);
        }
        Ok(outcome) => {
            warn!(request_id = %outcome.request_id, "Model response had an empty section");
            view.warning = Some(NO_USABLE_CONTENT.to_string());
        }
        Err(e) if e.is_warning() => view.warning = Some(e.user_message().to_string()),
        Err(e) => view.error = Some(e.user_message().to_string()),
    }

    Ok(html(render_page(&tera, &view)?))
}

/// POST /api/enhance - JSON variant of the form submission
#[instrument(skip(payload, service))]
pub async fn enhance_api(
    payload: web::Json<EnhanceApiRequest>,
    service: web::Data<PromptEnhancerService>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    let submission = to_submission(
        payload.api_key,
        payload.model.as_deref(),
        PromptComponents::new(payload.role, payload.context, payload.task),
    )?;

    let outcome = service.enhance(&submission).await?;
    let displayable = outcome.result.is_displayable();

    Ok(HttpResponse::Ok().json(EnhanceApiResponse {
        request_id: outcome.request_id,
        model: outcome.model,
        analysis: outcome.result.analysis,
        enhanced_prompt: outcome.result.enhanced_prompt,
        displayable,
    }))
}

/// POST /download - returns the enhanced prompt as a plain-text attachment
pub async fn download_prompt(
    form: web::Form<DownloadForm>,
) -> Result<HttpResponse, AppError> {
    // Browsers submit textarea and hidden values with CRLF line breaks
    let content = form.enhanced_prompt.replace("\r\n", "\n");
    if content.trim().is_empty() {
        return Err(AppError::BadRequest("Nothing to download".to_string()));
    }

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .append_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", DOWNLOAD_FILE_NAME),
        ))
        .body(content))
}
