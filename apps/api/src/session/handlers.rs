use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::forms::FormView;
use crate::models::resume::ResumeSnapshot;
use crate::navigation::Section;
use crate::preview::html::render_html;
use crate::preview::markdown::render_markdown;
use crate::state::AppState;

fn parse_section(id: &str) -> Result<Section, AppError> {
    id.parse()
        .map_err(|_| AppError::NotFound(format!("Unknown section '{id}'")))
}

#[derive(Serialize)]
pub struct ResumeResponse {
    pub revision: u64,
    pub resume: ResumeSnapshot,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeResponse> {
    let session = state.session.lock().await;
    Json(ResumeResponse {
        revision: session.revision(),
        resume: session.snapshot().as_ref().clone(),
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewFormat {
    #[default]
    Json,
    Markdown,
    Html,
}

#[derive(Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub format: PreviewFormat,
}

/// GET /api/v1/preview?format=json|markdown|html
pub async fn handle_get_preview(
    State(state): State<AppState>,
    query: Result<Query<PreviewQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = query?;
    let document = state.session.lock().await.preview().document();
    let response = match params.format {
        PreviewFormat::Json => Json(document).into_response(),
        PreviewFormat::Markdown => (
            [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
            render_markdown(&document),
        )
            .into_response(),
        PreviewFormat::Html => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            render_html(&document),
        )
            .into_response(),
    };
    Ok(response)
}

#[derive(Serialize)]
pub struct SectionInfo {
    pub id: Section,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct NavigationResponse {
    pub current: Section,
    pub sections: Vec<SectionInfo>,
}

fn navigation_response(current: Section) -> NavigationResponse {
    NavigationResponse {
        current,
        sections: Section::ALL
            .into_iter()
            .map(|id| SectionInfo {
                id,
                label: id.label(),
            })
            .collect(),
    }
}

/// GET /api/v1/navigation
pub async fn handle_get_navigation(State(state): State<AppState>) -> Json<NavigationResponse> {
    let current = state.session.lock().await.navigator().current();
    Json(navigation_response(current))
}

#[derive(Deserialize)]
pub struct SelectSection {
    pub section: String,
}

/// PUT /api/v1/navigation
pub async fn handle_select_section(
    State(state): State<AppState>,
    body: Result<Json<SelectSection>, JsonRejection>,
) -> Result<Json<NavigationResponse>, AppError> {
    let Json(req) = body?;
    let current = state
        .session
        .lock()
        .await
        .navigator_mut()
        .select_id(&req.section);
    debug!(section = %current, "section selected");
    Ok(Json(navigation_response(current)))
}

/// GET /api/v1/forms/:section
pub async fn handle_get_form(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<FormView>, AppError> {
    let section = parse_section(&section)?;
    let session = state.session.lock().await;
    Ok(Json(session.form(section).view()))
}

#[derive(Deserialize)]
pub struct FieldEdit {
    pub path: String,
    pub value: String,
}

/// PATCH /api/v1/forms/:section/fields
pub async fn handle_set_field(
    State(state): State<AppState>,
    Path(section): Path<String>,
    body: Result<Json<FieldEdit>, JsonRejection>,
) -> Result<Json<FormView>, AppError> {
    let section = parse_section(&section)?;
    let Json(req) = body?;
    let mut session = state.session.lock().await;
    let form = session.form_mut(section);
    form.set_field(&req.path, req.value)?;
    debug!(%section, path = %req.path, "draft field edited");
    Ok(Json(form.view()))
}

#[derive(Serialize)]
pub struct RowAppended {
    pub index: usize,
    pub form: FormView,
}

/// POST /api/v1/forms/:section/rows/:list
pub async fn handle_append_row(
    State(state): State<AppState>,
    Path((section, list)): Path<(String, String)>,
) -> Result<Json<RowAppended>, AppError> {
    let section = parse_section(&section)?;
    let mut session = state.session.lock().await;
    let form = session.form_mut(section);
    let index = form.append_row(&list)?;
    debug!(%section, %list, index, "row appended");
    Ok(Json(RowAppended {
        index,
        form: form.view(),
    }))
}

/// DELETE /api/v1/forms/:section/rows/:list/:index
pub async fn handle_remove_row(
    State(state): State<AppState>,
    Path((section, list, index)): Path<(String, String, usize)>,
) -> Result<Json<FormView>, AppError> {
    let section = parse_section(&section)?;
    let mut session = state.session.lock().await;
    let form = session.form_mut(section);
    form.remove_row(&list, index)?;
    debug!(%section, %list, index, "row removed");
    Ok(Json(form.view()))
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub revision: u64,
    pub form: FormView,
}

/// POST /api/v1/forms/:section/submit
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<SubmitResponse>, AppError> {
    let section = parse_section(&section)?;
    let mut session = state.session.lock().await;
    session.submit(section)?;
    Ok(Json(SubmitResponse {
        revision: session.revision(),
        form: session.form(section).view(),
    }))
}

/// POST /api/v1/forms/:section/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<FormView>, AppError> {
    let section = parse_section(&section)?;
    let mut session = state.session.lock().await;
    let form = session.form_mut(section);
    form.reset();
    Ok(Json(form.view()))
}
