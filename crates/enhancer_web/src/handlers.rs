//! HTTP handlers for the enhancer web UI

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use prompt_enhancer::{validate_submission, Enhancer, EnhancerError};
use tracing::Instrument;
use uuid::Uuid;

use crate::types::{EnhanceForm, PageContext};
use crate::{AppState, PAGE_TEMPLATE};

/// Handler for GET /
pub async fn index(State(state): State<AppState>) -> Response {
    render(&state, StatusCode::OK, &PageContext::from_form(&EnhanceForm::default()))
}

/// Handler for POST /enhance
pub async fn enhance(State(state): State<AppState>, Form(form): Form<EnhanceForm>) -> Response {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("enhance", %request_id, model = %form.model);

    async move {
        let page = PageContext::from_form(&form);
        let fields = form.fields();

        if let Err(e) = validate_submission(Some(&form.api_key), &fields) {
            tracing::info!(error = %e, "submission rejected");
            return render_error(&state, page, e);
        }

        let mut config = match form.config() {
            Ok(config) => config,
            Err(e) => return render_error(&state, page, e),
        };
        if let Some(url) = &state.backend_url {
            config = config.with_base_url(url);
        }

        let enhancer = match Enhancer::new(config) {
            Ok(enhancer) => enhancer,
            Err(e) => return render_error(&state, page, e),
        };

        match enhancer.enhance(&fields).await {
            Ok(enhancement) => {
                render(&state, StatusCode::OK, &page.with_outputs(&enhancement.outputs))
            }
            Err(e) => render_error(&state, page, e),
        }
    }
    .instrument(span)
    .await
}

/// Fallback for unknown routes
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

fn render_error(state: &AppState, page: PageContext, error: EnhancerError) -> Response {
    let status = if error.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::BAD_GATEWAY
    };
    render(state, status, &page.with_error(error.to_string()))
}

fn render(state: &AppState, status: StatusCode, page: &PageContext) -> Response {
    let html = state
        .templates
        .get_template(PAGE_TEMPLATE)
        .and_then(|template| template.render(page));

    match html {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "page rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}
