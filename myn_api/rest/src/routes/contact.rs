use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Form, Json, Router,
};
use myn_core_contact_contracts::ContactService;
use myn_models::{contact::SubmissionResult, inquiry::ServiceCategory};

use crate::models::contact::ApiInquiryInput;

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit_inquiry))
        .route("/contact/services", routing::get(list_services))
        .with_state(service)
}

async fn submit_inquiry(
    service: State<Arc<impl ContactService>>,
    Form(input): Form<ApiInquiryInput>,
) -> Response {
    let result = service.submit_inquiry(None, input.into()).await;
    let code = match &result {
        SubmissionResult::ValidationFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SubmissionResult::DeliveryFailed { .. } => StatusCode::BAD_GATEWAY,
        SubmissionResult::Succeeded { .. } => StatusCode::OK,
    };
    (code, Json(result)).into_response()
}

async fn list_services() -> Json<Vec<&'static str>> {
    Json(
        ServiceCategory::ALL
            .into_iter()
            .map(|category| category.as_str())
            .collect(),
    )
}
