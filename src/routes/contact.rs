use axum::{
    extract::Query,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use mindbridge_contact::ContactDraft;

use crate::{error::AppError, template::Template};

/// GET /contact/send - Hands the draft off to the visitor's mail client
///
/// Target of the contact form when scripts are off; the browser follows the
/// redirect to the `mailto:` URI.
pub async fn send(
    template: Template,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let draft = ContactDraft::from_pairs(pairs);
    let href = template.config().contact.href(&draft);
    let location = HeaderValue::from_str(&href)?;

    tracing::info!(filled = !draft.is_empty(), "contact draft handed off to mail client");

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response())
}
