use axum::{
    extract::Query,
    response::{IntoResponse, Response},
};
use mindbridge_contact::ContactDraft;

use crate::{error::AppError, template::Template};

/// GET / - The landing page
///
/// Query parameters prefill the contact form, so a draft survives a no-JS
/// round trip.
pub async fn page(
    template: Template,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let index = template.index(&ContactDraft::from_pairs(pairs))?;

    Ok(template.render(index).into_response())
}
