use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use mindbridge_shared::{Jump, jump};

use crate::page;

/// GET /jump/{id} - Anchor navigation without JavaScript
///
/// Known sections redirect to the fragment on the landing page. Unknown ids
/// answer `204 No Content` so the browser stays where it is.
pub async fn section(Path(id): Path<String>) -> Response {
    let mut anchors = page::anchors();

    match jump(&mut anchors, &id) {
        Jump::Scrolled => Redirect::to(&format!("/#{id}")).into_response(),
        Jump::Missing => {
            tracing::debug!(anchor = %id, "jump to unknown anchor ignored");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}
