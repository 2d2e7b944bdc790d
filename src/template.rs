use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use mindbridge_contact::ContactDraft;
use std::{convert::Infallible, sync::Arc};
use time::OffsetDateTime;

use crate::{
    config::Config,
    page::{self, IndexTemplate},
};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Per-request rendering context: shared configuration plus the clock reading
/// taken when the request came in.
pub struct Template {
    config: Arc<Config>,
    pub year: i32,
}

impl Template {
    pub fn new(config: Arc<Config>, year: i32) -> Self {
        Self { config, year }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&self, draft: &ContactDraft) -> askama::Result<IndexTemplate> {
        page::index(&self.config, draft, self.year)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template::new(
            state.config.clone(),
            OffsetDateTime::now_utc().year(),
        ))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;
