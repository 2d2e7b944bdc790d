use askama::Template;
use axum::{
    http::{StatusCode, header::InvalidHeaderValue},
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::template::{NotFoundTemplate, SERVER_ERROR_MESSAGE, ServerTemplate};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Template error: {0}")]
    Render(#[from] askama::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    #[error("Not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, page) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, NotFoundTemplate.render()),
            AppError::Render(_) | AppError::InvalidHeader(_) => {
                tracing::error!("{self}");
                (StatusCode::INTERNAL_SERVER_ERROR, ServerTemplate.render())
            }
        };

        match page {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!("Failed to render error page: {err}");
                (status, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }
}
