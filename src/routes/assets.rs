use axum::{
    body::Body,
    extract::Request,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use std::{
    convert::Infallible,
    future::{Ready, ready},
    path::{Path, PathBuf},
    task::{Context, Poll},
};
use tower::Service;

#[derive(RustEmbed)]
#[folder = "static/"]
#[prefix = "/"]
struct Assets;

/// Writes every embedded asset below `dir/static`, the layout the page links to.
pub fn export_assets(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let root = dir.join("static");
    let mut written = Vec::new();

    for name in Assets::iter() {
        let Some(content) = Assets::get(&name) else {
            continue;
        };

        let path = root.join(name.trim_start_matches('/'));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content.data)?;
        written.push(path);
    }

    Ok(written)
}

/// Serves files embedded from `static/`, mounted under `/static`.
#[derive(Default, Clone)]
pub struct AssetsService;

impl AssetsService {
    pub fn new() -> Self {
        Self
    }
}

impl Service<Request> for AssetsService {
    type Response = Response;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let path = req.uri().path();

        let resp = match Assets::get(path) {
            Some(content) => {
                let mime = mime_guess::from_path(path).first_or_octet_stream();

                (
                    [(header::CONTENT_TYPE, mime.as_ref().to_owned())],
                    Body::from(content.data),
                )
                    .into_response()
            }
            _ => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
        };

        ready(Ok(resp))
    }
}
