use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use askama::Template;
use mindbridge_contact::ContactDraft;
use time::OffsetDateTime;

use crate::routes::export_assets;

/// Renders the landing page once, for static hosting.
///
/// With `output`, the page is written there and the embedded assets land in a
/// `static/` directory beside it. Without it, only the page goes to stdout.
pub fn render(config: &crate::config::Config, output: Option<PathBuf>) -> Result<()> {
    let year = OffsetDateTime::now_utc().year();
    let html = crate::page::index(config, &ContactDraft::new(), year)?.render()?;

    let Some(path) = output else {
        println!("{html}");
        return Ok(());
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    std::fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;

    let assets =
        export_assets(dir).with_context(|| format!("writing assets to {}", dir.display()))?;

    tracing::info!(path = %path.display(), assets = assets.len(), "Page rendered");

    Ok(())
}
