//! HTTP routes for the documentation server.
//!
//! `/docs/` and `/template-setup/` are served as raw text. Anything not
//! routed falls through to static file serving from the server root, with
//! a generated listing for directories that have no `index.html`.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{self, State},
    handler::Handler,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::pages::{directory_listing, INDEX_HTML};
use super::structure::RepositoryStructure;

/// Shared state: the directory everything is served from.
#[derive(Debug, Clone)]
pub struct DocsState {
    pub root: PathBuf,
}

/// Build the documentation router for files under `root`.
pub fn router(root: impl Into<PathBuf>) -> Router {
    let state = Arc::new(DocsState { root: root.into() });

    let static_files = ServeDir::new(&state.root)
        .append_index_html_on_directories(true)
        .fallback(directory_index.with_state(Arc::clone(&state)));

    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/api/structure", get(structure))
        .route("/docs/{*path}", get(docs_file))
        .route("/template-setup/{*path}", get(template_setup_file))
        .fallback_service(static_files)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn index() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/html")], INDEX_HTML)
}

async fn structure() -> Response {
    match RepositoryStructure::TEMPLATE.to_json() {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize structure");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn docs_file(
    State(state): State<Arc<DocsState>>,
    extract::Path(path): extract::Path<String>,
) -> Response {
    serve_raw(&state.root, "docs", &path).await
}

async fn template_setup_file(
    State(state): State<Arc<DocsState>>,
    extract::Path(path): extract::Path<String>,
) -> Response {
    serve_raw(&state.root, "template-setup", &path).await
}

/// Serve `<root>/<prefix>/<rel>` as `text/plain`.
async fn serve_raw(root: &Path, prefix: &str, rel: &str) -> Response {
    let Some(path) = resolve(&root.join(prefix), rel) else {
        tracing::warn!(prefix, rel, "rejected path outside the server root");
        return not_found();
    };

    match tokio::fs::read(&path).await {
        Ok(content) => ([(header::CONTENT_TYPE, "text/plain")], content).into_response(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "raw file unavailable");
            not_found()
        }
    }
}

async fn directory_index(State(state): State<Arc<DocsState>>, uri: Uri) -> Response {
    let url_path = match urlencoding::decode(uri.path()) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => return not_found(),
    };
    let Some(dir) = resolve(&state.root, url_path.trim_start_matches('/')) else {
        return not_found();
    };

    let mut read_dir = match tokio::fs::read_dir(&dir).await {
        Ok(read_dir) => read_dir,
        Err(_) => return not_found(),
    };

    let mut entries = Vec::new();
    while let Ok(Some(entry)) = read_dir.next_entry().await {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await.is_ok_and(|t| t.is_dir()) {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort_by_key(|name| name.to_lowercase());

    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        directory_listing(&url_path, &entries),
    )
        .into_response()
}

/// Join `rel` onto `base`, refusing anything but plain path segments.
pub fn resolve(base: &Path, rel: &str) -> Option<PathBuf> {
    let rel = Path::new(rel);
    if rel
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        Some(base.join(rel))
    } else {
        None
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "File not found").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_nested_segments() {
        let base = Path::new("/srv");
        assert_eq!(
            resolve(base, "docs/guide.md"),
            Some(PathBuf::from("/srv/docs/guide.md"))
        );
        assert_eq!(resolve(base, ""), Some(PathBuf::from("/srv")));
    }

    #[test]
    fn resolve_rejects_traversal() {
        let base = Path::new("/srv");
        assert_eq!(resolve(base, "../etc/passwd"), None);
        assert_eq!(resolve(base, "docs/../../etc/passwd"), None);
        assert_eq!(resolve(base, "/etc/passwd"), None);
    }
}
