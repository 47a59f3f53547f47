//! Documentation server.
//!
//! A stateless router answering `GET` requests:
//!
//! | Path | Response |
//! |------|----------|
//! | `/`, `/index.html` | landing page (`text/html`) |
//! | `/api/structure` | repository descriptor (`application/json`) |
//! | `/docs/...`, `/template-setup/...` | raw file as `text/plain`, or 404 |
//! | anything else | static file, `index.html`, or a directory listing |
//!
//! Paths with `..` or other non-plain segments are answered with 404.

pub mod pages;
pub mod routes;
pub mod structure;

pub use pages::INDEX_HTML;
pub use routes::{router, DocsState};
pub use structure::{RepositoryStructure, SpacedFormatter};

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 5000;

/// Bind address used when none is configured.
pub const DEFAULT_HOST: &str = "0.0.0.0";
