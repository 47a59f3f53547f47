//! Documentation server entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use teamified::docs::{router, DEFAULT_HOST, DEFAULT_PORT};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Serve the template's documentation pages and repository metadata.
#[derive(Parser, Debug)]
#[command(name = "teamified-docs", version, about)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "TEAMIFIED_DOCS_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Directory to serve files from (default: current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("teamified=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("teamified=info,tower_http=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

async fn serve(args: Args) -> anyhow::Result<()> {
    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    anyhow::ensure!(root.is_dir(), "{} is not a directory", root.display());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::debug!(root = %root.display(), "serving files");
    println!("Starting documentation server on http://{}", addr);
    println!("Repository Template Documentation is ready!");

    axum::serve(listener, router(root))
        .await
        .context("server error")?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    match serve(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
