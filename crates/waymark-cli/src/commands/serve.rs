use anyhow::{Context, Result};
use colored::Colorize;
use tracing_subscriber::filter::LevelFilter;
use waymark_server::{Config, ServerBuilder};

use super::resolve_dir;

/// Starts the preview server for a route directory.
///
/// Flags win over `waymark.toml`, which wins over defaults.
pub fn execute(
    dir: &str,
    port: Option<u16>,
    host: Option<String>,
    extensions: Vec<String>,
    allow_empty: bool,
    debug: bool,
) -> Result<()> {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = Config::load_default()?;
    let root = resolve_dir(dir)?;
    let host = host.unwrap_or(config.server.host);
    let port = port.unwrap_or(config.server.port);
    let extensions = if extensions.is_empty() {
        config.routing.extensions
    } else {
        extensions
    };
    let allow_empty = allow_empty || config.routing.allow_empty;

    let server = ServerBuilder::new(root.to_string_lossy().into_owned())
        .extensions(extensions)
        .allow_empty(allow_empty)
        .build()?;

    println!();
    println!("{}", "Starting waymark...".green().bold());
    println!();
    println!("  {} {}", "Root:".cyan(), root.display());

    match server.table() {
        Some(table) => {
            println!("  {} {} routes", "Found:".cyan(), table.len());
            println!();
            println!("{}", "Routes:".cyan().bold());

            let mut exact: Vec<_> = table.exact_routes().collect();
            exact.sort_by_key(|route| route.pattern().to_string());
            for route in exact {
                println!("  {} {}", "→".green(), route.pattern());
            }
            for route in table.scan_routes() {
                println!("  {} {}", "→".green(), route.pattern());
            }
        }
        None => {
            println!(
                "  {} {}",
                "Warning:".yellow().bold(),
                "0 routes discovered - serving not-found for every path"
            );
        }
    }

    let addr = format!("{}:{}", host, port);
    println!();
    println!(
        "  {} {}",
        "URL:".cyan(),
        format!("http://{}", addr).bold()
    );
    println!("  Press Ctrl+C to stop");
    println!();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        axum::serve(listener, server.into_router())
            .await
            .context("server error")
    })
}
