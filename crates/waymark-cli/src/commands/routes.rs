use anyhow::Result;
use colored::Colorize;
use waymark_router::RouteTable;
use waymark_server::{discover_routes, Config};

use super::resolve_dir;

/// Prints the derived route table for a directory without serving it.
pub fn execute(dir: &str, extensions: Vec<String>) -> Result<()> {
    let root = resolve_dir(dir)?;
    let extensions = if extensions.is_empty() {
        Config::default().routing.extensions
    } else {
        extensions
    };

    let files = discover_routes(&root, &extensions)?;
    let table = RouteTable::build(files, &root)?;

    println!();
    println!("{} {}", "Root:".cyan().bold(), root.display());
    println!();

    let mut exact: Vec<_> = table.exact_routes().collect();
    exact.sort_by_key(|route| route.pattern().to_string());

    if !exact.is_empty() {
        println!("{}", "Exact routes:".cyan().bold());
        for route in exact {
            println!(
                "  {} {}  {}",
                "→".green(),
                route.pattern().bold(),
                route.file().display().to_string().dimmed()
            );
        }
        println!();
    }

    if !table.scan_routes().is_empty() {
        println!("{}", "Parameterized routes, in match order:".cyan().bold());
        for (position, route) in table.scan_routes().iter().enumerate() {
            println!(
                "  {} {}  {}",
                format!("{}.", position + 1).green(),
                route.pattern().bold(),
                route.file().display().to_string().dimmed()
            );
        }
        println!();
    }

    println!("{} routes total", table.len().to_string().bold());
    Ok(())
}
