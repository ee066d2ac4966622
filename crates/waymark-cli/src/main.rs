mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

#[derive(Parser)]
#[command(name = "waymark")]
#[command(version, about = "Waymark - file-system HTTP routing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve a directory as a route tree
    Serve {
        /// Root directory containing route files
        #[arg(default_value = "pages")]
        dir: String,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind
        #[arg(long)]
        host: Option<String>,

        /// Route file extension (repeatable); defaults to ts, js, jsx, tsx
        #[arg(long = "ext")]
        extensions: Vec<String>,

        /// Keep serving when zero routes are discovered
        #[arg(long)]
        allow_empty: bool,

        /// Log per-request match traces
        #[arg(short, long)]
        debug: bool,
    },

    /// Print the derived route table without serving it
    Routes {
        /// Root directory containing route files
        #[arg(default_value = "pages")]
        dir: String,

        /// Route file extension (repeatable); defaults to ts, js, jsx, tsx
        #[arg(long = "ext")]
        extensions: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<()> = match cli.command {
        Commands::Serve {
            dir,
            port,
            host,
            extensions,
            allow_empty,
            debug,
        } => commands::serve::execute(&dir, port, host, extensions, allow_empty, debug),
        Commands::Routes { dir, extensions } => commands::routes::execute(&dir, extensions),
    };

    if let Err(err) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}
