mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "aeromode",
    version,
    about = "AeroSpace mode indicator widget for status-bar overlays"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Render the mode pill fragment
    Render {
        /// Raw tracker output to render; `-` reads stdin. Omitted: run
        /// the configured tracker command once
        raw: Option<String>,
        /// Print the fragment as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
    /// Print the mode pill style sheet
    Css,
    /// Print the widget manifest (command, refresh interval, styles) as JSON
    Widget {
        /// Compact single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Render { raw, json } => commands::render::execute(raw.as_deref(), json),
        Commands::Css => commands::css::execute(),
        Commands::Widget { compact } => commands::widget::execute(compact),
    }
}
