mod app;
mod event;
mod theme;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use app::App;
use clap::{Parser, Subcommand};
use ratatui::DefaultTerminal;
use recipehub_core::services::filter::{filter_recipes, RecipeFilter};
use recipehub_core::services::ticker::TokioTickScheduler;
use recipehub_core::{AppController, Recipe, RecipeBook};
use recipehub_shared::telemetry::init_telemetry;
use recipehub_shared::AppConfig;
use tokio::sync::mpsc;
use tracing::info;

#[derive(Parser)]
#[command(name = "recipehub")]
#[command(about = "Share, scale and cook recipes from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Extra config file layered over config/default.toml
    #[arg(short, long, env = "RECIPEHUB_CONFIG")]
    config: Option<PathBuf>,

    /// Step timer tick period in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: Option<u64>,

    /// Start with an empty recipe book
    #[arg(long)]
    no_mock_data: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (Terminal User Interface) - Default
    Tui,
    /// Print the recipe book through the dashboard filter
    List {
        /// Case-insensitive text matched against title, description and tags
        #[arg(short, long, default_value = "")]
        query: String,

        /// all, my-recipes, collaborations or public
        #[arg(short, long, default_value = "all")]
        filter: String,

        /// Display name used by the my-recipes filter
        #[arg(long)]
        as_user: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    color_eyre::install().ok();
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(tick_ms) = cli.tick_ms {
        config.timer.tick_ms = tick_ms;
    }
    if cli.no_mock_data {
        config.data.seed_mock_recipes = false;
    }

    // Held until exit so buffered log lines are flushed
    let _guard = init_telemetry(&config.log)?;
    info!(
        app = %config.app.name,
        tick_ms = config.timer.tick_ms,
        seeded = config.data.seed_mock_recipes,
        "Starting"
    );

    let book = if config.data.seed_mock_recipes {
        RecipeBook::seeded()
    } else {
        RecipeBook::default()
    };

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => start_tui(&config, book)?,
        Commands::List {
            query,
            filter,
            as_user,
            json,
        } => {
            let filter: RecipeFilter = filter.parse()?;
            list_recipes(&book, &query, filter, as_user.as_deref(), json)?;
        }
    }

    Ok(())
}

fn list_recipes(
    book: &RecipeBook,
    query: &str,
    filter: RecipeFilter,
    user: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let recipes = filter_recipes(book.all(), query, filter, user);
    info!(query, %filter, matched = recipes.len(), "Listing recipes");

    if json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
        return Ok(());
    }

    if recipes.is_empty() {
        println!("No recipes found.");
        return Ok(());
    }
    for recipe in recipes {
        println!("{}", table_row(recipe));
    }
    Ok(())
}

fn table_row(recipe: &Recipe) -> String {
    format!(
        "{:<36} {:<16} {:>7} {:>4.1}  {}",
        recipe.title,
        recipe.author,
        recipe.cook_time_label(),
        recipe.rating,
        recipe.tags.join(", ")
    )
}

fn start_tui(config: &AppConfig, book: RecipeBook) -> anyhow::Result<()> {
    // Initialize terminal (ratatui::init handles raw mode + alternate screen)
    let terminal = ratatui::init();

    let result = run_app(terminal, config, book);

    // Restore terminal (always, even on error)
    ratatui::restore();

    result
}

fn run_app(mut terminal: DefaultTerminal, config: &AppConfig, book: RecipeBook) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let scheduler = Arc::new(TokioTickScheduler::new(tx));
    let controller = AppController::new(book, scheduler, Duration::from_millis(config.timer.tick_ms));
    let mut app = App::new(controller);

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        if app.should_quit {
            break;
        }

        if let Some(evt) = event::poll_event(config.ui.poll_ms)? {
            event::handle_event(&mut app, evt)?;
        }

        // Timer ticks queued since the last frame
        while let Ok(app_event) = rx.try_recv() {
            app.controller.handle_event(app_event);
        }
    }

    info!("Exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_tui() {
        let cli = Cli::parse_from(["recipehub"]);
        assert!(cli.command.is_none());
        assert!(!cli.no_mock_data);
    }

    #[test]
    fn test_cli_list_args() {
        let cli = Cli::parse_from([
            "recipehub",
            "--tick-ms",
            "250",
            "list",
            "--query",
            "bread",
            "--filter",
            "public",
        ]);
        assert_eq!(cli.tick_ms, Some(250));
        match cli.command {
            Some(Commands::List { query, filter, .. }) => {
                assert_eq!(query, "bread");
                assert_eq!(filter.parse::<RecipeFilter>().unwrap(), RecipeFilter::Public);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_zero_tick_rejected() {
        assert!(Cli::try_parse_from(["recipehub", "--tick-ms", "0"]).is_err());
    }

    #[test]
    fn test_table_row() {
        let book = RecipeBook::seeded();
        let row = table_row(&book.all()[2]);
        assert!(row.starts_with("Rustic Sourdough Bread"));
        assert!(row.contains("12h 0m"));
        assert!(row.contains("Bread, Fermentation, Advanced"));
    }
}
