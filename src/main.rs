mod app;
mod catalog;
mod config;
mod dex;
mod error;
mod logging;
mod lookup;
mod ui;

use app::{App, InputMode};
use clap::{Parser, Subcommand};
use config::Config;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dex::{DexClient, Identifier, Record, RecordSource};
use lookup::{Capabilities, Direction};
use std::path::PathBuf;
use std::sync::Arc;

/// Look up creatures by name or number in the public dex API
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the dex API (falls back to $POKEDEX_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Compact mode: no stats, no previous/next navigation
    #[arg(long, global = true)]
    basic: bool,

    /// Where to write the log (defaults to the user cache directory)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the TUI (default)
    Run {
        /// Name or number to look up on start
        identifier: Option<String>,
    },
    /// Fetch one record and print it
    Lookup {
        /// Name or number
        identifier: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.base_url, cli.basic, cli.log_file);
    logging::init(config.log_file.as_deref());

    let client = DexClient::new(&config.base_url);
    tracing::info!(base_url = %client.base_url(), capabilities = ?config.capabilities, "starting");

    match cli.command.unwrap_or(Commands::Run { identifier: None }) {
        Commands::Lookup { identifier, json } => {
            let identifier = match Identifier::parse(&identifier) {
                Ok(id) => id,
                Err(e) => {
                    eprintln!("Error: {}", e.user_message());
                    std::process::exit(2);
                }
            };
            match client.fetch(&identifier).await {
                Ok(record) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&record)?);
                    } else {
                        print_record(&record, config.capabilities);
                    }
                }
                Err(e) => {
                    tracing::warn!(%identifier, error = %e, "lookup failed");
                    eprintln!("Error: {}", e.user_message());
                    std::process::exit(1);
                }
            }
        }
        Commands::Run { identifier } => {
            let mut app = App::new(Arc::new(client), config.capabilities);
            if let Some(text) = identifier {
                app.search_for(&text);
            }

            // Init terminal
            let mut terminal = ratatui::init();

            // Main loop
            let result = run_app(&mut terminal, &mut app).await;

            // Restore terminal
            ratatui::restore();

            if let Err(e) = result {
                tracing::error!(error = %e, "terminal loop failed");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn print_record(record: &Record, capabilities: Capabilities) {
    println!(
        "{} {}",
        catalog::format_id(record.id),
        catalog::display_name(&record.name)
    );
    let labels: Vec<&str> = record
        .categories
        .iter()
        .map(|t| catalog::type_label(t))
        .collect();
    println!("Tipos:  {}", labels.join(", "));
    if let Some(url) = &record.image_url {
        println!("Arte:   {}", url);
    }
    if capabilities.statistics {
        println!(
            "Altura: {:.1} m   Peso: {:.1} kg",
            record.measurements.height_m(),
            record.measurements.weight_kg()
        );
        for stat in &record.statistics {
            println!(
                "  {:<10} {:>3} {}",
                catalog::stat_label(&stat.name),
                stat.value,
                catalog::text_bar(stat.value, 30)
            );
        }
    }
}

async fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.drain_completions();
        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with a 250ms timeout
        if crossterm::event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key(app, key);
            }
        } else {
            app.tick();
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // If help is showing, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.input_mode {
        InputMode::Editing => handle_search_input(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.submit_search();
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            app.input.push(c);
        }
        _ => {}
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('/') | KeyCode::Char('i') => {
            app.input.clear();
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.navigate(Direction::Previous);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.navigate(Direction::Next);
        }
        KeyCode::Char('o') => {
            app.open_artwork();
        }
        KeyCode::Char('y') => {
            app.yank_artwork();
        }
        _ => {}
    }
}
