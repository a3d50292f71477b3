mod app;
mod domain;
mod input;
mod notifications;
mod persistence;
mod ticker;
mod timer;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{delete_settings, load_settings, save_settings, settings_file};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "tomate")]
#[command(about = "A terminal Pomodoro timer with a built-in task list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective timer settings and where they are stored
    Config,
    /// Delete the settings file, restoring the defaults (25/5/15/4)
    ResetSettings,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config) => {
            let config = load_settings();
            println!("Settings file: {}", settings_file()?.display());
            println!();
            println!("work minutes:             {}", config.work_minutes);
            println!("short break minutes:      {}", config.short_break_minutes);
            println!("long break minutes:       {}", config.long_break_minutes);
            println!("intervals per long break: {}", config.intervals_until_long_break);
            Ok(())
        }
        Some(Commands::ResetSettings) => {
            if delete_settings()? {
                println!("Settings reset to defaults.");
            } else {
                println!("No settings file found; defaults already in effect.");
            }
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui()
        }
    }
}

fn run_tui() -> Result<()> {
    // Load persisted timer configuration (defaults on absence or failure)
    let config = load_settings();

    let mut app = AppState::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Flush any pending settings save on exit
    if app.needs_settings_save {
        if let Err(e) = save_settings(app.timer.config()) {
            eprintln!("Error saving settings: {}", e);
        }
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Advance the timer and handle whatever it emitted
        app.tick();

        // Persist settings changed through the settings form
        if app.needs_settings_save {
            save_settings(app.timer.config())?;
            app.needs_settings_save = false;
        }
    }
}
