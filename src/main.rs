mod app;
mod domain;
mod input;
mod notifications;
mod persistence;
mod report;
mod ticker;
mod ui;

use app::AppState;
use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_nook_dir, init_local_nook, FileStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "nook")]
#[command(about = "A quiet terminal corner with a publish checklist, focus timer and notes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .nook directory in the current directory
    Init,
    /// Print checklist completion, roadmap and recent notes without opening the TUI
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            // Initialize local .nook directory
            let nook_dir = init_local_nook()?;
            println!("Initialized nook directory: {}", nook_dir.display());
            println!();
            println!("Nook will now use this local directory for its records.");
            println!("Run 'nook' to open your personal space.");
            Ok(())
        }
        Some(Commands::Status) => {
            let dir = ensure_nook_dir()?;
            let store = FileStore::new(dir);
            print!("{}", report::render_status(&store));
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui()
        }
    }
}

fn run_tui() -> Result<()> {
    // Ensure the nook directory exists and show which one we're using
    let nook_dir = ensure_nook_dir()?;
    eprintln!("Using nook directory: {}", nook_dir.display());

    // Load all three records through the file store
    let mut app = AppState::new(Box::new(FileStore::new(nook_dir)));

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

    // Stop the countdown and flush every record
    app.dispose();

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

        // Advance the focus countdown
        app.tick();
    }
}
