//! optdiff - original vs optimized code viewer
//!
//! Binary entry point: batch printing or the interactive viewer.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::info;

use optdiff::app::App;
use optdiff::cli::Args;
use optdiff::config::Config;
use optdiff::{listing, logging, output};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?.apply(args.overrides());
    let _log_guard = logging::init(&config.log)?;

    let session = listing::load_session(&args.original, &args.optimized, &config.diff)?;
    info!(
        language = %session.language,
        strategy = session.strategy.label(),
        strip_comments = session.strip_comments,
        "session loaded"
    );

    if let Some(mode) = args.print {
        output::write_session(mode, &session, &mut io::stdout().lock())?;
        return Ok(());
    }

    let terminal = ratatui::init();
    let _restore = scopeguard::guard((), |()| ratatui::restore());
    run(terminal, App::new(session))
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Polls with a 200ms timeout so an expired notification disappears
/// without waiting for a key press.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    }
    Ok(())
}
