//! Terminal user interface for Agora

mod input;
mod render;

pub use input::handle_key;
pub use render::render;

use crate::app::{App, Event, Handler, Message, Worker};
use crate::launch::SessionRoute;
use anyhow::Result;
use ratatui::crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::Receiver;
use tracing::debug;

/// Run the TUI until the user quits or launches a session.
///
/// Returns the launched route, if any.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to or restored.
pub fn run(
    mut app: App,
    worker: &Worker,
    messages: Receiver<Message>,
) -> Result<Option<SessionRoute>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = Handler::new(app.config.poll_interval_ms, messages);
    worker.dispatch_all(app.startup());

    let result = run_loop(&mut terminal, &mut app, &mut events, worker);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|()| app.navigation.take())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut Handler,
    worker: &Worker,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| render(frame, app))?;

        let tasks = match events.next()? {
            Event::Tick => {
                app.tick();
                Vec::new()
            }
            Event::Key(key) => handle_key(app, key),
            Event::Backend(message) => app.apply(message),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                Vec::new()
            }
        };
        worker.dispatch_all(tasks);
    }

    Ok(())
}
