//! Terminal setup and the async host event loop

use crate::config::HostConfig;
use crate::ui::app::HostApp;
use crate::ui::core::{EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Run the demo host with the widget embedded.
pub async fn run_app(config: &HostConfig) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = HostApp::new(config);
    let mut event_handler = EventHandler::new();
    app.on_mount()?;

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut HostApp,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f))?;
            app.after_render();
            needs_render = false;
        }

        match event_handler.next_event().await? {
            event @ EventType::Key(_) => {
                app.handle_event(event);
                needs_render = true;
            }
            EventType::Resize(_, _) => needs_render = true,
            EventType::Tick => {
                // Deferred actions and host events drain on ticks
                if app.process_background() {
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
