mod app;
pub mod keybindings;
mod message;
pub mod ui;

use crate::config::Config;
use crate::integrations::clipboard::SystemClipboard;
use crate::integrations::linear::LinearClient;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;

pub use app::App;
pub use message::Message;

pub async fn run(config: Config) -> Result<()> {
    // Check if stdout is a terminal
    if !std::io::IsTerminal::is_terminal(&io::stdout()) {
        anyhow::bail!("lazylinear requires an interactive terminal");
    }

    let mut app = App::new(
        Box::new(LinearClient::new(&config)),
        Box::new(SystemClipboard::new()),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = or_restore(setup_terminal(), restore_screen)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal even when the loop failed; the loop error wins
    let restored = restore_terminal(&mut terminal);
    result?;
    restored
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Best-effort cleanup for a half-initialized terminal.
fn restore_screen() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Pass `result` through, running `restore` first when it is an error.
fn or_restore<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // Initial data fetch blocks input until the first list is ready
    terminal.draw(ui::draw_loading)?;
    app.load_initial().await;
    sync_list_height(terminal, app)?;

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Resize(width, height) => {
                let area = Rect::new(0, 0, width, height);
                app.view.set_list_height(ui::list_height(area, app));
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let msg = keybindings::dispatch(app.view.focus(), key);
                if app.update(msg).await? {
                    return Ok(()); // Quit requested
                }
                // Search bar opening or closing changes the list height
                sync_list_height(terminal, app)?;
            }
            _ => {}
        }
    }
}

fn sync_list_height(terminal: &Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let size = terminal.size()?;
    let area = Rect::new(0, 0, size.width, size.height);
    app.view.set_list_height(ui::list_height(area, app));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: Result<()> = or_restore(Err(anyhow::anyhow!("no tty")), || restored.set(true));

        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_skips_restore() {
        let restored = Cell::new(false);
        let value = or_restore(Ok(7), || restored.set(true)).unwrap();

        assert_eq!(value, 7);
        assert!(!restored.get());
    }
}
