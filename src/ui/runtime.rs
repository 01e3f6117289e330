use crate::config::UiConfig;
use crate::store::Actions;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the terminal view until the user quits.
///
/// Drawing and input handling stay on the calling thread; fetches are
/// spawned onto `spawner` and report back through the event channel.
pub fn run(actions: Actions, config: &UiConfig, spawner: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(actions, spawner, events.sender());

    if config.fetch_on_start {
        app.request_refresh();
    }

    let mut dirty = true;
    loop {
        // Commits from fetch tasks also land here, not only key presses.
        if app.sync_with_store() || dirty {
            terminal.draw(|frame| draw(frame, &app))?;
            dirty = false;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::FetchFinished(outcome)) => app.on_fetch_finished(outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => continue,
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
        dirty = true;
    }

    drop(guard);
    Ok(())
}
