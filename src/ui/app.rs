use crate::mvi::Reducer;
use crate::store::{Actions, State, Store};
use crate::ui::callers::{SelectionIntent, SelectionReducer, SelectionState};
use crate::ui::events::AppEvent;
use std::sync::mpsc;
use tokio::runtime::Handle;
use tokio::sync::watch;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// View-side state of the terminal UI.
///
/// Application data lives in the [`Store`]; this only tracks what the view
/// needs on top of it (selection, pending fetches, animation).
pub struct App {
    should_quit: bool,
    actions: Actions,
    spawner: Handle,
    events: mpsc::Sender<AppEvent>,
    store_changes: watch::Receiver<u64>,
    selection: SelectionState,
    in_flight: usize,
    animation_tick: u8,
}

impl App {
    pub fn new(actions: Actions, spawner: Handle, events: mpsc::Sender<AppEvent>) -> Self {
        let store_changes = actions.store().subscribe();
        Self {
            should_quit: false,
            store_changes,
            actions,
            spawner,
            events,
            selection: SelectionState::default(),
            in_flight: 0,
            animation_tick: 0,
        }
    }

    pub fn store(&self) -> &Store {
        self.actions.store()
    }

    /// Snapshot of the application state for rendering.
    pub fn state(&self) -> State {
        self.store().snapshot()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    /// True while at least one fetch has not settled.
    pub fn is_fetching(&self) -> bool {
        self.in_flight > 0
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// Start a fetch on the runtime.
    ///
    /// Not guarded: a second request while one is pending races it, and
    /// whichever settles last decides the list.
    pub fn request_refresh(&mut self) {
        self.in_flight += 1;
        let actions = self.actions.clone();
        let events = self.events.clone();
        self.spawner.spawn(async move {
            let outcome = actions
                .fetch_recent_callers()
                .await
                .map_err(|err| err.to_string());
            let _ = events.send(AppEvent::FetchFinished(outcome));
        });
    }

    pub fn on_fetch_finished(&mut self, outcome: Result<usize, String>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if let Err(error) = outcome {
            tracing::debug!(error = %error, "Refresh finished with error");
        }
        self.sync_with_store();
    }

    pub fn on_tick(&mut self) {
        if self.is_fetching() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
        self.sync_with_store();
    }

    /// Re-clamp the selection if the store committed since the last look.
    ///
    /// Returns true when a commit was observed, i.e. a redraw is due.
    pub fn sync_with_store(&mut self) -> bool {
        if !self.store_changes.has_changed().unwrap_or(false) {
            return false;
        }
        self.store_changes.borrow_and_update();
        let len = self.caller_count();
        dispatch_mvi!(self, selection, SelectionReducer, SelectionIntent::Sync { len });
        true
    }

    pub fn select_next(&mut self) {
        let len = self.caller_count();
        dispatch_mvi!(self, selection, SelectionReducer, SelectionIntent::Next { len });
    }

    pub fn select_previous(&mut self) {
        let len = self.caller_count();
        dispatch_mvi!(self, selection, SelectionReducer, SelectionIntent::Previous { len });
    }

    pub fn select_first(&mut self) {
        let len = self.caller_count();
        dispatch_mvi!(self, selection, SelectionReducer, SelectionIntent::First { len });
    }

    pub fn select_last(&mut self) {
        let len = self.caller_count();
        dispatch_mvi!(self, selection, SelectionReducer, SelectionIntent::Last { len });
    }

    fn caller_count(&self) -> usize {
        self.store().read(|s| s.recent_callers.len())
    }
}
