//! Dialog open/close state

use tracing::info;

/// Key identity that dismisses the dialog.
const DISMISS_KEY: &str = "Escape";

/// Open/closed state for the modal dialog.
///
/// Both transitions are idempotent: only an actual flip of the flag
/// emits a trace event, so repeated calls change nothing observable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DialogState {
    pub is_open: bool,
}

impl DialogState {
    /// Open the dialog. No-op when already open.
    pub fn open(&mut self) {
        if self.is_open {
            return;
        }
        self.is_open = true;
        info!("Modal opened");
    }

    /// Close the dialog. No-op when already closed.
    pub fn close(&mut self) {
        if !self.is_open {
            return;
        }
        self.is_open = false;
        info!("Modal closed");
    }

    /// Close in response to a key event. Only Escape dismisses; any
    /// other key leaves the state untouched.
    pub fn close_on_key(&mut self, key: &str) {
        if key == DISMISS_KEY {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!DialogState::default().is_open);
    }

    #[test]
    fn state_tracks_last_call() {
        let mut state = DialogState::default();
        state.open();
        assert!(state.is_open);
        state.close();
        assert!(!state.is_open);
        state.open();
        state.open();
        assert!(state.is_open);
        state.close();
        state.close();
        assert!(!state.is_open);
    }

    #[test]
    fn close_when_closed_is_a_noop() {
        let mut state = DialogState::default();
        state.close();
        assert_eq!(state, DialogState::default());
    }

    #[test]
    fn escape_closes() {
        let mut state = DialogState::default();
        state.open();
        state.close_on_key("Escape");
        assert!(!state.is_open);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut state = DialogState::default();
        state.open();
        state.close_on_key("Enter");
        state.close_on_key("a");
        state.close_on_key("escape");
        assert!(state.is_open);
    }
}
