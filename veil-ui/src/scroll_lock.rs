//! Body scroll locking while the dialog is open
//!
//! The lock is an RAII guard over a `ScrollArea`: acquiring it writes
//! `overflow: hidden`, dropping it writes `overflow: auto`. Holding the
//! guard in a `Signal<Option<_>>` ties the lock's lifetime to the open
//! state - set the slot to `None` (or let the owning scope drop) and the
//! page scrolls again. There is no manual unlock to forget.

/// A surface whose scrolling can be suppressed.
///
/// The browser implementation is [`DocumentScrollArea`]; tests
/// substitute a recording one.
pub trait ScrollArea {
    /// Set the surface's overflow behavior (`"hidden"` or `"auto"`).
    fn set_overflow(&self, value: &str);
}

/// The browser document body.
pub struct DocumentScrollArea;

impl ScrollArea for DocumentScrollArea {
    fn set_overflow(&self, value: &str) {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };
        let _ = body.style().set_property("overflow", value);
    }
}

/// RAII guard that suppresses scrolling for as long as it is alive.
pub struct ScrollLockGuard<A: ScrollArea> {
    area: A,
}

impl<A: ScrollArea> ScrollLockGuard<A> {
    /// Lock scrolling on `area` until the guard is dropped.
    pub fn acquire(area: A) -> Self {
        area.set_overflow("hidden");
        Self { area }
    }
}

impl<A: ScrollArea> Drop for ScrollLockGuard<A> {
    fn drop(&mut self) {
        self.area.set_overflow("auto");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct RecordingArea {
        writes: Rc<RefCell<Vec<String>>>,
    }

    impl ScrollArea for RecordingArea {
        fn set_overflow(&self, value: &str) {
            self.writes.borrow_mut().push(value.to_string());
        }
    }

    #[test]
    fn acquire_locks_and_drop_unlocks() {
        let area = RecordingArea::default();
        let guard = ScrollLockGuard::acquire(area.clone());
        assert_eq!(*area.writes.borrow(), ["hidden"]);
        drop(guard);
        assert_eq!(*area.writes.borrow(), ["hidden", "auto"]);
    }

    #[test]
    fn one_write_per_transition() {
        let area = RecordingArea::default();
        for _ in 0..3 {
            let _guard = ScrollLockGuard::acquire(area.clone());
        }
        assert_eq!(
            *area.writes.borrow(),
            ["hidden", "auto", "hidden", "auto", "hidden", "auto"]
        );
    }
}
