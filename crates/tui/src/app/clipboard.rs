//! Clipboard access for the command block.
//!
//! Responsibilities:
//! - Provide `copy_to_clipboard(String) -> Result<(), String>` backed by `arboard`.
//! - Provide a per-thread override backend so integration tests never touch
//!   the host OS clipboard.
//!
//! Does NOT handle:
//! - Deciding what to copy (the `App` copies the current command block).
//! - User feedback (toasts and the button label are updated by `App::update`).
//!
//! Invariants:
//! - Called from the UI thread only.
//! - An unavailable OS clipboard is an error string, never a panic.

use std::cell::RefCell;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
enum OverrideBackend {
    Recording(Arc<Mutex<Option<String>>>),
    Failing(String),
}

thread_local! {
    static OVERRIDE_BACKEND: RefCell<Option<OverrideBackend>> = const { RefCell::new(None) };
}

/// Copy `content` to the system clipboard.
pub fn copy_to_clipboard(content: String) -> Result<(), String> {
    OVERRIDE_BACKEND.with(|cell| {
        match cell.borrow().as_ref() {
            Some(OverrideBackend::Recording(store)) => {
                let mut slot = store
                    .lock()
                    .map_err(|_| "Clipboard recorder lock poisoned".to_string())?;
                *slot = Some(content);
                Ok(())
            }
            Some(OverrideBackend::Failing(msg)) => Err(msg.clone()),
            None => {
                let mut clipboard =
                    arboard::Clipboard::new().map_err(|e| format!("Clipboard unavailable: {e}"))?;
                clipboard
                    .set_text(content)
                    .map_err(|e| format!("Failed to write to clipboard: {e}"))
            }
        }
    })
}

/// Replace the clipboard with an in-memory recorder until the guard drops.
#[doc(hidden)]
pub fn install_recording_clipboard() -> RecordingClipboardGuard {
    let store: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let prev = swap_backend(Some(OverrideBackend::Recording(store.clone())));
    RecordingClipboardGuard { prev, store }
}

/// Make every copy fail with `message` until the guard drops.
#[doc(hidden)]
pub fn install_failing_clipboard(message: impl Into<String>) -> FailingClipboardGuard {
    let prev = swap_backend(Some(OverrideBackend::Failing(message.into())));
    FailingClipboardGuard { prev }
}

fn swap_backend(next: Option<OverrideBackend>) -> Option<OverrideBackend> {
    OVERRIDE_BACKEND.with(|cell| std::mem::replace(&mut *cell.borrow_mut(), next))
}

#[doc(hidden)]
pub struct RecordingClipboardGuard {
    prev: Option<OverrideBackend>,
    store: Arc<Mutex<Option<String>>>,
}

impl RecordingClipboardGuard {
    /// Last text written through the recorder.
    pub fn copied_text(&self) -> Option<String> {
        self.store.lock().ok().and_then(|g| g.clone())
    }
}

impl Drop for RecordingClipboardGuard {
    fn drop(&mut self) {
        swap_backend(self.prev.take());
    }
}

#[doc(hidden)]
pub struct FailingClipboardGuard {
    prev: Option<OverrideBackend>,
}

impl Drop for FailingClipboardGuard {
    fn drop(&mut self) {
        swap_backend(self.prev.take());
    }
}
