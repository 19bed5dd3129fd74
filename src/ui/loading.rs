use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The shared loading overlay. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    visible: Arc<AtomicBool>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        LoadingIndicator::default()
    }

    pub fn begin(&self) -> LoadingGuard {
        self.visible.store(true, Ordering::SeqCst);
        LoadingGuard {
            visible: Arc::clone(&self.visible),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

/// Hides the overlay when dropped, whichever way the operation settled.
#[derive(Debug)]
#[must_use = "dropping the guard hides the loading indicator immediately"]
pub struct LoadingGuard {
    visible: Arc<AtomicBool>,
}

impl LoadingGuard {
    pub fn end(self) {}
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.visible.store(false, Ordering::SeqCst);
    }
}
