// File: crates/terminal-app/src/toast.rs
// Summary: Transient notification banner with a cancellable delayed dismissal.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

/// How long a toast stays up after the most recent `show`.
pub const TOAST_DURATION: Duration = Duration::from_millis(2800);

#[derive(Debug, Default)]
struct Banner {
    message: String,
    visible: bool,
}

/// Banner that hides itself `duration` after the last `show`.
///
/// Each `show` cancels the dismissal scheduled by the previous one, so a burst
/// of notifications keeps the banner up until the last has aged out. Must be
/// used inside a tokio runtime.
pub struct Toast {
    banner: Arc<Mutex<Banner>>,
    pending: Option<CancellationToken>,
    duration: Duration,
}

impl Toast {
    pub fn new(duration: Duration) -> Self {
        Self { banner: Arc::default(), pending: None, duration }
    }

    pub fn show(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("toast: {message}");
        {
            let mut banner = self.banner.lock();
            banner.message = message;
            banner.visible = true;
        }

        if let Some(prev) = self.pending.take() {
            prev.cancel();
        }
        let token = CancellationToken::new();
        self.pending = Some(token.clone());

        let banner = Arc::clone(&self.banner);
        let delay = self.duration;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    banner.lock().visible = false;
                }
            }
        });
    }

    pub fn is_visible(&self) -> bool {
        self.banner.lock().visible
    }

    /// Text of the most recent toast, whether or not it is still showing.
    pub fn message(&self) -> String {
        self.banner.lock().message.clone()
    }

    pub fn duration(&self) -> Duration { self.duration }
}

impl Default for Toast {
    fn default() -> Self { Self::new(TOAST_DURATION) }
}

impl Drop for Toast {
    fn drop(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}
