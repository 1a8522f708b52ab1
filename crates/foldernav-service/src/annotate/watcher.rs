//! Re-running passes on UI change notifications.

use tokio::sync::watch;
use tracing::{debug, info};

use super::AnnotationPass;

type PageGuard = Box<dyn Fn() -> bool + Send + Sync>;

/// Sending side of UI change notifications.
///
/// The host adapter calls [`UiChangeNotifier::notify`] whenever the page
/// mutates. Dropping the notifier stops every watcher subscribed to it.
#[derive(Debug)]
pub struct UiChangeNotifier {
    sender: watch::Sender<u64>,
}

impl UiChangeNotifier {
    /// Create a new notifier.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(0);
        Self { sender }
    }

    /// Signal that the page changed.
    pub fn notify(&self) {
        self.sender.send_modify(|generation| *generation += 1);
    }

    /// Subscribe a new watcher.
    pub fn subscribe(&self) -> ChangeWatcher {
        ChangeWatcher::new(self.sender.subscribe())
    }
}

impl Default for UiChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-runs an annotation pass on every change notification.
pub struct ChangeWatcher {
    receiver: watch::Receiver<u64>,
    guard: Option<PageGuard>,
}

impl ChangeWatcher {
    /// Create a watcher over a change channel.
    pub fn new(receiver: watch::Receiver<u64>) -> Self {
        Self {
            receiver,
            guard: None,
        }
    }

    /// Only run the pass while `guard` returns `true`, e.g. while the host
    /// still shows the page the pass belongs to.
    pub fn with_guard<F>(mut self, guard: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Box::new(guard));
        self
    }

    fn allowed(&self) -> bool {
        self.guard.as_ref().is_none_or(|guard| guard())
    }

    /// Run `pass` once, then again after every notification, until the
    /// notifier is dropped. Returns the total number of items annotated.
    pub async fn run(mut self, pass: &dyn AnnotationPass) -> usize {
        let mut total = 0;
        if self.allowed() {
            total += pass.run();
        }

        while self.receiver.changed().await.is_ok() {
            if !self.allowed() {
                debug!(pass = pass.name(), "Page guard rejected change");
                continue;
            }
            total += pass.run();
        }

        info!(pass = pass.name(), total, "Change watcher stopped");
        total
    }
}

impl std::fmt::Debug for ChangeWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeWatcher")
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}
