//! Toast notification center.
//!
//! A small observer-pattern container: the active list lives here, views
//! subscribe for changes, and each toast schedules its own removal. Every
//! collaborator may publish, not just the fault translator.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tracing::debug;
use uuid::Uuid;

/// How long a toast stays visible unless the caller says otherwise.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
}

type Listener = Box<dyn Fn(&[Toast]) + Send + Sync>;

#[derive(Default)]
struct Inner {
    toasts: Mutex<Vec<Toast>>,
    listeners: Mutex<Vec<Listener>>,
}

/// Shared handle to the notification state. Cheap to clone; every clone
/// publishes into the same list.
#[derive(Clone, Default)]
pub struct Notifier {
    inner: Arc<Inner>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a toast with the default duration.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> Uuid {
        self.show_for(message, kind, DEFAULT_TOAST_DURATION)
    }

    /// Publish a toast and schedule its removal after `duration`.
    ///
    /// Removal runs as an independent deferred task; when no async runtime
    /// is present the toast simply stays until dismissed explicitly.
    pub fn show_for(&self, message: impl Into<String>, kind: ToastKind, duration: Duration) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            duration,
        };
        let id = toast.id;

        self.inner.toasts.lock().push(toast);
        self.emit();

        match Handle::try_current() {
            Ok(handle) => {
                let notifier = self.clone();
                handle.spawn(async move {
                    tokio::time::sleep(duration).await;
                    notifier.dismiss(id);
                });
            }
            Err(_) => debug!("no async runtime; toast will not auto-expire"),
        }

        id
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.show(message, ToastKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.show(message, ToastKind::Error)
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.show(message, ToastKind::Info)
    }

    /// Remove a toast by identity. Removing an already-expired toast is a
    /// no-op and emits no change.
    pub fn dismiss(&self, id: Uuid) {
        let removed = {
            let mut toasts = self.inner.toasts.lock();
            let before = toasts.len();
            toasts.retain(|t| t.id != id);
            toasts.len() != before
        };
        if removed {
            self.emit();
        }
    }

    /// Snapshot of the currently visible toasts, in publish order.
    pub fn active(&self) -> Vec<Toast> {
        self.inner.toasts.lock().clone()
    }

    /// Register a change listener; it is called with a snapshot of the list
    /// after every publish and removal.
    pub fn subscribe(&self, listener: impl Fn(&[Toast]) + Send + Sync + 'static) {
        self.inner.listeners.lock().push(Box::new(listener));
    }

    fn emit(&self) {
        let snapshot = self.active();
        for listener in self.inner.listeners.lock().iter() {
            listener(&snapshot);
        }
    }
}
