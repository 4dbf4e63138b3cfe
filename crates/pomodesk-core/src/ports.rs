//! Outbound ports the session runtime talks to.
//!
//! Hosts implement [`Notifier`] and [`DisplaySink`] for their platform. The
//! no-op and recording implementations here cover headless hosts and tests.

use serde::{Deserialize, Serialize};

use crate::display::{Notice, Snapshot};
use crate::events::Event;

/// User's decision about OS notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPermission {
    /// Not asked yet.
    #[default]
    Default,
    Granted,
    Denied,
}

/// OS-level notification capability.
pub trait Notifier {
    fn permission(&self) -> NotificationPermission;

    /// Prompt the user. Only called while permission is `Default`.
    fn request_permission(&mut self) -> NotificationPermission;

    fn notify(&mut self, notice: &Notice) -> Result<(), Box<dyn std::error::Error>>;
}

/// Where the timer is drawn.
pub trait DisplaySink {
    /// Called on every tick and every state change.
    fn render(&mut self, snapshot: &Snapshot);

    /// In-app toast on phase completion. Not gated by notification permission.
    fn toast(&mut self, notice: &Notice);

    /// Called for every engine event.
    fn event(&mut self, _event: &Event) {
        // default no-op
    }
}

/// Notifier that never shows anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn permission(&self) -> NotificationPermission {
        NotificationPermission::Denied
    }

    fn request_permission(&mut self) -> NotificationPermission {
        NotificationPermission::Denied
    }

    fn notify(&mut self, _notice: &Notice) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

/// Notifier that keeps what it was asked to do.
///
/// `answer` is the decision returned from the first permission prompt.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub permission: NotificationPermission,
    pub answer: NotificationPermission,
    pub prompts: u32,
    pub delivered: Vec<Notice>,
}

impl RecordingNotifier {
    pub fn answering(answer: NotificationPermission) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }
}

impl Notifier for RecordingNotifier {
    fn permission(&self) -> NotificationPermission {
        self.permission
    }

    fn request_permission(&mut self) -> NotificationPermission {
        self.prompts += 1;
        self.permission = self.answer;
        self.permission
    }

    fn notify(&mut self, notice: &Notice) -> Result<(), Box<dyn std::error::Error>> {
        self.delivered.push(notice.clone());
        Ok(())
    }
}

/// Display that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn render(&mut self, _snapshot: &Snapshot) {}

    fn toast(&mut self, _notice: &Notice) {}
}

/// Display that keeps everything it was sent.
#[derive(Debug, Default, Clone)]
pub struct RecordingDisplay {
    pub frames: Vec<Snapshot>,
    pub toasts: Vec<Notice>,
    pub events: Vec<Event>,
}

impl RecordingDisplay {
    pub fn last_frame(&self) -> Option<&Snapshot> {
        self.frames.last()
    }
}

impl DisplaySink for RecordingDisplay {
    fn render(&mut self, snapshot: &Snapshot) {
        self.frames.push(snapshot.clone());
    }

    fn toast(&mut self, notice: &Notice) {
        self.toasts.push(notice.clone());
    }

    fn event(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}
