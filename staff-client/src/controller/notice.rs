//! Transient notices
//!
//! 每个提示在 `ttl` 后自动消失；新的提示替换旧的并重新计时，
//! 旧提示的定时器通过 generation 判断是否已过期。

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

/// Default display time for a notice
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Default)]
struct Slot {
    current: Option<Notice>,
    generation: u64,
}

/// Holds at most one visible notice
///
/// Must be used inside a Tokio runtime; dismissal runs on a spawned timer.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    slot: Arc<Mutex<Slot>>,
    ttl: Duration,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            ttl,
        }
    }

    /// Show `notice`, replacing any current one and restarting the timer
    pub fn show(&self, notice: Notice) {
        let generation = {
            let mut slot = self.slot.lock();
            slot.generation += 1;
            slot.current = Some(notice);
            slot.generation
        };

        let slot = Arc::clone(&self.slot);
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut slot = slot.lock();
            // A newer notice owns the slot now
            if slot.generation == generation {
                slot.current = None;
            }
        });
    }

    pub fn current(&self) -> Option<Notice> {
        self.slot.lock().current.clone()
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(NOTICE_TTL)
    }
}
