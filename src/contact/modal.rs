use crate::config;
use crate::contact::clipboard::CopyOutcome;
use crate::intent::Intent;
use crate::timer::Scheduler;
use crate::visibility::Visibility;

/// Whether the delayed pop-up may still act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AutoOpen {
    Armed,
    /// Fired, or pre-empted by the user opening or closing the modal first.
    Spent,
    Disposed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copying,
    Copied,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactModalController {
    visibility: Visibility,
    auto_open: AutoOpen,
    copy_status: CopyStatus,
}

impl Default for ContactModalController {
    fn default() -> Self {
        Self {
            visibility: Visibility::Closed,
            auto_open: AutoOpen::Armed,
            copy_status: CopyStatus::Idle,
        }
    }
}

impl ContactModalController {
    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    pub fn is_disposed(&self) -> bool {
        self.auto_open == AutoOpen::Disposed
    }

    pub fn copy_status(&self) -> CopyStatus {
        self.copy_status
    }

    pub fn contact_number(&self) -> &'static str {
        config::PHONE_DISPLAY
    }

    pub fn open(&mut self) -> bool {
        self.user_transition(Visibility::Open)
    }

    pub fn close(&mut self) -> bool {
        self.user_transition(Visibility::Closed)
    }

    fn user_transition(&mut self, next: Visibility) -> bool {
        if self.is_disposed() {
            return false;
        }
        self.auto_open = AutoOpen::Spent;
        self.visibility.transition(next)
    }

    /// The delayed pop-up fired. Only the first firing on an untouched
    /// modal opens it; anything later is ignored.
    pub fn auto_open_elapsed(&mut self) -> bool {
        if self.auto_open != AutoOpen::Armed {
            return false;
        }
        self.auto_open = AutoOpen::Spent;
        self.visibility.transition(Visibility::Open)
    }

    pub fn begin_copy(&mut self) -> bool {
        self.set_copy_status(CopyStatus::Copying)
    }

    pub fn finish_copy(&mut self, outcome: CopyOutcome) -> bool {
        let status = match outcome {
            CopyOutcome::Copied(_) => CopyStatus::Copied,
            CopyOutcome::Failed => CopyStatus::Failed,
        };
        self.set_copy_status(status)
    }

    pub fn reset_copy_status(&mut self) -> bool {
        self.set_copy_status(CopyStatus::Idle)
    }

    fn set_copy_status(&mut self, status: CopyStatus) -> bool {
        if self.is_disposed() || self.copy_status == status {
            return false;
        }
        self.copy_status = status;
        true
    }

    /// Owning view is going away. Nothing mutates the controller afterwards.
    pub fn dispose(&mut self) {
        self.auto_open = AutoOpen::Disposed;
    }
}

/// Schedules the one-shot pop-up. Dropping the returned handle cancels it.
pub fn arm_auto_open<S, F>(scheduler: &S, delay_ms: u32, dispatch: F) -> S::Handle
where
    S: Scheduler,
    F: FnOnce(Intent) + 'static,
{
    scheduler.schedule(delay_ms, Box::new(move || dispatch(Intent::AutoOpenElapsed)))
}
