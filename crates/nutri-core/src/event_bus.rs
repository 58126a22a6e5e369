//! Completion queue between browser work and the NutriAI views.
//!
//! Network requests, the file picker, dictation and toast timers finish outside
//! the frame loop. They push an `AppEvent` here and the app hands each one to
//! its controller at the start of the next frame. Everything runs on the
//! browser's single thread, so a shared `RefCell` queue is enough.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use nutri_types::event::AppEvent;

/// Handle to the completion queue; clones share one queue.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<AppEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Queue a finished request or browser callback result
    pub fn emit(&self, event: AppEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Take every queued event in arrival order
    pub fn drain(&self) -> Vec<AppEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// True while results are waiting for the next frame
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
