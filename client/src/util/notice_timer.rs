//! One-shot timer that expires the contact form's success notice.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form component owns a [`NoticeGuard`] for its lifetime and cancels it
//! in `on_cleanup`. Timers check the guard before touching state, so nothing
//! fires into a disposed view. Superseded timers are no-ops because the form
//! state only honours the latest [`NoticeTicket`].

#[cfg(test)]
#[path = "notice_timer_test.rs"]
mod notice_timer_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::state::contact::{ContactFormState, NoticeTicket};

/// Liveness flag shared between a component and its pending timers.
#[derive(Clone, Debug)]
pub struct NoticeGuard {
    alive: Arc<AtomicBool>,
}

impl Default for NoticeGuard {
    fn default() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }
}

impl NoticeGuard {
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Stop every timer scheduled under this guard.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

/// Expire `ticket` on `form` after `SUCCESS_CLEAR_DELAY`, unless `guard` was
/// cancelled first.
pub fn schedule_expiry(form: RwSignal<ContactFormState>, ticket: NoticeTicket, guard: NoticeGuard) {
    #[cfg(feature = "hydrate")]
    {
        let delay = gloo_timers::future::sleep(crate::state::contact::SUCCESS_CLEAR_DELAY);
        leptos::task::spawn_local(run_expiry(form, ticket, guard, delay));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, ticket, guard);
    }
}

/// Timer body: wait for `delay`, then expire `ticket` if `guard` is still
/// alive. Returns whether the notice was cleared.
pub async fn run_expiry(
    form: RwSignal<ContactFormState>,
    ticket: NoticeTicket,
    guard: NoticeGuard,
    delay: impl Future<Output = ()>,
) -> bool {
    delay.await;
    if !guard.is_alive() {
        log::debug!("contact form torn down; dropping notice expiry");
        return false;
    }
    form.try_update(|state| state.expire_notice(ticket)).unwrap_or(false)
}
