//! One-shot timers for the hydration-ready and modal-close delays.
//!
//! In the browser a [`Timer`] wraps a `gloo-timers` timeout and cancels it
//! when dropped, so components keep their pending timer in a `StoredValue`
//! and drop it in `on_cleanup`. Outside the browser the callback runs
//! immediately; effects never run during server rendering, so only native
//! tests observe that path.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// Pending one-shot callback; dropping it cancels the callback.
#[must_use = "dropping a Timer cancels it"]
pub struct Timer {
    #[cfg(feature = "hydrate")]
    _timeout: gloo_timers::callback::Timeout,
}

impl Timer {
    /// Run `f` after `delay_ms` milliseconds.
    pub fn after(delay_ms: u32, f: impl FnOnce() + 'static) -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self { _timeout: gloo_timers::callback::Timeout::new(delay_ms, f) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = delay_ms;
            f();
            Self {}
        }
    }
}
