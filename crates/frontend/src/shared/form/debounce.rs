use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Ticket bookkeeping behind [`Debounce`].
///
/// Every `arm` invalidates whatever was pending before it, so at most one
/// scheduled callback is ever live (last write wins, no stacking).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebounceLedger {
    current: u64,
}

impl DebounceLedger {
    /// Invalidate any pending ticket and hand out the next live one.
    pub fn arm(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// Invalidate any pending ticket without arming a new one.
    pub fn cancel(&mut self) {
        self.current += 1;
    }

    pub fn is_live(&self, ticket: u64) -> bool {
        self.current == ticket
    }
}

/// A cancellable delayed callback.
///
/// Scheduling replaces whatever was pending; a timer that fires with a
/// stale ticket does nothing. The pending callback is also invalidated
/// when the owning component unmounts, so no timer ever touches a
/// destroyed form.
#[derive(Clone, Copy)]
pub struct Debounce {
    ledger: StoredValue<DebounceLedger>,
    delay_ms: u32,
}

impl Debounce {
    /// Create a debouncer tied to the current component scope.
    pub fn new(delay_ms: u32) -> Self {
        let ledger = StoredValue::new(DebounceLedger::default());
        on_cleanup(move || {
            let _ = ledger.try_update_value(|l| l.cancel());
        });
        Self { ledger, delay_ms }
    }

    /// Run `f` after the delay, unless another `schedule` or `cancel`
    /// happens first.
    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        let ticket = {
            let mut ledger = self.ledger.get_value();
            let ticket = ledger.arm();
            self.ledger.set_value(ledger);
            ticket
        };
        let ledger = self.ledger;
        let delay = self.delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            // The stored value is gone once the owner is disposed.
            if ledger.try_get_value().is_some_and(|l| l.is_live(ticket)) {
                f();
            }
        });
    }

    /// Drop the pending callback, if any.
    pub fn cancel(&self) {
        let _ = self.ledger.try_update_value(|l| l.cancel());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_rescheduling_leaves_exactly_one_live_ticket() {
        // Three keystrokes inside the delay window: only the last
        // scheduled evaluation may run.
        let mut ledger = DebounceLedger::default();
        let first = ledger.arm();
        let second = ledger.arm();
        let last = ledger.arm();

        assert!(!ledger.is_live(first));
        assert!(!ledger.is_live(second));
        assert!(ledger.is_live(last));
    }

    #[test]
    fn cancel_invalidates_pending_ticket() {
        let mut ledger = DebounceLedger::default();
        let ticket = ledger.arm();
        ledger.cancel();
        assert!(!ledger.is_live(ticket));
    }

    #[test]
    fn fired_evaluation_sees_the_final_value() {
        let mut ledger = DebounceLedger::default();

        // Each keystroke re-arms and captures the field content at that
        // moment, the way `FormField::input` schedules its closure.
        let pending: Vec<(u64, &str)> = ["9", "99", "999x", "999"]
            .into_iter()
            .map(|text| (ledger.arm(), text))
            .collect();

        // All four timers expire; only the live ticket evaluates.
        let evaluated: Vec<&str> = pending
            .into_iter()
            .filter(|(ticket, _)| ledger.is_live(*ticket))
            .map(|(_, text)| text)
            .collect();

        assert_eq!(evaluated, ["999"]);
    }

    #[test]
    fn stale_ticket_stays_dead_after_new_arm() {
        let mut ledger = DebounceLedger::default();
        let old = ledger.arm();
        ledger.cancel();
        let fresh = ledger.arm();
        assert!(!ledger.is_live(old));
        assert!(ledger.is_live(fresh));
    }
}
