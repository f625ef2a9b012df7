use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::field::FormField;
use super::status::SubmissionStatus;

/// How long a settled outcome (and its message) stays on screen before
/// the form returns to `Idle`.
pub const STATUS_RESET_MS: u32 = 3_500;

/// Pure decision behind [`SubmissionGate::try_begin`].
fn may_proceed(status: SubmissionStatus, sweep: &[Option<String>]) -> bool {
    status.can_submit() && sweep.iter().all(Option::is_none)
}

/// Keeps each form single-flight: at most one in-flight request, no
/// submission while any field error stands.
///
/// The gate also owns an alive flag cleared on unmount, so a response
/// that lands after the form is gone is dropped instead of updating
/// dead state.
#[derive(Clone, Copy)]
pub struct SubmissionGate {
    pub status: RwSignal<SubmissionStatus>,
    alive: StoredValue<bool>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        let alive = StoredValue::new(true);
        on_cleanup(move || {
            let _ = alive.try_set_value(false);
        });
        Self {
            status: RwSignal::new(SubmissionStatus::Idle),
            alive,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status.get().is_submitting()
    }

    /// Validate every field immediately (marking them touched) and move
    /// to `Submitting` if the form is clean and no request is already in
    /// flight. Returns whether the caller may issue the network request.
    pub fn try_begin(&self, fields: &[FormField]) -> bool {
        let status = self.status.get_untracked();
        if !status.can_submit() {
            return false;
        }
        let sweep: Vec<Option<String>> = fields.iter().map(|f| f.validate_now()).collect();
        if !may_proceed(status, &sweep) {
            return false;
        }
        self.status.update(|s| {
            s.begin();
        });
        true
    }

    /// Back out of `Submitting` without a network call; used when a
    /// cross-field check (e.g. password confirmation) fails after the
    /// per-field sweep passed.
    pub fn abort(&self) {
        self.status.set(SubmissionStatus::Idle);
    }

    /// Record the network outcome. Returns `false` when the form has
    /// been unmounted in the meantime; the caller must not surface
    /// anything in that case.
    pub fn settle(&self, ok: bool) -> bool {
        if self.alive.try_get_value() != Some(true) {
            return false;
        }
        self.status.update(|s| s.finish(ok));

        let status = self.status;
        let alive = self.alive;
        spawn_local(async move {
            TimeoutFuture::new(STATUS_RESET_MS).await;
            if alive.try_get_value() == Some(true) {
                status.update(|s| s.reset_if_settled());
            }
        });
        true
    }
}

impl Default for SubmissionGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proceeds_only_from_quiescent_states() {
        assert!(may_proceed(SubmissionStatus::Idle, &[None, None]));
        assert!(may_proceed(SubmissionStatus::Failed, &[]));
        assert!(!may_proceed(SubmissionStatus::Submitting, &[None]));
    }

    #[test]
    fn any_field_error_blocks_submission() {
        let sweep = vec![None, Some("Quantity must be a positive number".to_string())];
        assert!(!may_proceed(SubmissionStatus::Idle, &sweep));
    }
}
