/// Lifecycle of one form submission.
///
/// An explicit state machine rather than a `is_loading` boolean, so the
/// settled outcomes stay distinguishable from "nothing happened yet".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    /// A new submission may start from any state except `Submitting`.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    /// `Idle | Succeeded | Failed -> Submitting`. Returns `false` (and
    /// stays put) when a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.can_submit() {
            *self = SubmissionStatus::Submitting;
            true
        } else {
            false
        }
    }

    /// `Submitting -> Succeeded | Failed` on the network outcome.
    pub fn finish(&mut self, ok: bool) {
        *self = if ok {
            SubmissionStatus::Succeeded
        } else {
            SubmissionStatus::Failed
        };
    }

    /// Timed message-clear: a settled outcome returns to `Idle`.
    /// An in-flight submission is left alone.
    pub fn reset_if_settled(&mut self) {
        if matches!(self, SubmissionStatus::Succeeded | SubmissionStatus::Failed) {
            *self = SubmissionStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_rejects_while_submitting() {
        let mut s = SubmissionStatus::Idle;
        assert!(s.begin());
        assert_eq!(s, SubmissionStatus::Submitting);
        assert!(!s.begin());
        assert_eq!(s, SubmissionStatus::Submitting);
    }

    #[test]
    fn settled_states_allow_resubmission() {
        let mut s = SubmissionStatus::Failed;
        assert!(s.begin());
        s.finish(true);
        assert_eq!(s, SubmissionStatus::Succeeded);
        assert!(s.begin());
    }

    #[test]
    fn reset_only_touches_settled_outcomes() {
        let mut s = SubmissionStatus::Submitting;
        s.reset_if_settled();
        assert_eq!(s, SubmissionStatus::Submitting);

        s.finish(false);
        s.reset_if_settled();
        assert_eq!(s, SubmissionStatus::Idle);
    }
}
