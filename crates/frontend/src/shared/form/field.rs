use leptos::prelude::*;

use super::debounce::Debounce;
use super::validation::Rule;

/// Delay between the last keystroke and the validation pass.
pub const VALIDATE_DEBOUNCE_MS: u32 = 600;

/// One form field: value, touched flag, inline error, and a debounced
/// validator.
///
/// Untouched fields never validate, so a freshly opened form shows no
/// errors. Blur marks the field touched and validates immediately;
/// afterwards every keystroke re-arms the 600 ms debounce (one pending
/// timer per field, last write wins).
#[derive(Clone, Copy)]
pub struct FormField {
    pub value: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    touched: RwSignal<bool>,
    rule: Rule,
    debounce: Debounce,
}

impl FormField {
    pub fn new(rule: Rule) -> Self {
        Self {
            value: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            touched: RwSignal::new(false),
            rule,
            debounce: Debounce::new(VALIDATE_DEBOUNCE_MS),
        }
    }

    /// Keystroke handler.
    pub fn input(&self, new_value: String) {
        self.value.set(new_value);
        if self.touched.get_untracked() {
            let field = *self;
            self.debounce.schedule(move || {
                field.run_rule();
            });
        }
    }

    /// Blur handler: the error must be visible before the user can reach
    /// the submit button, so this bypasses the debounce.
    pub fn blur(&self) {
        self.touched.set(true);
        self.debounce.cancel();
        self.run_rule();
    }

    /// Immediate validation sweep used by the submission gate. Marks the
    /// field touched so the error (if any) becomes visible.
    pub fn validate_now(&self) -> Option<String> {
        self.touched.set(true);
        self.debounce.cancel();
        self.run_rule()
    }

    /// Replace the value without marking the field touched; used when
    /// prefilling an edit form from the server.
    pub fn prefill(&self, value: String) {
        self.debounce.cancel();
        self.value.set(value);
        self.error.set(None);
    }

    /// Reset to the pristine state; used for sensitive fields after a
    /// successful submission.
    pub fn clear(&self) {
        self.debounce.cancel();
        self.value.set(String::new());
        self.touched.set(false);
        self.error.set(None);
    }

    pub fn get(&self) -> String {
        self.value.get_untracked()
    }

    fn run_rule(&self) -> Option<String> {
        let result = (self.rule)(&self.value.get_untracked());
        self.error.set(result.clone());
        result
    }
}
