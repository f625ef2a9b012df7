//! Form controller building blocks shared by every create/edit form:
//! field state with debounced validation, the submission state machine,
//! and the gate that keeps submissions single-flight.

pub mod debounce;
pub mod field;
pub mod gate;
pub mod status;
pub mod validation;

pub use debounce::Debounce;
pub use field::FormField;
pub use gate::SubmissionGate;
pub use status::SubmissionStatus;
