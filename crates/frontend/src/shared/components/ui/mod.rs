mod button;
mod input;
mod select;

pub use button::SubmitButton;
pub use input::FieldInput;
pub use select::Select;
