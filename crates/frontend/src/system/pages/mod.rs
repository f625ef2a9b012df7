pub mod login;
pub mod payment_result;
pub mod profile;
pub mod reset_password;
