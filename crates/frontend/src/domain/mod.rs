pub mod inventory;
pub mod orders;
pub mod production;
pub mod suppliers;
