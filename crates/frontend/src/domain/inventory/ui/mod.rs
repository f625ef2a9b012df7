mod details;
mod list;

pub use details::InventoryDetails;
pub use list::InventoryList;
