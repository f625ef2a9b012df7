mod details;
mod list;

pub use details::SupplierDetails;
pub use list::SupplierList;
