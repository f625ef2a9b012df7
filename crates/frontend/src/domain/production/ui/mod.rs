mod details;
mod list;

pub use details::ProductionDetails;
pub use list::ProductionList;
