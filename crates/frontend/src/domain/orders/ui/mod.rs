mod list;

pub use list::OrdersList;
