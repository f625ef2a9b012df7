pub mod supply_overview;
