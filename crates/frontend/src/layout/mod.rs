mod shell;
mod sidebar;

pub use shell::Shell;
pub use sidebar::Sidebar;
