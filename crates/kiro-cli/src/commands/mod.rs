//! Command implementations for kiro-cli

pub mod list;
pub mod open;
pub mod probe;
pub mod scaffold;

pub use list::run_list;
pub use open::run_open;
pub use probe::run_probe;
pub use scaffold::run_scaffold;
