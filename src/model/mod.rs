pub mod config;
pub mod list;
pub mod selection;
pub mod task;

pub use config::*;
pub use list::*;
pub use selection::*;
pub use task::*;
