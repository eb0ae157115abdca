//! Command implementations

mod config;
mod history;
mod inspect;
mod show;
mod submit;

pub use config::config;
pub use history::history;
pub use inspect::inspect;
pub use show::show;
pub use submit::{SubmitArgs, submit};
