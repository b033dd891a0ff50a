//! Command execution over any [`SeriesStorage`](crate::series::SeriesStorage).
//!
//! Commands take their tokens without the command name, validate all of them, and only
//! then touch storage.
mod add;
mod alter;
pub mod arg_parse;
mod create;
mod info;
mod madd;

pub use add::*;
pub use alter::*;
pub use create::*;
pub use info::*;
pub use madd::*;

cfg_if::cfg_if! {
    if #[cfg(test)] {
    }
}
