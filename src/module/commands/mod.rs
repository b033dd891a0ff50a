mod add;
mod alter;
mod create;
mod get;
mod info;
mod madd;

pub(crate) use add::*;
pub(crate) use alter::*;
pub(crate) use create::*;
pub(crate) use get::*;
pub(crate) use info::*;
pub(crate) use madd::*;
