//! Extension traits

mod depot;
mod result;
mod window;

pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
pub(crate) use window::WindowExt as _;
