//! One pure function per topic. Each walks its guards top to bottom and
//! returns at the first match.

pub(crate) mod album;
pub(crate) mod category;
pub(crate) mod cover;
pub(crate) mod packages;
pub(crate) mod price;
pub(crate) mod title;
pub(crate) mod visibility;
