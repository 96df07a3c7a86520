//! Small pure helpers shared by the generators.

pub mod mime;
pub mod path;
