//! Question bank module

mod builtin;
mod catalog;

pub use builtin::*;
pub use catalog::*;
