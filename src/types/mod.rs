//! Type definitions for cleanquote

mod catalog;
mod error;
mod estimate;
mod lead;

pub use catalog::*;
pub use error::*;
pub use estimate::*;
pub use lead::*;
