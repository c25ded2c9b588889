mod all;
mod any;
mod raw_all_any;

pub use all::*;
pub use any::*;
