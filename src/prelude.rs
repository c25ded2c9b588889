//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the most frequently used traits and types.
//!
//! # Example
//!
//! ```
//! use better_stream::prelude::*;
//! ```

pub use crate::collector::{Collect, Collector};
pub use crate::pipeline::Pipeline;
pub use crate::sink::{Sink, SinkBase};
