mod skip;
mod take;

pub use skip::*;
pub use take::*;
