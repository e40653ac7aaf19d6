//! Animation driver: turns a walk's logical step sequence into paced render
//! requests, one frame per snapshot, strictly in engine order.

mod driver;
mod pacer;
mod sink;

pub use driver::*;
pub use pacer::*;
pub use sink::*;
