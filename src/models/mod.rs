pub mod evaluation;
pub mod scoring;
pub mod tagging;

pub use evaluation::*;
pub use scoring::*;
pub use tagging::*;
