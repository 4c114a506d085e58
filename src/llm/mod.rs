pub mod client;
pub mod prompts;
pub mod transcribe;

pub use client::*;
pub use prompts::*;
pub use transcribe::*;
