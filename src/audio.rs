//! Audio device subsystem: a background thread owning the rodio output
//! stream, driven by commands and answering with device events.

mod player;
mod sink;
mod thread;
mod types;

pub use player::*;
pub use types::*;

#[cfg(test)]
mod tests;
