//! Playlist catalog: the static, ordered list of tracks the player cycles
//! through. It is loaded once at startup and never mutated afterwards.

mod load;
mod model;

pub use load::*;
pub use model::*;

#[cfg(test)]
mod tests;
