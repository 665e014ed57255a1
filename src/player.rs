//! Playback controller: owns the selected track, drives the audio device and
//! decides what plays next when a source ends.

mod controller;

pub use controller::*;
