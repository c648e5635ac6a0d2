//! Frame retention engine for excising unchanging stretches of video.
//!
//! Frames are compared 2x2 block by block against the last distinct frame;
//! stretches that stay unchanged for longer than the slack allowance are
//! dropped, and the remaining frames are written as a numbered image
//! sequence, optionally preceded by a splash image.

pub mod comparison;
pub mod output;
pub mod pipeline;
pub mod retention;
pub mod shared;
pub mod timing;
pub mod video;
