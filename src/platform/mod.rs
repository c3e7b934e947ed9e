//! Platform glue
//!
//! Host-facing helpers that sit between raw device input and the
//! simulation. Nothing here touches simulation state directly.

pub mod input;

pub use input::{InputLatch, pointer_angle};
