//! # Rendering Module
//!
//! macroquad presentation of the session: the world view and the modal
//! panels drawn over it.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;
