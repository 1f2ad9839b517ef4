//! Platform abstraction layer
//!
//! Host-side pieces that sit between the browser and the simulation:
//! - Input events to game actions
//! - Frame arming and fixed-step timing
//! - A session tying the two to one `GameState`

pub mod input;
pub mod scheduler;
pub mod session;

pub use input::{Action, InputEvent, map_input};
pub use scheduler::{FixedStep, FrameScheduler};
pub use session::Session;
