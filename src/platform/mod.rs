//! Platform abstraction layer
//!
//! Handles the host window loop's side of the game:
//! - Time (monotonic clocks, frame counting)
//! - Input events (key mapping, a threaded key feed)

pub mod feed;
pub mod input;
pub mod time;

pub use feed::{KeyFeed, Wake};
pub use input::{INTERACTION_HELP, Key, KeyAction};
pub use time::{Clock, FrameCounter, ManualClock, SystemClock};
