#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
pub mod input;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod render;
pub mod scheduler;
#[cfg(feature = "std")]
mod session;
mod shuffle;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use input::{parse_action, Action, InputSource, ScriptedInput, StdinInput, Step};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use player::*;
#[cfg(feature = "std")]
pub use render::{RenderSink, TerminalRenderer};
pub use scheduler::{Scheduler, Task, TimerId, VirtualClock};
#[cfg(feature = "std")]
pub use session::*;
pub use shuffle::{pick, shuffle};
