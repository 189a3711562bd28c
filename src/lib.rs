#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod board;
mod cellmask;
mod common;
mod config;
#[cfg(feature = "std")]
mod game;
#[cfg(feature = "std")]
mod logging;
mod notifier;
mod piece;
#[cfg(feature = "std")]
mod player;
#[cfg(feature = "std")]
mod player_cli;
mod position;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use board::*;
pub use cellmask::{CellMask, Cells, GridMask, MaskError};
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
pub use notifier::*;
pub use piece::*;
#[cfg(feature = "std")]
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use position::*;
