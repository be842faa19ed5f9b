//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board and the player list. Rules are separated
//! from board storage so the controller and the adapters can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_win;
