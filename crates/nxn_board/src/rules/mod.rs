//! Game rules for N×N tic-tac-toe.
//!
//! Rules are pure functions over a [`Board`](crate::Board), kept apart from
//! board storage.

pub mod win;

pub use win::completes_line;
