//! Dashboard views

pub mod board;

pub use board::{render_board_view, BoardProps};
