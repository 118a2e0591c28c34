pub mod core;
pub mod engine;
pub mod game;
pub mod history;

pub use crate::core::board::{Applied, Board, Color, Piece, PieceKind, Square};
pub use crate::core::moves::{Move, MoveKind};
pub use crate::engine::eval::evaluate;
pub use crate::engine::search::Searcher;
pub use crate::game::Game;
