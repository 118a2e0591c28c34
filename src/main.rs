//! Rookery self-play demo
//!
//! The engine plays both sides at a fixed depth and prints the board
//! after every move. Set RUST_LOG=debug to watch the search reports.

use rookery::{Game, Searcher};

const DEPTH: u32 = 2;
const MAX_PLIES: u32 = 120;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut game = Game::new();
    let mut searcher = Searcher::new();

    println!("{}", game.board());
    while game.ply() < MAX_PLIES && !game.is_over() {
        let side = game.side_to_move();
        let Some(mv) = game.suggest_move(&mut searcher, DEPTH) else {
            break;
        };
        game.try_move(mv.from, mv.to);
        println!("{}) {} plays {}", game.ply().div_ceil(2), side, mv);
        println!("{}", game.board());
    }

    if game.is_draw() {
        println!("Draw by the fifty-move rule.");
    } else {
        let side = game.side_to_move();
        if game.is_checkmate(side) {
            println!("{} has no moves left. {} wins.", side, side.opposite());
        } else {
            println!("Stopping after {} half-moves.", game.ply());
        }
    }
}
