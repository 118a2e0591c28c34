//! Saved-game records and transcripts.
//!
//! The replayable save format is four integers per line per move:
//! origin rank, origin file, destination rank, destination file.
//! Replaying the same file from the standard position always yields the
//! same game. The transcript export is the human-readable companion,
//! one sentence per move under a date/time header.

use crate::core::board::Square;
use crate::core::moves::Move;
use crate::game::Game;
use chrono::Local;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why a saved game could not be brought back. Every variant is
/// recoverable; callers fall back to a fresh game.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("could not read or write the history file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed move record on line {line}")]
    Malformed { line: usize },
    #[error("illegal move record on line {line}")]
    IllegalMove { line: usize },
}

/// Serialize moves as `rank file rank file` lines, origin first.
pub fn format_history(moves: &[Move]) -> String {
    let mut out = String::new();
    for mv in moves {
        out.push_str(&format!(
            "{} {} {} {}\n",
            mv.from.rank(),
            mv.from.file(),
            mv.to.rank(),
            mv.to.file()
        ));
    }
    out
}

/// Parse the serialized form. Blank lines are ignored.
pub fn parse_history(text: &str) -> Result<Vec<Move>, HistoryError> {
    let mut moves = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let nums: Vec<i32> = line
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| HistoryError::Malformed { line: idx + 1 })?;
        let &[fr, ff, tr, tf] = nums.as_slice() else {
            return Err(HistoryError::Malformed { line: idx + 1 });
        };
        let (Some(from), Some(to)) = (Square::try_new(fr, ff), Square::try_new(tr, tf)) else {
            return Err(HistoryError::Malformed { line: idx + 1 });
        };
        moves.push(Move::new(from, to));
    }
    Ok(moves)
}

/// Write the replayable save file.
pub fn save_history(path: &Path, moves: &[Move]) -> Result<(), HistoryError> {
    fs::write(path, format_history(moves))?;
    Ok(())
}

/// Read a save file back into move records.
pub fn load_history(path: &Path) -> Result<Vec<Move>, HistoryError> {
    parse_history(&fs::read_to_string(path)?)
}

/// Rebuild a game by replaying records from the standard position.
pub fn replay(moves: &[Move]) -> Result<Game, HistoryError> {
    let mut game = Game::new();
    for (idx, mv) in moves.iter().enumerate() {
        if !game.try_move(mv.from, mv.to) {
            return Err(HistoryError::IllegalMove { line: idx + 1 });
        }
    }
    Ok(game)
}

/// One sentence per move, numbered by full move:
/// `1) White Pawn was moved from (e, 2) to (e, 4).`
///
/// Records are replayed to learn which piece moved, so an illegal
/// record fails the transcript too.
pub fn transcript(moves: &[Move]) -> Result<Vec<String>, HistoryError> {
    let mut game = Game::new();
    let mut lines = Vec::with_capacity(moves.len());
    for (idx, mv) in moves.iter().enumerate() {
        let piece = game
            .board()
            .piece_at(mv.from)
            .ok_or(HistoryError::IllegalMove { line: idx + 1 })?;
        lines.push(format!(
            "{}) {} {} was moved from ({}, {}) to ({}, {}).",
            idx / 2 + 1,
            piece.color,
            piece.kind,
            (b'a' + mv.from.file()) as char,
            8 - mv.from.rank(),
            (b'a' + mv.to.file()) as char,
            8 - mv.to.rank(),
        ));
        if !game.try_move(mv.from, mv.to) {
            return Err(HistoryError::IllegalMove { line: idx + 1 });
        }
    }
    Ok(lines)
}

/// Export the annotated transcript with a date/time header.
pub fn write_transcript(path: &Path, moves: &[Move]) -> Result<(), HistoryError> {
    let lines = transcript(moves)?;
    let now = Local::now();
    let mut out = format!(
        "Game transcript.\nDate: {}\nTime: {}\n\n",
        now.format("%d/%m/%Y"),
        now.format("%H:%M:%S")
    );
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}
