//! Move records and geometric move classification.
//!
//! Classification is a pure function of the piece's kind, color and own
//! move counter plus the two squares; it never looks at other pieces.
//! Occupancy rules are the board's business.

use super::board::{Piece, PieceKind, Square};
use std::fmt;

/// An origin/destination pair.
///
/// History files serialize these as four integers per line, origin
/// first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// What a candidate move is, judged from geometry alone.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveKind {
    PawnPush,
    PawnDoublePush,
    PawnCapture,
    KingStep,
    CastleKingside,
    CastleQueenside,
    KnightJump,
    /// Straight lines, named from White's seat: `Up` decreases the rank.
    Up,
    Down,
    Left,
    Right,
    DiagUpRight,
    DiagUpLeft,
    DiagDownRight,
    DiagDownLeft,
    Illegal,
}

impl MoveKind {
    /// Classify `piece` moving from `from` to `to`.
    pub fn classify(piece: Piece, from: Square, to: Square) -> MoveKind {
        let dr = to.rank() as i32 - from.rank() as i32;
        let df = to.file() as i32 - from.file() as i32;
        match piece.kind {
            PieceKind::Pawn => Self::classify_pawn(piece, dr, df),
            PieceKind::King => Self::classify_king(piece, from, dr, df),
            PieceKind::Knight => {
                if dr.abs() + df.abs() == 3 && dr.abs() <= 2 && df.abs() <= 2 {
                    MoveKind::KnightJump
                } else {
                    MoveKind::Illegal
                }
            }
            PieceKind::Rook => Self::classify_straight(dr, df),
            PieceKind::Bishop => Self::classify_diagonal(dr, df),
            PieceKind::Queen => match Self::classify_straight(dr, df) {
                MoveKind::Illegal => Self::classify_diagonal(dr, df),
                line => line,
            },
        }
    }

    fn classify_pawn(piece: Piece, dr: i32, df: i32) -> MoveKind {
        let dir = piece.color.pawn_direction();
        if df == 0 && dr == dir {
            return MoveKind::PawnPush;
        }
        if df == 0 && dr == 2 * dir && piece.moves == 0 {
            return MoveKind::PawnDoublePush;
        }
        if df.abs() == 1 && dr == dir {
            return MoveKind::PawnCapture;
        }
        MoveKind::Illegal
    }

    fn classify_king(piece: Piece, from: Square, dr: i32, df: i32) -> MoveKind {
        if (dr, df) != (0, 0) && dr.abs() <= 1 && df.abs() <= 1 {
            return MoveKind::KingStep;
        }
        // Castling is only open to a king that has never left home.
        if dr == 0
            && from.file() == 4
            && from.rank() == piece.color.back_rank()
            && piece.moves == 0
        {
            if df == 2 {
                return MoveKind::CastleKingside;
            }
            if df == -2 {
                return MoveKind::CastleQueenside;
            }
        }
        MoveKind::Illegal
    }

    fn classify_straight(dr: i32, df: i32) -> MoveKind {
        match (dr, df) {
            (r, 0) if r < 0 => MoveKind::Up,
            (r, 0) if r > 0 => MoveKind::Down,
            (0, c) if c > 0 => MoveKind::Right,
            (0, c) if c < 0 => MoveKind::Left,
            _ => MoveKind::Illegal,
        }
    }

    fn classify_diagonal(dr: i32, df: i32) -> MoveKind {
        if dr == 0 || dr.abs() != df.abs() {
            return MoveKind::Illegal;
        }
        match (dr < 0, df > 0) {
            (true, true) => MoveKind::DiagUpRight,
            (true, false) => MoveKind::DiagUpLeft,
            (false, true) => MoveKind::DiagDownRight,
            (false, false) => MoveKind::DiagDownLeft,
        }
    }

    /// Unit step for the sliding categories, `None` for everything else.
    pub(crate) fn step(self) -> Option<(i32, i32)> {
        match self {
            MoveKind::Up => Some((-1, 0)),
            MoveKind::Down => Some((1, 0)),
            MoveKind::Left => Some((0, -1)),
            MoveKind::Right => Some((0, 1)),
            MoveKind::DiagUpRight => Some((-1, 1)),
            MoveKind::DiagUpLeft => Some((-1, -1)),
            MoveKind::DiagDownRight => Some((1, 1)),
            MoveKind::DiagDownLeft => Some((1, -1)),
            _ => None,
        }
    }
}
