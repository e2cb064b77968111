//! Piece module - tetromino shapes and rotation states
//!
//! Each kind carries a fixed, ordered list of rotation states expressed as
//! 2-D boolean matrices. Symmetric pieces have fewer distinct states
//! (I: 2, O: 1, S/Z: 2, T/J/L: 4); the rotation index wraps modulo the
//! state count. Rotation itself never validates - the owning game checks
//! the resulting placement and reverts if needed.

use arrayvec::ArrayVec;
use gridfall_types::PieceKind;

/// One rotation state: a matrix of filled/empty flags, row-major.
pub type Shape = &'static [&'static [bool]];

const T: bool = true;
const F: bool = false;

static I_STATES: [Shape; 2] = [
    &[&[T, T, T, T]],
    &[&[T], &[T], &[T], &[T]],
];

static O_STATES: [Shape; 1] = [&[&[T, T], &[T, T]]];

static T_STATES: [Shape; 4] = [
    &[&[F, T, F], &[T, T, T]],
    &[&[T, F], &[T, T], &[T, F]],
    &[&[T, T, T], &[F, T, F]],
    &[&[F, T], &[T, T], &[F, T]],
];

static S_STATES: [Shape; 2] = [
    &[&[F, T, T], &[T, T, F]],
    &[&[T, F], &[T, T], &[F, T]],
];

static Z_STATES: [Shape; 2] = [
    &[&[T, T, F], &[F, T, T]],
    &[&[F, T], &[T, T], &[T, F]],
];

static J_STATES: [Shape; 4] = [
    &[&[T, F, F], &[T, T, T]],
    &[&[T, T], &[T, F], &[T, F]],
    &[&[T, T, T], &[F, F, T]],
    &[&[F, T], &[F, T], &[T, T]],
];

static L_STATES: [Shape; 4] = [
    &[&[F, F, T], &[T, T, T]],
    &[&[T, F], &[T, F], &[T, T]],
    &[&[T, T, T], &[T, F, F]],
    &[&[T, T], &[F, T], &[F, T]],
];

/// All rotation states for a kind, in clockwise order
pub fn rotation_states(kind: PieceKind) -> &'static [Shape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
    }
}

/// Spawn column for a board of the given width: the 4-wide shape box is
/// centered (column 3 on the standard 10-column board).
pub fn spawn_column(columns: u8) -> i8 {
    (columns as i8 - 4) / 2
}

/// A falling tetromino: kind, rotation index, and the board position of
/// the shape matrix's top-left corner. Row may be negative while a piece
/// is still partially above the visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation_index: u8,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn anchor for a board of the given width
    pub fn new(kind: PieceKind, columns: u8) -> Self {
        Self {
            kind,
            rotation_index: 0,
            x: spawn_column(columns),
            y: 0,
        }
    }

    /// Number of distinct rotation states for this piece's kind
    pub fn rotation_count(&self) -> u8 {
        rotation_states(self.kind).len() as u8
    }

    /// The active shape matrix
    pub fn shape(&self) -> Shape {
        rotation_states(self.kind)[self.rotation_index as usize]
    }

    /// Advance to the next rotation state, wrapping. No validation.
    pub fn rotate_clockwise(&mut self) {
        self.rotation_index = (self.rotation_index + 1) % self.rotation_count();
    }

    /// Retreat to the previous rotation state, wrapping. Undoes a
    /// clockwise rotation that proved illegal.
    pub fn rotate_counter_clockwise(&mut self) {
        let count = self.rotation_count();
        self.rotation_index = (self.rotation_index + count - 1) % count;
    }

    /// Absolute (column, row) of every filled cell in the active state.
    /// Always exactly four blocks.
    pub fn blocks(&self) -> ArrayVec<(i8, i8), 4> {
        let mut blocks = ArrayVec::new();
        for (row, cells) in self.shape().iter().enumerate() {
            for (col, &filled) in cells.iter().enumerate() {
                if filled {
                    blocks.push((self.x + col as i8, self.y + row as i8));
                }
            }
        }
        blocks
    }
}
