//! Board graph: which cells are joined by a line.
//!
//! The board is a 5x5 grid where every cell links to its orthogonal
//! neighbours, but only cells with an even `row + col` carry diagonals.
//! The 16 diagonal pairs between odd cells pass the coordinate test for a
//! diagonal step yet have no line between them; they are listed in
//! [`ABSENT_EDGES`].
//!
//! Move generation walks the fixed [`OFFSETS`] table per piece (8 steps and
//! 8 jumps) instead of scanning the whole board.

use super::coord::Coord;

/// Diagonal pairs that look adjacent but are not joined on the board.
pub const ABSENT_EDGES: [((u8, u8), (u8, u8)); 16] = [
    ((0, 1), (1, 0)),
    ((0, 1), (1, 2)),
    ((0, 3), (1, 2)),
    ((0, 3), (1, 4)),
    ((2, 1), (1, 0)),
    ((2, 1), (1, 2)),
    ((2, 3), (1, 2)),
    ((2, 3), (1, 4)),
    ((2, 1), (3, 0)),
    ((2, 1), (3, 2)),
    ((2, 3), (3, 2)),
    ((2, 3), (3, 4)),
    ((4, 1), (3, 0)),
    ((4, 1), (3, 2)),
    ((4, 3), (3, 2)),
    ((4, 3), (3, 4)),
];

/// Single-step directions: orthogonal first, then diagonal.
pub const STEP_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Candidate destination vectors for one piece: every step, then every jump.
pub const OFFSETS: [(i8, i8); 16] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-2, 0),
    (2, 0),
    (0, -2),
    (0, 2),
    (-2, -2),
    (-2, 2),
    (2, -2),
    (2, 2),
];

/// Whether `{a, b}` is one of the missing diagonals (order-insensitive).
#[must_use]
pub fn is_absent_edge(a: Coord, b: Coord) -> bool {
    ABSENT_EDGES.iter().any(|&(p, q)| {
        let (p, q) = (Coord::at(p.0, p.1), Coord::at(q.0, q.1));
        (p == a && q == b) || (p == b && q == a)
    })
}

/// Offset shape of a single step (orthogonal or diagonal).
#[inline]
#[must_use]
pub fn is_step_shape(from: Coord, to: Coord) -> bool {
    let (dr, dc) = from.delta(to);
    dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0)
}

/// Offset shape of a jump: exactly twice a step.
#[inline]
#[must_use]
pub fn is_jump_shape(from: Coord, to: Coord) -> bool {
    let (dr, dc) = from.delta(to);
    matches!((dr.abs(), dc.abs()), (2, 0) | (0, 2) | (2, 2))
}

/// A single step along an existing line.
#[must_use]
pub fn is_connected(from: Coord, to: Coord) -> bool {
    is_step_shape(from, to) && !is_absent_edge(from, to)
}

/// The jumped-over cell, if `from -> to` is a jump along an existing line.
///
/// Both half-steps must be real lines, so odd cells cannot jump diagonally.
#[must_use]
pub fn jump_midpoint(from: Coord, to: Coord) -> Option<Coord> {
    if !is_jump_shape(from, to) || is_absent_edge(from, to) {
        return None;
    }
    let mid = from.midpoint(to)?;
    (is_connected(from, mid) && is_connected(mid, to)).then_some(mid)
}

/// On-board cells reachable by the [`OFFSETS`] table, ignoring occupancy.
pub fn candidate_targets(from: Coord) -> impl Iterator<Item = Coord> {
    OFFSETS
        .iter()
        .filter_map(move |&(dr, dc)| from.offset(dr, dc))
}

/// Cells joined to `from` by a single line.
pub fn neighbours(from: Coord) -> impl Iterator<Item = Coord> {
    STEP_OFFSETS
        .iter()
        .filter_map(move |&(dr, dc)| from.offset(dr, dc))
        .filter(move |&to| !is_absent_edge(from, to))
}
