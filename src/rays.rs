/*
  Fiddler, a UCI-compatible chess engine.
  Copyright (C) 2022 The Fiddler Authors (see AUTHORS.md file)

  Fiddler is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Fiddler is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Ray tracing for sliding pieces.
//!
//! These functions are the ground truth for sliding attacks. They are far too slow for move
//! generation, but every magic lookup table is built and checked against them.

use super::{Bitboard, Direction, Square};

#[must_use]
/// Get every square reachable from `sq` by repeatedly stepping in `dir` on an empty board.
/// `sq` itself is never included.
///
/// # Examples
///
/// ```
/// use fiddler_magic::{rays::ray, Bitboard, Direction, Square};
///
/// assert_eq!(
///     ray(Square::F6, Direction::NORTHEAST),
///     Bitboard::EMPTY.with_square(Square::G7).with_square(Square::H8)
/// );
/// assert_eq!(ray(Square::H3, Direction::EAST), Bitboard::EMPTY);
/// ```
pub fn ray(sq: Square, dir: Direction) -> Bitboard {
    let mut result = Bitboard::EMPTY;
    let mut current_square = sq;
    while let Some(next_square) = current_square.step(dir) {
        result.insert(next_square);
        current_square = next_square;
    }

    result
}

#[must_use]
/// Get the squares a slider on `sq` attacks in direction `dir` when the board is occupied by
/// `occupancy`.
/// The ray stops at the first occupied square, which is itself attacked.
pub fn ray_attacks(occupancy: Bitboard, sq: Square, dir: Direction) -> Bitboard {
    let full_ray = ray(sq, dir);
    let blockers = full_ray & occupancy;
    if blockers.is_empty() {
        return full_ray;
    }

    // the nearest blocker is the lowest bit on rays going up the board and the highest bit on
    // rays going down; keep everything between `sq` and the blocker, inclusive
    let kept = if dir.is_positive() {
        u64::MAX >> (63 - blockers.trailing_zeros())
    } else {
        u64::MAX << (63 - blockers.leading_zeros())
    };

    full_ray & Bitboard::new(kept)
}

#[must_use]
/// Construct the squares attacked by a piece on `sq` moving along each of `dirs`, when the board
/// is occupied by `occupancy`.
pub fn directional_attacks(occupancy: Bitboard, sq: Square, dirs: &[Direction]) -> Bitboard {
    dirs.iter().fold(Bitboard::EMPTY, |attacks, &dir| {
        attacks | ray_attacks(occupancy, sq, dir)
    })
}

#[must_use]
/// Compute the squares a bishop on `sq` attacks by tracing each of its rays.
pub fn bishop_attacks(occupancy: Bitboard, sq: Square) -> Bitboard {
    directional_attacks(occupancy, sq, &Direction::BISHOP_DIRECTIONS)
}

#[must_use]
/// Compute the squares a rook on `sq` attacks by tracing each of its rays.
pub fn rook_attacks(occupancy: Bitboard, sq: Square) -> Bitboard {
    directional_attacks(occupancy, sq, &Direction::ROOK_DIRECTIONS)
}

#[must_use]
/// Compute the squares a queen on `sq` attacks by tracing each of its rays.
pub fn queen_attacks(occupancy: Bitboard, sq: Square) -> Bitboard {
    bishop_attacks(occupancy, sq) | rook_attacks(occupancy, sq)
}
