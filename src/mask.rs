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

//! Relevant-occupancy masks for sliding pieces.
//!
//! A mask holds every square whose occupancy can change the attacks of a slider. The last square
//! of each ray is left out: a piece standing there cannot cut the ray any shorter, since the ray
//! ends there anyway. Leaving it out keeps the number of subsets, and so the lookup tables, small.

use super::{Bitboard, Direction, Square};

#[must_use]
/// Get the squares along `dir` from `sq` whose occupancy matters, i.e. the ray without its final
/// square.
fn relevant_ray(sq: Square, dir: Direction) -> Bitboard {
    let mut result = Bitboard::EMPTY;
    let mut current_square = sq;
    while let Some(next_square) = current_square.step(dir) {
        if next_square.step(dir).is_some() {
            result.insert(next_square);
        }
        current_square = next_square;
    }

    result
}

#[must_use]
/// Create the relevant-occupancy mask for a piece on `sq` sliding along `dirs`.
pub fn relevant_mask(sq: Square, dirs: &[Direction]) -> Bitboard {
    dirs.iter().fold(Bitboard::EMPTY, |mask, &dir| {
        mask | relevant_ray(sq, dir)
    })
}

#[must_use]
/// Create the mask for the relevant bits in magic of a bishop. `sq` is the square that a bishop
/// would be on to receive this mask.
///
/// The diagonals through `sq` are always cut at the board's outer ring, so this is the same as
/// taking both diagonals and removing `sq` and [`Bitboard::EDGES`].
pub fn bishop_mask(sq: Square) -> Bitboard {
    relevant_mask(sq, &Direction::BISHOP_DIRECTIONS)
}

#[must_use]
/// Create the mask for the relevant bits in magic of a rook. `sq` is the square that a rook would
/// occupy to receive this mask.
///
/// Unlike the bishop mask, a rook on an edge keeps the edge squares along its own rank or file,
/// except for the far corner.
pub fn rook_mask(sq: Square) -> Bitboard {
    relevant_mask(sq, &Direction::ROOK_DIRECTIONS)
}
