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

//! Errors raised while building magic lookup tables.

use super::{Bitboard, Slider, Square};

use thiserror::Error;

/// A reason a set of magic entries cannot be turned into a lookup table.
///
/// Either error means the supplied constants are defective. A table is never built from them,
/// since it would return wrong attacks for some positions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MagicError {
    /// Two relevant occupancies with different attacks hash to the same key.
    #[error(
        "{slider} magic for {square} maps occupancies {first:#018x} and {second:#018x} \
        to key {key}, but their attacks differ"
    )]
    Collision {
        /// The slider family of the defective entry.
        slider: Slider,
        /// The square of the defective entry.
        square: Square,
        /// The first occupancy which hashed to `key`.
        first: Bitboard,
        /// The second occupancy which hashed to `key`.
        second: Bitboard,
        /// The key both occupancies map to, before offsetting.
        key: usize,
    },
    /// An entry's mask is not the relevant-occupancy mask of its square.
    #[error("{slider} entry for {square} has mask {found:#018x}, expected {expected:#018x}")]
    MaskMismatch {
        /// The slider family of the defective entry.
        slider: Slider,
        /// The square of the defective entry.
        square: Square,
        /// The mask this square should have.
        expected: Bitboard,
        /// The mask the entry carried.
        found: Bitboard,
    },
}
