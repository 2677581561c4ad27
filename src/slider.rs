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

//! The two families of sliding pieces with their own lookup tables.

use super::{mask, rays, Bitboard, Direction, Square};

use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A family of sliding pieces. Queens are not a family of their own, since their attacks are the
/// union of a bishop's and a rook's.
pub enum Slider {
    /// Moves along diagonals.
    Bishop,
    /// Moves along ranks and files.
    Rook,
}

impl Slider {
    /// Both slider families, in the order their tables are packed.
    pub const ALL: [Slider; 2] = [Slider::Bishop, Slider::Rook];

    #[must_use]
    /// Get the directions this slider travels in.
    pub const fn directions(self) -> &'static [Direction; 4] {
        match self {
            Slider::Bishop => &Direction::BISHOP_DIRECTIONS,
            Slider::Rook => &Direction::ROOK_DIRECTIONS,
        }
    }

    #[must_use]
    /// Get the relevant-occupancy mask of this slider on `sq`.
    pub fn mask(self, sq: Square) -> Bitboard {
        match self {
            Slider::Bishop => mask::bishop_mask(sq),
            Slider::Rook => mask::rook_mask(sq),
        }
    }

    #[must_use]
    /// Compute the attacks of this slider on `sq` by ray tracing. Used as the reference when
    /// building and validating lookup tables.
    pub fn attacks(self, occupancy: Bitboard, sq: Square) -> Bitboard {
        match self {
            Slider::Bishop => rays::bishop_attacks(occupancy, sq),
            Slider::Rook => rays::rook_attacks(occupancy, sq),
        }
    }

    #[must_use]
    /// Get the number of index bits every black magic of this slider produces.
    pub const fn black_magic_bits(self) -> u8 {
        match self {
            Slider::Bishop => 9,
            Slider::Rook => 12,
        }
    }
}

impl Display for Slider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Slider::Bishop => write!(f, "bishop"),
            Slider::Rook => write!(f, "rook"),
        }
    }
}
