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

//! Directions, the single steps a sliding piece repeats to build a ray.

use std::ops::{Add, Neg};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// A difference between two squares. Internally, they use the same representation as a
/// `Square` but with a signed integer.
pub struct Direction(pub i8);

impl Direction {
    /* Cardinal directions */

    /// A `Direction` corresponding to a move "north" from White's point of view, toward the
    /// eighth rank.
    pub const NORTH: Direction = Direction(8);

    /// A `Direction` corresponding to a move "east" from White's point of view.
    pub const EAST: Direction = Direction(1);

    /// A `Direction` corresponding to a move "south" from White's point of view.
    pub const SOUTH: Direction = Direction(-8);

    /// A `Direction` corresponding to a move "west" from White's point of view.
    pub const WEST: Direction = Direction(-1);

    /* Composite directions */

    /// A `Direction` corresponding to a move "northwest" from White's point of view.
    pub const NORTHWEST: Direction = Direction(Direction::NORTH.0 + Direction::WEST.0);
    /// A `Direction` corresponding to a move "northeast" from White's point of view.
    pub const NORTHEAST: Direction = Direction(Direction::NORTH.0 + Direction::EAST.0);
    /// A `Direction` corresponding to a move "southeast" from White's point of view.
    pub const SOUTHEAST: Direction = Direction(Direction::SOUTH.0 + Direction::EAST.0);
    /// A `Direction` corresponding to a move "southwest" from White's point of view.
    pub const SOUTHWEST: Direction = Direction(Direction::SOUTH.0 + Direction::WEST.0);

    /// The directions that a rook can move, along only one step.
    pub const ROOK_DIRECTIONS: [Direction; 4] = [
        Direction::NORTH,
        Direction::SOUTH,
        Direction::EAST,
        Direction::WEST,
    ];

    /// The directions that a bishop can move, along only one step.
    pub const BISHOP_DIRECTIONS: [Direction; 4] = [
        Direction::NORTHWEST,
        Direction::NORTHEAST,
        Direction::SOUTHWEST,
        Direction::SOUTHEAST,
    ];

    #[inline(always)]
    #[must_use]
    /// Determine whether stepping in this direction increases the square index.
    /// Rays in such directions meet their nearest blocker at the lowest set bit.
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl Neg for Direction {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Direction(-self.0)
    }
}

impl Add<Direction> for Direction {
    type Output = Self;
    fn add(self, rhs: Direction) -> Self::Output {
        Direction(self.0 + rhs.0)
    }
}
