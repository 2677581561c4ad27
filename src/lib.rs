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

#![warn(clippy::pedantic)]

//! Magic-bitboard attack tables for the sliding pieces of the Fiddler engine.
//!
//! Given a square and the set of occupied squares, the attacks of a bishop, rook, or queen are
//! found with one multiplication, one shift, and one table lookup.
//!
//! The process-wide table [`MAGIC`] is built the first time it is used. By default it uses fancy
//! magics; enabling the `black-magic` feature switches it to black magics.

// Many module elements are re-exported to make names more ergonomic to access.

mod bitboard;
pub use bitboard::{Bitboard, Subsets};

pub mod constants;

mod direction;
pub use direction::Direction;

mod error;
pub use error::MagicError;

pub mod mask;

pub mod rays;

mod scheme;
pub use scheme::{BlackMagic, FancyMagic, MagicScheme};

mod slider;
pub use slider::Slider;

mod square;
pub use square::Square;

mod table;
pub use table::MagicTable;

pub mod validate;

use once_cell::sync::Lazy;

#[cfg(not(feature = "black-magic"))]
/// The hashing scheme used by the process-wide table.
pub type DefaultScheme = FancyMagic;

#[cfg(feature = "black-magic")]
/// The hashing scheme used by the process-wide table.
pub type DefaultScheme = BlackMagic;

/// A master copy of the main magic table. Used for generating bishop, rook, and queen attacks.
///
/// The table is built from the saved constants on first access. If they were defective, the
/// first access panics instead of serving wrong attacks.
pub static MAGIC: Lazy<MagicTable<DefaultScheme>> = Lazy::new(MagicTable::saved);

/// Build the process-wide table now, rather than on the first lookup.
pub fn init() {
    Lazy::force(&MAGIC);
}

#[inline(always)]
#[must_use]
/// Compute the set of squares that a bishop on square `sq` can see if the board is occupied by
/// `occupancy`.
///
/// # Examples
///
/// ```
/// use fiddler_magic::{bishop_attacks, Bitboard, Square};
///
/// // squares A1 and C3 are occupied
/// let occupancy = Bitboard::EMPTY
///     .with_square(Square::A1)
///     .with_square(Square::C3);
///
/// // the bishop on A1 can see B2 and C3
/// assert_eq!(
///     bishop_attacks(occupancy, Square::A1),
///     Bitboard::EMPTY
///         .with_square(Square::B2)
///         .with_square(Square::C3)
/// );
/// ```
pub fn bishop_attacks(occupancy: Bitboard, sq: Square) -> Bitboard {
    MAGIC.bishop_attacks(occupancy, sq)
}

#[inline(always)]
#[must_use]
/// Compute the set of squares that a rook on square `sq` can see if the board is occupied by
/// `occupancy`.
///
/// # Examples
///
/// ```
/// use fiddler_magic::{rook_attacks, Bitboard, Square};
///
/// // squares A3 and B1 are occupied
/// let occupancy = Bitboard::EMPTY
///     .with_square(Square::A3)
///     .with_square(Square::B1);
///
/// // the rook on A1 can see B1, A2, and A3
/// assert_eq!(
///     rook_attacks(occupancy, Square::A1),
///     Bitboard::EMPTY
///         .with_square(Square::B1)
///         .with_square(Square::A2)
///         .with_square(Square::A3)
/// );
/// ```
pub fn rook_attacks(occupancy: Bitboard, sq: Square) -> Bitboard {
    MAGIC.rook_attacks(occupancy, sq)
}

#[inline(always)]
#[must_use]
/// Compute the set of squares that a queen on square `sq` can see if the board is occupied by
/// `occupancy`.
pub fn queen_attacks(occupancy: Bitboard, sq: Square) -> Bitboard {
    MAGIC.queen_attacks(occupancy, sq)
}
