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

//! Magic lookup tables, used for generating bishop, rook, and queen attacks.

use super::{validate, Bitboard, MagicError, MagicScheme, Slider, Square};

use tracing::{debug, error, info};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A complete magic table which can generate attacks for rooks, bishops, and queens.
///
/// Both slider families share a single attack table. Bishop keys come first, followed by rook
/// keys, and each square's entry owns a disjoint range of it.
pub struct MagicTable<M: MagicScheme> {
    /// Entries for bishops, indexed by square.
    bishops: [M; 64],
    /// Entries for rooks, indexed by square.
    rooks: [M; 64],
    /// Every attack set, indexed by key.
    attacks: Box<[Bitboard]>,
}

impl<M: MagicScheme> MagicTable<M> {
    /// Build a table from the saved constants of scheme `M`.
    ///
    /// # Panics
    ///
    /// This function will panic if the saved constants are defective.
    #[must_use]
    pub fn saved() -> MagicTable<M> {
        MagicTable::build(M::saved(Slider::Bishop), M::saved(Slider::Rook))
    }

    /// Build a table from the given entries, indexed by square. Any offsets already in the
    /// entries are ignored.
    ///
    /// # Panics
    ///
    /// This function will panic if any entry is defective. A table which would return wrong
    /// attacks is never built.
    #[must_use]
    pub fn build(bishops: [M; 64], rooks: [M; 64]) -> MagicTable<M> {
        match MagicTable::try_build(bishops, rooks) {
            Ok(table) => table,
            Err(e) => panic!("failed to build {} magic table: {e}", M::NAME),
        }
    }

    /// Build a table from the given entries, indexed by square. Any offsets already in the
    /// entries are ignored.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` if an entry's mask is not the relevant-occupancy mask
    /// of its square, or if an entry hashes two occupancies with different attacks to the same
    /// key.
    pub fn try_build(
        mut bishops: [M; 64],
        mut rooks: [M; 64],
    ) -> Result<MagicTable<M>, MagicError> {
        let mut len = 0;
        for (slider, entries) in [(Slider::Bishop, &mut bishops), (Slider::Rook, &mut rooks)] {
            let start = len;
            len = place_entries(slider, entries, len)?;
            debug!(
                scheme = M::NAME,
                %slider,
                start,
                width = len - start,
                "packed magic entries"
            );
        }

        let mut attacks = vec![Bitboard::EMPTY; len].into_boxed_slice();
        for (slider, entries) in [(Slider::Bishop, &bishops), (Slider::Rook, &rooks)] {
            for (sq, entry) in Square::ALL.into_iter().zip(entries) {
                for occupancy in entry.mask().subsets() {
                    attacks[entry.key(occupancy)] = slider.attacks(occupancy, sq);
                }
            }
        }
        info!(scheme = M::NAME, len, "built magic table");

        Ok(MagicTable {
            bishops,
            rooks,
            attacks,
        })
    }

    #[inline(always)]
    #[must_use]
    /// Get the attacks that a bishop on `sq` could make when the board is occupied by
    /// `occupancy`.
    pub fn bishop_attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        self.lookup(&self.bishops, occupancy, sq)
    }

    #[inline(always)]
    #[must_use]
    /// Get the attacks that a rook on `sq` could make when the board is occupied by `occupancy`.
    pub fn rook_attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        self.lookup(&self.rooks, occupancy, sq)
    }

    #[inline(always)]
    #[must_use]
    /// Get the attacks that a queen on `sq` could make when the board is occupied by
    /// `occupancy`.
    pub fn queen_attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        self.bishop_attacks(occupancy, sq) | self.rook_attacks(occupancy, sq)
    }

    #[inline(always)]
    #[must_use]
    /// Get the attacks of `slider` on `sq` when the board is occupied by `occupancy`.
    pub fn attacks(&self, slider: Slider, occupancy: Bitboard, sq: Square) -> Bitboard {
        self.lookup(self.entries(slider), occupancy, sq)
    }

    #[must_use]
    /// Get the entries of `slider`, indexed by square.
    pub const fn entries(&self, slider: Slider) -> &[M; 64] {
        match slider {
            Slider::Bishop => &self.bishops,
            Slider::Rook => &self.rooks,
        }
    }

    #[must_use]
    /// Get the number of attack sets stored in this table.
    pub fn len(&self) -> usize {
        self.attacks.len()
    }

    #[must_use]
    /// Determine whether this table stores no attacks at all. Built tables are never empty.
    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty()
    }

    #[must_use]
    /// Get the raw attack table, indexed by key.
    pub fn as_slice(&self) -> &[Bitboard] {
        &self.attacks
    }

    #[inline(always)]
    /// Look up an attack set through the entry for `sq`.
    fn lookup(&self, entries: &[M; 64], occupancy: Bitboard, sq: Square) -> Bitboard {
        debug_assert!((sq as usize) < entries.len());
        // SAFETY: `sq` is a valid square, so accessing it by array lookup is OK.
        let entry = unsafe { entries.get_unchecked(sq as usize) };
        let key = entry.key(occupancy);
        debug_assert!(key < self.attacks.len());
        // SAFETY: `MagicScheme` is sealed, and both of its schemes hash only the relevant squares
        // of `occupancy`. Every relevant occupancy was given a key inside the table when it was
        // built.
        unsafe { *self.attacks.get_unchecked(key) }
    }
}

/// Check and place the entries of one slider family, assigning each square a range of the
/// attack table starting at `start`.
/// Returns the end of the last range.
fn place_entries<M: MagicScheme>(
    slider: Slider,
    entries: &mut [M; 64],
    start: usize,
) -> Result<usize, MagicError> {
    let mut next = start;
    for (sq, entry) in Square::ALL.into_iter().zip(entries.iter_mut()) {
        let expected = slider.mask(sq);
        if entry.mask() != expected {
            let err = MagicError::MaskMismatch {
                slider,
                square: sq,
                expected,
                found: entry.mask(),
            };
            error!(scheme = M::NAME, "{err}");
            return Err(err);
        }

        let unplaced = entry.with_offset(0);
        let oracle = |occupancy: Bitboard, sq: Square| slider.attacks(occupancy, sq);
        if let Some(collision) = validate::find_collision(&unplaced, sq, oracle) {
            let err = MagicError::Collision {
                slider,
                square: sq,
                first: collision.first,
                second: collision.second,
                key: collision.key,
            };
            error!(scheme = M::NAME, "{err}");
            return Err(err);
        }

        // bias the offset so that the smallest key lands on `next`
        let (min, max) = validate::key_bounds(&unplaced);
        *entry = unplaced.with_offset(next.wrapping_sub(min));
        next += max - min + 1;
    }

    Ok(next)
}
