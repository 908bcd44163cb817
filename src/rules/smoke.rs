//! Smoke (spec §4.4): counts down a lifetime in `rb`, expiring to Empty;
//! rises like Fire but also drifts sideways with probability ≈30%.
//!
//! Grounded on the teacher's `behaviors/gas.rs` `GasBehavior`
//! (ceiling-scan rise-and-teleport dispersion), simplified to the spec's
//! single-step rise-or-drift model instead of a multi-cell scan, since
//! the spec's smoke has no chimney-seeking behavior to preserve.

use crate::cell::Cell;
use crate::domain::elements::EL_EMPTY;
use crate::neighborhood::Neighborhood;

const SIDEWAYS_DRIFT_CHANCE: u32 = 77; // ~30% of 256

pub fn update(cell: Cell, n: &mut Neighborhood) {
    let remaining = cell.rb.saturating_sub(1);
    if remaining == 0 {
        n.set(0, 0, Cell { species: EL_EMPTY, ra: 0, rb: 0, clock: 0 });
        return;
    }
    let decayed = Cell { rb: remaining, ..cell };

    if n.chance(SIDEWAYS_DRIFT_CHANCE) {
        let dx = n.rand_dir();
        if dx != 0 && n.get(dx, 0).species == EL_EMPTY {
            n.set(0, 0, Cell { species: EL_EMPTY, ra: 0, rb: 0, clock: 0 });
            n.set(dx, 0, decayed);
            return;
        }
    }

    let first = if n.rand_bool() { 1 } else { -1 };
    for (dx, dy) in [(0, -1), (first, -1), (-first, -1)] {
        if n.get(dx, dy).species == EL_EMPTY {
            n.set(0, 0, Cell { species: EL_EMPTY, ra: 0, rb: 0, clock: 0 });
            n.set(dx, dy, decayed);
            return;
        }
    }
    n.set(0, 0, decayed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunks::ChunkIndex;
    use crate::domain::elements::EL_SMOKE;
    use crate::grid::CellStore;
    use crate::rng::Rng;

    #[test]
    fn expires_to_empty() {
        let mut store = CellStore::new(4, 4);
        let mut chunks = ChunkIndex::new(4, 4);
        let mut rng = Rng::new(1);
        let cell = Cell { species: EL_SMOKE, ra: 0, rb: 1, clock: 0 };
        store.set(2, 2, cell);
        let mut n = Neighborhood::new(&mut store, &mut chunks, &mut rng, 2, 2, 1);
        update(cell, &mut n);
        assert_eq!(store.get(2, 2).species, EL_EMPTY);
    }

    #[test]
    fn rises_when_sideways_is_blocked() {
        let mut store = CellStore::new(4, 4);
        let mut chunks = ChunkIndex::new(4, 4);
        let mut rng = Rng::new(5);
        let cell = Cell { species: EL_SMOKE, ra: 0, rb: 60, clock: 0 };
        store.set(2, 2, cell);
        // Wall off both sideways neighbors on the same row so a drift
        // attempt (whether or not the RNG rolls it) cannot succeed, and
        // the rule must fall through to the vertical rise branch.
        let wall = crate::domain::elements::EL_WALL;
        store.set(1, 2, Cell { species: wall, ra: 0, rb: 0, clock: 0 });
        store.set(3, 2, Cell { species: wall, ra: 0, rb: 0, clock: 0 });
        let mut n = Neighborhood::new(&mut store, &mut chunks, &mut rng, 2, 2, 1);
        update(cell, &mut n);
        assert_eq!(store.get(2, 2).species, EL_EMPTY);
        assert!(store.get(1, 1).species == EL_SMOKE
            || store.get(2, 1).species == EL_SMOKE
            || store.get(3, 1).species == EL_SMOKE);
    }
}
