//! Fire (spec §4.4): counts down a lifetime held in `rb`, decaying to
//! Smoke on expiry; rises with a random tie-break; never falls;
//! extinguishes on contact with Water (both become Smoke).
//!
//! Grounded on the teacher's `behaviors/energy.rs` `update_fire`, which
//! rises erratically via a `(frame*x*y)&3` hash; here the tie-break comes
//! from the neighborhood API's own PRNG instead, since the rule is
//! expected to be deterministic only through the shared per-Universe seed
//! (spec §9's "Random source" note), not through position/frame hashing.

use crate::cell::Cell;
use crate::domain::elements::{EL_EMPTY, EL_SMOKE, EL_WATER};
use crate::neighborhood::Neighborhood;

const SMOKE_LIFE_MIN: u8 = 60;
const SMOKE_LIFE_RANGE: u8 = 60;

pub fn update(cell: Cell, n: &mut Neighborhood) {
    if try_extinguish(n) {
        return;
    }

    let remaining = cell.rb.saturating_sub(1);
    if remaining == 0 {
        let life = SMOKE_LIFE_MIN + (n.rand_byte() % SMOKE_LIFE_RANGE);
        n.set(0, 0, Cell { species: EL_SMOKE, ra: 0, rb: life, clock: 0 });
        return;
    }
    let decayed = Cell { rb: remaining, ..cell };

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

fn try_extinguish(n: &mut Neighborhood) -> bool {
    const OFFSETS: [(i32, i32); 8] = [
        (-1, -1), (0, -1), (1, -1),
        (-1, 0), (1, 0),
        (-1, 1), (0, 1), (1, 1),
    ];
    for (dx, dy) in OFFSETS {
        if n.get(dx, dy).species == EL_WATER {
            let smoke_life = SMOKE_LIFE_MIN + (n.rand_byte() % SMOKE_LIFE_RANGE);
            n.set(dx, dy, Cell { species: EL_SMOKE, ra: 0, rb: smoke_life, clock: 0 });
            n.set(0, 0, Cell { species: EL_SMOKE, ra: 0, rb: smoke_life, clock: 0 });
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunks::ChunkIndex;
    use crate::domain::elements::EL_FIRE;
    use crate::grid::CellStore;
    use crate::rng::Rng;

    #[test]
    fn decrements_lifetime_and_rises() {
        let mut store = CellStore::new(4, 4);
        let mut chunks = ChunkIndex::new(4, 4);
        let mut rng = Rng::new(1);
        let cell = Cell { species: EL_FIRE, ra: 0, rb: 40, clock: 0 };
        store.set(2, 2, cell);
        let mut n = Neighborhood::new(&mut store, &mut chunks, &mut rng, 2, 2, 1);
        update(cell, &mut n);
        assert_eq!(store.get(2, 2).species, EL_EMPTY);
        let moved = store.get(2, 1);
        assert_eq!(moved.species, EL_FIRE);
        assert_eq!(moved.rb, 39);
    }

    #[test]
    fn decays_to_smoke_on_expiry() {
        let mut store = CellStore::new(4, 4);
        let mut chunks = ChunkIndex::new(4, 4);
        let mut rng = Rng::new(1);
        let cell = Cell { species: EL_FIRE, ra: 0, rb: 1, clock: 0 };
        store.set(2, 2, cell);
        let mut n = Neighborhood::new(&mut store, &mut chunks, &mut rng, 2, 2, 1);
        update(cell, &mut n);
        assert_eq!(store.get(2, 2).species, EL_SMOKE);
    }

    #[test]
    fn never_moves_downward() {
        let mut store = CellStore::new(4, 4);
        let mut chunks = ChunkIndex::new(4, 4);
        let mut rng = Rng::new(1);
        let cell = Cell { species: EL_FIRE, ra: 0, rb: 40, clock: 0 };
        store.set(2, 0, cell);
        for x in 0..4u32 {
            store.set(x, 1, Cell { species: crate::domain::elements::EL_WALL, ra: 0, rb: 0, clock: 0 });
        }
        let mut n = Neighborhood::new(&mut store, &mut chunks, &mut rng, 2, 0, 1);
        update(cell, &mut n);
        assert_ne!(store.get(2, 1).species, EL_FIRE);
    }
}
