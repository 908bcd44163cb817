//! Water (spec §4.4): same gravity priority as Sand; when blocked, flows
//! horizontally along a persistent direction bit, flipping on block; in
//! freefall occasionally re-randomizes that bit to decorrelate neighbors.
//! Extinguishes Fire on contact (both become Smoke).
//!
//! Grounded on the teacher's `behaviors/liquid.rs` `LiquidBehavior`
//! (horizontal dispersion, density-gated displacement), with the
//! velocity/scan-range model replaced by the spec's simpler persistent
//! `ra & 1` flow-direction bit, and the Fire reaction pulled in from
//! `reactions.rs`'s `(EL_WATER, EL_FIRE)` entry rather than kept in a
//! separate table (spec §4.4 folds reactions into the rules).

use crate::cell::Cell;
use crate::domain::elements::{density_of, is_liquid, EL_FIRE, EL_SMOKE};
use crate::neighborhood::Neighborhood;

const FREEFALL_DECORRELATE_CHANCE: u32 = 13; // ~5% of 256

pub fn update(cell: Cell, n: &mut Neighborhood) {
    if try_extinguish(n) {
        return;
    }

    let below = n.get(0, 1);
    if below.is_empty() {
        n.swap(0, 1);
        if n.chance(FREEFALL_DECORRELATE_CHANCE) {
            let mut moved = n.get(0, 1);
            moved.ra = n.rand_byte();
            n.set(0, 1, moved);
        }
        return;
    }

    let first = if n.rand_bool() { 1 } else { -1 };
    for dx in [first, -first] {
        let diag = n.get(dx, 1);
        if diag.is_empty() {
            n.swap(dx, 1);
            return;
        }
    }

    // Flow horizontally along the persistent direction bit, flipping it
    // when blocked so the next tick tries the other side.
    let dir: i32 = if cell.ra & 1 == 0 { 1 } else { -1 };
    let side = n.get(dir, 0);
    if side.is_empty() {
        n.swap(dir, 0);
        return;
    }
    if is_liquid(side.species) && density_of(cell.species) > density_of(side.species) {
        n.swap(dir, 0);
        return;
    }

    let mut flipped = cell;
    flipped.ra ^= 1;
    n.set(0, 0, flipped);
}

/// Checks every 8-neighbor for Fire; if one is found, both this cell and
/// the neighbor become Smoke. Returns true if the reaction fired so the
/// caller can skip the rest of the rule (the cell no longer exists).
fn try_extinguish(n: &mut Neighborhood) -> bool {
    const OFFSETS: [(i32, i32); 8] = [
        (-1, -1), (0, -1), (1, -1),
        (-1, 0), (1, 0),
        (-1, 1), (0, 1), (1, 1),
    ];
    for (dx, dy) in OFFSETS {
        if n.get(dx, dy).species == EL_FIRE {
            let smoke_life = 60 + (n.rand_byte() % 60);
            n.set(dx, dy, Cell { species: EL_SMOKE, ra: 0, rb: smoke_life, clock: 0 });
            n.set(0, 0, Cell { species: EL_SMOKE, ra: 0, rb: smoke_life, clock: 0 });
            return true;
        }
    }
    false
}
