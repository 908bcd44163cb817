//! Sand (spec §4.4): falls straight down, else rolls down a random
//! diagonal, else the other; sinks through lighter fluids by density.
//!
//! Grounded on the teacher's `behaviors/powder.rs` `PowderBehavior`
//! (diagonal-rolling dispersion, `can_displace` density swap), with the
//! vertical fall folded in here instead of being split into a separate
//! `physics.rs` pass.

use crate::cell::Cell;
use crate::domain::elements::{density_of, is_liquid};
use crate::neighborhood::Neighborhood;

pub fn update(cell: Cell, n: &mut Neighborhood) {
    let below = n.get(0, 1);
    if below.is_empty() {
        n.swap(0, 1);
        return;
    }
    if is_liquid(below.species) && density_of(cell.species) > density_of(below.species) {
        n.swap(0, 1);
        return;
    }

    let first = if n.rand_bool() { 1 } else { -1 };
    for dx in [first, -first] {
        let diag = n.get(dx, 1);
        if diag.is_empty() {
            n.swap(dx, 1);
            return;
        }
        if is_liquid(diag.species) && density_of(cell.species) > density_of(diag.species) {
            n.swap(dx, 1);
            return;
        }
    }
}
