//! Dense per-species dispatch (spec §9 Design Notes): a fixed-size array
//! of function pointers indexed by `species`, not a dynamic dispatch table
//! over a trait — the element set is small and closed (7 species), so the
//! teacher's `Behavior` trait / `BehaviorRegistry` indirection
//! (`behaviors/mod.rs`) buys nothing here.

mod fire;
mod sand;
mod smoke;
mod water;

use crate::cell::Cell;
use crate::domain::elements::ELEMENT_COUNT;
use crate::neighborhood::Neighborhood;

pub type RuleFn = fn(Cell, &mut Neighborhood);

fn update_empty(_cell: Cell, _n: &mut Neighborhood) {}

fn update_wall(_cell: Cell, _n: &mut Neighborhood) {}

/// Ghost cells are moved in bulk by the group-translation pass
/// (`crate::ghost`) run once per tick, before the per-cell scan reaches
/// them; the per-cell pass no-ops on them (spec §4.4, §9).
fn update_ghost(_cell: Cell, _n: &mut Neighborhood) {}

const RULES: [RuleFn; ELEMENT_COUNT] = [
    update_empty,    // 0 Empty
    sand::update,    // 1 Sand
    water::update,   // 2 Water
    update_wall,     // 3 Wall
    fire::update,    // 4 Fire
    update_ghost,    // 5 Ghost
    smoke::update,   // 6 Smoke
];

/// Dispatch a cell's update through the rule table keyed by its species.
#[inline]
pub fn dispatch(cell: Cell, n: &mut Neighborhood) {
    debug_assert!((cell.species as usize) < ELEMENT_COUNT, "unknown species dispatched");
    RULES[cell.species as usize](cell, n);
}
