//! Universal invariants from spec §8. Properties observable through the
//! public render surface alone are exercised here as black-box tests:
//! 1 (conservation of Wall), 4 (edge confinement), 5 (empty growth
//! monotonicity), 6 (determinism).
//!
//! Properties 2 (no double-update) and 3 (dirty-rect soundness) turn on
//! internal state this crate never exposes publicly — the per-cell clock
//! stamp and a chunk's dirty rectangle — so they are covered by white-box
//! unit tests instead: `src/scheduler.rs::blocked_cell_at_chunk_boundary_is_dispatched_only_once`
//! (property 2) and `src/chunks.rs::neighbor_wake_rect_stays_within_neighbor_bounds` /
//! `neighbor_wake_rect_stays_within_bounds_on_every_edge` (property 3).

use sandcore::Universe;

fn snapshot(u: &Universe) -> Vec<u8> {
    let len = u.cell_render_len();
    let ptr = u.cell_render_ptr();
    unsafe { std::slice::from_raw_parts(ptr, len) }.to_vec()
}

#[test]
fn conservation_of_wall() {
    let mut u = Universe::with_seed(32, 32, 42);
    for x in 0..32u32 {
        u.set_cell(x, 20, sandcore::el_wall());
    }
    for x in 0..32u32 {
        u.set_cell(x, 0, sandcore::el_sand());
    }
    let before = snapshot(&u);
    let wall_count_before = before.iter().step_by(2).filter(|&&s| s == sandcore::el_wall()).count();

    for _ in 0..100 {
        u.tick();
    }

    let after = snapshot(&u);
    let wall_count_after = after.iter().step_by(2).filter(|&&s| s == sandcore::el_wall()).count();
    assert_eq!(wall_count_before, wall_count_after);

    // Every wall position that was set is still a wall afterward (not
    // just the same count — the actual cells are unmoved).
    for x in 0..32u32 {
        let off = 2 * (20usize * 32 + x as usize);
        assert_eq!(after[off], sandcore::el_wall());
    }
}

#[test]
fn edge_confinement() {
    let mut u = Universe::with_seed(8, 8, 1);
    for x in 0..8u32 {
        u.set_cell(x, 0, sandcore::el_sand());
        u.set_cell(x, 7, sandcore::el_water());
    }
    for _ in 0..200 {
        u.tick();
    }
    // If anything had moved out of bounds the render buffer length
    // (fixed at construction) would be the only thing protecting us from
    // an out-of-bounds write; exercising many ticks on edge-adjacent
    // cells is the practical proxy for that invariant here.
    assert_eq!(u.cell_render_len(), 8 * 8 * 2);
}

#[test]
fn empty_growth_monotonic_once_idle() {
    let mut u = Universe::with_seed(16, 16, 5);
    u.set_cell(8, 8, sandcore::el_fire());
    // Run past Fire's max lifetime (80) plus Smoke's max lifetime (120)
    // so the grid is fully idle.
    for _ in 0..250 {
        u.tick();
    }

    let mut last_empty = count_empty(&u);
    for _ in 0..20 {
        u.tick();
        let empty_now = count_empty(&u);
        assert!(empty_now >= last_empty, "empty count decreased on an idle grid");
        last_empty = empty_now;
    }
}

fn count_empty(u: &Universe) -> usize {
    let bytes = snapshot(u);
    bytes.iter().step_by(2).filter(|&&s| s == sandcore::el_empty()).count()
}

#[test]
fn determinism_with_fixed_seed() {
    let mut a = Universe::with_seed(20, 20, 777);
    let mut b = Universe::with_seed(20, 20, 777);
    for i in 0..40u32 {
        let x = (i * 3) % 20;
        let y = (i * 7) % 20;
        let species = [sandcore::el_sand(), sandcore::el_water(), sandcore::el_fire()][(i % 3) as usize];
        a.set_cell(x, y, species);
        b.set_cell(x, y, species);
    }
    for _ in 0..300 {
        a.tick();
        b.tick();
    }
    assert_eq!(snapshot(&a), snapshot(&b));
}
