//! A timing sanity check for the spec §8 performance property: on a
//! 256x256 grid with only settled Sand/Wall occupying a small fraction of
//! cells, the per-tick cost should stay well under the 16ms frame budget
//! once the grid has settled and gone mostly idle.

use std::time::Instant;

use sandcore::Universe;

#[test]
fn settled_grid_stays_within_frame_budget() {
    let mut u = Universe::with_seed(256, 256, 1);

    for x in 0..256u32 {
        u.set_cell(x, 255, sandcore::el_wall());
    }
    for x in (0..256u32).step_by(4) {
        for y in 0..8u32 {
            u.set_cell(x, y, sandcore::el_sand());
        }
    }

    // Let the sand fall and settle; settling touches every dirty chunk
    // repeatedly and is the expensive phase.
    for _ in 0..300 {
        u.tick();
    }

    // Once settled, idle ticks over mostly-empty chunks should be fast.
    let start = Instant::now();
    for _ in 0..100 {
        u.tick();
    }
    let elapsed = start.elapsed();
    let per_tick_ms = elapsed.as_secs_f64() * 1000.0 / 100.0;

    assert!(
        per_tick_ms < 16.0,
        "settled tick took {per_tick_ms:.3}ms, above the 16ms frame budget"
    );
}
