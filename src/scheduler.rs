//! Per-tick scheduler (spec §4.3): advances the generation, runs the one
//! ghost-group translation pass, then walks dirty chunks bottom row first
//! with alternating horizontal direction, dispatching each non-empty,
//! un-stamped cell to its element rule.
//!
//! Grounded on the teacher's `World::step`/`process_chunk_row`/
//! `process_chunk` (`world.rs`): same bottom-to-top chunk-row walk with
//! `go_right = (frame & 1) == 0` direction alternation, generalized to
//! drain a dirty *rectangle* per chunk (via `ChunkIndex::drain`) instead
//! of iterating a chunk's full 32×32 extent unconditionally.

use crate::chunks::ChunkIndex;
use crate::ghost::GhostTable;
use crate::grid::CellStore;
use crate::neighborhood::Neighborhood;
use crate::rng::Rng;
use crate::rules;

/// Runs one full tick over `store`, consuming and reproducing dirty
/// rectangles in `chunks` as rules move cells.
pub fn tick(
    store: &mut CellStore,
    chunks: &mut ChunkIndex,
    ghosts: &mut GhostTable,
    rng: &mut Rng,
    generation: u32,
) {
    let g = (generation % 256) as u8;
    let scan_right = generation % 2 == 0;

    ghosts.step(store, chunks, rng, g);

    let chunks_x = chunks.chunks_x();
    let chunks_y = chunks.chunks_y();

    for cy in (0..chunks_y).rev() {
        let row: Vec<u32> = if scan_right { (0..chunks_x).collect() } else { (0..chunks_x).rev().collect() };
        for cx in row {
            let Some(rect) = chunks.drain(cx, cy) else { continue };
            for y in (rect.min_y..=rect.max_y).rev() {
                let xs: Vec<u32> = if scan_right {
                    (rect.min_x..=rect.max_x).collect()
                } else {
                    (rect.min_x..=rect.max_x).rev().collect()
                };
                for x in xs {
                    let cell = store.get(x as i32, y as i32);
                    if cell.is_empty() {
                        continue;
                    }
                    if cell.stamped_for(g) {
                        continue;
                    }
                    let mut n = Neighborhood::new(store, chunks, rng, x, y, g);
                    rules::dispatch(cell, &mut n);
                }
            }
        }
    }
}
