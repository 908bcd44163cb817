//! The neighborhood API — the short-lived borrow every element rule sees
//! (spec §4.1/§9): a bundle of the cell store, the chunk index, the
//! current position, the active generation, and the shared PRNG. No
//! indirection, no virtual dispatch — just a value holding mutable
//! references plus a few context fields.
//!
//! Grounded on the teacher's `behaviors/mod.rs` `UpdateContext`, which
//! bundles the same shape (`grid`, `x`, `y`, `frame`, `rng`) for its
//! `Behavior` trait; here the rng and dirtying move behind `get`/`set`/
//! `swap` so a rule can never touch the store without going through the
//! stamping and re-dirtying the contract requires.

use crate::cell::Cell;
use crate::chunks::ChunkIndex;
use crate::grid::CellStore;
use crate::rng::Rng;

pub struct Neighborhood<'a> {
    store: &'a mut CellStore,
    chunks: &'a mut ChunkIndex,
    rng: &'a mut Rng,
    x: u32,
    y: u32,
    generation: u8,
}

impl<'a> Neighborhood<'a> {
    pub fn new(
        store: &'a mut CellStore,
        chunks: &'a mut ChunkIndex,
        rng: &'a mut Rng,
        x: u32,
        y: u32,
        generation: u8,
    ) -> Self {
        Self { store, chunks, rng, x, y, generation }
    }

    #[inline]
    pub fn here(&self) -> Cell {
        self.store.get(self.x as i32, self.y as i32)
    }

    /// Read the cell at relative offset `(dx, dy)`. Out-of-bounds reads
    /// return a synthetic Wall so edges act as immovable barriers
    /// (spec §4.1).
    #[inline]
    pub fn get(&self, dx: i32, dy: i32) -> Cell {
        let (x, y) = self.target(dx, dy);
        self.store.get(x, y)
    }

    /// Write a cell at relative offset `(dx, dy)`, stamping its clock to
    /// the current generation and re-dirtying the enclosing chunk(s)
    /// (spec §4.1). Offsets that land out of bounds are silently dropped —
    /// rules are expected to check `get` before writing past an edge.
    #[inline]
    pub fn set(&mut self, dx: i32, dy: i32, mut cell: Cell) {
        let (x, y) = self.target(dx, dy);
        if !self.store.in_bounds(x, y) {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        cell.clock = self.generation;
        self.store.set(x, y, cell);
        self.chunks.mark_cell(x, y);
    }

    /// Atomic exchange of the current cell with the one at `(dx, dy)`;
    /// both results are stamped for the current generation (spec §4.1).
    #[inline]
    pub fn swap(&mut self, dx: i32, dy: i32) {
        let (tx, ty) = self.target(dx, dy);
        if !self.store.in_bounds(tx, ty) {
            return;
        }
        let (tx, ty) = (tx as u32, ty as u32);
        let here_idx = self.store.index(self.x, self.y);
        let there_idx = self.store.index(tx, ty);
        self.store.swap_idx(here_idx, there_idx);

        let mut here = self.store.get_idx(here_idx);
        here.clock = self.generation;
        self.store.set_idx(here_idx, here);
        let mut there = self.store.get_idx(there_idx);
        there.clock = self.generation;
        self.store.set_idx(there_idx, there);

        self.chunks.mark_cell(self.x, self.y);
        self.chunks.mark_cell(tx, ty);
    }

    #[inline]
    fn target(&self, dx: i32, dy: i32) -> (i32, i32) {
        (self.x as i32 + dx, self.y as i32 + dy)
    }

    #[inline]
    pub fn x(&self) -> u32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.y
    }

    #[inline]
    pub fn generation(&self) -> u8 {
        self.generation
    }

    /// Uniform ternary `{-1, 0, +1}` (spec §4.1 `rand_dir`).
    #[inline]
    pub fn rand_dir(&mut self) -> i32 {
        self.rng.next_dir()
    }

    /// Uniform byte from the per-Universe PRNG (spec §4.1 `rand_byte`).
    #[inline]
    pub fn rand_byte(&mut self) -> u8 {
        self.rng.next_byte()
    }

    #[inline]
    pub fn rand_bool(&mut self) -> bool {
        self.rng.next_bool()
    }

    #[inline]
    pub fn chance(&mut self, numerator: u32) -> bool {
        self.rng.chance(numerator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{EL_EMPTY, EL_SAND, EL_WALL};

    fn harness() -> (CellStore, ChunkIndex, Rng) {
        (CellStore::new(8, 8), ChunkIndex::new(8, 8), Rng::new(1))
    }

    #[test]
    fn get_out_of_bounds_is_wall() {
        let (mut store, mut chunks, mut rng) = harness();
        let n = Neighborhood::new(&mut store, &mut chunks, &mut rng, 0, 0, 1);
        assert_eq!(n.get(-1, 0).species, EL_WALL);
    }

    #[test]
    fn set_stamps_clock_and_dirties_chunk() {
        let (mut store, mut chunks, mut rng) = harness();
        let _ = chunks.drain(0, 0);
        let mut n = Neighborhood::new(&mut store, &mut chunks, &mut rng, 2, 2, 7);
        n.set(0, 0, Cell { species: EL_SAND, ra: 0, rb: 0, clock: 0 });
        let written = store.get(2, 2);
        assert_eq!(written.species, EL_SAND);
        assert_eq!(written.clock, 7);
        assert!(chunks.is_dirty(0, 0));
    }

    #[test]
    fn swap_exchanges_and_stamps_both_sides() {
        let (mut store, mut chunks, mut rng) = harness();
        store.set(2, 2, Cell { species: EL_SAND, ra: 0, rb: 0, clock: 0 });
        let mut n = Neighborhood::new(&mut store, &mut chunks, &mut rng, 2, 2, 3);
        n.swap(0, 1);
        assert_eq!(store.get(2, 2).species, EL_EMPTY);
        let moved = store.get(2, 3);
        assert_eq!(moved.species, EL_SAND);
        assert_eq!(moved.clock, 3);
    }

    #[test]
    fn set_out_of_bounds_is_a_no_op() {
        let (mut store, mut chunks, mut rng) = harness();
        let mut n = Neighborhood::new(&mut store, &mut chunks, &mut rng, 0, 0, 1);
        n.set(-1, 0, Cell { species: EL_SAND, ra: 0, rb: 0, clock: 0 });
    }
}
