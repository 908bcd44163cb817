//! CellStore — the single contiguous allocation of W×H cells that is the
//! ground truth of the simulation (spec §3/§4.1), plus the two-byte render
//! image kept coherent with every write.
//!
//! Grounded on the teacher's SoA `Grid`: the same `index`/`coords`/
//! `in_bounds`/`swap_idx`/`*_ptr` accessor shape, with the column-per-field
//! body (`types`/`colors`/`life`/`updated`/`temperature` as parallel `Vec`s)
//! replaced by the spec-mandated packed `Cell` array — spec §3 defines a
//! single 4-byte-per-cell record, not a column layout.

use crate::cell::Cell;
use crate::elements::EL_EMPTY;
use crate::render::RenderView;

/// Row-major cell storage. Owns its backing allocation exclusively; the
/// `Universe` that wraps it releases it on drop (spec §3 lifecycle).
pub struct CellStore {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    render: RenderView,
}

impl CellStore {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; size],
            render: RenderView::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((idx % w) as u32, (idx / w) as u32)
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Read a cell. Out-of-bounds coordinates return the synthetic Wall
    /// sentinel (spec §4.1), matching what the neighborhood API promises —
    /// callers that already know a coordinate is in-bounds can skip this
    /// check via `get_idx`.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if !self.in_bounds(x, y) {
            return Cell::wall_sentinel();
        }
        self.cells[self.index(x as u32, y as u32)]
    }

    #[inline]
    pub fn get_idx(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    /// Write a cell at an in-bounds position and keep the render view
    /// coherent (spec §4.1: paint must be visible even if no tick runs
    /// while paused, so every write reflects immediately).
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, cell: Cell) {
        let idx = self.index(x, y);
        self.set_idx(idx, cell);
    }

    #[inline]
    pub fn set_idx(&mut self, idx: usize, cell: Cell) {
        self.cells[idx] = cell;
        self.render.write(idx, cell);
    }

    /// Exchange two in-bounds cells, keeping the render view coherent for
    /// both (spec §4.1 `swap`).
    #[inline]
    pub fn swap_idx(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
        self.render.write(a, self.cells[a]);
        self.render.write(b, self.cells[b]);
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
        self.render.clear();
    }

    pub fn render(&self) -> &RenderView {
        &self.render
    }

    /// Count non-empty cells — used by test invariants, not on the hot path.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.species != EL_EMPTY).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::EL_SAND;

    #[test]
    fn index_round_trips_through_coords() {
        let store = CellStore::new(10, 8);
        for y in 0..8u32 {
            for x in 0..10u32 {
                let idx = store.index(x, y);
                assert_eq!(store.coords(idx), (x, y));
            }
        }
    }

    #[test]
    fn out_of_bounds_reads_are_wall() {
        let store = CellStore::new(4, 4);
        let c = store.get(-1, 0);
        assert_eq!(c.species, crate::elements::EL_WALL);
        let c = store.get(4, 0);
        assert_eq!(c.species, crate::elements::EL_WALL);
    }

    #[test]
    fn set_keeps_render_view_coherent() {
        let mut store = CellStore::new(4, 4);
        let cell = Cell { species: EL_SAND, ra: 5, rb: 0, clock: 1 };
        store.set(1, 1, cell);
        let idx = store.index(1, 1);
        let bytes = store.render().bytes();
        assert_eq!(bytes[idx * 2], EL_SAND);
        assert_eq!(bytes[idx * 2 + 1], 0);
    }

    #[test]
    fn swap_exchanges_cells_and_render() {
        let mut store = CellStore::new(4, 4);
        let a = store.index(0, 0);
        let b = store.index(1, 0);
        store.set_idx(a, Cell { species: EL_SAND, ra: 1, rb: 0, clock: 0 });
        store.swap_idx(a, b);
        assert_eq!(store.get_idx(a).species, EL_EMPTY);
        assert_eq!(store.get_idx(b).species, EL_SAND);
    }
}
