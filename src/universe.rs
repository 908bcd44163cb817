//! The Universe: the top-level component assembling the five leaves from
//! spec §2 (cell store, chunk index, scheduler, element rules via
//! dispatch, render view) plus the ghost group table, behind the
//! `wasm_bindgen` FFI boundary the host drives.
//!
//! Grounded on the teacher's `World` (`world.rs`): the same
//! construction/`tick`/paint-endpoint/pointer-export shape, generalized
//! from the teacher's brush/rigid-body/temperature-laden API surface down
//! to exactly the operations spec §6 names.

use log::{debug, warn};
use wasm_bindgen::prelude::*;

use crate::cell::Cell;
use crate::chunks::ChunkIndex;
use crate::config::UniverseConfig;
use crate::domain::elements::{
    is_valid_element_id, EL_EMPTY, EL_FIRE, EL_GHOST, EL_SAND, EL_SMOKE, EL_WATER,
};
use crate::error::UniverseError;
use crate::ghost::GhostTable;
use crate::grid::CellStore;
use crate::rng::Rng;
use crate::scheduler;

const EYE_ZONE: u8 = 1;
const EYE_ZONE_CHANCE: u32 = 26; // ~10% of 256

#[wasm_bindgen]
pub struct Universe {
    store: CellStore,
    chunks: ChunkIndex,
    ghosts: GhostTable,
    rng: Rng,
    generation: u32,
}

impl Universe {
    /// Fallible constructor (spec §7: out-of-memory is the one surfaced
    /// failure). `new` below wraps this for the wasm-bindgen boundary,
    /// which cannot return a `Result` to a JS constructor.
    pub fn try_new(config: UniverseConfig) -> Result<Universe, UniverseError> {
        let cell_count = (config.width as usize)
            .checked_mul(config.height as usize)
            .ok_or_else(|| {
                warn!(
                    "universe construction failed: {}x{} overflows cell count",
                    config.width, config.height
                );
                UniverseError::OutOfMemory { width: config.width, height: config.height }
            })?;
        // Two allocations per cell (4-byte Cell, 2-byte render pixel) plus
        // chunk bookkeeping; a generous ceiling catches pathological sizes
        // before we hand them to the allocator.
        if cell_count > 64 * 1024 * 1024 {
            warn!(
                "universe construction refused: {}x{} exceeds the allocation ceiling",
                config.width, config.height
            );
            return Err(UniverseError::OutOfMemory { width: config.width, height: config.height });
        }
        debug!("allocating {}x{} universe (seed={:#x})", config.width, config.height, config.seed);
        Ok(Universe {
            store: CellStore::new(config.width, config.height),
            chunks: ChunkIndex::new(config.width, config.height),
            ghosts: GhostTable::new(),
            rng: Rng::new(config.seed),
            generation: 0,
        })
    }
}

impl Drop for Universe {
    fn drop(&mut self) {
        debug!("universe ({}x{}) torn down", self.store.width(), self.store.height());
    }
}

#[wasm_bindgen]
impl Universe {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Universe {
        Universe::try_new(UniverseConfig::new(width, height))
            .expect("failed to allocate simulation grid")
    }

    /// Construct with an explicit seed (not in spec §6's operation list,
    /// but a natural complement to `new` for reproducible test replays and
    /// host-side "same seed" debugging — kept alongside `new` rather than
    /// forcing callers through a global RNG side channel).
    #[wasm_bindgen(js_name = newWithSeed)]
    pub fn with_seed(width: u32, height: u32, seed: u32) -> Universe {
        Universe::try_new(UniverseConfig::with_seed(width, height, seed))
            .expect("failed to allocate simulation grid")
    }

    #[wasm_bindgen]
    pub fn width(&self) -> u32 {
        self.store.width()
    }

    #[wasm_bindgen]
    pub fn height(&self) -> u32 {
        self.store.height()
    }

    /// Advance one generation (spec §4.3).
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        scheduler::tick(&mut self.store, &mut self.chunks, &mut self.ghosts, &mut self.rng, self.generation);
    }

    /// Paint a single cell (spec §6 `set_cell`). Out-of-range coordinates
    /// are clamped; an unknown species maps to Empty. Randomizes `ra` for
    /// materials that use it and initializes `rb` for Fire/Smoke.
    #[wasm_bindgen]
    pub fn set_cell(&mut self, x: u32, y: u32, species: u8) {
        let (cx, cy) = self.clamp(x, y);
        if (cx, cy) != (x, y) {
            debug!("set_cell: ({x}, {y}) out of range, clamped to ({cx}, {cy})");
        }
        let species = if is_valid_element_id(species) {
            species
        } else {
            warn!("set_cell: unknown species id {species} at ({cx}, {cy}), painting Empty");
            EL_EMPTY
        };
        let cell = self.paint_cell(species);
        self.write_paint(cx, cy, cell);
    }

    /// Allocate a fresh Ghost group id for a multi-cell stamp (spec §6).
    #[wasm_bindgen]
    pub fn alloc_ghost_group(&mut self) -> u32 {
        self.ghosts.alloc_group(&mut self.rng)
    }

    /// Paint one Ghost body cell belonging to `group` (spec §6
    /// `set_ghost`). Resolves the §9 open question by always exposing the
    /// explicit group/rb path: most cells become body (`rb=0`); a small
    /// fraction are tagged as eye-zone (`rb=1`) candidates for the
    /// periodic active-eye reassignment in `GhostTable::step`.
    #[wasm_bindgen]
    pub fn set_ghost(&mut self, x: u32, y: u32, group: u32) {
        let (cx, cy) = self.clamp(x, y);
        if (cx, cy) != (x, y) {
            debug!("set_ghost: ({x}, {y}) out of range, clamped to ({cx}, {cy})");
        }
        let previous = self.store.get(cx as i32, cy as i32);
        if previous.species == EL_GHOST {
            self.ghosts.unregister_cell(previous.ra as u32, cx, cy);
        }
        let rb = if self.rng.chance(EYE_ZONE_CHANCE) { EYE_ZONE } else { 0 };
        let cell = Cell { species: EL_GHOST, ra: group as u8, rb, clock: self.paint_clock() };
        self.store.set(cx, cy, cell);
        self.chunks.mark_cell(cx, cy);
        self.ghosts.register_cell(group, cx, cy);
    }

    /// Borrow the render view (spec §6 `cell_render_ptr`); valid until the
    /// next mutating call.
    #[wasm_bindgen]
    pub fn cell_render_ptr(&self) -> *const u8 {
        self.store.render().ptr()
    }

    #[wasm_bindgen]
    pub fn cell_render_len(&self) -> usize {
        self.store.render().len()
    }

    /// Release all cells and ghost groups, returning to the freshly
    /// constructed state (not in spec §6, but a natural complement to
    /// `new` for a host's "reset" control — kept here rather than forcing
    /// the host to tear down and reconstruct).
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.store.clear();
        self.chunks.mark_all();
        self.ghosts = GhostTable::new();
    }
}

impl Universe {
    fn clamp(&self, x: u32, y: u32) -> (u32, u32) {
        (x.min(self.store.width() - 1), y.min(self.store.height() - 1))
    }

    /// Clock stamp to give a freshly painted cell. Paint "suppresses clock
    /// stamping" in the sense that it never stamps a cell with the
    /// generation the *next* tick will run under (spec §5: "the first
    /// tick after paint still processes them") — using the generation the
    /// *last* tick ran under is always safe, since the next tick's value
    /// will necessarily differ from it modulo 256.
    fn paint_clock(&self) -> u8 {
        (self.generation % 256) as u8
    }

    fn paint_cell(&mut self, species: u8) -> Cell {
        let clock = self.paint_clock();
        match species {
            s if s == EL_SAND => Cell { species, ra: self.rng.next_byte(), rb: 0, clock },
            s if s == EL_WATER => Cell { species, ra: self.rng.next_byte(), rb: 0, clock },
            s if s == EL_FIRE => {
                let rb = 40 + (self.rng.next_byte() % 41);
                Cell { species, ra: 0, rb, clock }
            }
            s if s == EL_SMOKE => {
                let rb = 60 + (self.rng.next_byte() % 61);
                Cell { species, ra: 0, rb, clock }
            }
            _ => Cell { species, ra: 0, rb: 0, clock },
        }
    }

    fn write_paint(&mut self, x: u32, y: u32, cell: Cell) {
        let previous = self.store.get(x as i32, y as i32);
        if previous.species == EL_GHOST {
            self.ghosts.unregister_cell(previous.ra as u32, x, y);
        }
        self.store.set(x, y, cell);
        self.chunks.mark_cell(x, y);
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &CellStore {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn ghosts(&self) -> &GhostTable {
        &self.ghosts
    }
}
