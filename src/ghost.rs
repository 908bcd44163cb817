//! Ghost cluster rigid-group translation (spec §4.4, §9): the scheduler
//! walks this table once per tick, before the per-cell pass, translating
//! each group as a unit; the per-cell pass then no-ops on ghost cells
//! (`rules::update_ghost`).
//!
//! Grounded on the teacher's `rigid_body_system.rs` (`RigidBodySystem`):
//! same erase-the-old-footprint / test-occupancy / redraw-at-new-position
//! shape, stripped of its momentum, torque, and penetration-response
//! physics — spec's Non-goals explicitly exclude "deformable rigid-body
//! debris" and variable-timestep physics. What survives is purely the
//! occupancy-tested translation of a cached cell footprint, plus the
//! spec §3 group table's `life` field, given a role here as the group's
//! remaining haunting duration: it counts down every tick and, on
//! expiry, the group fades out (its body cells clear to Empty) the same
//! way a Fire or Smoke cell's `rb` lifetime expires it.

use crate::cell::Cell;
use crate::chunks::ChunkIndex;
use crate::domain::elements::{EL_EMPTY, EL_GHOST};
use crate::grid::CellStore;
use crate::rng::Rng;

const EYE_ZONE: u8 = 1;
const ACTIVE_EYE: u8 = 2;
const EYE_REASSIGN_CHANCE: u32 = 4; // ~1.5% of 256, per tick, per group
const GROUP_LIFE_MIN: u32 = 600;
const GROUP_LIFE_RANGE: u32 = 600; // life in [600, 1199] ticks

/// Per-group rigid-body state (spec §3 "Ghost group table").
#[derive(Clone, Debug, Default)]
pub struct GhostGroup {
    /// Absolute world coordinates of every body cell currently belonging
    /// to this group, kept current across translations.
    cells: Vec<(u32, u32)>,
    vx: i32,
    vy: i32,
    /// Remaining ticks before this group fades out (spec §3 group table
    /// `life`); decremented once per `step`, regardless of whether the
    /// group's translation attempt succeeds.
    life: u32,
}

impl GhostGroup {
    fn is_retired(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The table of active Ghost groups, owned by the Universe.
#[derive(Default)]
pub struct GhostTable {
    groups: Vec<GhostGroup>,
}

impl GhostTable {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Allocate a new group id, used by one multi-cell paint stamp
    /// (spec §6 `alloc_ghost_group`). `life` is drawn uniformly from
    /// `[GROUP_LIFE_MIN, GROUP_LIFE_MIN + GROUP_LIFE_RANGE)` — spec §3
    /// names the field but doesn't pin a duration, so this mirrors the
    /// shape of Fire/Smoke's own `rb`-lifetime initialization (§4.4) at a
    /// scale long enough to outlive ordinary test runs.
    pub fn alloc_group(&mut self, rng: &mut Rng) -> u32 {
        let life = GROUP_LIFE_MIN + (rng.next_u32() % GROUP_LIFE_RANGE);
        self.groups.push(GhostGroup { life, ..GhostGroup::default() });
        (self.groups.len() - 1) as u32
    }

    /// Record that a body cell at `(x, y)` now belongs to `group` — called
    /// from the ghost paint path (spec §6 `set_ghost`).
    pub fn register_cell(&mut self, group: u32, x: u32, y: u32) {
        if let Some(g) = self.groups.get_mut(group as usize) {
            g.cells.push((x, y));
        }
    }

    /// Drop a cell from its group's membership — called when a cell the
    /// group used to own is overwritten by other paint (spec §3: "groups
    /// are... retired when their last cell is destroyed").
    pub fn unregister_cell(&mut self, group: u32, x: u32, y: u32) {
        if let Some(g) = self.groups.get_mut(group as usize) {
            g.cells.retain(|&(cx, cy)| (cx, cy) != (x, y));
        }
    }

    #[cfg(test)]
    pub(crate) fn group_cell_count(&self, group: u32) -> usize {
        self.groups.get(group as usize).map_or(0, |g| g.cells.len())
    }

    /// One rigid translation attempt per group, run once per tick before
    /// the per-cell scan (spec §4.4, §9). A group whose `life` expires
    /// this tick fades out instead of translating.
    pub fn step(&mut self, store: &mut CellStore, chunks: &mut ChunkIndex, rng: &mut Rng, generation: u8) {
        for group_id in 0..self.groups.len() {
            if self.groups[group_id].is_retired() {
                continue;
            }
            self.groups[group_id].life = self.groups[group_id].life.saturating_sub(1);
            if self.groups[group_id].life == 0 {
                self.despawn_group(group_id as u32, store, chunks);
                continue;
            }
            self.translate_group(group_id as u32, store, chunks, rng, generation);
            if rng.chance(EYE_REASSIGN_CHANCE) {
                self.reassign_active_eye(group_id as u32, store, chunks, rng, generation);
            }
        }
    }

    /// Clear every body cell of a group whose `life` has expired, the
    /// same terminal transition Fire/Smoke cells make on their own `rb`
    /// lifetime expiry (spec §4.4). Leaves the group retired.
    fn despawn_group(&mut self, group_id: u32, store: &mut CellStore, chunks: &mut ChunkIndex) {
        let cells = std::mem::take(&mut self.groups[group_id as usize].cells);
        for (x, y) in cells {
            store.set(x, y, Cell { species: EL_EMPTY, ra: 0, rb: 0, clock: 0 });
            chunks.mark_cell(x, y);
        }
    }

    fn translate_group(
        &mut self,
        group_id: u32,
        store: &mut CellStore,
        chunks: &mut ChunkIndex,
        rng: &mut Rng,
        generation: u8,
    ) {
        let group = &self.groups[group_id as usize];
        let (mut dx, mut dy) = (group.vx.clamp(-1, 1), group.vy.clamp(-1, 1));
        if dx == 0 && dy == 0 {
            dx = rng.next_dir();
            dy = rng.next_dir();
        }

        let blocked = group.cells.iter().any(|&(x, y)| {
            let (nx, ny) = (x as i32 + dx, y as i32 + dy);
            if !store.in_bounds(nx, ny) {
                return true;
            }
            let target = store.get(nx, ny);
            !(target.is_empty() || (target.species == EL_GHOST && target.ra as u32 == group_id))
        });

        if blocked {
            let group = &mut self.groups[group_id as usize];
            group.vx = rng.next_dir();
            group.vy = rng.next_dir();
            return;
        }

        let old_cells = self.groups[group_id as usize].cells.clone();
        let old_data: Vec<Cell> = old_cells.iter().map(|&(x, y)| store.get(x as i32, y as i32)).collect();

        for &(x, y) in &old_cells {
            store.set(x, y, Cell::EMPTY);
            chunks.mark_cell(x, y);
        }

        let mut new_cells = Vec::with_capacity(old_cells.len());
        for (i, &(x, y)) in old_cells.iter().enumerate() {
            let (nx, ny) = ((x as i32 + dx) as u32, (y as i32 + dy) as u32);
            let mut cell = old_data[i];
            cell.clock = generation;
            store.set(nx, ny, cell);
            chunks.mark_cell(nx, ny);
            new_cells.push((nx, ny));
        }

        let group = &mut self.groups[group_id as usize];
        group.cells = new_cells;
        group.vx = dx;
        group.vy = dy;
    }

    /// Periodically re-assign which eye-zone cell is the active eye, so
    /// the ghost appears to blink/shift its gaze (spec §4.4).
    fn reassign_active_eye(
        &self,
        group_id: u32,
        store: &mut CellStore,
        chunks: &mut ChunkIndex,
        rng: &mut Rng,
        generation: u8,
    ) {
        let cells = &self.groups[group_id as usize].cells;
        let eye_positions: Vec<(u32, u32)> = cells
            .iter()
            .copied()
            .filter(|&(x, y)| {
                let c = store.get(x as i32, y as i32);
                c.rb == EYE_ZONE || c.rb == ACTIVE_EYE
            })
            .collect();
        if eye_positions.is_empty() {
            return;
        }

        for &(x, y) in &eye_positions {
            let mut c = store.get(x as i32, y as i32);
            if c.rb == ACTIVE_EYE {
                c.rb = EYE_ZONE;
                c.clock = generation;
                store.set(x, y, c);
                chunks.mark_cell(x, y);
            }
        }

        let pick = (rng.next_u32() as usize) % eye_positions.len();
        let (x, y) = eye_positions[pick];
        let mut c = store.get(x as i32, y as i32);
        c.rb = ACTIVE_EYE;
        c.clock = generation;
        store.set(x, y, c);
        chunks.mark_cell(x, y);
    }
}
