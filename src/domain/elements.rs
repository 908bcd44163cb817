//! Element (species) definitions — the closed, compiled-in table fixed by
//! protocol between the simulation core and the renderer (spec §6, element
//! table). Unlike the teacher's JSON-driven `ContentRegistry`, this set never
//! grows at runtime: spec §9 explicitly steers away from a dynamic dispatch
//! table in favor of a dense, fixed-size array indexed by species id.

/// Species identifier: an index into `ELEMENT_DATA`.
pub type ElementId = u8;

pub const EL_EMPTY: ElementId = 0;
pub const EL_SAND: ElementId = 1;
pub const EL_WATER: ElementId = 2;
pub const EL_WALL: ElementId = 3;
pub const EL_FIRE: ElementId = 4;
pub const EL_GHOST: ElementId = 5;
pub const EL_SMOKE: ElementId = 6;

pub const ELEMENT_COUNT: usize = 7;

/// Broad behavioral grouping, mirroring the teacher's `CategoryId` but
/// narrowed to the categories this closed element set actually needs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    Empty,
    Powder,
    Liquid,
    Solid,
    Energy,
    Gas,
    Ghost,
}

/// Static per-species metadata. `density` governs displacement: a denser
/// cell falling onto a lighter fluid swaps with it (spec §4.4 "density
/// displacement").
#[derive(Clone, Copy, Debug)]
pub struct ElementProps {
    pub name: &'static str,
    pub category: Category,
    pub density: f32,
    /// Initial `rb` range (inclusive) assigned when this species is painted,
    /// for species whose `rb` is a lifetime counter. `None` for species that
    /// don't use `rb` as a lifetime (Wall, Sand, Water use `rb` for other
    /// purposes or not at all).
    pub initial_life: Option<(u8, u8)>,
}

pub const ELEMENT_DATA: [ElementProps; ELEMENT_COUNT] = [
    // 0 Empty
    ElementProps { name: "empty", category: Category::Empty, density: 0.0, initial_life: None },
    // 1 Sand
    ElementProps { name: "sand", category: Category::Powder, density: 3.0, initial_life: None },
    // 2 Water
    ElementProps { name: "water", category: Category::Liquid, density: 1.0, initial_life: None },
    // 3 Wall
    ElementProps { name: "wall", category: Category::Solid, density: f32::INFINITY, initial_life: None },
    // 4 Fire
    ElementProps { name: "fire", category: Category::Energy, density: 0.2, initial_life: Some((40, 80)) },
    // 5 Ghost
    ElementProps { name: "ghost", category: Category::Ghost, density: 0.0, initial_life: None },
    // 6 Smoke
    ElementProps { name: "smoke", category: Category::Gas, density: 0.1, initial_life: Some((60, 120)) },
];

#[inline]
pub fn props(id: ElementId) -> &'static ElementProps {
    debug_assert!((id as usize) < ELEMENT_COUNT, "unknown species id {id}");
    &ELEMENT_DATA[(id as usize).min(ELEMENT_COUNT - 1)]
}

#[inline]
pub fn category_of(id: ElementId) -> Category {
    props(id).category
}

#[inline]
pub fn density_of(id: ElementId) -> f32 {
    props(id).density
}
