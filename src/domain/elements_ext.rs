//! Handwritten predicates layered on top of the raw element table.

use super::elements::{Category, ElementId, ELEMENT_COUNT, EL_EMPTY};

#[inline]
pub fn is_valid_element_id(id: ElementId) -> bool {
    (id as usize) < ELEMENT_COUNT
}

#[inline]
pub fn is_particle(id: ElementId) -> bool {
    id != EL_EMPTY && is_valid_element_id(id)
}

#[inline]
pub fn is_solid(id: ElementId) -> bool {
    super::elements::category_of(id) == Category::Solid
}

#[inline]
pub fn is_powder(id: ElementId) -> bool {
    super::elements::category_of(id) == Category::Powder
}

#[inline]
pub fn is_liquid(id: ElementId) -> bool {
    super::elements::category_of(id) == Category::Liquid
}

#[inline]
pub fn is_gas(id: ElementId) -> bool {
    super::elements::category_of(id) == Category::Gas
}

#[inline]
pub fn is_energy(id: ElementId) -> bool {
    super::elements::category_of(id) == Category::Energy
}

#[inline]
pub fn is_ghost(id: ElementId) -> bool {
    super::elements::category_of(id) == Category::Ghost
}
