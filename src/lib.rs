//! sandcore — the falling-sand simulation core: grid, scheduler, element
//! rules, and the zero-copy render view a GPU uploader reads directly.
//!
//! Architecture:
//! - `cell`          - the 4-byte per-site record
//! - `domain`        - element table (species ids, categories, densities)
//! - `config`        - construction-time settings
//! - `error`         - the one fallible path (out-of-memory)
//! - `rng`           - the per-Universe PRNG
//! - `grid`          - the flat cell store
//! - `chunks`        - dirty-rect spatial index
//! - `neighborhood`  - the borrow every rule reads/writes through
//! - `rules`         - per-species update functions, dense dispatch
//! - `ghost`         - rigid-group translation for the Ghost element
//! - `scheduler`     - per-tick orchestration
//! - `render`        - the `{species, rb}` render image
//! - `universe`      - the top-level wasm-bindgen surface

mod cell;
mod chunks;
mod config;
mod domain;
mod elements;
mod error;
mod ghost;
mod grid;
mod neighborhood;
mod render;
mod rng;
mod rules;
mod scheduler;
mod universe;

use wasm_bindgen::prelude::*;

#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: install the panic hook and the logging backend.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        let _ = console_log::init_with_level(log::Level::Info);
    }

    web_sys::console::log_1(&"sandcore initialized".into());
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub use error::UniverseError;
pub use universe::Universe;

#[wasm_bindgen]
pub fn el_empty() -> u8 {
    domain::elements::EL_EMPTY
}
#[wasm_bindgen]
pub fn el_sand() -> u8 {
    domain::elements::EL_SAND
}
#[wasm_bindgen]
pub fn el_water() -> u8 {
    domain::elements::EL_WATER
}
#[wasm_bindgen]
pub fn el_wall() -> u8 {
    domain::elements::EL_WALL
}
#[wasm_bindgen]
pub fn el_fire() -> u8 {
    domain::elements::EL_FIRE
}
#[wasm_bindgen]
pub fn el_ghost() -> u8 {
    domain::elements::EL_GHOST
}
#[wasm_bindgen]
pub fn el_smoke() -> u8 {
    domain::elements::EL_SMOKE
}
