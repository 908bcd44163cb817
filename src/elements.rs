//! Re-exports of the domain element table, so the rest of the crate can
//! write `crate::elements::EL_SAND` etc. without reaching into `domain::`.

pub use crate::domain::elements::*;
pub use crate::domain::elements_ext::*;
