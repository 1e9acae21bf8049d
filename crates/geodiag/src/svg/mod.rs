//! Minimal retained SVG layer.
//!
//! - `Surface`: ordered elements keyed by `(Selector, DatumKey)`; `join`
//!   implements enter/update/exit so redraws update instead of duplicating.
//! - `arc`: annular sector path data (clockwise-from-top convention).
//! - `write`: document serialisation and compact number formatting.

pub mod arc;
mod surface;
mod write;

pub use arc::{annular_sector, ArcSpec};
pub use surface::{DatumKey, Element, Selector, Surface};
pub use write::{escape_xml, fmt_num};
