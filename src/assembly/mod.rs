//! Building preview glyphs: component flattening, composition and spacing

pub mod assembler;
pub mod composite;
pub mod spacing;

pub use assembler::GlyphAssembler;
pub use composite::{CompositeGlyph, UnresolvedComponent, UnresolvedReason};
pub use spacing::{ExtraSidebearings, SpacingPolicy};
