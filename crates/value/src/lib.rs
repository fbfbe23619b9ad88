//! render-hooks-value — the value model shared by the render-hooks crates.
//!
//! Provides [`Value`], a tagged union over the shapes a host UI framework
//! passes through component props: absence markers, primitives, instants,
//! textual patterns, ordered lists, and string-keyed records.
//!
//! Lists, records, and patterns are reference-counted so that clones are
//! cheap and pointer identity survives across update cycles, which is what
//! the shallow per-render comparison in `render-hooks-equal` observes.

mod json;
mod pattern;
mod value;

pub use pattern::{Pattern, PatternError};
pub use value::{Record, Value};
