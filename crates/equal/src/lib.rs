//! render-hooks-equal — equality comparators for [`render_hooks_value::Value`].
//!
//! Provides [`deep_equal`] for recursive structural comparison with strict
//! variant checking, and [`shallow_equal`] for the host framework's
//! per-render reference semantics (value equality for primitives, pointer
//! identity for shared composites).

mod deep_equal;
mod shallow_equal;

pub use deep_equal::deep_equal;
pub use shallow_equal::shallow_equal;
