//! render-hooks — update-cycle hook cells for component instances.
//!
//! The host framework drives each component instance through update cycles:
//! a render phase followed by a commit. The cells in this crate attach to
//! those two points and hold one value of per-instance state each:
//!
//! - [`Previous`] — exposes the value observed on the prior completed cycle.
//! - [`DeepMemo`] — keeps the accepted allocation as long as new candidates
//!   stay structurally equal to it.
//! - [`TraceUpdates`] — logs which top-level props changed between cycles.
//!
//! The host guarantees one cycle at a time per instance, non-reentrant
//! execution, and that stored values survive across cycles until
//! overwritten; cells are therefore plain owned state with no locking.
//! Render-phase methods ([`Previous::observe`], [`DeepMemo::memo`]) run
//! during the render callback; [`Previous::commit`] and
//! [`TraceUpdates::commit`] run in the post-commit callback.

mod memo;
mod previous;
mod trace;

pub use memo::DeepMemo;
pub use previous::Previous;
pub use trace::{changed_props, PropChange, Props, TraceUpdates};

pub use render_hooks_equal::{deep_equal, shallow_equal};
pub use render_hooks_value::{Pattern, PatternError, Record, Value};
