//! Prop change tracking: which top-level keys changed between update cycles.

use indexmap::IndexMap;
use render_hooks_equal::shallow_equal;
use render_hooks_value::{Record, Value};
use serde::Serialize;
use tracing::debug;

/// The top-level prop map of a component instance.
pub type Props = Record;

/// One changed prop: the value from the previous cycle and the current one.
#[derive(Debug, Clone, Serialize)]
pub struct PropChange {
    pub previous: Value,
    pub current: Value,
}

/// Computes the top-level keys of `current` whose value differs from
/// `prev` under [`shallow_equal`].
///
/// A key absent from `prev` compares against [`Value::Undefined`]. Keys
/// present only in `prev` are not reported; the host renders with the
/// current prop set, so a removed key simply stops appearing. Iteration
/// order follows `current`.
pub fn changed_props(prev: &Props, current: &Props) -> IndexMap<String, PropChange> {
    let mut changes = IndexMap::new();
    for (key, value) in current {
        let before = prev.get(key).cloned().unwrap_or(Value::Undefined);
        if !shallow_equal(&before, value) {
            changes.insert(
                key.clone(),
                PropChange {
                    previous: before,
                    current: value.clone(),
                },
            );
        }
    }
    changes
}

/// Per-instance change logger.
///
/// After each commit, compares the committed props against the previous
/// cycle's and emits one `tracing` debug event naming the component and the
/// changed keys. Purely observational; nothing is returned to callers. The
/// first commit has no previous cycle and emits nothing.
#[derive(Debug)]
pub struct TraceUpdates {
    name: String,
    prev: Option<Props>,
}

impl TraceUpdates {
    pub fn new(name: impl Into<String>) -> Self {
        TraceUpdates {
            name: name.into(),
            prev: None,
        }
    }

    /// Call from the post-commit callback with the cycle's props.
    pub fn commit(&mut self, props: &Props) {
        if let Some(prev) = &self.prev {
            let changes = changed_props(prev, props);
            if !changes.is_empty() {
                let payload = serde_json::to_value(&changes).unwrap_or_default();
                debug!(component = %self.name, changed = %payload, "changed props");
            }
        }
        self.prev = Some(props.clone());
    }

    /// The props committed on the previous cycle.
    pub fn previous(&self) -> Option<&Props> {
        self.prev.as_ref()
    }
}
