use std::rc::Rc;

use render_hooks_equal::deep_equal;
use render_hooks_value::Value;

/// Per-instance cell holding a deep-memoized value.
///
/// [`memo`](DeepMemo::memo) compares the candidate against the previously
/// accepted value and returns the prior allocation unchanged when the
/// comparator reports equality, so downstream identity-based caches keep
/// their hits across structurally equal re-renders. The first candidate is
/// always adopted.
pub struct DeepMemo<T = Value> {
    accepted: Option<Rc<T>>,
    equality: Box<dyn Fn(&T, &T) -> bool>,
}

impl DeepMemo<Value> {
    /// A cell using structural equality ([`deep_equal`]).
    pub fn new() -> Self {
        DeepMemo::with_equality(deep_equal)
    }
}

impl Default for DeepMemo<Value> {
    fn default() -> Self {
        DeepMemo::new()
    }
}

impl<T> DeepMemo<T> {
    /// A cell using a custom comparator. The comparator is called with the
    /// candidate first and the accepted value second.
    pub fn with_equality<F>(equality: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        DeepMemo {
            accepted: None,
            equality: Box::new(equality),
        }
    }

    /// Returns the accepted allocation, adopting `candidate` if it is not
    /// equal to the current one.
    pub fn memo(&mut self, candidate: T) -> Rc<T> {
        match &self.accepted {
            Some(accepted) if (self.equality)(&candidate, accepted) => Rc::clone(accepted),
            _ => {
                let adopted = Rc::new(candidate);
                self.accepted = Some(Rc::clone(&adopted));
                adopted
            }
        }
    }

    /// The currently accepted value, if any candidate has been seen.
    pub fn get(&self) -> Option<&Rc<T>> {
        self.accepted.as_ref()
    }
}
