//! Capture values emitted into callback-style sinks.

use std::cell::RefCell;
use std::rc::Rc;

/// Shared log of every value handed to [`Recorder::sink`].
#[derive(Debug)]
pub struct Recorder<T> {
    calls: Rc<RefCell<Vec<T>>>,
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Rc::clone(&self.calls),
        }
    }
}

impl<T: Clone + 'static> Recorder<T> {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Closure that appends each value it receives.
    pub fn sink(&self) -> impl Fn(T) + use<T> {
        let calls = Rc::clone(&self.calls);
        move |value| calls.borrow_mut().push(value)
    }

    /// Snapshot of the recorded values in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<T> {
        self.calls.borrow().clone()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}
