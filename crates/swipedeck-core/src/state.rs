//! Observable values that invalidate the scene when written.

use crate::runtime::RuntimeHandle;
use std::cell::RefCell;
use std::rc::Rc;

/// Single-threaded mutable value bound to a runtime.
///
/// Writing a different value requests a render from the runtime.
pub struct MutableState<T> {
    inner: Rc<RefCell<T>>,
    runtime: RuntimeHandle,
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            runtime: self.runtime.clone(),
        }
    }
}

impl<T: Clone + PartialEq> MutableState<T> {
    pub fn with_runtime(value: T, runtime: RuntimeHandle) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
            runtime,
        }
    }

    pub fn value(&self) -> T {
        self.inner.borrow().clone()
    }

    pub fn set_value(&self, value: T) {
        let changed = {
            let mut current = self.inner.borrow_mut();
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        };
        if changed {
            self.runtime.request_render();
        }
    }

    /// Update the value in place, requesting a render if it changed.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut next = self.value();
        f(&mut next);
        self.set_value(next);
    }

    pub fn as_state(&self) -> State<T> {
        State {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Read-only view of a [`MutableState`].
pub struct State<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone> State<T> {
    pub fn get(&self) -> T {
        self.inner.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow())
    }
}
