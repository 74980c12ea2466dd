use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::Dispose;

/// Owner of everything a mounted view must release on teardown.
///
/// Disposers run in registration order, either on an explicit
/// [`Scope::dispose`] or when the last handle is dropped.
pub struct Scope {
    inner: Rc<ScopeInner>,
}

struct ScopeInner {
    disposers: RefCell<Vec<Dispose>>,
    disposed: Cell<bool>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                disposers: RefCell::new(Vec::new()),
                disposed: Cell::new(false),
            }),
        }
    }

    pub fn add_disposer(&self, disposer: impl FnOnce() + 'static) {
        self.adopt(Dispose::new(disposer));
    }

    /// Registers an existing guard. Adopting into a disposed scope runs the
    /// guard immediately.
    pub fn adopt(&self, d: Dispose) {
        if self.inner.disposed.get() {
            log::warn!("scope: resource adopted after disposal; releasing now");
            d.run();
            return;
        }
        self.inner.disposers.borrow_mut().push(d);
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    pub fn dispose(&self) {
        self.inner.run_disposers();
    }
}

impl ScopeInner {
    fn run_disposers(&self) {
        if self.disposed.replace(true) {
            return;
        }
        let disposers = std::mem::take(&mut *self.disposers.borrow_mut());
        for disposer in disposers {
            disposer.run();
        }
    }
}

impl Clone for Scope {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
            .field("disposed", &self.inner.disposed.get())
            .field("pending", &self.inner.disposers.borrow().len())
            .finish()
    }
}

impl Drop for ScopeInner {
    fn drop(&mut self) {
        self.run_disposers();
    }
}
