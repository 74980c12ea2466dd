use std::cell::RefCell;
use std::rc::Rc;

/// Writable handle to a shared value.
///
/// Cloning a `Signal` hands out another writer; use [`Signal::read_only`] when
/// the receiver must never write the value back.
#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<RefCell<T>>);

/// Read-only view of a [`Signal`]. Reads are pull-based: nothing is notified
/// when the value changes, consumers sample it when they need it.
#[derive(Clone)]
pub struct ReadSignal<T: 'static>(Rc<RefCell<T>>);

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().clone()
    }
    pub fn set(&self, v: T) {
        *self.0.borrow_mut() = v;
    }
    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.borrow_mut());
    }
    pub fn read_only(&self) -> ReadSignal<T> {
        ReadSignal(self.0.clone())
    }
}

impl<T> ReadSignal<T> {
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().clone()
    }
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Signal").field(&*self.0.borrow()).finish()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ReadSignal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ReadSignal").field(&*self.0.borrow()).finish()
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
