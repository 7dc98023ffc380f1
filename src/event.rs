use std::cell::{Cell, RefCell};

/// Handler list for a persistent SDK event.
///
/// Handlers may subscribe further handlers while the event is being emitted;
/// those are kept and first run on the next emission. A `replace` or `clear`
/// issued during emission also discards the handlers that are running.
pub(crate) struct Event<F: ?Sized> {
    handlers: RefCell<Vec<Box<F>>>,
    // Bumped by `replace` and `clear`.
    generation: Cell<u64>,
}

impl<F: ?Sized> Default for Event<F> {
    fn default() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
            generation: Cell::new(0),
        }
    }
}

impl<F: ?Sized> Event<F> {
    pub(crate) fn subscribe(&self, handler: Box<F>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Drops every handler and installs `handler` alone.
    pub(crate) fn replace(&self, handler: Box<F>) {
        let old = std::mem::replace(&mut *self.handlers.borrow_mut(), vec![handler]);
        self.generation.set(self.generation.get() + 1);
        drop(old);
    }

    pub(crate) fn clear(&self) {
        let old = std::mem::take(&mut *self.handlers.borrow_mut());
        self.generation.set(self.generation.get() + 1);
        drop(old);
    }

    pub(crate) fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub(crate) fn emit(&self, mut invoke: impl FnMut(&mut F)) {
        let generation = self.generation.get();
        let mut running = std::mem::take(&mut *self.handlers.borrow_mut());
        for handler in running.iter_mut() {
            invoke(handler);
        }
        if self.generation.get() != generation {
            // Replaced or cleared mid-emit; what is registered now wins.
            drop(running);
            return;
        }
        let mut handlers = self.handlers.borrow_mut();
        let added = std::mem::replace(&mut *handlers, running);
        handlers.extend(added);
    }
}
