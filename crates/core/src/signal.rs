//! Minimal synchronous signal used by the widget models.

/// A list of handlers invoked, in connection order, every time the signal
/// is emitted. A blocked signal drops emissions silently.
pub struct Signal<T: ?Sized> {
    handlers: Vec<Box<dyn Fn(&T)>>,
    blocked: bool,
}

impl<T: ?Sized> Signal<T> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            blocked: false,
        }
    }

    pub fn connect<F: Fn(&T) + 'static>(&mut self, handler: F) {
        self.handlers.push(Box::new(handler));
    }

    pub fn emit(&self, value: &T) {
        if self.blocked {
            return;
        }
        for handler in &self.handlers {
            handler(value);
        }
    }

    pub fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }
}

impl<T: ?Sized> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_every_handler() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut signal: Signal<i32> = Signal::new();

        let a = seen.clone();
        signal.connect(move |v| a.borrow_mut().push(("a", *v)));
        let b = seen.clone();
        signal.connect(move |v| b.borrow_mut().push(("b", *v)));

        signal.emit(&7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_blocked_signal_drops_emissions() {
        let count = Rc::new(RefCell::new(0));
        let mut signal: Signal<()> = Signal::new();
        let c = count.clone();
        signal.connect(move |_| *c.borrow_mut() += 1);

        signal.set_blocked(true);
        signal.emit(&());
        signal.set_blocked(false);
        signal.emit(&());

        assert_eq!(*count.borrow(), 1);
    }
}
