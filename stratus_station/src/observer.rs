use std::rc::Rc;

pub trait Observer<E> {
    /// Emit the event to the observer (called by the Observable).
    fn emit(&self, event: E);
}

pub trait Observable<E: Clone> {
    /// Register a new observer that will receive all Observable events.
    ///
    /// Duplicate registrations are kept as-is: registering the same handle
    /// twice means it receives two notifications per event.
    fn register_observer(&mut self, observer: Rc<dyn Observer<E>>);

    /// Remove every registration of the given observer handle
    /// (compared by identity, see [`Rc::ptr_eq`]).
    /// Removing a handle that was never registered does nothing.
    fn remove_observer(&mut self, observer: &Rc<dyn Observer<E>>);

    /// Synchronously emit `event` to each registered observer, in
    /// registration order (first registered, first notified).
    /// With no observers registered this does nothing.
    fn notify_observers(&self, event: E);

    /// Register each observer in the slice, in order.
    fn register_observers(&mut self, observers: &[Rc<dyn Observer<E>>]) {
        for observer in observers {
            self.register_observer(Rc::clone(observer));
        }
    }

    /// Remove each observer in the slice, in order.
    fn remove_observers(&mut self, observers: &[Rc<dyn Observer<E>>]) {
        for observer in observers {
            self.remove_observer(observer);
        }
    }
}
