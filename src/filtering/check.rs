//! Check trait.

/// Stateful check (closures may capture and update counters, caches...).
///
/// A gate calls [Check::check] at most once per item, and never again once it is open.
pub trait Check<T: ?Sized> {
    fn check(&mut self, item: &T) -> bool;
}

impl<T, F> Check<T> for F
where
    T: ?Sized,
    F: FnMut(&T) -> bool,
{
    fn check(&mut self, item: &T) -> bool {
        self(item)
    }
}

/// Boxed checks, so that a pipeline can pick one at runtime.
pub type BoxedCheck<T> = Box<dyn FnMut(&T) -> bool + Send>;
