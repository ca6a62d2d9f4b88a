/*! Conditional gate.

A [Gate] holds back items until its check succeeds on one of them.
At that point, every held item is released (in arrival order), followed by the item that opened the gate.
From then on, items are released as soon as they are submitted, without being checked.

Calling [Gate::finish] at the end of a stream drops items that are still held
and closes the gate again, so that a gate can be reused for another stream.

```
use some_gate::file::{File, FileItem, Stat};
use some_gate::gate::Gate;

let newer_than_100 = |f: &File| f.stat().map_or(false, |s| s.mtime() > Stat::with_mtime_secs(100).mtime());
let mut gate = Gate::new(newer_than_100);

let old = File::new("old.js", Some(Stat::with_mtime_secs(50)));
let new = File::new("new.js", Some(Stat::with_mtime_secs(150)));

assert!(gate.submit_item(old).unwrap().is_empty());
let released = gate.submit_item(new).unwrap().into_vec();
assert_eq!(released.len(), 2);
assert_eq!(released[0].path().to_str(), Some("old.js"));
```
!*/
use std::borrow::Cow;
use std::fmt;

use log::{debug, trace};

use crate::error::Error;
use crate::file::FileItem;
use crate::filtering::{Check, Options, DEFAULT_NAME};

/// Items released by a single [Gate::submit] call, in release order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Released<F>(Vec<F>);

impl<F> Released<F> {
    fn none() -> Self {
        Self(Vec::new())
    }

    fn one(item: F) -> Self {
        Self(vec![item])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<F> {
        self.0
    }
}

impl<F> IntoIterator for Released<F> {
    type Item = F;
    type IntoIter = std::vec::IntoIter<F>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, F> IntoIterator for &'a Released<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Passes items through once one of them satisfies the check.
///
/// See the [module level documentation](self).
pub struct Gate<F, C> {
    check: C,
    held: Vec<F>,
    open: bool,
    name: Cow<'static, str>,
}

impl<F, C> Gate<F, C>
where
    F: FileItem,
    C: Check<F>,
{
    /// Builds a gate from a bare check.
    pub fn new(check: C) -> Self {
        Self::with_name(check, Cow::Borrowed(DEFAULT_NAME))
    }

    /// Builds a gate from an options object.
    /// A bare check can be passed with `Options::from(check)`.
    ///
    /// Errors with [Error::InvalidConfiguration] if `options` is `None` or has no check.
    pub fn from_options(options: Option<Options<C>>) -> Result<Self, Error> {
        let (check, name) = Options::resolve(options)?;
        Ok(Self::with_name(check, name))
    }

    /// Submits an item to the gate, returning the items that are released by this call.
    ///
    /// Errors with [Error::InvalidItem] if the item is `None` or has no stats.
    /// In that case, the gate is left untouched.
    pub fn submit(&mut self, item: Option<F>) -> Result<Released<F>, Error> {
        let item = self.validate(item)?;
        let passed = self.open || self.check.check(&item);
        Ok(self.admit(item, passed))
    }

    /// Submits a present item. See [Gate::submit].
    pub fn submit_item(&mut self, item: F) -> Result<Released<F>, Error> {
        self.submit(Some(item))
    }
}

impl<F, C> Gate<F, C>
where
    F: FileItem,
{
    pub(crate) fn with_name(check: C, name: Cow<'static, str>) -> Self {
        Self {
            check,
            held: Vec::new(),
            open: false,
            name,
        }
    }

    /// Rejects missing and stat-less items.
    pub(crate) fn validate(&self, item: Option<F>) -> Result<F, Error> {
        match item {
            Some(item) if item.stat().is_some() => Ok(item),
            _ => Err(Error::invalid_item(
                &self.name,
                "expected a source file with stats",
            )),
        }
    }

    /// Applies the check outcome of a validated item.
    /// `passed` is ignored once the gate is open.
    pub(crate) fn admit(&mut self, item: F, passed: bool) -> Released<F> {
        if self.open {
            return Released::one(item);
        }

        if !passed {
            self.held.push(item);
            trace!("{}: holding item ({} held)", self.name, self.held.len());
            return Released::none();
        }

        debug!(
            "{}: check passed, releasing {} held item(s)",
            self.name,
            self.held.len()
        );
        self.open = true;
        let mut released = std::mem::take(&mut self.held);
        released.push(item);
        Released(released)
    }

    pub(crate) fn check_mut(&mut self) -> &mut C {
        &mut self.check
    }
}

impl<F, C> Gate<F, C> {
    /// Ends the current stream.
    ///
    /// Drops held items, closes the gate and returns the number of dropped items.
    pub fn finish(&mut self) -> usize {
        let dropped = self.held.len();
        self.held.clear();
        self.open = false;
        debug!("{}: stream finished, {} item(s) dropped", self.name, dropped);
        dropped
    }

    /// `true` if the check has passed in the current stream.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Items held back so far, in arrival order.
    pub fn held(&self) -> &[F] {
        &self.held
    }

    /// Get a reference to the gate's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<F, C> fmt::Debug for Gate<F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gate")
            .field("name", &self.name)
            .field("open", &self.open)
            .field("held", &self.held.len())
            .finish()
    }
}
