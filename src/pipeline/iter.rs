//! Iterator adapters.
use std::iter::FusedIterator;

use log::warn;

use crate::error::Error;
use crate::file::FileItem;
use crate::filtering::Check;
use crate::gate::Gate;

/// Gated iterator that surfaces invalid items as errors.
///
/// An invalid item does not stop iteration, the next call goes on with the following item.
pub struct TryGateIter<I, C>
where
    I: Iterator,
{
    upstream: I,
    gate: Gate<I::Item, C>,
    pending: std::vec::IntoIter<I::Item>,
    done: bool,
}

impl<I, C> TryGateIter<I, C>
where
    I: Iterator,
    I::Item: FileItem,
    C: Check<I::Item>,
{
    /// Uses a pre-built gate, e.g. one built by [Gate::from_options].
    pub fn new(upstream: I, gate: Gate<I::Item, C>) -> Self {
        Self {
            upstream,
            gate,
            pending: Vec::new().into_iter(),
            done: false,
        }
    }

    /// Get a reference to the underlying gate.
    pub fn inner_gate(&self) -> &Gate<I::Item, C> {
        &self.gate
    }
}

impl<I, C> Iterator for TryGateIter<I, C>
where
    I: Iterator,
    I::Item: FileItem,
    C: Check<I::Item>,
{
    type Item = Result<I::Item, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.pending.next() {
                return Some(Ok(item));
            }
            if self.done {
                return None;
            }

            match self.upstream.next() {
                Some(item) => match self.gate.submit_item(item) {
                    Ok(released) => self.pending = released.into_iter(),
                    Err(e) => return Some(Err(e)),
                },
                None => {
                    self.gate.finish();
                    self.done = true;
                }
            }
        }
    }
}

impl<I, C> FusedIterator for TryGateIter<I, C>
where
    I: Iterator,
    I::Item: FileItem,
    C: Check<I::Item>,
{
}

/// Gated iterator that logs and skips invalid items.
pub struct GateIter<I, C>(TryGateIter<I, C>)
where
    I: Iterator;

impl<I, C> GateIter<I, C>
where
    I: Iterator,
    I::Item: FileItem,
    C: Check<I::Item>,
{
    pub fn new(upstream: I, gate: Gate<I::Item, C>) -> Self {
        Self(TryGateIter::new(upstream, gate))
    }

    /// Get a reference to the underlying gate.
    pub fn inner_gate(&self) -> &Gate<I::Item, C> {
        self.0.inner_gate()
    }
}

impl<I, C> Iterator for GateIter<I, C>
where
    I: Iterator,
    I::Item: FileItem,
    C: Check<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for res in self.0.by_ref() {
            match res {
                Ok(item) => return Some(item),
                Err(e) => warn!("{e}, skipping"),
            }
        }
        None
    }
}

impl<I, C> FusedIterator for GateIter<I, C>
where
    I: Iterator,
    I::Item: FileItem,
    C: Check<I::Item>,
{
}

/// Gating methods for iterators of file items.
pub trait GateExt: Iterator + Sized {
    /// Holds items back until `check` passes on one of them, see [crate::gate].
    /// Invalid items are skipped.
    fn gate<C>(self, check: C) -> GateIter<Self, C>
    where
        Self::Item: FileItem,
        C: Check<Self::Item>,
    {
        GateIter::new(self, Gate::new(check))
    }

    /// Like [GateExt::gate] but yields an error for each invalid item.
    fn try_gate<C>(self, check: C) -> TryGateIter<Self, C>
    where
        Self::Item: FileItem,
        C: Check<Self::Item>,
    {
        TryGateIter::new(self, Gate::new(check))
    }
}

impl<I: Iterator> GateExt for I {}

#[cfg(test)]
mod tests {
    use super::{GateExt, GateIter};
    use crate::error::Error;
    use crate::file::{File, FileItem, Stat};
    use crate::filtering::Options;
    use crate::gate::Gate;

    fn file(ts: u64) -> File {
        File::new(format!("{ts}.js"), Some(Stat::with_mtime_secs(ts)))
    }

    fn newer_than_100(f: &File) -> bool {
        f.stat()
            .map_or(false, |s| s.mtime() > Stat::with_mtime_secs(100).mtime())
    }

    fn names(files: Vec<File>) -> Vec<String> {
        files
            .iter()
            .map(|f| f.path().to_string_lossy().into_owned())
            .collect()
    }

    #[test_log::test]
    fn gate_opens() {
        let out: Vec<File> = [50, 80, 150, 30]
            .into_iter()
            .map(file)
            .gate(newer_than_100)
            .collect();
        assert_eq!(names(out), vec!["50.js", "80.js", "150.js", "30.js"]);
    }

    #[test_log::test]
    fn gate_never_opens() {
        let out: Vec<File> = [10, 20, 30].into_iter().map(file).gate(newer_than_100).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn trailing_items_after_open() {
        let out: Vec<File> = [10, 200, 20, 30]
            .into_iter()
            .map(file)
            .gate(newer_than_100)
            .collect();
        assert_eq!(out.len(), 4);
    }

    #[test_log::test]
    fn gate_skips_invalid() {
        let files = vec![file(10), File::new("<stdin>", None), file(150)];
        let out: Vec<File> = files.into_iter().gate(newer_than_100).collect();
        assert_eq!(names(out), vec!["10.js", "150.js"]);
    }

    #[test]
    fn try_gate_reports_invalid() {
        let files = vec![file(10), File::new("<stdin>", None), file(150)];
        let out: Vec<Result<File, Error>> = files.into_iter().try_gate(newer_than_100).collect();

        assert_eq!(out.len(), 3);
        assert!(matches!(out[0], Err(Error::InvalidItem(_))));
        assert_eq!(out[1].as_ref().unwrap().path().to_str(), Some("10.js"));
        assert_eq!(out[2].as_ref().unwrap().path().to_str(), Some("150.js"));
    }

    #[test]
    fn borrowed_items() {
        let files = vec![file(10), file(150)];
        let out: Vec<&File> = files.iter().gate(|f: &&File| newer_than_100(f)).collect();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn prebuilt_gate() {
        let gate = Gate::from_options(Some(
            Options::new()
                .with_check(newer_than_100 as fn(&File) -> bool)
                .with_name("newer"),
        ))
        .unwrap();
        let mut it = GateIter::new([10, 120].into_iter().map(file), gate);
        assert_eq!(it.inner_gate().name(), "newer");
        assert_eq!(it.by_ref().count(), 2);
        assert!(it.inner_gate().held().is_empty());
    }

    #[test]
    fn gate_is_finished_at_end() {
        let mut it = [10, 20].into_iter().map(file).try_gate(newer_than_100);
        assert!(it.next().is_none());
        assert!(it.inner_gate().held().is_empty());
        assert!(!it.inner_gate().is_open());
    }

    #[test]
    fn stays_exhausted() {
        // upstream that would resume after returning `None`
        let mut calls = 0;
        let upstream = std::iter::from_fn(move || {
            calls += 1;
            match calls {
                1 => Some(file(10)),
                2 => None,
                _ => Some(file(500)),
            }
        });

        let mut it = upstream.gate(newer_than_100);
        assert!(it.next().is_none());
        assert!(it.next().is_none());
        assert!(it.inner_gate().held().is_empty());

        let mut it = [file(150)].into_iter().try_gate(newer_than_100).fuse();
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }
}
