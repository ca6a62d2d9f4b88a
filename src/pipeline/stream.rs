//! Stream adapter.
use std::borrow::Cow;
use std::future::Future;

use futures::stream::{self, Stream, StreamExt};

use crate::error::Error;
use crate::file::FileItem;
use crate::filtering::{Options, DEFAULT_NAME};
use crate::gate::Gate;

struct State<S, C>
where
    S: Stream,
{
    upstream: S,
    gate: Gate<S::Item, C>,
    pending: std::vec::IntoIter<S::Item>,
}

/// Gates a stream with an asynchronous check.
///
/// Items are checked and released one at a time, in upstream order:
/// the next upstream item is only polled once the previous item's check has resolved
/// and everything it released has been yielded.
/// Invalid items are yielded as errors and do not end the stream.
///
/// The future returned by `check` can't borrow the item, copy what it needs beforehand.
pub fn gate_stream<S, C, Fut>(upstream: S, check: C) -> impl Stream<Item = Result<S::Item, Error>>
where
    S: Stream + Unpin,
    S::Item: FileItem,
    C: FnMut(&S::Item) -> Fut,
    Fut: Future<Output = bool>,
{
    gated(upstream, Gate::with_name(check, Cow::Borrowed(DEFAULT_NAME)))
}

/// Like [gate_stream], with the check and stage name taken from `options`.
///
/// Errors with [Error::InvalidConfiguration] if `options` is `None` or has no check.
pub fn gate_stream_with<S, C, Fut>(
    upstream: S,
    options: Option<Options<C>>,
) -> Result<impl Stream<Item = Result<S::Item, Error>>, Error>
where
    S: Stream + Unpin,
    S::Item: FileItem,
    C: FnMut(&S::Item) -> Fut,
    Fut: Future<Output = bool>,
{
    let (check, name) = Options::resolve(options)?;
    Ok(gated(upstream, Gate::with_name(check, name)))
}

fn gated<S, C, Fut>(upstream: S, gate: Gate<S::Item, C>) -> impl Stream<Item = Result<S::Item, Error>>
where
    S: Stream + Unpin,
    S::Item: FileItem,
    C: FnMut(&S::Item) -> Fut,
    Fut: Future<Output = bool>,
{
    let state = State {
        upstream,
        gate,
        pending: Vec::new().into_iter(),
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if let Some(item) = state.pending.next() {
                return Some((Ok(item), state));
            }

            let item = match state.upstream.next().await {
                Some(item) => item,
                None => {
                    state.gate.finish();
                    return None;
                }
            };

            let item = match state.gate.validate(Some(item)) {
                Ok(item) => item,
                Err(e) => return Some((Err(e), state)),
            };

            let passed = state.gate.is_open() || (state.gate.check_mut())(&item).await;
            state.pending = state.gate.admit(item, passed).into_iter();
        }
    })
}
