//! Caller-supplied stream filtering.
//!
//! A [`StreamFilter`] decides, stream by stream, whether an
//! [`AdaptiveStream`] may appear in the manifest. It owns an arbitrary piece of
//! user state that the predicate can read and a release routine that consumes
//! that state. The release routine runs exactly once: when the filter is
//! replaced or cleared on a [`ManifestGenerator`](crate::ManifestGenerator), or
//! when the filter itself is dropped.
//!
//! # Example
//!
//! ```
//! use mpdgen::{AdaptiveStream, StreamFilter};
//!
//! // Stateless: keep streams up to 1080p.
//! let by_height = StreamFilter::new(|stream: &AdaptiveStream| stream.height <= 1080);
//!
//! // Stateful: keep a fixed set of itags, and log when the set is released.
//! let by_itag = StreamFilter::with_state(
//!     vec![137_u32, 140],
//!     |stream, allowed| allowed.contains(&stream.itag),
//!     |allowed| println!("released {} itags", allowed.len()),
//! );
//! # drop((by_height, by_itag));
//! ```

use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::stream::AdaptiveStream;

/// Type-erased predicate, state and release routine.
trait FilterSlot: Send {
    fn accept(&self, stream: &AdaptiveStream) -> bool;
    fn release(self: Box<Self>);
}

struct Slot<T, P, R> {
    state: T,
    predicate: P,
    release: R,
}

impl<T, P, R> FilterSlot for Slot<T, P, R>
where
    T: Send,
    P: Fn(&AdaptiveStream, &T) -> bool + Send,
    R: FnOnce(T) + Send,
{
    fn accept(&self, stream: &AdaptiveStream) -> bool {
        (self.predicate)(stream, &self.state)
    }

    fn release(self: Box<Self>) {
        let Slot { state, release, .. } = *self;
        release(state);
    }
}

/// A stream predicate together with the state it owns.
///
/// Dropping the filter runs its release routine.
pub struct StreamFilter {
    slot: Option<Box<dyn FilterSlot>>,
}

impl StreamFilter {
    /// Create a filter from a stateless predicate.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Fn(&AdaptiveStream) -> bool + Send + 'static,
    {
        Self::with_state((), move |stream, _| predicate(stream), |_| {})
    }

    /// Create a filter owning `state`.
    ///
    /// `predicate` sees each candidate stream together with a reference to the
    /// state; `release` receives the state back when the filter is discarded.
    pub fn with_state<T, P, R>(state: T, predicate: P, release: R) -> Self
    where
        T: Send + 'static,
        P: Fn(&AdaptiveStream, &T) -> bool + Send + 'static,
        R: FnOnce(T) + Send + 'static,
    {
        Self {
            slot: Some(Box::new(Slot {
                state,
                predicate,
                release,
            })),
        }
    }

    /// Returns `true` if `stream` should be considered for the manifest.
    pub fn accept(&self, stream: &AdaptiveStream) -> bool {
        self.slot.as_ref().is_none_or(|slot| slot.accept(stream))
    }
}

impl Drop for StreamFilter {
    fn drop(&mut self) {
        if let Some(slot) = self.slot.take() {
            slot.release();
        }
    }
}

impl Debug for StreamFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StreamFilter")
            .field("active", &self.slot.is_some())
            .finish()
    }
}
