//! Splice-on-failure stream adapter
//!
//! Provides [`FallbackStream`], the streaming entry point's transform stage.
//! It passes the primary stream's items through until the primary yields an
//! error item; an eligible error switches the stage to a lazily-constructed
//! fallback stream, an ineligible error is yielded unchanged and ends the
//! stream.

use crate::decision::{decide, Decision};
use futures::Stream;
use recourse_policy::FallbackPolicy;
use std::error::Error;
use std::fmt;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{ready, Context, Poll};

/// Pull-based stream that splices a fallback sequence in on eligible failure
///
/// The consumer observes the primary's emitted prefix followed by the
/// fallback's full sequence, with no error item at the splice point. Only
/// the currently-active producer is polled, so backpressure and cancellation
/// propagate to it naturally. The stream is fused: after completion it keeps
/// returning `None`.
#[must_use = "streams do nothing unless polled"]
pub struct FallbackStream<P, F, B> {
    policy: Arc<FallbackPolicy>,
    state: State<P, F, B>,
}

enum State<P, F, B> {
    /// Primary producing; fallback factory held until a failure is observed
    Primary {
        primary: Pin<Box<P>>,
        fallback: Option<Box<F>>,
    },
    /// Spliced over to the fallback sequence
    Fallback { fallback: Pin<Box<B>> },
    /// Completed (normally, or by propagating an ineligible error)
    Done,
}

impl<P, F, B> FallbackStream<P, F, B> {
    pub(crate) fn new(policy: Arc<FallbackPolicy>, primary: P, fallback: F) -> Self {
        Self {
            policy,
            state: State::Primary {
                primary: Box::pin(primary),
                fallback: Some(Box::new(fallback)),
            },
        }
    }

    /// Whether the stream has spliced over to the fallback sequence
    #[must_use]
    pub fn is_fallback_active(&self) -> bool {
        matches!(self.state, State::Fallback { .. })
    }
}

impl<T, E, P, F, B> Stream for FallbackStream<P, F, B>
where
    P: Stream<Item = Result<T, E>>,
    F: FnOnce() -> B,
    B: Stream<Item = Result<T, E>>,
    E: Error + 'static,
{
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            match &mut this.state {
                State::Primary { primary, fallback } => {
                    match ready!(primary.as_mut().poll_next(cx)) {
                        Some(Ok(item)) => return Poll::Ready(Some(Ok(item))),
                        Some(Err(error)) => match decide(&this.policy, &error) {
                            Decision::Fallback => {
                                let Some(factory) = fallback.take() else {
                                    this.state = State::Done;
                                    return Poll::Ready(None);
                                };
                                this.state = State::Fallback {
                                    fallback: Box::pin(factory()),
                                };
                                // Loop to poll the fallback for the next item.
                            }
                            Decision::Propagate => {
                                this.state = State::Done;
                                return Poll::Ready(Some(Err(error)));
                            }
                        },
                        None => {
                            this.state = State::Done;
                            return Poll::Ready(None);
                        }
                    }
                }
                State::Fallback { fallback } => {
                    let poll = fallback.as_mut().poll_next(cx);
                    if matches!(poll, Poll::Ready(None)) {
                        this.state = State::Done;
                    }
                    return poll;
                }
                State::Done => return Poll::Ready(None),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            // Fallback length is unknown until the splice decision is made.
            State::Primary { primary, .. } => (primary.size_hint().0, None),
            State::Fallback { fallback } => fallback.size_hint(),
            State::Done => (0, Some(0)),
        }
    }
}

impl<P, F, B> fmt::Debug for FallbackStream<P, F, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Primary { .. } => "primary",
            State::Fallback { .. } => "fallback",
            State::Done => "done",
        };
        f.debug_struct("FallbackStream")
            .field("policy", &self.policy.name())
            .field("state", &state)
            .finish()
    }
}
