//! Continuous Supply Gate - single-slot cross-thread handoff.
//!
//! A producer (the interaction surface) stages one raw text submission at a
//! time; a consumer (the test execution engine) blocks on [`pull`] until a
//! submission is available or the session ends. Each consumed submission is
//! normalized, published, resolved, and aggregated into one sorted,
//! duplicate-free batch of features.
//!
//! The gate is a single slot, not a queue: a submission staged before the
//! previous one was consumed silently replaces it, so the consumer always
//! works on the latest text.
//!
//! [`pull`]: crate::ports::FeatureSupply::pull

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use crate::domain::{normalize, Feature, FeatureCollection, PullStamp};
use crate::ports::{FeatureResolver, FeatureSupply, ScratchStore, SupplyError};

use super::TransientFeaturePublisher;

/// Shared gate state: at most one staged submission, plus the stop flag.
#[derive(Debug, Default)]
struct GateState {
    staged: Option<String>,
    stopped: bool,
}

#[derive(Debug, Default)]
struct Gate {
    state: Mutex<GateState>,
    submitted: Condvar,
}

impl Gate {
    fn lock_state(&self) -> MutexGuard<'_, GateState> {
        // A poisoned lock only means a peer thread panicked mid-update of
        // two plain fields; the state itself stays coherent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Producer-side handle to the gate.
///
/// Cloneable so the interaction surface can wire it to any number of
/// controls; `submit` maps to the surface's submit event, `terminate` to
/// its close event.
#[derive(Clone)]
pub struct SubmissionHandle {
    gate: Arc<Gate>,
}

impl SubmissionHandle {
    /// Stages raw text for the next pull.
    ///
    /// Staging over a pending submission replaces it; the slot holds the
    /// latest text only. Submissions after [`terminate`] are ignored.
    ///
    /// [`terminate`]: SubmissionHandle::terminate
    pub fn submit(&self, text: impl Into<String>) {
        let mut state = self.gate.lock_state();
        if state.stopped {
            tracing::warn!("Ignoring submission after termination");
            return;
        }
        if state.staged.replace(text.into()).is_some() {
            tracing::debug!("Replaced pending submission with newer text");
        }
        drop(state);
        self.gate.submitted.notify_one();
    }

    /// Ends the supply session.
    ///
    /// Idempotent and callable from any thread. Any staged text is dropped
    /// and a blocked consumer wakes immediately; every pull from now on
    /// returns an empty batch.
    pub fn terminate(&self) {
        let mut state = self.gate.lock_state();
        state.stopped = true;
        state.staged = None;
        drop(state);
        self.gate.submitted.notify_all();
    }
}

/// Consumer-side supplier driving the per-pull pipeline.
pub struct InteractiveFeatureSupplier {
    gate: Arc<Gate>,
    publisher: TransientFeaturePublisher,
    resolver: Arc<dyn FeatureResolver>,
}

impl InteractiveFeatureSupplier {
    pub fn new(store: Arc<dyn ScratchStore>, resolver: Arc<dyn FeatureResolver>) -> Self {
        Self {
            gate: Arc::new(Gate::default()),
            publisher: TransientFeaturePublisher::new(store),
            resolver,
        }
    }

    /// Returns a producer handle for the interaction surface.
    pub fn submission_handle(&self) -> SubmissionHandle {
        SubmissionHandle {
            gate: Arc::clone(&self.gate),
        }
    }

    /// Blocks until a submission is staged or the session ends.
    ///
    /// Returns `None` once stopped; the stop flag wins over staged text, so
    /// pulls in flight during termination also come back empty.
    fn await_submission(&self) -> Option<String> {
        let mut state = self.gate.lock_state();
        loop {
            if state.stopped {
                return None;
            }
            if let Some(text) = state.staged.take() {
                return Some(text);
            }
            state = self
                .gate
                .submitted
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Normalize → publish → resolve → aggregate for one submission.
    fn run_pipeline(&self, text: &str) -> Result<Vec<Feature>, SupplyError> {
        let stamp = PullStamp::next();
        let document = normalize(text, &stamp);
        let address = self.publisher.publish(&stamp, &document)?;

        let mut collection = FeatureCollection::new();
        for feature in self.resolver.resolve(&address)? {
            collection.add_unique(feature);
        }
        let features = collection.build();
        tracing::debug!(pull = %stamp, count = features.len(), "Supplying resolved features");
        Ok(features)
    }
}

impl FeatureSupply for InteractiveFeatureSupplier {
    fn pull(&self) -> Result<Vec<Feature>, SupplyError> {
        match self.await_submission() {
            Some(text) => self.run_pipeline(&text),
            None => Ok(Vec::new()),
        }
    }

    fn is_continuous(&self) -> bool {
        true
    }

    fn should_stop(&self) -> bool {
        self.gate.lock_state().stopped
    }
}
