//! Cooperative cancellation for the search loop.
//!
//! The decomposer polls a [`Cancellation`] between popped frontier items and
//! between trial widths; it never blocks on one.

use std::sync::atomic::{AtomicBool, Ordering};

/// Something the decomposer can ask "should I stop now?".
pub trait Cancellation {
    fn is_cancelled(&self) -> bool;
}

/// A [`Cancellation`] that never fires. Used when the embedder has no way
/// (or no need) to interrupt the search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl Cancellation for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl Cancellation for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<C: Cancellation + ?Sized> Cancellation for &C {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}
