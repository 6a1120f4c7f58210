//! Linear undo/redo history.
//!
//! Two independent LIFO stacks: `past` holds previously-visited states
//! for undo, `future` holds undone states for redo. Any forward movement
//! clears `future`, which is the classic invariant that redo is only
//! meaningful until a new action happens.

use serde::{Deserialize, Serialize};

/// Undo/redo stacks over visited state names.
///
/// The history never stores the *current* state; it holds what the
/// machine would return to (`past`) and what it would re-advance to
/// (`future`). [`undo`](History::undo) and [`redo`](History::redo)
/// exchange the caller's current state for the top of the opposing
/// stack, so round-tripping `undo` then `redo` restores the original.
///
/// # Example
///
/// ```rust
/// use turnstile::core::History;
///
/// let mut history = History::new();
/// history.record("normal".to_string());
///
/// let previous = history.undo("busy".to_string()).unwrap();
/// assert_eq!(previous, "normal");
///
/// let next = history.redo("normal".to_string()).unwrap();
/// assert_eq!(next, "busy");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    past: Vec<String>,
    future: Vec<String>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a forward state change: push the state being left onto the
    /// past stack and invalidate any redo entries.
    pub fn record(&mut self, leaving: String) {
        self.past.push(leaving);
        self.future.clear();
    }

    /// Step back: exchange `current` for the most recent past state.
    ///
    /// Returns `None` when there is nothing to undo, leaving both stacks
    /// untouched.
    pub fn undo(&mut self, current: String) -> Option<String> {
        let previous = self.past.pop()?;
        self.future.push(current);
        Some(previous)
    }

    /// Step forward again: exchange `current` for the most recent undone
    /// state.
    ///
    /// Returns `None` when there is nothing to redo, leaving both stacks
    /// untouched.
    pub fn redo(&mut self, current: String) -> Option<String> {
        let next = self.future.pop()?;
        self.past.push(current);
        Some(next)
    }

    /// True when at least one undo step is available.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// True when at least one redo step is available.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of recorded undo steps.
    pub fn len(&self) -> usize {
        self.past.len()
    }

    /// True when no undo steps are recorded.
    pub fn is_empty(&self) -> bool {
        self.past.is_empty()
    }

    /// The undo stack, oldest first.
    pub fn past(&self) -> &[String] {
        &self.past
    }

    /// The redo stack, oldest first.
    pub fn future(&self) -> &[String] {
        &self.future
    }

    /// Drop everything from both stacks.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
