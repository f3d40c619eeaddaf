use std::collections::VecDeque;
use std::sync::Arc;

use crate::error::DoodleResult;
use crate::surface::Surface;

/// Default number of entries kept per stack.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// An immutable, PNG-encoded copy of the whole surface.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    png: Arc<[u8]>,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("bytes", &self.png.len())
            .finish()
    }
}

impl Snapshot {
    pub fn capture(surface: &Surface) -> DoodleResult<Self> {
        Ok(Self {
            png: surface.encode_png()?.into(),
        })
    }

    pub fn restore_into(&self, surface: &mut Surface) -> DoodleResult<()> {
        surface.restore_png(&self.png)
    }

    /// Size of the encoded image in bytes.
    pub fn encoded_len(&self) -> usize {
        self.png.len()
    }
}

/// Undo/redo stacks of whole-surface snapshots.
///
/// The granularity is one stroke: the widget takes a snapshot when a stroke
/// begins, so undo always returns to the bitmap from before a stroke.
#[derive(Debug, Clone)]
pub struct History {
    /// Pre-stroke bitmaps, most recent last
    undo_stack: VecDeque<Snapshot>,
    /// Bitmaps replaced by undo, most recent last
    redo_stack: VecDeque<Snapshot>,
    /// Maximum entries per stack, `None` for unbounded
    limit: Option<usize>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Some(DEFAULT_HISTORY_LIMIT))
    }
}

impl History {
    /// A limit of zero is raised to one so the last stroke can always be undone.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            limit: limit.map(|limit| limit.max(1)),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record the current bitmap as an undo point and drop the redo chain.
    pub fn snapshot(&mut self, surface: &Surface) -> DoodleResult<()> {
        let snapshot = Snapshot::capture(surface)?;
        push_bounded(&mut self.undo_stack, snapshot, self.limit);
        if !self.redo_stack.is_empty() {
            log::debug!("Discarding {} redo entries", self.redo_stack.len());
            self.redo_stack.clear();
        }
        Ok(())
    }

    /// Restore the most recent undo point.
    ///
    /// Returns `Ok(false)` without touching anything when there is nothing to undo.
    pub fn undo(&mut self, surface: &mut Surface) -> DoodleResult<bool> {
        let moved = step(&mut self.undo_stack, &mut self.redo_stack, self.limit, surface)?;
        if moved {
            log::debug!(
                "Undo: {} undo / {} redo entries left",
                self.undo_stack.len(),
                self.redo_stack.len()
            );
        }
        Ok(moved)
    }

    /// Reapply the most recently undone bitmap.
    ///
    /// Returns `Ok(false)` without touching anything when there is nothing to redo.
    pub fn redo(&mut self, surface: &mut Surface) -> DoodleResult<bool> {
        let moved = step(&mut self.redo_stack, &mut self.undo_stack, self.limit, surface)?;
        if moved {
            log::debug!(
                "Redo: {} undo / {} redo entries left",
                self.undo_stack.len(),
                self.redo_stack.len()
            );
        }
        Ok(moved)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Encoded bytes held by both stacks.
    pub fn encoded_bytes(&self) -> usize {
        self.undo_stack
            .iter()
            .chain(&self.redo_stack)
            .map(Snapshot::encoded_len)
            .sum()
    }
}

/// Move the top of `from` onto the surface, saving the current bitmap onto `to`.
///
/// The current bitmap is encoded and the popped entry decoded before either
/// stack changes, so a failure leaves the stacks and the surface as they were.
fn step(
    from: &mut VecDeque<Snapshot>,
    to: &mut VecDeque<Snapshot>,
    limit: Option<usize>,
    surface: &mut Surface,
) -> DoodleResult<bool> {
    let Some(target) = from.back() else {
        return Ok(false);
    };
    let current = Snapshot::capture(surface)?;
    target.restore_into(surface)?;

    from.pop_back();
    push_bounded(to, current, limit);
    Ok(true)
}

fn push_bounded(stack: &mut VecDeque<Snapshot>, snapshot: Snapshot, limit: Option<usize>) {
    stack.push_back(snapshot);
    if let Some(limit) = limit {
        while stack.len() > limit {
            stack.pop_front();
            log::debug!("History limit {} reached, evicted oldest entry", limit);
        }
    }
}
