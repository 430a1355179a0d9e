use loopline_core::{LoopError, Result};
use loopline_math::wrap;
use serde::{Deserialize, Serialize};

/// The active segment `(node, next_node)` used for editing and for bounding
/// closest-point searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCursor {
    pub node: usize,
    pub next_node: usize,
}

impl Default for SelectionCursor {
    fn default() -> Self {
        Self {
            node: 0,
            next_node: 1,
        }
    }
}

fn ensure_non_empty(len: usize) -> Result<()> {
    if len == 0 {
        return Err(LoopError::InsufficientPoints {
            required: 1,
            actual: 0,
        });
    }
    Ok(())
}

impl SelectionCursor {
    pub fn new(node: usize, next_node: usize) -> Self {
        Self { node, next_node }
    }

    /// Move both indices forward by one, wrapping modulo `len`.
    ///
    /// Returns `true` when `node` wrapped back to the first point.
    pub fn advance(&mut self, len: usize) -> Result<bool> {
        ensure_non_empty(len)?;
        self.node = wrap(self.node + 1, len);
        self.next_node = wrap(self.next_node + 1, len);
        Ok(self.node == 0)
    }

    /// Move both indices back by one, wrapping modulo `len`.
    pub fn retreat(&mut self, len: usize) -> Result<()> {
        ensure_non_empty(len)?;
        self.node = wrap(self.node + len - 1, len);
        self.next_node = wrap(self.next_node + len - 1, len);
        Ok(())
    }

    /// Re-wrap both indices after the path changed size. An empty path resets
    /// the cursor.
    pub fn normalize(&mut self, len: usize) {
        if len == 0 {
            *self = Self::default();
            return;
        }
        self.node = wrap(self.node, len);
        self.next_node = wrap(self.next_node, len);
    }
}
