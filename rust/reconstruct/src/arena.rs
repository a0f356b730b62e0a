// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Index-based storage for the classified lines of one reconstruction run.
//!
//! Lines are immutable once classified. Whether a line has been folded into a
//! wall is tracked in a parallel flag array owned by the arena, so the pairing
//! stage mutates only that array and never the line data itself.

use serde::{Deserialize, Serialize};

use crate::types::{ClassifiedLine, Orientation};

/// Stable index of a line inside a [`LineArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineId(pub usize);

/// Owner of all classified lines of a run plus their consumption state.
#[derive(Debug, Clone, Default)]
pub struct LineArena {
    lines: Vec<ClassifiedLine>,
    consumed: Vec<bool>,
}

impl LineArena {
    pub fn new(lines: Vec<ClassifiedLine>) -> Self {
        let consumed = vec![false; lines.len()];
        Self { lines, consumed }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, id: LineId) -> &ClassifiedLine {
        &self.lines[id.0]
    }

    pub fn lines(&self) -> &[ClassifiedLine] {
        &self.lines
    }

    pub fn is_consumed(&self, id: LineId) -> bool {
        self.consumed[id.0]
    }

    /// Mark a line as folded into a wall.
    ///
    /// Returns `false` if it was already consumed.
    pub fn consume(&mut self, id: LineId) -> bool {
        !std::mem::replace(&mut self.consumed[id.0], true)
    }

    pub fn consumed_count(&self) -> usize {
        self.consumed.iter().filter(|c| **c).count()
    }

    /// Ids of all lines with the given orientation, in insertion order
    pub fn ids_with_orientation(&self, orientation: Orientation) -> Vec<LineId> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.orientation == orientation)
            .map(|(i, _)| LineId(i))
            .collect()
    }
}
