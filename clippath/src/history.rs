//! Linear undo/redo over whole-contour snapshots.
//!
//! Each commit stores a full copy of the contour (at most 50 anchors).

use crate::model::Contour;

#[derive(Clone, Debug)]
pub struct HistoryLog {
    snapshots: Vec<Contour>,
    current: usize,
    limit: usize,
}

impl HistoryLog {
    pub fn new(initial: Contour, limit: usize) -> Self {
        HistoryLog { snapshots: vec![initial], current: 0, limit: limit.max(1) }
    }

    /// Drops the redo branch, appends `snapshot` and makes it current.
    pub fn commit(&mut self, snapshot: Contour) {
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(snapshot);
        if self.snapshots.len() > self.limit {
            let excess = self.snapshots.len() - self.limit;
            self.snapshots.drain(..excess);
        }
        self.current = self.snapshots.len() - 1;
    }

    pub fn undo(&mut self) -> Option<&Contour> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        self.snapshots.get(self.current)
    }

    pub fn redo(&mut self) -> Option<&Contour> {
        if self.current + 1 >= self.snapshots.len() {
            return None;
        }
        self.current += 1;
        self.snapshots.get(self.current)
    }

    pub fn can_undo(&self) -> bool {
        self.current > 0
    }
    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.snapshots.len()
    }
    pub fn current(&self) -> &Contour {
        &self.snapshots[self.current]
    }
    pub fn current_index(&self) -> usize {
        self.current
    }
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
