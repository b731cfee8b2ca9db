use crate::stroke::StrokeRef;

/// Linear undo/redo over committed strokes.
///
/// The committed list doubles as the undo stack: undo always takes its tail.
/// Strokes live in exactly one of the two stacks.
#[derive(Debug, Default, Clone)]
pub struct StrokeHistory {
    /// Strokes in paint order
    committed: Vec<StrokeRef>,
    /// Undone strokes, most recently undone last
    undone: Vec<StrokeRef>,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a freshly drawn stroke. New forward work invalidates redo.
    pub fn push(&mut self, stroke: StrokeRef) {
        self.committed.push(stroke);
        self.undone.clear();
    }

    /// Move the last committed stroke onto the redo stack.
    pub fn undo(&mut self) -> Option<StrokeRef> {
        let stroke = self.committed.pop()?;
        self.undone.push(stroke.clone());
        Some(stroke)
    }

    /// Restore the most recently undone stroke on top of the paint order.
    pub fn redo(&mut self) -> Option<StrokeRef> {
        let stroke = self.undone.pop()?;
        self.committed.push(stroke.clone());
        Some(stroke)
    }

    pub fn clear(&mut self) {
        self.committed.clear();
        self.undone.clear();
    }

    pub fn committed(&self) -> &[StrokeRef] {
        &self.committed
    }

    /// Undone strokes, front = most recently undone.
    pub fn undone(&self) -> impl DoubleEndedIterator<Item = &StrokeRef> + ExactSizeIterator {
        self.undone.iter().rev()
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.committed.len()
    }

    pub fn redo_len(&self) -> usize {
        self.undone.len()
    }
}
