//! Ordered box slots and the placeholder list that sizes them.

use crate::code_box::CodeBox;

/// Transient per-box state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStatus {
    /// Nothing pending.
    #[default]
    Ready,
    /// The last input into this box was rejected; the next ambiguous
    /// composition key on it is not treated as Backspace.
    ResetPending,
}

/// A mounted box and its status.
#[derive(Debug, Clone)]
pub struct BoxSlot<B> {
    pub handle: B,
    pub status: BoxStatus,
}

/// Positional marker telling the rendering layer to create one box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Inserted while growing.
    Filler,
    /// The marker kept at the end while growing.
    Trailing,
}

/// Shape change produced by [`BoxRegistry::reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reconciled {
    pub added: usize,
    pub removed: usize,
}

/// Tracks the mounted boxes in order.
///
/// [`reconcile`](BoxRegistry::reconcile) is the only operation that changes
/// how many slots there are; everything else edits slots in place.
#[derive(Debug, Clone)]
pub struct BoxRegistry<B> {
    slots: Vec<BoxSlot<B>>,
    placeholders: Vec<Placeholder>,
}

impl<B> Default for BoxRegistry<B> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            placeholders: Vec::new(),
        }
    }
}

impl<B: CodeBox> BoxRegistry<B> {
    /// An empty registry with `code_length` placeholders.
    pub fn with_length(code_length: usize) -> Self {
        let mut registry = Self::default();
        registry.resize_placeholders(code_length);
        registry
    }

    /// Grow or shrink the placeholder list to `code_length`.
    ///
    /// Growing inserts fillers in front of the last marker so a trailing
    /// marker stays last. Box content is untouched; the rendering layer
    /// reports the new boxes afterwards.
    pub fn resize_placeholders(&mut self, code_length: usize) {
        let current = self.placeholders.len();
        if code_length > current {
            if current == 0 {
                self.placeholders.push(Placeholder::Trailing);
            }
            let at = self.placeholders.len() - 1;
            let missing = code_length - self.placeholders.len();
            self.placeholders
                .splice(at..at, std::iter::repeat_n(Placeholder::Filler, missing));
        } else {
            self.placeholders.truncate(code_length);
        }
    }

    /// The current placeholder list.
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// Bring the tracked slots in line with the full list of boxes the
    /// rendering layer currently shows.
    ///
    /// Positions already tracked keep their existing slot (the incoming
    /// handle for that position is ignored); extra handles are appended with
    /// [`BoxStatus::Ready`]. A shorter list truncates.
    pub fn reconcile(&mut self, handles: impl IntoIterator<Item = B>) -> Reconciled {
        let before = self.slots.len();
        let mut seen = 0;
        for handle in handles {
            if seen >= before {
                self.slots.push(BoxSlot {
                    handle,
                    status: BoxStatus::Ready,
                });
            }
            seen += 1;
        }
        if seen < before {
            self.slots.truncate(seen);
            Reconciled {
                added: 0,
                removed: before - seen,
            }
        } else {
            Reconciled {
                added: seen - before,
                removed: 0,
            }
        }
    }

    /// Drop every slot.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Number of mounted boxes.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no box is mounted.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BoxSlot<B>> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut BoxSlot<B>> {
        self.slots.get_mut(index)
    }

    pub fn slots(&self) -> &[BoxSlot<B>] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [BoxSlot<B>] {
        &mut self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code_box::{CellBox, CodeBox};

    fn cells(n: usize) -> Vec<CellBox> {
        (0..n).map(|_| CellBox::new()).collect()
    }

    #[test]
    fn placeholders_track_code_length() {
        let mut registry = BoxRegistry::<CellBox>::with_length(4);
        assert_eq!(registry.placeholders().len(), 4);
        assert_eq!(registry.placeholders().last(), Some(&Placeholder::Trailing));

        registry.resize_placeholders(6);
        assert_eq!(registry.placeholders().len(), 6);
        assert_eq!(registry.placeholders().last(), Some(&Placeholder::Trailing));

        registry.resize_placeholders(2);
        assert_eq!(registry.placeholders().len(), 2);

        registry.resize_placeholders(0);
        assert!(registry.placeholders().is_empty());
    }

    #[test]
    fn reconcile_appends_new_boxes_as_ready() {
        let mut registry = BoxRegistry::<CellBox>::with_length(2);
        assert_eq!(
            registry.reconcile(cells(2)),
            Reconciled {
                added: 2,
                removed: 0
            }
        );
        registry.get_mut(0).unwrap().handle.set_value("1");
        registry.get_mut(1).unwrap().status = BoxStatus::ResetPending;

        let outcome = registry.reconcile(cells(4));
        assert_eq!(outcome.added, 2);
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.get(0).unwrap().handle.value(), "1");
        assert_eq!(registry.get(1).unwrap().status, BoxStatus::ResetPending);
        assert_eq!(registry.get(3).unwrap().status, BoxStatus::Ready);
    }

    #[test]
    fn reconcile_truncates_on_shrink() {
        let mut registry = BoxRegistry::<CellBox>::with_length(4);
        registry.reconcile(cells(4));
        let outcome = registry.reconcile(cells(1));
        assert_eq!(outcome.removed, 3);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn reconcile_same_length_is_a_no_op() {
        let mut registry = BoxRegistry::<CellBox>::with_length(3);
        registry.reconcile(cells(3));
        assert_eq!(registry.reconcile(cells(3)), Reconciled::default());
    }
}
