//! Incremental bidirectional partitioning cursor.
//!
//! [`ListWalker`] divides an ordered sequence into a promoted region
//! `[0, divider)` and a pending region `[divider, len)`, and advances the
//! divider one element at a time in either direction. It is the primitive
//! that lets an [`ActiveCell`](crate::ActiveCell) spread aggregation work
//! across many ticks while the underlying list is concurrently mutated by
//! unit movement, as long as every mutation goes through
//! [`check_back`](ListWalker::check_back) /
//! [`check_remove`](ListWalker::check_remove).
//!
//! The walker stores no reference to the sequence; the owner passes the
//! current list into each call. The divider is a plain index, so several
//! independent walkers can partition one physical list.

/// Incremental cursor partitioning a sequence into promoted and pending
/// regions.
///
/// Direction selects which way the divider moves: forward (`promote`)
/// consumes the pending region from the front, backward (`demote`) unwinds
/// the promoted region from the back. For both directions the invariant is
/// the same: indices `[0, divider)` have been promoted, `[divider, len)`
/// are pending.
///
/// Violating the mutation discipline (removing an element without
/// [`check_remove`](Self::check_remove), or letting the divider escape the
/// list bounds) is a programming error, not a runtime condition: it is
/// caught by `debug_assert!`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListWalker {
    divider: usize,
    forward: bool,
}

impl ListWalker {
    /// Create a walker bound to the start of its sequence, in the demote
    /// direction (nothing promoted, nothing to undo).
    pub fn new() -> Self {
        Self {
            divider: 0,
            forward: false,
        }
    }

    /// Set the walk direction: `true` promotes pending elements, `false`
    /// demotes promoted ones. Reversing mid-walk is the cancellation
    /// mechanism — progress is never discarded, only unwound.
    pub fn set_direction(&mut self, forward: bool) {
        self.forward = forward;
    }

    /// Current walk direction.
    pub fn is_forward(&self) -> bool {
        self.forward
    }

    /// Current divider position: the number of promoted elements.
    pub fn divider(&self) -> usize {
        self.divider
    }

    /// Whether elements remain to be visited in the current direction.
    pub fn more(&self, len: usize) -> bool {
        debug_assert!(self.divider <= len, "divider escaped list bounds");
        if self.forward {
            self.divider < len
        } else {
            self.divider > 0
        }
    }

    /// Visit the next element adjacent to the divider and step over it.
    ///
    /// Forward: returns the first pending element and marks it promoted.
    /// Backward: returns the last promoted element and marks it pending.
    /// Returns `None` when the active side is exhausted (the boundary
    /// sentinel); callers check [`more`](Self::more) or match on the option.
    pub fn next<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        debug_assert!(self.divider <= items.len(), "divider escaped list bounds");
        if self.forward {
            let item = items.get(self.divider)?;
            self.divider += 1;
            Some(item)
        } else {
            if self.divider == 0 {
                return None;
            }
            self.divider -= 1;
            items.get(self.divider)
        }
    }

    /// Mutation hook: call after an element has been appended to the back
    /// of the sequence.
    ///
    /// With an index divider the appended element (at `len - 1`) lands on
    /// the pending side automatically — the divider counts promoted
    /// elements and none were added. The hook remains the mandatory
    /// call-discipline point and verifies the bound.
    pub fn check_back(&self, len: usize) {
        debug_assert!(len > 0, "check_back on empty list");
        debug_assert!(self.divider < len, "appended element landed on the promoted side");
    }

    /// Mutation hook: call **before** removing the element at `index`.
    ///
    /// Removing left of the divider shrinks the promoted region; removing
    /// at or right of it shrinks the pending region. Either way the divider
    /// keeps partitioning the surviving elements exactly.
    pub fn check_remove(&mut self, index: usize, len: usize) {
        debug_assert!(index < len, "check_remove index {index} out of bounds {len}");
        debug_assert!(self.divider <= len, "divider escaped list bounds");
        if index < self.divider {
            self.divider -= 1;
        }
    }
}

impl Default for ListWalker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Basic walk ──────────────────────────────────────────────

    #[test]
    fn forward_walk_visits_in_order() {
        let items = ['A', 'B', 'C'];
        let mut w = ListWalker::new();
        w.set_direction(true);
        assert_eq!(w.next(&items), Some(&'A'));
        assert_eq!(w.next(&items), Some(&'B'));
        assert_eq!(w.next(&items), Some(&'C'));
        assert_eq!(w.next(&items), None);
        assert!(!w.more(items.len()));
    }

    #[test]
    fn backward_walk_unwinds_in_reverse() {
        let items = ['A', 'B', 'C'];
        let mut w = ListWalker::new();
        w.set_direction(true);
        while w.more(items.len()) {
            w.next(&items);
        }
        w.set_direction(false);
        assert_eq!(w.next(&items), Some(&'C'));
        assert_eq!(w.next(&items), Some(&'B'));
        assert_eq!(w.next(&items), Some(&'A'));
        assert_eq!(w.next(&items), None);
    }

    #[test]
    fn new_walker_has_nothing_to_demote() {
        let items = [1, 2, 3];
        let mut w = ListWalker::new();
        assert!(!w.more(items.len()));
        assert_eq!(w.next(&items), None);
    }

    // ── Append while exhausted ──────────────────────────────────

    #[test]
    fn append_after_exhaustion_lands_pending() {
        let mut items = vec!['A', 'B', 'C'];
        let mut w = ListWalker::new();
        w.set_direction(true);
        while w.more(items.len()) {
            w.next(&items);
        }
        assert!(!w.more(items.len()));

        items.push('D');
        w.check_back(items.len());
        // The appended element is on the pending side: the walk resumes.
        assert!(w.more(items.len()));
        assert_eq!(w.next(&items), Some(&'D'));

        // A full unwind now covers all four elements.
        w.set_direction(false);
        let mut demoted = Vec::new();
        while let Some(&c) = w.next(&items) {
            demoted.push(c);
        }
        assert_eq!(demoted, vec!['D', 'C', 'B', 'A']);
    }

    #[test]
    fn append_mid_walk_stays_pending() {
        let mut items = vec![10, 20];
        let mut w = ListWalker::new();
        w.set_direction(true);
        w.next(&items); // promoted: [10]
        items.push(30);
        w.check_back(items.len());
        assert_eq!(w.divider(), 1);
        assert_eq!(w.next(&items), Some(&20));
        assert_eq!(w.next(&items), Some(&30));
    }

    // ── Removal ─────────────────────────────────────────────────

    #[test]
    fn remove_at_divider_does_not_corrupt_walk() {
        let mut items = vec![1, 2, 3, 4, 5];
        let mut w = ListWalker::new();
        w.set_direction(true);
        w.next(&items);
        w.next(&items); // promoted: [1, 2]; divider sits on element 3

        w.check_remove(2, items.len());
        items.remove(2);

        let mut rest = Vec::new();
        while let Some(&v) = w.next(&items) {
            rest.push(v);
        }
        // Every surviving pending element visited exactly once, 3 never.
        assert_eq!(rest, vec![4, 5]);
        assert_eq!(w.divider(), items.len());
    }

    #[test]
    fn remove_left_of_divider_shrinks_promoted_region() {
        let mut items = vec![1, 2, 3, 4];
        let mut w = ListWalker::new();
        w.set_direction(true);
        w.next(&items);
        w.next(&items);
        w.next(&items); // promoted: [1, 2, 3]

        w.check_remove(0, items.len());
        items.remove(0);
        assert_eq!(w.divider(), 2); // promoted: [2, 3]

        w.set_direction(false);
        assert_eq!(w.next(&items), Some(&3));
        assert_eq!(w.next(&items), Some(&2));
        assert_eq!(w.next(&items), None);
    }

    #[test]
    fn remove_last_pending_exhausts_walk() {
        let mut items = vec![7];
        let mut w = ListWalker::new();
        w.set_direction(true);
        w.check_remove(0, items.len());
        items.remove(0);
        assert!(!w.more(items.len()));
    }

    // ── Property: partition invariant ───────────────────────────

    #[derive(Clone, Debug)]
    enum Op {
        Step,
        SetDirection(bool),
        Append(u32),
        Remove(usize),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => Just(Op::Step),
            1 => any::<bool>().prop_map(Op::SetDirection),
            2 => any::<u32>().prop_map(Op::Append),
            2 => any::<usize>().prop_map(Op::Remove),
        ]
    }

    proptest! {
        /// For any interleaving of steps, direction flips, appends, and
        /// removals respecting the call discipline, the divider always
        /// splits the list into the promoted set implied by the history.
        #[test]
        fn partition_invariant_holds(ops in prop::collection::vec(arb_op(), 0..200)) {
            let mut items: Vec<u32> = Vec::new();
            let mut promoted: Vec<u32> = Vec::new(); // model: promoted prefix
            let mut w = ListWalker::new();

            for op in ops {
                match op {
                    Op::Step => {
                        if w.is_forward() {
                            if w.more(items.len()) {
                                let expected = items[w.divider()];
                                let got = *w.next(&items).unwrap();
                                prop_assert_eq!(got, expected);
                                promoted.push(got);
                            } else {
                                prop_assert!(w.next(&items).is_none());
                            }
                        } else if w.more(items.len()) {
                            let got = *w.next(&items).unwrap();
                            let expected = promoted.pop().unwrap();
                            prop_assert_eq!(got, expected);
                        } else {
                            prop_assert!(w.next(&items).is_none());
                        }
                    }
                    Op::SetDirection(fwd) => w.set_direction(fwd),
                    Op::Append(v) => {
                        items.push(v);
                        w.check_back(items.len());
                    }
                    Op::Remove(raw) => {
                        if !items.is_empty() {
                            let index = raw % items.len();
                            w.check_remove(index, items.len());
                            if index < promoted.len() {
                                promoted.remove(index);
                            }
                            items.remove(index);
                        }
                    }
                }
                prop_assert!(w.divider() <= items.len());
                prop_assert_eq!(w.divider(), promoted.len());
                prop_assert_eq!(&items[..w.divider()], &promoted[..]);
            }
        }
    }
}
