//! Index-based linked lists for the exercises that need cycles, shared
//! tails or random pointers.
//!
//! Nodes live in a [`NodeArena`] and refer to each other by [`NodeId`], so a
//! list can loop back on itself without reference counting.

use crate::error::{DrillError, Result};
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaNode {
    pub val: i32,
    pub next: Option<NodeId>,
    pub random: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<ArenaNode>,
}

// =============================================================================
// Milestone 1: Arena construction
// =============================================================================

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push(&mut self, val: i32) -> NodeId {
        self.nodes.push(ArenaNode {
            val,
            next: None,
            random: None,
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Allocates one node per value, linked in order. Returns the head.
    pub fn chain(&mut self, values: &[i32]) -> Option<NodeId> {
        self.chain_onto(values, None)
    }

    /// Like [`chain`](Self::chain) but the last new node points at `then`,
    /// which lets two lists share a tail.
    pub fn chain_onto(&mut self, values: &[i32], then: Option<NodeId>) -> Option<NodeId> {
        let mut head = then;
        for &val in values.iter().rev() {
            let id = self.push(val);
            self.nodes[id.0].next = head;
            head = Some(id);
        }
        head
    }

    pub fn get(&self, id: NodeId) -> Option<&ArenaNode> {
        self.nodes.get(id.0)
    }

    pub fn val(&self, id: NodeId) -> Option<i32> {
        self.get(id).map(|n| n.val)
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next)
    }

    pub fn random(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.random)
    }

    fn check(&self, id: NodeId) -> Result<()> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(DrillError::out_of_range(id.0, self.nodes.len()))
        }
    }

    pub fn set_next(&mut self, id: NodeId, next: Option<NodeId>) -> Result<()> {
        self.check(id)?;
        if let Some(target) = next {
            self.check(target)?;
        }
        self.nodes[id.0].next = next;
        Ok(())
    }

    pub fn set_random(&mut self, id: NodeId, random: Option<NodeId>) -> Result<()> {
        self.check(id)?;
        if let Some(target) = random {
            self.check(target)?;
        }
        self.nodes[id.0].random = random;
        Ok(())
    }

    /// `n`-th node after `head` (0 is `head` itself).
    pub fn nth(&self, head: Option<NodeId>, n: usize) -> Option<NodeId> {
        let mut current = head?;
        for _ in 0..n {
            current = self.next(current)?;
        }
        Some(current)
    }

    /// Last node of an acyclic chain; `None` when the chain loops.
    pub fn tail_of(&self, head: Option<NodeId>) -> Option<NodeId> {
        let mut current = head?;
        for _ in 0..self.nodes.len() {
            match self.next(current) {
                Some(next) => current = next,
                None => return Some(current),
            }
        }
        None
    }

    /// Values along the chain, stopping after `limit` nodes so cyclic lists terminate.
    pub fn values_from(&self, head: Option<NodeId>, limit: usize) -> Vec<i32> {
        let mut values = Vec::new();
        let mut current = head;
        while let Some(id) = current {
            if values.len() == limit {
                break;
            }
            let Some(node) = self.get(id) else { break };
            values.push(node.val);
            current = node.next;
        }
        values
    }

    // =========================================================================
    // Milestone 2: Floyd's tortoise and hare
    // =========================================================================

    fn meeting_point(&self, head: Option<NodeId>) -> Option<NodeId> {
        let mut slow = head?;
        let mut fast = head?;
        loop {
            let step = self.next(fast)?;
            fast = self.next(step)?;
            slow = self.next(slow)?;
            if slow == fast {
                return Some(slow);
            }
        }
    }

    pub fn has_cycle(&self, head: Option<NodeId>) -> bool {
        self.meeting_point(head).is_some()
    }

    /// After the pointers meet, one restarts from the head; moving both one
    /// step at a time they next meet at the first node of the cycle.
    pub fn cycle_start(&self, head: Option<NodeId>) -> Option<NodeId> {
        let mut from_meeting = self.meeting_point(head)?;
        let mut from_head = head?;
        while from_head != from_meeting {
            from_head = self.next(from_head)?;
            from_meeting = self.next(from_meeting)?;
        }
        Some(from_head)
    }

    pub fn cycle_length(&self, head: Option<NodeId>) -> usize {
        let Some(meeting) = self.meeting_point(head) else {
            return 0;
        };
        let mut length = 1;
        let mut current = self.next(meeting);
        while let Some(id) = current {
            if id == meeting {
                break;
            }
            length += 1;
            current = self.next(id);
        }
        length
    }

    /// Breaks the cycle at its last node. Returns whether one was removed.
    pub fn remove_cycle(&mut self, head: Option<NodeId>) -> bool {
        let Some(start) = self.cycle_start(head) else {
            return false;
        };
        let mut last = start;
        while let Some(next) = self.next(last) {
            if next == start {
                break;
            }
            last = next;
        }
        self.nodes[last.0].next = None;
        true
    }

    /// Reference answer using a visited set, O(n) space.
    pub fn cycle_start_by_visiting(&self, head: Option<NodeId>) -> Option<NodeId> {
        let mut seen = FxHashSet::default();
        let mut current = head;
        while let Some(id) = current {
            if !seen.insert(id) {
                return Some(id);
            }
            current = self.next(id);
        }
        None
    }

    // =========================================================================
    // Milestone 3: Intersection of two lists
    // =========================================================================

    /// Both pointers walk `a + b` nodes in total, so they line up at the
    /// shared node (or both reach the end together). Cyclic inputs yield `None`.
    pub fn intersection(&self, head_a: Option<NodeId>, head_b: Option<NodeId>) -> Option<NodeId> {
        if head_a.is_none() || head_b.is_none() || self.has_cycle(head_a) || self.has_cycle(head_b) {
            return None;
        }

        let mut a = head_a;
        let mut b = head_b;
        while a != b {
            a = match a {
                Some(id) => self.next(id),
                None => head_b,
            };
            b = match b {
                Some(id) => self.next(id),
                None => head_a,
            };
        }
        a
    }

    // =========================================================================
    // Milestone 4: Copy a list with random pointers
    // =========================================================================

    /// Deep-copies the chain at `head` including its random links, in three
    /// passes and without a lookup table: interleave copies after each
    /// original, wire the copies' randoms, then split the two chains apart.
    pub fn clone_with_random(&mut self, head: Option<NodeId>) -> Result<Option<NodeId>> {
        if self.has_cycle(head) {
            return Err(DrillError::invalid_argument("head", "list contains a cycle"));
        }

        let mut members = FxHashSet::default();
        let mut current = head;
        while let Some(id) = current {
            self.check(id)?;
            members.insert(id);
            current = self.next(id);
        }
        for &id in &members {
            if let Some(random) = self.random(id) {
                if !members.contains(&random) {
                    return Err(DrillError::invalid_argument(
                        "random",
                        format!("node {} points outside the list", id.0),
                    ));
                }
            }
        }

        // Pass 1: A -> A' -> B -> B' -> ...
        let mut current = head;
        while let Some(original) = current {
            let next = self.nodes[original.0].next;
            let copy = self.push(self.nodes[original.0].val);
            self.nodes[copy.0].next = next;
            self.nodes[original.0].next = Some(copy);
            current = next;
        }

        // Pass 2: copy.random = original.random.next
        let mut current = head;
        while let Some(original) = current {
            let copy = self.nodes[original.0].next;
            if let Some(copy) = copy {
                let random_copy = self.nodes[original.0].random.and_then(|r| self.nodes[r.0].next);
                self.nodes[copy.0].random = random_copy;
                current = self.nodes[copy.0].next;
            } else {
                current = None;
            }
        }

        // Pass 3: restore originals and link copies to each other.
        let clone_head = head.and_then(|h| self.nodes[h.0].next);
        let mut current = head;
        while let Some(original) = current {
            let Some(copy) = self.nodes[original.0].next else { break };
            let next_original = self.nodes[copy.0].next;
            self.nodes[original.0].next = next_original;
            self.nodes[copy.0].next = next_original.and_then(|n| self.nodes[n.0].next);
            current = next_original;
        }

        Ok(clone_head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looped(values: &[i32], loop_to: usize) -> (NodeArena, Option<NodeId>) {
        let mut arena = NodeArena::new();
        let head = arena.chain(values);
        let tail = arena.tail_of(head).unwrap();
        let target = arena.nth(head, loop_to);
        arena.set_next(tail, target).unwrap();
        (arena, head)
    }

    #[test]
    fn test_chain_and_values() {
        let mut arena = NodeArena::new();
        let head = arena.chain(&[1, 2, 3]);
        assert_eq!(arena.values_from(head, 10), vec![1, 2, 3]);
        assert_eq!(arena.val(arena.tail_of(head).unwrap()), Some(3));
        assert_eq!(arena.chain(&[]), None);
    }

    #[test]
    fn test_has_cycle() {
        let mut arena = NodeArena::new();
        let head = arena.chain(&[1, 2, 3, 4, 5]);
        assert!(!arena.has_cycle(head));
        assert!(!arena.has_cycle(None));

        let (arena, head) = looped(&[1, 2, 3, 4, 5], 2);
        assert!(arena.has_cycle(head));
        assert_eq!(arena.values_from(head, 7), vec![1, 2, 3, 4, 5, 3, 4]);
    }

    #[test]
    fn test_cycle_start_and_length() {
        let (arena, head) = looped(&[1, 2, 3, 4, 5, 6], 2);
        let start = arena.cycle_start(head).unwrap();
        assert_eq!(arena.val(start), Some(3));
        assert_eq!(Some(start), arena.cycle_start_by_visiting(head));
        assert_eq!(arena.cycle_length(head), 4);

        let mut arena = NodeArena::new();
        let head = arena.chain(&[1, 2]);
        assert_eq!(arena.cycle_start(head), None);
        assert_eq!(arena.cycle_length(head), 0);
    }

    #[test]
    fn test_self_loop() {
        let mut arena = NodeArena::new();
        let head = arena.chain(&[7]);
        arena.set_next(head.unwrap(), head).unwrap();
        assert!(arena.has_cycle(head));
        assert_eq!(arena.cycle_length(head), 1);
        assert!(arena.remove_cycle(head));
        assert!(!arena.has_cycle(head));
        assert_eq!(arena.values_from(head, 10), vec![7]);
    }

    #[test]
    fn test_remove_cycle() {
        let (mut arena, head) = looped(&[1, 2, 3, 4, 5], 1);
        assert!(arena.remove_cycle(head));
        assert_eq!(arena.values_from(head, 10), vec![1, 2, 3, 4, 5]);
        assert!(!arena.remove_cycle(head));

        let (mut arena, head) = looped(&[1, 2, 3], 0);
        assert!(arena.remove_cycle(head));
        assert_eq!(arena.values_from(head, 10), vec![1, 2, 3]);
    }

    #[test]
    fn test_intersection() {
        let mut arena = NodeArena::new();
        let shared = arena.chain(&[8, 4, 5]);
        let a = arena.chain_onto(&[4, 1], shared);
        let b = arena.chain_onto(&[5, 6, 1], shared);
        assert_eq!(arena.intersection(a, b), shared);

        let c = arena.chain(&[9, 9]);
        assert_eq!(arena.intersection(a, c), None);
        assert_eq!(arena.intersection(a, None), None);
    }

    #[test]
    fn test_clone_with_random() {
        let mut arena = NodeArena::new();
        let head = arena.chain(&[1, 2, 3]);
        let n1 = head.unwrap();
        let n2 = arena.nth(head, 1).unwrap();
        let n3 = arena.nth(head, 2).unwrap();
        arena.set_random(n1, Some(n3)).unwrap();
        arena.set_random(n2, Some(n1)).unwrap();
        arena.set_random(n3, Some(n3)).unwrap();

        let clone = arena.clone_with_random(head).unwrap();
        assert_eq!(arena.values_from(head, 10), vec![1, 2, 3]);
        assert_eq!(arena.values_from(clone, 10), vec![1, 2, 3]);

        let c1 = clone.unwrap();
        let c2 = arena.nth(clone, 1).unwrap();
        let c3 = arena.nth(clone, 2).unwrap();
        assert!(![n1, n2, n3].contains(&c1));
        assert_eq!(arena.random(c1), Some(c3));
        assert_eq!(arena.random(c2), Some(c1));
        assert_eq!(arena.random(c3), Some(c3));
        assert_eq!(arena.random(n1), Some(n3));
    }

    #[test]
    fn test_clone_rejects_cycles() {
        let (mut arena, head) = looped(&[1, 2], 0);
        assert!(arena.clone_with_random(head).is_err());
        let mut empty = NodeArena::new();
        assert_eq!(empty.clone_with_random(None).unwrap(), None);
    }
}
