//! Owned singly-linked lists (`Option<Box<ListNode>>`) and the classic
//! pointer-juggling exercises over them.
//!
//! Lists built here are always acyclic; see [`crate::cyclic_list`] for the
//! exercises that need cycles or shared tails.

use crate::error::{DrillError, Result};
use itertools::Itertools;

pub struct ListNode {
    pub val: i32,
    pub next: Link,
}

pub type Link = Option<Box<ListNode>>;

impl ListNode {
    pub fn new(val: i32) -> Self {
        ListNode { val, next: None }
    }

    fn values(&self) -> impl Iterator<Item = i32> + '_ {
        std::iter::successors(Some(self), |node| node.next.as_deref()).map(|node| node.val)
    }
}

// Drop, Clone, PartialEq and Debug walk the chain in a loop; stack depth
// stays constant for any list length.

impl Drop for ListNode {
    fn drop(&mut self) {
        let mut cursor = self.next.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl Clone for ListNode {
    fn clone(&self) -> Self {
        let values: Vec<i32> = self.values().collect();
        let next = from_slice(&values[1..]);
        ListNode {
            val: self.val,
            next,
        }
    }
}

impl PartialEq for ListNode {
    fn eq(&self, other: &Self) -> bool {
        self.values().eq(other.values())
    }
}

impl Eq for ListNode {}

impl std::fmt::Debug for ListNode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

// =============================================================================
// Milestone 1: Construction and traversal
// =============================================================================

pub fn from_slice(values: &[i32]) -> Link {
    let mut head = None;
    for &val in values.iter().rev() {
        head = Some(Box::new(ListNode { val, next: head }));
    }
    head
}

pub struct Iter<'a> {
    next: Option<&'a ListNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.val
        })
    }
}

pub fn iter(head: &Link) -> Iter<'_> {
    Iter {
        next: head.as_deref(),
    }
}

pub fn to_vec(head: &Link) -> Vec<i32> {
    iter(head).collect()
}

pub fn len(head: &Link) -> usize {
    iter(head).count()
}

/// Renders `1 -> 2 -> 3 -> NULL`.
pub fn format_list(head: &Link) -> String {
    if head.is_none() {
        return "NULL".to_string();
    }
    format!("{} -> NULL", iter(head).join(" -> "))
}

/// Walks `index` links forward and returns the slot found there.
fn link_at(mut cursor: &mut Link, index: usize) -> Option<&mut Link> {
    for _ in 0..index {
        cursor = &mut cursor.as_mut()?.next;
    }
    Some(cursor)
}

// =============================================================================
// Milestone 2: Reversal
// =============================================================================

pub fn reverse_iterative(mut head: Link) -> Link {
    let mut prev: Link = None;
    while let Some(mut node) = head {
        head = node.next.take();
        node.next = prev;
        prev = Some(node);
    }
    prev
}

/// Recursion depth equals the list length; use [`reverse_iterative`] for
/// long lists.
pub fn reverse_recursive(head: Link) -> Link {
    fn go(head: Link, reversed: Link) -> Link {
        match head {
            None => reversed,
            Some(mut node) => {
                let rest = node.next.take();
                node.next = reversed;
                go(rest, Some(node))
            }
        }
    }
    go(head, None)
}

// =============================================================================
// Milestone 3: Middle node, nth from end
// =============================================================================

/// Slow/fast pointers. On even length this is the second of the two middles.
pub fn middle(head: &Link) -> Option<i32> {
    let mut slow = head.as_deref()?;
    let mut fast = head.as_deref();
    while let Some(ahead) = fast.and_then(|f| f.next.as_deref()) {
        slow = slow.next.as_deref()?;
        fast = ahead.next.as_deref();
    }
    Some(slow.val)
}

/// Like [`middle`] but returns the first middle on even length.
pub fn first_middle(head: &Link) -> Option<i32> {
    let mut slow = head.as_deref()?;
    let mut fast = slow;
    while let Some(two_ahead) = fast.next.as_deref().and_then(|n| n.next.as_deref()) {
        slow = slow.next.as_deref()?;
        fast = two_ahead;
    }
    Some(slow.val)
}

/// `n` counts from 1 at the tail.
pub fn remove_nth_from_end(head: Link, n: usize) -> Result<Link> {
    let length = len(&head);
    if n == 0 || n > length {
        return Err(DrillError::invalid_argument(
            "n",
            format!("must be in 1..={length}, got {n}"),
        ));
    }

    let mut head = head;
    let slot = link_at(&mut head, length - n).ok_or_else(|| DrillError::out_of_range(n, length))?;
    if let Some(mut node) = slot.take() {
        *slot = node.next.take();
    }
    Ok(head)
}

// =============================================================================
// Milestone 4: Merge and sort
// =============================================================================

/// Relinks the nodes of two sorted lists into one. Ties keep `a` first.
pub fn merge_sorted(mut a: Link, mut b: Link) -> Link {
    let mut head: Link = None;
    let mut tail = &mut head;

    loop {
        let take_a = match (&a, &b) {
            (Some(x), Some(y)) => x.val <= y.val,
            _ => break,
        };
        let source = if take_a { &mut a } else { &mut b };
        if let Some(mut node) = source.take() {
            *source = node.next.take();
            tail = &mut tail.insert(node).next;
        }
    }

    *tail = if a.is_some() { a } else { b };
    head
}

pub fn merge_sort(head: Link) -> Link {
    let length = len(&head);
    if length < 2 {
        return head;
    }
    let mut left = head;
    let right = link_at(&mut left, length / 2).and_then(|slot| slot.take());
    merge_sorted(merge_sort(left), merge_sort(right))
}

// =============================================================================
// Milestone 5: Palindrome, duplicates, deletion
// =============================================================================

/// Reverses the second half in place, compares, then puts it back.
/// The list is unchanged when this returns.
pub fn is_palindrome(head: &mut Link) -> bool {
    let length = len(head);
    if length < 2 {
        return true;
    }
    let split = (length + 1) / 2;

    let second = match link_at(head, split) {
        Some(slot) => reverse_iterative(slot.take()),
        None => return true,
    };
    let matches = iter(head).zip(iter(&second)).all(|(a, b)| a == b);

    if let Some(slot) = link_at(head, split) {
        *slot = reverse_iterative(second);
    }
    matches
}

pub fn remove_duplicates_sorted(head: &mut Link) {
    let mut cursor = head.as_mut();
    while let Some(node) = cursor {
        while node.next.as_ref().map_or(false, |next| next.val == node.val) {
            let duplicate = node.next.take();
            node.next = duplicate.and_then(|mut d| d.next.take());
        }
        cursor = node.next.as_mut();
    }
}

/// Removes the first node holding `value`.
pub fn delete_value(head: &mut Link, value: i32) -> bool {
    let Some(index) = iter(head).position(|v| v == value) else {
        return false;
    };
    match link_at(head, index) {
        Some(slot) => match slot.take() {
            Some(mut node) => {
                *slot = node.next.take();
                true
            }
            None => false,
        },
        None => false,
    }
}

/// Deletes `node` given no access to its predecessor by copying the
/// successor into it. The tail cannot be deleted this way.
pub fn delete_node_copy_next(node: &mut ListNode) -> Result<()> {
    match node.next.take() {
        Some(mut next) => {
            node.val = next.val;
            node.next = next.next.take();
            Ok(())
        }
        None => Err(DrillError::invalid_argument(
            "node",
            "the tail has no successor to copy from",
        )),
    }
}

// =============================================================================
// Milestone 6: Add two numbers (digits stored least-significant first)
// =============================================================================

pub fn add_two_numbers(a: &Link, b: &Link) -> Link {
    let mut left = iter(a);
    let mut right = iter(b);
    let mut carry = 0;
    let mut digits = Vec::new();

    loop {
        let x = left.next();
        let y = right.next();
        if x.is_none() && y.is_none() && carry == 0 {
            break;
        }
        let sum = x.unwrap_or(0) + y.unwrap_or(0) + carry;
        digits.push(sum % 10);
        carry = sum / 10;
    }
    from_slice(&digits)
}
