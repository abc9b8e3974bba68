use crate::error::{DrillError, Result};
use std::collections::VecDeque;
use std::fmt::Display;

// =============================================================================
// Milestone 1: Fixed-capacity stack
// =============================================================================

#[derive(Debug, Clone)]
pub struct ArrayStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> ArrayStack<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        ArrayStack {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(DrillError::capacity(self.capacity));
        }
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }
}

// =============================================================================
// Milestone 2: Array-backed queues
// =============================================================================

/// Circular queue that tracks its element count, so every slot is usable.
#[derive(Debug, Clone)]
pub struct ArrayQueue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
    count: usize,
}

impl<T> ArrayQueue<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        ArrayQueue {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(DrillError::capacity(self.slots.len()));
        }
        self.slots[self.tail] = Some(value);
        self.tail = (self.tail + 1) % self.slots.len();
        self.count += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.count -= 1;
        value
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }
}

/// Circular queue without a counter: one slot always stays empty so that
/// `front == rear` means empty and `rear + 1 == front` means full.
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    front: usize,
    rear: usize,
}

impl<T> CircularQueue<T> {
    /// Holds at most `size - 1` elements.
    pub fn new(size: usize) -> Result<Self> {
        if size < 2 {
            return Err(DrillError::invalid_argument("size", "needs at least 2 slots"));
        }
        Ok(CircularQueue {
            slots: (0..size).map(|_| None).collect(),
            front: 0,
            rear: 0,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    pub fn is_full(&self) -> bool {
        (self.rear + 1) % self.slots.len() == self.front
    }

    pub fn len(&self) -> usize {
        (self.rear + self.slots.len() - self.front) % self.slots.len()
    }

    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(DrillError::capacity(self.slots.len() - 1));
        }
        self.slots[self.rear] = Some(value);
        self.rear = (self.rear + 1) % self.slots.len();
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.front].take();
        self.front = (self.front + 1) % self.slots.len();
        value
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.slots[self.front].as_ref()
        }
    }

    pub fn front_index(&self) -> usize {
        self.front
    }

    pub fn rear_index(&self) -> usize {
        self.rear
    }
}

impl<T: Display> CircularQueue<T> {
    /// One cell per slot, `_` for empty: `[_ 20 30 _ _] front=1 rear=3`.
    pub fn visualize(&self) -> String {
        let cells: Vec<String> = self
            .slots
            .iter()
            .map(|slot| match slot {
                Some(v) => v.to_string(),
                None => "_".to_string(),
            })
            .collect();
        format!("[{}] front={} rear={}", cells.join(" "), self.front, self.rear)
    }
}

// =============================================================================
// Milestone 3: Two stacks in one array
// =============================================================================

#[derive(Debug, Clone)]
pub struct TwoStacks<T> {
    slots: Vec<Option<T>>,
    // Stack 1 occupies [0, top1), stack 2 occupies [top2, len).
    top1: usize,
    top2: usize,
}

impl<T> TwoStacks<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        TwoStacks {
            slots: (0..capacity).map(|_| None).collect(),
            top1: 0,
            top2: capacity,
        }
    }

    pub fn is_full(&self) -> bool {
        self.top1 == self.top2
    }

    pub fn push1(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(DrillError::capacity(self.slots.len()));
        }
        self.slots[self.top1] = Some(value);
        self.top1 += 1;
        Ok(())
    }

    pub fn push2(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(DrillError::capacity(self.slots.len()));
        }
        self.top2 -= 1;
        self.slots[self.top2] = Some(value);
        Ok(())
    }

    pub fn pop1(&mut self) -> Option<T> {
        if self.top1 == 0 {
            return None;
        }
        self.top1 -= 1;
        self.slots[self.top1].take()
    }

    pub fn pop2(&mut self) -> Option<T> {
        if self.top2 == self.slots.len() {
            return None;
        }
        let value = self.slots[self.top2].take();
        self.top2 += 1;
        value
    }

    pub fn len1(&self) -> usize {
        self.top1
    }

    pub fn len2(&self) -> usize {
        self.slots.len() - self.top2
    }
}

// =============================================================================
// Milestone 4: Queue from stacks, stack from a queue
// =============================================================================

/// Elements move from `inbox` to `outbox` only when `outbox` runs dry,
/// so each element is moved once: amortized O(1).
#[derive(Debug, Clone, Default)]
pub struct QueueViaStacks<T> {
    inbox: Vec<T>,
    outbox: Vec<T>,
}

impl<T> QueueViaStacks<T> {
    pub fn new() -> Self {
        QueueViaStacks {
            inbox: Vec::new(),
            outbox: Vec::new(),
        }
    }

    pub fn enqueue(&mut self, value: T) {
        self.inbox.push(value);
    }

    fn transfer(&mut self) {
        if self.outbox.is_empty() {
            while let Some(v) = self.inbox.pop() {
                self.outbox.push(v);
            }
        }
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.transfer();
        self.outbox.pop()
    }

    pub fn front(&mut self) -> Option<&T> {
        self.transfer();
        self.outbox.last()
    }

    pub fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Push rotates the queue so the newest element sits at the front.
#[derive(Debug, Clone, Default)]
pub struct StackViaQueues<T> {
    queue: VecDeque<T>,
}

impl<T> StackViaQueues<T> {
    pub fn new() -> Self {
        StackViaQueues {
            queue: VecDeque::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.queue.push_back(value);
        for _ in 1..self.queue.len() {
            if let Some(front) = self.queue.pop_front() {
                self.queue.push_back(front);
            }
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    pub fn top(&self) -> Option<&T> {
        self.queue.front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

// =============================================================================
// Milestone 5: Min stack
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct MinStack<T> {
    values: Vec<T>,
    minimums: Vec<T>,
}

impl<T: Ord + Clone> MinStack<T> {
    pub fn new() -> Self {
        MinStack {
            values: Vec::new(),
            minimums: Vec::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        if self.minimums.last().map_or(true, |min| value <= *min) {
            self.minimums.push(value.clone());
        }
        self.values.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        let value = self.values.pop()?;
        if self.minimums.last() == Some(&value) {
            self.minimums.pop();
        }
        Some(value)
    }

    pub fn top(&self) -> Option<&T> {
        self.values.last()
    }

    pub fn min(&self) -> Option<&T> {
        self.minimums.last()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// =============================================================================
// Milestone 6: Stack-driven algorithms
// =============================================================================

/// Checks `()`, `[]` and `{}` nesting; other characters are ignored.
pub fn is_balanced(expr: &str) -> bool {
    let mut stack = Vec::new();
    for c in expr.chars() {
        match c {
            '(' | '[' | '{' => stack.push(c),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(expected) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// For each element, the first strictly greater element to its right.
pub fn next_greater_elements(arr: &[i32]) -> Vec<Option<i32>> {
    let mut result = vec![None; arr.len()];
    let mut stack: Vec<i32> = Vec::new();

    for i in (0..arr.len()).rev() {
        while stack.last().map_or(false, |&top| top <= arr[i]) {
            stack.pop();
        }
        result[i] = stack.last().copied();
        stack.push(arr[i]);
    }
    result
}

pub fn largest_rectangle(heights: &[u32]) -> u64 {
    let n = heights.len();
    let mut stack: Vec<usize> = Vec::new();
    let mut best = 0u64;

    for i in 0..=n {
        let current = if i == n { 0 } else { heights[i] };
        while let Some(&top) = stack.last() {
            if heights[top] <= current {
                break;
            }
            stack.pop();
            let width = match stack.last() {
                Some(&left) => i - left - 1,
                None => i,
            };
            best = best.max(heights[top] as u64 * width as u64);
        }
        stack.push(i);
    }
    best
}

pub fn largest_rectangle_brute(heights: &[u32]) -> u64 {
    let mut best = 0u64;
    for i in 0..heights.len() {
        let mut min_height = u32::MAX;
        for j in i..heights.len() {
            min_height = min_height.min(heights[j]);
            best = best.max(min_height as u64 * (j - i + 1) as u64);
        }
    }
    best
}

pub fn reverse_with_stack(s: &str) -> String {
    let mut stack: Vec<char> = s.chars().collect();
    let mut reversed = String::with_capacity(s.len());
    while let Some(c) = stack.pop() {
        reversed.push(c);
    }
    reversed
}

pub fn reverse_queue<T>(queue: &mut VecDeque<T>) {
    let mut stack = Vec::with_capacity(queue.len());
    while let Some(v) = queue.pop_front() {
        stack.push(v);
    }
    while let Some(v) = stack.pop() {
        queue.push_back(v);
    }
}
