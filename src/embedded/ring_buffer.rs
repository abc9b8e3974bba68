use crate::error::{DrillError, Result};

/// Fixed-capacity FIFO with storage inline, the shape a UART receive buffer
/// takes in firmware. `head` is the oldest element, `tail` the next free slot.
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize> {
    slots: [Option<T>; N],
    head: usize,
    tail: usize,
    count: usize,
}

impl<T, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> RingBuffer<T, N> {
    pub fn new() -> Self {
        RingBuffer {
            slots: std::array::from_fn(|_| None),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == N
    }

    /// Rejects the value when full; stored data is never overwritten.
    pub fn put(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(DrillError::capacity(N));
        }
        self.slots[self.tail] = Some(value);
        self.tail = (self.tail + 1) % N;
        self.count += 1;
        Ok(())
    }

    /// Stores `value`, dropping the oldest element when full. Returns the
    /// dropped element, or `value` itself for a zero-capacity buffer.
    pub fn put_overwrite(&mut self, value: T) -> Option<T> {
        if N == 0 {
            return Some(value);
        }
        let dropped = if self.is_full() { self.get() } else { None };
        self.slots[self.tail] = Some(value);
        self.tail = (self.tail + 1) % N;
        self.count += 1;
        dropped
    }

    pub fn get(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % N;
        self.count -= 1;
        value
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Oldest to newest, without consuming.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.count).filter_map(move |i| self.slots[(self.head + i) % N].as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut rb: RingBuffer<u8, 4> = RingBuffer::new();
        assert!(rb.is_empty());
        for b in b"abc" {
            rb.put(*b).unwrap();
        }
        assert_eq!(rb.peek(), Some(&b'a'));
        assert_eq!(rb.get(), Some(b'a'));
        assert_eq!(rb.get(), Some(b'b'));
        assert_eq!(rb.len(), 1);
    }

    #[test]
    fn test_put_rejects_when_full() {
        let mut rb: RingBuffer<i32, 2> = RingBuffer::new();
        rb.put(1).unwrap();
        rb.put(2).unwrap();
        assert!(rb.is_full());
        assert!(matches!(
            rb.put(3),
            Err(DrillError::CapacityExceeded { capacity: 2 })
        ));
        assert_eq!(rb.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_put_overwrite_drops_oldest() {
        let mut rb: RingBuffer<i32, 3> = RingBuffer::new();
        for v in 1..=3 {
            assert_eq!(rb.put_overwrite(v), None);
        }
        assert_eq!(rb.put_overwrite(4), Some(1));
        assert_eq!(rb.put_overwrite(5), Some(2));
        assert_eq!(rb.len(), 3);
        assert_eq!(rb.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_wraparound_and_clear() {
        let mut rb: RingBuffer<i32, 3> = RingBuffer::new();
        for round in 0..5 {
            rb.put(round).unwrap();
            rb.put(round + 100).unwrap();
            assert_eq!(rb.get(), Some(round));
            assert_eq!(rb.get(), Some(round + 100));
        }
        rb.put(7).unwrap();
        rb.clear();
        assert!(rb.is_empty());
        assert_eq!(rb.get(), None);
        assert_eq!(rb.capacity(), 3);
    }

    #[test]
    fn test_zero_capacity() {
        let mut rb: RingBuffer<i32, 0> = RingBuffer::new();
        assert!(rb.is_full());
        assert!(rb.put(1).is_err());
        assert_eq!(rb.put_overwrite(1), Some(1));
        assert_eq!(rb.get(), None);
    }
}
