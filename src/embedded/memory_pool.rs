//! Fixed-block allocators over preallocated storage: O(1) allocation with
//! no fragmentation, as firmware uses in place of a general heap.

use crate::error::{DrillError, Result};

/// Index of a block inside the pool that handed it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockHandle(usize);

impl BlockHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

// =============================================================================
// Milestone 1: Free-list pool
// =============================================================================

/// `COUNT` blocks of `BLOCK` bytes. Free blocks form a singly linked list
/// threaded through `next_free`; alloc pops the head, free pushes it back.
#[derive(Debug, Clone)]
pub struct BlockPool<const BLOCK: usize, const COUNT: usize> {
    blocks: Vec<[u8; BLOCK]>,
    next_free: Vec<Option<usize>>,
    in_use: Vec<bool>,
    free_head: Option<usize>,
    allocated: usize,
    high_water: usize,
}

pub type SmallBlockPool = BlockPool<64, 16>;

impl<const BLOCK: usize, const COUNT: usize> Default for BlockPool<BLOCK, COUNT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const BLOCK: usize, const COUNT: usize> BlockPool<BLOCK, COUNT> {
    pub fn new() -> Self {
        BlockPool {
            blocks: vec![[0; BLOCK]; COUNT],
            next_free: (0..COUNT)
                .map(|i| if i + 1 < COUNT { Some(i + 1) } else { None })
                .collect(),
            in_use: vec![false; COUNT],
            free_head: if COUNT > 0 { Some(0) } else { None },
            allocated: 0,
            high_water: 0,
        }
    }

    /// Hands out a zeroed block.
    pub fn alloc(&mut self) -> Result<BlockHandle> {
        let index = self.free_head.ok_or_else(|| DrillError::capacity(COUNT))?;
        self.free_head = self.next_free[index].take();
        self.in_use[index] = true;
        self.blocks[index] = [0; BLOCK];

        self.allocated += 1;
        self.high_water = self.high_water.max(self.allocated);
        Ok(BlockHandle(index))
    }

    pub fn free(&mut self, handle: BlockHandle) -> Result<()> {
        let index = self.check(handle)?;
        self.in_use[index] = false;
        self.next_free[index] = self.free_head;
        self.free_head = Some(index);
        self.allocated -= 1;
        Ok(())
    }

    fn check(&self, handle: BlockHandle) -> Result<usize> {
        match self.in_use.get(handle.0) {
            Some(true) => Ok(handle.0),
            Some(false) => Err(DrillError::invalid_argument(
                "handle",
                format!("block {} is not allocated", handle.0),
            )),
            None => Err(DrillError::invalid_argument(
                "handle",
                format!("block {} does not belong to this pool", handle.0),
            )),
        }
    }

    pub fn block(&self, handle: BlockHandle) -> Result<&[u8; BLOCK]> {
        let index = self.check(handle)?;
        Ok(&self.blocks[index])
    }

    pub fn block_mut(&mut self, handle: BlockHandle) -> Result<&mut [u8; BLOCK]> {
        let index = self.check(handle)?;
        Ok(&mut self.blocks[index])
    }

    pub fn available(&self) -> usize {
        COUNT - self.allocated
    }

    pub fn allocated(&self) -> usize {
        self.allocated
    }

    /// Most blocks ever allocated at once.
    pub fn high_water_mark(&self) -> usize {
        self.high_water
    }
}

// =============================================================================
// Milestone 2: Bitmap pool
// =============================================================================

pub const BITMAP_BLOCKS: usize = 32;
pub const BITMAP_BLOCK_SIZE: usize = 128;

/// 32 blocks tracked by one `u32`: bit set means allocated.
#[derive(Debug, Clone)]
pub struct BitmapPool {
    storage: Vec<[u8; BITMAP_BLOCK_SIZE]>,
    bitmap: u32,
}

impl Default for BitmapPool {
    fn default() -> Self {
        Self::new()
    }
}

impl BitmapPool {
    pub fn new() -> Self {
        BitmapPool {
            storage: vec![[0; BITMAP_BLOCK_SIZE]; BITMAP_BLOCKS],
            bitmap: 0,
        }
    }

    pub fn bitmap(&self) -> u32 {
        self.bitmap
    }

    /// Lowest free block first.
    pub fn alloc(&mut self) -> Result<BlockHandle> {
        if self.bitmap == u32::MAX {
            return Err(DrillError::capacity(BITMAP_BLOCKS));
        }
        let bit = (!self.bitmap).trailing_zeros() as usize;
        self.bitmap |= 1 << bit;
        Ok(BlockHandle(bit))
    }

    /// `count` adjacent blocks for objects larger than one block. Returns the
    /// first of them.
    pub fn alloc_consecutive(&mut self, count: usize) -> Result<BlockHandle> {
        if count == 0 || count > BITMAP_BLOCKS {
            return Err(DrillError::invalid_argument(
                "count",
                format!("must be in 1..={BITMAP_BLOCKS}"),
            ));
        }
        let mask = run_mask(count);
        for start in 0..=BITMAP_BLOCKS - count {
            if self.bitmap & (mask << start) == 0 {
                self.bitmap |= mask << start;
                return Ok(BlockHandle(start));
            }
        }
        Err(DrillError::capacity(BITMAP_BLOCKS))
    }

    pub fn free(&mut self, handle: BlockHandle) -> Result<()> {
        self.free_consecutive(handle, 1)
    }

    pub fn free_consecutive(&mut self, handle: BlockHandle, count: usize) -> Result<()> {
        let start = handle.0;
        if count == 0 || start + count > BITMAP_BLOCKS {
            return Err(DrillError::invalid_argument(
                "handle",
                format!("blocks {start}..{} do not belong to this pool", start + count),
            ));
        }
        let mask = run_mask(count) << start;
        if self.bitmap & mask != mask {
            return Err(DrillError::invalid_argument(
                "handle",
                format!("blocks {start}..{} are not all allocated", start + count),
            ));
        }
        self.bitmap &= !mask;
        Ok(())
    }

    pub fn block_mut(&mut self, handle: BlockHandle) -> Result<&mut [u8; BITMAP_BLOCK_SIZE]> {
        let allocated = handle.0 < BITMAP_BLOCKS && self.bitmap & (1 << handle.0) != 0;
        if !allocated {
            return Err(DrillError::invalid_argument(
                "handle",
                format!("block {} is not allocated", handle.0),
            ));
        }
        Ok(&mut self.storage[handle.0])
    }

    pub fn allocated(&self) -> usize {
        self.bitmap.count_ones() as usize
    }

    pub fn available(&self) -> usize {
        BITMAP_BLOCKS - self.allocated()
    }
}

fn run_mask(count: usize) -> u32 {
    if count >= 32 {
        u32::MAX
    } else {
        (1u32 << count) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_hands_out_zeroed_blocks() {
        let mut pool = SmallBlockPool::new();
        let a = pool.alloc().unwrap();
        pool.block_mut(a).unwrap().fill(0xAB);
        pool.free(a).unwrap();

        let b = pool.alloc().unwrap();
        assert_eq!(a, b);
        assert!(pool.block(b).unwrap().iter().all(|&x| x == 0));
    }

    #[test]
    fn test_exhaustion_and_high_water() {
        let mut pool: BlockPool<8, 3> = BlockPool::new();
        let handles: Vec<_> = (0..3).map(|_| pool.alloc().unwrap()).collect();
        assert_eq!(pool.available(), 0);
        assert!(matches!(
            pool.alloc(),
            Err(DrillError::CapacityExceeded { capacity: 3 })
        ));

        pool.free(handles[1]).unwrap();
        pool.free(handles[0]).unwrap();
        assert_eq!(pool.available(), 2);
        assert_eq!(pool.allocated(), 1);
        assert_eq!(pool.high_water_mark(), 3);

        // LIFO reuse: the most recently freed block comes back first.
        assert_eq!(pool.alloc().unwrap(), handles[0]);
    }

    #[test]
    fn test_double_and_foreign_free_rejected() {
        let mut pool: BlockPool<8, 2> = BlockPool::new();
        let h = pool.alloc().unwrap();
        pool.free(h).unwrap();
        assert!(matches!(pool.free(h), Err(DrillError::InvalidArgument { .. })));
        assert!(pool.free(BlockHandle(99)).is_err());
        assert!(pool.block_mut(h).is_err());
        assert_eq!(pool.available(), 2);
    }

    #[test]
    fn test_bitmap_lowest_free_first() {
        let mut pool = BitmapPool::new();
        let a = pool.alloc().unwrap();
        let b = pool.alloc().unwrap();
        let c = pool.alloc().unwrap();
        assert_eq!((a.index(), b.index(), c.index()), (0, 1, 2));
        assert_eq!(pool.bitmap(), 0b111);

        pool.free(b).unwrap();
        assert_eq!(pool.alloc().unwrap().index(), 1);
        assert!(pool.free(BlockHandle(5)).is_err());
        assert!(pool.free(BlockHandle(40)).is_err());
    }

    #[test]
    fn test_bitmap_exhaustion() {
        let mut pool = BitmapPool::new();
        for _ in 0..BITMAP_BLOCKS {
            pool.alloc().unwrap();
        }
        assert_eq!(pool.available(), 0);
        assert!(pool.alloc().is_err());
    }

    #[test]
    fn test_bitmap_consecutive() {
        let mut pool = BitmapPool::new();
        let first = pool.alloc().unwrap();
        let second = pool.alloc().unwrap();
        pool.free(first).unwrap();

        // Block 0 is free but a run of 3 must start after block 1.
        let run = pool.alloc_consecutive(3).unwrap();
        assert_eq!(run.index(), 2);
        assert_eq!(pool.bitmap(), 0b11110);
        pool.block_mut(run).unwrap()[0] = 1;

        pool.free_consecutive(run, 3).unwrap();
        pool.free(second).unwrap();
        assert_eq!(pool.bitmap(), 0);
        assert!(pool.alloc_consecutive(0).is_err());
        assert_eq!(pool.alloc_consecutive(32).unwrap().index(), 0);
    }
}
