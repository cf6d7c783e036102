/*!
 * Block Table
 * Ordered, contiguous partition of the simulated address space
 */

use crate::core::types::{Address, Size};
use crate::memory::types::{MemoryBlock, MemoryError, MemoryResult};

/// The block sequence covering the address space
///
/// Invariants held across every operation: blocks are sorted ascending
/// by `start`, each block ends exactly where the next begins, and the
/// sizes sum to the total fixed at initialization. Splitting grows the
/// count up to `max_blocks`; nothing ever shrinks it.
#[derive(Debug)]
pub(super) struct BlockTable {
    blocks: Vec<MemoryBlock>,
    max_blocks: usize,
    total_size: Size,
}

impl BlockTable {
    pub fn new(sizes: &[Size], max_blocks: usize) -> MemoryResult<Self> {
        if sizes.is_empty() {
            return Err(MemoryError::InvalidConfig(
                "at least one memory block is required".into(),
            ));
        }
        if sizes.len() > max_blocks {
            return Err(MemoryError::InvalidConfig(format!(
                "{} blocks requested, limit is {}",
                sizes.len(),
                max_blocks
            )));
        }

        let mut blocks = Vec::with_capacity(sizes.len());
        let mut start: Address = 0;
        for &size in sizes {
            if size == 0 {
                return Err(MemoryError::InvalidConfig(
                    "block sizes must be positive".into(),
                ));
            }
            blocks.push(MemoryBlock {
                start,
                size,
                free: true,
            });
            start = start.checked_add(size).ok_or_else(|| {
                MemoryError::InvalidConfig("total memory size overflows the address space".into())
            })?;
        }

        Ok(Self {
            blocks,
            max_blocks,
            total_size: start,
        })
    }

    /// Index of the lowest-address free block holding at least `size`
    ///
    /// Tie-break is strictly positional; a later, tighter-fitting block
    /// never wins over an earlier larger one.
    pub fn find_first_fit(&self, size: Size) -> Option<usize> {
        self.blocks
            .iter()
            .position(|block| block.free && block.size >= size)
    }

    /// Carve `size` out of the free block at `index` and mark it allocated
    ///
    /// An exact fit is marked in place. Otherwise the free remainder is
    /// inserted immediately after `index`, shifting the tail one slot.
    /// The capacity check happens before any mutation, so a full table
    /// leaves the layout untouched.
    pub fn split_at(&mut self, index: usize, size: Size) -> MemoryResult<()> {
        debug_assert!(self.blocks[index].free, "split target must be free");
        debug_assert!(self.blocks[index].size >= size, "split target must fit");

        if self.blocks[index].size == size {
            self.blocks[index].free = false;
            return Ok(());
        }

        if self.blocks.len() >= self.max_blocks {
            return Err(MemoryError::BlockTableFull {
                limit: self.max_blocks,
            });
        }

        let remainder = MemoryBlock {
            start: self.blocks[index].start + size,
            size: self.blocks[index].size - size,
            free: true,
        };
        self.blocks[index].size = size;
        self.blocks[index].free = false;
        self.blocks.insert(index + 1, remainder);
        Ok(())
    }

    /// Sum of all free block sizes
    pub fn total_free(&self) -> Size {
        self.blocks
            .iter()
            .filter(|block| block.free)
            .map(|block| block.size)
            .sum()
    }

    /// Flip the block starting at `start` back to free; no coalescing
    /// with neighbors is performed
    pub fn mark_free_by_address(&mut self, start: Address) -> bool {
        match self.blocks.iter_mut().find(|block| block.start == start) {
            Some(block) => {
                block.free = true;
                true
            }
            None => false,
        }
    }

    pub fn blocks(&self) -> &[MemoryBlock] {
        &self.blocks
    }

    pub fn start_of(&self, index: usize) -> Address {
        self.blocks[index].start
    }

    pub fn total_size(&self) -> Size {
        self.total_size
    }
}
