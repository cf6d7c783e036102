/*!
 * Memory Manager
 *
 * The aggregate engine state: block table, process table, and wait
 * queue, exclusively owned and passed `&mut` to every operation.
 */

mod allocator;
mod block_table;
mod process_table;
mod reclaim;
mod wait_queue;

use super::traits::{Allocator, MemoryInfo};
use super::types::{AllocationOutcome, MemoryResult, MemorySnapshot};
use crate::core::types::{Pid, SimLimits, Size};
use block_table::BlockTable;
use log::info;
use process_table::ProcessTable;
use wait_queue::WaitQueue;

/// First-fit memory allocation engine
///
/// Created once per run with a fixed block partition; blocks are only
/// ever added by splitting, never removed or merged.
#[derive(Debug)]
pub struct MemoryManager {
    blocks: BlockTable,
    processes: ProcessTable,
    wait_queue: WaitQueue,
}

impl MemoryManager {
    /// Create an engine over the given partition with default limits
    ///
    /// Block sizes are laid out contiguously from address 0, all free.
    /// Fails with `InvalidConfig` on an empty or oversized partition or
    /// any non-positive block size, before any state is created.
    pub fn initialize(block_sizes: &[Size]) -> MemoryResult<Self> {
        Self::initialize_with_limits(block_sizes, SimLimits::default())
    }

    /// Create an engine with custom table limits (useful for testing)
    pub fn initialize_with_limits(block_sizes: &[Size], limits: SimLimits) -> MemoryResult<Self> {
        let blocks = BlockTable::new(block_sizes, limits.max_blocks)?;
        info!(
            "memory manager initialized: {} blocks, {} KB total",
            block_sizes.len(),
            blocks.total_size()
        );
        Ok(Self {
            blocks,
            processes: ProcessTable::new(limits.max_processes),
            wait_queue: WaitQueue::new(limits.max_wait_queue),
        })
    }

    /// Read-only view of blocks, active processes, and waiting requests
    pub fn snapshot(&self) -> MemorySnapshot {
        MemorySnapshot {
            blocks: self.blocks.blocks().to_vec(),
            active_processes: self.processes.active_entries().collect(),
            waiting: self.wait_queue.iter().collect(),
        }
    }

    /// Memory info as (total, used, free)
    pub fn info(&self) -> (Size, Size, Size) {
        let total = self.blocks.total_size();
        let free = self.blocks.total_free();
        (total, total - free, free)
    }

    /// Sum of all free block sizes; a pre-check, not a sufficiency proof
    pub fn total_free(&self) -> Size {
        self.blocks.total_free()
    }
}

// Implement trait interfaces
impl Allocator for MemoryManager {
    fn allocate(&mut self, pid: Pid, size: Size) -> MemoryResult<AllocationOutcome> {
        MemoryManager::allocate(self, pid, size)
    }

    fn free(&mut self, pid: Pid) -> MemoryResult<()> {
        MemoryManager::free(self, pid)
    }
}

impl MemoryInfo for MemoryManager {
    fn snapshot(&self) -> MemorySnapshot {
        MemoryManager::snapshot(self)
    }

    fn info(&self) -> (Size, Size, Size) {
        MemoryManager::info(self)
    }

    fn total_free(&self) -> Size {
        MemoryManager::total_free(self)
    }
}
