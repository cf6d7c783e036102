/*!
 * First-Fit Allocator
 * Search, split, and wait-queue admission
 */

use super::MemoryManager;
use crate::core::types::{Address, Pid, Size};
use crate::memory::types::{AllocationOutcome, MemoryResult, WaitingRequest};
use log::info;

impl MemoryManager {
    /// Allocate memory for a process
    ///
    /// The only allocation entry point. On a first-fit hit the block is
    /// split (or marked whole on an exact fit), the process recorded,
    /// and the block's start address returned. On a miss the request is
    /// parked in the wait queue; a full queue is a capacity error. No
    /// outcome ever leaves the engine partially updated.
    pub fn allocate(&mut self, pid: Pid, size: Size) -> MemoryResult<AllocationOutcome> {
        debug_assert!(size > 0, "allocation size must be positive");

        if let Some(address) = self.try_fit(pid, size)? {
            return Ok(AllocationOutcome::Allocated(address));
        }

        self.wait_queue.enqueue(WaitingRequest { pid, size })?;
        info!(
            "no free block fits {} KB, process {} parked in wait queue (depth {})",
            size,
            pid,
            self.wait_queue.len()
        );
        Ok(AllocationOutcome::Queued)
    }

    /// First-fit search plus split and bookkeeping, without queue
    /// admission
    ///
    /// `Ok(None)` means no single free block fits. Capacity checks run
    /// before any mutation: a full process table or block table aborts
    /// with both tables untouched. The wait-queue drain calls this
    /// directly so a failed retry never re-enqueues the head.
    pub(super) fn try_fit(&mut self, pid: Pid, size: Size) -> MemoryResult<Option<Address>> {
        let index = match self.blocks.find_first_fit(size) {
            Some(index) => index,
            None => return Ok(None),
        };

        self.processes.ensure_capacity()?;
        self.blocks.split_at(index, size)?;
        let address = self.blocks.start_of(index);
        self.processes.record(pid, address, size)?;

        info!(
            "allocated {} KB at address {} for process {}",
            size, address, pid
        );
        Ok(Some(address))
    }
}
