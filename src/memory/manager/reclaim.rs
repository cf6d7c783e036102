/*!
 * Reclaimer
 * Deallocation and the wait-queue drain it triggers
 */

use super::MemoryManager;
use crate::core::types::Pid;
use crate::memory::types::{MemoryError, MemoryResult};
use log::{error, info, warn};

impl MemoryManager {
    /// Free a process's memory
    ///
    /// Deactivates the process record, marks its block free (adjacent
    /// free blocks stay unmerged), then drains the wait queue against
    /// the reclaimed capacity. An unknown or already-freed pid is a
    /// `ProcessNotFound` error with no state change.
    pub fn free(&mut self, pid: Pid) -> MemoryResult<()> {
        let record = *self
            .processes
            .find_active(pid)
            .ok_or(MemoryError::ProcessNotFound(pid))?;
        self.processes.deactivate(pid)?;
        if !self.blocks.mark_free_by_address(record.address) {
            // Every record points at the block it was carved from
            error!(
                "no block starts at address {} recorded for process {}",
                record.address, pid
            );
        }
        info!(
            "freed {} KB at address {} from process {}",
            record.size, record.address, pid
        );

        self.drain_wait_queue();
        Ok(())
    }

    /// Retry queued requests head-first until one cannot be placed
    ///
    /// Terminates when the queue is empty or the head is unsatisfiable.
    /// The aggregate total-free pre-check runs before each attempt; it
    /// is necessary but not sufficient, since free memory fragmented
    /// across blocks can still defeat the per-block fit. Requests
    /// behind an unsatisfiable head are never serviced out of order.
    fn drain_wait_queue(&mut self) {
        while let Some(head) = self.wait_queue.peek_front() {
            if self.blocks.total_free() < head.size {
                break;
            }
            match self.try_fit(head.pid, head.size) {
                Ok(Some(address)) => {
                    self.wait_queue.dequeue_front();
                    info!(
                        "process {} moved from wait queue, allocated {} KB at address {}",
                        head.pid, head.size, address
                    );
                }
                Ok(None) => break,
                Err(err) => {
                    // Table capacity exhausted; the head stays queued
                    warn!(
                        "wait-queue retry for process {} aborted: {}",
                        head.pid, err
                    );
                    break;
                }
            }
        }
    }
}
