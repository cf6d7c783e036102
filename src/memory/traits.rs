/*!
 * Memory Traits
 * Engine abstractions for the display layer
 */

use super::types::*;
use crate::core::types::{Pid, Size};

/// Memory allocator interface
///
/// The engine is single-threaded by construction: the caller serializes
/// every operation, so both entry points take `&mut self`.
pub trait Allocator {
    /// Allocate memory for a process, parking the request when no
    /// single free block fits
    fn allocate(&mut self, pid: Pid, size: Size) -> MemoryResult<AllocationOutcome>;

    /// Free a process's memory and drain the wait queue against the
    /// reclaimed capacity
    fn free(&mut self, pid: Pid) -> MemoryResult<()>;
}

/// Memory statistics provider
pub trait MemoryInfo {
    /// Get a read-only view of the full engine state
    fn snapshot(&self) -> MemorySnapshot;

    /// Get memory info as (total, used, free)
    fn info(&self) -> (Size, Size, Size);

    /// Sum of all free block sizes
    ///
    /// A cheap pre-check only: free memory may be fragmented across
    /// blocks none of which individually fits a request.
    fn total_free(&self) -> Size;
}
