/*!
 * Memory Allocation Engine
 *
 * Contiguous-memory allocator simulation using first-fit placement.
 *
 * ## Placement
 *
 * - **First-fit**: the lowest-address free block large enough wins;
 *   there is no secondary ordering by size
 * - **Block splitting**: a larger block is split into an allocated
 *   prefix and a free remainder
 * - **No coalescing**: adjacent free blocks are never merged, a
 *   faithful property of the modeled policy
 *
 * ## Admission
 *
 * Requests that no single free block can hold are parked in a bounded
 * FIFO wait queue. Freeing memory drains the queue head-first; an
 * unsatisfiable head blocks everything behind it by design.
 */

mod manager;
pub mod traits;
pub mod types;

pub use manager::MemoryManager;
pub use traits::{Allocator, MemoryInfo};
pub use types::{
    AllocationOutcome, MemoryBlock, MemoryError, MemoryResult, MemorySnapshot, ProcessRecord,
    WaitingRequest,
};
