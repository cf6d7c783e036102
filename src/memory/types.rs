/*!
 * Memory Types
 * Common types for the allocation engine
 */

use crate::core::types::{Address, Pid, Size};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
///
/// Capacity errors abort the operation with no partial mutation and are
/// never fatal to the engine; it keeps serving subsequent requests.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MemoryError {
    #[error("block table full: splitting would exceed the limit of {limit} blocks")]
    #[diagnostic(
        code(memory::block_table_full),
        help("Each split adds a block. Free memory cannot be subdivided further this run.")
    )]
    BlockTableFull { limit: usize },

    #[error("process table full: limit of {limit} records reached")]
    #[diagnostic(
        code(memory::process_table_full),
        help("Process records are retained after free; the table bounds allocations per run.")
    )]
    ProcessTableFull { limit: usize },

    #[error("wait queue full: cannot admit process {pid}, limit is {limit}")]
    #[diagnostic(
        code(memory::wait_queue_full),
        help("The request was rejected, not dropped silently. Free memory to drain the queue.")
    )]
    WaitQueueFull { limit: usize, pid: Pid },

    #[error("process {0} has no active allocation")]
    #[diagnostic(
        code(memory::process_not_found),
        help("The process was never allocated or has already been freed.")
    )]
    ProcessNotFound(Pid),

    #[error("invalid configuration: {0}")]
    #[diagnostic(
        code(memory::invalid_config),
        help("Initialization aborted before any state was created.")
    )]
    InvalidConfig(String),
}

impl MemoryError {
    /// Whether this error belongs to the capacity-exceeded class
    /// (block table, process table, or wait queue at its limit)
    pub fn is_capacity_error(&self) -> bool {
        matches!(
            self,
            MemoryError::BlockTableFull { .. }
                | MemoryError::ProcessTableFull { .. }
                | MemoryError::WaitQueueFull { .. }
        )
    }
}

/// A contiguous region of the simulated address space
///
/// The engine keeps blocks sorted ascending by `start` with no gaps or
/// overlaps; the sum of all sizes equals the space configured at
/// initialization and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBlock {
    pub start: Address,
    pub size: Size,
    pub free: bool,
}

/// A process's allocation record
///
/// Records are never removed, only deactivated, so the allocation
/// history stays inspectable and ids never collide with a live entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub pid: Pid,
    pub address: Address,
    pub size: Size,
    pub active: bool,
}

/// A parked allocation request awaiting memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingRequest {
    pub pid: Pid,
    pub size: Size,
}

/// Outcome of an allocation request that did not error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationOutcome {
    /// A block was found; the process now owns memory at this address
    Allocated(Address),
    /// No single free block fits; the request was parked in FIFO order
    Queued,
}

impl AllocationOutcome {
    pub fn address(&self) -> Option<Address> {
        match self {
            AllocationOutcome::Allocated(addr) => Some(*addr),
            AllocationOutcome::Queued => None,
        }
    }

    pub fn is_queued(&self) -> bool {
        matches!(self, AllocationOutcome::Queued)
    }
}

/// Read-only view of the full engine state, used purely for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySnapshot {
    pub blocks: Vec<MemoryBlock>,
    pub active_processes: Vec<ProcessRecord>,
    pub waiting: Vec<WaitingRequest>,
}
