/*!
 * First-Fit Memory Allocation Simulator
 * Core engine functionality exposed as a library
 */

pub mod cli;
pub mod core;
pub mod memory;

// Re-exports
pub use crate::core::types::{Address, Pid, SimLimits, Size};
pub use memory::{
    AllocationOutcome, Allocator, MemoryError, MemoryInfo, MemoryManager, MemorySnapshot,
};
