/*!
 * Core Types
 * Common types used across the simulator
 */

use serde::{Deserialize, Serialize};

/// Process ID type
pub type Pid = u32;

/// Address type for memory operations (KB offset from 0)
pub type Address = usize;

/// Size type for memory operations (KB)
pub type Size = usize;

/// Capacity limits for the engine's fixed-size tables
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimLimits {
    pub max_blocks: usize,
    pub max_processes: usize,
    pub max_wait_queue: usize,
}

impl Default for SimLimits {
    fn default() -> Self {
        Self {
            max_blocks: crate::core::limits::MAX_BLOCKS,
            max_processes: crate::core::limits::MAX_PROCESSES,
            max_wait_queue: crate::core::limits::MAX_WAIT_QUEUE,
        }
    }
}

impl SimLimits {
    pub fn with_wait_queue(mut self, max_wait_queue: usize) -> Self {
        self.max_wait_queue = max_wait_queue;
        self
    }

    pub fn with_max_blocks(mut self, max_blocks: usize) -> Self {
        self.max_blocks = max_blocks;
        self
    }

    pub fn with_max_processes(mut self, max_processes: usize) -> Self {
        self.max_processes = max_processes;
        self
    }
}
