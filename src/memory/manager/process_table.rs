/*!
 * Process Table
 * Bookkeeping of which process owns which address range
 */

use crate::core::types::{Address, Pid, Size};
use crate::memory::types::{MemoryError, MemoryResult, ProcessRecord};

/// Append-only table of allocation records
///
/// Entries are deactivated on free but never removed, so the history
/// stays inspectable and a pid can never shadow a live allocation.
#[derive(Debug)]
pub(super) struct ProcessTable {
    entries: Vec<ProcessRecord>,
    max_processes: usize,
}

impl ProcessTable {
    pub fn new(max_processes: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_processes,
        }
    }

    /// Whether another record can be appended
    ///
    /// Checked by the allocator before it mutates the block table, so a
    /// full process table never leaves a half-applied allocation.
    pub fn has_capacity(&self) -> bool {
        self.entries.len() < self.max_processes
    }

    /// Error-typed form of the capacity check
    pub fn ensure_capacity(&self) -> MemoryResult<()> {
        if self.has_capacity() {
            Ok(())
        } else {
            Err(MemoryError::ProcessTableFull {
                limit: self.max_processes,
            })
        }
    }

    pub fn record(&mut self, pid: Pid, address: Address, size: Size) -> MemoryResult<()> {
        self.ensure_capacity()?;
        self.entries.push(ProcessRecord {
            pid,
            address,
            size,
            active: true,
        });
        Ok(())
    }

    pub fn find_active(&self, pid: Pid) -> Option<&ProcessRecord> {
        self.entries
            .iter()
            .find(|entry| entry.active && entry.pid == pid)
    }

    /// Deactivate the matching active entry
    pub fn deactivate(&mut self, pid: Pid) -> MemoryResult<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.active && entry.pid == pid)
            .ok_or(MemoryError::ProcessNotFound(pid))?;
        entry.active = false;
        Ok(())
    }

    pub fn active_entries(&self) -> impl Iterator<Item = ProcessRecord> + '_ {
        self.entries.iter().filter(|e| e.active).copied()
    }
}
