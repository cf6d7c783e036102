/*!
 * Layout Renderer
 * Human-readable view of a memory snapshot
 */

use crate::memory::MemorySnapshot;
use std::io::{self, Write};

pub fn print_layout<W: Write>(out: &mut W, snapshot: &MemorySnapshot) -> io::Result<()> {
    writeln!(out, "Memory Blocks:")?;
    for (i, block) in snapshot.blocks.iter().enumerate() {
        writeln!(
            out,
            "Block {}: Start_address={}, Size={}KB, {}",
            i + 1,
            block.start,
            block.size,
            if block.free { "Free" } else { "Allocated" }
        )?;
    }

    writeln!(out, "\nActive Processes:")?;
    if snapshot.active_processes.is_empty() {
        writeln!(out, "No active processes")?;
    } else {
        for process in &snapshot.active_processes {
            writeln!(
                out,
                "Process {}: Address={}, Size={}KB",
                process.pid, process.address, process.size
            )?;
        }
    }

    writeln!(out, "\nWaiting Queue:")?;
    if snapshot.waiting.is_empty() {
        writeln!(out, "No processes waiting")?;
    } else {
        for request in &snapshot.waiting {
            writeln!(
                out,
                "Process {}: Waiting for {}KB",
                request.pid, request.size
            )?;
        }
    }
    writeln!(out, "\n---------------------------------------------\n")?;
    Ok(())
}
