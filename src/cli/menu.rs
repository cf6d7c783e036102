/*!
 * Interactive Menu
 * Prompt loop driving the engine; all outcomes are printed, never fatal
 */

use crate::cli::render;
use crate::core::limits;
use crate::core::types::{Pid, Size};
use crate::memory::{AllocationOutcome, MemoryManager};
use std::io::{self, BufRead, Write};

/// Run the simulator over stdin/stdout
pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(&mut stdin.lock(), &mut stdout.lock())
}

/// Menu loop against arbitrary streams (testable)
pub fn run_with<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    writeln!(out, "System Limitations:")?;
    writeln!(out, "- Maximum Memory Blocks: {}", limits::MAX_BLOCKS)?;
    writeln!(out, "- Maximum Processes: {}", limits::MAX_PROCESSES)?;
    writeln!(out, "- Maximum Waiting Queue Size: {}", limits::MAX_WAIT_QUEUE)?;
    writeln!(out, "---------------------------------------------")?;

    let num_blocks = match prompt_int(
        input,
        out,
        "Enter the number of memory blocks you want to simulate: ",
        1,
        limits::MAX_BLOCKS as i64,
    )? {
        Some(n) => n as usize,
        None => return Ok(()),
    };

    let mut sizes: Vec<Size> = Vec::with_capacity(num_blocks);
    for i in 0..num_blocks {
        let prompt = format!("Enter size of memory block {} (in KB): ", i + 1);
        match prompt_int(input, out, &prompt, 1, i64::MAX)? {
            Some(size) => sizes.push(size as Size),
            None => return Ok(()),
        }
    }

    let mut manager = match MemoryManager::initialize(&sizes) {
        Ok(manager) => manager,
        Err(err) => {
            writeln!(out, "Initialization failed: {err}")?;
            return Ok(());
        }
    };

    // The caller owns the pid counter; ids are fresh and never reused
    let mut next_pid: Pid = 1;

    loop {
        writeln!(out, "\n----First Fit Memory Allocation Simulator----\n")?;
        render::print_layout(out, &manager.snapshot())?;
        writeln!(out, "--Main Menu--")?;
        writeln!(out, "1. Allocate Memory")?;
        writeln!(out, "2. Free Memory")?;
        writeln!(out, "3. Dump Snapshot (JSON)")?;
        writeln!(out, "4. Exit")?;

        let choice = match prompt_int(input, out, "Enter your choice: ", 1, 4)? {
            Some(choice) => choice,
            None => return Ok(()),
        };

        match choice {
            1 => {
                let size = match prompt_int(
                    input,
                    out,
                    "Enter memory size to allocate (in KB): ",
                    1,
                    i64::MAX,
                )? {
                    Some(size) => size as Size,
                    None => return Ok(()),
                };
                let pid = next_pid;
                next_pid += 1;
                match manager.allocate(pid, size) {
                    Ok(AllocationOutcome::Allocated(address)) => {
                        writeln!(out, "Memory allocated at address {address} for process {pid}")?
                    }
                    Ok(AllocationOutcome::Queued) => {
                        writeln!(out, "Process {pid} added to wait queue")?
                    }
                    Err(err) => writeln!(out, "Allocation failed: {err}")?,
                }
            }
            2 => {
                if next_pid == 1 {
                    writeln!(out, "No processes have been created yet")?;
                    continue;
                }
                let pid = match prompt_int(
                    input,
                    out,
                    "Enter process number (ID) to free memory: ",
                    1,
                    i64::from(next_pid - 1),
                )? {
                    Some(pid) => pid as Pid,
                    None => return Ok(()),
                };
                match manager.free(pid) {
                    Ok(()) => writeln!(out, "Memory for process {pid} freed")?,
                    Err(err) => writeln!(out, "Free failed: {err}")?,
                }
            }
            3 => {
                let json = serde_json::to_string_pretty(&manager.snapshot())
                    .map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
            }
            _ => {
                writeln!(out, "Exiting...")?;
                return Ok(());
            }
        }
    }
}

/// Validated integer input: re-prompts until a number in range arrives,
/// returns None on end of input
fn prompt_int<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    min: i64,
    max: i64,
) -> io::Result<Option<i64>> {
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<i64>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
            _ => writeln!(
                out,
                "Invalid input. Please enter an integer between {min} and {max}."
            )?,
        }
    }
}
