/*!
 * First-Fit Memory Allocation Simulator - Main Entry Point
 *
 * Thin interactive wrapper around the allocation engine:
 * - Prompts for the initial block partition
 * - Serializes allocate/free requests into the engine
 * - Renders the layout after every operation
 */

use memsim::cli;
use miette::IntoDiagnostic;

fn main() -> miette::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    cli::run().into_diagnostic()?;
    Ok(())
}
