/*!
 * System Limits and Constants
 *
 * Centralized location for all simulator-wide limits.
 * Values match the classic fixed-partition exercise this models.
 */

// =============================================================================
// TABLE LIMITS
// =============================================================================

/// Maximum number of memory blocks that can be managed
/// Splitting grows the block table, so runs with many small allocations
/// against a large partition hit this bound first
pub const MAX_BLOCKS: usize = 50;

/// Maximum number of process records (active or retired)
/// Records are never removed, only deactivated, so this bounds the
/// total number of successful allocations in one run
pub const MAX_PROCESSES: usize = 50;

/// Maximum number of requests parked in the wait queue
pub const MAX_WAIT_QUEUE: usize = 50;
