/*!
 * Allocation Tests
 * First-fit placement, splitting, and capacity handling
 */

use memsim::memory::types::{MemoryBlock, ProcessRecord};
use memsim::{AllocationOutcome, MemoryError, MemoryManager, SimLimits};
use pretty_assertions::assert_eq;

#[test]
fn test_first_fit_splits_the_first_large_enough_block() {
    // 212 KB into [100, 500, 200, 300, 600]: the 100 KB block is too
    // small, so the 500 KB block at address 100 wins
    let mut manager = MemoryManager::initialize(&[100, 500, 200, 300, 600]).unwrap();

    let outcome = manager.allocate(1, 212).unwrap();
    assert_eq!(outcome, AllocationOutcome::Allocated(100));

    let snapshot = manager.snapshot();
    assert_eq!(snapshot.blocks.len(), 6);
    assert_eq!(
        snapshot.blocks[1],
        MemoryBlock {
            start: 100,
            size: 212,
            free: false
        }
    );
    assert_eq!(
        snapshot.blocks[2],
        MemoryBlock {
            start: 312,
            size: 288,
            free: true
        }
    );
    assert_eq!(
        snapshot.active_processes,
        vec![ProcessRecord {
            pid: 1,
            address: 100,
            size: 212,
            active: true
        }]
    );
}

#[test]
fn test_first_fit_prefers_lowest_address_over_best_fit() {
    // A later exact-size block never beats an earlier larger one
    let mut manager = MemoryManager::initialize(&[500, 200]).unwrap();
    let outcome = manager.allocate(1, 200).unwrap();
    assert_eq!(outcome, AllocationOutcome::Allocated(0));

    let snapshot = manager.snapshot();
    assert!(!snapshot.blocks[0].free);
    assert!(snapshot.blocks[2].free, "the 200 KB block stays untouched");
}

#[test]
fn test_exact_fit_marks_without_splitting() {
    let mut manager = MemoryManager::initialize(&[100, 500]).unwrap();
    let outcome = manager.allocate(1, 100).unwrap();
    assert_eq!(outcome, AllocationOutcome::Allocated(0));
    assert_eq!(manager.snapshot().blocks.len(), 2);
}

#[test]
fn test_info_tracks_used_and_free() {
    let mut manager = MemoryManager::initialize(&[100, 500, 200, 300, 600]).unwrap();
    assert_eq!(manager.info(), (1700, 0, 1700));

    manager.allocate(1, 212).unwrap();
    assert_eq!(manager.info(), (1700, 212, 1488));
    assert_eq!(manager.total_free(), 1488);
}

#[test]
fn test_initialization_rejects_zero_sizes() {
    let err = MemoryManager::initialize(&[100, 0, 200]).unwrap_err();
    assert!(matches!(err, MemoryError::InvalidConfig(_)));
    assert!(!err.is_capacity_error());
}

#[test]
fn test_initialization_rejects_empty_partition() {
    let err = MemoryManager::initialize(&[]).unwrap_err();
    assert!(matches!(err, MemoryError::InvalidConfig(_)));
}

#[test]
fn test_initialization_rejects_too_many_blocks() {
    let limits = SimLimits::default().with_max_blocks(2);
    let err = MemoryManager::initialize_with_limits(&[100, 200, 300], limits).unwrap_err();
    assert!(matches!(err, MemoryError::InvalidConfig(_)));
}

#[test]
fn test_block_table_full_aborts_split_cleanly() {
    // Table already at its limit: a split would add a block, so the
    // allocation errors out and the layout stays untouched
    let limits = SimLimits::default().with_max_blocks(2);
    let mut manager = MemoryManager::initialize_with_limits(&[100, 500], limits).unwrap();

    let before = manager.snapshot();
    let err = manager.allocate(1, 50).unwrap_err();
    assert_eq!(err, MemoryError::BlockTableFull { limit: 2 });
    assert!(err.is_capacity_error());
    assert_eq!(manager.snapshot(), before);
}

#[test]
fn test_process_table_full_aborts_before_any_mutation() {
    let limits = SimLimits::default().with_max_processes(1);
    let mut manager = MemoryManager::initialize_with_limits(&[100, 500], limits).unwrap();
    manager.allocate(1, 50).unwrap();

    let before = manager.snapshot();
    let err = manager.allocate(2, 50).unwrap_err();
    assert_eq!(err, MemoryError::ProcessTableFull { limit: 1 });
    assert_eq!(manager.snapshot(), before);
}

#[test]
fn test_manager_is_debug_formattable() {
    // Result helpers like unwrap_err need the engine to be Debug
    let manager = MemoryManager::initialize(&[100, 500]).unwrap();
    let repr = format!("{manager:?}");
    assert!(repr.contains("MemoryManager"));
}

#[test]
fn test_snapshot_is_read_only() {
    let mut manager = MemoryManager::initialize(&[100, 500]).unwrap();
    manager.allocate(1, 212).unwrap();

    let first = manager.snapshot();
    let second = manager.snapshot();
    assert_eq!(first, second);
}
