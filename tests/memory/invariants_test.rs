/*!
 * Invariant Tests
 * Property checks over random allocate/free sequences
 */

use memsim::MemoryManager;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Allocate(usize),
    Free(u32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1usize..=400).prop_map(Op::Allocate),
        (1u32..=30).prop_map(Op::Free),
    ]
}

proptest! {
    // After every operation: block sizes sum to the configured total,
    // the layout stays sorted and gap-free, and every active process
    // maps onto an allocated block of its exact size.
    #[test]
    fn table_conserves_size_and_contiguity(
        sizes in proptest::collection::vec(1usize..=1000, 1..=8),
        ops in proptest::collection::vec(op_strategy(), 0..=40),
    ) {
        let total: usize = sizes.iter().sum();
        let mut manager = MemoryManager::initialize(&sizes).unwrap();
        let mut next_pid = 1u32;

        for op in ops {
            match op {
                Op::Allocate(size) => {
                    let _ = manager.allocate(next_pid, size);
                    next_pid += 1;
                }
                Op::Free(pid) => {
                    let _ = manager.free(pid);
                }
            }

            let snapshot = manager.snapshot();
            let sum: usize = snapshot.blocks.iter().map(|b| b.size).sum();
            prop_assert_eq!(sum, total);

            let mut expected_start = 0;
            for block in &snapshot.blocks {
                prop_assert_eq!(block.start, expected_start);
                expected_start += block.size;
            }

            for process in &snapshot.active_processes {
                let block = snapshot.blocks.iter().find(|b| b.start == process.address);
                prop_assert!(
                    block.is_some_and(|b| !b.free && b.size == process.size),
                    "process {} at {} has no matching allocated block",
                    process.pid,
                    process.address
                );
            }

            let (info_total, used, free) = manager.info();
            prop_assert_eq!(info_total, total);
            prop_assert_eq!(used + free, total);
        }
    }
}
