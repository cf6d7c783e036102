/*!
 * Wait Queue
 * Bounded circular FIFO of unsatisfied allocation requests
 */

use crate::memory::types::{MemoryError, MemoryResult, WaitingRequest};

/// Ring buffer over fixed storage with explicit front and count
///
/// Strict FIFO: dequeue order is enqueue order, with no reordering or
/// priority even when a later request could be satisfied while the head
/// cannot. Count and capacity are tracked independently of the slot
/// indices so the buffer wraps cleanly.
#[derive(Debug)]
pub(super) struct WaitQueue {
    slots: Box<[Option<WaitingRequest>]>,
    front: usize,
    len: usize,
}

impl WaitQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
            front: 0,
            len: 0,
        }
    }

    pub fn enqueue(&mut self, request: WaitingRequest) -> MemoryResult<()> {
        if self.len == self.slots.len() {
            return Err(MemoryError::WaitQueueFull {
                limit: self.slots.len(),
                pid: request.pid,
            });
        }
        let rear = (self.front + self.len) % self.slots.len();
        self.slots[rear] = Some(request);
        self.len += 1;
        Ok(())
    }

    pub fn peek_front(&self) -> Option<WaitingRequest> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.front]
    }

    pub fn dequeue_front(&mut self) -> Option<WaitingRequest> {
        if self.len == 0 {
            return None;
        }
        let request = self.slots[self.front].take();
        self.front = (self.front + 1) % self.slots.len();
        self.len -= 1;
        request
    }

    /// Requests in FIFO order, front first
    pub fn iter(&self) -> impl Iterator<Item = WaitingRequest> + '_ {
        (0..self.len).filter_map(move |i| self.slots[(self.front + i) % self.slots.len()])
    }

    pub fn len(&self) -> usize {
        self.len
    }
}
