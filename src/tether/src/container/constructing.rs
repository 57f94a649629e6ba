use std::collections::HashMap;
use std::thread::{self, ThreadId};

use parking_lot::Mutex;

use crate::key::Key;

/// Keys being resolved on each thread, used to detect bindings which
/// request themselves, directly or not.
#[derive(Default)]
pub struct Constructing {
    stacks: Mutex<HashMap<ThreadId, Vec<Box<dyn Key>>>>,
}

impl Constructing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as being resolved by the current thread until the
    /// returned guard is dropped. Returns [`None`] if the current thread is
    /// already resolving `key`.
    pub fn enter(&self, key: &dyn Key) -> Option<ConstructingGuard<'_>> {
        let on_thread = thread::current().id();
        let mut stacks = self.stacks.lock();
        let stack = stacks.entry(on_thread).or_default();
        if stack.iter().any(|constructing| constructing.as_ref() == key) {
            return None;
        }
        stack.push(key.dyn_clone());
        Some(ConstructingGuard {
            constructing: self,
            on_thread,
        })
    }

    fn leave(&self, on_thread: ThreadId) {
        let mut stacks = self.stacks.lock();
        if let Some(stack) = stacks.get_mut(&on_thread) {
            stack.pop();
            if stack.is_empty() {
                stacks.remove(&on_thread);
            }
        }
    }
}

pub struct ConstructingGuard<'a> {
    constructing: &'a Constructing,
    on_thread: ThreadId,
}

impl Drop for ConstructingGuard<'_> {
    fn drop(&mut self) {
        self.constructing.leave(self.on_thread);
    }
}
