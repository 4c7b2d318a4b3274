use alloc::rc::Rc;
use core::cell::Cell;

#[derive(Clone, Default)]
pub struct DropCounter {
    count: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dropped(&self) -> usize {
        self.count.get()
    }

    pub fn track<T>(&self, value: T) -> Droppable<T> {
        Droppable {
            value,
            counter: Some(self.clone()),
        }
    }
}

/// Counts its own drops, unless it was created by `Default`, so the empty
/// slots of a deque don't show up in the count.
#[derive(Default)]
pub struct Droppable<T> {
    pub value: T,
    counter: Option<DropCounter>,
}

impl<T> Drop for Droppable<T> {
    fn drop(&mut self) {
        if let Some(counter) = &self.counter {
            counter.count.set(counter.count.get() + 1);
        }
    }
}
