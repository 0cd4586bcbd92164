/*!
# Sequential Containers

Thin FIFO/LIFO wrappers over [`VecDeque`] and [`Vec`] used as traversal frontiers.

Removing from an empty container through [`Queue::dequeue`] or [`Stack::pop`] is a
programming error and panics. Use [`Queue::try_dequeue`] / [`Stack::try_pop`] if emptiness
is not known beforehand.
*/

use std::collections::VecDeque;

/// First-in-first-out container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Appends `item` to the back of the queue
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the front of the queue.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn dequeue(&mut self) -> T {
        match self.items.pop_front() {
            Some(item) => item,
            None => panic!("dequeue on an empty queue"),
        }
    }

    /// Removes and returns the front of the queue or `None` if it is empty
    pub fn try_dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the front of the queue without removing it.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn peek(&self) -> &T {
        match self.items.front() {
            Some(item) => item,
            None => panic!("peek on an empty queue"),
        }
    }

    /// Returns the number of elements in the queue
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns *true* if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Last-in-first-out container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Puts `item` on top of the stack
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top of the stack.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> T {
        match self.items.pop() {
            Some(item) => item,
            None => panic!("pop on an empty stack"),
        }
    }

    /// Removes and returns the top of the stack or `None` if it is empty
    pub fn try_pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top of the stack without removing it.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn peek(&self) -> &T {
        match self.items.last() {
            Some(item) => item,
            None => panic!("peek on an empty stack"),
        }
    }

    /// Returns the number of elements in the stack
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns *true* if the stack holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pops every element of `self` and pushes it onto `receiver`.
    /// The moved elements end up on `receiver` in reversed order, i.e. the former bottom of
    /// `self` becomes the new top of `receiver`. Afterwards `self` is empty.
    ///
    /// # Examples
    /// ```
    /// use relgraph::utils::Stack;
    ///
    /// let mut holding = Stack::new();
    /// holding.push(1);
    /// holding.push(2);
    ///
    /// let mut stack = Stack::new();
    /// holding.unload_onto(&mut stack);
    ///
    /// assert!(holding.is_empty());
    /// assert_eq!(stack.pop(), 1);
    /// assert_eq!(stack.pop(), 2);
    /// ```
    pub fn unload_onto(&mut self, receiver: &mut Stack<T>) {
        receiver.items.extend(self.items.drain(..).rev());
    }
}
