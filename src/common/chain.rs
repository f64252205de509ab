//! Shared, re-pointable indirection cells

use crate::error::ChainError;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
enum Cell<T> {
    End(T),
    Link(RefChain<T>),
}

/// A chain of references ending in a value.
///
/// Every handle into the chain reads and writes the value held by the
/// terminal cell, so re-pointing the terminal cell with [`RefChain::move_end`]
/// redirects all handles at once.
///
/// # Example
/// ```
/// # use araceae::common::RefChain;
/// let target = RefChain::new(1);
/// let alias = RefChain::link(&target);
/// alias.set(5);
/// assert_eq!(target.get(), 5);
/// ```
#[derive(Debug)]
pub struct RefChain<T> {
    cell: Rc<RefCell<Cell<T>>>,
}

impl<T> Clone for RefChain<T> {
    fn clone(&self) -> Self {
        RefChain {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T> RefChain<T> {
    /// Create a terminal cell holding `value`
    pub fn new(value: T) -> Self {
        RefChain {
            cell: Rc::new(RefCell::new(Cell::End(value))),
        }
    }

    /// Create a cell that forwards to `next`
    pub fn link(next: &RefChain<T>) -> Self {
        RefChain {
            cell: Rc::new(RefCell::new(Cell::Link(next.clone()))),
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(*self.cell.borrow(), Cell::End(_))
    }

    /// The terminal cell this handle resolves to
    pub fn end(&self) -> RefChain<T> {
        let mut current = self.clone();
        loop {
            let next = match &*current.cell.borrow() {
                Cell::End(_) => None,
                Cell::Link(next) => Some(next.clone()),
            };
            match next {
                Some(next) => current = next,
                None => return current,
            }
        }
    }

    /// Write `value` into the terminal cell
    pub fn set(&self, value: T) {
        match &mut *self.cell.borrow_mut() {
            Cell::End(slot) => *slot = value,
            Cell::Link(next) => next.set(value),
        }
    }

    /// Replace the terminal cell's value with a link to `next`.
    ///
    /// The old value is dropped and every handle now resolves through
    /// `next`.
    pub fn move_end(&self, next: &RefChain<T>) -> Result<(), ChainError> {
        let end = self.end();
        if Rc::ptr_eq(&end.cell, &next.end().cell) {
            return Err(ChainError::Cycle);
        }
        *end.cell.borrow_mut() = Cell::Link(next.clone());
        Ok(())
    }

    /// Whether both handles share the same terminal cell
    pub fn same_end(&self, other: &RefChain<T>) -> bool {
        Rc::ptr_eq(&self.end().cell, &other.end().cell)
    }
}

impl<T: Clone> RefChain<T> {
    /// Read the value held by the terminal cell
    pub fn get(&self) -> T {
        match &*self.cell.borrow() {
            Cell::End(value) => value.clone(),
            Cell::Link(next) => next.get(),
        }
    }
}
