// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// Shared record of which source was pulled, in pull order
#[derive(Clone, Default, Debug)]
pub struct PullLog(Rc<RefCell<Vec<&'static str>>>);
impl PullLog {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn entries(&self) -> Vec<&'static str> {
        self.0.borrow().clone()
    }
    pub fn clear(&self) {
        self.0.borrow_mut().clear()
    }
    fn push(&self, label: &'static str) {
        self.0.borrow_mut().push(label)
    }
}

/// Iterator wrapper that records every call to `next()`, including calls past the end of the
/// underlying sequence
pub struct ObservedIter<I: Iterator> {
    label: &'static str,
    inner: I,
    pulls: Rc<Cell<usize>>,
    log: Option<PullLog>,
}
impl<I: Iterator> ObservedIter<I> {
    pub fn new(label: &'static str, inner: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            label,
            inner: inner.into_iter(),
            pulls: Rc::new(Cell::new(0)),
            log: None,
        }
    }
    pub fn with_log(self, log: &PullLog) -> Self {
        Self {
            log: Some(log.clone()),
            ..self
        }
    }
    /// Handle that remains readable after the iterator has been moved into a driver
    pub fn counter(&self) -> PullCounter {
        PullCounter(Rc::clone(&self.pulls))
    }
}
impl<I: Iterator> Iterator for ObservedIter<I> {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pulls.set(self.pulls.get() + 1);
        if let Some(log) = &self.log {
            log.push(self.label);
        }
        self.inner.next()
    }
}

#[derive(Clone, Debug)]
pub struct PullCounter(Rc<Cell<usize>>);
impl PullCounter {
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// Yields the provided items as `Ok` values followed by a single `Err`
pub fn failing_after<T>(
    items: impl IntoIterator<Item = T>,
    message: &str,
) -> impl Iterator<Item = Result<T, String>> {
    items
        .into_iter()
        .map(Ok)
        .chain(std::iter::once(Err(String::from(message))))
}

