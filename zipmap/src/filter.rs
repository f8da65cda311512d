// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::{iter::once, iter::FusedIterator};

use tracing::trace;

use crate::{
    core::{validate_arity, Applicable, Truthy},
    error::Error,
    zip_map::Driver,
};

/// Lazy sequence of the driver elements for which `predicate` returns a truthy value
pub struct Filter<'a, T, F> {
    predicate: F,
    driver: Driver<'a, T>,
    primed: bool,
    terminal: bool,
}
impl<'a, T, F> Filter<'a, T, F>
where
    T: Clone + Truthy,
    F: Applicable<T>,
{
    pub fn new(predicate: F, driver: Driver<'a, T>) -> Result<Self, Error> {
        if let Some(arity) = predicate.arity() {
            validate_arity(&arity, 1)?;
        }
        Ok(Self {
            predicate,
            driver,
            primed: false,
            terminal: false,
        })
    }
    fn fail(&mut self, err: Error) -> Option<Result<T, Error>> {
        self.terminal = true;
        Some(Err(err))
    }
}
impl<'a, T, F> Iterator for Filter<'a, T, F>
where
    T: Clone + Truthy,
    F: Applicable<T>,
{
    type Item = Result<T, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.terminal {
            return None;
        }
        if !self.primed {
            self.primed = true;
            match self.driver.prime() {
                Ok(true) => {}
                Ok(false) => {
                    self.terminal = true;
                    return None;
                }
                Err(message) => return self.fail(Error::Driver { slot: 0, message }),
            }
        }
        loop {
            let (value, has_next) = match self.driver.advance() {
                Ok((Some(value), has_next)) => (value, has_next),
                Ok((None, _)) => {
                    self.terminal = true;
                    return None;
                }
                Err(message) => return self.fail(Error::Driver { slot: 0, message }),
            };
            if !has_next {
                self.terminal = true;
            }
            match self.predicate.apply(once(value.clone())) {
                Ok(result) if result.is_truthy() => return Some(Ok(value)),
                Ok(_) => trace!("filter rejected element"),
                Err(message) => return Some(Err(Error::Apply(message))),
            }
            if !has_next {
                return None;
            }
        }
    }
}
impl<'a, T, F> FusedIterator for Filter<'a, T, F>
where
    T: Clone + Truthy,
    F: Applicable<T>,
{
}

pub fn filter<'a, T, F>(predicate: F, driver: Driver<'a, T>) -> Result<Filter<'a, T, F>, Error>
where
    T: Clone + Truthy,
    F: Applicable<T>,
{
    Filter::new(predicate, driver)
}
