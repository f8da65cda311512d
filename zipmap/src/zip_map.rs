// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::{fmt::Display, iter::FusedIterator};

use tracing::{debug, trace};

use crate::{
    core::{validate_arity, Applicable},
    error::Error,
};

/// Forward-only cursor over a lazy sequence, holding at most one in-flight element
pub struct Driver<'a, T> {
    source: Box<dyn Iterator<Item = Result<T, String>> + 'a>,
    current: Option<T>,
}
impl<'a, T: 'a> Driver<'a, T> {
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self {
            source: Box::new(source.into_iter().map(Ok)),
            current: None,
        }
    }
    /// Create a driver from a fallible sequence, where an `Err` item is reported as a failure to
    /// advance the driver
    pub fn try_new<I, E>(source: I) -> Self
    where
        I: IntoIterator<Item = Result<T, E>>,
        I::IntoIter: 'a,
        E: Display + 'a,
    {
        Self {
            source: Box::new(
                source
                    .into_iter()
                    .map(|item| item.map_err(|err| format!("{}", err))),
            ),
            current: None,
        }
    }
}
impl<'a, T> Driver<'a, T> {
    pub(crate) fn prime(&mut self) -> Result<bool, String> {
        self.current = self.source.next().transpose()?;
        Ok(self.current.is_some())
    }
    /// Take the current element and move on to the next one, returning whether a further element
    /// is available
    pub(crate) fn advance(&mut self) -> Result<(Option<T>, bool), String> {
        let value = self.current.take();
        self.current = self.source.next().transpose()?;
        Ok((value, self.current.is_some()))
    }
}
impl<'a, T> std::fmt::Debug for Driver<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<driver>")
    }
}

#[derive(Debug)]
pub enum Arg<'a, T> {
    Constant(T),
    Driver(Driver<'a, T>),
}
impl<'a, T: 'a> Arg<'a, T> {
    pub fn constant(value: impl Into<T>) -> Self {
        Self::Constant(value.into())
    }
    pub fn driver<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self::Driver(Driver::new(source))
    }
    pub fn is_driver(&self) -> bool {
        matches!(self, Self::Driver(_))
    }
}
impl<'a, T> From<Driver<'a, T>> for Arg<'a, T> {
    fn from(driver: Driver<'a, T>) -> Self {
        Self::Driver(driver)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ZipMapState {
    /// Drivers have not yet been asked for their first element
    Pending,
    Active,
    Terminal,
}

/// Lazy sequence of the results of applying `target` to the zipped elements of every driver
/// argument, with constant arguments passed through unchanged on every step.
///
/// All drivers are advanced exactly once per output element, in argument order, even when an
/// earlier driver has already been exhausted. The sequence ends once any driver runs out. An
/// argument list with no drivers produces an unbounded sequence.
pub struct ZipMap<'a, T, F> {
    target: F,
    args: Vec<Arg<'a, T>>,
    state: ZipMapState,
    step: usize,
}
impl<'a, T, F> ZipMap<'a, T, F>
where
    T: Clone,
    F: Applicable<T>,
{
    pub fn new(target: F, args: impl IntoIterator<Item = Arg<'a, T>>) -> Result<Self, Error> {
        let args = args.into_iter().collect::<Vec<_>>();
        if let Some(arity) = target.arity() {
            validate_arity(&arity, args.len())?;
        }
        let num_drivers = args.iter().filter(|arg| arg.is_driver()).count();
        debug!(num_args = args.len(), num_drivers, "create zip_map");
        if num_drivers == 0 {
            debug!("zip_map has no driver arguments and will never terminate");
        }
        Ok(Self {
            target,
            args,
            state: ZipMapState::Pending,
            step: 0,
        })
    }
    pub fn num_drivers(&self) -> usize {
        self.args.iter().filter(|arg| arg.is_driver()).count()
    }
    pub fn is_terminal(&self) -> bool {
        self.state == ZipMapState::Terminal
    }
    fn prime(&mut self) -> Result<bool, Error> {
        let mut has_more = true;
        for (slot, arg) in self.args.iter_mut().enumerate() {
            if let Arg::Driver(driver) = arg {
                let has_current = driver
                    .prime()
                    .map_err(|message| Error::Driver { slot, message })?;
                has_more = has_more && has_current;
            }
        }
        Ok(has_more)
    }
    fn resolve_args(&mut self) -> Result<(Vec<T>, bool), Error> {
        let mut has_more = true;
        let mut resolved = Vec::with_capacity(self.args.len());
        for (slot, arg) in self.args.iter_mut().enumerate() {
            match arg {
                Arg::Constant(value) => resolved.push(value.clone()),
                Arg::Driver(driver) => {
                    let (value, has_next) = driver
                        .advance()
                        .map_err(|message| Error::Driver { slot, message })?;
                    trace!(step = self.step, slot, has_next, "advance driver");
                    match value {
                        Some(value) => resolved.push(value),
                        None => {
                            return Err(Error::Driver {
                                slot,
                                message: String::from("Driver has no current element"),
                            })
                        }
                    }
                    has_more = has_more && has_next;
                }
            }
        }
        Ok((resolved, has_more))
    }
    fn terminate(&mut self) {
        debug!(steps = self.step, "zip_map terminated");
        self.state = ZipMapState::Terminal;
    }
}
impl<'a, T, F> Iterator for ZipMap<'a, T, F>
where
    T: Clone,
    F: Applicable<T>,
{
    type Item = Result<T, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            ZipMapState::Terminal => return None,
            ZipMapState::Active => {}
            ZipMapState::Pending => match self.prime() {
                Ok(true) => self.state = ZipMapState::Active,
                Ok(false) => {
                    self.terminate();
                    return None;
                }
                Err(err) => {
                    self.terminate();
                    return Some(Err(err));
                }
            },
        }
        let (args, has_more) = match self.resolve_args() {
            Ok(result) => result,
            Err(err) => {
                self.terminate();
                return Some(Err(err));
            }
        };
        trace!(step = self.step, num_args = args.len(), "apply");
        self.step += 1;
        if !has_more {
            self.terminate();
        }
        // Target failures leave the drivers advanced so the caller may keep pulling
        Some(self.target.apply(args.into_iter()).map_err(Error::Apply))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            ZipMapState::Terminal => (0, Some(0)),
            _ if self.num_drivers() == 0 => (usize::MAX, None),
            _ => (0, None),
        }
    }
}
impl<'a, T, F> FusedIterator for ZipMap<'a, T, F>
where
    T: Clone,
    F: Applicable<T>,
{
}

/// Lift `target` into an element-wise transformer over the given arguments
pub fn zip_map<'a, T, F>(
    target: F,
    args: impl IntoIterator<Item = Arg<'a, T>>,
) -> Result<ZipMap<'a, T, F>, Error>
where
    T: Clone,
    F: Applicable<T>,
{
    ZipMap::new(target, args)
}

#[cfg(test)]
mod tests {
    use std::iter::once;

    use zipmap_test_utils::{failing_after, ObservedIter, PullLog};

    use super::*;
    use crate::core::{Arity, NativeFunction};

    fn uppercase() -> impl Applicable<String> {
        NativeFunction::new(Arity::any(1, 0, false), |args: Vec<String>| {
            Ok(args[0].to_uppercase())
        })
    }

    fn concat() -> impl Applicable<String> {
        NativeFunction::new(Arity::any(2, 0, false), |args: Vec<String>| {
            Ok(args.concat())
        })
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| String::from(*value)).collect()
    }

    #[test]
    fn single_driver() {
        let results = zip_map(
            uppercase(),
            vec![Arg::driver(strings(&["a", "bb", "ccc"]))],
        )
        .unwrap()
        .collect::<Result<Vec<_>, _>>();
        assert_eq!(results, Ok(strings(&["A", "BB", "CCC"])));
    }

    #[test]
    fn driver_with_constant() {
        let results = zip_map(
            concat(),
            vec![
                Arg::driver(strings(&["x", "y"])),
                Arg::constant(" suffix"),
            ],
        )
        .unwrap()
        .collect::<Result<Vec<_>, _>>();
        assert_eq!(results, Ok(strings(&["x suffix", "y suffix"])));
    }

    #[test]
    fn shortest_driver_determines_length() {
        let results = zip_map(
            concat(),
            vec![
                Arg::driver(strings(&["x", "y", "z"])),
                Arg::driver(strings(&["1", "2"])),
            ],
        )
        .unwrap()
        .collect::<Result<Vec<_>, _>>();
        assert_eq!(results, Ok(strings(&["x1", "y2"])));
        let results = zip_map(
            concat(),
            vec![
                Arg::driver(strings(&["1"])),
                Arg::driver(strings(&["x", "y", "z"])),
            ],
        )
        .unwrap()
        .collect::<Result<Vec<_>, _>>();
        assert_eq!(results, Ok(strings(&["1x"])));
    }

    #[test]
    fn terminal_after_last_element() {
        let mut results = zip_map(uppercase(), vec![Arg::driver(strings(&["a"]))]).unwrap();
        assert!(!results.is_terminal());
        assert_eq!(results.next(), Some(Ok(String::from("A"))));
        assert!(results.is_terminal());
        assert_eq!(results.next(), None);
        assert_eq!(results.next(), None);
    }

    #[test]
    fn constant_arguments_are_unbounded() {
        let results = zip_map(
            concat(),
            vec![Arg::constant("a"), Arg::constant("b")],
        )
        .unwrap();
        assert_eq!(results.size_hint(), (usize::MAX, None));
        let results = results.take(1000).collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(results.len(), 1000);
        assert!(results.iter().all(|value| value == "ab"));
    }

    #[test]
    fn empty_driver_produces_no_output() {
        let calls = std::cell::Cell::new(0);
        let target = NativeFunction::new(Arity::any(1, 0, false), |args: Vec<String>| {
            calls.set(calls.get() + 1);
            Ok(args.concat())
        });
        let mut results = zip_map(&target, vec![Arg::driver(Vec::<String>::new())]).unwrap();
        assert_eq!(results.next(), None);
        assert!(results.is_terminal());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn construction_does_not_pull_drivers() {
        let source = ObservedIter::new("left", strings(&["a", "b"]));
        let pulls = source.counter();
        let mut results = zip_map(uppercase(), vec![Arg::driver(source)]).unwrap();
        assert_eq!(pulls.get(), 0);
        assert_eq!(results.next(), Some(Ok(String::from("A"))));
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn drivers_advance_once_per_step_in_slot_order() {
        let log = PullLog::new();
        let left = ObservedIter::new("left", strings(&["x", "y", "z"])).with_log(&log);
        let right = ObservedIter::new("right", strings(&["1", "2"])).with_log(&log);
        let (left_pulls, right_pulls) = (left.counter(), right.counter());
        let mut results = zip_map(concat(), vec![Arg::driver(left), Arg::driver(right)]).unwrap();
        assert_eq!(results.next(), Some(Ok(String::from("x1"))));
        assert_eq!(log.entries(), vec!["left", "right", "left", "right"]);
        log.clear();
        assert_eq!(results.next(), Some(Ok(String::from("y2"))));
        // The right driver is exhausted but the left driver is still advanced
        assert_eq!(log.entries(), vec!["left", "right"]);
        assert_eq!(results.next(), None);
        assert_eq!((left_pulls.get(), right_pulls.get()), (3, 3));
    }

    #[test]
    fn exhausted_earlier_driver_does_not_skip_later_drivers() {
        let log = PullLog::new();
        let left = ObservedIter::new("left", strings(&["a"])).with_log(&log);
        let right = ObservedIter::new("right", strings(&["1", "2", "3"])).with_log(&log);
        let right_pulls = right.counter();
        let results = zip_map(concat(), vec![Arg::driver(left), Arg::driver(right)])
            .unwrap()
            .collect::<Result<Vec<_>, _>>();
        assert_eq!(results, Ok(strings(&["a1"])));
        assert_eq!(log.entries(), vec!["left", "right", "left", "right"]);
        assert_eq!(right_pulls.get(), 2);
    }

    #[test]
    fn target_failures_propagate() {
        let target = NativeFunction::new(Arity::any(1, 0, false), |args: Vec<i64>| {
            match args[0] {
                0 => Err(String::from("Division by zero")),
                value => Ok(100 / value),
            }
        });
        let mut results = zip_map(target, vec![Arg::driver(vec![5, 0, 10])]).unwrap();
        assert_eq!(results.next(), Some(Ok(20)));
        assert_eq!(
            results.next(),
            Some(Err(Error::Apply(String::from("Division by zero"))))
        );
        assert_eq!(results.next(), Some(Ok(10)));
        assert_eq!(results.next(), None);
    }

    #[test]
    fn driver_failures_propagate() {
        let target = NativeFunction::new(Arity::any(2, 0, false), |args: Vec<i64>| {
            Ok(args.into_iter().sum())
        });
        let mut results = zip_map(
            target,
            vec![
                Arg::constant(1),
                Arg::Driver(Driver::try_new(failing_after(vec![1, 2], "Connection lost"))),
            ],
        )
        .unwrap();
        assert_eq!(results.next(), Some(Ok(2)));
        assert_eq!(
            results.next(),
            Some(Err(Error::Driver {
                slot: 1,
                message: String::from("Connection lost"),
            }))
        );
        assert!(results.is_terminal());
        assert_eq!(results.next(), None);
    }

    #[test]
    fn failing_first_element() {
        let mut results = zip_map(
            uppercase(),
            vec![Arg::Driver(Driver::try_new(failing_after(
                Vec::<String>::new(),
                "Unavailable",
            )))],
        )
        .unwrap();
        assert_eq!(
            results.next(),
            Some(Err(Error::Driver {
                slot: 0,
                message: String::from("Unavailable"),
            }))
        );
        assert_eq!(results.next(), None);
    }

    #[test]
    fn invalid_argument_count() {
        let result = zip_map(uppercase(), once(Arg::constant("a")).chain(once(Arg::constant("b"))));
        assert_eq!(
            result.err(),
            Some(Error::InvalidArity {
                expected: Arity::any(1, 0, false),
                received: 2,
            })
        );
    }
}
