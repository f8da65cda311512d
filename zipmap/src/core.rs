// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::iter::repeat;

use serde::{Deserialize, Serialize};
pub use uuid::{uuid, Uuid};

use crate::error::Error;

pub trait Uid {
    fn uid(&self) -> Uuid;
}

/// A function that can be invoked with a positional argument list.
///
/// Implementors declare their arity up front so that argument lists can be validated before any
/// arguments are evaluated. Returning `None` opts out of validation entirely.
pub trait Applicable<T> {
    fn arity(&self) -> Option<Arity>;
    fn apply(&self, args: impl ExactSizeIterator<Item = T>) -> Result<T, String>;
}
impl<'a, T, A: Applicable<T>> Applicable<T> for &'a A {
    fn arity(&self) -> Option<Arity> {
        (*self).arity()
    }
    fn apply(&self, args: impl ExactSizeIterator<Item = T>) -> Result<T, String> {
        (*self).apply(args)
    }
}

/// Values that can be interpreted as a filter condition
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}
impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}
impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().map(Truthy::is_truthy).unwrap_or(false)
    }
}

#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum ArgType {
    String,
    Int,
    Float,
    Boolean,
    List,
    /** Any value type, checked by the function body */
    Any,
}
impl std::fmt::Display for ArgType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "String"),
            Self::Int => write!(f, "Int"),
            Self::Float => write!(f, "Float"),
            Self::Boolean => write!(f, "Boolean"),
            Self::List => write!(f, "List"),
            Self::Any => write!(f, "Any"),
        }
    }
}

#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub struct FunctionArity<const REQUIRED: usize, const OPTIONAL: usize> {
    pub required: [ArgType; REQUIRED],
    pub optional: [ArgType; OPTIONAL],
    pub variadic: Option<ArgType>,
}
impl<const REQUIRED: usize, const OPTIONAL: usize> FunctionArity<REQUIRED, OPTIONAL> {
    pub fn required(&self) -> &[ArgType] {
        &self.required
    }
    pub fn optional(&self) -> &[ArgType] {
        &self.optional
    }
    pub fn variadic(&self) -> Option<ArgType> {
        self.variadic
    }
}

#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub enum Arity {
    /** Homogeneous arity arguments all share the same argument type */
    Homogeneous(HomogeneousArity),
    /** Heterogeneous arity arguments can specify a different type for each position */
    Heterogeneous(HeterogeneousArity),
}
impl<const R: usize, const O: usize> From<&'static FunctionArity<R, O>> for Arity {
    fn from(definition: &'static FunctionArity<R, O>) -> Self {
        Self::Heterogeneous(HeterogeneousArity::from(definition))
    }
}
impl Arity {
    pub fn uniform(arg_type: ArgType, required: usize, optional: usize, variadic: bool) -> Self {
        Self::Homogeneous(HomogeneousArity {
            arg_type,
            required,
            optional,
            variadic,
        })
    }
    pub fn any(required: usize, optional: usize, variadic: bool) -> Self {
        Self::uniform(ArgType::Any, required, optional, variadic)
    }
    pub fn required(&self) -> impl ExactSizeIterator<Item = ArgType> {
        match self {
            Self::Homogeneous(arity) => PositionalArityIterator::Homogeneous(
                HomogeneousArityIterator(arity.arg_type, arity.required),
            ),
            Self::Heterogeneous(arity) => {
                PositionalArityIterator::Heterogeneous(HeterogeneousArityIterator(arity.required, 0))
            }
        }
    }
    pub fn optional(&self) -> impl ExactSizeIterator<Item = ArgType> {
        match self {
            Self::Homogeneous(arity) => PositionalArityIterator::Homogeneous(
                HomogeneousArityIterator(arity.arg_type, arity.optional),
            ),
            Self::Heterogeneous(arity) => {
                PositionalArityIterator::Heterogeneous(HeterogeneousArityIterator(arity.optional, 0))
            }
        }
    }
    pub fn variadic(&self) -> Option<ArgType> {
        match self {
            Self::Homogeneous(arity) => match arity.variadic {
                true => Some(arity.arg_type),
                false => None,
            },
            Self::Heterogeneous(arity) => arity.variadic,
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = ArgType> {
        self.required()
            .chain(self.optional())
            .chain(self.variadic().into_iter().flat_map(repeat))
    }
    /// Upper bound on the number of arguments, or `None` for variadic functions
    pub fn max_args(&self) -> Option<usize> {
        match self.variadic() {
            Some(_) => None,
            None => Some(self.required().len() + self.optional().len()),
        }
    }
    pub fn accepts(&self, num_args: usize) -> bool {
        num_args >= self.required().len()
            && self
                .max_args()
                .map(|max_args| num_args <= max_args)
                .unwrap_or(true)
    }
}
impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let num_required = self.required().len();
        match self.max_args() {
            None => write!(f, "{}+", num_required),
            Some(max_args) if max_args == num_required => write!(f, "{}", num_required),
            Some(max_args) => write!(f, "{}..{}", num_required, max_args),
        }
    }
}

#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub struct HomogeneousArity {
    arg_type: ArgType,
    required: usize,
    optional: usize,
    variadic: bool,
}

#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub struct HeterogeneousArity {
    required: &'static [ArgType],
    optional: &'static [ArgType],
    variadic: Option<ArgType>,
}
impl<const R: usize, const O: usize> From<&'static FunctionArity<R, O>> for HeterogeneousArity {
    fn from(definition: &'static FunctionArity<R, O>) -> Self {
        Self {
            required: definition.required(),
            optional: definition.optional(),
            variadic: definition.variadic(),
        }
    }
}

pub enum PositionalArityIterator {
    Homogeneous(HomogeneousArityIterator),
    Heterogeneous(HeterogeneousArityIterator),
}
impl Iterator for PositionalArityIterator {
    type Item = ArgType;
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Homogeneous(iter) => iter.next(),
            Self::Heterogeneous(iter) => iter.next(),
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = ExactSizeIterator::len(self);
        (len, Some(len))
    }
}
impl ExactSizeIterator for PositionalArityIterator {
    fn len(&self) -> usize {
        match self {
            Self::Homogeneous(iter) => iter.1,
            Self::Heterogeneous(iter) => iter.0.len() - iter.1,
        }
    }
}

pub struct HomogeneousArityIterator(ArgType, usize);
impl Iterator for HomogeneousArityIterator {
    type Item = ArgType;
    fn next(&mut self) -> Option<Self::Item> {
        if self.1 == 0 {
            None
        } else {
            self.1 -= 1;
            Some(self.0)
        }
    }
}

pub struct HeterogeneousArityIterator(&'static [ArgType], usize);
impl Iterator for HeterogeneousArityIterator {
    type Item = ArgType;
    fn next(&mut self) -> Option<Self::Item> {
        let arg = self.0.get(self.1)?;
        self.1 += 1;
        Some(*arg)
    }
}

/// Ensure that a function declaring the given arity can be invoked with `num_args` arguments
pub fn validate_arity(arity: &Arity, num_args: usize) -> Result<(), Error> {
    if arity.accepts(num_args) {
        Ok(())
    } else {
        Err(Error::InvalidArity {
            expected: *arity,
            received: num_args,
        })
    }
}

/// Closure-backed function with an explicitly declared arity
pub struct NativeFunction<F> {
    arity: Arity,
    body: F,
}
impl<F> NativeFunction<F> {
    pub fn new(arity: Arity, body: F) -> Self {
        Self { arity, body }
    }
}
impl<T, F> Applicable<T> for NativeFunction<F>
where
    F: Fn(Vec<T>) -> Result<T, String>,
{
    fn arity(&self) -> Option<Arity> {
        Some(self.arity)
    }
    fn apply(&self, args: impl ExactSizeIterator<Item = T>) -> Result<T, String> {
        (self.body)(args.collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAD_ARITY: FunctionArity<2, 2> = FunctionArity {
        required: [ArgType::String, ArgType::Int],
        optional: [ArgType::String, ArgType::Int],
        variadic: None,
    };

    #[test]
    fn heterogeneous_arity_bounds() {
        let arity = Arity::from(&PAD_ARITY);
        assert_eq!(
            arity.required().collect::<Vec<_>>(),
            vec![ArgType::String, ArgType::Int]
        );
        assert_eq!(arity.optional().len(), 2);
        assert_eq!(arity.max_args(), Some(4));
        assert!(!arity.accepts(1));
        assert!(arity.accepts(2));
        assert!(arity.accepts(4));
        assert!(!arity.accepts(5));
        assert_eq!(format!("{}", arity), "2..4");
    }

    #[test]
    fn homogeneous_arity_bounds() {
        let arity = Arity::any(1, 0, true);
        assert_eq!(arity.max_args(), None);
        assert!(!arity.accepts(0));
        assert!(arity.accepts(100));
        assert_eq!(format!("{}", arity), "1+");
        assert_eq!(
            arity.iter().take(3).collect::<Vec<_>>(),
            vec![ArgType::Any, ArgType::Any, ArgType::Any]
        );
        assert_eq!(format!("{}", Arity::any(2, 0, false)), "2");
    }

    #[test]
    fn invalid_arity() {
        let arity = Arity::any(2, 0, false);
        assert_eq!(validate_arity(&arity, 2), Ok(()));
        assert_eq!(
            validate_arity(&arity, 3),
            Err(Error::InvalidArity {
                expected: arity,
                received: 3,
            })
        );
    }

    #[test]
    fn native_functions() {
        let add = NativeFunction::new(Arity::any(2, 0, false), |args: Vec<i64>| {
            Ok(args.into_iter().sum())
        });
        assert_eq!(add.arity(), Some(Arity::any(2, 0, false)));
        assert_eq!(add.apply(vec![3, 4].into_iter()), Ok(7));
    }
}
