// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use thiserror::Error;

use crate::core::Arity;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The argument list does not match the arity declared by the target function
    #[error("Expected {expected} arguments, received {received}")]
    InvalidArity { expected: Arity, received: usize },
    /// The target function failed while processing one step
    #[error("{0}")]
    Apply(String),
    /// A driver sequence failed while being advanced
    #[error("Argument {slot} failed to advance: {message}")]
    Driver { slot: usize, message: String },
}
