// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
pub mod stdlib;
mod utils;
pub mod value;

pub use stdlib::*;
pub use value::{FloatValue, IntValue, Value};
