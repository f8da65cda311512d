// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
pub mod core;
pub mod error;
mod filter;
mod zip_map;

pub use self::error::Error;
pub use self::filter::*;
pub use self::zip_map::*;
