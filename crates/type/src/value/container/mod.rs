// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

mod blob;
mod bool;
mod number;
mod tuple;
mod undefined;
mod utf8;

pub use blob::BlobContainer;
pub use bool::BoolContainer;
pub use number::NumberContainer;
pub use tuple::TupleContainer;
pub use undefined::UndefinedContainer;
pub use utf8::Utf8Container;
