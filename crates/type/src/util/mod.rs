// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

mod bitvec;
mod cowvec;

pub use bitvec::BitVec;
pub use cowvec::CowVec;
