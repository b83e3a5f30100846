// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::fmt::Debug;

/// Marker for the native numeric types that back numeric columns.
pub trait IsNumber: Copy + Clone + Debug + Default + PartialEq {}

impl IsNumber for i8 {}
impl IsNumber for i16 {}
impl IsNumber for i32 {}
impl IsNumber for i64 {}
impl IsNumber for i128 {}
impl IsNumber for u8 {}
impl IsNumber for u16 {}
impl IsNumber for u32 {}
impl IsNumber for u64 {}
impl IsNumber for u128 {}
impl IsNumber for f32 {}
impl IsNumber for f64 {}
