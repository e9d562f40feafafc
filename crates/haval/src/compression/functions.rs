// Copyright 2025 Irreducible Inc.

//! The nonlinear Boolean functions of the five HAVAL rounds.
//!
//! Arguments are listed from `x6` down to `x0`. Which chaining register feeds which argument is
//! decided by the phi permutation of the round, see [`super::table`].

pub type BooleanFn = fn(u32, u32, u32, u32, u32, u32, u32) -> u32;

#[inline(always)]
pub fn f1(x6: u32, x5: u32, x4: u32, x3: u32, x2: u32, x1: u32, x0: u32) -> u32 {
	(x1 & (x0 ^ x4)) ^ (x2 & x5) ^ (x3 & x6) ^ x0
}

#[inline(always)]
pub fn f2(x6: u32, x5: u32, x4: u32, x3: u32, x2: u32, x1: u32, x0: u32) -> u32 {
	(x2 & ((x1 & !x3) ^ (x4 & x5) ^ x6 ^ x0)) ^ (x4 & (x1 ^ x5)) ^ (x3 & x5) ^ x0
}

#[inline(always)]
pub fn f3(x6: u32, x5: u32, x4: u32, x3: u32, x2: u32, x1: u32, x0: u32) -> u32 {
	(x3 & ((x1 & x2) ^ x6 ^ x0)) ^ (x1 & x4) ^ (x2 & x5) ^ x0
}

#[inline(always)]
pub fn f4(x6: u32, x5: u32, x4: u32, x3: u32, x2: u32, x1: u32, x0: u32) -> u32 {
	(x4 & ((x5 & !x2) ^ (x3 & !x6) ^ x1 ^ x6 ^ x0)) ^ (x3 & ((x1 & x2) ^ x5 ^ x6)) ^ (x2 & x6) ^ x0
}

#[inline(always)]
pub fn f5(x6: u32, x5: u32, x4: u32, x3: u32, x2: u32, x1: u32, x0: u32) -> u32 {
	(x0 & ((x1 & x2 & x3) ^ !x5)) ^ (x1 & x4) ^ (x2 & x5) ^ (x3 & x6)
}
