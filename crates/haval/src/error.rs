// Copyright 2025 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("unsupported number of passes {0} (expected 3, 4 or 5)")]
	UnsupportedPasses(u32),
	#[error("unsupported fingerprint length {0} bits (expected 128, 160, 192, 224 or 256)")]
	UnsupportedOutputBits(u32),
	#[error("message too long: {absorbed_bits} bits already hashed, {requested_bytes} more bytes would overflow the bit counter")]
	LengthOverflow {
		absorbed_bits: u64,
		requested_bytes: usize,
	},
}
