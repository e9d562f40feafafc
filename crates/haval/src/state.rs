// Copyright 2025 Irreducible Inc.

use std::{cmp, fmt, io};

use crate::{
	compression::{self, State, BLOCK_BYTES, INITIAL_STATE, STATE_WORDS},
	tailor::tailor,
	Error, HavalParams, OutputBits,
};

/// Start of the padding: a single one bit followed by zeros.
const PADDING_DELIMITER: u8 = 0x01;

/// Message length, modulo the block size, at which the trailer starts.
const TRAILER_OFFSET: usize = BLOCK_BYTES - crate::TRAILER_LEN;

/// A streaming HAVAL session.
///
/// Created by [`HavalState::start`], fed with [`HavalState::update`] and consumed by
/// [`HavalState::end`].
#[derive(Clone)]
pub struct HavalState {
	params: HavalParams,
	// Number of message bits hashed so far
	bit_count: u64,
	fingerprint: State,
	buffer: [u8; BLOCK_BYTES],
	filled_bytes: usize,
}

impl HavalState {
	pub fn start(params: HavalParams) -> Self {
		Self {
			params,
			bit_count: 0,
			fingerprint: INITIAL_STATE,
			buffer: [0; BLOCK_BYTES],
			filled_bytes: 0,
		}
	}

	pub fn params(&self) -> HavalParams {
		self.params
	}

	/// Total number of message bits hashed so far.
	pub fn bit_count(&self) -> u64 {
		self.bit_count
	}

	/// Hashes `data`.
	///
	/// Fails without modifying the state if the total message length in bits no longer fits in 64
	/// bits.
	pub fn update(&mut self, data: impl AsRef<[u8]>) -> Result<(), Error> {
		let data = data.as_ref();
		self.bit_count = u64::try_from(data.len())
			.ok()
			.and_then(|len| len.checked_mul(8))
			.and_then(|bits| self.bit_count.checked_add(bits))
			.ok_or(Error::LengthOverflow {
				absorbed_bits: self.bit_count,
				requested_bytes: data.len(),
			})?;
		self.absorb(data);
		Ok(())
	}

	pub fn chain_update(mut self, data: impl AsRef<[u8]>) -> Result<Self, Error> {
		self.update(data)?;
		Ok(self)
	}

	/// Pads the message, appends the trailer and returns the fingerprint.
	pub fn end(mut self) -> Fingerprint {
		let trailer = self.params.trailer(self.bit_count);

		let pad_len = if self.filled_bytes < TRAILER_OFFSET {
			TRAILER_OFFSET - self.filled_bytes
		} else {
			BLOCK_BYTES + TRAILER_OFFSET - self.filled_bytes
		};
		let mut padding = [0u8; BLOCK_BYTES];
		padding[0] = PADDING_DELIMITER;
		self.absorb(&padding[..pad_len]);
		self.absorb(&trailer);
		debug_assert_eq!(self.filled_bytes, 0);

		let output_bits = self.params.output_bits();
		tailor(output_bits, &mut self.fingerprint);
		Fingerprint::new(output_bits, &self.fingerprint)
	}

	// Buffers `data`, compressing every completed block in order.
	fn absorb(&mut self, mut data: &[u8]) {
		let passes = self.params.passes();

		if self.filled_bytes != 0 {
			let to_copy = cmp::min(data.len(), BLOCK_BYTES - self.filled_bytes);
			self.buffer[self.filled_bytes..self.filled_bytes + to_copy]
				.copy_from_slice(&data[..to_copy]);
			data = &data[to_copy..];
			self.filled_bytes += to_copy;

			if self.filled_bytes == BLOCK_BYTES {
				compression::compress(passes, &mut self.fingerprint, &self.buffer);
				self.filled_bytes = 0;
			}
		}

		let mut chunks = data.chunks_exact(BLOCK_BYTES);
		for chunk in &mut chunks {
			compression::compress(passes, &mut self.fingerprint, chunk);
		}

		let remaining = chunks.remainder();
		if !remaining.is_empty() {
			self.buffer[..remaining.len()].copy_from_slice(remaining);
			self.filled_bytes = remaining.len();
		}
	}
}

impl fmt::Debug for HavalState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HavalState")
			.field("params", &self.params)
			.field("bit_count", &self.bit_count)
			.finish_non_exhaustive()
	}
}

impl io::Write for HavalState {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.update(buf)
			.map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Hashes `data` in one call.
pub fn hash(params: HavalParams, data: impl AsRef<[u8]>) -> Result<Fingerprint, Error> {
	Ok(HavalState::start(params).chain_update(data)?.end())
}

/// A HAVAL fingerprint of 128 to 256 bits.
///
/// Formats as uppercase hexadecimal with `{}` and `{:X}`, lowercase with `{:x}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
	bytes: [u8; STATE_WORDS * 4],
	len: usize,
}

impl Fingerprint {
	fn new(output_bits: OutputBits, state: &State) -> Self {
		let mut bytes = compression::state_to_bytes(state);
		let len = output_bits.bytes();
		bytes[len..].fill(0);
		Self { bytes, len }
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes[..self.len]
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
}

impl AsRef<[u8]> for Fingerprint {
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl PartialEq<[u8]> for Fingerprint {
	fn eq(&self, other: &[u8]) -> bool {
		self.as_bytes() == other
	}
}

impl<const N: usize> PartialEq<[u8; N]> for Fingerprint {
	fn eq(&self, other: &[u8; N]) -> bool {
		self.as_bytes() == other
	}
}

impl fmt::UpperHex for Fingerprint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.as_bytes()
			.iter()
			.try_for_each(|byte| write!(f, "{byte:02X}"))
	}
}

impl fmt::LowerHex for Fingerprint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.as_bytes()
			.iter()
			.try_for_each(|byte| write!(f, "{byte:02x}"))
	}
}

impl fmt::Display for Fingerprint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::UpperHex::fmt(self, f)
	}
}

impl fmt::Debug for Fingerprint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Fingerprint({self:X})")
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use assert_matches::assert_matches;
	use hex_literal::hex;

	use super::*;
	use crate::Passes;

	const PARAMS: HavalParams = HavalParams::from_parts(Passes::Three, OutputBits::B256);

	#[test]
	fn test_empty_message() {
		let out = HavalState::start(PARAMS).end();
		assert_eq!(out, hex!("4F6938531F0BC8991F62DA7BBD6F7DE3FAD44562B8C6F4EBF146D5B4E46F7C17"));
	}

	#[test]
	fn test_zero_length_updates_are_ignored() {
		let mut state = HavalState::start(PARAMS);
		state.update(b"").unwrap();
		state.update(b"a").unwrap();
		state.update(b"").unwrap();
		assert_eq!(state.bit_count(), 8);
		assert_eq!(state.end(), hash(PARAMS, b"a").unwrap());
	}

	#[test]
	fn test_pending_length_tracks_bit_count() {
		let mut state = HavalState::start(PARAMS);
		for len in [1, 127, 128, 129, 300, 0, 5] {
			state.update(vec![0xA5; len]).unwrap();
			assert_eq!(state.filled_bytes as u64, (state.bit_count() / 8) % BLOCK_BYTES as u64);
		}
	}

	#[test]
	fn test_length_overflow_leaves_state_untouched() {
		let mut state = HavalState::start(PARAMS);
		state.update(b"abc").unwrap();
		// Bit counts are whole bytes, so the last representable count is u64::MAX - 7.
		state.bit_count = u64::MAX - 15;
		let snapshot = state.clone();

		assert_matches!(
			state.update(b"xy"),
			Err(Error::LengthOverflow {
				absorbed_bits,
				requested_bytes: 2,
			}) if absorbed_bits == u64::MAX - 15
		);
		assert_eq!(state.bit_count(), u64::MAX - 15);
		assert_eq!(state.filled_bytes, 3);
		assert_eq!(state.buffer, snapshot.buffer);
		assert_eq!(state.fingerprint, snapshot.fingerprint);

		state.update(b"x").unwrap();
		assert_eq!(state.bit_count(), u64::MAX - 7);
		assert_eq!(state.filled_bytes, 4);

		assert_matches!(state.update(b"x"), Err(Error::LengthOverflow { requested_bytes: 1, .. }));
		assert_eq!(state.bit_count(), u64::MAX - 7);
		// Zero-length updates still succeed at the limit.
		state.update(b"").unwrap();
	}

	#[test]
	fn test_write_reports_overflow_as_invalid_input() {
		let mut state = HavalState::start(PARAMS);
		state.bit_count = u64::MAX;
		let err = state.write_all(b"x").unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
	}

	#[test]
	fn test_io_copy_matches_update() {
		let data = (0..1000u32).map(|i| (i * 7) as u8).collect::<Vec<_>>();
		let mut state = HavalState::start(PARAMS);
		io::copy(&mut data.as_slice(), &mut state).unwrap();
		assert_eq!(state.end(), hash(PARAMS, &data).unwrap());
	}

	#[test]
	fn test_fingerprint_formatting() {
		let params = HavalParams::from_parts(Passes::Three, OutputBits::B128);
		let out = hash(params, b"").unwrap();
		assert_eq!(out.len(), 16);
		assert_eq!(out.to_string(), "C68F39913F901F3DDF44C707357A7D70");
		assert_eq!(format!("{out:x}"), "c68f39913f901f3ddf44c707357a7d70");
		assert_eq!(format!("{out:?}"), "Fingerprint(C68F39913F901F3DDF44C707357A7D70)");
	}

	#[test]
	fn test_fingerprint_length_matches_params() {
		for params in HavalParams::ALL {
			let out = hash(params, b"length").unwrap();
			assert_eq!(out.len(), params.output_bits().bytes());
			assert_eq!(out.as_bytes().len(), out.len());
		}
	}
}
