// Copyright 2025 Irreducible Inc.

use std::fmt;

use crate::Error;

/// Algorithm version tag written into the message trailer.
pub const VERSION: u8 = 1;

/// Length in bytes of the trailer appended after the padding.
pub const TRAILER_LEN: usize = 10;

/// Number of compression passes applied to each message block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Passes {
	Three,
	Four,
	Five,
}

impl Passes {
	pub const ALL: [Self; 3] = [Self::Three, Self::Four, Self::Five];

	pub const fn count(self) -> u32 {
		match self {
			Self::Three => 3,
			Self::Four => 4,
			Self::Five => 5,
		}
	}
}

impl TryFrom<u32> for Passes {
	type Error = Error;

	fn try_from(value: u32) -> Result<Self, Self::Error> {
		match value {
			3 => Ok(Self::Three),
			4 => Ok(Self::Four),
			5 => Ok(Self::Five),
			_ => Err(Error::UnsupportedPasses(value)),
		}
	}
}

/// Length of the emitted fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputBits {
	B128,
	B160,
	B192,
	B224,
	B256,
}

impl OutputBits {
	pub const ALL: [Self; 5] = [Self::B128, Self::B160, Self::B192, Self::B224, Self::B256];

	pub const fn bits(self) -> u32 {
		match self {
			Self::B128 => 128,
			Self::B160 => 160,
			Self::B192 => 192,
			Self::B224 => 224,
			Self::B256 => 256,
		}
	}

	pub const fn bytes(self) -> usize {
		self.bits() as usize / 8
	}

	/// Number of fingerprint words serialized into the output.
	pub const fn words(self) -> usize {
		self.bits() as usize / 32
	}

	pub fn from_bytes(bytes: usize) -> Option<Self> {
		Self::ALL.into_iter().find(|bits| bits.bytes() == bytes)
	}
}

impl TryFrom<u32> for OutputBits {
	type Error = Error;

	fn try_from(value: u32) -> Result<Self, Self::Error> {
		Self::ALL
			.into_iter()
			.find(|bits| bits.bits() == value)
			.ok_or(Error::UnsupportedOutputBits(value))
	}
}

/// A validated `(passes, output_bits)` configuration of the hash function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HavalParams {
	passes: Passes,
	output_bits: OutputBits,
}

impl HavalParams {
	/// Every supported configuration, ordered by number of passes then output length.
	pub const ALL: [Self; 15] = {
		let mut all = [Self::from_parts(Passes::Three, OutputBits::B128); 15];
		let mut i = 0;
		while i < 15 {
			all[i] = Self::from_parts(Passes::ALL[i / 5], OutputBits::ALL[i % 5]);
			i += 1;
		}
		all
	};

	/// Validates a raw `(passes, output_bits)` pair.
	pub fn new(passes: u32, output_bits: u32) -> Result<Self, Error> {
		Ok(Self {
			passes: passes.try_into()?,
			output_bits: output_bits.try_into()?,
		})
	}

	pub const fn from_parts(passes: Passes, output_bits: OutputBits) -> Self {
		Self {
			passes,
			output_bits,
		}
	}

	pub const fn passes(&self) -> Passes {
		self.passes
	}

	pub const fn output_bits(&self) -> OutputBits {
		self.output_bits
	}

	/// The bytes appended after the padding: the fingerprint length, pass count and version,
	/// followed by the unpadded message length in bits, little-endian.
	pub fn trailer(&self, bit_count: u64) -> [u8; TRAILER_LEN] {
		let bits = self.output_bits.bits();
		let mut trailer = [0u8; TRAILER_LEN];
		trailer[0] =
			(((bits & 0x3) << 6) | ((self.passes.count() & 0x7) << 3) | (VERSION as u32 & 0x7)) as u8;
		trailer[1] = ((bits >> 2) & 0xFF) as u8;
		trailer[2..].copy_from_slice(&bit_count.to_le_bytes());
		trailer
	}
}

impl fmt::Display for HavalParams {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "HAVAL-{}/{}", self.output_bits.bits(), self.passes.count())
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use assert_matches::assert_matches;

	use super::*;

	#[test]
	fn test_new_accepts_every_supported_pair() {
		for passes in 3..=5 {
			for bits in [128, 160, 192, 224, 256] {
				let params = HavalParams::new(passes, bits).unwrap();
				assert_eq!(params.passes().count(), passes);
				assert_eq!(params.output_bits().bits(), bits);
			}
		}
	}

	#[test]
	fn test_new_rejects_unsupported_values() {
		assert_matches!(HavalParams::new(2, 256), Err(Error::UnsupportedPasses(2)));
		assert_matches!(HavalParams::new(6, 128), Err(Error::UnsupportedPasses(6)));
		assert_matches!(HavalParams::new(3, 512), Err(Error::UnsupportedOutputBits(512)));
		assert_matches!(HavalParams::new(4, 130), Err(Error::UnsupportedOutputBits(130)));
	}

	#[test]
	fn test_all_is_exhaustive() {
		let distinct = HavalParams::ALL.iter().collect::<HashSet<_>>();
		assert_eq!(distinct.len(), 15);
		assert_eq!(HavalParams::ALL[0], HavalParams::from_parts(Passes::Three, OutputBits::B128));
		assert_eq!(HavalParams::ALL[7], HavalParams::from_parts(Passes::Four, OutputBits::B192));
		assert_eq!(HavalParams::ALL[14], HavalParams::from_parts(Passes::Five, OutputBits::B256));
	}

	#[test]
	fn test_output_bits_from_bytes() {
		assert_eq!(OutputBits::from_bytes(20), Some(OutputBits::B160));
		assert_eq!(OutputBits::from_bytes(32), Some(OutputBits::B256));
		assert_eq!(OutputBits::from_bytes(31), None);
	}

	#[test]
	fn test_trailer_layout() {
		let params = HavalParams::from_parts(Passes::Five, OutputBits::B256);
		let trailer = params.trailer(0x0102_0304_0506_0708);
		// 256 & 3 == 0, 5 passes in bits 3..6, version 1 in bits 0..3
		assert_eq!(trailer[0], (5 << 3) | 1);
		assert_eq!(trailer[1], 64);
		assert_eq!(&trailer[2..], &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);

		let params = HavalParams::from_parts(Passes::Three, OutputBits::B160);
		assert_eq!(params.trailer(40)[..3], [(3 << 3) | 1, 40, 40]);
	}
}
