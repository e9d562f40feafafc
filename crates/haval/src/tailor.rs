// Copyright 2025 Irreducible Inc.

//! Folding of the unemitted fingerprint words into the emitted ones.
//!
//! For fingerprints shorter than 256 bits, the words beyond the output length are split into bit
//! fields and added into the emitted words, so every bit of the final state affects the output.

use crate::{compression::State, OutputBits};

/// One emitted word: masks applied to words 7, 6, 5 and 4, and the right rotation of their union.
struct Fold {
	masks: [u32; 4],
	rotation: u32,
}

const fn fold(masks: [u32; 4], rotation: u32) -> Fold {
	Fold { masks, rotation }
}

const TAILOR_128: [Fold; 4] = [
	fold([0x000000FF, 0xFF000000, 0x00FF0000, 0x0000FF00], 8),
	fold([0x0000FF00, 0x000000FF, 0xFF000000, 0x00FF0000], 16),
	fold([0x00FF0000, 0x0000FF00, 0x000000FF, 0xFF000000], 24),
	fold([0xFF000000, 0x00FF0000, 0x0000FF00, 0x000000FF], 0),
];

const TAILOR_160: [Fold; 5] = [
	fold([0x3F, 0x7F << 25, 0x3F << 19, 0], 19),
	fold([0x3F << 6, 0x3F, 0x7F << 25, 0], 25),
	fold([0x7F << 12, 0x3F << 6, 0x3F, 0], 0),
	fold([0x3F << 19, 0x7F << 12, 0x3F << 6, 0], 6),
	fold([0x7F << 25, 0x3F << 19, 0x7F << 12, 0], 12),
];

const TAILOR_192: [Fold; 6] = [
	fold([0x1F, 0x3F << 26, 0, 0], 26),
	fold([0x1F << 5, 0x1F, 0, 0], 0),
	fold([0x3F << 10, 0x1F << 5, 0, 0], 5),
	fold([0x1F << 16, 0x3F << 10, 0, 0], 10),
	fold([0x1F << 21, 0x1F << 16, 0, 0], 16),
	fold([0x3F << 26, 0x1F << 21, 0, 0], 21),
];

const TAILOR_224: [Fold; 7] = [
	fold([0x1F << 27, 0, 0, 0], 27),
	fold([0x1F << 22, 0, 0, 0], 22),
	fold([0x0F << 18, 0, 0, 0], 18),
	fold([0x1F << 13, 0, 0, 0], 13),
	fold([0x0F << 9, 0, 0, 0], 9),
	fold([0x1F << 4, 0, 0, 0], 4),
	fold([0x0F, 0, 0, 0], 0),
];

fn folds(output_bits: OutputBits) -> &'static [Fold] {
	match output_bits {
		OutputBits::B128 => &TAILOR_128,
		OutputBits::B160 => &TAILOR_160,
		OutputBits::B192 => &TAILOR_192,
		OutputBits::B224 => &TAILOR_224,
		OutputBits::B256 => &[],
	}
}

/// Applies the output-length specific tailoring to the final state.
pub fn tailor(output_bits: OutputBits, state: &mut State) {
	let high = [state[7], state[6], state[5], state[4]];
	for (word, fold) in state.iter_mut().zip(folds(output_bits)) {
		let bits = high
			.iter()
			.zip(fold.masks)
			.fold(0u32, |acc, (&source, mask)| acc | (source & mask));
		*word = word.wrapping_add(bits.rotate_right(fold.rotation));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_folds_cover_the_dropped_words() {
		for output_bits in OutputBits::ALL {
			let folds = folds(output_bits);
			assert_eq!(folds.len(), if output_bits == OutputBits::B256 { 0 } else { output_bits.words() });

			// Every bit of every dropped word is folded into exactly one emitted word.
			for source in 0..8 - output_bits.words() {
				let masks = folds.iter().map(|fold| fold.masks[source]);
				assert_eq!(masks.clone().fold(0, |acc, mask| acc | mask), u32::MAX);
				assert_eq!(masks.map(u32::count_ones).sum::<u32>(), 32);
			}
		}
	}

	#[test]
	fn test_tailor_256_is_identity() {
		let mut state = [1, 2, 3, 4, 5, 6, 7, 8];
		tailor(OutputBits::B256, &mut state);
		assert_eq!(state, [1, 2, 3, 4, 5, 6, 7, 8]);
	}

	#[test]
	fn test_tailor_224() {
		let mut state = [0, 0, 0, 0, 0, 0, 0, 0xFFFF_FFFF];
		tailor(OutputBits::B224, &mut state);
		assert_eq!(state, [0x1F, 0x1F, 0x0F, 0x1F, 0x0F, 0x1F, 0x0F, 0xFFFF_FFFF]);
	}

	#[test]
	fn test_tailor_128() {
		let mut state = [0, 0, 0, 0, 0x44444444, 0x33333333, 0x22222222, 0x11111111];
		tailor(OutputBits::B128, &mut state);
		// Word 0 gathers byte 0 of word 7, byte 3 of word 6, byte 2 of word 5 and byte 1 of word 4.
		assert_eq!(state[0], 0x22334411u32.rotate_right(8));
		assert_eq!(state[3], 0x11223344);
		assert_eq!(&state[4..], &[0x44444444, 0x33333333, 0x22222222, 0x11111111]);
	}

	#[test]
	fn test_tailor_adds_to_emitted_words() {
		let mut state = [u32::MAX, 0, 0, 0, 0, 0, 0x0000_0001 << 26, 0];
		tailor(OutputBits::B192, &mut state);
		assert_eq!(state[0], 0);
	}
}
