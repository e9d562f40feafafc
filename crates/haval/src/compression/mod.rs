// Copyright 2025 Irreducible Inc.

//! The HAVAL block compression function.
//!
//! A 128-byte message block is mixed into the eight-word chaining state by 3, 4 or 5 rounds of
//! 32 steps each. Every step overwrites one of the eight registers, sliding one position down per
//! step, with the rotated output of the round's Boolean function applied to the other seven.

mod functions;
mod table;

pub use table::INITIAL_STATE;
use table::{PHI_3, PHI_4, PHI_5, ROUNDS};

use crate::Passes;

/// Size of a message block in bytes.
pub const BLOCK_BYTES: usize = 128;
/// Size of a message block in 32-bit words.
pub const BLOCK_WORDS: usize = BLOCK_BYTES / 4;
/// Number of 32-bit words in the chaining state.
pub const STATE_WORDS: usize = 8;

pub type State = [u32; STATE_WORDS];

fn phi_table(passes: Passes) -> &'static [[usize; 7]] {
	match passes {
		Passes::Three => &PHI_3,
		Passes::Four => &PHI_4,
		Passes::Five => &PHI_5,
	}
}

/// Decodes a message block into words, least significant byte first.
pub fn block_words(block: &[u8]) -> [u32; BLOCK_WORDS] {
	debug_assert_eq!(block.len(), BLOCK_BYTES);

	let mut words = [0u32; BLOCK_WORDS];
	for (chunk, word) in block.chunks_exact(4).zip(words.iter_mut()) {
		*word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
	}
	words
}

/// Encodes the state words, least significant byte first.
pub fn state_to_bytes(state: &State) -> [u8; STATE_WORDS * 4] {
	let mut out = [0u8; STATE_WORDS * 4];
	for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
		chunk.copy_from_slice(&word.to_le_bytes());
	}
	out
}

/// Compresses one 128-byte message block into `state`.
pub fn compress(passes: Passes, state: &mut State, block: &[u8]) {
	let words = block_words(block);
	let mut t = *state;

	for (round, phi) in ROUNDS.iter().zip(phi_table(passes)) {
		for step in 0..BLOCK_WORDS {
			let shift = step % STATE_WORDS;
			let out = STATE_WORDS - 1 - shift;
			let x: [u32; 7] = std::array::from_fn(|i| t[(i + STATE_WORDS - shift) % STATE_WORDS]);
			let mixed = (round.function)(
				x[phi[0]],
				x[phi[1]],
				x[phi[2]],
				x[phi[3]],
				x[phi[4]],
				x[phi[5]],
				x[phi[6]],
			);
			t[out] = mixed
				.rotate_right(7)
				.wrapping_add(t[out].rotate_right(11))
				.wrapping_add(words[round.word_order[step]])
				.wrapping_add(round.constants[step]);
		}
	}

	for (s, t) in state.iter_mut().zip(t) {
		*s = s.wrapping_add(t);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_block_words_little_endian() {
		let block: [u8; BLOCK_BYTES] = std::array::from_fn(|i| i as u8);
		let words = block_words(&block);
		assert_eq!(words[0], 0x03020100);
		assert_eq!(words[31], 0x7F7E7D7C);
	}

	#[test]
	fn test_state_to_bytes_little_endian() {
		let bytes = state_to_bytes(&INITIAL_STATE);
		assert_eq!(&bytes[..4], &[0x88, 0x6A, 0x3F, 0x24]);
		assert_eq!(&bytes[28..], &[0x89, 0x6C, 0x4E, 0xEC]);
	}

	#[test]
	fn test_word_orders_are_permutations() {
		for round in &ROUNDS {
			let mut seen = [false; BLOCK_WORDS];
			for &i in &round.word_order {
				assert!(!seen[i]);
				seen[i] = true;
			}
		}
	}

	#[test]
	fn test_phi_tables_are_permutations() {
		for passes in Passes::ALL {
			let table = phi_table(passes);
			assert_eq!(table.len(), passes.count() as usize);
			for phi in table {
				let mut sorted = *phi;
				sorted.sort_unstable();
				assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6]);
			}
		}
	}

	#[test]
	fn test_compress_depends_on_passes() {
		let block = [0u8; BLOCK_BYTES];
		let outputs = Passes::ALL.map(|passes| {
			let mut state = INITIAL_STATE;
			compress(passes, &mut state, &block);
			state
		});
		assert_ne!(outputs[0], outputs[1]);
		assert_ne!(outputs[1], outputs[2]);
		assert_ne!(outputs[0], outputs[2]);
	}

	#[test]
	fn test_compress_is_sensitive_to_every_word() {
		let mut reference = INITIAL_STATE;
		compress(Passes::Three, &mut reference, &[0u8; BLOCK_BYTES]);

		for word in 0..BLOCK_WORDS {
			let mut block = [0u8; BLOCK_BYTES];
			block[4 * word] = 1;
			let mut state = INITIAL_STATE;
			compress(Passes::Three, &mut state, &block);
			assert_ne!(state, reference);
		}
	}
}
