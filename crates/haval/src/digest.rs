// Copyright 2025 Irreducible Inc.

//! HAVAL as a RustCrypto [`digest`](::digest) hash function.
//!
//! The number of passes is a type parameter; the output length is either fixed by type, as in
//! [`Haval256_5`], or chosen at runtime through [`HavalVar`].

use core::{fmt, marker::PhantomData};

use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
		CtVariableCoreWrapper, OutputSizeUser, RtVariableCoreWrapper, TruncSide, UpdateCore,
		VariableOutputCore,
	},
	typenum::{U128, U16, U20, U24, U28, U32},
	HashMarker, InvalidOutputSize, Output,
};

use crate::{
	compression::{self, State, BLOCK_BYTES, INITIAL_STATE},
	tailor::tailor,
	HavalParams, OutputBits, Passes,
};

/// Type-level number of compression passes.
pub trait PassCount: Clone + 'static {
	const PASSES: Passes;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreePasses;

#[derive(Debug, Clone, Copy, Default)]
pub struct FourPasses;

#[derive(Debug, Clone, Copy, Default)]
pub struct FivePasses;

impl PassCount for ThreePasses {
	const PASSES: Passes = Passes::Three;
}

impl PassCount for FourPasses {
	const PASSES: Passes = Passes::Four;
}

impl PassCount for FivePasses {
	const PASSES: Passes = Passes::Five;
}

/// Lowest-level core hasher state of HAVAL with `P` passes.
#[derive(Clone)]
pub struct HavalVarCore<P: PassCount> {
	state: State,
	blocks_len: u64,
	output_bits: OutputBits,
	_passes: PhantomData<P>,
}

/// Core hasher state of HAVAL generic over output size.
pub type HavalCore<P, OutSize> = CtVariableCoreWrapper<HavalVarCore<P>, OutSize>;

/// HAVAL hasher with the output size chosen at runtime.
pub type HavalVar<P> = RtVariableCoreWrapper<HavalVarCore<P>>;

pub type Haval128_3 = CoreWrapper<HavalCore<ThreePasses, U16>>;
pub type Haval160_3 = CoreWrapper<HavalCore<ThreePasses, U20>>;
pub type Haval192_3 = CoreWrapper<HavalCore<ThreePasses, U24>>;
pub type Haval224_3 = CoreWrapper<HavalCore<ThreePasses, U28>>;
pub type Haval256_3 = CoreWrapper<HavalCore<ThreePasses, U32>>;
pub type Haval128_4 = CoreWrapper<HavalCore<FourPasses, U16>>;
pub type Haval160_4 = CoreWrapper<HavalCore<FourPasses, U20>>;
pub type Haval192_4 = CoreWrapper<HavalCore<FourPasses, U24>>;
pub type Haval224_4 = CoreWrapper<HavalCore<FourPasses, U28>>;
pub type Haval256_4 = CoreWrapper<HavalCore<FourPasses, U32>>;
pub type Haval128_5 = CoreWrapper<HavalCore<FivePasses, U16>>;
pub type Haval160_5 = CoreWrapper<HavalCore<FivePasses, U20>>;
pub type Haval192_5 = CoreWrapper<HavalCore<FivePasses, U24>>;
pub type Haval224_5 = CoreWrapper<HavalCore<FivePasses, U28>>;
pub type Haval256_5 = CoreWrapper<HavalCore<FivePasses, U32>>;

impl<P: PassCount> HavalVarCore<P> {
	fn params(&self) -> HavalParams {
		HavalParams::from_parts(P::PASSES, self.output_bits)
	}
}

impl<P: PassCount> HashMarker for HavalVarCore<P> {}

impl<P: PassCount> BlockSizeUser for HavalVarCore<P> {
	type BlockSize = U128;
}

impl<P: PassCount> BufferKindUser for HavalVarCore<P> {
	type BufferKind = Eager;
}

impl<P: PassCount> UpdateCore for HavalVarCore<P> {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		self.blocks_len = self.blocks_len.wrapping_add(blocks.len() as u64);
		for block in blocks {
			compression::compress(P::PASSES, &mut self.state, block);
		}
	}
}

impl<P: PassCount> OutputSizeUser for HavalVarCore<P> {
	type OutputSize = U32;
}

impl<P: PassCount> VariableOutputCore for HavalVarCore<P> {
	const TRUNC_SIDE: TruncSide = TruncSide::Left;

	#[inline]
	fn new(output_size: usize) -> Result<Self, InvalidOutputSize> {
		let output_bits = OutputBits::from_bytes(output_size).ok_or(InvalidOutputSize)?;
		Ok(Self {
			state: INITIAL_STATE,
			blocks_len: 0,
			output_bits,
			_passes: PhantomData,
		})
	}

	#[inline]
	fn finalize_variable_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let bit_count = self
			.blocks_len
			.wrapping_mul(BLOCK_BYTES as u64)
			.wrapping_add(buffer.get_pos() as u64)
			.wrapping_mul(8);
		let trailer = self.params().trailer(bit_count);

		let passes = P::PASSES;
		let state = &mut self.state;
		buffer.digest_pad(0x01, &trailer, |block| compression::compress(passes, state, block));

		tailor(self.output_bits, state);
		out.copy_from_slice(&compression::state_to_bytes(state));
	}
}

impl<P: PassCount> AlgorithmName for HavalVarCore<P> {
	#[inline]
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Haval{}Pass", P::PASSES.count())
	}
}

impl<P: PassCount> fmt::Debug for HavalVarCore<P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "HavalVarCore<{}> {{ ... }}", P::PASSES.count())
	}
}
