// Copyright 2025 Irreducible Inc.

//! Implementation of the [HAVAL](https://doi.org/10.1007/3-540-57220-1_55) one-way hash function.
//!
//! HAVAL is parameterized by the number of compression passes (3, 4 or 5) and the fingerprint
//! length (128, 160, 192, 224 or 256 bits). Two interfaces are provided:
//!
//! * [`HavalState`], a streaming `start`/`update`/`end` session whose parameters are chosen at
//!   runtime through [`HavalParams`].
//! * The [`digest`] module, implementing the RustCrypto [`digest`](::digest) traits with the
//!   parameters fixed by type, e.g. [`Haval256_5`].

pub mod cert;
pub mod compression;
pub mod digest;
mod error;
mod params;
mod state;
mod tailor;


pub use ::digest::Digest;
pub use self::digest::*;
pub use error::Error;
pub use params::*;
pub use state::*;
