// Copyright 2025 Irreducible Inc.

//! Command-line front end for the HAVAL hash function.
//!
//! Hashes files, strings given with `-m`, or standard input when neither is given. The fingerprint
//! of each input is printed in uppercase hexadecimal as `HAVAL(path) = HEX`.

use std::{
	fmt,
	fs::File,
	io::{self, BufReader, Read, Write},
	path::{Path, PathBuf},
	process::ExitCode,
	time::Instant,
};

use anyhow::{Context, Result};
use clap::{value_parser, Parser};
use haval::{cert, Fingerprint, HavalParams, HavalState};
use tracing::{debug, instrument};

/// Number of blocks hashed by the speed test.
const SPEED_TEST_BLOCKS: usize = 5000;
/// Size in bytes of each speed test block.
const SPEED_TEST_BLOCK_SIZE: usize = 5000;

#[derive(Debug, Parser)]
#[command(about = "Generates HAVAL fingerprints. With no FILE or STRING, read standard input.")]
struct Args {
	/// Number of compression passes.
	#[arg(short, long, default_value_t = 3, value_parser = value_parser!(u32).range(3..=5))]
	passes: u32,
	/// Fingerprint length in bits: 128, 160, 192, 224 or 256.
	#[arg(short, long, default_value_t = 256)]
	length: u32,
	/// Hash the given string.
	#[arg(short, long = "message", value_name = "STRING")]
	message: Vec<String>,
	/// Hash the certification data and check it against the known fingerprints.
	#[arg(short, long)]
	cert: bool,
	/// Measure the hashing speed.
	#[arg(short, long)]
	speed: bool,
	/// Report the byte order of this machine.
	#[arg(short, long)]
	endianness: bool,
	/// Certification file hashed by `--cert`, skipped when it can not be opened.
	#[arg(long, value_name = "PATH", default_value = cert::PI_FRAC_FILE)]
	pi_frac: PathBuf,
	/// Files to hash.
	files: Vec<PathBuf>,
}

impl Args {
	fn params(&self) -> Result<HavalParams> {
		HavalParams::new(self.passes, self.length).context("invalid HAVAL parameters")
	}

	fn reads_stdin(&self) -> bool {
		self.message.is_empty()
			&& self.files.is_empty()
			&& !(self.cert || self.speed || self.endianness)
	}
}

fn init_tracing() {
	use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(io::stderr))
		.try_init();
}

#[instrument(skip_all, level = "debug")]
fn hash_reader(params: HavalParams, mut reader: impl Read) -> Result<Fingerprint> {
	let mut state = HavalState::start(params);
	let len = io::copy(&mut reader, &mut state)?;
	debug!(len, "hashed input");
	Ok(state.end())
}

#[instrument(skip(params), level = "debug")]
fn hash_file(params: HavalParams, path: &Path) -> Result<Fingerprint> {
	let file = File::open(path).with_context(|| format!("{} can not be opened", path.display()))?;
	hash_reader(params, BufReader::new(file))
		.with_context(|| format!("failed to read {}", path.display()))
}

fn hash_string(params: HavalParams, message: &str) -> Result<Fingerprint> {
	Ok(haval::hash(params, message)?)
}

fn write_result(
	label: impl fmt::Display,
	result: &cert::CertificationResult,
	out: &mut impl Write,
) -> Result<bool> {
	let verdict = if result.is_match() { "ok" } else { "MISMATCH" };
	writeln!(out, "HAVAL({label}) = {} {verdict}", result.fingerprint)?;
	if !result.is_match() {
		writeln!(out, "  expected {}", result.expected)?;
	}
	Ok(result.is_match())
}

/// Hashes the certification strings, and the `pi.frac` file at `pi_frac` when it can be opened.
#[instrument(skip(out), level = "debug")]
fn write_certification(
	params: HavalParams,
	pi_frac: &Path,
	out: &mut impl Write,
) -> Result<bool> {
	writeln!(out, "HAVAL certification data ({params}):")?;
	let mut all_match = true;
	for result in cert::certify(params)? {
		all_match &= write_result(format_args!("\"{}\"", result.input), &result, out)?;
	}

	match File::open(pi_frac) {
		Ok(file) => {
			let result = cert::certify_pi_frac(params, BufReader::new(file))
				.with_context(|| format!("failed to read {}", pi_frac.display()))?;
			all_match &= write_result(pi_frac.display(), &result, out)?;
		}
		Err(err) => {
			debug!(%err, "certification file unavailable");
			writeln!(out, "{} cannot be opened! Skipping test...", pi_frac.display())?;
		}
	}
	Ok(all_match)
}

#[instrument(skip(out), level = "debug")]
fn speed_test(params: HavalParams, out: &mut impl Write) -> Result<()> {
	writeln!(out, "Test the speed of {params}.")?;
	writeln!(out, "Hashing {SPEED_TEST_BLOCKS} {SPEED_TEST_BLOCK_SIZE}-byte blocks ...")?;

	let block = [0xFFu8; SPEED_TEST_BLOCK_SIZE];
	let start = Instant::now();
	let mut state = HavalState::start(params);
	for _ in 0..SPEED_TEST_BLOCKS {
		state.update(block)?;
	}
	let fingerprint = state.end();
	let seconds = start.elapsed().as_secs_f64();
	debug!(%fingerprint, seconds, "speed test finished");

	if seconds > 0.0 {
		let megabits = (SPEED_TEST_BLOCKS * SPEED_TEST_BLOCK_SIZE * 8) as f64 / 1.0e6;
		writeln!(out, "Time = {seconds:.3} seconds")?;
		writeln!(out, "Speed = {:.2} MBPS (megabits/second)", megabits / seconds)?;
	} else {
		writeln!(out, "not enough blocks !")?;
	}
	Ok(())
}

fn write_byte_order(out: &mut impl Write) -> Result<()> {
	let order = if cfg!(target_endian = "little") {
		"little-endian"
	} else {
		"big-endian"
	};
	writeln!(out, "This machine is {order}. Fingerprints do not depend on the byte order.")?;
	Ok(())
}

/// Processes every requested input, writing results to `out`.
///
/// Returns `false` if some file could not be hashed or the certification data did not match.
fn run(args: &Args, stdin: impl Read, out: &mut impl Write) -> Result<bool> {
	let params = args.params()?;
	debug!(%params, "selected parameters");

	let mut success = true;
	if args.endianness {
		write_byte_order(out)?;
	}
	if args.cert {
		success &= write_certification(params, &args.pi_frac, out)?;
	}
	if args.speed {
		speed_test(params, out)?;
	}
	for message in &args.message {
		let fingerprint = hash_string(params, message)?;
		writeln!(out, "HAVAL(\"{message}\") = {fingerprint}")?;
	}
	for path in &args.files {
		match hash_file(params, path) {
			Ok(fingerprint) => writeln!(out, "HAVAL({}) = {fingerprint}", path.display())?,
			Err(err) => {
				eprintln!("havalsum: {err:#}");
				success = false;
			}
		}
	}
	if args.reads_stdin() {
		let fingerprint = hash_reader(params, stdin).context("failed to read standard input")?;
		writeln!(out, "{fingerprint}")?;
	}
	Ok(success)
}

fn main() -> Result<ExitCode> {
	let args = Args::parse();
	init_tracing();

	let success = run(&args, io::stdin().lock(), &mut io::stdout().lock())?;
	Ok(if success {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	})
}
