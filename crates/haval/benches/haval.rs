// Copyright 2025 Irreducible Inc.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use haval::{hash, Digest, Haval256_5, HavalParams, HavalState, OutputBits, Passes};
use rand::{thread_rng, RngCore};

fn bench_haval_state(c: &mut Criterion) {
	let mut group = c.benchmark_group("HAVAL");

	let mut rng = thread_rng();

	const N: usize = 1 << 16;
	let mut data = vec![0u8; N];
	rng.fill_bytes(&mut data);

	group.throughput(Throughput::Bytes(N as u64));
	for passes in Passes::ALL {
		for output_bits in [OutputBits::B128, OutputBits::B256] {
			let params = HavalParams::from_parts(passes, output_bits);
			group.bench_with_input(BenchmarkId::new("HavalState", params), &params, |bench, &params| {
				bench.iter(|| hash(params, &data))
			});
		}
	}

	group.finish()
}

fn bench_haval_streaming(c: &mut Criterion) {
	let mut group = c.benchmark_group("HAVAL");

	let mut rng = thread_rng();

	// Small updates exercise the partial block buffer
	const N: usize = 1 << 16;
	const CHUNK: usize = 37;
	let mut data = vec![0u8; N];
	rng.fill_bytes(&mut data);

	let params = HavalParams::from_parts(Passes::Five, OutputBits::B256);
	group.throughput(Throughput::Bytes(N as u64));
	group.bench_function("HavalState-Chunked", |bench| {
		bench.iter(|| {
			let mut state = HavalState::start(params);
			for chunk in data.chunks(CHUNK) {
				state.update(chunk).expect("message fits in 2^64 bits");
			}
			state.end()
		})
	});

	group.finish()
}

fn bench_haval_digest(c: &mut Criterion) {
	let mut group = c.benchmark_group("HAVAL");

	let mut rng = thread_rng();

	const N: usize = 1 << 16;
	let mut data = [0u8; N];
	rng.fill_bytes(&mut data);

	group.throughput(Throughput::Bytes(N as u64));
	group.bench_function("Haval256_5", |bench| {
		bench.iter(|| <Haval256_5 as Digest>::digest(data))
	});

	group.finish()
}

criterion_group!(haval, bench_haval_state, bench_haval_streaming, bench_haval_digest);
criterion_main!(haval);
