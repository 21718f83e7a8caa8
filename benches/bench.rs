use std::ops::RangeInclusive;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::distributions::{Uniform, WeightedIndex};
use rand::prelude::*;
use varint_codecs::harness::vectors::log_uniform;
use varint_codecs::Format;

// Uniform weights: equal probability of a value of each byte width.
const UNIFORM_WEIGHTS: [usize; 8] = [1, 1, 1, 1, 1, 1, 1, 1];
// Zipf-like weights: decreasing but non-zero probability for wider values.
const ZIPF_WEIGHTS: [usize; 8] = [7560, 3780, 2520, 1890, 1512, 1260, 1080, 945];
const ARRAY_LEN: usize = 1024;

fn range_for_byte_width(nbytes: usize) -> RangeInclusive<u64> {
    let min = if nbytes == 1 { 0 } else { 1 << ((nbytes - 1) * 8) };
    let max = u64::MAX >> (64 - (8 * nbytes));
    min..=max
}

// Generate an array of len with values whose byte widths follow `weights`.
fn generate_array(len: usize, weights: &[usize; 8]) -> Vec<u64> {
    let mut len_rng = StdRng::from_seed([0xabu8; 32]);
    let len_dist = WeightedIndex::new(&weights[..]).unwrap();
    let mut value_rng = StdRng::from_seed([0xcdu8; 32]);
    len_dist
        .sample_iter(&mut len_rng)
        .take(len)
        .map(|n| Uniform::from(range_for_byte_width(n + 1)).sample(&mut value_rng))
        .collect()
}

fn benchmark(c: &mut Criterion) {
    let inputs = [
        ("uniform", generate_array(ARRAY_LEN, &UNIFORM_WEIGHTS)),
        ("zipf", generate_array(ARRAY_LEN, &ZIPF_WEIGHTS)),
        (
            "log_uniform",
            log_uniform(&mut StdRng::seed_from_u64(0), ARRAY_LEN),
        ),
    ];
    for (name, input_value) in inputs.iter() {
        let mut g = c.benchmark_group(*name);
        g.throughput(Throughput::Elements(ARRAY_LEN as u64));
        for format in Format::ALL {
            g.bench_with_input(
                BenchmarkId::new("encode", format),
                input_value,
                |b, iv| {
                    b.iter(|| {
                        let output = format.encode(iv);
                        assert!(!output.is_empty());
                    });
                },
            );

            let encoded = format.encode(input_value);
            g.bench_with_input(
                BenchmarkId::new("decode", format),
                encoded.as_slice(),
                |b, e| {
                    let mut out = vec![0u64; ARRAY_LEN];
                    b.iter(|| {
                        let consumed = format.decode_into(e, &mut out).unwrap();
                        assert_eq!(consumed, e.len());
                    })
                },
            );
        }
    }
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
