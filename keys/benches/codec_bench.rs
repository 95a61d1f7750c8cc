// Identity codec benchmarks.
//
// Covers encode, decode and recognition for every format, plus keypair
// derivation at a cheap scrypt cost and at each format's reference cost.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, RngCore, SeedableRng};

use nacl_keys::crypto::kdf::ScryptCost;
use nacl_keys::{recognize, GeneratorConfig, KeyFormat, KeyGenerator, SecretInput};

const EMAIL: &str = "someone@example.com";
const PASSPHRASE: &str = "magnetometers payee induce tangibly polonaises unrestricted oilfield";

// Fixed seed so runs are comparable.
fn sample_key() -> [u8; 32] {
    let mut rng = StdRng::seed_from_u64(42);
    let mut key = [0u8; 32];
    rng.fill_bytes(&mut key);
    key
}

fn bench_encode(c: &mut Criterion) {
    let key = sample_key();
    let mut group = c.benchmark_group("identity/encode");

    for format in KeyFormat::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(format), &key, |b, key| {
            b.iter(|| format.encode(key).unwrap());
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let key = sample_key();
    let mut group = c.benchmark_group("identity/decode");

    for format in KeyFormat::ALL {
        let encoded = format.encode(&key).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(format), &encoded, |b, encoded| {
            b.iter(|| format.decode(encoded).unwrap());
        });
    }

    group.finish();
}

fn bench_recognize(c: &mut Criterion) {
    let key = sample_key();
    let mut group = c.benchmark_group("identity/recognize");

    for format in KeyFormat::ALL {
        let encoded = format.encode(&key).unwrap();
        group.bench_with_input(BenchmarkId::new("validated", format), &encoded, |b, encoded| {
            b.iter(|| recognize(encoded, true));
        });
        group.bench_with_input(BenchmarkId::new("shape_only", format), &encoded, |b, encoded| {
            b.iter(|| recognize(encoded, false));
        });
    }

    group.finish();
}

fn bench_generate_cheap(c: &mut Criterion) {
    let generator =
        KeyGenerator::new(GeneratorConfig::with_uniform_cost(ScryptCost::new(10, 8, 1)));
    let input = SecretInput::pair(EMAIL, PASSPHRASE);
    let mut group = c.benchmark_group("identity/generate_n1024");

    for format in KeyFormat::ALL {
        group.bench_function(BenchmarkId::from_parameter(format), |b| {
            b.iter(|| generator.generate(format, &input).unwrap());
        });
    }

    group.finish();
}

fn bench_generate_reference(c: &mut Criterion) {
    let generator = KeyGenerator::default();
    let input = SecretInput::pair(EMAIL, PASSPHRASE);
    let mut group = c.benchmark_group("identity/generate_reference");
    // Each iteration is a full-cost scrypt run.
    group.sample_size(10);

    for format in KeyFormat::ALL {
        group.bench_function(BenchmarkId::from_parameter(format), |b| {
            b.iter(|| generator.generate(format, &input).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_recognize,
    bench_generate_cheap,
    bench_generate_reference,
);
criterion_main!(benches);
