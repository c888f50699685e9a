#![allow(missing_docs, unused_crate_dependencies)]

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use cubepuzzle::{Cube, FaceNet, ScrambleParams, TurnKind};
use rand::SeedableRng;
use strum::IntoEnumIterator;

fn criterion_benchmark(c: &mut Criterion) {
    for size in [3, 10, 50] {
        let cube = Cube::new(size).unwrap();

        c.bench_with_input(BenchmarkId::new("slice_turns", size), &cube, |b, cube| {
            b.iter_batched(
                || cube.clone(),
                |mut cube| {
                    for kind in TurnKind::iter() {
                        cube.turn(kind, 0, true).unwrap();
                    }
                    cube
                },
                BatchSize::SmallInput,
            );
        });

        c.bench_with_input(BenchmarkId::new("shuffle_100", size), &cube, |b, cube| {
            b.iter_batched(
                || (cube.clone(), rand_chacha::ChaCha12Rng::seed_from_u64(0)),
                |(mut cube, mut rng)| {
                    cube.shuffle(100, &mut rng);
                    cube
                },
                BatchSize::SmallInput,
            );
        });

        let mut scrambled = cube.clone();
        scrambled.scramble(&ScrambleParams::with_seed(100, "bench"));
        let (width, height) = scrambled.canvas_size();
        c.bench_with_input(BenchmarkId::new("draw", size), &scrambled, |b, cube| {
            let scheme = cubepuzzle::PerFace::from_fn(|face| face);
            b.iter(|| {
                let mut net = FaceNet::new(width, height);
                cube.draw(&mut net, &scheme);
                net
            });
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
