use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use poweq::{parse, parse_str, tokenize};
use rand::Rng;
use std::hint::black_box;

// Random `n1 op n2 op ...` input with `terms` operands.
fn random_expr(terms: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut s = String::new();
    for i in 0..terms {
        if i > 0 {
            s.push(if rng.gen_bool(0.5) { '+' } else { '*' });
        }
        let whole: u32 = rng.gen_range(0..1000);
        let frac: u32 = rng.gen_range(0..100);
        s.push_str(&format!("{}.{}", whole, frac));
    }
    s
}

fn benchmark_pipeline(c: &mut Criterion) {
    for terms in [8usize, 128, 4096] {
        let input = random_expr(terms);

        c.bench_function(&format!("tokenize_{}", terms), |b| {
            b.iter(|| black_box(tokenize(black_box(&input)).unwrap()));
        });

        let tokens = tokenize(&input).unwrap();
        c.bench_function(&format!("parse_{}", terms), |b| {
            b.iter(|| black_box(parse(black_box(&tokens)).unwrap()));
        });

        let tree = parse_str(&input).unwrap();
        c.bench_function(&format!("render_{}", terms), |b| {
            b.iter(|| black_box(tree.render()));
        });

        c.bench_function(&format!("drop_{}", terms), |b| {
            b.iter_batched(
                || parse_str(&input).unwrap(),
                drop,
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, benchmark_pipeline);
criterion_main!(benches);
