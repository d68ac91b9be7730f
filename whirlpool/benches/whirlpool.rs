use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use whirlpool::{Digest, Whirlpool};

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("Whirlpool");

    for &len in &[1 << 10, 1 << 16] {
        let data = vec![0x5au8; len];
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(format!("update {}B", len), |bench| {
            let mut hasher = Whirlpool::new();
            bench.iter(|| hasher.update(black_box(&data)))
        });
    }

    group.bench_function("digest 64B", |bench| {
        let data = [0x5au8; 64];
        bench.iter(|| Whirlpool::digest(black_box(&data)))
    });

    group.finish()
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
