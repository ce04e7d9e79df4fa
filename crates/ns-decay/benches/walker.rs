use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ns_core::PtEtaPhiM;
use ns_decay::{AnalysisConfig, DecayChainAnalyzer, DecayTreeWalker, GenParticle};
use std::hint::black_box;

/// Balanced binary decay tree with `n` nodes, root at index 0.
fn make_tree(n: usize) -> Vec<GenParticle> {
    (0..n)
        .map(|i| {
            let kids: Vec<usize> = [2 * i + 1, 2 * i + 2].into_iter().filter(|&k| k < n).collect();
            let pdg = if i == 0 { 25 } else { 22 };
            GenParticle::new(pdg, 2, PtEtaPhiM::new(10.0 + i as f64, 0.1, 0.0, 0.0)).with_daughters(kids)
        })
        .collect()
}

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("decay_walker");

    for n in [16usize, 256, 4096] {
        let tree = make_tree(n);
        group.bench_with_input(BenchmarkId::new("traverse", n), &tree, |b, t| {
            let walker = DecayTreeWalker::new();
            b.iter(|| {
                let mut acc = 0.0;
                walker.traverse(t, 0, |p, _| acc += p.p4.pt);
                black_box(acc)
            })
        });

        group.bench_with_input(BenchmarkId::new("analyze_event", n), &tree, |b, t| {
            b.iter(|| {
                let mut analyzer = DecayChainAnalyzer::initialize(AnalysisConfig::default()).unwrap();
                black_box(analyzer.process_collection(t))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_traverse);
criterion_main!(benches);
