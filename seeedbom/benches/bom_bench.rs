use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seeedbom::prelude::*;
use seeedbom::{natural_sort, Component, Netlist};

fn synthetic_netlist(count: usize) -> Netlist {
    let components = (0..count)
        .map(|i| {
            let reference = format!("{}{}", ["C", "R", "U", "D"][i % 4], count - i);
            Component::new(reference).with_field("MPN", format!("PART-{}", i % 37))
        })
        .collect();
    Netlist {
        source: None,
        components,
    }
}

fn bench_natural_sort(c: &mut Criterion) {
    let refs: Vec<String> = (0..1000).rev().map(|i| format!("C{}", i)).collect();

    c.bench_function("natural_sort_1000", |b| {
        b.iter(|| {
            let mut refs = refs.clone();
            natural_sort(black_box(&mut refs));
            refs
        });
    });
}

fn bench_build_bom(c: &mut Criterion) {
    let netlist = synthetic_netlist(2000);
    let options = BomOptions::default();

    c.bench_function("build_bom_2000", |b| {
        b.iter(|| SeeedBomCore::build(black_box(&netlist), black_box(&options)));
    });
}

criterion_group!(benches, bench_natural_sort, bench_build_bom);
criterion_main!(benches);
