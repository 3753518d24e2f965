// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ndarray::{Array2, array};
use understory_roi::{Dendron, Ellipsoid, Line, Polygon, Rectangle, Roi};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Cycle through the four shape kinds with random planar coordinates.
fn gen_mixed_rois(count: usize) -> Vec<Roi> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let x = rng.next_f64() * 1000.0;
        let y = rng.next_f64() * 1000.0;
        let roi: Roi = match i % 4 {
            0 => Ellipsoid::new(array![[x, y], [5.0, 8.0]]).unwrap().into(),
            1 => Line::new(array![[x, y], [x + 20.0, y + 5.0]]).unwrap().into(),
            2 => Rectangle::new(array![[x, y], [x + 30.0, y + 30.0]])
                .unwrap()
                .into(),
            _ => Polygon::new(array![[x, y], [x + 10.0, y], [x + 10.0, y + 10.0]])
                .unwrap()
                .into(),
        };
        out.push(roi);
    }
    out
}

/// Random polygon with `vertices` rows in `dim` dimensions.
fn gen_polygon_data(vertices: usize, dim: usize) -> Array2<f64> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    Array2::from_shape_fn((vertices, dim), |_| rng.next_f64() * 512.0)
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("dendron_add");
    for &n in &[64usize, 1024, 16384] {
        let rois = gen_mixed_rois(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("add_n{}", n), |b| {
            b.iter_batched(
                || rois.clone(),
                |rois| {
                    let mut d = Dendron::with_capacity(rois.len());
                    for roi in rois {
                        d.add(Some(roi));
                    }
                    black_box(d.count());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("dendron_remove");
    for &n in &[64usize, 1024] {
        let rois = gen_mixed_rois(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("remove_head_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut d = Dendron::with_capacity(rois.len());
                    d.extend(rois.iter().cloned());
                    d
                },
                |mut d| {
                    while let Ok(roi) = d.remove(0) {
                        black_box(roi);
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("remove_tail_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut d = Dendron::with_capacity(rois.len());
                    d.extend(rois.iter().cloned());
                    d
                },
                |mut d| {
                    while !d.is_empty() {
                        black_box(d.remove(d.count() - 1).unwrap());
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_polygon_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_to_bez_path");
    for &v in &[16usize, 256, 4096] {
        let poly = Polygon::new(gen_polygon_data(v, 2)).unwrap();
        group.throughput(Throughput::Elements(v as u64));
        group.bench_function(format!("vertices_{}", v), |b| {
            b.iter(|| black_box(poly.to_bez_path()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add, bench_remove, bench_polygon_path);
criterion_main!(benches);
