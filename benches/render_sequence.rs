//! Benchmarks for frame sampling and colour mapping.
//!
//! Run with: cargo bench --bench render_sequence

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mandel_movie::{
    Colour, ColourTable, Complex, GridRegion, MandelbrotAlgorithm, Zoom, generate_pixel_buffer,
    generate_sequence, sample_grid, sample_grid_serial,
};

const CENTER: Complex = Complex {
    real: -0.743_643_887,
    imag: 0.131_825_904,
};

fn gradient_table() -> ColourTable {
    let colours = (0..=255u8)
        .map(|v| Colour {
            r: v,
            g: 255 - v,
            b: v / 2,
        })
        .collect();
    ColourTable::new(colours).expect("non-empty table")
}

fn bench_sample_grid(c: &mut Criterion) {
    let algorithm = MandelbrotAlgorithm::new(500, 2.0).expect("valid algorithm");
    let mut group = c.benchmark_group("sample_grid");

    for resolution in [50u64, 150, 300] {
        let region = GridRegion::new(CENTER, 0.01, resolution).expect("valid region");
        let cells = (region.side() * region.side()) as u64;
        group.throughput(Throughput::Elements(cells));

        group.bench_with_input(BenchmarkId::new("parallel", resolution), &region, |b, region| {
            b.iter(|| sample_grid(black_box(region), &algorithm))
        });
        group.bench_with_input(BenchmarkId::new("serial", resolution), &region, |b, region| {
            b.iter(|| sample_grid_serial(black_box(region), &algorithm))
        });
    }

    group.finish();
}

fn bench_colour_mapping(c: &mut Criterion) {
    let algorithm = MandelbrotAlgorithm::new(500, 2.0).expect("valid algorithm");
    let region = GridRegion::new(CENTER, 0.01, 300).expect("valid region");
    let plane = sample_grid(&region, &algorithm);
    let table = gradient_table();

    c.bench_function("generate_pixel_buffer/601x601", |b| {
        b.iter(|| generate_pixel_buffer(black_box(&plane), &table))
    });
}

fn bench_sequence(c: &mut Criterion) {
    let algorithm = MandelbrotAlgorithm::new(200, 2.0).expect("valid algorithm");
    let zoom = Zoom::new(2.0, 0.001, 16).expect("valid zoom");

    let mut group = c.benchmark_group("generate_sequence");
    group.sample_size(10);
    group.bench_function("16_frames_101x101", |b| {
        b.iter(|| generate_sequence(&algorithm, black_box(CENTER), &zoom, 50))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_sample_grid,
    bench_colour_mapping,
    bench_sequence
);
criterion_main!(benches);
