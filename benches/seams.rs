use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use seamcarve::{SeamCarver, SeamFinder};
use std::hint::black_box;

fn make_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let v = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
        Rgb([v as u8, (v >> 1) as u8, (255 - v) as u8])
    })
}

fn bench_seams(c: &mut Criterion) {
    let image = make_image(256, 192);
    let carver = SeamCarver::new(&image).unwrap();

    c.bench_function("energy_256x192", |b| {
        b.iter(|| SeamCarver::new(black_box(&image)).unwrap())
    });
    c.bench_function("vertical_seam_256x192", |b| {
        b.iter(|| black_box(carver.find_vertical_seam()))
    });
    c.bench_function("horizontal_seam_256x192", |b| {
        b.iter(|| black_box(carver.find_horizontal_seam()))
    });
    c.bench_function("carve_256x192_to_240x180", |b| {
        b.iter(|| {
            let mut scratch = carver.clone();
            scratch.carve(240, 180).unwrap();
            black_box(scratch)
        })
    });
}

criterion_group!(benches, bench_seams);
criterion_main!(benches);
