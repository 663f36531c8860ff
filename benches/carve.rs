use criterion::{criterion_group, criterion_main, Criterion};
use seamcarve::{find_vertical_seam, sobel_energy, CarveConfig, CarveMode, Carver, Grid, Rgb};
use std::hint::black_box;

fn make_image(width: usize, height: usize) -> Grid<Rgb> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = (((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF) as u8;
            data.push([value, value.wrapping_mul(5), value ^ 0x55]);
        }
    }
    Grid::from_vec(data, width, height).unwrap()
}

fn bench_carve(c: &mut Criterion) {
    let image = make_image(256, 256);

    c.bench_function("sobel_energy_256", |b| {
        b.iter(|| black_box(sobel_energy(black_box(&image), false)));
    });

    let energy = sobel_energy(&image, false);
    c.bench_function("find_vertical_seam_256", |b| {
        b.iter(|| black_box(find_vertical_seam(black_box(&energy))));
    });

    let shrink = Carver::new(CarveConfig {
        mode: CarveMode::Shrink,
        pixels: 10,
        parallel: false,
    });
    c.bench_function("shrink_10_seams_256", |b| {
        b.iter(|| black_box(shrink.resize(black_box(&image)).unwrap()));
    });

    let enlarge = Carver::new(CarveConfig {
        mode: CarveMode::Enlarge,
        pixels: 10,
        parallel: false,
    });
    c.bench_function("enlarge_10_seams_256", |b| {
        b.iter(|| black_box(enlarge.resize(black_box(&image)).unwrap()));
    });
}

criterion_group!(benches, bench_carve);
criterion_main!(benches);
