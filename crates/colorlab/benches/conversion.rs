use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use colorlab::{
    hsv_to_rgb, lab_to_rgb, lab_to_xyz, rgb_to_hsv, rgb_to_lab, rgb_to_xyz, xyz_to_lab,
    xyz_to_rgb, Color, ColorSpace, Float,
};

type Conversion = fn(&[Float; 3]) -> [Float; 3];

/// Create a grid of 24-bit RGB colors spanning the cube.
fn rgb_grid(step: usize) -> Vec<[Float; 3]> {
    let mut colors = Vec::new();
    for r in (0..=255).step_by(step) {
        for g in (0..=255).step_by(step) {
            for b in (0..=255).step_by(step) {
                colors.push([r as Float, g as Float, b as Float]);
            }
        }
    }
    colors
}

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    let rgb = rgb_grid(17);
    let hsv: Vec<_> = rgb.iter().map(rgb_to_hsv).collect();
    let xyz: Vec<_> = rgb.iter().map(rgb_to_xyz).collect();
    let lab: Vec<_> = rgb.iter().map(rgb_to_lab).collect();

    let cases: [(&str, Conversion, &Vec<[Float; 3]>); 8] = [
        ("rgb_to_hsv", rgb_to_hsv, &rgb),
        ("hsv_to_rgb", hsv_to_rgb, &hsv),
        ("rgb_to_xyz", rgb_to_xyz, &rgb),
        ("xyz_to_rgb", xyz_to_rgb, &xyz),
        ("xyz_to_lab", xyz_to_lab, &xyz),
        ("lab_to_xyz", lab_to_xyz, &lab),
        ("rgb_to_lab", rgb_to_lab, &rgb),
        ("lab_to_rgb", lab_to_rgb, &lab),
    ];

    for (name, conversion, input) in cases {
        group.bench_with_input(BenchmarkId::new(name, input.len()), input, |b, input| {
            b.iter(|| {
                for value in input.iter() {
                    black_box(conversion(black_box(value)));
                }
            })
        });
    }

    group.finish();
}

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    let colors: Vec<_> = rgb_grid(51)
        .into_iter()
        .map(|coordinates| Color::new(ColorSpace::Rgb, coordinates))
        .collect();

    group.bench_function("hsv_to_lab", |b| {
        b.iter(|| {
            for color in colors.iter() {
                black_box(color.to(ColorSpace::Hsv).to(ColorSpace::Lab));
            }
        })
    });

    group.bench_function("to_24bit_checked", |b| {
        b.iter(|| {
            for color in colors.iter() {
                let _ = black_box(color.to(ColorSpace::Lab).to_24bit_checked());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_conversions, bench_color);
criterion_main!(benches);
