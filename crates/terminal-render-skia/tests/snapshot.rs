// File: crates/terminal-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else compares decoded pixels against the snapshot for an exact match; a missing
//   snapshot is a failure.
// - Goldens depend on the local Skia build, so these run on request:
//   `UPDATE_SNAPSHOTS=1 cargo test -p terminal-render-skia --test snapshot -- --ignored` to bless,
//   then the same without the variable to check.

use std::path::{Path, PathBuf};

use terminal_chart::{CanvasSize, Chart, RenderOptions};
use terminal_render_skia::SkiaSurface;

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn snapshot_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

fn write_or_compare(path: &Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    let want = std::fs::read(path).unwrap_or_else(|e| {
        panic!("missing snapshot {} ({e}); run with UPDATE_SNAPSHOTS=1 to bless", path.display())
    });
    // Compare decoded pixel buffers to avoid PNG encoder variance
    let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
    let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
    assert_eq!(got_img.dimensions(), want_img.dimensions(), "Size differs: {}", path.display());
    assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
}

fn render_to_bytes(series: Vec<f64>) -> Vec<u8> {
    let size = CanvasSize::new(326, 160);
    let mut chart = Chart::new(size, RenderOptions::default());
    chart.replace(series);
    let mut surface = SkiaSurface::new(size).expect("surface");
    chart.redraw(&mut surface);
    surface.png_bytes().expect("render bytes")
}

#[test]
#[ignore = "compares against blessed goldens; see file header"]
fn golden_random_walk() {
    let bytes = render_to_bytes(vec![100.0, 98.7, 99.9, 97.2, 95.8, 96.4, 99.1, 100.6, 98.3, 97.0]);
    write_or_compare(&snapshot_path("random_walk.png"), &bytes);
}

#[test]
#[ignore = "compares against blessed goldens; see file header"]
fn golden_flat_series() {
    let bytes = render_to_bytes(vec![5.0, 5.0, 5.0]);
    write_or_compare(&snapshot_path("flat.png"), &bytes);
}

#[test]
#[ignore = "compares against blessed goldens; see file header"]
fn golden_crash() {
    let mut series: Vec<f64> = (0..22).map(|i| 103.0 - i as f64 * 0.5).collect();
    series.extend((0..42).map(|i| 24.0 - i as f64 * 0.4));
    let bytes = render_to_bytes(series);
    write_or_compare(&snapshot_path("crash.png"), &bytes);
}

#[test]
fn missing_snapshot_fails_outside_bless_mode() {
    if bless_mode() {
        return;
    }
    let path = snapshot_path("does_not_exist.png");
    let bytes = render_to_bytes(vec![1.0, 2.0]);
    let outcome = std::panic::catch_unwind(|| write_or_compare(&path, &bytes));
    assert!(outcome.is_err(), "a missing snapshot must not pass");
}
