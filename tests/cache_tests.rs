use std::fs;
use std::path::{Path, PathBuf};

use quill2d::fonts::{enumerate_fonts_in, FontHandle};
use quill2d::glam::Vec2;
use quill2d::text::{FontCache, FontRasterSystem};
use quill2d::FontLoadError;

/// Finds any real ttf on the host so the load/measure tests can run; they
/// are skipped on machines with no discoverable font.
fn any_system_font() -> Option<FontHandle> {
    let candidates = [
        "/usr/share/fonts/truetype/dejavu",
        "/usr/share/fonts/truetype/liberation",
        "/usr/share/fonts/TTF",
        "/usr/share/fonts",
        "/Library/Fonts",
        "/System/Library/Fonts",
        r"C:\Windows\Fonts",
    ];
    for dir in candidates {
        if let Some(handle) = enumerate_fonts_in(Path::new(dir)).into_iter().next() {
            return Some(handle);
        }
    }
    None
}

#[test]
fn cache_loads_each_handle_once() {
    let _ = env_logger::builder().is_test(true).try_init();
    let Some(handle) = any_system_font() else {
        eprintln!("no system font found, skipping");
        return;
    };

    let mut cache = FontCache::new();
    cache.get(&handle).expect("font should load");
    assert_eq!(cache.load_count(), 1);

    // Repeated gets hit the cache; the underlying loader never runs again.
    for _ in 0..5 {
        cache.get(&handle).expect("cached font should resolve");
    }
    assert_eq!(cache.load_count(), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn measurement_is_deterministic() {
    let Some(handle) = any_system_font() else {
        eprintln!("no system font found, skipping");
        return;
    };

    let mut cache = FontCache::new();
    let raster = cache.get(&handle).expect("font should load");

    let scale = Vec2::new(1.5, 1.5);
    let first = raster.measure("Lane 3: 128.50 BPM", 24, scale);
    let second = raster.measure("Lane 3: 128.50 BPM", 24, scale);
    assert_eq!(first, second);
    assert!(first.x > 0.0 && first.y > 0.0);
}

#[test]
fn measurement_of_empty_text_is_zero() {
    let Some(handle) = any_system_font() else {
        eprintln!("no system font found, skipping");
        return;
    };

    let mut cache = FontCache::new();
    let raster = cache.get(&handle).expect("font should load");
    assert_eq!(raster.measure("", 24, Vec2::ONE), Vec2::ZERO);
}

#[test]
fn newline_adds_a_line_and_widest_line_wins() {
    let Some(handle) = any_system_font() else {
        eprintln!("no system font found, skipping");
        return;
    };

    let mut cache = FontCache::new();
    let raster = cache.get(&handle).expect("font should load");

    let one = raster.measure("wide line", 20, Vec2::ONE);
    let two = raster.measure("wide line\nx", 20, Vec2::ONE);
    assert_eq!(two.x, one.x, "short second line must not shrink the width");
    assert!((two.y - 2.0 * one.y).abs() < 1e-3, "two lines, twice the height");
}

fn scratch_file(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("quill2d-cache-{}-{}", std::process::id(), name));
    fs::write(&path, contents).expect("scratch file should be writable");
    path
}

#[test]
fn corrupt_font_file_fails_with_invalid_data() {
    let path = scratch_file("corrupt.ttf", b"this is not a font");
    let handle = FontHandle {
        name: "corrupt".into(),
        file_path: path.clone(),
    };

    match FontRasterSystem::from_handle(&handle) {
        Err(FontLoadError::InvalidData { path: reported }) => assert_eq!(reported, path),
        other => panic!("expected InvalidData, got {:?}", other.err()),
    }
    fs::remove_file(&path).ok();
}

#[test]
fn missing_font_file_fails_with_io_error() {
    let handle = FontHandle {
        name: "ghost".into(),
        file_path: PathBuf::from("/nonexistent/ghost.ttf"),
    };

    let mut cache = FontCache::new();
    match cache.get(&handle) {
        Err(FontLoadError::Io { .. }) => {}
        other => panic!("expected Io error, got {:?}", other.err()),
    }
    // A failed load is not cached and does not count as a construction.
    assert_eq!(cache.load_count(), 0);
    assert!(cache.is_empty());
}

#[test]
fn disposed_cache_fails_deterministically() {
    let handle = FontHandle {
        name: "anything".into(),
        file_path: PathBuf::from("anything.ttf"),
    };

    let mut cache = FontCache::new();
    cache.dispose();

    for _ in 0..3 {
        match cache.get(&handle) {
            Err(FontLoadError::Disposed) => {}
            other => panic!("expected Disposed, got {:?}", other.err()),
        }
    }
}
