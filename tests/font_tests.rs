use std::fs;
use std::path::PathBuf;

use quill2d::fonts::{enumerate_fonts_in, find_preferred, FontHandle};

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("quill2d-{}-{}", tag, std::process::id()));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("scratch dir should be creatable");
    dir
}

#[test]
fn missing_directory_yields_empty_set() {
    let dir = std::env::temp_dir().join("quill2d-does-not-exist");
    let fonts = enumerate_fonts_in(&dir);
    assert!(fonts.is_empty(), "unreadable dir should mean no fonts");
}

#[test]
fn scan_filters_by_extension_case_insensitively() {
    let dir = scratch_dir("scan");
    fs::write(dir.join("beta.ttf"), b"stub").unwrap();
    fs::write(dir.join("alpha.TTF"), b"stub").unwrap();
    fs::write(dir.join("gamma.otf"), b"stub").unwrap();
    fs::write(dir.join("notes.txt"), b"stub").unwrap();

    let fonts = enumerate_fonts_in(&dir);
    let names: Vec<&str> = fonts.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["alpha", "beta"],
        "only ttf files, sorted by name"
    );

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn handle_name_is_the_file_stem() {
    let dir = scratch_dir("stem");
    fs::write(dir.join("Consola.ttf"), b"stub").unwrap();

    let fonts = enumerate_fonts_in(&dir);
    assert_eq!(fonts.len(), 1);
    assert_eq!(fonts[0].name, "Consola");
    assert_eq!(fonts[0].file_path, dir.join("Consola.ttf"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn preferred_family_matches_case_insensitively() {
    let handles = vec![
        FontHandle {
            name: "Arial".into(),
            file_path: "arial.ttf".into(),
        },
        FontHandle {
            name: "CONSOLA".into(),
            file_path: "consola.ttf".into(),
        },
    ];
    let picked = find_preferred(&handles).expect("consola should be found");
    assert_eq!(picked.name, "CONSOLA");
}

#[test]
fn preferred_family_is_absent_when_nothing_matches() {
    assert!(find_preferred(&[]).is_none());

    let handles = vec![FontHandle {
        name: "Arial".into(),
        file_path: "arial.ttf".into(),
    }];
    assert!(find_preferred(&handles).is_none());
}
