//! Build script generating module declarations for every `src/dayNN/` solution.
//!
//! A day directory is picked up when its name is `day` followed by two
//! digits and it contains a `mod.rs`. The generated file is included by
//! `lib.rs`, so a freshly scaffolded day compiles in without editing it.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

fn main() -> io::Result<()> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("set by cargo"));
    let src_dir = manifest_dir.join("src");
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("set by cargo"));

    println!("cargo:rerun-if-changed=src");

    let mut days = find_day_modules(&src_dir)?;
    days.sort();

    let mut generated = String::new();
    for (name, path) in &days {
        println!("cargo:rerun-if-changed={}", path.display());
        generated.push_str(&format!(
            "#[path = {:?}]\npub mod {};\n",
            path.display().to_string(),
            name
        ));
    }

    fs::write(out_dir.join("days.rs"), generated)
}

fn find_day_modules(src_dir: &Path) -> io::Result<Vec<(String, PathBuf)>> {
    let mut days = Vec::new();
    for entry in fs::read_dir(src_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let module = entry.path().join("mod.rs");
        if is_day_dir_name(&name) && module.is_file() {
            days.push((name, module));
        }
    }
    Ok(days)
}

fn is_day_dir_name(name: &str) -> bool {
    name.len() == 5
        && name.starts_with("day")
        && name[3..].bytes().all(|b| b.is_ascii_digit())
}
