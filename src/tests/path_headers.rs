use std::fs;
use std::path::{Path, PathBuf};

/// Layers whose files open with a `// src/...` line naming their own path.
const HEADED_LAYERS: [&str; 4] = [
    "/application/service/",
    "/application/domain/",
    "/ports/outgoing/",
    "/adapter/outgoing/",
];

fn rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            rust_files(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

#[test]
fn test_layer_files_carry_their_path_header() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut files = Vec::new();
    rust_files(&root.join("src/modules"), &mut files);

    let mut checked = 0;
    for file in files {
        let relative = file.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/");
        let in_layer = HEADED_LAYERS.iter().any(|layer| relative.contains(layer));
        if !in_layer || relative.ends_with("/mod.rs") || relative.contains("/sea_orm_entity/") {
            continue;
        }

        let source = fs::read_to_string(&file).unwrap();
        let first_line = source.lines().next().unwrap_or_default();
        assert_eq!(first_line, format!("// {relative}"), "header of {relative}");
        checked += 1;
    }

    assert!(checked > 20, "only {checked} files matched");
}
