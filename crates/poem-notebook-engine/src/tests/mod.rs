use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for poem files
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Write a file (creating parent directories) and return its path
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}

/// A minimal valid poem in TOML form
pub fn poem_toml(title: &str) -> String {
    format!(
        r#"title = "{title}"
original = """
first {{line}}
second line

third line"""
translation = """
one

two"""
hoverText = ["alternate"]
"#
    )
}

/// A manifest directory listing the given poem files
pub fn create_manifest_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = create_test_dir();
    let names: Vec<String> = files.iter().map(|(n, _)| format!("\"{n}\"")).collect();
    create_test_file(
        &dir,
        "index.json",
        &format!("{{\"files\": [{}]}}", names.join(", ")),
    );
    for (name, content) in files {
        create_test_file(&dir, name, content);
    }
    dir
}
