pub mod raw;
pub mod validate;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::models::Poem;
use crate::parsing::align::{Pairing, unpaired_units};

pub use raw::{BUNDLE_VERSION, Bundle, Manifest, RawPoem};
pub use validate::{MAX_FIELD_CHARS, ValidationError};

/// Manifest file name inside a poems directory.
pub const MANIFEST_FILE: &str = "index.json";

/// Default bundle file name written by `build_bundle` callers.
pub const BUNDLE_FILE: &str = "poems-bundle.json";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid manifest {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },
    #[error("Unsupported bundle version {version} in {path}")]
    UnsupportedVersion { path: PathBuf, version: u32 },
    #[error("Invalid poem {origin}: {source}")]
    Invalid {
        origin: String,
        source: ValidationError,
    },
    #[error("No poems found in {0}")]
    Empty(PathBuf),
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn validate(raw: &RawPoem, origin: String) -> Result<Poem, LoadError> {
    raw.validate().map_err(|source| {
        warn!("Rejected poem {origin}: {source}");
        LoadError::Invalid { origin, source }
    })
}

/// Loads a collection from a bundle file or a manifest directory.
pub fn load_poems(path: &Path) -> Result<Vec<Poem>, LoadError> {
    let poems = if path.is_dir() {
        load_manifest_dir(path)?
    } else {
        load_bundle(path)?
    };
    debug!("Loaded {} poems from {}", poems.len(), path.display());
    Ok(poems)
}

/// Reads and validates a JSON bundle.
pub fn load_bundle(path: &Path) -> Result<Vec<Poem>, LoadError> {
    let bundle: Bundle =
        serde_json::from_str(&read(path)?).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    if bundle.version != BUNDLE_VERSION {
        return Err(LoadError::UnsupportedVersion {
            path: path.to_path_buf(),
            version: bundle.version,
        });
    }
    if bundle.poems.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    bundle
        .poems
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let origin = match bundle.files.get(i) {
                Some(file) => format!("{file} (#{i} in {})", path.display()),
                None => format!("#{i} in {}", path.display()),
            };
            validate(raw, origin)
        })
        .collect()
}

/// Reads `index.json` and every TOML poem it lists, validating each.
///
/// Returns each manifest entry with its raw and validated poem, in manifest
/// order.
fn read_manifest_dir(dir: &Path) -> Result<Vec<(String, RawPoem, Poem)>, LoadError> {
    let manifest_path = dir.join(MANIFEST_FILE);
    let manifest: Manifest =
        serde_json::from_str(&read(&manifest_path)?).map_err(|source| LoadError::Json {
            path: manifest_path.clone(),
            source,
        })?;
    if manifest.files.is_empty() {
        return Err(LoadError::Manifest {
            path: manifest_path,
            reason: "`files` is empty".to_string(),
        });
    }

    let mut out = Vec::with_capacity(manifest.files.len());
    for entry in &manifest.files {
        match entry.extension() {
            Some("toml") => {}
            Some("yaml" | "yml") => {
                return Err(LoadError::Manifest {
                    path: manifest_path,
                    reason: format!(
                        "entry `{entry}` is YAML; poem sources are TOML with the same keys"
                    ),
                });
            }
            _ => {
                return Err(LoadError::Manifest {
                    path: manifest_path,
                    reason: format!("entry `{entry}` is not a .toml file"),
                });
            }
        }
        let path = entry.to_path(dir);
        debug!("Reading poem {}", path.display());
        let raw: RawPoem = toml::from_str(&read(&path)?).map_err(|source| LoadError::Toml {
            path: path.clone(),
            source,
        })?;
        let poem = validate(&raw, entry.to_string())?;
        warn_unpaired(entry.as_str(), &poem);
        out.push((entry.to_string(), raw, poem));
    }
    Ok(out)
}

/// Warns about stanzas that will show beside an empty placeholder.
fn warn_unpaired(origin: &str, poem: &Poem) {
    let unpaired = unpaired_units(
        &poem.original.content,
        &poem.translation.content,
        Pairing::Stanza,
    );
    if !unpaired.is_empty() {
        warn!("Poem {origin}: stanzas {unpaired:?} have no counterpart in the other text");
    }
}

/// Loads a manifest directory.
pub fn load_manifest_dir(dir: &Path) -> Result<Vec<Poem>, LoadError> {
    Ok(read_manifest_dir(dir)?
        .into_iter()
        .map(|(_, _, poem)| poem)
        .collect())
}

/// Builds a bundle document from a manifest directory.
pub fn build_bundle(dir: &Path) -> Result<Bundle, LoadError> {
    let (files, poems) = read_manifest_dir(dir)?
        .into_iter()
        .map(|(entry, raw, _)| (entry, raw))
        .unzip();
    Ok(Bundle {
        version: BUNDLE_VERSION,
        generated_at: None,
        files,
        poems,
    })
}
