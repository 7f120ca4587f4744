//! Font loading utilities for the promo_plan crate.
//!
//! The document embeds DejaVu Sans (regular and bold), the family the plan
//! was typeset with.  The loader searches, in order: the directory named by
//! `PROMO_PLAN_FONTS_DIR`, the bundled `assets/fonts` directory next to the
//! manifest, and the Debian system location under
//! `/usr/share/fonts/truetype/dejavu`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Name of the embedded font family.
pub const FONT_FAMILY_NAME: &str = "DejaVu Sans";

/// Environment variable that overrides the font search path.
pub const FONTS_DIR_ENV: &str = "PROMO_PLAN_FONTS_DIR";

/// File name of the regular face.
pub const REGULAR_FILE: &str = "DejaVuSans.ttf";
/// File name of the bold face.
pub const BOLD_FILE: &str = "DejaVuSans-Bold.ttf";
const FONT_FILES: &[&str] = &[REGULAR_FILE, BOLD_FILE];

const SYSTEM_FONT_DIR: &str = "/usr/share/fonts/truetype/dejavu";

/// Raw TTF bytes for the regular and bold faces of the document family.
///
/// The same bytes feed both the printpdf embedding step and the rusttype
/// metrics used for wrapping and alignment, so the measured document matches
/// the rendered one.
pub struct FontSet {
    /// Contents of `DejaVuSans.ttf`.
    pub regular: Vec<u8>,
    /// Contents of `DejaVuSans-Bold.ttf`.
    pub bold: Vec<u8>,
}

fn font_directory_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(path) = env::var(FONTS_DIR_ENV) {
        if !path.trim().is_empty() {
            candidates.push(PathBuf::from(path));
        }
    }

    let manifest_candidate = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts");
    if !candidates
        .iter()
        .any(|existing| existing == &manifest_candidate)
    {
        candidates.push(manifest_candidate);
    }

    candidates.push(PathBuf::from(SYSTEM_FONT_DIR));

    candidates
}

fn missing_font_files(path: &Path) -> Vec<PathBuf> {
    FONT_FILES
        .iter()
        .map(|name| path.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect()
}

fn resolve_font_directory() -> Result<PathBuf, Error> {
    let mut attempts = Vec::new();

    for candidate in font_directory_candidates() {
        let exists = candidate.is_dir();
        let missing = missing_font_files(&candidate);

        if exists && missing.is_empty() {
            return Ok(candidate);
        }

        let reason = if !exists {
            format!("directory missing at {}", candidate.display())
        } else {
            let missing_list = missing
                .iter()
                .map(|path| path.file_name().unwrap_or_default().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(", ");
            format!("missing files [{}]", missing_list)
        };

        attempts.push(format!("{} ({})", candidate.display(), reason));
    }

    let summary = if attempts.is_empty() {
        "no search paths were available".to_owned()
    } else {
        attempts.join(", ")
    };

    Err(Error::FontsNotFound { checked: summary })
}

/// Loads the DejaVu Sans regular/bold pair from the first usable directory.
pub fn load_default() -> Result<FontSet, Error> {
    let directory = resolve_font_directory()?;
    log::debug!("loading fonts from {}", directory.display());

    Ok(FontSet {
        regular: fs::read(directory.join(REGULAR_FILE))?,
        bold: fs::read(directory.join(BOLD_FILE))?,
    })
}

/// Indicates whether the required font files can be resolved on this machine.
///
/// Rendering tests use this to skip instead of failing on hosts without the
/// DejaVu package or bundled assets.
pub fn fonts_available() -> bool {
    resolve_font_directory().is_ok()
}
