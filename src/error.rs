//! Error type shared by the font loader, the composer, and the report script.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that can abort document generation.
///
/// There is no recovery path anywhere in the crate: every error propagates to
/// the binary, which reports the chain and exits non-zero without leaving a
/// partially written file behind.
#[derive(Debug, Error)]
pub enum Error {
    /// No directory in the search order contained the required font files.
    #[error(
        "unable to locate the DejaVu fonts; checked: {checked}. \
         See assets/fonts/README.md or set PROMO_PLAN_FONTS_DIR"
    )]
    FontsNotFound {
        /// Human-readable summary of the attempted search paths.
        checked: String,
    },

    /// A font file existed but could not be parsed as a TrueType font.
    #[error("failed to parse font file {}", path.display())]
    FontParse {
        /// Path of the rejected font file.
        path: PathBuf,
    },

    /// Error reported by the printpdf backend.
    #[error("PDF backend error")]
    Pdf(#[from] printpdf::errors::Error),

    /// Filesystem error while reading fonts or writing the output document.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
