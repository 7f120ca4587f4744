use std::error::Error;

use promo_plan::{content, report};

/// Output path, relative to the working directory.
///
/// Fonts must be present under `assets/fonts` relative to the crate manifest,
/// installed as the system DejaVu package, or provided via the
/// `PROMO_PLAN_FONTS_DIR` environment variable.
const OUTPUT_FILE: &str = "Plan_Promocji_Luty_2026.pdf";

fn run() -> Result<(), promo_plan::error::Error> {
    let rendered = report::render_plan(&content::PLAN)?;
    std::fs::write(OUTPUT_FILE, &rendered.bytes)?;
    println!("PDF wygenerowany: {OUTPUT_FILE} ({} stron)", rendered.pages);
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        print_error_sources(&err);
        std::process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
