use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::data;

/// Required directories that will be created if missing
const REQUIRED_DIRS: &[&str] = &[
    "website",
    "website/data",
    "website/static",
    "website/static/css",
];

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories and warns about missing site files. A
/// missing portfolio document is not fatal: pages show the load-failure
/// message until it appears.
pub fn run() {
    info!("Folio boot check starting...");

    let mut errors = 0u32;

    // ── 1. Directories ─────────────────────────────────
    for dir in REQUIRED_DIRS {
        let path = Path::new(dir);
        if !path.exists() {
            match fs::create_dir_all(path) {
                Ok(_) => info!("  Created directory: {}", dir),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir, e);
                    errors += 1;
                }
            }
        }
    }

    // ── 2. Site files ──────────────────────────────────
    if !Path::new(data::DATA_FILE).exists() {
        warn!(
            "  Missing portfolio document: {} (pages will show the load error until it exists)",
            data::DATA_FILE
        );
    }
    if !Path::new("website/static/css/style.css").exists() {
        warn!("  Missing stylesheet: website/static/css/style.css (page will be unstyled)");
    }

    if errors > 0 {
        error!("Boot check failed with {} error(s). Aborting.", errors);
        process::exit(1);
    }

    info!("Boot check complete");
}
