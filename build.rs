// Refreshes `dist/` from `static/` so the deployable tree always matches the
// sources. The wasm-pack pass drives its own cargo build, so nothing heavy
// happens here when compiling for wasm32.
use std::path::Path;
use std::{env, fs};

use fs_extra::dir::{self, CopyOptions};

fn main() {
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    let dist = Path::new("dist");
    if dist.exists() {
        fs::remove_dir_all(dist).ok();
    }
    fs::create_dir_all(dist).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let mut options = CopyOptions::new();
        options.overwrite = true;
        options.content_only = true;
        if let Err(err) = dir::copy(static_dir, dist, &options) {
            println!("cargo:warning=failed to refresh dist/: {err}");
        }
    }
}
