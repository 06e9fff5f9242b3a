// src/resolve/mod.rs
// =============================================================================
// This module turns the positional arguments into the list of URLs to visit.
//
// Two forms:
// - URL [URL...]              -> visit exactly those URLs, in order
// - BASE_URL STATIC_SITE_DIR  -> visit the "pretty" URL of every index.html
//                                found under STATIC_SITE_DIR
//
// The second form only applies when there are exactly two arguments AND the
// second one is an existing directory. Anything else is a list of URLs.
// =============================================================================

mod site;

use std::path::Path;

use anyhow::Result;

pub use site::site_urls;

// Resolves the command-line targets into an ordered list of URLs
//
// A second argument that doesn't exist (or is a plain file) is not an
// error: both arguments are then treated as URLs.
pub fn resolve_targets(args: &[String]) -> Result<Vec<String>> {
    if let [base_url, dir] = args {
        let dir = Path::new(dir);
        if dir.is_dir() {
            return site_urls(base_url, dir);
        }
    }

    Ok(args.to_vec())
}
