// src/resolve/site.rs
// =============================================================================
// Builds the list of "pretty" URLs for a locally built static site.
//
// Every index.html under the site directory is served by the web server at
// its directory path, so:
//   public/index.html          -> https://example.com/
//   public/docs/index.html     -> https://example.com/docs/
//   public/docs/api/index.html -> https://example.com/docs/api/
//
// Entries are visited sorted by file name, so the same directory always
// produces the same list in the same order.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

const INDEX_HTML: &str = "index.html";

// Walks `dir` and returns one URL per index.html file found
//
// Parameters:
//   base_url: prefix for every URL; trailing slashes are trimmed so we never
//             produce "https://example.com//docs/"
//   dir: the static site root (e.g. the "public" output directory)
//
// Any walk error (permissions, vanished entries, ...) fails the whole
// resolution. We never hand back a partial list.
pub fn site_urls(base_url: &str, dir: &Path) -> Result<Vec<String>> {
    let base_url = base_url.trim_end_matches('/');
    let mut urls = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", dir.display()))?;

        if !entry.file_type().is_file() || entry.file_name() != INDEX_HTML {
            continue;
        }

        let page_dir = entry
            .path()
            .strip_prefix(dir)
            .with_context(|| format!("{} is outside {}", entry.path().display(), dir.display()))?
            .parent()
            .unwrap_or_else(|| Path::new(""));

        urls.push(pretty_url(base_url, page_dir));
    }

    Ok(urls)
}

// Joins the base URL with a directory path relative to the site root,
// using forward slashes and ending in '/'
fn pretty_url(base_url: &str, page_dir: &Path) -> String {
    let mut url = format!("{}/", base_url);
    for component in page_dir.components() {
        url.push_str(&component.as_os_str().to_string_lossy());
        url.push('/');
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<html></html>").unwrap();
    }

    #[test]
    fn test_index_files_become_pretty_urls() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "a/index.html");
        touch(tmp.path(), "a/b/index.html");
        touch(tmp.path(), "c.html");

        let urls = site_urls("https://example.com/", tmp.path()).unwrap();
        assert_eq!(urls, vec!["https://example.com/a/b/", "https://example.com/a/"]);
    }

    #[test]
    fn test_root_index_maps_to_base() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "index.html");

        let urls = site_urls("https://example.com", tmp.path()).unwrap();
        assert_eq!(urls, vec!["https://example.com/"]);
    }

    #[test]
    fn test_no_double_slash() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "docs/index.html");

        let urls = site_urls("https://example.com///", tmp.path()).unwrap();
        assert_eq!(urls, vec!["https://example.com/docs/"]);
        assert!(urls.iter().all(|u| !u.contains("com//")));
    }

    #[test]
    fn test_trailing_separator_on_dir_is_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "docs/index.html");

        let with_slash = format!("{}/", tmp.path().display());
        let urls = site_urls("https://example.com", Path::new(&with_slash)).unwrap();
        assert_eq!(urls, vec!["https://example.com/docs/"]);
    }

    #[test]
    fn test_directory_named_index_html_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("index.html")).unwrap();
        touch(tmp.path(), "blog/index.html");

        let urls = site_urls("https://example.com", tmp.path()).unwrap();
        assert_eq!(urls, vec!["https://example.com/blog/"]);
    }

    #[test]
    fn test_walk_order_is_sorted_by_name() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "zeta/index.html");
        touch(tmp.path(), "alpha/index.html");
        touch(tmp.path(), "mid/index.html");

        let urls = site_urls("https://example.com", tmp.path()).unwrap();
        assert_eq!(
            urls,
            vec![
                "https://example.com/alpha/",
                "https://example.com/mid/",
                "https://example.com/zeta/",
            ]
        );
    }

    #[test]
    fn test_empty_site() {
        let tmp = tempfile::tempdir().unwrap();
        let urls = site_urls("https://example.com", tmp.path()).unwrap();
        assert!(urls.is_empty());
    }
}
