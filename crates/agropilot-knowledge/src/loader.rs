// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recursive knowledge file loader.
//!
//! Reads `.txt` and `.md` files as paragraph-split plaintext and extracts
//! text from `.pdf` files. Individual file failures are logged and skipped;
//! only an unreadable root directory is reported to the caller.

use std::path::Path;

use agropilot_core::AgropilotError;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// PDF paragraphs shorter than this are extraction noise and dropped.
const MIN_PDF_PARAGRAPH_LEN: usize = 50;

/// Load every supported file under `dir` into knowledge items.
///
/// Returns the collected paragraphs in directory-walk order. Per-file
/// errors never fail the load.
pub fn load_directory(dir: &Path) -> Result<Vec<String>, AgropilotError> {
    if !dir.is_dir() {
        return Err(AgropilotError::Knowledge {
            source: Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("knowledge directory not found: {}", dir.display()),
            )),
        });
    }

    let mut items = Vec::new();

    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };

        match ext.to_ascii_lowercase().as_str() {
            "txt" | "md" => match std::fs::read_to_string(path) {
                Ok(content) => {
                    let before = items.len();
                    items.extend(split_paragraphs(&content, 0));
                    debug!(
                        file = %path.display(),
                        paragraphs = items.len() - before,
                        "loaded knowledge file"
                    );
                }
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "skipping unreadable file");
                }
            },
            "pdf" => match pdf_extract::extract_text(path) {
                Ok(text) => {
                    let before = items.len();
                    items.extend(split_paragraphs(&text, MIN_PDF_PARAGRAPH_LEN));
                    debug!(
                        file = %path.display(),
                        paragraphs = items.len() - before,
                        "loaded PDF knowledge file"
                    );
                }
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "skipping unreadable PDF");
                }
            },
            _ => {}
        }
    }

    Ok(items)
}

/// Split text into trimmed, non-empty paragraphs on blank lines, dropping
/// paragraphs shorter than `min_len`.
fn split_paragraphs(text: &str, min_len: usize) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty() && p.len() > min_len)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn splits_on_blank_lines_and_trims() {
        let text = "first paragraph\n\n  second paragraph  \n\n\n\nthird";
        let paragraphs = split_paragraphs(text, 0);
        assert_eq!(paragraphs, vec!["first paragraph", "second paragraph", "third"]);
    }

    #[test]
    fn min_len_filters_short_paragraphs() {
        let text = "tiny\n\nthis paragraph is comfortably longer than fifty characters in total";
        let paragraphs = split_paragraphs(text, MIN_PDF_PARAGRAPH_LEN);
        assert_eq!(paragraphs.len(), 1);
    }

    #[test]
    fn loads_txt_and_md_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "fact one\n\nfact two").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("b.md"), "fact three").unwrap();
        fs::write(dir.path().join("ignored.csv"), "not,knowledge").unwrap();

        let mut items = load_directory(dir.path()).unwrap();
        items.sort();
        assert_eq!(items, vec!["fact one", "fact three", "fact two"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = load_directory(Path::new("/nonexistent/knowledge")).unwrap_err();
        assert!(err.to_string().contains("knowledge"));
    }

    #[test]
    fn empty_directory_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let items = load_directory(dir.path()).unwrap();
        assert!(items.is_empty());
    }
}
