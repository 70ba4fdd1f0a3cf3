//! Candidate-file discovery: enumerate the markdown files of one directory.
//!
//! The ebook layout is flat — every chapter is a `*.md` file directly in
//! the ebook directory, with generated assets in subdirectories. Discovery
//! therefore does not recurse. Dotfiles are excluded (editor droppings like
//! `.#chapter1.md` are not chapters), and results are sorted by file name
//! so runs are deterministic and chapters process in book order.

use crate::error::FigpatchError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// List the markdown files directly inside `dir`, sorted by file name.
///
/// Only regular files with an `md` extension are returned; dotfiles and
/// subdirectories are ignored. The skip list (e.g. `README.md`) is applied
/// by the caller, not here — discovery reports what exists.
pub fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>, FigpatchError> {
    if !dir.exists() {
        return Err(FigpatchError::DirNotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(FigpatchError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| FigpatchError::ReadDirFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FigpatchError::ReadDirFailed {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if hidden {
            continue;
        }

        files.push(path);
    }

    files.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    debug!("Discovered {} markdown file(s) in {}", files.len(), dir.display());

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "content\n").unwrap();
    }

    #[test]
    fn lists_only_markdown_files_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "chapter2.md");
        touch(tmp.path(), "chapter1.md");
        touch(tmp.path(), "notes.txt");
        touch(tmp.path(), "cover.png");

        let files = markdown_files(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["chapter1.md", "chapter2.md"]);
    }

    #[test]
    fn dotfiles_are_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), ".draft.md");
        touch(tmp.path(), "chapter1.md");

        let files = markdown_files(tmp.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("chapter1.md"));
    }

    #[test]
    fn subdirectories_are_not_recursed() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("images")).unwrap();
        touch(&tmp.path().join("images"), "nested.md");
        touch(tmp.path(), "chapter1.md");

        let files = markdown_files(tmp.path()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn missing_directory_is_a_typed_error() {
        let err = markdown_files(Path::new("/definitely/not/a/real/dir")).unwrap_err();
        assert!(matches!(err, FigpatchError::DirNotFound { .. }));
    }

    #[test]
    fn file_path_is_not_a_directory() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "chapter1.md");
        let err = markdown_files(&tmp.path().join("chapter1.md")).unwrap_err();
        assert!(matches!(err, FigpatchError::NotADirectory { .. }));
    }

    #[test]
    fn empty_directory_yields_empty_list() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(markdown_files(tmp.path()).unwrap().is_empty());
    }
}
