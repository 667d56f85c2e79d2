/// Line-oriented document model.
///
/// A [`Document`] keeps every line together with its own terminator, so
/// `Document::parse(text).render()` reproduces `text` byte for byte and
/// untouched lines survive a rewrite exactly as they were.
use crate::common::{Error, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// An ordered, mutable sequence of text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split `text` into lines, keeping each `\n` with the line it ends.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_owned).collect(),
        }
    }

    /// Read a UTF-8 document from disk.
    ///
    /// A missing file is reported as [`Error::InputNotFound`]; any other
    /// failure, including invalid UTF-8, as [`Error::Io`].
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(Error::InputNotFound(path.to_path_buf()))
            },
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Lines, terminators included.
    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Replace the line at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn replace_line(&mut self, index: usize, line: String) {
        self.lines[index] = line;
    }

    /// Concatenate all lines back into one string.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(String::len).sum());
        for line in &self.lines {
            out.push_str(line);
        }
        out
    }

    /// Write the document to `path` all at once.
    ///
    /// The content goes to a temporary file in the destination directory,
    /// which is then renamed over `path`. If anything fails the destination
    /// keeps its previous content and the temporary file is removed.
    ///
    /// An existing destination is resolved through symlinks first, so the
    /// file a link points to is updated and the link survives; it also keeps
    /// its permissions. A new destination gets the same mode as a freshly
    /// created file (0666 minus the umask).
    pub fn write_atomic<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let target = resolve_destination(path.as_ref())?;
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let existing = fs::metadata(&target).ok();

        let mut builder = Builder::new();
        if existing.is_none() {
            use_default_file_mode(&mut builder);
        }

        let mut tmp = builder.tempfile_in(dir)?;
        tmp.write_all(self.render().as_bytes())?;
        tmp.as_file().sync_all()?;

        if let Some(metadata) = existing {
            tmp.as_file().set_permissions(metadata.permissions())?;
        }

        tmp.persist(&target)?;
        Ok(())
    }
}

/// Create new files as `open(path, O_CREAT, 0o666)` would; the umask applies.
#[cfg(unix)]
fn use_default_file_mode(builder: &mut Builder<'_, '_>) {
    use std::os::unix::fs::PermissionsExt;
    builder.permissions(fs::Permissions::from_mode(0o666));
}

#[cfg(not(unix))]
fn use_default_file_mode(_builder: &mut Builder<'_, '_>) {}

/// Follow symlinks of an existing destination; new paths are used as given.
fn resolve_destination(path: &Path) -> Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(Error::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_render_round_trip() {
        for text in [
            "",
            "no newline",
            "## A\nbody\n",
            "## A\r\nbody\r\n\r\n",
            "\n\n## A\nlast line without newline",
        ] {
            assert_eq!(Document::parse(text).render(), text);
        }
    }

    #[test]
    fn test_lines_keep_terminators() {
        let doc = Document::parse("## A\r\nbody\nend");
        assert_eq!(doc.lines(), ["## A\r\n", "body\n", "end"]);
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("missing.qmd");
        let err = Document::read(&path).unwrap_err();
        assert!(matches!(err, Error::InputNotFound(p) if p == path));
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("binary.qmd");
        fs::write(&path, [0x23, 0x23, 0x20, 0xff, 0xfe, 0x0a]).expect("write fixture");
        assert!(matches!(Document::read(&path), Err(Error::Io(_))));
    }

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("deck.qmd");
        fs::write(&path, "old\n").expect("write fixture");

        Document::parse("## New\n").write_atomic(&path).expect("write document");

        assert_eq!(fs::read_to_string(&path).expect("read back"), "## New\n");
        let leftovers = fs::read_dir(dir.path()).expect("list dir").count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_write_atomic_into_missing_directory_fails_cleanly() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("nope").join("deck.qmd");
        assert!(Document::parse("## A\n").write_atomic(&path).is_err());
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("deck.qmd");
        fs::write(&path, "old\n").expect("write fixture");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).expect("chmod");

        Document::parse("new\n").write_atomic(&path).expect("write document");

        let mode = fs::metadata(&path).expect("stat").permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_new_file_uses_default_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().expect("create temp dir");
        let sibling = dir.path().join("in.qmd");
        fs::write(&sibling, "## A\n").expect("write fixture");
        let path = dir.path().join("out.qmd");

        Document::parse("## A\n").write_atomic(&path).expect("write document");

        let expected = fs::metadata(&sibling).expect("stat input").permissions().mode();
        let mode = fs::metadata(&path).expect("stat output").permissions().mode();
        assert_eq!(mode & 0o777, expected & 0o777);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_through_symlink_updates_target() {
        let dir = tempdir().expect("create temp dir");
        let real = dir.path().join("real.qmd");
        let link = dir.path().join("link.qmd");
        fs::write(&real, "## A\n").expect("write fixture");
        std::os::unix::fs::symlink(&real, &link).expect("create symlink");

        Document::parse("## B\n").write_atomic(&link).expect("write document");

        assert!(fs::symlink_metadata(&link).expect("lstat").file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).expect("read target"), "## B\n");
        assert_eq!(fs::read_to_string(&link).expect("read link"), "## B\n");
    }
}
