//! Read-only simulated file system.
//!
//! The shell never touches a real disk. Filesystem-flavored commands look up
//! a fixed directory map and a table of literal file contents; nothing gains
//! or loses entries at runtime.

mod simulated;

pub use simulated::{HOME, SimulatedFs};

/// What a directory entry name denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A directory entry name, classified.
///
/// Directory names carry a trailing `/` in the map; hidden names start
/// with `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VfsEntry<'a> {
    /// The raw name as stored (directories keep their trailing `/`).
    pub raw: &'a str,
}

impl<'a> VfsEntry<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    pub fn kind(&self) -> EntryKind {
        if self.raw.ends_with('/') {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind() == EntryKind::Directory
    }

    pub fn is_hidden(&self) -> bool {
        self.raw.starts_with('.')
    }

    /// The name without the directory marker.
    pub fn name(&self) -> &'a str {
        self.raw.strip_suffix('/').unwrap_or(self.raw)
    }
}

/// Read-only access to the simulated file system.
pub trait Filesystem {
    /// Ordered entry names of the directory at `path`, or `None` if the map
    /// has no such directory.
    fn list_entries(&self, path: &str) -> Option<&[String]>;

    /// Literal content of a file, looked up by bare file name.
    fn read_file(&self, name: &str) -> Option<&str>;

    /// Whether `path` is a key of the directory map.
    fn is_dir(&self, path: &str) -> bool {
        self.list_entries(path).is_some()
    }

    /// The path listed when no directory is given.
    fn home(&self) -> &str {
        HOME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_entry_classified() {
        let e = VfsEntry::new("projects/");
        assert_eq!(e.kind(), EntryKind::Directory);
        assert!(e.is_dir());
        assert!(!e.is_hidden());
        assert_eq!(e.name(), "projects");
    }

    #[test]
    fn hidden_file_entry() {
        let e = VfsEntry::new(".bashrc");
        assert_eq!(e.kind(), EntryKind::File);
        assert!(e.is_hidden());
        assert_eq!(e.name(), ".bashrc");
    }

    #[test]
    fn hidden_directory_entry() {
        let e = VfsEntry::new(".ssh/");
        assert!(e.is_dir());
        assert!(e.is_hidden());
        assert_eq!(e.name(), ".ssh");
    }
}
