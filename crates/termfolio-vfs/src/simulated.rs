//! The fixed directory map and file table behind the portfolio shell.
//!
//! Paths are `~`-rooted strings (`~`, `~/about`, ...). Files are looked up by
//! bare name regardless of which directory lists them.

use std::borrow::Cow;
use std::collections::BTreeMap;

use termfolio_types::content::ContentTable;

use crate::Filesystem;

/// The home directory; the root of the simulated tree.
pub const HOME: &str = "~";

/// A read-only in-memory directory map plus file table.
///
/// Built once from the content table; there are no mutating methods after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedFs {
    dirs: BTreeMap<String, Vec<String>>,
    files: BTreeMap<String, String>,
}

impl SimulatedFs {
    /// An empty tree containing only an empty home directory.
    pub fn empty() -> Self {
        let mut dirs = BTreeMap::new();
        dirs.insert(HOME.to_string(), Vec::new());
        Self {
            dirs,
            files: BTreeMap::new(),
        }
    }

    /// Builder: add (or replace) a directory with the given ordered entries.
    pub fn with_dir(mut self, path: &str, entries: &[&str]) -> Self {
        self.dirs.insert(
            normalize(path).into_owned(),
            entries.iter().map(|e| e.to_string()).collect(),
        );
        self
    }

    /// Builder: add (or replace) a file's literal content.
    pub fn with_file(mut self, name: &str, content: impl Into<String>) -> Self {
        self.files.insert(name.to_string(), content.into());
        self
    }

    /// The standard portfolio tree, with file contents drawn from `content`.
    pub fn from_content(content: &dyn ContentTable) -> Self {
        let about = content.about();
        let handle = &about.handle;

        let project_dirs: Vec<String> = content
            .projects()
            .iter()
            .map(|p| format!("{}/", slug(&p.name)))
            .collect();
        let skill_files: Vec<String> = content
            .skills()
            .iter()
            .map(|s| format!("{}.txt", slug(&s.category)))
            .collect();

        let mut fs = Self::empty()
            .with_dir(
                HOME,
                &[
                    "about/",
                    "projects/",
                    "skills/",
                    "documents/",
                    "resume.pdf",
                    "contact.txt",
                    ".bashrc",
                    ".ssh/",
                ],
            )
            .with_dir("~/about", &["bio.txt", "location.txt", "status.txt"])
            .with_dir("~/documents", &["notes.md", "ideas.txt", "todo.txt"])
            .with_dir("~/.ssh", &["id_rsa", "id_rsa.pub", "known_hosts", "config"])
            .with_file("bio.txt", about.bio.clone())
            .with_file("location.txt", about.location.clone())
            .with_file("status.txt", about.status.clone())
            .with_file(
                "contact.txt",
                format!(
                    "Email: {}\nLocation: {}",
                    content.contact().email,
                    about.location
                ),
            )
            .with_file(
                ".bashrc",
                "# ~/.bashrc\nexport PS1=\"\\u@portfolio:\\w$ \"\nalias ll=\"ls -la\"\nalias cls=\"clear\"",
            )
            .with_file(
                "notes.md",
                "# Project Notes\n\n- Finish CLI portfolio\n- Update resume\n- Practice CTF challenges",
            )
            .with_file(
                "todo.txt",
                "[ ] Update LinkedIn\n[ ] Push code to GitHub\n[x] Build portfolio site",
            )
            .with_file(
                "id_rsa.pub",
                format!("ssh-rsa AAAA[SIMULATED_KEY_DATA]... {handle}@portfolio"),
            );

        fs.dirs.insert("~/projects".to_string(), project_dirs);
        // Skill files are listed only; `skills` renders their content.
        fs.dirs.insert("~/skills".to_string(), skill_files);
        log::debug!(
            "Simulated fs: {} directories, {} files",
            fs.dirs.len(),
            fs.files.len()
        );
        fs
    }
}

impl Default for SimulatedFs {
    fn default() -> Self {
        Self::empty()
    }
}

impl Filesystem for SimulatedFs {
    fn list_entries(&self, path: &str) -> Option<&[String]> {
        self.dirs.get(normalize(path).as_ref()).map(Vec::as_slice)
    }

    fn read_file(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }
}

/// Collapse repeated slashes and strip a trailing slash. Returns the input
/// unchanged (zero-alloc) when already in normal form.
fn normalize(path: &str) -> Cow<'_, str> {
    if !path.contains("//") && (path.len() <= 1 || !path.ends_with('/')) {
        return Cow::Borrowed(path);
    }
    let mut result = String::with_capacity(path.len());
    let mut prev_slash = false;
    for ch in path.chars() {
        if ch == '/' {
            if !prev_slash {
                result.push(ch);
            }
            prev_slash = true;
        } else {
            result.push(ch);
            prev_slash = false;
        }
    }
    if result.len() > 1 && result.ends_with('/') {
        result.pop();
    }
    Cow::Owned(result)
}

/// Lower-case, dash-separated file name derived from a display name.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        out.push_str("untitled");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_types::content::Portfolio;

    fn portfolio_fs() -> (Portfolio, SimulatedFs) {
        let p = Portfolio::builtin().unwrap();
        let fs = SimulatedFs::from_content(&p);
        (p, fs)
    }

    #[test]
    fn home_listing_order() {
        let (_, fs) = portfolio_fs();
        let home = fs.list_entries("~").unwrap();
        assert_eq!(home[0], "about/");
        assert_eq!(home[4], "resume.pdf");
        assert!(home.contains(&".ssh/".to_string()));
        assert_eq!(home.len(), 8);
    }

    #[test]
    fn bio_matches_content() {
        let (p, fs) = portfolio_fs();
        assert_eq!(fs.read_file("bio.txt"), Some(p.about.bio.as_str()));
    }

    #[test]
    fn contact_file_lists_email_and_location() {
        let (p, fs) = portfolio_fs();
        let contact = fs.read_file("contact.txt").unwrap();
        assert!(contact.contains(&p.contact.email));
        assert!(contact.contains(&p.about.location));
    }

    #[test]
    fn projects_dir_follows_content() {
        let (p, fs) = portfolio_fs();
        let entries = fs.list_entries("~/projects").unwrap();
        assert_eq!(entries.len(), p.projects.len());
        assert!(entries.iter().all(|e| e.ends_with('/')));
        assert!(entries.contains(&"cli-portfolio/".to_string()));
    }

    #[test]
    fn skill_files_listed_but_unreadable() {
        let (_, fs) = portfolio_fs();
        let entries = fs.list_entries("~/skills").unwrap();
        assert!(entries.contains(&"devops-cloud.txt".to_string()));
        assert!(entries.contains(&"languages.txt".to_string()));
        assert_eq!(fs.read_file("languages.txt"), None);
    }

    #[test]
    fn resume_listed_but_unreadable() {
        let (_, fs) = portfolio_fs();
        assert!(fs.list_entries("~").unwrap().contains(&"resume.pdf".to_string()));
        assert_eq!(fs.read_file("resume.pdf"), None);
    }

    #[test]
    fn public_key_uses_handle() {
        let (p, fs) = portfolio_fs();
        let key = fs.read_file("id_rsa.pub").unwrap();
        assert!(key.ends_with(&format!("{}@portfolio", p.about.handle)));
        assert_eq!(fs.read_file("id_rsa"), None);
    }

    #[test]
    fn unknown_directory_is_none() {
        let (_, fs) = portfolio_fs();
        assert!(fs.list_entries("/etc").is_none());
        assert!(fs.list_entries("about").is_none());
        assert!(!fs.is_dir("~/nope"));
    }

    #[test]
    fn trailing_slash_normalized() {
        let (_, fs) = portfolio_fs();
        assert_eq!(fs.list_entries("~/about/"), fs.list_entries("~/about"));
        assert_eq!(fs.list_entries("~//about"), fs.list_entries("~/about"));
    }

    #[test]
    fn empty_tree_has_home() {
        let fs = SimulatedFs::empty();
        assert_eq!(fs.list_entries(HOME), Some(&[][..]));
        assert_eq!(fs.home(), "~");
        assert_eq!(fs.read_file("bio.txt"), None);
    }

    #[test]
    fn builder_replaces_entries() {
        let fs = SimulatedFs::empty()
            .with_dir("~", &["a.txt"])
            .with_file("a.txt", "one")
            .with_file("a.txt", "two");
        assert_eq!(fs.list_entries("~").unwrap(), &["a.txt".to_string()]);
        assert_eq!(fs.read_file("a.txt"), Some("two"));
    }

    #[test]
    fn slug_examples() {
        assert_eq!(slug("DevOps & Cloud"), "devops-cloud");
        assert_eq!(slug("CLI Portfolio"), "cli-portfolio");
        assert_eq!(slug("  C# / .NET "), "c-net");
        assert_eq!(slug("!!!"), "untitled");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn normalize_is_idempotent(path in "[~/a-z0-9_.]{1,40}") {
                let once = normalize(&path);
                let twice = normalize(&once);
                prop_assert_eq!(&once, &twice);
            }

            #[test]
            fn normalize_never_has_double_slashes(path in "[~/a-z0-9_.]{1,40}") {
                prop_assert!(!normalize(&path).contains("//"));
            }

            #[test]
            fn lookups_never_change_the_tree(path in "[~/a-z.]{0,20}", name in "[a-z._]{0,12}") {
                let (_, fs) = portfolio_fs();
                let before = fs.clone();
                let _ = fs.list_entries(&path);
                let _ = fs.read_file(&name);
                prop_assert_eq!(before, fs);
            }

            #[test]
            fn slug_is_filename_safe(name in ".{0,30}") {
                let s = slug(&name);
                prop_assert!(!s.is_empty());
                prop_assert!(!s.contains('/'));
                prop_assert!(!s.starts_with('-') && !s.ends_with('-'));
            }
        }
    }
}
