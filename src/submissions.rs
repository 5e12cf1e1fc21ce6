// Submission sets and document loading.
//
// A SubmissionSet maps each submitter identity to the file that will be
// compared. Order matters: it decides the position of each document in the
// score matrix, which in turn decides pair orientation and tie-breaks in the
// ranked output. So the set is an ordered list, not a hash map.
//
// Loading turns a SubmissionSet into normalized Documents. Missing and
// unreadable files are skipped and recorded as Diagnostics for the caller to
// report; they are only logged at debug level here. Nothing aborts a run.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{CheckerError, ManifestError};
use crate::normalize::normalize;

/// Ordered mapping from submitter identity to a file path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionSet {
    entries: Vec<(String, PathBuf)>,
}

impl SubmissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the path for an identity.
    ///
    /// Re-inserting an existing identity keeps its original position.
    pub fn insert(&mut self, identity: impl Into<String>, path: impl Into<PathBuf>) {
        let identity = identity.into();
        let path = path.into();
        match self.entries.iter_mut().find(|(id, _)| *id == identity) {
            Some(entry) => entry.1 = path,
            None => self.entries.push((identity, path)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, identity: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(id, _)| id == identity)
            .map(|(_, path)| path.as_path())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(id, path)| (id.as_str(), path.as_path()))
    }

    /// Point every identity at the same relative file inside its repository.
    ///
    /// `repos` pairs each identity with the local root of its repository.
    pub fn from_repos<I, S, P>(repos: I, relative_file: impl AsRef<Path>) -> Self
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<String>,
        P: AsRef<Path>,
    {
        let relative_file = relative_file.as_ref();
        let mut set = Self::new();
        for (identity, repo) in repos {
            set.insert(identity, repo.as_ref().join(relative_file));
        }
        set
    }

    /// Treat each subdirectory of `root` as one submitter's repository.
    ///
    /// The directory name is the identity. Entries are sorted by name so the
    /// same tree always yields the same order.
    pub fn from_repo_root(
        root: impl AsRef<Path>,
        relative_file: impl AsRef<Path>,
    ) -> Result<Self, CheckerError> {
        let root = root.as_ref();
        let repo_dir_err = |source| CheckerError::RepoDir {
            path: root.to_path_buf(),
            source,
        };

        let mut repos: Vec<(String, PathBuf)> = Vec::new();
        for entry in fs::read_dir(root).map_err(repo_dir_err)? {
            let entry = entry.map_err(repo_dir_err)?;
            if !entry.file_type().map_err(repo_dir_err)?.is_dir() {
                continue;
            }
            let identity = entry.file_name().to_string_lossy().into_owned();
            repos.push((identity, entry.path()));
        }
        repos.sort_by(|a, b| a.0.cmp(&b.0));

        debug!(root = %root.display(), repos = repos.len(), "Resolved repositories");
        Ok(Self::from_repos(repos, relative_file))
    }

    /// Read a JSON object of `identity -> path` pairs, keeping file order.
    ///
    /// Relative paths are resolved against the manifest's own directory.
    pub fn from_manifest(path: impl AsRef<Path>) -> Result<Self, CheckerError> {
        let path = path.as_ref();
        let manifest_err = |source| CheckerError::Manifest {
            path: path.to_path_buf(),
            source,
        };

        let text = fs::read_to_string(path).map_err(|e| manifest_err(ManifestError::Io(e)))?;
        let value: Value =
            serde_json::from_str(&text).map_err(|e| manifest_err(ManifestError::Json(e)))?;
        let Value::Object(map) = value else {
            return Err(manifest_err(ManifestError::NotAnObject));
        };

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let mut set = Self::new();
        for (identity, entry) in map {
            let Value::String(file) = entry else {
                return Err(manifest_err(ManifestError::NotAPath(identity)));
            };
            set.insert(identity, base.join(file));
        }
        Ok(set)
    }
}

impl<S: Into<String>, P: Into<PathBuf>> FromIterator<(S, P)> for SubmissionSet {
    fn from_iter<T: IntoIterator<Item = (S, P)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (identity, path) in iter {
            set.insert(identity, path);
        }
        set
    }
}

/// Normalized text of one submission, ready for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub identity: String,
    pub text: String,
}

/// A non-fatal condition noticed during a comparison run.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The listed path does not exist; the identity was left out.
    MissingInput { identity: String, path: PathBuf },
    /// The path exists but could not be read as UTF-8 text; left out.
    Unreadable {
        identity: String,
        path: PathBuf,
        reason: String,
    },
    /// Fewer than two documents survived loading; nothing was compared.
    InsufficientData { documents: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput { identity, path } => {
                write!(f, "File not found for {identity} at {}", path.display())
            }
            Self::Unreadable {
                identity,
                path,
                reason,
            } => write!(
                f,
                "Could not read file for {identity} at {}: {reason}",
                path.display()
            ),
            Self::InsufficientData { documents } => write!(
                f,
                "Not enough files to compare ({documents} readable, need at least 2)"
            ),
        }
    }
}

/// Read and normalize every submission, in set order.
///
/// Returns the surviving documents plus one diagnostic per skipped entry.
pub fn load_documents(submissions: &SubmissionSet) -> (Vec<Document>, Vec<Diagnostic>) {
    let mut documents = Vec::with_capacity(submissions.len());
    let mut diagnostics = Vec::new();

    for (identity, path) in submissions.iter() {
        if !path.exists() {
            debug!(identity, path = %path.display(), "File not found, skipping");
            diagnostics.push(Diagnostic::MissingInput {
                identity: identity.to_string(),
                path: path.to_path_buf(),
            });
            continue;
        }

        match fs::read_to_string(path) {
            Ok(raw) => documents.push(Document {
                identity: identity.to_string(),
                text: normalize(&raw),
            }),
            Err(e) => {
                debug!(
                    identity,
                    path = %path.display(),
                    error = %e,
                    "Unreadable file, skipping"
                );
                diagnostics.push(Diagnostic::Unreadable {
                    identity: identity.to_string(),
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }

    debug!(
        loaded = documents.len(),
        skipped = diagnostics.len(),
        "Loaded submissions"
    );
    (documents, diagnostics)
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut set = SubmissionSet::new();
        set.insert("alice", "a.js");
        set.insert("bob", "b.js");
        set.insert("alice", "a2.js");

        let ids: Vec<&str> = set.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["alice", "bob"]);
        assert_eq!(set.get("alice"), Some(Path::new("a2.js")));
    }

    #[test]
    fn test_from_repos_joins_relative_file() {
        let set = SubmissionSet::from_repos([("alice", "/tmp/r1"), ("bob", "/tmp/r2")], "tasks.js");
        assert_eq!(set.get("alice"), Some(Path::new("/tmp/r1/tasks.js")));
        assert_eq!(set.get("bob"), Some(Path::new("/tmp/r2/tasks.js")));
    }

    #[test]
    fn test_load_skips_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present.js");
        fs::write(&present, "x = 1;\n// note\n").unwrap();

        let set: SubmissionSet = [
            ("ghost", dir.path().join("missing.js")),
            ("real", present.clone()),
        ]
        .into_iter()
        .collect();

        let (docs, diags) = load_documents(&set);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].identity, "real");
        assert_eq!(docs[0].text, "x = 1;");
        assert!(matches!(
            &diags[0],
            Diagnostic::MissingInput { identity, .. } if identity == "ghost"
        ));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_skipped_files_are_not_logged_at_warn() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.js");
        fs::write(&bad, b"\xff\xfe").unwrap();
        let set: SubmissionSet = [
            ("ghost", dir.path().join("missing.js")),
            ("binary", bad),
        ]
        .into_iter()
        .collect();

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        let (docs, diags) =
            tracing::subscriber::with_default(subscriber, || load_documents(&set));

        assert!(docs.is_empty());
        assert_eq!(diags.len(), 2);
        let logged = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logged.is_empty(), "unexpected log output: {logged}");
    }

    #[test]
    fn test_load_skips_non_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.js");
        fs::write(&bad, b"\xff\xfe\x00\x80").unwrap();

        let set: SubmissionSet = [("binary", bad)].into_iter().collect();
        let (docs, diags) = load_documents(&set);
        assert!(docs.is_empty());
        assert!(matches!(diags[0], Diagnostic::Unreadable { .. }));
    }
}
