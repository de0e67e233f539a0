//! Test helpers for writing manifests into temporary workspaces.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Two deliveries that chain into one route, then one that needs its own.
pub(super) const CHAINED_MANIFEST: &str = "loadNumber pickup dropoff\n\
    1 (1.0,0.0) (2.0,0.0)\n\
    2 (3.0,0.0) (4.0,0.0)\n\
    3 (-300.0,0.0) (300.0,0.0)\n";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
}

/// Temporary directory that owns the manifests written during a test.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn manifest(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

/// Run `f` holding the process-wide environment lock, so variables set by
/// other tests through `Jail` cannot leak into configuration merging.
pub(super) fn with_isolated_env<T>(f: impl FnOnce() -> T) -> T {
    let mut output = None;
    ortho_config::figment::Jail::expect_with(|_| {
        output = Some(f());
        Ok(())
    });
    output.expect("jail runs its closure")
}

/// Parse `argv` the way `run` does.
pub(super) fn parse_args(argv: &[&str]) -> Result<PlanArgs, CliError> {
    PlanArgs::try_parse_from(argv).map_err(CliError::from)
}
