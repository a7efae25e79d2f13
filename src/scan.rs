use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::discovery::{self, WalkError};
use crate::output::SuiteEntry;
use crate::parser::{GoParser, ParseError};
use crate::scanner::SuiteScanner;

/// Failures that abort a scan outright. Per-file problems never show up
/// here; they degrade to "contributes nothing" for that file.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error(transparent)]
    Parser(#[from] ParseError),
}

/// Knobs for a single scan run.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Skip the substring pre-filter and parse every candidate file.
    pub no_prefilter: bool,
}

/// Runs the whole pipeline: walk the tree for `*_test.go` files, parse each
/// one, and collect every suite bootstrap in traversal order.
///
/// Per-file problems (unreadable, not valid Go) are logged and skipped; only
/// a failure to walk the root itself, or to load the Go grammar at all,
/// aborts the scan. Each run is a pure function of the tree's contents at
/// scan time.
pub fn discover_suites(root: &Path, options: &ScanOptions) -> Result<Vec<SuiteEntry>, ScanError> {
    let paths = discovery::walk_test_files(root)?;
    info!(root = %root.display(), candidates = paths.len(), "walk complete");

    let scanner = SuiteScanner::new();
    let mut parser = GoParser::new()?;

    let mut entries = Vec::new();

    for path in paths {
        let source = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable file");
                continue;
            }
        };

        if !options.no_prefilter && !discovery::may_contain(&source, scanner.entry_point()) {
            continue;
        }

        let tree = match parser.parse(&source, &path) {
            Ok(tree) => tree,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unparseable file");
                continue;
            }
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        entries.extend(scanner.scan_tree(&tree, &source, &file_name));
    }

    info!(entries = entries.len(), "discovery complete");
    Ok(entries)
}
