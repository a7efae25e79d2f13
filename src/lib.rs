/// Suite Scout
///
/// A static-analysis tool that scans Go test files with Tree-sitter and
/// reports the Test functions that bootstrap a Ginkgo suite via RunSpecs.
pub mod cli;
pub mod discovery;
pub mod logging;
pub mod output;
pub mod parser;
pub mod scan;
pub mod scanner;
pub mod utils;

pub use output::SuiteEntry;
pub use scan::{discover_suites, ScanError, ScanOptions};
pub use scanner::SuiteScanner;
