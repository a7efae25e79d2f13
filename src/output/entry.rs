use serde::Serialize;

/// A discovered suite bootstrap.
///
/// One entry per matching `Test` function; field order here is the wire
/// order consumers see in the JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteEntry {
    /// Base name of the file the bootstrap was found in.
    pub file: String,
    /// Display name of the suite, as given to RunSpecs or the function name.
    pub suite: String,
    /// Name of the Test* function that bootstraps the suite.
    pub bootstrap: String,
}

impl SuiteEntry {
    pub fn new(
        file: impl Into<String>,
        suite: impl Into<String>,
        bootstrap: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            suite: suite.into(),
            bootstrap: bootstrap.into(),
        }
    }
}
