use std::path::{Path, PathBuf};

use thiserror::Error;
use tree_sitter::{Parser, Tree};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to load Go grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("parser returned no tree for {path}")]
    NoTree { path: PathBuf },

    #[error("source is not valid Go in {path}")]
    Invalid { path: PathBuf },
}

/// Thin wrapper around a Tree-sitter parser configured for Go.
///
/// Holds the parser so repeated files reuse one instance instead of paying
/// grammar setup per file.
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    /// Parses Go source bytes into a syntax tree.
    ///
    /// A tree whose root contains syntax errors counts as a failed parse; the
    /// scan treats those files as contributing nothing rather than guessing
    /// at call sites inside broken source.
    pub fn parse(&mut self, source: &[u8], path: &Path) -> Result<Tree, ParseError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::NoTree {
                path: path.to_path_buf(),
            })?;

        if tree.root_node().has_error() {
            return Err(ParseError::Invalid {
                path: path.to_path_buf(),
            });
        }

        Ok(tree)
    }
}
