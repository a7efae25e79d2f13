mod string;

pub use string::{unquote_go_string, UnquoteError};
