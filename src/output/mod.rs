mod entry;
mod formatter;

pub use entry::SuiteEntry;
pub use formatter::to_json;
