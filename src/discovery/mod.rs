pub mod prefilter;
pub mod walker;

pub use prefilter::may_contain;
pub use walker::{walk_test_files, WalkError, TEST_FILE_SUFFIX};
