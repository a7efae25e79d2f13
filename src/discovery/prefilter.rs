use memchr::memmem;

/// Cheap containment check used to skip parsing files that cannot contain the
/// target call. Conservative by construction: a plain substring search can
/// never miss real source text, it can only accept files where the name shows
/// up in a comment or string. Skipping it changes cost, never results.
pub fn may_contain(source: &[u8], target: &str) -> bool {
    memmem::find(source, target.as_bytes()).is_some()
}
