//! Slice membership helpers

/// Whether `slice` contains an element equal to `needle`
pub fn slice_contains_string<S: AsRef<str>>(slice: &[S], needle: &str) -> bool {
    slice.iter().any(|s| s.as_ref() == needle)
}

/// Case-insensitive variant of [`slice_contains_string`]
pub fn slice_contains_string_fold<S: AsRef<str>>(slice: &[S], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    slice.iter().any(|s| s.as_ref().to_lowercase() == needle)
}
