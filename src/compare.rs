use std::cmp::Ordering;

/// Orders words for a bucket: longer words first, equal lengths alphabetically.
///
/// Length is counted in `char`s. The tie-break is plain `str` ordering, so the
/// result is a total order that agrees with `==`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use word_grouping::compare_words;
///
/// assert_eq!(compare_words("dog", "do"), Ordering::Less);
/// assert_eq!(compare_words("car", "cat"), Ordering::Less);
/// ```
pub fn compare_words(a: &str, b: &str) -> Ordering {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    len_b.cmp(&len_a).then_with(|| a.cmp(b))
}
