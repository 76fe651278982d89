//! Groups the words of a string by their first character.
//!
//! Words are taken by splitting the trimmed input on the space character.
//! Each bucket is sorted with [`compare_words`] (longer words first, equal
//! lengths alphabetically) and buckets are kept in ascending key order.
//!
//! ```
//! use word_grouping::{InputText, WordGrouper};
//!
//! let text = InputText::new("  dog do cat car a ").unwrap();
//! let grouped = WordGrouper::new(&text).build().unwrap();
//! assert_eq!(grouped.to_string(), "[a=[a],c=[car,cat],d=[dog,do]]");
//!
//! let grouped = WordGrouper::new(&text).filter_singletons(true).build().unwrap();
//! assert_eq!(grouped.to_string(), "[c=[car,cat],d=[dog,do]]");
//! ```
mod compare;
mod error;

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

pub use compare::compare_words;
pub use error::{GroupingError, Result};

const SEPARATOR: char = ' ';

/// A trimmed, non-empty input string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputText {
    text: String,
}

impl InputText {
    /// Trims `raw` and checks that something is left.
    pub fn new(raw: &str) -> Result<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(GroupingError::EmptyInput);
        }
        Ok(Self {
            text: text.to_owned(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Non-empty tokens in input order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.text.split(SEPARATOR).filter(|token| !token.is_empty())
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /// Byte offset of the first empty token, i.e. of the second space in the
    /// first run of consecutive spaces.
    pub fn first_empty_token(&self) -> Option<usize> {
        let mut offset = 0;
        for token in self.text.split(SEPARATOR) {
            if token.is_empty() {
                return Some(offset);
            }
            offset += token.len() + SEPARATOR.len_utf8();
        }
        None
    }
}

impl FromStr for InputText {
    type Err = GroupingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for InputText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for InputText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// What to do with the empty tokens left by consecutive spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyTokenPolicy {
    /// Skip them, as if runs of spaces were a single space.
    #[default]
    Skip,
    /// Fail with [`GroupingError::EmptyToken`].
    Reject,
}

/// Builder for a [`GroupedResult`].
pub struct WordGrouper<'a> {
    text: &'a InputText,
    filter_singletons: bool,
    empty_tokens: EmptyTokenPolicy,
}

impl<'a> WordGrouper<'a> {
    pub fn new(text: &'a InputText) -> Self {
        Self {
            text,
            filter_singletons: false,
            empty_tokens: EmptyTokenPolicy::default(),
        }
    }

    /// Drops buckets holding exactly one word.
    pub fn filter_singletons(mut self, filter_singletons: bool) -> Self {
        self.filter_singletons = filter_singletons;
        self
    }

    pub fn empty_tokens(mut self, policy: EmptyTokenPolicy) -> Self {
        self.empty_tokens = policy;
        self
    }

    pub fn build(&self) -> Result<GroupedResult<'a>> {
        if self.empty_tokens == EmptyTokenPolicy::Reject {
            if let Some(position) = self.text.first_empty_token() {
                return Err(GroupingError::EmptyToken { position });
            }
        }
        Ok(group(self.text, self.filter_singletons))
    }
}

/// Groups `text` with empty tokens skipped.
///
/// Same as `WordGrouper::new(text).filter_singletons(filter_singletons).build()`,
/// which cannot fail under [`EmptyTokenPolicy::Skip`].
pub fn group(text: &InputText, filter_singletons: bool) -> GroupedResult<'_> {
    let mut buckets: BTreeMap<char, Vec<&str>> = BTreeMap::new();
    let mut n_words = 0;
    for word in text.words() {
        let Some(key) = word.chars().next() else {
            continue;
        };
        buckets.entry(key).or_default().push(word);
        n_words += 1;
    }
    debug!("detect {} words in {} buckets", n_words, buckets.len());

    let mut dropped = 0;
    if filter_singletons {
        buckets.retain(|key, words| {
            if words.len() == 1 {
                trace!("dropping singleton bucket {:?}", key);
                dropped += 1;
                false
            } else {
                true
            }
        });
        debug!("dropped {} words in singleton buckets", dropped);
    }

    for words in buckets.values_mut() {
        words.sort_by(|a, b| compare_words(a, b));
    }

    GroupedResult { buckets, dropped }
}

/// Words bucketed by first character, buckets in ascending key order.
///
/// Formats as `[a=[w1,w2],b=[w3]]` through [`Display`](fmt::Display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedResult<'a> {
    buckets: BTreeMap<char, Vec<&'a str>>,
    dropped: usize,
}

impl<'a> GroupedResult<'a> {
    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn get(&self, key: char) -> Option<&[&'a str]> {
        self.buckets.get(&key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.buckets.keys().copied()
    }

    pub fn iter(&self) -> Iter<'_, 'a> {
        Iter {
            inner: self.buckets.iter(),
        }
    }

    /// Number of words over all buckets.
    pub fn word_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Number of words removed with their singleton buckets.
    pub fn dropped_singletons(&self) -> usize {
        self.dropped
    }
}

impl fmt::Display for GroupedResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (key, words)) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            write!(f, "{}=[", key)?;
            for (j, word) in words.iter().enumerate() {
                if j != 0 {
                    f.write_str(",")?;
                }
                f.write_str(word)?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}

/// Iterator over the buckets of a [`GroupedResult`].
pub struct Iter<'r, 'a> {
    inner: btree_map::Iter<'r, char, Vec<&'a str>>,
}

impl<'r, 'a> Iterator for Iter<'r, 'a> {
    type Item = (char, &'r [&'a str]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(&key, words)| (key, words.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'r, 'a> IntoIterator for &'r GroupedResult<'a> {
    type Item = (char, &'r [&'a str]);
    type IntoIter = Iter<'r, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_text_trims() {
        let text = InputText::new("  one two \n").unwrap();
        assert_eq!(text.as_str(), "one two");
    }

    #[test]
    fn test_input_text_empty() {
        assert_eq!(InputText::new(""), Err(GroupingError::EmptyInput));
        assert_eq!(InputText::new("   "), Err(GroupingError::EmptyInput));
        assert_eq!(InputText::new("\t\n"), Err(GroupingError::EmptyInput));
        assert_eq!("  ".parse::<InputText>(), Err(GroupingError::EmptyInput));
    }

    #[test]
    fn test_empty_input_message() {
        assert_eq!(GroupingError::EmptyInput.to_string(), "empty input");
    }

    #[test]
    fn test_word_count() {
        let text = InputText::new("a  bb ccc").unwrap();
        assert_eq!(text.word_count(), 3);
        assert_eq!(text.words().collect::<Vec<_>>(), vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn test_first_empty_token() {
        assert_eq!(InputText::new("a b").unwrap().first_empty_token(), None);
        assert_eq!(InputText::new("a  b").unwrap().first_empty_token(), Some(2));
        assert_eq!(InputText::new("ab c   d").unwrap().first_empty_token(), Some(5));
    }

    #[test]
    fn test_group() {
        let text = InputText::new("cat car dog do a").unwrap();
        let grouped = WordGrouper::new(&text).build().unwrap();
        assert_eq!(grouped.to_string(), "[a=[a],c=[car,cat],d=[dog,do]]");
        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped.get('c'), Some(&["car", "cat"][..]));
        assert_eq!(grouped.get('x'), None);
        assert_eq!(grouped.word_count(), 5);
        assert_eq!(grouped.dropped_singletons(), 0);
    }

    #[test]
    fn test_group_filter_singletons() {
        let text = InputText::new("cat car dog do a").unwrap();
        let grouped = WordGrouper::new(&text)
            .filter_singletons(true)
            .build()
            .unwrap();
        assert_eq!(grouped.to_string(), "[c=[car,cat],d=[dog,do]]");
        assert_eq!(grouped.dropped_singletons(), 1);
    }

    #[test]
    fn test_group_all_singletons() {
        let text = InputText::new("one two four").unwrap();
        let grouped = group(&text, true);
        assert!(grouped.is_empty());
        assert_eq!(grouped.to_string(), "[]");
        assert_eq!(grouped.dropped_singletons(), 3);

        let grouped = group(&text, false);
        assert_eq!(grouped.to_string(), "[f=[four],o=[one],t=[two]]");
    }

    #[test]
    fn test_group_shared_first_letter_survives_filter() {
        let text = InputText::new("one two three").unwrap();
        let grouped = group(&text, true);
        assert_eq!(grouped.to_string(), "[t=[three,two]]");
        assert_eq!(grouped.dropped_singletons(), 1);

        let grouped = group(&text, false);
        assert_eq!(grouped.to_string(), "[o=[one],t=[three,two]]");
    }

    #[test]
    fn test_group_keeps_duplicates() {
        let text = InputText::new("bee bee b").unwrap();
        let grouped = group(&text, false);
        assert_eq!(grouped.to_string(), "[b=[bee,bee,b]]");
    }

    #[test]
    fn test_group_key_order() {
        let text = InputText::new("zoo Apple apple 1st _x").unwrap();
        let grouped = group(&text, false);
        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!['1', 'A', '_', 'a', 'z']);
    }

    #[test]
    fn test_group_non_ascii_key() {
        let text = InputText::new("élan étude eel").unwrap();
        let grouped = group(&text, false);
        assert_eq!(grouped.to_string(), "[e=[eel],é=[étude,élan]]");
    }

    #[test]
    fn test_group_double_space_skip() {
        let text = InputText::new("ab  ac").unwrap();
        let grouped = WordGrouper::new(&text).build().unwrap();
        assert_eq!(grouped.to_string(), "[a=[ab,ac]]");
    }

    #[test]
    fn test_group_double_space_reject() {
        let text = InputText::new("ab  ac").unwrap();
        let res = WordGrouper::new(&text)
            .empty_tokens(EmptyTokenPolicy::Reject)
            .build();
        assert_eq!(res, Err(GroupingError::EmptyToken { position: 3 }));

        let text = InputText::new("ab ac").unwrap();
        let grouped = WordGrouper::new(&text)
            .empty_tokens(EmptyTokenPolicy::Reject)
            .build()
            .unwrap();
        assert_eq!(grouped.to_string(), "[a=[ab,ac]]");
    }

    #[test]
    fn test_tab_is_not_a_separator() {
        let text = InputText::new("a\tb ab").unwrap();
        let grouped = group(&text, false);
        assert_eq!(grouped.get('a'), Some(&["a\tb", "ab"][..]));
    }

    #[test]
    fn test_iter() {
        let text = InputText::new("bb b a").unwrap();
        let grouped = group(&text, false);
        let buckets: Vec<_> = grouped.iter().collect();
        assert_eq!(buckets, vec![('a', &["a"][..]), ('b', &["bb", "b"][..])]);
        assert_eq!((&grouped).into_iter().count(), 2);
    }
}
