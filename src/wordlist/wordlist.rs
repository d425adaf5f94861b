use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use rayon::prelude::*;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

use crate::alphabet::{is_valid_word, normalize};
use crate::error::{DictionaryError, Result};
use crate::letterset::LetterSet;
use crate::wordlist::trie::{NodeRef, Trie};

/// A dictionary loaded from a line-oriented word list.
pub struct Wordlist {
    trie: Trie,
}

/// How to pull one word out of each line of a word-list file.
///
/// The default reads the whole trimmed line as the word. Blank lines are
/// always skipped.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(into))]
    delimiter: Option<char>,
    /// Zero-based; only used with a delimiter.
    #[builder(default, setter(into))]
    word_column: Option<usize>,
    #[builder(default, setter(into))]
    comment: Option<char>,
    /// Lowercase each word before checking it.
    #[builder(default)]
    lowercase: bool,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

impl FileFormat {
    fn parse_line(&self, line: &str, line_no: usize) -> Result<Option<String>> {
        let line = line.trim();
        if line.is_empty() || self.comment.map(|c| line.starts_with(c)).unwrap_or(false) {
            return Ok(None);
        }

        let word = match self.delimiter {
            None => line,
            Some(delimiter) => {
                let column = self.word_column.unwrap_or(0);
                line.split(delimiter)
                    .nth(column)
                    .ok_or(DictionaryError::MissingColumn { line: line_no, column })?
                    .trim()
            }
        };

        let word = if self.lowercase { normalize(word) } else { word.to_string() };
        if !is_valid_word(&word) {
            return Err(DictionaryError::InvalidLine { word, line: line_no });
        }
        Ok(Some(word))
    }

    /// Reads every word from `reader`, in file order. Line numbers in errors
    /// are one-based.
    pub fn read_words<R: BufRead>(&self, reader: R) -> Result<Vec<String>> {
        let mut words = vec![];
        for (idx, line) in reader.lines().enumerate() {
            if let Some(word) = self.parse_line(&line?, idx + 1)? {
                words.push(word);
            }
        }
        Ok(words)
    }
}

impl Wordlist {
    pub fn from_words<I>(words: I) -> Result<Wordlist>
        where I: IntoIterator, I::Item: AsRef<str> {
        Ok(Wordlist { trie: Trie::new(words)? })
    }

    pub fn from_reader<R: BufRead>(reader: R, format: &FileFormat) -> Result<Wordlist> {
        let words = format.read_words(reader)?;
        debug!(lines = words.len(), "read word list");
        Wordlist::from_words(&words)
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Wordlist> {
        let path = path.as_ref();
        let start = Instant::now();

        let file = File::open(path)?;
        let wordlist = Wordlist::from_reader(BufReader::new(file), format)?;

        info!(path = %path.display(),
              words = wordlist.len(),
              nodes = wordlist.trie.node_count(),
              elapsed_ms = start.elapsed().as_millis() as u64,
              "loaded word list");
        Ok(wordlist)
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    delegate! {
        to self.trie {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn contains_word(&self, word: &str) -> bool;
            pub fn contains_prefix(&self, prefix: &str) -> bool;
            pub fn find_node_with_prefix(&self, prefix: &str) -> Option<NodeRef>;
            pub fn valid_first_letters(&self, suffix: &str) -> LetterSet;
            pub fn valid_last_letters(&self, prefix: &str) -> LetterSet;
        }
    }

    /// Membership for each of `words`, in order. The trie is read-only, so the
    /// lookups are spread across rayon's pool without locking.
    pub fn check_all<W>(&self, words: &[W]) -> Vec<bool>
        where W: AsRef<str> + Sync {
        words.par_iter()
            .map(|word| self.trie.contains_word(word.as_ref()))
            .collect()
    }
}

impl From<Trie> for Wordlist {
    fn from(trie: Trie) -> Self {
        Wordlist { trie }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DictionaryError;
    use crate::wordlist::trie::Trie;
    use crate::wordlist::wordlist::{FileFormat, Wordlist};

    #[test]
    fn reads_one_word_per_line() {
        let input = "cat\ncats\n\n  car\r\n";
        let wl = Wordlist::from_reader(input.as_bytes(), &FileFormat::default()).unwrap();
        assert_eq!(wl.len(), 3);
        assert!(wl.contains_word("car"));
        assert_eq!(wl.valid_last_letters("ca").to_string(), "rt");
    }

    #[test]
    fn reads_delimited_columns() {
        let input = "# word,score\n12,Cat\n7,HAT\n3,at\n";
        let format = FileFormat::builder()
            .delimiter(',')
            .word_column(1usize)
            .comment('#')
            .lowercase(true)
            .build();
        let wl = Wordlist::from_reader(input.as_bytes(), &format).unwrap();
        assert_eq!(wl.trie().iter().collect::<Vec<_>>(), vec!["at", "cat", "hat"]);
        assert_eq!(wl.valid_first_letters("at").to_string(), "ch");
    }

    #[test]
    fn reports_line_of_invalid_word() {
        let input = "cat\nDog\n";
        match Wordlist::from_reader(input.as_bytes(), &FileFormat::default()) {
            Err(DictionaryError::InvalidLine { word, line }) => {
                assert_eq!(word, "Dog");
                assert_eq!(line, 2);
            }
            _ => panic!("expected InvalidLine"),
        }
    }

    #[test]
    fn reports_missing_column() {
        let format = FileFormat::builder().delimiter('\t').word_column(2usize).build();
        match format.read_words("cat\t1\n".as_bytes()) {
            Err(DictionaryError::MissingColumn { line, column }) => {
                assert_eq!(line, 1);
                assert_eq!(column, 2);
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Wordlist::from_file("/nonexistent/words.txt", &FileFormat::default());
        assert!(matches!(result, Err(DictionaryError::Io(_))));
    }

    #[test]
    fn check_all_keeps_input_order() {
        let wl = Wordlist::from_words(vec!["at", "cat", "hat"]).unwrap();
        let probes = vec!["hat", "ha", "at", "bat", ""];
        assert_eq!(wl.check_all(&probes), vec![true, false, true, false, false]);
    }

    #[test]
    fn wraps_an_existing_trie() {
        let trie = Trie::new(vec!["cat", "cats", "car"]).unwrap();
        let wl = Wordlist::from(trie.clone());
        assert_eq!(wl.trie(), &trie);
        assert_eq!(wl.valid_last_letters("cat").to_string(), "s");
    }
}
