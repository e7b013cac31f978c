use crate::config::Config;
use crate::count::{count_words, WordCount};
use crate::fetch::{fetch_page, Fetch};
use crate::html::extract_text;
use crate::rank::{alphabetic_only, at_least, rank, Ranked};
use crate::record::{save, TranslationRecord};
use crate::translate::{translate_all, Translate};

/// Fetches every address in order and sums the word counts of the pages that
/// came back. Pages that fail are skipped.
pub fn aggregate<S: AsRef<str>>(fetcher: &impl Fetch, addresses: &[S]) -> WordCount {
    addresses
        .iter()
        .fold(WordCount::new(), |total, address| {
            match fetch_page(fetcher, address.as_ref()) {
                Some(page) => total.merge(count_words(&extract_text(&page))),
                None => total,
            }
        })
}

/// rank, then the count threshold, then the letters-only filter.
pub fn build_vocabulary(counts: &WordCount, min_count: usize) -> Ranked {
    alphabetic_only(at_least(rank(counts), min_count))
}

pub fn run(
    config: &Config,
    fetcher: &impl Fetch,
    translator: &impl Translate,
) -> Vec<TranslationRecord> {
    let counts = aggregate(fetcher, &config.addresses);
    log::debug!("{} distinct tokens, {} in total", counts.len(), counts.total());

    let vocabulary = build_vocabulary(&counts, config.min_count);
    log::debug!("{} words at or above {}", vocabulary.len(), config.min_count);

    let records = translate_all(
        translator,
        &vocabulary,
        &config.source_lang,
        &config.target_lang,
    );
    save(&config.output, &records);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::record::read_records;
    use std::collections::HashMap;

    fn identity(text: &str, _: &str, _: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn site(pages: &[(&str, &str)]) -> impl Fn(&str) -> Result<String> {
        let pages: HashMap<String, String> = pages
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |url: &str| pages.get(url).cloned().ok_or(Error::Status(404))
    }

    fn config_in(dir: &std::path::Path, addresses: &[&str], min_count: usize) -> Config {
        Config {
            addresses: addresses.iter().map(|a| a.to_string()).collect(),
            min_count,
            output: dir.join("dicionario_ordenado.json"),
            ..Config::default()
        }
    }

    #[test]
    fn test_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), &["one"], 1);
        let fetcher = site(&[("one", "<p>Cat cat DOG. dog, dog!</p>")]);

        let records = run(&config, &fetcher, &identity);
        assert_eq!(
            records,
            vec![
                TranslationRecord::new("dog", "dog", 3),
                TranslationRecord::new("cat", "cat", 2),
            ]
        );
        assert_eq!(read_records(&config.output).unwrap(), records);
    }

    #[test]
    fn test_failed_fetch_is_skipped() {
        let fetcher = site(&[
            ("first", "<p>alpha beta</p>"),
            ("third", "<p>beta gamma</p>"),
        ]);
        let counts = aggregate(&fetcher, &["first", "second", "third"]);
        assert_eq!(counts, count_words("alpha beta beta gamma"));
    }

    #[test]
    fn test_all_fetches_fail() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), &["a", "b"], 1);
        let records = run(&config, &site(&[]), &identity);
        assert!(records.is_empty());
        assert_eq!(std::fs::read_to_string(&config.output).unwrap(), "[]");
    }

    #[test]
    fn test_vocabulary_filters() {
        let text = "web2py web2py web2py the the the it's it's it's a a -- -- --";
        let vocabulary = build_vocabulary(&count_words(text), 3);
        assert_eq!(vocabulary.iter().collect::<Vec<_>>(), vec![("the", 3)]);
    }

    #[test]
    fn test_failed_translation_shortens_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), &["page"], 2);
        let fetcher = site(&[("page", "<div>red red red blue blue green green</div>")]);
        let translator = |text: &str, _: &str, _: &str| -> Result<String> {
            if text == "blue" {
                Err(Error::Translation("quota".to_string()))
            } else {
                Ok(format!("{text}!"))
            }
        };
        let records = run(&config, &fetcher, &translator);
        assert_eq!(
            records,
            vec![
                TranslationRecord::new("red", "red!", 3),
                TranslationRecord::new("green", "green!", 2),
            ]
        );
    }

    #[test]
    fn test_unwritable_output_still_returns_records() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path(), &["page"], 1);
        config.output = dir.path().join("missing").join("out.json");
        let records = run(&config, &site(&[("page", "word")]), &identity);
        assert_eq!(records, vec![TranslationRecord::new("word", "word", 1)]);
        assert!(!config.output.exists());
    }
}
