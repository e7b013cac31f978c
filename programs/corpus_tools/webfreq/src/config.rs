use std::path::PathBuf;

const BOOK: &str = "http://web2py.com/books/default/chapter/29";

const CHAPTERS: [&str; 16] = [
    "00/preface",
    "01/introduction",
    "02/the-python-language",
    "03/overview",
    "04/the-core",
    "05/the-views",
    "06/the-database-abstraction-layer",
    "07/forms-and-validators",
    "08/emails-and-sms",
    "09/access-control",
    "10/services",
    "11/jquery-and-ajax",
    "12/components-and-plugins",
    "13/deployment-recipes",
    "14/other-recipes",
    "15/helping-web2py",
];

pub const MIN_COUNT: usize = 50;
pub const SOURCE_LANG: &str = "en";
pub const TARGET_LANG: &str = "pt";
pub const OUTPUT_FILE: &str = "dicionario_ordenado.json";

/// Everything the pipeline needs to know up front. There is no file or
/// environment lookup, `Config::default()` is the whole configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addresses: Vec<String>,
    pub min_count: usize,
    pub source_lang: String,
    pub target_lang: String,
    pub output: PathBuf,
    pub log_level: log::LevelFilter,
}

pub fn addresses() -> Vec<String> {
    CHAPTERS
        .iter()
        .map(|chapter| format!("{BOOK}/{chapter}"))
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            addresses: addresses(),
            min_count: MIN_COUNT,
            source_lang: SOURCE_LANG.to_string(),
            target_lang: TARGET_LANG.to_string(),
            output: PathBuf::from(OUTPUT_FILE),
            log_level: log::LevelFilter::Info,
        }
    }
}

#[test]
fn test_default_addresses() {
    let config = Config::default();
    assert_eq!(config.addresses.len(), 16);
    assert_eq!(
        config.addresses[0],
        "http://web2py.com/books/default/chapter/29/00/preface"
    );
    assert_eq!(
        config.addresses[15],
        "http://web2py.com/books/default/chapter/29/15/helping-web2py"
    );
    assert_eq!(config.min_count, 50);
    assert_eq!(config.output, PathBuf::from("dicionario_ordenado.json"));
}
