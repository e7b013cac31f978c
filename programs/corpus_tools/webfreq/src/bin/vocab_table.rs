//! Prints the saved vocabulary as a table: word, translation, occurrences.
use owo_colors::OwoColorize;
use webfreq::{logger, record, Config};

fn main() {
    let config = Config::default();
    logger::init(config.log_level);

    let records = match record::read_records(&config.output) {
        Ok(records) => records,
        Err(e) => {
            log::error!("could not read {}: {e}", config.output.display());
            return;
        }
    };

    let width = records
        .iter()
        .map(|r| r.word.chars().count())
        .max()
        .unwrap_or(0)
        .max("word".len());
    let twidth = records
        .iter()
        .map(|r| r.translation.chars().count())
        .max()
        .unwrap_or(0)
        .max("translation".len());

    println!(
        "{}",
        format!("{:<width$}  {:<twidth$}  {}", "word", "translation", "count").bold()
    );
    records.iter().for_each(|r| {
        println!(
            "{:<width$}  {:<twidth$}  {}",
            r.word, r.translation, r.occurrence
        );
    });
}
