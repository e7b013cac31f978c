//! Counts the words of the web2py book, keeps the frequent ones and saves
//! them with their portuguese translation to dicionario_ordenado.json.
use webfreq::{logger, pipeline, Config, GoogleTranslator, HttpFetcher};

fn main() {
    let config = Config::default();
    logger::init(config.log_level);
    pipeline::run(&config, &HttpFetcher, &GoogleTranslator);
}
