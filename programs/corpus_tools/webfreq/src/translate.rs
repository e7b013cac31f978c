use crate::error::{Error, Result};
use crate::rank::Ranked;
use crate::record::TranslationRecord;
use std::io::Write;
use url::form_urlencoded;
use url::Url;

pub trait Translate {
    fn translate(&self, text: &str, from: &str, to: &str) -> Result<String>;
}

impl<F> Translate for F
where
    F: Fn(&str, &str, &str) -> Result<String>,
{
    fn translate(&self, text: &str, from: &str, to: &str) -> Result<String> {
        self(text, from, to)
    }
}

const ENDPOINT: &str = "https://translate.google.com/translate_a/single";

/// The public, keyless google translate endpoint the android app talks to.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleTranslator;

impl GoogleTranslator {
    fn url(to: &str) -> Result<Url> {
        Url::parse_with_params(
            ENDPOINT,
            &[
                ("client", "at"),
                ("dt", "t"),
                ("dt", "ld"),
                ("dt", "qca"),
                ("dt", "rm"),
                ("dt", "bd"),
                ("dj", "1"),
                ("hl", to),
                ("ie", "UTF-8"),
                ("oe", "UTF-8"),
                ("inputm", "2"),
                ("otf", "2"),
                ("iid", "1dd3b944-fa62-4b55-b330-74909a99969e"),
            ],
        )
        .map_err(|e| Error::Translation(e.to_string()))
    }
}

impl Translate for GoogleTranslator {
    fn translate(&self, text: &str, from: &str, to: &str) -> Result<String> {
        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair("sl", from)
            .append_pair("tl", to)
            .append_pair("q", text)
            .finish();
        let response = minreq::post(GoogleTranslator::url(to)?.as_str())
            .with_header(
                "Content-Type",
                "application/x-www-form-urlencoded;charset=utf-8",
            )
            .with_header(
                "User-Agent",
                "AndroidTranslate/5.3.0.RC02.130475354-53000263 5.1 phone TRANSLATE_OPM5_TEST_1",
            )
            .with_body(body)
            .send()?;
        if response.status_code != 200 {
            return Err(Error::Status(response.status_code));
        }
        parse_response(response.as_str()?)
    }
}

/// Joins the `trans` field of every sentence. The trailing transliteration
/// object has no `trans` and is skipped.
pub fn parse_response(body: &str) -> Result<String> {
    let json: serde_json::Value = serde_json::from_str(body)?;
    let sentences = json
        .get("sentences")
        .and_then(|s| s.as_array())
        .ok_or_else(|| Error::Translation("no 'sentences' array".to_string()))?;
    let translated: String = sentences
        .iter()
        .filter_map(|s| s.get("trans").and_then(|t| t.as_str()))
        .collect();
    if translated.is_empty() {
        return Err(Error::Translation("no translated sentence".to_string()));
    }
    Ok(translated)
}

/// Translates every ranked word, one call each, in rank order. Words that
/// fail to translate are logged and left out of the result.
pub fn translate_all(
    translator: &impl Translate,
    ranked: &Ranked,
    from: &str,
    to: &str,
) -> Vec<TranslationRecord> {
    translate_with_progress(translator, ranked, from, to, &mut std::io::stdout())
}

/// [`translate_all`] with the "x of n" progress lines going to `progress`.
/// The line for a word is written before its translation is attempted.
pub fn translate_with_progress(
    translator: &impl Translate,
    ranked: &Ranked,
    from: &str,
    to: &str,
    progress: &mut impl Write,
) -> Vec<TranslationRecord> {
    let total = ranked.len();
    ranked
        .iter()
        .enumerate()
        .filter_map(|(i, (word, count))| {
            let _ = writeln!(progress, "{count} x {word} is {} of {total}", i + 1);
            let _ = progress.flush();
            match translator.translate(word, from, to) {
                Ok(translation) if !translation.is_empty() => {
                    Some(TranslationRecord::new(word, translation, count))
                }
                Ok(_) => {
                    log::warn!("empty translation for {word}");
                    None
                }
                Err(e) => {
                    log::warn!("translation failed for {word}: {e}");
                    None
                }
            }
        })
        .collect()
}
