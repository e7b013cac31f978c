//! Output file format. Each record is a one-key object so the file reads
//! as a list of small dictionaries:
//!
//! ```json
//! [{"dog": {"traducao": "cachorro", "ocorrencia": 3}}, ...]
//! ```

use crate::error::{Error, Result};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRecord {
    pub word: String,
    pub translation: String,
    pub occurrence: usize,
}

#[derive(Serialize, Deserialize)]
struct Entry<T> {
    traducao: T,
    ocorrencia: usize,
}

impl TranslationRecord {
    pub fn new(word: impl Into<String>, translation: impl Into<String>, occurrence: usize) -> Self {
        TranslationRecord {
            word: word.into(),
            translation: translation.into(),
            occurrence,
        }
    }
}

impl Serialize for TranslationRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            &self.word,
            &Entry {
                traducao: &self.translation,
                ocorrencia: self.occurrence,
            },
        )?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for TranslationRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let map = BTreeMap::<String, Entry<String>>::deserialize(deserializer)?;
        if map.len() != 1 {
            return Err(de::Error::invalid_length(map.len(), &"an object with one key"));
        }
        let (word, entry) = map
            .into_iter()
            .next()
            .ok_or_else(|| de::Error::custom("empty record"))?;
        Ok(TranslationRecord {
            word,
            translation: entry.traducao,
            occurrence: entry.ocorrencia,
        })
    }
}

/// Overwrites `path` with the records, in order.
pub fn write_records(path: &Path, records: &[TranslationRecord]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Like [`write_records`], but a failure is only reported.
pub fn save(path: &Path, records: &[TranslationRecord]) {
    match write_records(path, records) {
        Ok(()) => println!("saved {} words to {}", records.len(), path.display()),
        Err(e) => log::error!("could not save {}: {e}", path.display()),
    }
}

pub fn read_records(path: &Path) -> Result<Vec<TranslationRecord>> {
    let reader = BufReader::new(File::open(path)?);
    serde_json::from_reader(reader).map_err(|e| {
        if e.is_data() {
            Error::Record(e.to_string())
        } else {
            Error::Json(e)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shape() {
        let records = vec![
            TranslationRecord::new("dog", "cachorro", 3),
            TranslationRecord::new("cat", "gato", 2),
        ];
        let value = serde_json::to_value(&records).unwrap();
        assert_eq!(
            value,
            json!([
                {"dog": {"traducao": "cachorro", "ocorrencia": 3}},
                {"cat": {"traducao": "gato", "ocorrencia": 2}}
            ])
        );
    }

    #[test]
    fn test_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dicionario_ordenado.json");
        let records = vec![
            TranslationRecord::new("the", "o", 120),
            TranslationRecord::new("apple", "maçã", 51),
        ];
        write_records(&path, &records).unwrap();
        assert_eq!(read_records(&path).unwrap(), records);
    }

    #[test]
    fn test_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_records(&path, &[TranslationRecord::new("old", "velho", 9)]).unwrap();
        write_records(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_rejects_multi_key_objects() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"[{"a": {"traducao": "x", "ocorrencia": 1}, "b": {"traducao": "y", "ocorrencia": 2}}]"#,
        )
        .unwrap();
        assert!(matches!(read_records(&path), Err(Error::Record(_))));
    }

    #[test]
    fn test_save_into_missing_directory_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.json");
        save(&path, &[TranslationRecord::new("dog", "cão", 3)]);
        assert!(!path.exists());
    }
}
