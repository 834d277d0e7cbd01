//! JSON decoding for the learning datasets.
//! Datasets are read either from the copies compiled into the binary or from
//! `<name>.json` files in a content directory.

use crate::error::ContentError;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Decodes one dataset, naming it in any error.
pub fn parse_dataset<T: DeserializeOwned>(dataset: &str, text: &str) -> Result<T, ContentError> {
    serde_json::from_str(text).map_err(|source| ContentError::Json {
        dataset: dataset.to_string(),
        source,
    })
}

pub fn dataset_path(dir: &Path, dataset: &str) -> PathBuf {
    dir.join(format!("{dataset}.json"))
}

/// Reads `<dir>/<dataset>.json` into a string.
pub fn read_dataset(dir: &Path, dataset: &str) -> Result<String, ContentError> {
    let path = dataset_path(dir, dataset);
    let io_err = |source| ContentError::Io {
        dataset: dataset.to_string(),
        source,
    };
    let mut file = File::open(&path).map_err(io_err)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(io_err)?;

    debug!(path = %path.display(), bytes = contents.len(), "dataset read");
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlashcardItem;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("english_trainer_json_{name}"));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_parse_dataset() {
        let json = r#"[{
            "term": "test term",
            "pronunciation": "/t/",
            "translation": "测试",
            "example": "A test.",
            "example_translation": "一个测试。",
            "level": "beginner"
        }]"#;
        let cards: Vec<FlashcardItem> = parse_dataset("vocabulary", json).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].term, "test term");
    }

    #[test]
    fn test_parse_invalid_json_names_dataset() {
        let err = parse_dataset::<Vec<FlashcardItem>>("vocabulary", "{ this is not valid json }")
            .unwrap_err();
        assert!(matches!(&err, ContentError::Json { dataset, .. } if dataset == "vocabulary"));
        assert!(err.to_string().contains("vocabulary"));
    }

    #[test]
    fn test_read_dataset_from_dir() {
        let dir = scratch_dir("read");
        fs::write(dataset_path(&dir, "grammar"), "{}").unwrap();

        let text = read_dataset(&dir, "grammar").unwrap();
        assert_eq!(text, "{}");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_read_missing_dataset() {
        let dir = scratch_dir("missing");
        let err = read_dataset(&dir, "nonexistent_dataset_xyz123").unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
        let _ = fs::remove_dir_all(&dir);
    }
}
