use std::{
    collections::HashSet,
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::Value;

use crate::error::{Result, ValidationError};

/// A translation file that has already been read and parsed.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    pub path: PathBuf,
    pub value: Value,
}

impl JsonDocument {
    pub fn new(path: impl Into<PathBuf>, value: Value) -> Self {
        Self {
            path: path.into(),
            value,
        }
    }
}

/// Read and parse a translation file.
///
/// Used by key validation when the caller has not parsed the file already.
/// Duplicate keys are not detected here; the last value wins.
pub fn parse_json_file(path: &Path) -> Result<JsonDocument> {
    let content = fs::read_to_string(path).map_err(|e| ValidationError::JsonRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let value = serde_json::from_str(&content).map_err(|e| ValidationError::JsonParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(JsonDocument::new(path, value))
}

/// Read a translation file and check its syntax, optionally rejecting
/// duplicate keys inside any object.
pub fn check_json_file(path: &Path, allow_duplicate_keys: bool) -> Result<JsonDocument> {
    let content = fs::read_to_string(path).map_err(|e| ValidationError::JsonRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let value = check_json_syntax(path, &content, allow_duplicate_keys)?;
    Ok(JsonDocument::new(path, value))
}

/// Parse `content`, failing on invalid JSON and, unless allowed, on the
/// first duplicate key.
pub fn check_json_syntax(path: &Path, content: &str, allow_duplicate_keys: bool) -> Result<Value> {
    let value = serde_json::from_str(content).map_err(|e| ValidationError::JsonSyntax {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if !allow_duplicate_keys {
        let mut deserializer = serde_json::Deserializer::from_str(content);
        UniqueKeys { path: "" }
            .deserialize(&mut deserializer)
            .map_err(|e| ValidationError::DuplicateKey {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
    }

    Ok(value)
}

/// Walks a JSON document, tracking keys per object scope.
struct UniqueKeys<'a> {
    path: &'a str,
}

impl<'de> DeserializeSeed<'de> for UniqueKeys<'_> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for UniqueKeys<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_bool<E>(self, _: bool) -> std::result::Result<(), E>
    where
        E: de::Error,
    {
        Ok(())
    }

    fn visit_i64<E>(self, _: i64) -> std::result::Result<(), E>
    where
        E: de::Error,
    {
        Ok(())
    }

    fn visit_u64<E>(self, _: u64) -> std::result::Result<(), E>
    where
        E: de::Error,
    {
        Ok(())
    }

    fn visit_f64<E>(self, _: f64) -> std::result::Result<(), E>
    where
        E: de::Error,
    {
        Ok(())
    }

    fn visit_str<E>(self, _: &str) -> std::result::Result<(), E>
    where
        E: de::Error,
    {
        Ok(())
    }

    fn visit_unit<E>(self) -> std::result::Result<(), E>
    where
        E: de::Error,
    {
        Ok(())
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<(), A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut index = 0usize;
        loop {
            let path = format!("{}[{}]", self.path, index);
            if seq.next_element_seed(UniqueKeys { path: &path })?.is_none() {
                return Ok(());
            }
            index += 1;
        }
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut seen = HashSet::new();
        while let Some(key) = map.next_key::<String>()? {
            let path = if self.path.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", self.path, key)
            };
            if !seen.insert(key) {
                return Err(de::Error::custom(format!("duplicate key \"{}\"", path)));
            }
            map.next_value_seed(UniqueKeys { path: &path })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::tempdir;

    use crate::core::parsers::json::*;

    fn check(content: &str, allow_duplicate_keys: bool) -> Result<Value> {
        check_json_syntax(Path::new("en.json"), content, allow_duplicate_keys)
    }

    #[test]
    fn test_valid_json_passes() {
        let value = check(r#"{"common": {"hello": "Hello"}}"#, false).unwrap();
        assert_eq!(value, json!({"common": {"hello": "Hello"}}));
    }

    #[test]
    fn test_invalid_json_is_syntax_error() {
        let err = check(r#"{ invalid json }"#, false).unwrap_err();
        assert!(matches!(err, ValidationError::JsonSyntax { .. }));
        assert!(err.to_string().contains("en.json"));
    }

    #[test]
    fn test_duplicate_top_level_key() {
        let err = check(r#"{"a": "1", "a": "2"}"#, false).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateKey { .. }));
        assert!(err.to_string().contains("duplicate key \"a\""));
    }

    #[test]
    fn test_duplicate_nested_key_reports_path() {
        let content = r#"{
  "common": {
    "hello": "Hello",
    "hello": "Hi"
  }
}"#;
        let err = check(content, false).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("duplicate key \"common.hello\""), "{}", message);
        assert!(message.contains("line 4"), "{}", message);
    }

    #[test]
    fn test_duplicate_key_inside_array_element() {
        let err = check(r#"{"items": [{"a": 1}, {"b": 1, "b": 2}]}"#, false).unwrap_err();
        assert!(err.to_string().contains("duplicate key \"items[1].b\""));
    }

    #[test]
    fn test_same_key_in_sibling_objects_is_fine() {
        assert!(check(r#"{"a": {"title": "x"}, "b": {"title": "y"}}"#, false).is_ok());
    }

    #[test]
    fn test_duplicates_allowed_last_value_wins() {
        let value = check(r#"{"a": "1", "a": "2"}"#, true).unwrap();
        assert_eq!(value, json!({"a": "2"}));
    }

    #[test]
    fn test_parse_json_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("en.json");
        fs::write(&file_path, r#"{"Common": {"submit": "Submit"}}"#).unwrap();

        let document = parse_json_file(&file_path).unwrap();
        assert_eq!(document.path, file_path);
        assert_eq!(document.value, json!({"Common": {"submit": "Submit"}}));
    }

    #[test]
    fn test_parse_json_file_invalid() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("en.json");
        fs::write(&file_path, "{ invalid json }").unwrap();

        let err = parse_json_file(&file_path).unwrap_err();
        assert!(matches!(err, ValidationError::JsonParse { .. }));
    }

    #[test]
    fn test_parse_json_file_missing() {
        let err = parse_json_file(Path::new("/nonexistent/en.json")).unwrap_err();
        assert!(matches!(err, ValidationError::JsonRead { .. }));
    }

    #[test]
    fn test_check_json_file_rejects_duplicates() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("en.json");
        fs::write(&file_path, r#"{"a": 1, "a": 2}"#).unwrap();

        assert!(check_json_file(&file_path, false).is_err());
        assert!(check_json_file(&file_path, true).is_ok());
    }
}
