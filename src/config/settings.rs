use serde::{Deserialize, Serialize};

use crate::text::PositionEncoding;

/// Settings read from a `line-collection.toml` file.
///
/// Every field is optional so partial files can be layered with
/// [`merge_settings`](super::merge_settings).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    /// Unit used for the `character` field of positions
    pub position_encoding: Option<PositionEncoding>,
}

impl Settings {
    /// The configured encoding, or UTF-16 when unset
    pub fn position_encoding(&self) -> PositionEncoding {
        self.position_encoding.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_deserialize_position_encoding() {
        let settings: Settings = toml::from_str(r#"position-encoding = "utf-32""#).unwrap();
        assert_eq!(settings.position_encoding, Some(PositionEncoding::Utf32));
        assert_eq!(settings.position_encoding(), PositionEncoding::Utf32);
    }

    #[rstest]
    #[case::utf8("utf8", PositionEncoding::Utf8)]
    #[case::utf16("utf16", PositionEncoding::Utf16)]
    #[case::utf32("utf32", PositionEncoding::Utf32)]
    fn test_undashed_encoding_names_match_command_line(
        #[case] name: &str,
        #[case] expected: PositionEncoding,
    ) {
        let settings: Settings = toml::from_str(&format!("position-encoding = \"{}\"", name)).unwrap();
        assert_eq!(settings.position_encoding, Some(expected));
        assert_eq!(name.parse::<PositionEncoding>(), Ok(expected));
    }

    #[test]
    fn test_empty_file_defaults_to_utf16() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.position_encoding(), PositionEncoding::Utf16);
    }

    #[test]
    fn test_unknown_encoding_is_rejected() {
        assert!(toml::from_str::<Settings>(r#"position-encoding = "ebcdic""#).is_err());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(toml::from_str::<Settings>(r#"encoding = "utf-8""#).is_err());
    }
}
