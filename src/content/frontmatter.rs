//! Front-matter parsing

use serde::{Deserialize, Deserializer, Serialize};

const FENCE: &str = "---";

/// Custom deserializer that accepts any YAML scalar and keeps its string form
///
/// `title: 2024` or `description: true` should not throw the whole block away.
fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct Scalar;

    impl<'de> Visitor<'de> for Scalar {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number or boolean")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(Scalar)
}

/// Front-matter data from a post
///
/// Only `title` and `description` are recognised; other keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "optional_scalar")]
    pub title: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub description: Option<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Never fails: a document without a complete `---` block, or whose block
    /// is not valid YAML, yields default front-matter and the whole input as
    /// its body.
    pub fn parse(content: &str) -> (Self, &str) {
        let trimmed = content.trim_start_matches(['\n', '\r']);
        let mut lines = trimmed.split_inclusive('\n');

        match lines.next() {
            Some(first) if first.trim_end() == FENCE => {
                let yaml_start = first.len();
                let mut offset = yaml_start;

                for line in lines {
                    if line.trim_end() == FENCE {
                        let yaml_content = &trimmed[yaml_start..offset];
                        let remaining = &trimmed[offset + line.len()..];
                        return match Self::from_yaml(yaml_content) {
                            Ok(fm) => (fm, remaining),
                            Err(e) => {
                                tracing::debug!(
                                    "Failed to parse YAML front-matter, treating as content: {}",
                                    e
                                );
                                (FrontMatter::default(), content)
                            }
                        };
                    }
                    offset += line.len();
                }

                // No closing ---, treat as no front-matter
                (FrontMatter::default(), content)
            }
            _ => (FrontMatter::default(), content),
        }
    }

    fn from_yaml(yaml_content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty block is valid and simply sets nothing
        if yaml_content.trim().is_empty() {
            return Ok(FrontMatter::default());
        }
        serde_yaml::from_str(yaml_content)
    }

    /// The title, if present and non-empty
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// The description, if present and non-empty
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}
