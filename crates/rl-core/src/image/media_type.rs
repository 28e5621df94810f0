use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Media type used when a host declares none.
pub const DEFAULT_IMAGE_MEDIA_TYPE: &str = "image/jpeg";

/// Declared media type of an image, reduced to its essence (`type/subtype`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaType(String);

impl MediaType {
    /// Build from a raw `Content-Type` header value.
    ///
    /// Parameters such as `; charset=binary` are dropped and the essence is
    /// lower-cased. A missing or blank value falls back to
    /// [`DEFAULT_IMAGE_MEDIA_TYPE`].
    pub fn from_declared(declared: Option<&str>) -> Self {
        let essence = declared
            .and_then(|raw| raw.split(';').next())
            .map(str::trim)
            .filter(|value| !value.is_empty());

        match essence {
            Some(value) => Self(value.to_ascii_lowercase()),
            None => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MediaType {
    fn default() -> Self {
        Self(DEFAULT_IMAGE_MEDIA_TYPE.to_string())
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_declared_strips_parameters_and_lowercases() {
        let media = MediaType::from_declared(Some("Image/PNG; charset=binary"));
        assert_eq!(media.as_str(), "image/png");
    }

    #[test]
    fn test_from_declared_defaults_when_missing_or_blank() {
        assert_eq!(MediaType::from_declared(None).as_str(), DEFAULT_IMAGE_MEDIA_TYPE);
        assert_eq!(
            MediaType::from_declared(Some("  ")).as_str(),
            DEFAULT_IMAGE_MEDIA_TYPE
        );
        assert_eq!(
            MediaType::from_declared(Some("; q=1")).as_str(),
            DEFAULT_IMAGE_MEDIA_TYPE
        );
    }
}
