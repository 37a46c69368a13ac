//! Structured marketing output.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The four pieces of copy produced for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingContent {
    pub video_script: String,
    pub poster_content: String,
    pub email_content: String,
    pub tagline: String,
}

impl MarketingContent {
    /// Parses the raw text returned by the service.
    ///
    /// Fails with [`GenerationError::MalformedOutput`](crate::GenerationError::MalformedOutput)
    /// when the text is not JSON or any of the four fields is missing or not a
    /// string. Extra properties are dropped.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenerationError;

    #[test]
    fn parses_complete_object() {
        let text = r#"{
            "video_script": "Scene 1",
            "poster_content": "Headline",
            "email_content": "Dear reader",
            "tagline": "Just brew it"
        }"#;

        let content = MarketingContent::parse(text).unwrap();
        assert_eq!(content.video_script, "Scene 1");
        assert_eq!(content.tagline, "Just brew it");
    }

    #[test]
    fn non_json_is_malformed() {
        let err = MarketingContent::parse("Sure! Here is your copy:").unwrap_err();
        assert!(matches!(err, GenerationError::MalformedOutput(_)));
    }

    #[test]
    fn missing_field_is_malformed() {
        let text = r#"{"video_script": "a", "poster_content": "b", "email_content": "c"}"#;
        let err = MarketingContent::parse(text).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedOutput(_)));
    }

    #[test]
    fn extra_fields_are_not_carried_through() {
        let text = r##"{"video_script": "a", "poster_content": "b", "email_content": "c", "tagline": "d", "hashtags": "#x"}"##;
        let content = MarketingContent::parse(text).unwrap();
        let value = serde_json::to_value(&content).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 4);
    }
}
