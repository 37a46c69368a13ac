//! Prompt and schema assembly for a marketing generation call.

use serde_json::{Map, Value, json};

/// Instruction sent as the system turn of every marketing request.
pub const SYSTEM_INSTRUCTION: &str = "You are a 'Creative Marketing AI' expert. Your task is to generate highly \
engaging and creative marketing content. Based on the product/service prompt \
and the target audience, create the following four outputs in JSON format: \
1. a video script (for Instagram/YouTube Shorts), \
2. a poster content block (a catchy headline and short body text), \
3. an email content body, and \
4. a brand tagline (short, memorable).";

/// A single string-typed, required property of a [`ResponseSchema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaField {
    pub name: &'static str,
    pub description: &'static str,
}

/// Declarative shape the external service is asked to constrain its reply to.
///
/// Every field is a required string; the object carries nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSchema {
    fields: Vec<SchemaField>,
}

impl ResponseSchema {
    /// The four-part marketing output.
    pub fn marketing() -> Self {
        Self {
            fields: vec![
                SchemaField {
                    name: "video_script",
                    description: "The Instagram Reel/Shorts script.",
                },
                SchemaField {
                    name: "poster_content",
                    description: "The poster headline and body content.",
                },
                SchemaField {
                    name: "email_content",
                    description: "The body content for a marketing email.",
                },
                SchemaField {
                    name: "tagline",
                    description: "The brand's catchy tagline.",
                },
            ],
        }
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    /// Names of the required properties, in declaration order.
    pub fn required(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// Renders the schema as a JSON-Schema object.
    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| {
                (
                    f.name.to_string(),
                    json!({ "type": "string", "description": f.description }),
                )
            })
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": self.required(),
        })
    }
}

/// Image supplied alongside the prompt, split out of a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub mime_type: String,
    /// Base64 payload, passed through undecoded.
    pub data: String,
}

impl ImageAttachment {
    /// Parses `data:<mime>;base64,<payload>`.
    ///
    /// Returns `None` for anything else, including an empty payload or a
    /// non-image MIME type.
    pub fn from_data_url(url: &str) -> Option<Self> {
        let rest = url.trim().strip_prefix("data:")?;
        let (header, data) = rest.split_once(',')?;
        let mime_type = header.strip_suffix(";base64")?;

        if !mime_type.starts_with("image/") || data.is_empty() {
            return None;
        }

        Some(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }
}

/// Everything a [`GenerationClient`](crate::GenerationClient) needs for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub user_prompt: String,
    pub schema: ResponseSchema,
    pub image: Option<ImageAttachment>,
}

impl GenerationRequest {
    /// Builds the marketing request for a product and its audience.
    ///
    /// Both strings are interpolated verbatim into the user turn.
    pub fn marketing(prompt: &str, audience: &str, image: Option<ImageAttachment>) -> Self {
        Self {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            user_prompt: format!("Product/Service: {prompt}. Target Audience: {audience}."),
            schema: ResponseSchema::marketing(),
            image,
        }
    }
}
