//! Marketing generation service.

use std::time::Instant;

use crate::client::GenerationClient;
use crate::content::MarketingContent;
use crate::error::Result;
use crate::request::{GenerationRequest, ImageAttachment};

/// Builds the request, calls the client once and parses the reply.
#[derive(Debug, Clone)]
pub struct MarketingGenerator<C: GenerationClient> {
    client: C,
}

impl<C: GenerationClient> MarketingGenerator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Generates the four marketing outputs for a product and audience.
    ///
    /// `image_data_url` is forwarded when it is a well-formed `data:` URL and
    /// ignored otherwise.
    #[tracing::instrument(skip_all, fields(provider = self.client.name()))]
    pub async fn generate(
        &self,
        prompt: &str,
        audience: &str,
        image_data_url: Option<&str>,
    ) -> Result<MarketingContent> {
        metrics::counter!("generation_requests_total").increment(1);
        let started = Instant::now();

        let image = image_data_url.and_then(|url| {
            let parsed = ImageAttachment::from_data_url(url);
            if parsed.is_none() {
                tracing::warn!("ignoring image that is not a base64 image data URL");
            }
            parsed
        });

        let request = GenerationRequest::marketing(prompt, audience, image);
        let result = match self.client.generate(&request).await {
            Ok(text) => MarketingContent::parse(&text),
            Err(err) => Err(err),
        };

        metrics::histogram!("generation_duration_seconds").record(started.elapsed().as_secs_f64());

        match &result {
            Ok(_) => tracing::info!("marketing content generated"),
            Err(err) => {
                metrics::counter!("generation_failures_total", "kind" => err.kind()).increment(1);
                tracing::warn!(kind = err.kind(), error = %err, "marketing generation failed");
            }
        }

        result
    }
}
