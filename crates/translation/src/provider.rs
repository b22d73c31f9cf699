//! External translation provider client
//!
//! Google Translate consumed as an opaque service. Two transports: the
//! unauthenticated `gtx` endpoint (default) and the official v2 endpoint
//! when an API key is configured. Every call is bounded by the client
//! timeout; a timeout surfaces as an ordinary provider error and the
//! gateway falls back.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::TranslationError;

/// Opaque translation seam. `source` may be a concrete ISO code or the
/// `auto` sentinel, which delegates detection to the provider.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError>;

    fn name(&self) -> &str;
}

/// Google Translate client over HTTP/JSON.
pub struct GoogleTranslateClient {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl GoogleTranslateClient {
    /// Build the client with a bounded per-request timeout.
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self, TranslationError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_key })
    }

    /// Unauthenticated endpoint. The response is a nested array; segment
    /// texts live at `[0][*][0]` and must be concatenated.
    async fn translate_gtx(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        let url = format!(
            "https://translate.googleapis.com/translate_a/single?client=gtx&sl={}&tl={}&dt=t&q={}",
            source,
            target,
            urlencoding::encode(text)
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::Provider { status, body });
        }

        let json: serde_json::Value = response.json().await?;
        let segments = json
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| TranslationError::Malformed("missing segment array".to_string()))?;

        let mut translation = String::new();
        for segment in segments {
            if let Some(piece) = segment.get(0).and_then(|v| v.as_str()) {
                translation.push_str(piece);
            }
        }

        Ok(translation)
    }

    /// Official v2 endpoint, used when an API key is configured.
    async fn translate_v2(
        &self,
        text: &str,
        source: &str,
        target: &str,
        api_key: &str,
    ) -> Result<String, TranslationError> {
        #[derive(Deserialize)]
        struct V2Response {
            data: V2Data,
        }

        #[derive(Deserialize)]
        struct V2Data {
            translations: Vec<V2Translation>,
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct V2Translation {
            translated_text: String,
        }

        let mut params = vec![
            ("key", api_key.to_string()),
            ("q", text.to_string()),
            ("target", target.to_string()),
            ("format", "text".to_string()),
        ];
        // The v2 endpoint auto-detects when source is omitted.
        if source != sentiment_core::AUTO_LANGUAGE {
            params.push(("source", source.to_string()));
        }

        let response = self
            .client
            .post("https://translation.googleapis.com/language/translate/v2")
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::Provider { status, body });
        }

        let parsed: V2Response = response.json().await?;
        parsed
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| TranslationError::Malformed("no translation returned".to_string()))
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        match &self.api_key {
            Some(key) => self.translate_v2(text, source, target, key).await,
            None => self.translate_gtx(text, source, target).await,
        }
    }

    fn name(&self) -> &str {
        "google-translate"
    }
}
