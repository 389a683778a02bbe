use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::config::TranslateConfig;
use crate::error::{Result, WordsieveError};
use super::WordTranslator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub response: String,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationPayload {
    pub text: String,
}

/// Ollama-backed word translator (English to Simplified Chinese).
pub struct OllamaTranslator {
    client: Client,
    config: TranslateConfig,
}

impl OllamaTranslator {
    pub fn new(config: TranslateConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("HTTP client creation should not fail");

        Self { client, config }
    }

    fn build_prompt(&self, word: &str) -> String {
        format!(
            "You are a professional English-Chinese dictionary.\n\
             \n\
             Translate the English word below to Simplified Chinese.\n\
             Give the most common dictionary translation only.\n\
             \n\
             Return ONLY the translation in JSON format as {{\"text\":\"translation here\"}}.\n\
             Do not include pinyin, explanations, or example sentences.\n\
             \n\
             Word to translate: \"{}\"\n",
            word
        )
    }

    async fn request_translation(&self, word: &str) -> Result<String> {
        let request = TranslationRequest {
            model: self.config.model.clone(),
            prompt: self.build_prompt(word),
            stream: false,
            format: "json".to_string(),
        };

        let url = format!("{}/api/generate", self.config.endpoint);

        debug!("Sending translation request for '{}' to {}", word, url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| WordsieveError::Translation(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(WordsieveError::Translation(format!(
                "Ollama API error {}: {}",
                status, error_text
            )));
        }

        let translation_response: TranslationResponse = response
            .json()
            .await
            .map_err(|e| WordsieveError::Translation(format!("Failed to parse response: {}", e)))?;

        let raw_response = translation_response.response.trim().to_string();

        if raw_response.is_empty() {
            return Err(WordsieveError::Translation(
                "Empty translation received".to_string(),
            ));
        }

        if let Ok(payload) = serde_json::from_str::<TranslationPayload>(&raw_response) {
            let text = payload.text.trim().to_string();
            if !text.is_empty() {
                return Ok(text);
            }
            return Err(WordsieveError::Translation(
                "Empty translation received".to_string(),
            ));
        }

        // Model ignored the JSON format instruction; take the first usable
        // line instead of discarding the whole response
        Ok(clean_translation_response(&raw_response))
    }
}

#[async_trait]
impl WordTranslator for OllamaTranslator {
    async fn translate_word(&self, word: &str) -> Result<String> {
        let attempts = self.config.max_retries.max(1);
        let mut last_error = WordsieveError::Translation(format!(
            "No translation attempts made for '{}'",
            word
        ));

        for attempt in 1..=attempts {
            match self.request_translation(word).await {
                Ok(translation) => return Ok(translation),
                Err(e) => {
                    debug!(
                        "Translation attempt {}/{} for '{}' failed: {}",
                        attempt, attempts, word, e
                    );
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }

    async fn check_availability(&self) -> Result<()> {
        let url = format!("{}/api/show", self.config.endpoint);

        let request = json!({
            "name": self.config.model
        });

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                WordsieveError::Translation(format!("Failed to connect to Ollama: {}", e))
            })?;

        if response.status().is_success() {
            info!("Ollama model '{}' is available", self.config.model);
            Ok(())
        } else {
            Err(WordsieveError::Translation(format!(
                "Ollama model '{}' not found. Please pull the model first: ollama pull {}",
                self.config.model, self.config.model
            )))
        }
    }
}

/// Extract a usable translation line from a free-form model response.
fn clean_translation_response(response: &str) -> String {
    for line in response.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty()
            || trimmed.starts_with("Translation:")
            || trimmed.starts_with("Here")
            || trimmed.starts_with("- ")
            || trimmed.starts_with("* ")
        {
            continue;
        }

        return trimmed.to_string();
    }

    response.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_response_skips_preamble_lines() {
        let response = "Here is the translation:\n\n香蕉\n";
        assert_eq!(clean_translation_response(response), "香蕉");
    }

    #[test]
    fn test_clean_response_falls_back_to_whole_text() {
        assert_eq!(clean_translation_response("  苹果  "), "苹果");
    }

    #[test]
    fn test_prompt_embeds_word() {
        let translator = OllamaTranslator::new(TranslateConfig {
            endpoint: "http://localhost:11434".to_string(),
            model: "llama3.2:3b".to_string(),
            max_retries: 3,
            timeout_secs: 30,
        });
        let prompt = translator.build_prompt("banana");
        assert!(prompt.contains("\"banana\""));
        assert!(prompt.contains("Simplified Chinese"));
    }
}
