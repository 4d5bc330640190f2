use async_trait::async_trait;

use crate::{TranslateError, Translator};

/// Client for the unofficial Google endpoint used by the gtx client.
///
/// The response is a bare nested array; the translated string sits at
/// `[0][0][0]`.
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("client", "gtx"),
                ("sl", from),
                ("tl", to),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;

        let translated = json
            .get(0)
            .and_then(|v| v.get(0))
            .and_then(|v| v.get(0))
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                TranslateError::MalformedResponse("no translation at [0][0][0]".to_string())
            })?;

        Ok(translated.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::{translate_or_fallback, TRANSLATION_UNAVAILABLE};

    #[tokio::test]
    async fn parses_the_nested_array_response() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .and(query_param("client", "gtx"))
            .and(query_param("sl", "en"))
            .and(query_param("tl", "ru"))
            .and(query_param("q", "hello"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
                [[["Привет", "hello", null, null, 10]], null, "en"]
            )))
            .mount(&server)
            .await;

        let translator = GoogleTranslator::new(format!("{}/translate_a/single", server.uri()));
        let got = translator.translate("hello", "en", "ru").await.unwrap();
        assert_eq!(got, "Привет");
    }

    #[tokio::test]
    async fn http_error_becomes_the_fallback() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let translator = GoogleTranslator::new(server.uri());
        let got =
            translate_or_fallback(&translator, "hello", "en", "ru", Duration::from_secs(5)).await;
        assert_eq!(got, TRANSLATION_UNAVAILABLE);
    }

    #[tokio::test]
    async fn malformed_payload_becomes_the_fallback() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"detail": "nope"})),
            )
            .mount(&server)
            .await;

        let translator = GoogleTranslator::new(server.uri());
        let got =
            translate_or_fallback(&translator, "hello", "en", "ru", Duration::from_secs(5)).await;
        assert_eq!(got, TRANSLATION_UNAVAILABLE);
    }
}
