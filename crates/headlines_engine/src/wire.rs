//! Response payload of the top-headlines endpoint.

use serde::Deserialize;

use crate::{ArticleRecord, FailureKind, FetchError, HeadlinesPage};

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Envelope {
    Ok {
        #[serde(rename = "totalResults")]
        total_results: u32,
        articles: Vec<WireArticle>,
    },
    Error {
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireArticle {
    #[serde(default)]
    title: Option<String>,
    url: String,
    #[serde(default)]
    url_to_image: Option<String>,
    #[serde(default)]
    source: Option<WireSource>,
}

#[derive(Debug, Deserialize)]
struct WireSource {
    #[serde(default)]
    name: Option<String>,
}

impl From<WireArticle> for ArticleRecord {
    fn from(article: WireArticle) -> Self {
        Self {
            title: article.title.unwrap_or_default(),
            url: article.url,
            image_url: article.url_to_image,
            source_name: article.source.and_then(|source| source.name),
        }
    }
}

/// Decodes a response body into a page, classifying service-reported errors.
pub(crate) fn decode_page(body: &[u8]) -> Result<HeadlinesPage, FetchError> {
    let envelope: Envelope = serde_json::from_slice(body)
        .map_err(|err| FetchError::new(FailureKind::MalformedResponse, err.to_string()))?;
    match envelope {
        Envelope::Ok {
            total_results,
            articles,
        } => Ok(HeadlinesPage {
            articles: articles.into_iter().map(ArticleRecord::from).collect(),
            total_results,
        }),
        Envelope::Error { code, message } => Err(FetchError::new(
            FailureKind::Upstream { code },
            message.unwrap_or_else(|| "service reported an error".to_string()),
        )),
    }
}

/// Best-effort extraction of the service error code from a non-2xx body.
pub(crate) fn error_code(body: &[u8]) -> Option<String> {
    match serde_json::from_slice::<Envelope>(body) {
        Ok(Envelope::Error { code, .. }) => code,
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_articles_with_missing_optionals() {
        let body = br#"{
            "status": "ok",
            "totalResults": 7,
            "articles": [
                {"source": {"id": null, "name": "Wire"}, "title": "One", "url": "https://a", "urlToImage": "https://a.jpg"},
                {"source": {"id": "x", "name": null}, "title": null, "url": "https://b", "urlToImage": null},
                {"url": "https://c"}
            ]
        }"#;

        let page = decode_page(body).unwrap();
        assert_eq!(page.total_results, 7);
        assert_eq!(page.articles.len(), 3);
        assert_eq!(page.articles[0].source_name.as_deref(), Some("Wire"));
        assert_eq!(page.articles[0].image_url.as_deref(), Some("https://a.jpg"));
        assert_eq!(page.articles[1].title, "");
        assert_eq!(page.articles[1].source_name, None);
        assert_eq!(page.articles[2].image_url, None);
    }

    #[test]
    fn service_error_is_upstream_failure() {
        let body = br#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#;

        let err = decode_page(body).unwrap_err();
        assert_eq!(
            err.kind,
            FailureKind::Upstream {
                code: Some("apiKeyInvalid".to_string())
            }
        );
        assert_eq!(err.message, "Your API key is invalid.");
        assert_eq!(error_code(body).as_deref(), Some("apiKeyInvalid"));
    }

    #[test]
    fn missing_total_is_malformed() {
        let err = decode_page(br#"{"status":"ok","articles":[]}"#).unwrap_err();
        assert_eq!(err.kind, FailureKind::MalformedResponse);

        let err = decode_page(b"<html>").unwrap_err();
        assert_eq!(err.kind, FailureKind::MalformedResponse);
    }
}
