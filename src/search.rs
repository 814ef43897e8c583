use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// A link worth showing next to an answer: a display label plus the URL
/// it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub name: String,
    pub url: String,
}

/// The slice of the instant-answer payload the extraction looks at.
/// Everything else the API sends is ignored.
#[derive(Debug, Deserialize)]
struct SearchDocument {
    #[serde(rename = "AbstractURL", default)]
    abstract_url: Option<String>,
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<RelatedTopic>,
}

/// Related topics arrive in two shapes: link entries and nested topic
/// groups. Groups (and anything else without a `FirstURL`) contribute no
/// resources.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RelatedTopic {
    Link {
        #[serde(rename = "FirstURL")]
        first_url: String,
        #[serde(rename = "Text", default)]
        text: Option<String>,
    },
    Other(serde_json::Value),
}

/// Client for the DuckDuckGo-style instant answer API used to look up
/// related resources.
pub struct SearchClient {
    client: Client,
    api_url: String,
}

impl SearchClient {
    pub fn new(config: &Config) -> Result<SearchClient> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(SearchClient {
            client,
            api_url: config.search_api_url.clone(),
        })
    }

    /// Look up resources related to the raw question text.
    pub async fn lookup(&self, query: &str) -> Result<Vec<ResourceLink>> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("q", query), ("format", "json"), ("no_redirect", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("search API returned {}", response.status());
        }

        let document: SearchDocument = response.json().await?;
        Ok(extract_resources(document))
    }
}

/// Flatten an instant-answer document into resource links, keeping the
/// order they appear in: the abstract link first, then one link per
/// link-bearing related topic.
fn extract_resources(document: SearchDocument) -> Vec<ResourceLink> {
    let mut resources = Vec::new();

    // The API sends an empty string when there is no abstract.
    if let Some(url) = document.abstract_url.filter(|url| !url.is_empty()) {
        resources.push(ResourceLink {
            name: "DuckDuckGo Answer".to_string(),
            url,
        });
    }

    for topic in document.related_topics {
        if let RelatedTopic::Link { first_url, text } = topic {
            resources.push(ResourceLink {
                name: text.unwrap_or_else(|| "Related Resource".to_string()),
                url: first_url,
            });
        }
    }

    resources
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(payload: &str) -> SearchDocument {
        serde_json::from_str(payload).unwrap()
    }

    fn link(name: &str, url: &str) -> ResourceLink {
        ResourceLink {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_extracts_abstract_then_topics_in_order() {
        let document = parse(
            r#"{
                "AbstractURL": "https://example.com/instant",
                "RelatedTopics": [
                    { "FirstURL": "https://example.com/one", "Text": "First topic" },
                    { "FirstURL": "https://example.com/two" }
                ]
            }"#,
        );

        assert_eq!(
            extract_resources(document),
            vec![
                link("DuckDuckGo Answer", "https://example.com/instant"),
                link("First topic", "https://example.com/one"),
                link("Related Resource", "https://example.com/two"),
            ]
        );
    }

    #[test]
    fn test_empty_document_yields_no_resources() {
        assert!(extract_resources(parse("{}")).is_empty());
    }

    #[test]
    fn test_empty_abstract_url_is_skipped() {
        let document = parse(
            r#"{
                "AbstractURL": "",
                "RelatedTopics": [
                    { "FirstURL": "https://example.com/one", "Text": "Only topic" }
                ]
            }"#,
        );

        assert_eq!(
            extract_resources(document),
            vec![link("Only topic", "https://example.com/one")]
        );
    }

    #[test]
    fn test_topic_groups_are_skipped_not_descended() {
        let document = parse(
            r#"{
                "RelatedTopics": [
                    {
                        "Name": "Also see",
                        "Topics": [
                            { "FirstURL": "https://example.com/nested", "Text": "Nested" }
                        ]
                    },
                    { "FirstURL": "https://example.com/flat", "Text": "Flat" }
                ]
            }"#,
        );

        assert_eq!(
            extract_resources(document),
            vec![link("Flat", "https://example.com/flat")]
        );
    }

    #[test]
    fn test_non_object_topic_entries_are_skipped() {
        let document = parse(
            r#"{
                "RelatedTopics": [
                    "stray string",
                    42,
                    { "FirstURL": "https://example.com/kept", "Text": "Kept" }
                ]
            }"#,
        );

        assert_eq!(
            extract_resources(document),
            vec![link("Kept", "https://example.com/kept")]
        );
    }

    #[test]
    fn test_empty_topic_text_is_kept_verbatim() {
        // Only a missing Text field falls back to the placeholder label.
        let document = parse(
            r#"{
                "RelatedTopics": [
                    { "FirstURL": "https://example.com/blank", "Text": "" }
                ]
            }"#,
        );

        assert_eq!(
            extract_resources(document),
            vec![link("", "https://example.com/blank")]
        );
    }

    #[test]
    fn test_duplicate_urls_are_not_deduplicated() {
        let document = parse(
            r#"{
                "AbstractURL": "https://example.com/same",
                "RelatedTopics": [
                    { "FirstURL": "https://example.com/same", "Text": "Repeat" }
                ]
            }"#,
        );

        assert_eq!(extract_resources(document).len(), 2);
    }
}
