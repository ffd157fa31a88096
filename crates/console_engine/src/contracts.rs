//! Request and response bodies of the index service's REST API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "Term")]
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// `null` or missing when nothing matched.
    #[serde(rename = "Results", default)]
    pub results: Option<Vec<SearchResult>>,
    #[serde(rename = "DurationSeconds", default)]
    pub duration_seconds: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Count")]
    pub count: u64,
    #[serde(rename = "Term", default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlRequest {
    #[serde(rename = "URLString")]
    pub url_string: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CrawlResponse {
    #[serde(rename = "PagesCrawled")]
    pub pages_crawled: u64,
    #[serde(rename = "WordsIndexed")]
    pub words_indexed: u64,
    #[serde(rename = "DurationSeconds")]
    pub duration_seconds: f64,
    /// Per-page failures of an otherwise successful crawl.
    #[serde(rename = "CrawlErrors", default)]
    pub crawl_errors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}
