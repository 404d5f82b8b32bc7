use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::{
    config::Config, models::domain::ArticleText, services::synthesis::segmenter::truncate_chars,
};

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const MAX_CONTENT_CHARS: usize = 2000;
/// Below this the paragraph extraction is considered to have missed the article.
pub const MIN_CONTENT_CHARS: usize = 200;

const PARAGRAPH_SELECTORS: [&str; 3] = [".mw-parser-output p", "article p", "p"];

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Article request timed out. Please try again or use a different article.")]
    Timeout,

    #[error("Failed to connect to the article host. Please check your internet connection.")]
    Connection,

    #[error("Error accessing article: HTTP status {0}")]
    Status(u16),

    #[error("Error accessing article: {0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connection
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<ArticleText, FetchError>;
}

pub struct HttpArticleFetcher {
    client: Client,
}

impl HttpArticleFetcher {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .connect_timeout(Duration::from_secs(config.fetch_connect_timeout_secs))
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ArticleFetcher for HttpArticleFetcher {
    async fn fetch(&self, url: &str) -> Result<ArticleText, FetchError> {
        log::info!("Fetching article {}", url);

        let html = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let article = parse_article(&html, url);
        log::debug!(
            "Parsed '{}' from {} ({} chars)",
            article.title,
            url,
            article.body.chars().count()
        );
        Ok(article)
    }
}

fn compact_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn element_text(elem: ElementRef<'_>) -> String {
    compact_ws(&elem.text().collect::<Vec<_>>().join(" "))
}

fn select_first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

fn extract_title(document: &Html, url: &str) -> String {
    select_first_text(document, "#firstHeading")
        .or_else(|| select_first_text(document, "title"))
        .unwrap_or_else(|| url.to_string())
}

/// Paragraph texts of the first selector that matches any `<p>` at all.
fn extract_paragraphs(document: &Html) -> Vec<String> {
    for selector in PARAGRAPH_SELECTORS {
        let Ok(selector) = Selector::parse(selector) else {
            continue;
        };
        let matched: Vec<ElementRef<'_>> = document.select(&selector).collect();
        if matched.is_empty() {
            continue;
        }
        return matched
            .into_iter()
            .map(element_text)
            .filter(|text| !text.is_empty())
            .collect();
    }
    Vec::new()
}

fn page_text(document: &Html) -> String {
    let blocks: Vec<&str> = document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect();
    truncate_chars(&blocks.join("\n\n"), MAX_CONTENT_CHARS).to_string()
}

/// Title and body text of an article page.
pub fn parse_article(html: &str, url: &str) -> ArticleText {
    let document = Html::parse_document(html);
    let title = extract_title(&document, url);

    let content = extract_paragraphs(&document).join("\n\n");
    let content_chars = content.chars().count();

    let body = if content_chars > MAX_CONTENT_CHARS {
        format!("{}...", truncate_chars(&content, MAX_CONTENT_CHARS))
    } else if content_chars < MIN_CONTENT_CHARS {
        page_text(&document)
    } else {
        content
    };

    ArticleText::new(title, body)
}
