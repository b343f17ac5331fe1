//! Primary frame selection.
//!
//! Some job portals wrap the actual posting in a `<frame>` or `<iframe>` and
//! surround it with chrome such as "similar job postings". Selecting the first
//! frame replaces the wrapper with the frame's own document.

use std::future::Future;
use std::sync::Arc;

use log::{debug, warn};
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::config::{Config, MAX_HTML_PREVIEW_CHARS};
use crate::error_handling::{categorize_reqwest_error, FrameError, InitializationError};
use crate::initialization::init_client;
use crate::parse::MailDocument;
use crate::utils::truncate_chars;

const FRAME_SELECTOR_STR: &str = "frame[src], iframe[src], iframe[srcdoc]";

static FRAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(FRAME_SELECTOR_STR, "FRAME_SELECTOR"));

/// Where the first frame's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameSource {
    /// Inline content from an `iframe[srcdoc]` attribute
    Inline(String),
    /// An absolute http(s) URL that must be fetched
    Remote(Url),
}

/// Fetches the document a frame points to.
///
/// The production implementation is `HttpFrameFetcher`; tests substitute an
/// in-memory map. Implementations own their timeout policy.
pub trait FrameFetcher {
    /// Returns the body of the document at `url`.
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String, FrameError>> + Send;
}

/// Fetches frame documents over HTTP with a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFrameFetcher {
    client: Arc<reqwest::Client>,
}

impl HttpFrameFetcher {
    /// Wraps an existing client (see `initialization::init_client`).
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

impl FrameFetcher for HttpFrameFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FrameError> {
        debug!("Fetching frame document: {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(categorize_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FrameError::Status(status.as_u16()));
        }

        response.text().await.map_err(categorize_reqwest_error)
    }
}

/// Resolves a document to the content of its first frame.
pub struct FrameSelector<F> {
    fetcher: F,
    base_url: Option<Url>,
}

impl FrameSelector<HttpFrameFetcher> {
    /// Builds an HTTP-backed selector from the library configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or
    /// `frame_base_url` is not a valid URL.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        let mut selector = Self::new(HttpFrameFetcher::new(client));
        if let Some(base) = &config.frame_base_url {
            selector = selector.with_base_url(Url::parse(base)?);
        }
        Ok(selector)
    }
}

impl<F: FrameFetcher> FrameSelector<F> {
    /// Creates a selector without a base URL; relative frame sources will fail.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            base_url: None,
        }
    }

    /// Sets the base URL used to resolve relative frame sources.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Locates the first frame in `html` and resolves where its content lives.
    ///
    /// `Ok(None)` means the document has no frame.
    ///
    /// # Errors
    ///
    /// Returns `FrameError::InvalidSource` if the first frame's `src` is not an
    /// http(s) URL and cannot be resolved against the base URL.
    pub fn source_for(&self, html: &str) -> Result<Option<FrameSource>, FrameError> {
        first_frame_source(html, self.base_url.as_ref())
    }

    /// Returns the first frame's content, or `Ok(None)` when there is no frame.
    ///
    /// # Errors
    ///
    /// Propagates source resolution and fetch errors.
    pub async fn try_select(&self, html: &str) -> Result<Option<String>, FrameError> {
        match self.source_for(html)? {
            None => Ok(None),
            Some(FrameSource::Inline(content)) => Ok(Some(content)),
            Some(FrameSource::Remote(url)) => self.fetcher.fetch(&url).await.map(Some),
        }
    }

    /// Restricts `document` to its first frame's content.
    ///
    /// Documents without a frame come back unchanged, and so do documents
    /// already turned into plain text. A frame that cannot be resolved or
    /// fetched is logged and the unframed document is kept.
    pub async fn select(&self, document: MailDocument) -> MailDocument {
        if document.is_plain_text() {
            return document;
        }
        let selected = self.try_select(document.content()).await;
        match selected {
            Ok(Some(content)) => {
                debug!(
                    "Substituted first frame content: {:?}",
                    truncate_chars(&content, MAX_HTML_PREVIEW_CHARS)
                );
                document.with_content(content)
            }
            Ok(None) => document,
            Err(e) => {
                warn!("Failed to resolve first frame, keeping wrapper document: {e}");
                document
            }
        }
    }
}

/// Finds the first frame and turns its `srcdoc` or `src` into a `FrameSource`.
///
/// `srcdoc` wins over `src` when an iframe carries both.
pub fn first_frame_source(
    html: &str,
    base_url: Option<&Url>,
) -> Result<Option<FrameSource>, FrameError> {
    let document = Html::parse_document(html);
    let Some(frame) = document.select(&FRAME_SELECTOR).next() else {
        return Ok(None);
    };

    if let Some(srcdoc) = frame.value().attr("srcdoc") {
        return Ok(Some(FrameSource::Inline(srcdoc.to_string())));
    }

    let src = frame.value().attr("src").unwrap_or_default().trim();
    resolve_frame_url(src, base_url).map(|url| Some(FrameSource::Remote(url)))
}

fn resolve_frame_url(src: &str, base_url: Option<&Url>) -> Result<Url, FrameError> {
    let invalid = |reason: String| FrameError::InvalidSource {
        source_attr: src.to_string(),
        reason,
    };

    let url = match Url::parse(src) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => match base_url {
            Some(base) => base.join(src).map_err(|e| invalid(e.to_string()))?,
            None => return Err(invalid("relative URL without a base".to_string())),
        },
        Err(e) => return Err(invalid(e.to_string())),
    };

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(invalid(format!("unsupported scheme '{scheme}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapFetcher(HashMap<String, String>);

    impl FrameFetcher for MapFetcher {
        async fn fetch(&self, url: &Url) -> Result<String, FrameError> {
            self.0
                .get(url.as_str())
                .cloned()
                .ok_or(FrameError::Status(404))
        }
    }

    fn fetcher(entries: &[(&str, &str)]) -> MapFetcher {
        MapFetcher(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_no_frame() {
        let result = first_frame_source("<p>Kein Frame</p>", None).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_first_of_several_frames() {
        let html = r#"<frameset><frame src="https://a.de/job.html"><frame src="https://a.de/aehnliche.html"></frameset>"#;
        let result = first_frame_source(html, None).unwrap();
        assert_eq!(
            result,
            Some(FrameSource::Remote(Url::parse("https://a.de/job.html").unwrap()))
        );
    }

    #[test]
    fn test_relative_src_resolved_against_base() {
        let base = Url::parse("https://www.stepstone.de/mail/").unwrap();
        let html = r#"<iframe src="jobs/123.html"></iframe>"#;
        let result = first_frame_source(html, Some(&base)).unwrap();
        assert_eq!(
            result,
            Some(FrameSource::Remote(
                Url::parse("https://www.stepstone.de/mail/jobs/123.html").unwrap()
            ))
        );
    }

    #[test]
    fn test_relative_src_without_base_is_error() {
        let html = r#"<iframe src="jobs/123.html"></iframe>"#;
        let result = first_frame_source(html, None);
        assert!(matches!(result, Err(FrameError::InvalidSource { .. })));
    }

    #[test]
    fn test_unsupported_scheme_is_error() {
        let html = r#"<iframe src="javascript:void(0)"></iframe>"#;
        let result = first_frame_source(html, None);
        assert!(matches!(result, Err(FrameError::InvalidSource { .. })));
    }

    #[test]
    fn test_srcdoc_wins_over_src() {
        let html = r#"<iframe src="https://a.de/x.html" srcdoc="<p>Inline</p>"></iframe>"#;
        let result = first_frame_source(html, None).unwrap();
        assert_eq!(result, Some(FrameSource::Inline("<p>Inline</p>".to_string())));
    }

    #[tokio::test]
    async fn test_select_substitutes_fetched_content() {
        let selector = FrameSelector::new(fetcher(&[(
            "https://a.de/job.html",
            "<p>Die eigentliche Stelle</p>",
        )]));
        let wrapper = MailDocument::new(
            r#"<iframe src="https://a.de/job.html"></iframe><p>Ähnliche Stellenangebote</p>"#,
        );
        let framed = selector.select(wrapper).await;
        assert_eq!(framed.plain_text(), "Die eigentliche Stelle");
    }

    #[tokio::test]
    async fn test_select_keeps_document_on_fetch_failure() {
        let selector = FrameSelector::new(fetcher(&[]));
        let html = r#"<iframe src="https://a.de/missing.html"></iframe><p>Wrapper</p>"#;
        let document = selector.select(MailDocument::new(html)).await;
        assert_eq!(document.content(), html);
    }

    #[tokio::test]
    async fn test_try_select_reports_fetch_failure() {
        let selector = FrameSelector::new(fetcher(&[]));
        let result = selector
            .try_select(r#"<iframe src="https://a.de/missing.html"></iframe>"#)
            .await;
        assert!(matches!(result, Err(FrameError::Status(404))));
    }

    #[tokio::test]
    async fn test_select_without_frame_is_unchanged() {
        let selector = FrameSelector::new(fetcher(&[]));
        let html = "<p>Nur Text</p>";
        let document = selector.select(MailDocument::new(html)).await;
        assert_eq!(document.content(), html);
    }

    #[tokio::test]
    async fn test_select_leaves_plain_text_alone() {
        let selector = FrameSelector::new(fetcher(&[(
            "https://a.de/job.html",
            "<p>Die eigentliche Stelle</p>",
        )]));
        let html = r#"<p>Code: &lt;iframe src="https://a.de/job.html"&gt;&lt;/iframe&gt;</p>"#;
        let document = selector
            .select(MailDocument::new(html).to_plain_text())
            .await;
        assert!(document.is_plain_text());
        assert_eq!(
            document.plain_text(),
            r#"Code: <iframe src="https://a.de/job.html"></iframe>"#
        );
    }

    #[test]
    fn test_from_config_rejects_invalid_base_url() {
        let config = Config {
            frame_base_url: Some("kein url".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            FrameSelector::from_config(&config),
            Err(InitializationError::BaseUrlError(_))
        ));
    }
}
