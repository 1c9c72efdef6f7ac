use crate::constants::{TICKERS_PATH, USER_AGENT};
use crate::error::AppError;
use crate::model::http::get_json;
use crate::model::requests::ListingQuery;
use crate::model::responses::PageResponse;
use crate::presentation::instrument::RawRecord;
use reqwest::Client;
use std::fmt;
use tracing::{info, warn};

/// Why pagination ended before the listing was exhausted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TruncationReason {
    /// A follow-up page answered with a non-success status
    HttpStatus(u16),
    /// A page lacked a `results` list
    MissingResults,
    /// A follow-up page body was not JSON
    UndecodableBody,
    /// A follow-up request failed below HTTP
    Transport(String),
}

impl fmt::Display for TruncationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruncationReason::HttpStatus(status) => write!(f, "HTTP {status}"),
            TruncationReason::MissingResults => {
                write!(f, "page missing results or unexpected shape")
            }
            TruncationReason::UndecodableBody => write!(f, "page body is not valid JSON"),
            TruncationReason::Transport(message) => write!(f, "transport failure: {message}"),
        }
    }
}

impl From<&AppError> for TruncationReason {
    fn from(error: &AppError) -> Self {
        match error {
            AppError::Unexpected(status) => TruncationReason::HttpStatus(status.as_u16()),
            AppError::Deserialization(_) => TruncationReason::UndecodableBody,
            other => TruncationReason::Transport(other.to_string()),
        }
    }
}

/// How pagination finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCompletion {
    /// The last page carried no `next_url`
    Exhausted,
    /// Pagination stopped at `page` (1-based); records of earlier pages are kept
    Truncated {
        /// Page that failed
        page: usize,
        /// What went wrong
        reason: TruncationReason,
    },
}

impl fmt::Display for PageCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageCompletion::Exhausted => write!(f, "exhausted"),
            PageCompletion::Truncated { page, reason } => {
                write!(f, "truncated at page {page}: {reason}")
            }
        }
    }
}

/// Records gathered by one [`TickerFetcher::fetch_all`] call
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    /// Raw records in page order
    pub records: Vec<RawRecord>,
    /// Number of pages requested, including a failing one
    pub pages: usize,
    /// Whether the listing was read to the end
    pub completion: PageCompletion,
}

impl FetchOutcome {
    /// True when no page failed
    pub fn is_complete(&self) -> bool {
        self.completion == PageCompletion::Exhausted
    }
}

/// Client for the paginated ticker listing endpoint
pub struct TickerFetcher {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl TickerFetcher {
    /// Creates a fetcher for the API rooted at `base_url`
    ///
    /// # Arguments
    /// * `base_url` - Scheme and host of the API, e.g. `https://api.polygon.io`
    /// * `api_key` - Key attached to every request as `apiKey`
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, AppError> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// URL of the first listing page, without query parameters
    pub fn listing_url(&self) -> String {
        format!("{}{}", self.base_url, TICKERS_PATH)
    }

    /// Fetches every listing page reachable from the first one
    ///
    /// The first request is fatal: a transport error, a non-success status or a
    /// body that is not JSON is returned as an error. From the second page on,
    /// any failure stops pagination and the records already gathered are
    /// returned with a [`PageCompletion::Truncated`] status.
    ///
    /// # Arguments
    /// * `query` - Parameters of the first request
    ///
    /// # Returns
    /// * `Ok(FetchOutcome)` - Records in page order and how pagination ended
    /// * `Err(AppError)` - If the first request failed
    pub async fn fetch_all(&self, query: &ListingQuery) -> Result<FetchOutcome, AppError> {
        let url = self.listing_url();
        info!("Requesting ticker listing {}", url);

        let body = get_json(&self.http_client, &url, Some(query), &self.api_key).await?;
        let mut page = PageResponse::from_value(body);
        let mut records: Vec<RawRecord> = Vec::new();
        let mut pages = 1;

        match page.results.take() {
            Some(results) => records.extend(results),
            None => {
                warn!("Stopping: first page missing results or unexpected shape");
                return Ok(FetchOutcome {
                    records,
                    pages,
                    completion: PageCompletion::Truncated {
                        page: pages,
                        reason: TruncationReason::MissingResults,
                    },
                });
            }
        }

        while let Some(next_url) = page.next_url.take() {
            pages += 1;
            info!("Requesting next page {}", next_url);

            let body = match get_json(
                &self.http_client,
                &next_url,
                None::<&ListingQuery>,
                &self.api_key,
            )
            .await
            {
                Ok(body) => body,
                Err(e) => {
                    let reason = TruncationReason::from(&e);
                    warn!("Stopping: {}", reason);
                    return Ok(truncated(records, pages, reason));
                }
            };

            page = PageResponse::from_value(body);
            match page.results.take() {
                Some(results) => records.extend(results),
                None => {
                    warn!("Stopping: page missing results or unexpected shape");
                    return Ok(truncated(records, pages, TruncationReason::MissingResults));
                }
            }
        }

        info!("Total tickers fetched: {}", records.len());
        Ok(FetchOutcome {
            records,
            pages,
            completion: PageCompletion::Exhausted,
        })
    }
}

fn truncated(records: Vec<RawRecord>, page: usize, reason: TruncationReason) -> FetchOutcome {
    info!(
        "Total tickers fetched: {} (partial, stopped at page {})",
        records.len(),
        page
    );
    FetchOutcome {
        records,
        pages: page,
        completion: PageCompletion::Truncated { page, reason },
    }
}
