//! Marketing sentence shown on the lead step
//!
//! A text-generation service is asked for one sentence about the route. The
//! request runs on a worker thread and never gates the wizard; any failure is
//! replaced by a templated sentence built from the same fields.

use crate::error::DealContextError;
use crate::model::search::{CabinClass, SearchCriteria};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Fields the text generator needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealContextRequest {
    pub cabin_class: CabinClass,
    pub from: String,
    pub to: String,
    pub passenger_count: u32,
}

impl From<&SearchCriteria> for DealContextRequest {
    fn from(criteria: &SearchCriteria) -> Self {
        Self {
            cabin_class: criteria.cabin_class,
            from: criteria.origin.clone(),
            to: criteria.destination.clone(),
            passenger_count: criteria.passengers.total(),
        }
    }
}

impl DealContextRequest {
    pub fn prompt(&self) -> String {
        format!(
            "You are a flight pricing analyst. A user is looking for {cabin} class flights from {from} to {to} for {pax} passengers. \
             Generate a short, urgent, and professional single sentence explaining why \"unpublished\" or \"consolidator\" rates might be 40-60% cheaper for this specific route and class right now. \
             Mention things like \"inventory clearing\", \"business class undersell\", or \"exclusive route agreements\". \
             Do not mention specific prices. Keep it under 30 words.",
            cabin = self.cabin_class,
            from = self.from,
            to = self.to,
            pax = self.passenger_count,
        )
    }
}

/// Copy shown before the generated sentence arrives
pub fn placeholder_text(to: &str) -> String {
    format!(
        "We have identified unpublished inventory for flights to {}. These rates are protected by airline agreements.",
        to
    )
}

/// Template used when the generator fails
pub fn fallback_text(request: &DealContextRequest, error: &DealContextError) -> String {
    match error {
        DealContextError::MissingApiKey => format!(
            "We have identified 3 unsold {} class seats for your trip to {}. These rates are time-sensitive.",
            request.cabin_class.name().to_lowercase(),
            request.to
        ),
        DealContextError::EmptyResponse => format!(
            "High availability detected for {} seats to {}. Specialized fares unlocked.",
            request.cabin_class, request.to
        ),
        DealContextError::Transport(_) | DealContextError::Status(_) => format!(
            "We have identified high-value unsold inventory for {} flights to {}.",
            request.cabin_class, request.to
        ),
    }
}

/// Something that can write the marketing sentence
pub trait DealContextProvider: Send + Sync {
    fn generate(&self, request: &DealContextRequest) -> Result<String, DealContextError>;
}

/// Generated sentence, or the matching fallback
pub fn resolve(provider: &dyn DealContextProvider, request: &DealContextRequest) -> String {
    match provider.generate(request) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "deal context generation failed, using fallback");
            fallback_text(request, &e)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Gemini REST client
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    fn text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

/// Blocking client for the Gemini `generateContent` endpoint
pub struct GeminiClient {
    client: reqwest::blocking::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, DealContextError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("flightfare-tui/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(20))
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.into(),
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl DealContextProvider for GeminiClient {
    fn generate(&self, request: &DealContextRequest) -> Result<String, DealContextError> {
        let api_key = self.api_key.as_deref().ok_or(DealContextError::MissingApiKey)?;

        let body = GenerateRequest {
            contents: vec![json!({ "parts": [{ "text": request.prompt() }] })],
        };
        debug!(model = %self.model, "requesting deal context");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(DealContextError::Status(status.as_u16()));
        }

        let parsed: GenerateResponse = response.json()?;
        parsed.text().ok_or(DealContextError::EmptyResponse)
    }
}

/// Provider used when no HTTP client could be built
pub struct OfflineProvider;

impl DealContextProvider for OfflineProvider {
    fn generate(&self, _request: &DealContextRequest) -> Result<String, DealContextError> {
        Err(DealContextError::MissingApiKey)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Background fetch
// ─────────────────────────────────────────────────────────────────────────────

/// Runs one request at a time on a worker thread
pub struct DealContextFetcher {
    provider: Arc<dyn DealContextProvider>,
    pending: Option<Receiver<(u64, String)>>,
}

impl DealContextFetcher {
    pub fn new(provider: Arc<dyn DealContextProvider>) -> Self {
        Self {
            provider,
            pending: None,
        }
    }

    /// Start a request for activation `generation`. Replaces any pending one.
    pub fn request(&mut self, generation: u64, request: DealContextRequest) {
        let (tx, rx) = mpsc::channel();
        let provider = Arc::clone(&self.provider);

        thread::spawn(move || {
            let text = resolve(provider.as_ref(), &request);
            // Receiver may be gone after a restart
            let _ = tx.send((generation, text));
        });

        self.pending = Some(rx);
    }

    /// Result of the pending request, once it arrives
    pub fn poll(&mut self) -> Option<(u64, String)> {
        let rx = self.pending.as_ref()?;
        match rx.try_recv() {
            Ok(result) => {
                self.pending = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                None
            }
        }
    }

    /// Forget the pending request; a late result is discarded
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    struct FixedProvider(Result<&'static str, fn() -> DealContextError>);

    impl DealContextProvider for FixedProvider {
        fn generate(&self, _request: &DealContextRequest) -> Result<String, DealContextError> {
            match &self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(make) => Err(make()),
            }
        }
    }

    fn request() -> DealContextRequest {
        DealContextRequest {
            cabin_class: CabinClass::Business,
            from: "New York (JFK)".to_string(),
            to: "London (LHR)".to_string(),
            passenger_count: 2,
        }
    }

    #[test]
    fn test_request_from_criteria_counts_all_passengers() {
        let mut criteria = SearchCriteria::default();
        criteria.passengers.adults = 2;
        criteria.passengers.children = 1;
        criteria.destination = "Tokyo (HND)".to_string();
        let req = DealContextRequest::from(&criteria);
        assert_eq!(req.passenger_count, 3);
        assert_eq!(req.to, "Tokyo (HND)");
    }

    #[test]
    fn test_prompt_embeds_fields() {
        let prompt = request().prompt();
        assert!(prompt.contains("Business class flights from New York (JFK) to London (LHR)"));
        assert!(prompt.contains("for 2 passengers"));
    }

    #[test]
    fn test_fallbacks_embed_cabin_and_destination() {
        let req = request();
        let no_key = fallback_text(&req, &DealContextError::MissingApiKey);
        assert_eq!(
            no_key,
            "We have identified 3 unsold business class seats for your trip to London (LHR). These rates are time-sensitive."
        );

        let empty = fallback_text(&req, &DealContextError::EmptyResponse);
        assert!(empty.contains("Business seats to London (LHR)"));

        let failed = fallback_text(&req, &DealContextError::Status(503));
        assert!(failed.contains("Business flights to London (LHR)"));
    }

    #[test]
    fn test_resolve_uses_generated_text() {
        let provider = FixedProvider(Ok("Seats are clearing fast."));
        assert_eq!(resolve(&provider, &request()), "Seats are clearing fast.");
    }

    #[test]
    fn test_resolve_falls_back_on_error() {
        let provider = FixedProvider(Err(|| DealContextError::Status(429)));
        let text = resolve(&provider, &request());
        assert!(text.starts_with("We have identified high-value unsold inventory"));
    }

    #[test]
    fn test_client_without_key_reports_missing_key() {
        let client = GeminiClient::new(Some("  ".to_string()), DEFAULT_MODEL, DEFAULT_BASE_URL)
            .unwrap();
        assert!(matches!(
            client.generate(&request()),
            Err(DealContextError::MissingApiKey)
        ));
    }

    #[test]
    fn test_endpoint() {
        let client =
            GeminiClient::new(None, "gemini-x", "https://example.test/").unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-x:generateContent"
        );
    }

    #[test]
    fn test_response_text_extraction() {
        let parsed: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":" Inventory clearing now. "}]}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.text().as_deref(), Some("Inventory clearing now."));

        let empty: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(empty.text(), None);
    }

    #[test]
    fn test_fetcher_delivers_tagged_result() {
        let mut fetcher = DealContextFetcher::new(Arc::new(OfflineProvider));
        fetcher.request(4, request());

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut result = None;
        while result.is_none() && Instant::now() < deadline {
            result = fetcher.poll();
            thread::sleep(Duration::from_millis(5));
        }
        let (generation, text) = result.unwrap();
        assert_eq!(generation, 4);
        assert!(text.contains("3 unsold business class seats"));
        assert!(!fetcher.is_pending());
    }

    #[test]
    fn test_cancelled_fetch_yields_nothing() {
        let mut fetcher = DealContextFetcher::new(Arc::new(OfflineProvider));
        fetcher.request(1, request());
        fetcher.cancel();
        thread::sleep(Duration::from_millis(20));
        assert_eq!(fetcher.poll(), None);
    }
}
