//! Gemini client behaviour against a local mock of the generateContent API.

use axum::http::{StatusCode, Uri};
use minddump::classify::gemini::GeminiClassifier;
use minddump::classify::{
    Category, Classifier, FallbackReason, ParsePath, Provenance, ThoughtType,
};
use minddump::config::ClassifierConfig;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// What the mock server saw.
#[derive(Clone, Default)]
struct Seen {
    hits: Arc<AtomicUsize>,
    path: Arc<Mutex<Option<String>>>,
    query: Arc<Mutex<Option<String>>>,
    body: Arc<Mutex<Option<String>>>,
}

impl Seen {
    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Serve `status` + `body` for every request. Returns the base URL to configure.
async fn mock_gemini(status: StatusCode, body: String) -> (String, Seen) {
    let seen = Seen::default();
    let recorder = seen.clone();

    let app = axum::Router::new().fallback(move |uri: Uri, request_body: String| {
        let recorder = recorder.clone();
        let body = body.clone();
        async move {
            recorder.hits.fetch_add(1, Ordering::SeqCst);
            *recorder.path.lock().unwrap() = Some(uri.path().to_string());
            *recorder.query.lock().unwrap() = uri.query().map(str::to_string);
            *recorder.body.lock().unwrap() = Some(request_body);
            (status, body)
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v1beta"), seen)
}

/// A generateContent envelope wrapping `text` as the completion.
fn envelope(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }] }
        }]
    })
    .to_string()
}

fn classifier(base_url: &str, api_key: Option<&str>) -> GeminiClassifier {
    let config = ClassifierConfig {
        base_url: base_url.to_string(),
        api_key: api_key.map(str::to_string),
        ..Default::default()
    };
    GeminiClassifier::new(&config).unwrap()
}

#[tokio::test]
async fn missing_key_makes_no_request() {
    let (base, seen) = mock_gemini(StatusCode::OK, envelope("{}")).await;

    for key in [None, Some(""), Some("   ")] {
        let result = classifier(&base, key).classify("buy milk").await;
        assert_eq!(result.category, Category::Random);
        assert_eq!(result.thought_type, ThoughtType::Thought);
        assert_eq!(
            result.provenance,
            Provenance::Fallback(FallbackReason::MissingCredential)
        );
    }

    assert_eq!(seen.hits(), 0);
}

#[tokio::test]
async fn json_completion_is_classified() {
    let (base, seen) = mock_gemini(
        StatusCode::OK,
        envelope(r#"{"category":"shopping","type":"task"}"#),
    )
    .await;

    let result = classifier(&base, Some("test-key"))
        .classify("buy milk and eggs")
        .await;

    assert_eq!(result.category, Category::Shopping);
    assert_eq!(result.thought_type, ThoughtType::Task);
    assert_eq!(result.provenance, Provenance::Model(ParsePath::Json));
    assert_eq!(seen.hits(), 1);
}

#[tokio::test]
async fn request_carries_key_prompt_and_generation_config() {
    let (base, seen) = mock_gemini(
        StatusCode::OK,
        envelope(r#"{"category":"work","type":"task"}"#),
    )
    .await;

    classifier(&base, Some("secret key"))
        .classify("finish the quarterly report")
        .await;

    let path = seen.path.lock().unwrap().clone().unwrap();
    assert_eq!(path, "/v1beta/models/gemini-1.5-flash:generateContent");

    let query = seen.query.lock().unwrap().clone().unwrap();
    assert_eq!(query, "key=secret+key");

    let body = seen.body.lock().unwrap().clone().unwrap();
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("finish the quarterly report"));
    assert!(prompt.trim_end().ends_with("JSON Response:"));

    let generation = &body["generationConfig"];
    assert_eq!(generation["temperature"], 0.1);
    assert_eq!(generation["maxOutputTokens"], 50);
    assert_eq!(generation["topP"], 0.8);
    assert_eq!(generation["topK"], 10);
}

#[tokio::test]
async fn free_text_with_near_miss_labels_is_recovered() {
    let (base, _) = mock_gemini(
        StatusCode::OK,
        envelope("Category: shop, Type: Task!"),
    )
    .await;

    let result = classifier(&base, Some("k")).classify("get bread").await;

    assert_eq!(result.category, Category::Shopping);
    assert_eq!(result.thought_type, ThoughtType::Task);
    assert_eq!(result.provenance, Provenance::Model(ParsePath::Pattern));
}

#[tokio::test]
async fn free_text_without_labels_falls_to_defaults() {
    let (base, _) = mock_gemini(
        StatusCode::OK,
        envelope("I think this is shoping and its a Task!"),
    )
    .await;

    let result = classifier(&base, Some("k")).classify("get bread").await;

    assert_eq!(result.category, Category::Random);
    assert_eq!(result.thought_type, ThoughtType::Thought);
    assert_eq!(result.provenance, Provenance::Model(ParsePath::Pattern));
}

#[tokio::test]
async fn misspelled_label_with_no_rule_is_random() {
    let (base, _) = mock_gemini(
        StatusCode::OK,
        envelope("category: shoping and type: Task!"),
    )
    .await;

    let result = classifier(&base, Some("k")).classify("get bread").await;

    assert_eq!(result.category, Category::Random);
    assert_eq!(result.thought_type, ThoughtType::Task);
}

#[tokio::test]
async fn error_status_falls_back() {
    let (base, seen) = mock_gemini(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":{"message":"boom"}}"#.to_string(),
    )
    .await;

    let result = classifier(&base, Some("k")).classify("call mom").await;

    assert_eq!(result.category, Category::Random);
    assert_eq!(result.thought_type, ThoughtType::Thought);
    assert_eq!(
        result.provenance,
        Provenance::Fallback(FallbackReason::HttpStatus(500))
    );
    assert_eq!(seen.hits(), 1);
}

#[tokio::test]
async fn non_json_body_falls_back() {
    let (base, _) = mock_gemini(StatusCode::OK, "<html>gateway</html>".to_string()).await;

    let result = classifier(&base, Some("k")).classify("call mom").await;

    assert_eq!(
        result.provenance,
        Provenance::Fallback(FallbackReason::InvalidResponse)
    );
}

#[tokio::test]
async fn envelope_without_text_is_random_thought() {
    let (base, _) = mock_gemini(StatusCode::OK, r#"{"candidates":[]}"#.to_string()).await;

    let result = classifier(&base, Some("k")).classify("call mom").await;

    assert_eq!(result.category, Category::Random);
    assert_eq!(result.thought_type, ThoughtType::Thought);
    assert!(!result.is_fallback());
}

#[tokio::test]
async fn connection_refused_falls_back() {
    // Bind then drop so the port is known to be closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = classifier(&format!("http://{addr}/v1beta"), Some("k"))
        .classify("call mom")
        .await;

    assert_eq!(result.category, Category::Random);
    assert_eq!(result.thought_type, ThoughtType::Thought);
    assert_eq!(
        result.provenance,
        Provenance::Fallback(FallbackReason::Transport)
    );
}
