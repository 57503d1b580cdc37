use super::*;
use crate::state::notice::NoticeLog;
use futures::executor::block_on;
use std::sync::Mutex;

// =========================================================================
// FakeTransport
// =========================================================================

struct FakeTransport {
    reply: Result<HttpReply, String>,
    calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl FakeTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self { reply: Ok(HttpReply { status, body: body.to_owned() }), calls: Mutex::new(Vec::new()) }
    }

    fn failing(message: &str) -> Self {
        Self { reply: Err(message.to_owned()), calls: Mutex::new(Vec::new()) }
    }

    fn calls(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl RecipeTransport for FakeTransport {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpReply, String> {
        let query = query.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        self.calls.lock().unwrap().push((url.to_owned(), query));
        self.reply.clone()
    }
}

fn client(transport: FakeTransport) -> (SearchClient<FakeTransport>, NoticeLog) {
    let log = NoticeLog::new();
    (SearchClient::new(transport, &AppConfig::default(), log.notifier()), log)
}

const CHICKEN_BODY: &str = r#"{"meals":[{
    "idMeal":"1",
    "strMeal":"Chicken Stew",
    "strCategory":"Chicken",
    "strArea":"British",
    "strInstructions":"Simmer for an hour.",
    "strMealThumb":"https://example.test/stew.jpg",
    "strTags":null,
    "strYoutube":null,
    "strIngredient1":"Chicken",
    "strMeasure1":"1 whole"
}]}"#;

// =========================================================================
// Outcomes
// =========================================================================

#[test]
fn matching_search_returns_recipes_and_completed_notice() {
    let (client, log) = client(FakeTransport::replying(200, CHICKEN_BODY));
    let outcome = block_on(client.search("chicken")).unwrap();

    assert_eq!(outcome.recipes().len(), 1);
    assert_eq!(outcome.recipes()[0].name, "Chicken Stew");
    assert_eq!(log.take(), vec![Notice::SearchCompleted { count: 1 }]);
}

#[test]
fn blank_term_skips_request() {
    let transport = FakeTransport::replying(200, CHICKEN_BODY);
    let log = NoticeLog::new();
    let client = SearchClient::new(transport, &AppConfig::default(), log.notifier());

    assert_eq!(block_on(client.search("")).unwrap(), SearchOutcome::Skipped);
    assert_eq!(block_on(client.search("  \n ")).unwrap(), SearchOutcome::Skipped);
    assert!(client.transport.calls().is_empty());
    assert!(log.is_empty());
}

#[test]
fn null_meals_is_empty_success() {
    let (client, log) = client(FakeTransport::replying(200, r#"{"meals":null}"#));
    let outcome = block_on(client.search("zzzznonexistent")).unwrap();
    assert_eq!(outcome, SearchOutcome::NoMeals);
    assert!(outcome.recipes().is_empty());
    assert_eq!(log.take(), vec![Notice::SearchEmpty]);
}

#[test]
fn empty_meals_is_empty_success() {
    let (client, log) = client(FakeTransport::replying(200, r#"{"meals":[]}"#));
    let outcome = block_on(client.search("nothing")).unwrap();
    assert_eq!(outcome, SearchOutcome::Meals(Vec::new()));
    assert_eq!(log.take(), vec![Notice::SearchEmpty]);
}

#[test]
fn transport_failure_is_network_error() {
    let (client, log) = client(FakeTransport::failing("connection refused"));
    let err = block_on(client.search("chicken")).unwrap_err();

    assert_eq!(err, SearchError::Transport("connection refused".to_owned()));
    assert!(err.is_network());
    assert!(matches!(log.take().as_slice(), [Notice::SearchError { .. }]));
}

#[test]
fn non_success_status_is_network_error() {
    let (client, log) = client(FakeTransport::replying(503, "Service Unavailable"));
    let err = block_on(client.search("chicken")).unwrap_err();
    assert_eq!(err, SearchError::Status { status: 503 });
    assert!(err.is_network());
    assert_eq!(log.len(), 1);
}

#[test]
fn three_empty_outcomes_are_distinguishable() {
    let (null_client, null_log) = client(FakeTransport::replying(200, r#"{"meals":null}"#));
    let (empty_client, empty_log) = client(FakeTransport::replying(200, r#"{"meals":[]}"#));
    let (failing_client, failing_log) = client(FakeTransport::failing("offline"));

    let null = block_on(null_client.search("x"));
    let empty = block_on(empty_client.search("x"));
    let failed = block_on(failing_client.search("x"));

    assert_ne!(null, empty);
    assert!(null.is_ok() && empty.is_ok() && failed.is_err());
    assert_eq!(null_log.take(), vec![Notice::SearchEmpty]);
    assert_eq!(empty_log.take(), vec![Notice::SearchEmpty]);
    assert!(matches!(failing_log.take().as_slice(), [Notice::SearchError { .. }]));
}

// =========================================================================
// Request construction
// =========================================================================

#[test]
fn request_targets_search_endpoint_with_term_param() {
    let (client, _) = client(FakeTransport::replying(200, r#"{"meals":null}"#));
    block_on(client.search("  mac & cheese ")).unwrap();

    let calls = client.transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "https://www.themealdb.com/api/json/v1/1/search.php");
    assert_eq!(calls[0].1, vec![("s".to_owned(), "mac & cheese".to_owned())]);
}

#[test]
fn endpoint_follows_config() {
    let config = AppConfig::from_values(Some("http://localhost:9999/api/"), None);
    let client = SearchClient::new(FakeTransport::failing("unused"), &config, Notifier::silent());
    assert_eq!(client.endpoint(), "http://localhost:9999/api/search.php");
}

// =========================================================================
// Shape validation
// =========================================================================

#[test]
fn non_json_body_is_malformed() {
    let (client, log) = client(FakeTransport::replying(200, "<html>oops</html>"));
    let err = block_on(client.search("chicken")).unwrap_err();
    assert!(matches!(err, SearchError::Malformed(_)));
    assert!(!err.is_network());
    assert!(matches!(log.take().as_slice(), [Notice::SearchError { .. }]));
}

#[test]
fn top_level_array_is_malformed() {
    assert!(matches!(parse_search_body("[]"), Err(SearchError::Malformed(_))));
}

#[test]
fn meals_of_wrong_type_is_malformed() {
    assert!(matches!(parse_search_body(r#"{"meals":"none"}"#), Err(SearchError::Malformed(_))));
}

#[test]
fn one_bad_entry_fails_whole_body() {
    let body = r#"{"meals":[
        {"idMeal":"1","strMeal":"Ok","strCategory":"c","strInstructions":"i","strMealThumb":"t"},
        {"idMeal":"2","strMeal":"Bad","strCategory":"c","strInstructions":"i"}
    ]}"#;
    assert!(matches!(parse_search_body(body), Err(SearchError::Malformed(_))));
}

#[test]
fn numeric_dynamic_field_is_malformed() {
    let body = r#"{"meals":[
        {"idMeal":"1","strMeal":"Ok","strCategory":"c","strInstructions":"i","strMealThumb":"t","strMeasure3":5}
    ]}"#;
    assert!(matches!(parse_search_body(body), Err(SearchError::Malformed(_))));
}

#[test]
fn absent_meals_key_is_no_meals() {
    assert_eq!(parse_search_body("{}"), Ok(SearchOutcome::NoMeals));
}

// =========================================================================
// SearchOutcome helpers
// =========================================================================

#[test]
fn outcome_notices() {
    assert_eq!(SearchOutcome::Skipped.notice(), None);
    assert_eq!(SearchOutcome::NoMeals.notice(), Some(Notice::SearchEmpty));
    let two = SearchOutcome::Meals(vec![Recipe::new("1", "a"), Recipe::new("2", "b")]);
    assert_eq!(two.notice(), Some(Notice::SearchCompleted { count: 2 }));
    assert_eq!(two.into_recipes().len(), 2);
}

#[test]
fn http_reply_success_range() {
    assert!(HttpReply { status: 204, body: String::new() }.is_success());
    assert!(!HttpReply { status: 302, body: String::new() }.is_success());
    assert!(!HttpReply { status: 404, body: String::new() }.is_success());
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn browser_fetch_is_unavailable_natively() {
    let result = block_on(BrowserFetch.get("https://example.test", &[]));
    assert!(result.is_err());
}
