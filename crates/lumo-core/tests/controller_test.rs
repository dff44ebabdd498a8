// Controller orchestration tests against a wiremock server.
//
// These pin the batch semantics: every target attempted exactly once,
// no short-circuit, aggregate failure iff any target failed, and the
// brightness parse guard firing before any request leaves the process.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lumo_core::{Command, CommandOutcome, Controller, CoreError, Selector};

async fn setup() -> (MockServer, Controller) {
    let server = MockServer::start().await;
    let client = lumo_api::LightsClient::from_reqwest(&server.uri(), reqwest::Client::new())
        .expect("client");
    (server, Controller::from_client(client))
}

fn toggle_ok(id: &str) -> Mock {
    Mock::given(method("POST"))
        .and(path(format!("/v1/lights/id:{id}/toggle")))
        .respond_with(ResponseTemplate::new(207).set_body_json(json!({
            "results": [{"id": id, "status": "ok"}]
        })))
        .expect(1)
}

// ── Toggle batches ──────────────────────────────────────────────────

#[tokio::test]
async fn toggle_batch_attempts_every_target_despite_failures() {
    let (server, controller) = setup().await;

    toggle_ok("a").mount(&server).await;
    // `b` fails server-side; the batch must still reach `c`.
    Mock::given(method("POST"))
        .and(path("/v1/lights/id:b/toggle"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "backend down"})))
        .expect(1)
        .mount(&server)
        .await;
    toggle_ok("c").mount(&server).await;

    let outcome = controller
        .execute(Command::Toggle {
            ids: vec!["a".into(), "b".into(), "c".into()],
        })
        .await
        .expect("execute");

    let CommandOutcome::Batch(batch) = outcome else {
        panic!("expected batch outcome");
    };

    assert_eq!(batch.len(), 3);
    assert!(batch.is_failure());
    assert_eq!(batch.failed_count(), 1);

    let ids: Vec<&str> = batch.results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"], "submission order preserved");
    assert!(batch.results[0].outcome.is_ok());
    assert!(batch.results[1].outcome.is_err());
    assert!(batch.results[2].outcome.is_ok());

    // The `.expect(1)` on each mock verifies exactly-once dispatch on drop.
}

#[tokio::test]
async fn toggle_batch_all_successes_is_success() {
    let (server, controller) = setup().await;

    toggle_ok("a").mount(&server).await;
    toggle_ok("b").mount(&server).await;

    let outcome = controller
        .execute(Command::Toggle {
            ids: vec!["a".into(), "b".into()],
        })
        .await
        .expect("execute");

    let CommandOutcome::Batch(batch) = outcome else {
        panic!("expected batch outcome");
    };
    assert!(!batch.is_failure());
}

#[tokio::test]
async fn toggle_single_target_is_a_trivial_batch() {
    let (server, controller) = setup().await;

    toggle_ok("d073d5000001").mount(&server).await;

    let outcome = controller
        .execute(Command::Toggle {
            ids: vec!["d073d5000001".into()],
        })
        .await
        .expect("execute");

    let CommandOutcome::Batch(batch) = outcome else {
        panic!("expected batch outcome");
    };
    assert_eq!(batch.len(), 1);
    assert!(!batch.is_failure());
}

// ── Brightness ──────────────────────────────────────────────────────

#[tokio::test]
async fn brightness_sends_single_sparse_mutation() {
    let (server, controller) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/v1/lights/states"))
        .and(body_json(json!({
            "states": [{"selector": "d073d5000001", "brightness": 0.5}]
        })))
        .respond_with(ResponseTemplate::new(207).set_body_json(json!({
            "results": [{"id": "d073d5000001", "status": "ok"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = controller
        .execute(Command::SetBrightness {
            id: "d073d5000001".into(),
            value: "0.5".into(),
        })
        .await
        .expect("execute");

    assert!(matches!(outcome, CommandOutcome::Applied));
}

#[tokio::test]
async fn brightness_parse_error_aborts_before_any_request() {
    let (server, controller) = setup().await;

    let err = controller
        .execute(Command::SetBrightness {
            id: "d073d5000001".into(),
            value: "abc".into(),
        })
        .await
        .expect_err("must fail");

    assert!(matches!(
        err,
        CoreError::InvalidNumber {
            field: "brightness",
            ..
        }
    ));

    let requests = server.received_requests().await.expect("recording on");
    assert!(requests.is_empty(), "no request may leave the process");
}

#[tokio::test]
async fn brightness_out_of_range_is_forwarded_untouched() {
    let (server, controller) = setup().await;

    // No range validation on our side: the service is the authority.
    Mock::given(method("PUT"))
        .and(path("/v1/lights/states"))
        .and(body_json(json!({
            "states": [{"selector": "d073d5000001", "brightness": 1.5}]
        })))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"error": "brightness out of range"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = controller
        .execute(Command::SetBrightness {
            id: "d073d5000001".into(),
            value: "1.5".into(),
        })
        .await
        .expect_err("service rejects");

    assert!(matches!(err, CoreError::Service { status: 422, .. }));
}

// ── Query path ──────────────────────────────────────────────────────

#[tokio::test]
async fn query_maps_service_error_with_body() {
    let (server, controller) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/lights/all"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "rate limited"})))
        .mount(&server)
        .await;

    let err = controller
        .lights(&Selector::All)
        .await
        .expect_err("must fail");

    match err {
        CoreError::Service { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("rate limited"));
        }
        other => panic!("expected Service error, got {other:?}"),
    }
}

#[tokio::test]
async fn query_empty_response_builds_empty_rows() {
    let (server, controller) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/lights/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let lights = controller.lights(&Selector::All).await.expect("query");
    assert!(lumo_core::build_rows(lights).is_empty());
}

#[tokio::test]
async fn query_decode_failure_is_surfaced() {
    let (server, controller) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/lights/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "an array"})))
        .mount(&server)
        .await;

    let err = controller
        .lights(&Selector::All)
        .await
        .expect_err("must fail");
    assert!(matches!(err, CoreError::Decode { .. }));
}
