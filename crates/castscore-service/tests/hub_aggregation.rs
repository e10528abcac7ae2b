// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aggregation against a real `HubClient` talking to a wiremock Hub.

use std::sync::Arc;

use castscore_config::model::HubConfig;
use castscore_core::{CastscoreError, Fid, SystemClock};
use castscore_hub::HubClient;
use castscore_service::{ScoreCache, ScoreService};
use castscore_test_utils::fixtures::{messages, page, user_data};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn service_for(server: &MockServer) -> ScoreService {
    let hub = HubClient::new(&HubConfig {
        base_url: server.uri(),
        page_size: 100,
        timeout_secs: 2,
    })
    .unwrap();
    let cache = Arc::new(ScoreCache::new(Arc::new(SystemClock)));
    ScoreService::new(Arc::new(hub), cache)
}

#[tokio::test]
async fn full_pipeline_over_http() {
    let server = MockServer::start().await;

    mount_page(&server, "/v1/castsByFid", page(messages(40))).await;
    mount_page(&server, "/v1/reactionsByFid", page(messages(10))).await;
    mount_page(&server, "/v1/linksByFid", page(messages(20))).await;
    mount_page(&server, "/v1/linksByTargetFid", page(messages(50))).await;
    mount_page(
        &server,
        "/v1/userDataByFid",
        page(vec![
            user_data(6, "https://i/p.png"),
            user_data("USER_DATA_TYPE_DISPLAY", "Alice"),
            user_data("USER_DATA_TYPE_FNAME", "alice"),
        ]),
    )
    .await;

    let service = service_for(&server);
    let payload = service.get_score(Fid::new(123).unwrap()).await.unwrap();

    assert_eq!(payload.breakdown.total, 42);
    assert_eq!(payload.profile.pfp_url.as_deref(), Some("https://i/p.png"));
    assert_eq!(payload.profile.username.as_deref(), Some("alice"));
    assert_eq!(payload.source.hub, server.uri());
}

#[tokio::test]
async fn cached_result_makes_no_further_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/castsByFid"))
        .and(query_param("fid", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(messages(3))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"messages": []})))
        .expect(4)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let fid = Fid::new(9).unwrap();
    let first = service.get_score(fid).await.unwrap();
    let second = service.get_score(fid).await.unwrap();
    assert_eq!(first, second);
    // `expect` counts are verified when the server drops.
}

#[tokio::test]
async fn upstream_500_on_casts_is_aggregation_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/castsByFid"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_page(&server, "/v1/reactionsByFid", page(messages(1))).await;

    let service = service_for(&server);
    let err = service.get_score(Fid::new(5).unwrap()).await.unwrap_err();
    assert!(matches!(err, CastscoreError::AggregationFailed { .. }));
    assert!(err.to_string().contains("500"), "got: {err}");
}

#[tokio::test]
async fn unmatched_best_effort_routes_are_tolerated() {
    let server = MockServer::start().await;

    // Only casts is mounted; wiremock answers 404 for everything else.
    mount_page(&server, "/v1/castsByFid", page(messages(100))).await;

    let service = service_for(&server);
    let payload = service.get_score(Fid::new(5).unwrap()).await.unwrap();
    assert_eq!(payload.samples.casts, 100);
    assert_eq!(payload.samples.likes, 0);
    assert_eq!(payload.breakdown.total, 35);
}
