use crate::common::{self, FROM, TO, TOKEN};
use ghprofile_rs::server::{AppState, Config, build_router};
use httpmock::MockServer;
use serde_json::{Value, json};
use std::net::SocketAddr;

fn config(server: &MockServer, token: Option<&str>) -> Config {
    Config {
        github_token: token.map(str::to_string),
        api_url: Some(format!("{}/", server.base_url())),
        graphql_url: Some(server.url("/graphql")),
        ..Config::default()
    }
}

async fn spawn_app(config: Config) -> SocketAddr {
    let state = AppState::from_config(&config).unwrap();
    let router = build_router(state, &config);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn window_query() -> [(&'static str, &'static str); 3] {
    [("login", "octocat"), ("from", FROM), ("to", TO)]
}

#[tokio::test]
async fn get_profile_reports_cached_flag() {
    let upstream = common::setup_server();
    let mock = common::mock_graphql(
        &upstream,
        "octocat",
        200,
        &common::fixture("graphql_user", "octocat"),
    );
    let addr = spawn_app(config(&upstream, Some(TOKEN))).await;
    let http = reqwest::Client::new();
    let url = format!("http://{addr}/api/github");

    let first = http.get(&url).query(&window_query()).send().await.unwrap();
    assert_eq!(first.status(), 200);
    let first: Value = first.json().await.unwrap();
    assert_eq!(first["cached"], false);
    assert_eq!(first["pinned"].as_array().unwrap().len(), 2);
    assert_eq!(first["pinned"][1]["languageColor"], "#701516");
    assert_eq!(first["contributions"].as_array().unwrap().len(), 14);
    assert_eq!(first["totals"]["totalContributions"], 9);
    assert!(first.get("warning").is_none());

    let second: Value = http
        .get(&url)
        .query(&window_query())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(second["cached"], true);
    assert_eq!(second["recent"], first["recent"]);
    mock.assert_calls(1);
}

#[tokio::test]
async fn post_body_supplies_login_and_window() {
    let upstream = common::setup_server();
    let mock = common::mock_graphql(
        &upstream,
        "octocat",
        200,
        &common::fixture("graphql_user", "octocat"),
    );
    let addr = spawn_app(config(&upstream, Some(TOKEN))).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/api/github"))
        .json(&json!({ "login": "octocat", "from": FROM, "to": TO }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["projects"][0]["title"], "Roadmap");
    mock.assert();
}

#[tokio::test]
async fn missing_token_serves_degraded_profile() {
    let upstream = common::setup_server();
    let mock = common::mock_public_repos(
        &upstream,
        "octocat",
        200,
        &common::fixture("public_repos", "octocat"),
    );
    let addr = spawn_app(config(&upstream, None)).await;

    let resp = reqwest::get(format!("http://{addr}/api/github?login=octocat"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["warning"], "MISSING_GITHUB_TOKEN");
    assert_eq!(body["pinned"], json!([]));
    assert_eq!(body["contributions"], json!([]));
    assert_eq!(body["projects"], json!([]));
    assert_eq!(body["recent"].as_array().unwrap().len(), 3);
    assert_eq!(body["recent"][2]["pushedAt"], Value::Null);
    mock.assert();
}

#[tokio::test]
async fn upstream_failures_map_to_bad_gateway() {
    let upstream = common::setup_server();
    let mock = common::mock_graphql(&upstream, "octocat", 200, r#"{"data":{"user":null}}"#);
    let addr = spawn_app(config(&upstream, Some(TOKEN))).await;

    let resp = reqwest::Client::new()
        .get(format!("http://{addr}/api/github"))
        .query(&window_query())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 502);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "No user data returned");
    assert_eq!(body["details"]["data"]["user"], Value::Null);
    mock.assert();
}

#[tokio::test]
async fn public_listing_failure_maps_to_bad_gateway() {
    let upstream = common::setup_server();
    let mock = common::mock_public_repos(&upstream, "ghost-user", 404, "{}");
    let addr = spawn_app(config(&upstream, None)).await;

    let resp = reqwest::get(format!("http://{addr}/api/github?login=ghost-user"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 502);

    let body: Value = resp.json().await.unwrap();
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("Failed to fetch public repos")
    );
    mock.assert();
}

#[tokio::test]
async fn concurrent_logins_are_served_independently() {
    let upstream = common::setup_server();
    let logins = ["octocat", "torvalds", "rust-lang"];
    let mocks: Vec<_> = logins
        .iter()
        .map(|l| common::mock_public_repos(&upstream, l, 200, "[]"))
        .collect();
    let addr = spawn_app(config(&upstream, None)).await;
    let http = reqwest::Client::new();

    let responses = futures::future::join_all(logins.iter().map(|login| {
        http.get(format!("http://{addr}/api/github"))
            .query(&[("login", *login)])
            .send()
    }))
    .await;

    for resp in responses {
        assert_eq!(resp.unwrap().status(), 200);
    }
    for m in &mocks {
        m.assert();
    }
}

#[tokio::test]
async fn blank_login_and_bad_days_fall_back_to_defaults() {
    let upstream = common::setup_server();
    let mock = common::mock_public_repos(&upstream, "torvalds", 200, "[]");
    let addr = spawn_app(Config {
        default_login: Some("torvalds".into()),
        ..config(&upstream, None)
    })
    .await;

    let resp = reqwest::get(format!("http://{addr}/api/github?login=&days=abc&daysBack=5"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["cached"], false);
    assert_eq!(body["warning"], "MISSING_GITHUB_TOKEN");
    mock.assert();
}

#[tokio::test]
async fn undated_to_still_answers() {
    let upstream = common::setup_server();
    let mock = common::mock_public_repos(&upstream, "octocat", 200, "[]");
    let addr = spawn_app(config(&upstream, None)).await;

    let resp = reqwest::get(format!("http://{addr}/api/github?to=yesterday"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    mock.assert();
}

#[tokio::test]
async fn health_reports_mode() {
    let upstream = common::setup_server();
    let addr = spawn_app(config(&upstream, None)).await;

    let body: Value = reqwest::get(format!("http://{addr}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "status": "ok", "mode": "public" }));
}

#[tokio::test]
async fn unknown_path_is_json_not_found() {
    let upstream = common::setup_server();
    let addr = spawn_app(config(&upstream, Some(TOKEN))).await;

    let resp = reqwest::get(format!("http://{addr}/nope")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}
