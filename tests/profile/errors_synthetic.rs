use crate::common::{self, FROM, TO, TOKEN};
use ghprofile_rs::{GhError, ProfileDataService, ProfileParams};
use std::time::Duration;
use url::Url;

fn params() -> ProfileParams {
    ProfileParams {
        login: Some("octocat".into()),
        from: Some(FROM.into()),
        to: Some(TO.into()),
        ..ProfileParams::default()
    }
}

fn authed(server: &httpmock::MockServer) -> ProfileDataService {
    ProfileDataService::from_client(
        common::client(server, Some(TOKEN)),
        Duration::from_secs(60),
        None,
    )
}

#[tokio::test]
async fn graphql_non_success_is_upstream_error_with_body() {
    let server = common::setup_server();
    let mock = common::mock_graphql(&server, "octocat", 401, r#"{"message":"Bad credentials"}"#);

    let err = authed(&server).handle(&params()).await.unwrap_err();
    mock.assert();

    match err {
        GhError::UpstreamError { status, body } => {
            assert_eq!(status, Some(401));
            assert!(body.unwrap().contains("Bad credentials"));
        }
        other => panic!("expected UpstreamError, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_user_object_is_schema_mismatch() {
    let server = common::setup_server();
    let mock = common::mock_graphql(
        &server,
        "octocat",
        200,
        r#"{"data":{"user":null},"errors":[{"type":"NOT_FOUND"}]}"#,
    );

    let err = authed(&server).handle(&params()).await.unwrap_err();
    mock.assert();

    match err {
        GhError::UpstreamSchemaMismatch { raw } => {
            assert_eq!(raw["errors"][0]["type"], "NOT_FOUND");
        }
        other => panic!("expected UpstreamSchemaMismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_success_is_malformed_payload() {
    let server = common::setup_server();
    let mock = common::mock_graphql(&server, "octocat", 200, "<html>oops</html>");

    let err = authed(&server).handle(&params()).await.unwrap_err();
    mock.assert();
    assert!(matches!(err, GhError::MalformedUpstreamPayload { .. }));
}

#[tokio::test]
async fn public_listing_failure_is_upstream_unavailable() {
    let server = common::setup_server();
    let mock = common::mock_public_repos(&server, "ghost-user", 404, r#"{"message":"Not Found"}"#);

    let svc = ProfileDataService::from_client(
        common::client(&server, None),
        Duration::from_secs(60),
        None,
    );
    let p = ProfileParams {
        login: Some("ghost-user".into()),
        ..ProfileParams::default()
    };
    let err = svc.handle(&p).await.unwrap_err();
    mock.assert();

    match err {
        GhError::UpstreamUnavailable { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body.as_deref(), Some(r#"{"message":"Not Found"}"#));
        }
        other => panic!("expected UpstreamUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_upstream_is_transport_error() {
    // nothing listens on port 9 of localhost
    let client = ghprofile_rs::GhClient::builder()
        .graphql_url(Url::parse("http://127.0.0.1:9/graphql").unwrap())
        .token(TOKEN)
        .build()
        .unwrap();
    let svc = ProfileDataService::from_client(client, Duration::from_secs(60), None);

    let err = svc.handle(&params()).await.unwrap_err();
    match err {
        GhError::UpstreamError { status, body } => {
            assert_eq!(status, None);
            assert!(body.is_some());
        }
        other => panic!("expected UpstreamError, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_fetch_is_retried_on_next_request() {
    let server = common::setup_server();
    let mock = common::mock_graphql(&server, "octocat", 502, "bad gateway");

    let svc = authed(&server);
    assert!(svc.handle(&params()).await.is_err());
    assert!(svc.handle(&params()).await.is_err());
    mock.assert_calls(2);
}
