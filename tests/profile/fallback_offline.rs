use crate::common::{self, FROM, TO};
use ghprofile_rs::{ProfileDataService, ProfileParams, SourceMode};
use std::time::Duration;

#[tokio::test]
async fn no_token_uses_public_listing() {
    let server = common::setup_server();
    let listing = common::mock_public_repos(
        &server,
        "octocat",
        200,
        &common::fixture("public_repos", "octocat"),
    );
    let graphql = common::mock_graphql(&server, "octocat", 200, "{}");

    let svc = ProfileDataService::from_client(
        common::client(&server, None),
        Duration::from_secs(60),
        None,
    );
    assert_eq!(svc.mode(), SourceMode::PublicFallback);

    let params = ProfileParams {
        login: Some("octocat".into()),
        ..ProfileParams::default()
    };
    let resp = svc.handle(&params).await.unwrap();
    listing.assert();
    graphql.assert_calls(0);

    let p = resp.profile;
    assert!(p.pinned.is_empty());
    assert!(p.projects.is_empty());
    assert!(p.contributions.is_empty());
    assert_eq!(p.totals.total_contributions, 0);
    assert_eq!(p.warning.as_deref(), Some("MISSING_GITHUB_TOKEN"));

    assert_eq!(p.recent.len(), 3);
    assert_eq!(
        p.recent[1].url.as_deref(),
        Some("https://github.com/octocat/Spoon-Knife")
    );
    assert_eq!(p.recent[1].forks, 140_000);
    assert_eq!(p.recent[2].description, None);
    assert_eq!(p.recent[2].pushed_at, None);
}

#[tokio::test]
async fn fallback_result_is_cached_too() {
    let server = common::setup_server();
    let listing = common::mock_public_repos(&server, "octocat", 200, "[]");

    let svc = ProfileDataService::from_client(
        common::client(&server, None),
        Duration::from_secs(60),
        None,
    );
    let params = ProfileParams {
        from: Some(FROM.into()),
        to: Some(TO.into()),
        ..ProfileParams::default()
    };

    let first = svc.handle(&params).await.unwrap();
    let second = svc.handle(&params).await.unwrap();
    listing.assert_calls(1);

    assert!(!first.cached);
    assert!(second.cached);
    assert!(second.profile.is_degraded());
}

#[tokio::test]
async fn configured_login_is_used_when_request_names_none() {
    let server = common::setup_server();
    let listing = common::mock_public_repos(&server, "torvalds", 200, "[]");

    let svc = ProfileDataService::from_client(
        common::client(&server, None),
        Duration::from_secs(60),
        Some("torvalds".into()),
    );
    svc.handle(&ProfileParams::default()).await.unwrap();
    listing.assert();
}
