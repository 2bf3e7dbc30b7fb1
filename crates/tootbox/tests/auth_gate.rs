mod common;

use common::*;
use serde_json::json;
use tootbox::api::accounts::follow::Follow;
use tootbox::api::oauth::revoke::RevokeToken;
use tootbox::api::oauth::token::ObtainToken;
use tootbox::error::{AuthError, ClientError};
use tootbox::multipart::MediaFile;
use tootbox::{BearerToken, CallOptions};

fn assert_not_authenticated<T: std::fmt::Debug>(
    result: Result<T, ClientError>,
    endpoint: &str,
    scope: Option<&str>,
) {
    match result {
        Err(ClientError::Auth(AuthError::NotAuthenticated {
            endpoint: e,
            scope: s,
        })) => {
            assert_eq!(e, endpoint);
            assert_eq!(s, scope);
        }
        other => panic!("expected NotAuthenticated for {endpoint}, got {other:?}"),
    }
}

#[tokio::test]
async fn oauth_only_calls_without_token_never_reach_the_transport() {
    let (client, mock) = anonymous_client();

    assert_not_authenticated(
        client.verify_account_credentials(None).await,
        "/api/v1/accounts/verify_credentials",
        Some("read:accounts"),
    );
    assert_not_authenticated(
        client.create_block("1").await,
        "/api/v1/accounts/:id/block",
        Some("write:blocks"),
    );
    assert_not_authenticated(
        client.create_follow(Follow::new().id("1").build()).await,
        "/api/v1/accounts/:id/follow",
        Some("read:lists"),
    );
    assert_not_authenticated(
        client.lookup_preferences().await,
        "/api/v1/preferences",
        Some("read:accounts"),
    );
    assert_not_authenticated(
        client.destroy_featured_tag("9").await,
        "/api/v1/featured_tags/:id",
        Some("read:accounts"),
    );
    assert_not_authenticated(
        client.destroy_follow_suggestion("9").await,
        "/api/v1/suggestions/:account_id",
        Some("read"),
    );
    assert_not_authenticated(
        client
            .update_account_avatar(MediaFile::new("a.png", "x"))
            .await,
        "/api/v1/accounts/update_credentials",
        Some("read:accounts"),
    );
    assert_not_authenticated(
        client.lookup_familiar_followers(["1", "2"]).await,
        "/api/v1/accounts/familiar_followers",
        Some("read:follows"),
    );

    assert_eq!(mock.calls().await, 0);
}

#[tokio::test]
async fn not_authenticated_is_reported_as_such() {
    let (client, _mock) = anonymous_client();
    let err = client.lookup_blocks(Default::default()).await.unwrap_err();
    assert!(err.is_not_authenticated());
    assert!(err.as_api().is_none());
    assert!(err.to_string().contains("/api/v1/blocks"), "{err}");
}

#[tokio::test]
async fn optional_auth_sends_the_token_only_when_configured() {
    let (client, mock) = anonymous_client();
    mock.push_json(200, account_json("1", "alice")).await;
    let account = client.lookup_by_id("1").await.unwrap();
    assert_eq!(account.username, "alice");
    let log = mock.take_log().await;
    assert_eq!(log.len(), 1);
    assert!(authorization(&log[0]).is_none());

    let (client, mock) = authed_client("secret");
    mock.push_json(200, account_json("1", "alice")).await;
    client.lookup_by_id("1").await.unwrap();
    let log = mock.take_log().await;
    assert_eq!(authorization(&log[0]).unwrap(), "Bearer secret");
}

#[tokio::test]
async fn token_endpoints_never_send_the_configured_token() {
    let (client, mock) = authed_client("secret");
    mock.push_json(
        200,
        json!({
            "access_token": "fresh",
            "token_type": "Bearer",
            "scope": "read write",
            "created_at": 1573979017
        }),
    )
    .await;
    mock.push(raw_response(200, "{}")).await;

    let token = client
        .obtain_token(
            ObtainToken::new()
                .grant_type("authorization_code")
                .client_id("cid")
                .client_secret("csecret")
                .redirect_uri("urn:ietf:wg:oauth:2.0:oob")
                .code("abc")
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(token.bearer().as_str(), "fresh");
    assert!(token.has_scope("read:accounts"));

    let revoked = client
        .revoke_token(
            RevokeToken::new()
                .client_id("cid")
                .client_secret("csecret")
                .token("fresh")
                .build(),
        )
        .await
        .unwrap();
    assert!(revoked);

    let log = mock.take_log().await;
    assert_eq!(log.len(), 2);
    for req in &log {
        assert!(authorization(req).is_none(), "{}", req.uri());
        assert_eq!(req.method(), http::Method::POST);
    }
    assert_eq!(log[0].uri().path(), "/oauth/token");
    assert_eq!(log[1].uri().path(), "/oauth/revoke");
    let body: serde_json::Value = serde_json::from_slice(log[0].body()).unwrap();
    assert_eq!(body["grant_type"], "authorization_code");
    assert_eq!(body["code"], "abc");
    assert!(body.get("scope").is_none());
}

#[tokio::test]
async fn explicit_token_overrides_the_configured_one() {
    let (client, mock) = authed_client("configured");
    mock.push_json(200, account_json("1", "alice")).await;
    client
        .verify_account_credentials(Some(BearerToken::new("explicit")))
        .await
        .unwrap();
    let log = mock.take_log().await;
    assert_eq!(authorization(&log[0]).unwrap(), "Bearer explicit");

    mock.push_json(200, json!([])).await;
    let opts = CallOptions::with_auth(BearerToken::new("per-call"));
    client
        .send_with(&tootbox::api::blocks::GetBlocks::default(), opts)
        .await
        .unwrap()
        .into_output()
        .unwrap();
    let log = mock.take_log().await;
    assert_eq!(authorization(&log[0]).unwrap(), "Bearer per-call");
}

#[tokio::test]
async fn unusable_token_is_an_auth_error() {
    let (client, mock) = authed_client("line\nbreak");
    let err = client.lookup_mutes(Default::default()).await.unwrap_err();
    assert!(matches!(err, ClientError::Auth(AuthError::InvalidToken(_))));
    assert_eq!(mock.calls().await, 0);
}
