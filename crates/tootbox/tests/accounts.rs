mod common;

use common::*;
use http::Method;
use serde_json::json;
use tootbox::api::accounts::follow::Follow;
use tootbox::api::accounts::get_statuses::GetAccountStatuses;
use tootbox::api::accounts::relationships::GetRelationships;
use tootbox::api::accounts::search::SearchAccounts;
use tootbox::api::accounts::update_credentials::UpdateCredentials;
use tootbox::error::{ClientError, TransportError};
use tootbox::multipart::MediaFile;
use tootbox::{BearerToken, Client};

#[tokio::test]
async fn verify_credentials_requires_and_sends_a_token() {
    let (client, mock) = anonymous_client();
    let err = client.verify_account_credentials(None).await.unwrap_err();
    assert!(err.is_not_authenticated());
    assert_eq!(mock.calls().await, 0);

    mock.push_json(200, json!({"id": "1", "username": "alice"}))
        .await;
    let account = client
        .verify_account_credentials(Some(BearerToken::new("tok")))
        .await
        .unwrap();
    assert_eq!(account.id, "1");
    assert_eq!(account.username, "alice");
    assert_eq!(account.acct_or_username(), "alice");

    let log = mock.take_log().await;
    assert_eq!(log.len(), 1);
    let req = &log[0];
    assert_eq!(req.method(), Method::GET);
    assert_eq!(
        req.uri().to_string(),
        "https://example.social/api/v1/accounts/verify_credentials"
    );
    assert_eq!(authorization(req).unwrap(), "Bearer tok");
    assert_eq!(req.headers()[http::header::ACCEPT], "application/json");
    assert!(
        req.headers()[http::header::USER_AGENT]
            .to_str()
            .unwrap()
            .starts_with("tootbox/")
    );
}

#[tokio::test]
async fn base_url_with_trailing_slash_and_escaped_ids() {
    let mock = MockClient::default();
    let cfg = tootbox::ClientConfig::new(url::Url::parse("https://example.social/").unwrap());
    let client = Client::new(mock.clone(), cfg);
    mock.push_json(200, account_json("a/b", "odd")).await;
    client.lookup_by_id("a/b").await.unwrap();
    let log = mock.take_log().await;
    assert_eq!(log[0].uri().path(), "/api/v1/accounts/a%2Fb");
}

#[tokio::test]
async fn statuses_keep_server_order_and_query() {
    let (client, mock) = anonymous_client();
    let status = |id: &str| {
        json!({
            "id": id,
            "uri": format!("https://example.social/users/alice/statuses/{id}"),
            "created_at": "2024-01-02T03:04:05.000Z",
            "account": account_json("1", "alice"),
            "content": "<p>hi</p>",
            "visibility": "public"
        })
    };
    mock.push_json(200, json!([status("30"), status("20"), status("10")]))
        .await;

    let statuses = client
        .lookup_statuses(
            GetAccountStatuses::new()
                .id("1")
                .limit(3)
                .exclude_replies(true)
                .build(),
        )
        .await
        .unwrap();
    let ids: Vec<&str> = statuses.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["30", "20", "10"]);

    let log = mock.take_log().await;
    assert_eq!(log[0].uri().path(), "/api/v1/accounts/1/statuses");
    assert_eq!(
        query_pairs(&log[0]),
        [
            ("limit".to_owned(), "3".to_owned()),
            ("exclude_replies".to_owned(), "true".to_owned())
        ]
    );
}

#[tokio::test]
async fn empty_list_is_not_an_error() {
    let (client, mock) = authed_client("tok");
    mock.push_json(200, json!([])).await;
    let found = client
        .search_accounts(SearchAccounts::new().q("nobody").build())
        .await
        .unwrap();
    assert!(found.is_empty());
    let log = mock.take_log().await;
    assert_eq!(query_pairs(&log[0]), [("q".to_owned(), "nobody".to_owned())]);
}

#[tokio::test]
async fn relationship_ids_repeat_as_array_params() {
    let (client, mock) = authed_client("tok");
    mock.push_json(
        200,
        json!([
            {"id": "2", "following": true, "followed_by": false},
            {"id": "1", "following": false, "blocking": true}
        ]),
    )
    .await;

    let rels = client
        .lookup_relationships(
            GetRelationships::new()
                .ids(vec!["1".into(), "2".into()])
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(rels[0].id, "2");
    assert_eq!(rels[0].following, Some(true));
    assert_eq!(rels[1].blocking, Some(true));

    let log = mock.take_log().await;
    assert_eq!(
        query_pairs(&log[0]),
        [
            ("id[]".to_owned(), "1".to_owned()),
            ("id[]".to_owned(), "2".to_owned())
        ]
    );
}

#[tokio::test]
async fn familiar_followers_take_plain_ids() {
    let (client, mock) = authed_client("tok");
    mock.push_json(
        200,
        json!([
            {"id": "7", "accounts": [account_json("3", "carol")]},
            {"id": "8", "accounts": []}
        ]),
    )
    .await;

    let familiar = client.lookup_familiar_followers(["7", "8"]).await.unwrap();
    assert_eq!(familiar.len(), 2);
    assert_eq!(familiar[0].accounts[0].username, "carol");
    assert!(familiar[1].accounts.is_empty());

    let log = mock.take_log().await;
    assert_eq!(log[0].uri().path(), "/api/v1/accounts/familiar_followers");
    assert_eq!(
        query_pairs(&log[0]),
        [
            ("id[]".to_owned(), "7".to_owned()),
            ("id[]".to_owned(), "8".to_owned())
        ]
    );
}

#[tokio::test]
async fn follow_posts_json_options() {
    let (client, mock) = authed_client("tok");
    mock.push_json(200, json!({"id": "5", "following": true, "notifying": true}))
        .await;

    let rel = client
        .create_follow(Follow::new().id("5").notify(true).build())
        .await
        .unwrap();
    assert_eq!(rel.notifying, Some(true));

    let log = mock.take_log().await;
    let req = &log[0];
    assert_eq!(req.method(), Method::POST);
    assert_eq!(req.uri().path(), "/api/v1/accounts/5/follow");
    assert_eq!(req.headers()[http::header::CONTENT_TYPE], "application/json");
    let body: serde_json::Value = serde_json::from_slice(req.body()).unwrap();
    assert_eq!(body, json!({"notify": true}));
}

#[tokio::test]
async fn profile_update_is_a_json_patch() {
    let (client, mock) = authed_client("tok");
    mock.push_json(200, account_json("1", "alice")).await;
    client
        .update_account(UpdateCredentials::new().note("hello").locked(true).build())
        .await
        .unwrap();
    let log = mock.take_log().await;
    assert_eq!(log[0].method(), Method::PATCH);
    let body: serde_json::Value = serde_json::from_slice(log[0].body()).unwrap();
    assert_eq!(body, json!({"note": "hello", "locked": true}));
}

#[tokio::test]
async fn avatar_upload_boundary_matches_content_type() {
    let (client, mock) = authed_client("tok");
    mock.push_json(200, account_json("1", "alice")).await;

    let file = MediaFile::new("me.png", &b"\x89PNG"[..]).with_content_type("image/png");
    client.update_account_avatar(file).await.unwrap();

    let log = mock.take_log().await;
    let req = &log[0];
    assert_eq!(req.method(), Method::PATCH);
    assert_eq!(req.uri().path(), "/api/v1/accounts/update_credentials");
    let content_type = req.headers()[http::header::CONTENT_TYPE].to_str().unwrap();
    let boundary = content_type
        .strip_prefix("multipart/form-data; boundary=")
        .expect("multipart content type");
    let body = req.body();
    assert!(body.starts_with(format!("--{boundary}\r\n").as_bytes()));
    assert!(body.ends_with(format!("--{boundary}--\r\n").as_bytes()));
    let text = String::from_utf8_lossy(body);
    assert!(text.contains(r#"name="avatar"; filename="me.png""#), "{text}");
    assert!(text.contains("Content-Type: image/png"), "{text}");
}

#[tokio::test]
async fn not_found_maps_to_api_error() {
    let (client, mock) = anonymous_client();
    mock.push_json(404, json!({"error": "Record not found"})).await;
    let err = client.lookup_by_id("404").await.unwrap_err();
    let api = err.as_api().expect("api error");
    assert!(api.is_not_found());
    assert_eq!(api.message, "Record not found");
}

#[tokio::test]
async fn html_error_page_gets_generic_message() {
    let (client, mock) = anonymous_client();
    mock.push(raw_response(500, "<html><body>Oops</body></html>"))
        .await;
    let err = client.lookup_by_acct("alice").await.unwrap_err();
    let api = err.as_api().expect("api error");
    assert_eq!(api.status, http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(api.message, "Internal Server Error");
    assert_eq!(&api.body[..], b"<html><body>Oops</body></html>");
}

#[tokio::test]
async fn unauthorized_is_an_api_error_not_an_auth_error() {
    let (client, mock) = authed_client("expired");
    mock.push_json(401, json!({"error": "The access token is invalid"}))
        .await;
    let err = client.verify_account_credentials(None).await.unwrap_err();
    assert!(!err.is_not_authenticated());
    assert!(err.as_api().unwrap().is_unauthorized());
}

#[tokio::test]
async fn body_that_does_not_match_is_a_decode_error() {
    let (client, mock) = anonymous_client();
    mock.push_json(200, json!({"username": "no-id"})).await;
    let err = client.lookup_by_id("1").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)), "{err:?}");

    // a single entity where a list is expected
    mock.push_json(200, account_json("1", "alice")).await;
    let err = client
        .lookup_statuses(GetAccountStatuses::new().id("1").build())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn transport_failure_is_reported() {
    let client = Client::new(UnreachableClient, config());
    let err = client.lookup_by_id("1").await.unwrap_err();
    match err {
        ClientError::Transport(TransportError::Other(inner)) => {
            assert_eq!(inner.to_string(), "connection refused");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}
