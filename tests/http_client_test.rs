//! HTTP ledger/indexer clients against a mock node

use qvote_client::config::LedgerConfig;
use qvote_client::ledger::{
    HttpIndexerClient, HttpLedgerClient, IndexerClient, LedgerClient, LedgerError,
};

fn config(server: &mockito::ServerGuard) -> LedgerConfig {
    LedgerConfig {
        algod_url: server.url(),
        algod_token: "secret-token".to_string(),
        indexer_url: server.url(),
        indexer_token: "indexer-token".to_string(),
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn status_sends_token_and_decodes_round() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/status")
        .match_header("X-Algo-API-Token", "secret-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"last-round": 20776100}"#)
        .create_async()
        .await;

    let client = HttpLedgerClient::new(&config(&server)).unwrap();
    let status = client.status().await.unwrap();

    assert_eq!(status.last_round, 20776100);
    mock.assert_async().await;
}

#[tokio::test]
async fn account_information_decodes_created_apps() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/accounts/CREATORADDR")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "created-apps": [
                    {
                        "id": 17,
                        "params": {
                            "global-state": [
                                {"key": "TmFtZQ==", "value": {"bytes": "YnVkZ2V0", "uint": 0, "type": 1}}
                            ]
                        }
                    }
                ],
                "apps-local-state": []
            }"#,
        )
        .create_async()
        .await;

    let client = HttpLedgerClient::new(&config(&server)).unwrap();
    let account = client.account_information("CREATORADDR").await.unwrap();

    assert_eq!(account.created_apps.len(), 1);
    assert_eq!(account.created_apps[0].id, 17);
    assert_eq!(account.created_apps[0].params.global_state[0].key, "TmFtZQ==");
    assert!(account.apps_local_state.is_empty());
}

#[tokio::test]
async fn pending_transaction_decodes_confirmed_round() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/transactions/pending/TXID42")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"confirmed-round": 20776101}"#)
        .create_async()
        .await;

    let client = HttpLedgerClient::new(&config(&server)).unwrap();
    let pending = client.pending_transaction_information("TXID42").await.unwrap();

    assert_eq!(pending.confirmed_round, Some(20776101));
    assert_eq!(pending.pool_error, None);
}

#[tokio::test]
async fn http_error_status_is_typed() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/accounts/MISSING")
        .with_status(404)
        .with_body(r#"{"message": "no such account"}"#)
        .create_async()
        .await;

    let client = HttpLedgerClient::new(&config(&server)).unwrap();
    let err = client.account_information("MISSING").await.unwrap_err();

    match err {
        LedgerError::Http { status, endpoint, .. } => {
            assert_eq!(status, 404);
            assert_eq!(endpoint, "/v2/accounts/MISSING");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/status")
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let client = HttpLedgerClient::new(&config(&server)).unwrap();
    let err = client.status().await.unwrap_err();

    assert!(matches!(err, LedgerError::Decode { .. }));
}

#[tokio::test]
async fn indexer_lookup_is_a_passthrough() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/applications/99")
        .match_header("X-Algo-API-Token", "indexer-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"application": {"id": 99, "params": {"creator": "CREATORADDR"}}}"#)
        .create_async()
        .await;

    let client = HttpIndexerClient::new(&config(&server)).unwrap();
    let record = client.lookup_application(99).await.unwrap();

    assert_eq!(record["application"]["id"], 99);
    assert_eq!(record["application"]["params"]["creator"], "CREATORADDR");
}
