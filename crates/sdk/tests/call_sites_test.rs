// Call-site tests
// Parameter shaping, local validation and result decoding per daemon method

use lbry_sdk::transport::mocks::MockTransport;
use lbry_sdk::{
    ClaimCategory, DescriptorResult, FileDeleteRequest, FileListOptions, FileStatus, GetOptions,
    LbryClient, LbryError, MetadataFee, PaymentRateManager, PublishOptions, SettingsUpdate,
    StreamMetadata,
};
use serde_json::{json, Value};
use std::sync::Arc;

fn setup(result: Value) -> (LbryClient, Arc<MockTransport>) {
    let mock = Arc::new(MockTransport::with_result(result));
    (LbryClient::with_transport(mock.clone()), mock)
}

fn claim_tx() -> Value {
    json!({
        "tx": "0100",
        "txid": "5a1b",
        "nout": 0,
        "fee": 0.0001,
        "claim_id": "c0ffee"
    })
}

fn file_info() -> Value {
    json!({
        "completed": true,
        "file_name": "hello.mp4",
        "download_directory": "/home/me/Downloads",
        "points_paid": 0.0,
        "stopped": false,
        "stream_hash": "a1",
        "stream_name": "hello.mp4",
        "suggested_file_name": "hello.mp4",
        "sd_hash": "d2",
        "name": "hello",
        "outpoint": "5a1b:0",
        "claim_id": "c0ffee",
        "download_path": "/home/me/Downloads/hello.mp4",
        "mime_type": "video/mp4",
        "key": "k",
        "total_bytes": null,
        "written_bytes": 1024,
        "message": null,
        "metadata": {"title": "Hello"}
    })
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_channel_new_prefixes_name_and_coerces_amount() {
    let (client, mock) = setup(json!({"result": claim_tx()}));

    let claim_id = client.channel_new("test", 1).await.unwrap();

    assert_eq!(claim_id, "c0ffee");
    let sent = mock.last_request().unwrap();
    assert_eq!(sent["method"], "channel_new");
    assert_eq!(sent["params"], json!({"channel_name": "@test", "amount": 1.0}));
    assert!(sent["params"]["amount"].is_f64());
}

#[tokio::test]
async fn test_channel_new_keeps_existing_prefix() {
    let (client, mock) = setup(json!({"result": claim_tx()}));

    client.channel_new("@test", 2.5).await.unwrap();

    assert_eq!(mock.last_request().unwrap()["params"]["channel_name"], "@test");
}

#[tokio::test]
async fn test_channel_list_mine_sends_empty_params() {
    let (client, mock) = setup(json!([
        {"name": "@me", "claim_id": "abc", "amount": 1.0, "is_mine": true}
    ]));

    let channels = client.channel_list_mine().await.unwrap();

    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0].name, "@me");
    assert_eq!(channels[0].extra.get("is_mine"), Some(&json!(true)));
    assert_eq!(
        mock.last_request().unwrap(),
        json!({"method": "channel_list_mine", "params": {}})
    );
}

// ---------------------------------------------------------------------------
// Claims
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_claim_new_support_coerces_string_amount() {
    let (client, mock) = setup(json!({"txid": "aa", "nout": 1, "fee": 0.0001}));

    let support = client
        .claim_new_support("name", "abc123", "5")
        .await
        .unwrap();

    assert_eq!(support.nout, 1);
    let sent = mock.last_request().unwrap();
    assert_eq!(
        sent["params"],
        json!({"name": "name", "claim_id": "abc123", "amount": 5.0})
    );
}

#[tokio::test]
async fn test_claim_new_support_rejects_non_numeric_amount() {
    let (client, mock) = setup(Value::Null);

    let err = client
        .claim_new_support("name", "abc123", "lots")
        .await
        .unwrap_err();

    assert!(matches!(err, LbryError::Validation(_)));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_claim_show_false_is_none() {
    let (client, mock) = setup(json!(false));

    let claim = client
        .claim_show("missing", None, Some(0), None)
        .await
        .unwrap();

    assert!(claim.is_none());
    assert_eq!(
        mock.last_request().unwrap()["params"],
        json!({"name": "missing", "txid": null, "nout": 0, "claim_id": null})
    );
}

#[tokio::test]
async fn test_claim_show_found() {
    let (client, _mock) = setup(json!({
        "txid": "aa",
        "nout": 0,
        "amount": 1.0,
        "value": "0a",
        "height": 100,
        "claim_id": "abc",
        "supports": [{"txid": "bb", "nout": 1, "amount": 0.5}]
    }));

    let claim = client.claim_show("found", None, None, None).await.unwrap().unwrap();

    assert_eq!(claim.claim_id, "abc");
    assert_eq!(claim.supports[0].amount, 0.5);
}

#[tokio::test]
async fn test_claim_list_mine_decodes() {
    let (client, _mock) = setup(json!([{
        "address": "bYk",
        "amount": 0.01,
        "blocks_to_expiration": 100,
        "category": "update",
        "claim_id": "abc",
        "confirmations": 6,
        "expiration_height": 500,
        "expired": false,
        "height": 400,
        "is_spent": false,
        "name": "hello",
        "txid": "aa",
        "nout": 0,
        "value": "0a"
    }]));

    let claims = client.claim_list_mine().await.unwrap();
    assert_eq!(claims[0].category, ClaimCategory::Update);
}

#[tokio::test]
async fn test_claim_list_and_abandon() {
    let (client, mock) = setup(json!({
        "claims": [{
            "amount": 1.0,
            "effective_amount": 1.5,
            "claim_id": "abc",
            "height": 10,
            "txid": "aa",
            "nout": 0,
            "supports": [],
            "value": "0a"
        }],
        "supports_without_claims": [],
        "last_takeover_height": 10
    }));

    let claims = client.claim_list("hello").await.unwrap();
    assert_eq!(claims.claims[0].effective_amount, 1.5);
    assert_eq!(mock.last_request().unwrap()["params"], json!({"name": "hello"}));

    mock.push_json(200, json!({"result": {"txid": "dd", "fee": 0.0002}}));
    let abandoned = client.claim_abandon("abc").await.unwrap();
    assert_eq!(abandoned.txid, "dd");
    assert_eq!(mock.last_request().unwrap()["params"], json!({"claim_id": "abc"}));
}

// ---------------------------------------------------------------------------
// Publish
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_publish_without_required_fields_fails_before_sending() {
    let (client, mock) = setup(claim_tx());

    let err = client
        .publish(
            "foo",
            1.0,
            Some(StreamMetadata::default()),
            PublishOptions::default(),
        )
        .await
        .unwrap_err();

    match err {
        LbryError::Validation(msg) => assert!(msg.starts_with("title is a required field")),
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_publish_merges_metadata_and_options() {
    let (client, mock) = setup(claim_tx());

    let metadata = StreamMetadata {
        title: Some("Hello".into()),
        description: Some("A test".into()),
        author: Some("me".into()),
        ..Default::default()
    };
    let options = PublishOptions {
        language: Some("en".into()),
        license: Some("Public Domain".into()),
        nsfw: Some(false),
        file_path: Some("/tmp/hello.mp4".into()),
        ..Default::default()
    };

    let tx = client.publish("foo", 1, Some(metadata), options).await.unwrap();

    assert_eq!(tx.claim_id, "c0ffee");
    let sent = mock.last_request().unwrap();
    assert_eq!(sent["method"], "publish");
    assert_eq!(
        sent["params"],
        json!({
            "name": "foo",
            "bid": 1.0,
            "metadata": {"title": "Hello", "description": "A test", "author": "me"},
            "file_path": "/tmp/hello.mp4",
            "language": "en",
            "license": "Public Domain",
            "nsfw": false
        })
    );
}

#[tokio::test]
async fn test_publish_without_metadata_sends_empty_object() {
    let (client, mock) = setup(claim_tx());

    let options = PublishOptions {
        title: Some("t".into()),
        description: Some("d".into()),
        author: Some("a".into()),
        language: Some("en".into()),
        license: Some("MIT".into()),
        nsfw: Some(true),
        ..Default::default()
    };
    client.publish("foo", "0.1", None, options).await.unwrap();

    let params = &mock.last_request().unwrap()["params"];
    assert_eq!(params["metadata"], json!({}));
    assert_eq!(params["bid"], json!(0.1));
}

#[tokio::test]
async fn test_publish_typed_metadata_field_wins_over_extra() {
    let (client, mock) = setup(claim_tx());

    let mut metadata = StreamMetadata {
        title: Some("Typed".into()),
        ..Default::default()
    };
    metadata.extra.insert("title".into(), json!("Loose"));
    metadata.extra.insert("ver".into(), json!("0.0.3"));
    let options = PublishOptions {
        description: Some("d".into()),
        author: Some("a".into()),
        language: Some("en".into()),
        license: Some("MIT".into()),
        nsfw: Some(false),
        ..Default::default()
    };

    client.publish("foo", 1, Some(metadata), options).await.unwrap();

    assert_eq!(
        mock.last_request().unwrap()["params"]["metadata"],
        json!({"title": "Typed", "ver": "0.0.3"})
    );
}

// ---------------------------------------------------------------------------
// Files and streams
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_file_list_sends_only_set_filters() {
    let (client, mock) = setup(json!([file_info()]));

    let files = client
        .file_list(FileListOptions::by_sd_hash("d2").full_status(true))
        .await
        .unwrap();

    assert_eq!(files[0].written_bytes, Some(1024));
    assert_eq!(
        mock.last_request().unwrap()["params"],
        json!({"sd_hash": "d2", "full_status": true})
    );
}

#[tokio::test]
async fn test_file_delete_sends_every_selector() {
    let (client, mock) = setup(json!(true));

    let deleted = client
        .file_delete(FileDeleteRequest::by_sd_hash("d2"))
        .await
        .unwrap();

    assert!(deleted);
    let params = mock.last_request().unwrap()["params"].clone();
    assert_eq!(params["sd_hash"], "d2");
    assert_eq!(params["file_name"], Value::Null);
    assert_eq!(params["delete_target_file"], Value::Null);
    assert_eq!(params.as_object().unwrap().len(), 8);
}

#[tokio::test]
async fn test_file_set_status() {
    let (client, mock) = setup(json!("Stopped download for hello.mp4"));

    let message = client
        .file_set_status(FileStatus::Stop, None, Some("d2".into()), None)
        .await
        .unwrap();

    assert!(message.starts_with("Stopped"));
    assert_eq!(
        mock.last_request().unwrap()["params"],
        json!({"status": "stop", "name": null, "sd_hash": "d2", "file_name": null})
    );
}

#[tokio::test]
async fn test_get_forwards_all_arguments() {
    let (client, mock) = setup(file_info());

    let options = GetOptions {
        download_directory: Some("/tmp".into()),
        ..Default::default()
    };
    let file = client.get("lbry://hello", options).await.unwrap();

    assert_eq!(file.claim_id.as_deref(), Some("c0ffee"));
    assert_eq!(
        mock.last_request().unwrap(),
        json!({
            "method": "get",
            "params": {
                "uri": "lbry://hello",
                "file_name": null,
                "timeout": null,
                "download_directory": "/tmp"
            }
        })
    );
}

#[tokio::test]
async fn test_get_availability_and_reflect() {
    let (client, mock) = setup(json!(0.75));

    let availability = client
        .get_availability("lbry://hello", Some(10), None)
        .await
        .unwrap();
    assert_eq!(availability, 0.75);
    assert_eq!(
        mock.last_request().unwrap()["params"],
        json!({"uri": "lbry://hello", "sd_timeout": 10, "peer_timeout": null})
    );

    mock.push_json(200, json!({"result": true}));
    assert!(client.reflect("d2").await.unwrap());
    assert_eq!(
        mock.last_request().unwrap(),
        json!({"method": "reflect", "params": {"sd_hash": "d2"}})
    );
}

#[tokio::test]
async fn test_descriptor_get_named_params() {
    let (client, mock) = setup(json!({"stream_name": "6869", "blobs": []}));

    let result = client
        .descriptor_get("d2", Some(30), Some(PaymentRateManager::OnlyFree))
        .await
        .unwrap();

    assert!(matches!(result, DescriptorResult::Decoded(_)));
    assert_eq!(
        mock.last_request().unwrap()["params"],
        json!({"sd_hash": "d2", "timeout": 30, "payment_rate_manager": "only-free"})
    );
}

#[tokio::test]
async fn test_peer_list_sends_null_timeout() {
    let (client, mock) = setup(json!([["10.0.0.1", 3333]]));

    let peers = client.peer_list("b1", None).await.unwrap();

    assert_eq!(peers[0].port(), 3333);
    assert_eq!(
        mock.last_request().unwrap()["params"],
        json!({"blob_hash": "b1", "timeout": null})
    );
}

#[tokio::test]
async fn test_resolve_name_accepts_flat_fee() {
    let (client, mock) = setup(json!({
        "title": "Paid",
        "description": "Costs a credit",
        "author": "me",
        "language": "en",
        "license": "MIT",
        "nsfw": false,
        "fee": {"currency": "LBC", "amount": 1.0, "address": "bYk", "version": "_0_0_1"}
    }));

    let metadata = client.resolve_name("paid").await.unwrap().unwrap();

    assert_eq!(metadata.title.as_deref(), Some("Paid"));
    let fee = metadata.fee.unwrap();
    assert_eq!(fee.amount(), Some((1.0, "LBC")));
    match fee {
        MetadataFee::Flat(flat) => assert_eq!(flat.address.as_deref(), Some("bYk")),
        other => panic!("unexpected fee {:?}", other),
    }
    assert_eq!(mock.last_request().unwrap()["params"], json!({"name": "paid"}));
}

#[tokio::test]
async fn test_resolve_name_keeps_currency_keyed_fee() {
    let (client, _mock) = setup(json!({
        "title": "Paid",
        "fee": {"USD": {"amount": 0.25, "address": "bYk"}}
    }));

    let metadata = client.resolve_name("paid").await.unwrap().unwrap();

    assert!(matches!(metadata.fee, Some(MetadataFee::ByCurrency(_))));
    assert_eq!(metadata.fee.unwrap().amount(), Some((0.25, "USD")));
}

#[tokio::test]
async fn test_resolution_nulls_become_none() {
    let (client, mock) = setup(Value::Null);
    assert!(client.resolve("lbry://nothing").await.unwrap().is_none());

    mock.push_json(200, json!({"result": null}));
    assert!(client.resolve_name("nothing").await.unwrap().is_none());

    mock.push_json(200, json!({"result": null}));
    assert!(client
        .stream_cost_estimate("nothing", Some(1024))
        .await
        .unwrap()
        .is_none());
    assert_eq!(
        mock.last_request().unwrap()["params"],
        json!({"name": "nothing", "size": 1024})
    );
}

#[tokio::test]
async fn test_resolve_claim() {
    let (client, _mock) = setup(json!({
        "claim": {
            "address": "bYk",
            "amount": 1.0,
            "effective_amount": 1.0,
            "claim_id": "abc",
            "claim_sequence": 1,
            "decoded_claim": true,
            "height": 10,
            "depth": 5,
            "has_signature": false,
            "name": "hello",
            "supports": [],
            "txid": "aa",
            "nout": 0,
            "value": {"version": "_0_0_1"}
        }
    }));

    let resolved = client.resolve("lbry://hello").await.unwrap().unwrap();

    assert!(resolved.certificate.is_none());
    assert_eq!(resolved.claim.unwrap().claim_id, "abc");
}

// ---------------------------------------------------------------------------
// Wallet, transactions, daemon
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_wallet_balance_sends_both_arguments() {
    let (client, mock) = setup(json!(12.5));

    let balance = client
        .wallet_balance(Some("bYk".into()), Some(true))
        .await
        .unwrap();

    assert_eq!(balance, 12.5);
    assert_eq!(
        mock.last_request().unwrap()["params"],
        json!({"address": "bYk", "include_unconfirmed": true})
    );
}

#[tokio::test]
async fn test_send_amount_coerces_amount() {
    let (client, mock) = setup(json!(true));

    assert!(client.send_amount_to_address(3, "bYk").await.unwrap());
    assert_eq!(
        mock.last_request().unwrap()["params"],
        json!({"amount": 3.0, "address": "bYk"})
    );
}

#[tokio::test]
async fn test_wallet_address_calls() {
    let (client, mock) = setup(json!("bNew"));
    assert_eq!(client.wallet_new_address().await.unwrap(), "bNew");

    mock.push_json(200, json!({"result": "bUnused"}));
    assert_eq!(client.wallet_unused_address().await.unwrap(), "bUnused");

    mock.push_json(200, json!({"result": ["b1", "b2"]}));
    assert_eq!(client.wallet_list().await.unwrap().len(), 2);

    mock.push_json(200, json!({"result": ["02ab"]}));
    assert_eq!(client.wallet_public_key("b1").await.unwrap(), vec!["02ab"]);

    mock.push_json(200, json!({"result": false}));
    assert!(!client.wallet_is_address_mine("bOther").await.unwrap());

    let methods: Vec<Value> = mock.requests().iter().map(|r| r["method"].clone()).collect();
    assert_eq!(
        methods,
        vec![
            json!("wallet_new_address"),
            json!("wallet_unused_address"),
            json!("wallet_list"),
            json!("wallet_public_key"),
            json!("wallet_is_address_mine"),
        ]
    );
}

#[tokio::test]
async fn test_transactions() {
    let (client, mock) = setup(json!([{"txid": "aa", "value": 1.0, "confirmations": 2}]));
    let txs = client.transaction_list().await.unwrap();
    assert_eq!(txs[0].txid, "aa");

    mock.push_json(200, json!({"result": {"txid": "aa", "outputs": []}}));
    let tx = client.transaction_show("aa").await.unwrap();
    assert_eq!(tx.get("txid"), Some(&json!("aa")));
    assert_eq!(mock.last_request().unwrap()["params"], json!({"txid": "aa"}));
}

#[tokio::test]
async fn test_status_and_settings() {
    let (client, mock) = setup(json!({"is_running": true, "lbry_id": "x"}));
    let status = client.status(false).await.unwrap();
    assert_eq!(status.is_running, Some(true));
    assert_eq!(
        mock.last_request().unwrap()["params"],
        json!({"session_status": false})
    );

    mock.push_json(200, json!({"result": {"download_timeout": 180, "peer_port": 3333}}));
    let settings = client.settings_get().await.unwrap();
    assert_eq!(settings.peer_port, Some(3333));

    mock.push_json(200, json!({"result": {"download_timeout": 60}}));
    let updated = client
        .settings_set(SettingsUpdate {
            download_timeout: Some(60),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.download_timeout, Some(60));
    assert_eq!(
        mock.last_request().unwrap()["params"],
        json!({"download_timeout": 60})
    );
}

#[tokio::test]
async fn test_remote_error_from_call_site() {
    let mock = Arc::new(MockTransport::with_json(json!({
        "error": {"code": -32500, "message": "Not enough funds to cover this transaction."}
    })));
    let client = LbryClient::with_transport(mock.clone());

    let err = client.send_amount_to_address(1000, "bYk").await.unwrap_err();
    assert_eq!(err.rpc_code(), Some(-32500));
}
