use omni_rpc_client::{ClientConfig, ErrorKind, RpcClientError};
use omni_rpc_tron::{AccountIdentifier, BlockIdentifier, TronRpcClient};

fn client(url: &str) -> TronRpcClient {
    TronRpcClient::new(url, ClientConfig::default()).expect("url is valid")
}

#[tokio::test]
async fn get_now_block_decodes_the_header() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/wallet/getnowblock")
        .with_status(200)
        .with_body(
            r#"{
                "blockID": "0000000003167e8cb71aae3c1135b0eb8d0cf0bd0e267c3925324e95c4740513",
                "block_header": {
                    "raw_data": {
                        "number": 51805836,
                        "timestamp": 1690282455000,
                        "parentHash": "0000000003167e8b754e042b5da9e934b00a915d9798c6c0c44dc4b170ce4dd2",
                        "version": 27
                    },
                    "witness_signature": "4e"
                }
            }"#,
        )
        .create_async()
        .await;

    let block = client(&server.url())
        .get_now_block()
        .await
        .expect("call succeeds");

    assert!(block.block_header.raw_data.number > 0);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_block_posts_the_identifier() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/wallet/getblock")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "id_or_num": "1000000",
            "detail": true,
        })))
        .with_status(200)
        .with_body(r#"{"block_header": {"raw_data": {"number": 1000000, "timestamp": 1532881908000}}}"#)
        .create_async()
        .await;

    let block = client(&server.url())
        .get_block("1000000")
        .await
        .expect("call succeeds");

    assert_eq!(block.block_header.raw_data.number, 1_000_000);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_transaction_by_id_round_trips_the_id() {
    const TX_ID: &str = "7c2d4206c03a883dd9066d620335dc1be272a8dc733cfa3f6d10308faa37facc";

    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/wallet/gettransactionbyid")
        .with_status(200)
        .with_body(format!(
            r#"{{"txID": "{TX_ID}", "ret": [{{"contractRet": "SUCCESS"}}], "signature": ["aa"]}}"#
        ))
        .create_async()
        .await;

    let transaction = client(&server.url())
        .get_transaction_by_id(TX_ID)
        .await
        .expect("call succeeds");

    assert_eq!(transaction.tx_id, TX_ID);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_account_balance_matches_the_historical_read() {
    const BLOCK_HASH: &str = "0000000003153ce39bcd0a9832ab6783b629b43d656107bb26f18697095ec073";

    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/wallet/getaccountbalance")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "account_identifier": {"address": "TQuDQGdYmzuicmjkWrdpFWXKxpb9P17777"},
            "block_identifier": {"hash": BLOCK_HASH, "number": 51723491},
            "visible": true,
        })))
        .with_status(200)
        .with_body(format!(
            r#"{{"balance": 0, "block_identifier": {{"hash": "{BLOCK_HASH}", "number": 51723491}}}}"#
        ))
        .create_async()
        .await;

    let balance = client(&server.url())
        .get_account_balance(
            AccountIdentifier::new("TQuDQGdYmzuicmjkWrdpFWXKxpb9P17777"),
            BlockIdentifier {
                hash: BLOCK_HASH.to_string(),
                number: 51723491,
            },
            true,
        )
        .await
        .expect("call succeeds");

    assert_eq!(balance.balance, 0);
    assert_eq!(balance.block_identifier.hash, BLOCK_HASH);
    assert_eq!(balance.block_identifier.number, 51723491);
    mock.assert_async().await;
}

#[tokio::test]
async fn node_error_bodies_surface_as_permanent_remote_errors() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/wallet/getblock")
        .with_status(200)
        .with_body(r#"{"Error": "class java.lang.NumberFormatException : For input string: \"x\""}"#)
        .expect(1)
        .create_async()
        .await;

    let error = client(&server.url())
        .get_block("x")
        .await
        .expect_err("node rejects the identifier");

    assert!(matches!(&error, RpcClientError::RemoteError { .. }));
    assert_eq!(error.kind(), ErrorKind::Permanent);
    mock.assert_async().await;
}

#[cfg(feature = "test-remote")]
mod live {
    use omni_test_utils::env::tron_shasta_url;

    use super::*;

    #[tokio::test]
    async fn get_block_by_num_on_shasta() {
        let block = client(&tron_shasta_url())
            .get_block("1000000")
            .await
            .expect("shasta node serves the block");

        assert!(block.block_header.raw_data.number > 0);
    }

    #[tokio::test]
    async fn get_now_block_on_shasta() {
        let block = client(&tron_shasta_url())
            .get_now_block()
            .await
            .expect("shasta node serves the head block");

        assert!(block.block_header.raw_data.number > 0);
    }

    #[tokio::test]
    async fn get_chain_parameters_on_shasta() {
        let parameters = client(&tron_shasta_url())
            .get_chain_parameters()
            .await
            .expect("shasta node serves chain parameters");

        assert!(!parameters.chain_parameter.is_empty());
    }
}
