//! Integration tests for the remote load use case

use crypto_feed::api::{HttpClient, HttpClientError, LoadCryptoFeedRemoteUseCase};
use crypto_feed::domain::{LoadCryptoFeedError, LoadCryptoFeedResult, LoadCryptoFeedUseCase};
use futures_util::stream::{self, BoxStream, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const PAYLOAD: &str = r#"{"Data": [
    {"CoinInfo": {"Id": "1182", "Name": "BTC", "FullName": "Bitcoin", "ImageUrl": "/media/btc.png"},
     "RAW": {"USD": {"PRICE": 29000.5, "CHANGEPCT24HOUR": 1.25}}},
    {"CoinInfo": {"Id": "7605", "Name": "ETH", "FullName": "Ethereum", "ImageUrl": "/media/eth.png"},
     "RAW": {"USD": {"PRICE": 1850.25, "CHANGEPCT24HOUR": -0.5}}},
    {"CoinInfo": {"Id": "5031", "Name": "XRP", "FullName": "XRP", "ImageUrl": "/media/xrp.png"},
     "RAW": {"USD": {"PRICE": 0.5, "CHANGEPCT24HOUR": 3}}}
]}"#;

struct HttpClientSpy {
    calls: AtomicUsize,
    received: Option<Result<String, HttpClientError>>,
}

impl HttpClientSpy {
    fn new(received: Option<Result<String, HttpClientError>>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            received,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HttpClient for HttpClientSpy {
    fn get(&self) -> BoxStream<'static, Result<String, HttpClientError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        stream::iter(self.received.clone()).boxed()
    }
}

fn make_sut(
    received: Option<Result<String, HttpClientError>>,
) -> (LoadCryptoFeedRemoteUseCase, Arc<HttpClientSpy>) {
    let client = HttpClientSpy::new(received);
    let sut = LoadCryptoFeedRemoteUseCase::new(client.clone(), "USD");
    (sut, client)
}

/// Feed a client failure and assert the single classified result
async fn expect(received: HttpClientError, expected: LoadCryptoFeedError) {
    let (sut, client) = make_sut(Some(Err(received)));

    let mut stream = sut.load();
    assert_eq!(
        stream.next().await,
        Some(LoadCryptoFeedResult::Error(expected))
    );
    assert_eq!(stream.next().await, None);
    assert_eq!(client.calls(), 1);
}

#[test]
fn test_init_does_not_request_data() {
    let (_sut, client) = make_sut(None);
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_load_requests_data() {
    let (sut, client) = make_sut(None);

    let results: Vec<_> = sut.load().collect().await;

    assert!(results.is_empty());
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn test_load_twice_requests_data_twice() {
    let (sut, client) = make_sut(None);

    let first: Vec<_> = sut.load().collect().await;
    let second: Vec<_> = sut.load().collect().await;

    assert!(first.is_empty());
    assert!(second.is_empty());
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn test_load_delivers_connectivity_error_on_client_error() {
    expect(HttpClientError::Connectivity, LoadCryptoFeedError::Connectivity).await;
}

#[tokio::test]
async fn test_load_delivers_invalid_data_error() {
    expect(HttpClientError::InvalidData, LoadCryptoFeedError::InvalidData).await;
}

#[tokio::test]
async fn test_load_delivers_bad_request_error() {
    expect(HttpClientError::BadRequest, LoadCryptoFeedError::BadRequest).await;
}

#[tokio::test]
async fn test_load_delivers_internal_server_error() {
    expect(
        HttpClientError::InternalServerError,
        LoadCryptoFeedError::InternalServerError,
    )
    .await;
}

#[tokio::test]
async fn test_load_delivers_items_in_client_order() {
    let (sut, client) = make_sut(Some(Ok(PAYLOAD.to_string())));

    let mut stream = sut.load();
    let items = match stream.next().await {
        Some(LoadCryptoFeedResult::Success(items)) => items,
        other => panic!("Expected success, got {:?}", other),
    };
    assert_eq!(stream.next().await, None);

    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["BTC", "ETH", "XRP"]);
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn test_concurrent_loads_are_independent() {
    let (sut, client) = make_sut(Some(Ok(PAYLOAD.to_string())));

    let (a, b) = tokio::join!(
        sut.load().collect::<Vec<_>>(),
        sut.load().collect::<Vec<_>>()
    );

    assert_eq!(a.len(), 1);
    assert_eq!(a, b);
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn test_load_through_trait_object() {
    let (sut, _client) = make_sut(Some(Err(HttpClientError::BadRequest)));
    let use_case: Arc<dyn LoadCryptoFeedUseCase> = Arc::new(sut);

    let results: Vec<_> = tokio::spawn(use_case.load().collect::<Vec<_>>())
        .await
        .unwrap();

    assert_eq!(
        results,
        vec![LoadCryptoFeedResult::Error(LoadCryptoFeedError::BadRequest)]
    );
}
