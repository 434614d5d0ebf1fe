//! Catalog client and fetch task against a mock endpoint.

mod common;

use catalog_table::catalog::{CatalogClient, FetchError, ProductId};
use catalog_table::config::CatalogConfig;
use catalog_table::ui::events::AppEvent;
use catalog_table::ui::runtime::spawn_catalog_fetch;
use common::mock_catalog::{MockCatalog, MockResponse};
use common::*;
use std::sync::mpsc;
use std::time::Duration;

fn config_for(url: String) -> CatalogConfig {
    CatalogConfig {
        url,
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    }
}

#[tokio::test]
async fn fetches_and_decodes_products() {
    let mock = MockCatalog::serve(MockResponse::json(&catalog_json(3))).await;

    let client = CatalogClient::new(&config_for(mock.url())).unwrap();
    let products = client.fetch_catalog().await.unwrap();

    assert_eq!(products.len(), 3);
    assert_eq!(products[0].id, ProductId::Number(1));
    assert_eq!(products[2].title, "Product 3");
    assert_eq!(products[1].category_name(), Some("Misc"));
    assert_eq!(mock.requested_paths().await, vec!["/api/v1/products"]);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let mock = MockCatalog::serve(MockResponse::status(500)).await;

    let client = CatalogClient::new(&config_for(mock.url())).unwrap();
    let err = client.fetch_catalog().await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500 }));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let mock = MockCatalog::serve(MockResponse::json(r#"{"products": []}"#)).await;

    let client = CatalogClient::new(&config_for(mock.url())).unwrap();
    let err = client.fetch_catalog().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }));
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let mock =
        MockCatalog::serve(MockResponse::json("[]").with_delay(Duration::from_secs(3))).await;

    let config = CatalogConfig {
        timeout_seconds: 1,
        ..config_for(mock.url())
    };
    let client = CatalogClient::new(&config).unwrap();
    let err = client.fetch_catalog().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client =
        CatalogClient::new(&config_for(format!("http://127.0.0.1:{}/products", port))).unwrap();
    let err = client.fetch_catalog().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn fetch_task_delivers_result_as_event() {
    let mock = MockCatalog::serve(MockResponse::json(&catalog_json(25))).await;

    let (tx, rx) = mpsc::channel();
    let handle = tokio::runtime::Handle::current();
    let task = spawn_catalog_fetch(&handle, config_for(mock.url()), tx);
    task.await.unwrap();

    let event = rx.recv_timeout(Duration::from_secs(1)).unwrap();
    let AppEvent::CatalogLoaded(result) = event else {
        panic!("Expected CatalogLoaded event");
    };

    let mut app = make_app();
    app.on_catalog_loaded(result);
    assert_eq!(app.page_info().to_string(), "Page 1 of 3");
    assert_eq!(
        app.table().current_rows()[0].images,
        vec!["[\"https://img.example/1.png\"]".to_string()]
    );
}
