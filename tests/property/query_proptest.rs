//! Property-based tests for post listing queries
//!
//! Any search term must reach the server intact after URL encoding

use easyblog::client::{BlogApi, MemoryTokenStore};
use easyblog::shared::{ClientConfig, Page, PostQuery};
use proptest::prelude::*;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_search_term_survives_encoding(
        q in "[^\u{0}]{1,40}",
        page in 0u32..100,
        size in 1u32..100,
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let received = runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/api/posts"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0, "items": []})))
                .mount(&server)
                .await;

            let config = ClientConfig::builder()
                .base_url(format!("{}/api", server.uri()))
                .build()
                .unwrap();
            let api = BlogApi::from_config(config, Arc::new(MemoryTokenStore::new()));
            let query = PostQuery::default().page(Page::new(page, size)).search(q.clone());
            api.fetch_posts(&query).await.unwrap();

            let requests = server.received_requests().await.unwrap();
            requests[0]
                .url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect::<Vec<_>>()
        });

        prop_assert_eq!(
            received,
            vec![
                ("page".to_string(), page.to_string()),
                ("size".to_string(), size.to_string()),
                ("q".to_string(), q),
            ]
        );
    }
}
