//! Concurrent load against a single service instance.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use secure_greeting::greeting::GreetingResponse;

mod common;

#[tokio::test]
async fn test_concurrent_requests_get_unique_ids() {
    let server = common::start_server().await;

    let concurrency = 20;
    let requests_per_task = 25;
    let total_requests = concurrency * requests_per_task;

    let client = common::client();
    let start = Instant::now();
    let mut handles = Vec::new();

    for task in 0..concurrency {
        let client = client.clone();
        let greeting_url = server.url("/greeting?name=Load");
        let number_url = server.url(&format!("/number/{}", task % 7));
        handles.push(tokio::spawn(async move {
            let mut ids = Vec::with_capacity(requests_per_task);
            for i in 0..requests_per_task {
                let url = if i % 2 == 0 { &greeting_url } else { &number_url };
                let res = client.get(url).send().await.expect("request failed");
                assert_eq!(res.status(), 200);
                let body: GreetingResponse = res.json().await.unwrap();
                ids.push(body.id);
            }
            ids
        }));
    }

    let mut ids = Vec::with_capacity(total_requests);
    for handle in handles {
        ids.extend(handle.await.unwrap());
    }
    let elapsed = start.elapsed();

    let unique: HashSet<u64> = ids.iter().copied().collect();
    assert_eq!(unique.len(), total_requests, "duplicate ids under load");
    assert_eq!(unique.iter().copied().max(), Some(total_requests as u64));
    assert!(elapsed < Duration::from_secs(30), "load test took {:?}", elapsed);

    server.shutdown.trigger();
}
