//! Live-socket and concurrency tests for the landing gate.

use std::time::{Duration, Instant};

use landing_gate::lifecycle::Shutdown;

mod common;

use common::{client, start_gate, versions, FixedPage, PAGE_BODY};

#[tokio::test]
async fn test_live_redirect_and_page() {
    let shutdown = Shutdown::new();
    let renderer = FixedPage::default();
    let addr = start_gate(versions(&["1.2.3", "1.1.0"]), renderer.clone(), &shutdown).await;
    let client = client();

    let res = client
        .get(format!("http://{}/", addr))
        .header("accept", "application/json")
        .send()
        .await
        .expect("Gate unreachable");
    assert_eq!(res.status(), 307);
    assert_eq!(
        res.headers().get("location").unwrap(),
        "https://deno.land/x/fresh@v1.2.3/init.ts"
    );

    let res = client
        .get(format!("http://{}/", addr))
        .header("accept", "text/html")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), PAGE_BODY);
    assert_eq!(renderer.calls(), 1);

    shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_mixed_clients() {
    let shutdown = Shutdown::new();
    let renderer = FixedPage::default();
    let addr = start_gate(versions(&["2.0.0", "1.0.0"]), renderer.clone(), &shutdown).await;

    let concurrency: usize = 20;
    let requests_per_task = 25;
    let client = client();
    let start = Instant::now();

    let mut handles = Vec::new();
    for task in 0..concurrency {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let mut redirects: usize = 0;
            for i in 0..requests_per_task {
                let browser = (task + i) % 2 == 0;
                let accept = if browser { "text/html,*/*;q=0.8" } else { "*/*" };
                let res = client
                    .get(format!("http://{}/", addr))
                    .header("accept", accept)
                    .send()
                    .await
                    .unwrap();
                if browser {
                    assert_eq!(res.status(), 200);
                } else {
                    assert_eq!(res.status(), 307);
                    assert_eq!(
                        res.headers().get("location").unwrap(),
                        "https://deno.land/x/fresh@v2.0.0/init.ts"
                    );
                    redirects += 1;
                }
            }
            redirects
        }));
    }

    let mut redirects: usize = 0;
    for handle in handles {
        redirects += handle.await.unwrap();
    }

    let total = concurrency * requests_per_task;
    assert_eq!(redirects + renderer.calls(), total);
    println!("{} requests in {:?}", total, start.elapsed());

    shutdown.trigger();
}

#[tokio::test]
async fn test_shutdown_stops_listener() {
    let shutdown = Shutdown::new();
    let addr = start_gate(versions(&["1.0.0"]), FixedPage::default(), &shutdown).await;

    shutdown.trigger();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let res = client().get(format!("http://{}/health", addr)).send().await;
    assert!(res.is_err(), "listener should be closed after shutdown");
}
