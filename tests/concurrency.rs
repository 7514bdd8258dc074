mod common;

use axum::http::StatusCode;
use common::{get, post, test_app};
use futures::future::join_all;
use pokedex_api::Pokemon;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Barrier;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_with_distinct_ids_all_succeed() {
    let app = test_app().await;
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (1..=8)
        .map(|id| {
            let (router, barrier) = (app.router.clone(), Arc::clone(&barrier));
            tokio::spawn(async move {
                barrier.wait().await;
                post(&router, json!({"id": id, "number": id, "name": format!("mon-{}", id), "sprite": ""}))
                    .await
                    .status
            })
        })
        .collect();

    for status in join_all(handles).await {
        assert_eq!(status.unwrap(), StatusCode::OK);
    }

    for id in 1..=8 {
        let resp = get(&app.router, &format!("/pokemon/{}", id)).await;
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.pokemon(), Pokemon::new(id, id, format!("mon-{}", id), ""));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_with_the_same_id_yield_one_winner() {
    for round in 0..5 {
        let app = test_app().await;
        let barrier = Arc::new(Barrier::new(2));

        let handles: Vec<_> = ["Pikachu", "Raichu"]
            .into_iter()
            .map(|name| {
                let (router, barrier) = (app.router.clone(), Arc::clone(&barrier));
                tokio::spawn(async move {
                    barrier.wait().await;
                    let resp = post(&router, json!({"id": 1, "number": 25, "name": name, "sprite": ""})).await;
                    let kind = (resp.status != StatusCode::OK).then(|| resp.error_kind());
                    (name, resp.status, kind)
                })
            })
            .collect();

        let results: Vec<_> = join_all(handles).await.into_iter().map(|r| r.unwrap()).collect();
        let winners: Vec<_> = results.iter().filter(|(_, s, _)| *s == StatusCode::OK).collect();
        let conflicts: Vec<_> = results
            .iter()
            .filter(|(_, s, k)| *s == StatusCode::BAD_REQUEST && k.as_deref() == Some("conflict"))
            .collect();
        assert_eq!(winners.len(), 1, "round {}: {:?}", round, results);
        assert_eq!(conflicts.len(), 1, "round {}: {:?}", round, results);

        let stored = get(&app.router, "/pokemon/1").await.pokemon();
        assert_eq!(stored.name, winners[0].0);
        assert_eq!(get(&app.router, "/pokemon").await.json().as_array().unwrap().len(), 1);
    }
}
