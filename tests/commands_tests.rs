// Copyright (c) 2025 Centavo Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use axum::routing::get;
use axum::{Json, Router};
use centavo::api::ApiClient;
use centavo::session::MemorySessionStore;
use centavo::{cli, commands};
use serde_json::json;

async fn spawn(app: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    ApiClient::new(
        format!("http://{}", addr),
        Box::new(MemorySessionStore::new()),
    )
    .unwrap()
}

fn one_debt_app() -> Router {
    Router::new().route(
        "/debts",
        get(|| async {
            Json(json!({
                "debts": [{
                    "id": "d1",
                    "name": "car loan",
                    "total": 10000,
                    "remaining": 500,
                    "dueDate": "2025-12-01T00:00:00.000Z",
                    "userId": "u1",
                    "createdAt": "2025-01-01T00:00:00.000Z",
                    "updatedAt": "2025-01-01T00:00:00.000Z"
                }],
                "pagination": { "page": 1 }
            }))
        }),
    )
}

#[tokio::test]
async fn payment_above_remaining_rejected_before_posting() {
    // No POST /payments route: reaching it would fail the test loudly.
    let client = spawn(one_debt_app()).await;
    let matches = cli::build_cli().get_matches_from([
        "centavo", "payment", "add", "--debt", "d1", "--amount", "800", "--date", "2025-08-15",
    ]);
    let Some(("payment", sub)) = matches.subcommand() else {
        panic!("no payment subcommand");
    };
    let err = commands::payments::handle(&client, sub).await.unwrap_err();
    assert!(err.to_string().contains("exceeds the remaining"));
}

#[tokio::test]
async fn export_expenses_writes_csv() {
    let app = Router::new().route(
        "/expenses",
        get(|| async {
            Json(json!({
                "expenses": [{
                    "id": "e1",
                    "category": "Transport",
                    "amount": 3200,
                    "date": "2025-08-10T00:00:00.000Z",
                    "userId": "u1",
                    "createdAt": "2025-08-10T00:00:00.000Z",
                    "updatedAt": "2025-08-10T00:00:00.000Z"
                }],
                "pagination": { "page": 1 }
            }))
        }),
    );
    let client = spawn(app).await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("expenses.csv");
    let matches = cli::build_cli().get_matches_from([
        "centavo",
        "export",
        "expenses",
        "--out",
        out.to_str().unwrap(),
    ]);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    commands::exporter::handle(&client, sub).await.unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("id,date,category,amount,description"));
    assert_eq!(lines.next(), Some("e1,2025-08-10,Transport,3200,"));
}
