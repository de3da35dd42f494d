// Copyright (c) 2025 Centavo Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centavo::api::ApiClient;
use centavo::cli;
use centavo::commands;
use centavo::models::UserSummary;
use centavo::session::MemorySessionStore;
use chrono::Utc;
use rust_decimal::Decimal;

// try_get_matches_from keeps a parse failure inside the test instead of
// letting clap exit the process.
fn parse(args: &[&str]) -> clap::ArgMatches {
    cli::build_cli().try_get_matches_from(args).unwrap()
}

#[test]
fn expense_list_limit_parses_as_usize() {
    let matches = parse(&["centavo", "expense", "list", "--limit", "2", "--json"]);
    let Some(("expense", exp_m)) = matches.subcommand() else {
        panic!("no expense subcommand");
    };
    let Some(("list", list_m)) = exp_m.subcommand() else {
        panic!("no list subcommand");
    };
    assert_eq!(list_m.get_one::<usize>("limit"), Some(&2));
    assert!(list_m.get_flag("json"));
    assert!(!list_m.get_flag("jsonl"));
}

#[test]
fn payment_add_requires_debt_amount_and_date() {
    let err = cli::build_cli()
        .try_get_matches_from(["centavo", "payment", "add", "--amount", "100"])
        .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn export_format_defaults_to_csv() {
    let matches = parse(&[
        "centavo", "export", "expenses", "--out", "/tmp/e.csv",
    ]);
    let Some(("export", ex_m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    let Some(("expenses", sub)) = ex_m.subcommand() else {
        panic!("no expenses subcommand");
    };
    assert_eq!(sub.get_one::<String>("format").map(String::as_str), Some("csv"));
}

// Form-layer validation rejects bad input before any request goes out; an
// unroutable base URL proves no network call was attempted.
fn offline_client() -> ApiClient {
    ApiClient::new("http://127.0.0.1:9", Box::new(MemorySessionStore::new())).unwrap()
}

// Money options take hyphen-leading values; the parser must hand them
// through so the form-layer guard gets to reject them.
#[test]
fn hyphen_leading_money_values_reach_the_forms() {
    let matches = parse(&[
        "centavo", "expense", "add", "--category", "Food", "--amount", "-50", "--date",
        "2025-08-15",
    ]);
    let Some(("expense", exp_m)) = matches.subcommand() else {
        panic!("no expense subcommand");
    };
    let Some(("add", add_m)) = exp_m.subcommand() else {
        panic!("no add subcommand");
    };
    assert_eq!(add_m.get_one::<String>("amount").map(String::as_str), Some("-50"));

    parse(&[
        "centavo",
        "register",
        "--email",
        "a@b.c",
        "--password",
        "pw",
        "--salary",
        "-1",
    ]);
    parse(&[
        "centavo",
        "debt",
        "add",
        "--total",
        "-1000",
        "--remaining",
        "-500",
        "--due-date",
        "2025-12-01",
    ]);
    parse(&[
        "centavo", "payment", "add", "--debt", "d1", "--amount", "-25", "--date", "2025-08-15",
    ]);
    parse(&["centavo", "profile", "set", "--salary", "-5"]);
}

#[tokio::test]
async fn negative_expense_amount_rejected_locally() {
    let client = offline_client();
    let matches = parse(&[
        "centavo", "expense", "add", "--category", "Food", "--amount", "-50", "--date",
        "2025-08-15",
    ]);
    let Some(("expense", sub)) = matches.subcommand() else {
        panic!("no expense subcommand");
    };
    let err = commands::expenses::handle(&client, sub).await.unwrap_err();
    assert!(err.to_string().contains("must not be negative"));
}

#[tokio::test]
async fn negative_salary_rejected_locally() {
    let client = offline_client();
    let matches = parse(&[
        "centavo",
        "register",
        "--email",
        "a@b.c",
        "--password",
        "pw",
        "--salary",
        "-350000",
    ]);
    let Some(("register", sub)) = matches.subcommand() else {
        panic!("no register subcommand");
    };
    let err = commands::auth::register(&client, sub).await.unwrap_err();
    assert!(err.to_string().contains("must not be negative"));
}

#[tokio::test]
async fn unknown_expense_category_rejected_locally() {
    let client = offline_client();
    let matches = parse(&[
        "centavo", "expense", "add", "--category", "Yachts", "--amount", "50", "--date",
        "2025-08-15",
    ]);
    let Some(("expense", sub)) = matches.subcommand() else {
        panic!("no expense subcommand");
    };
    let err = commands::expenses::handle(&client, sub).await.unwrap_err();
    assert!(err.to_string().contains("Unknown category"));
}

#[tokio::test]
async fn debt_remaining_above_total_rejected_locally() {
    let client = offline_client();
    let matches = parse(&[
        "centavo",
        "debt",
        "add",
        "--total",
        "1000",
        "--remaining",
        "2000",
        "--due-date",
        "2025-12-01",
    ]);
    let Some(("debt", sub)) = matches.subcommand() else {
        panic!("no debt subcommand");
    };
    let err = commands::debts::handle(&client, sub).await.unwrap_err();
    assert!(err.to_string().contains("between 0 and the total"));
}

#[tokio::test]
async fn zero_payment_amount_rejected_locally() {
    let client = offline_client();
    let matches = parse(&[
        "centavo", "payment", "add", "--debt", "d1", "--amount", "0", "--date", "2025-08-15",
    ]);
    let Some(("payment", sub)) = matches.subcommand() else {
        panic!("no payment subcommand");
    };
    let err = commands::payments::handle(&client, sub).await.unwrap_err();
    assert!(err.to_string().contains("must be positive"));
}

#[tokio::test]
async fn bad_date_rejected_locally() {
    let client = offline_client();
    let matches = parse(&[
        "centavo", "expense", "add", "--category", "Food", "--amount", "50", "--date",
        "15-08-2025",
    ]);
    let Some(("expense", sub)) = matches.subcommand() else {
        panic!("no expense subcommand");
    };
    let err = commands::expenses::handle(&client, sub).await.unwrap_err();
    assert!(err.to_string().contains("expected YYYY-MM-DD"));
}

fn user(first: Option<&str>, last: Option<&str>) -> UserSummary {
    UserSummary {
        id: "u1".into(),
        email: "ana@example.com".into(),
        first_name: first.map(String::from),
        last_name: last.map(String::from),
        salary: Decimal::ZERO,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn display_name_uses_whichever_parts_exist() {
    let full = commands::auth::display_name(&user(Some("Ana"), Some("Reyes")));
    assert_eq!(full, "Ana Reyes <ana@example.com>");

    let first_only = commands::auth::display_name(&user(Some("Ana"), None));
    assert_eq!(first_only, "Ana <ana@example.com>");

    let last_only = commands::auth::display_name(&user(None, Some("Reyes")));
    assert_eq!(last_only, "Reyes <ana@example.com>");

    let neither = commands::auth::display_name(&user(None, None));
    assert_eq!(neither, "ana@example.com");
}
