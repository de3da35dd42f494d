// Copyright (c) 2025 Centavo Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use crate::models::{ExpensePatch, NewExpense};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;

/// Categories offered by the expense form. The server itself accepts any
/// string; this bound lives at the input layer only.
pub const CATEGORIES: [&str; 9] = [
    "Food",
    "Transport",
    "Entertainment",
    "Utilities",
    "Health",
    "Education",
    "Clothing",
    "Home",
    "Other",
];

pub async fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(client, sub).await?,
        Some(("list", sub)) => list(client, sub).await?,
        Some(("edit", sub)) => edit(client, sub).await?,
        Some(("delete", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            client.delete_expense(id).await?;
            println!("Deleted expense {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn check_category(cat: &str) -> Result<()> {
    if !CATEGORIES.contains(&cat) {
        anyhow::bail!(
            "Unknown category '{}' (expected one of: {})",
            cat,
            CATEGORIES.join(", ")
        );
    }
    Ok(())
}

async fn add(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let category = sub.get_one::<String>("category").unwrap();
    check_category(category)?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    if amount.is_sign_negative() {
        anyhow::bail!("Expense amount must not be negative");
    }
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let new = NewExpense {
        category: category.clone(),
        amount,
        date,
        description: sub.get_one::<String>("description").cloned(),
    };
    let expense = client.create_expense(&new).await?;
    println!(
        "Recorded {} on {} ({})",
        fmt_money(&expense.amount),
        date,
        expense.category
    );
    Ok(())
}

async fn list(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut expenses = client.list_expenses().await?;
    if let Some(cat) = sub.get_one::<String>("category") {
        expenses.retain(|e| &e.category == cat);
    }
    expenses.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        expenses.truncate(*limit);
    }
    if maybe_print_json(json_flag, jsonl_flag, &expenses)? {
        return Ok(());
    }
    let total: Decimal = expenses.iter().map(|e| e.amount).sum();
    let rows: Vec<Vec<String>> = expenses
        .iter()
        .map(|e| {
            vec![
                e.id.clone(),
                e.date.date_naive().to_string(),
                e.category.clone(),
                e.description.clone().unwrap_or_default(),
                fmt_money(&e.amount),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Date", "Category", "Description", "Amount"], rows)
    );
    println!("Total: {}", fmt_money(&total));
    Ok(())
}

async fn edit(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut patch = ExpensePatch::default();
    if let Some(cat) = sub.get_one::<String>("category") {
        check_category(cat)?;
        patch.category = Some(cat.clone());
    }
    if let Some(a) = sub.get_one::<String>("amount") {
        let amount = parse_decimal(a)?;
        if amount.is_sign_negative() {
            anyhow::bail!("Expense amount must not be negative");
        }
        patch.amount = Some(amount);
    }
    if let Some(d) = sub.get_one::<String>("date") {
        patch.date = Some(parse_date(d)?);
    }
    patch.description = sub.get_one::<String>("description").cloned();
    if patch.category.is_none()
        && patch.amount.is_none()
        && patch.date.is_none()
        && patch.description.is_none()
    {
        anyhow::bail!("Nothing to update; pass at least one field");
    }
    let expense = client.update_expense(id, &patch).await?;
    println!("Updated expense {}", expense.id);
    Ok(())
}
