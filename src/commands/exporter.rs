// Copyright (c) 2025 Centavo Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use anyhow::Result;
use serde::Serialize;

pub async fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => {
            let expenses = client.list_expenses().await?;
            let rows: Vec<Vec<String>> = expenses
                .iter()
                .map(|e| {
                    vec![
                        e.id.clone(),
                        e.date.date_naive().to_string(),
                        e.category.clone(),
                        e.amount.to_string(),
                        e.description.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            write_out(sub, &["id", "date", "category", "amount", "description"], rows, &expenses)
        }
        Some(("debts", sub)) => {
            let debts = client.list_debts().await?;
            let rows: Vec<Vec<String>> = debts
                .iter()
                .map(|d| {
                    vec![
                        d.id.clone(),
                        d.name.clone().unwrap_or_default(),
                        d.total.to_string(),
                        d.remaining.to_string(),
                        d.due_date.date_naive().to_string(),
                    ]
                })
                .collect();
            write_out(sub, &["id", "name", "total", "remaining", "due_date"], rows, &debts)
        }
        Some(("payments", sub)) => {
            let payments = client.list_payments().await?;
            let rows: Vec<Vec<String>> = payments
                .iter()
                .map(|p| {
                    vec![
                        p.id.clone(),
                        p.debt_id.clone(),
                        p.date.date_naive().to_string(),
                        p.amount.to_string(),
                    ]
                })
                .collect();
            write_out(sub, &["id", "debt_id", "date", "amount"], rows, &payments)
        }
        _ => Ok(()),
    }
}

fn write_out<T: Serialize>(
    sub: &clap::ArgMatches,
    headers: &[&str],
    rows: Vec<Vec<String>>,
    records: &[T],
) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(headers)?;
            for row in rows {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(records)?)?;
        }
        _ => {
            anyhow::bail!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported {} records to {}", records.len(), out);
    Ok(())
}
