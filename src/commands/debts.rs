// Copyright (c) 2025 Centavo Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use crate::models::{DebtPatch, NewDebt};
use crate::stats::{days_until_due, overdue_count, paid_percent, total_outstanding};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;

pub async fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(client, sub).await?,
        Some(("list", sub)) => list(client, sub).await?,
        Some(("edit", sub)) => edit(client, sub).await?,
        Some(("delete", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            client.delete_debt(id).await?;
            println!("Deleted debt {}", id);
        }
        _ => {}
    }
    Ok(())
}

async fn add(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let total = parse_decimal(sub.get_one::<String>("total").unwrap())?;
    if total <= Decimal::ZERO {
        anyhow::bail!("Debt total must be positive");
    }
    let remaining = match sub.get_one::<String>("remaining") {
        Some(s) => parse_decimal(s)?,
        None => total,
    };
    if remaining.is_sign_negative() || remaining > total {
        anyhow::bail!("Remaining must be between 0 and the total");
    }
    let due_date = parse_date(sub.get_one::<String>("due-date").unwrap())?;
    let new = NewDebt {
        name: sub.get_one::<String>("name").cloned(),
        total,
        remaining,
        due_date,
    };
    let debt = client.create_debt(&new).await?;
    println!(
        "Added debt '{}': {} due {}",
        debt.name.as_deref().unwrap_or(&debt.id),
        fmt_money(&debt.total),
        due_date
    );
    Ok(())
}

async fn list(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let debts = client.list_debts().await?;
    if maybe_print_json(json_flag, jsonl_flag, &debts)? {
        return Ok(());
    }
    let now = Utc::now();
    let rows: Vec<Vec<String>> = debts
        .iter()
        .map(|d| {
            vec![
                d.id.clone(),
                d.name.clone().unwrap_or_default(),
                fmt_money(&d.total),
                fmt_money(&d.remaining),
                d.due_date.date_naive().to_string(),
                format!("{:.0}%", paid_percent(d)),
                days_until_due(d, now).to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Name", "Total", "Remaining", "Due", "Paid", "Days left"],
            rows
        )
    );
    println!(
        "Outstanding: {} ({} overdue)",
        fmt_money(&total_outstanding(&debts)),
        overdue_count(&debts, now)
    );
    Ok(())
}

async fn edit(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut patch = DebtPatch {
        name: sub.get_one::<String>("name").cloned(),
        ..DebtPatch::default()
    };
    if let Some(t) = sub.get_one::<String>("total") {
        let total = parse_decimal(t)?;
        if total <= Decimal::ZERO {
            anyhow::bail!("Debt total must be positive");
        }
        patch.total = Some(total);
    }
    if let Some(r) = sub.get_one::<String>("remaining") {
        let remaining = parse_decimal(r)?;
        if remaining.is_sign_negative() {
            anyhow::bail!("Remaining must not be negative");
        }
        patch.remaining = Some(remaining);
    }
    // remaining <= total can only be checked locally when both sides are
    // known; the pair rule otherwise stays with the server.
    if let (Some(t), Some(r)) = (patch.total, patch.remaining) {
        if r > t {
            anyhow::bail!("Remaining must not exceed the total");
        }
    }
    if let Some(d) = sub.get_one::<String>("due-date") {
        patch.due_date = Some(parse_date(d)?);
    }
    if patch.name.is_none()
        && patch.total.is_none()
        && patch.remaining.is_none()
        && patch.due_date.is_none()
    {
        anyhow::bail!("Nothing to update; pass at least one field");
    }
    let debt = client.update_debt(id, &patch).await?;
    println!("Updated debt {}", debt.id);
    Ok(())
}
