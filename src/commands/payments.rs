// Copyright (c) 2025 Centavo Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use crate::models::{NewPayment, PaymentPatch};
use crate::stats::total_paid;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;

pub async fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(client, sub).await?,
        Some(("list", sub)) => list(client, sub).await?,
        Some(("edit", sub)) => edit(client, sub).await?,
        Some(("delete", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            client.delete_payment(id).await?;
            println!("Deleted payment {}", id);
        }
        _ => {}
    }
    Ok(())
}

async fn add(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let debt_id = sub.get_one::<String>("debt").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    if amount <= Decimal::ZERO {
        anyhow::bail!("Payment amount must be positive");
    }
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;

    // Input-layer cap, same guard the payment form applies: never offer to
    // pay more than the debt still carries. The server owns the actual
    // reduction of the remainder.
    let debts = client.list_debts().await?;
    if let Some(debt) = debts.iter().find(|d| &d.id == debt_id) {
        if amount > debt.remaining {
            anyhow::bail!(
                "Payment of {} exceeds the remaining {} on '{}'",
                fmt_money(&amount),
                fmt_money(&debt.remaining),
                debt.name.as_deref().unwrap_or(&debt.id)
            );
        }
    }

    let new = NewPayment {
        debt_id: debt_id.clone(),
        amount,
        date,
    };
    let payment = client.create_payment(&new).await?;
    println!(
        "Paid {} toward debt {} on {}",
        fmt_money(&payment.amount),
        payment.debt_id,
        date
    );
    Ok(())
}

async fn list(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (payments, debts) = tokio::try_join!(client.list_payments(), client.list_debts())?;
    if maybe_print_json(json_flag, jsonl_flag, &payments)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = payments
        .iter()
        .map(|p| {
            let debt = debts
                .iter()
                .find(|d| d.id == p.debt_id)
                .and_then(|d| d.name.clone())
                .unwrap_or_else(|| p.debt_id.clone());
            vec![
                p.id.clone(),
                p.date.date_naive().to_string(),
                debt,
                fmt_money(&p.amount),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Id", "Date", "Debt", "Amount"], rows));
    println!("Total paid: {}", fmt_money(&total_paid(&payments)));
    Ok(())
}

async fn edit(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut patch = PaymentPatch {
        debt_id: sub.get_one::<String>("debt").cloned(),
        ..PaymentPatch::default()
    };
    if let Some(a) = sub.get_one::<String>("amount") {
        let amount = parse_decimal(a)?;
        if amount <= Decimal::ZERO {
            anyhow::bail!("Payment amount must be positive");
        }
        patch.amount = Some(amount);
    }
    if let Some(d) = sub.get_one::<String>("date") {
        patch.date = Some(parse_date(d)?);
    }
    if patch.debt_id.is_none() && patch.amount.is_none() && patch.date.is_none() {
        anyhow::bail!("Nothing to update; pass at least one field");
    }
    if let (Some(debt_id), Some(amount)) = (&patch.debt_id, patch.amount) {
        let debts = client.list_debts().await?;
        if let Some(debt) = debts.iter().find(|d| &d.id == debt_id) {
            if amount > debt.remaining {
                anyhow::bail!(
                    "Payment of {} exceeds the remaining {} on '{}'",
                    fmt_money(&amount),
                    fmt_money(&debt.remaining),
                    debt.name.as_deref().unwrap_or(&debt.id)
                );
            }
        }
    }
    let payment = client.update_payment(id, &patch).await?;
    println!("Updated payment {}", payment.id);
    Ok(())
}
