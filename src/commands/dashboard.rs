// Copyright (c) 2025 Centavo Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use crate::stats::{
    paid_percent, recent_expenses, remaining_budget, total_expenses, total_outstanding, total_paid,
    upcoming_debts,
};
use crate::utils::{fmt_money, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;

pub async fn handle(client: &ApiClient) -> Result<()> {
    // The three collections are independent; fetch them concurrently and
    // join before computing anything.
    let (expenses, debts, payments) = tokio::try_join!(
        client.list_expenses(),
        client.list_debts(),
        client.list_payments()
    )?;

    let salary = client
        .session()?
        .map(|s| s.user.salary)
        .unwrap_or(Decimal::ZERO);
    let spent = total_expenses(&expenses);

    let cards = vec![
        vec!["Expenses".to_string(), fmt_money(&spent)],
        vec![
            "Outstanding debt".to_string(),
            fmt_money(&total_outstanding(&debts)),
        ],
        vec!["Total paid".to_string(), fmt_money(&total_paid(&payments))],
        vec!["Monthly budget".to_string(), fmt_money(&salary)],
        vec![
            "Remaining budget".to_string(),
            fmt_money(&remaining_budget(salary, &expenses)),
        ],
    ];
    println!("{}", pretty_table(&["", "Amount"], cards));

    let recent = recent_expenses(&expenses, 5);
    if recent.is_empty() {
        println!("No expenses recorded");
    } else {
        let rows: Vec<Vec<String>> = recent
            .iter()
            .map(|e| {
                vec![
                    e.date.date_naive().to_string(),
                    e.category.clone(),
                    e.description.clone().unwrap_or_default(),
                    fmt_money(&e.amount),
                ]
            })
            .collect();
        println!("Recent expenses:");
        println!(
            "{}",
            pretty_table(&["Date", "Category", "Description", "Amount"], rows)
        );
    }

    let upcoming = upcoming_debts(&debts, 3);
    if upcoming.is_empty() {
        println!("No open debts");
    } else {
        let rows: Vec<Vec<String>> = upcoming
            .iter()
            .map(|d| {
                vec![
                    d.name.clone().unwrap_or_else(|| d.id.clone()),
                    d.due_date.date_naive().to_string(),
                    fmt_money(&d.remaining),
                    format!("{:.0}% paid", paid_percent(d)),
                ]
            })
            .collect();
        println!("Debts due soonest:");
        println!(
            "{}",
            pretty_table(&["Debt", "Due", "Remaining", "Progress"], rows)
        );
    }
    Ok(())
}
