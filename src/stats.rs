// Copyright (c) 2025 Centavo Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Debt, Expense, Payment};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

pub fn total_expenses(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|e| e.amount).sum()
}

/// Outstanding debt across all records (sum of `remaining`, not `total`).
pub fn total_outstanding(debts: &[Debt]) -> Decimal {
    debts.iter().map(|d| d.remaining).sum()
}

pub fn total_paid(payments: &[Payment]) -> Decimal {
    payments.iter().map(|p| p.amount).sum()
}

/// Monthly salary minus everything spent. Goes negative when over budget.
pub fn remaining_budget(salary: Decimal, expenses: &[Expense]) -> Decimal {
    salary - total_expenses(expenses)
}

/// Newest first by creation time, capped at `n`.
pub fn recent_expenses(expenses: &[Expense], n: usize) -> Vec<Expense> {
    let mut out = expenses.to_vec();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out.truncate(n);
    out
}

/// Open debts (remaining > 0) with the soonest due date first, capped at `n`.
pub fn upcoming_debts(debts: &[Debt], n: usize) -> Vec<Debt> {
    let mut out: Vec<Debt> = debts
        .iter()
        .filter(|d| d.remaining > Decimal::ZERO)
        .cloned()
        .collect();
    out.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    out.truncate(n);
    out
}

pub fn overdue_count(debts: &[Debt], now: DateTime<Utc>) -> usize {
    debts.iter().filter(|d| d.due_date < now).count()
}

/// Share of the debt already paid off, in percent. A zero-total debt
/// reads as fully unpaid rather than dividing by zero.
pub fn paid_percent(debt: &Debt) -> Decimal {
    if debt.total.is_zero() {
        return Decimal::ZERO;
    }
    (debt.total - debt.remaining) / debt.total * Decimal::ONE_HUNDRED
}

/// Signed whole days until the due date; negative once overdue.
pub fn days_until_due(debt: &Debt, now: DateTime<Utc>) -> i64 {
    (debt.due_date - now).num_days()
}
