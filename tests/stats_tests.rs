// Copyright (c) 2025 Centavo Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centavo::models::{Debt, Expense, Payment};
use centavo::stats;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

fn at(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().unwrap()
}

fn expense(id: &str, amount: i64, created_at: &str) -> Expense {
    Expense {
        id: id.to_string(),
        category: "Food".to_string(),
        amount: Decimal::from(amount),
        date: at(created_at),
        description: None,
        user_id: "u1".to_string(),
        created_at: at(created_at),
        updated_at: at(created_at),
    }
}

fn debt(id: &str, total: i64, remaining: i64, due: &str) -> Debt {
    Debt {
        id: id.to_string(),
        name: Some(format!("debt-{id}")),
        total: Decimal::from(total),
        remaining: Decimal::from(remaining),
        due_date: at(due),
        user_id: "u1".to_string(),
        created_at: at("2025-01-01T00:00:00Z"),
        updated_at: at("2025-01-01T00:00:00Z"),
    }
}

fn payment(id: &str, amount: i64) -> Payment {
    Payment {
        id: id.to_string(),
        debt_id: "d1".to_string(),
        amount: Decimal::from(amount),
        date: at("2025-08-01T00:00:00Z"),
        user_id: "u1".to_string(),
        created_at: at("2025-08-01T00:00:00Z"),
        updated_at: at("2025-08-01T00:00:00Z"),
    }
}

#[test]
fn totals_sum_the_right_fields() {
    let expenses = [
        expense("e1", 1000, "2025-08-01T10:00:00Z"),
        expense("e2", 2500, "2025-08-02T10:00:00Z"),
    ];
    let debts = [
        debt("d1", 10000, 4000, "2025-09-01T00:00:00Z"),
        debt("d2", 5000, 0, "2025-09-15T00:00:00Z"),
    ];
    let payments = [payment("p1", 6000), payment("p2", 5000)];

    assert_eq!(stats::total_expenses(&expenses), Decimal::from(3500));
    // remaining, not total
    assert_eq!(stats::total_outstanding(&debts), Decimal::from(4000));
    assert_eq!(stats::total_paid(&payments), Decimal::from(11000));
}

#[test]
fn remaining_budget_goes_negative_when_over() {
    let expenses = [expense("e1", 7000, "2025-08-01T10:00:00Z")];
    assert_eq!(
        stats::remaining_budget(Decimal::from(5000), &expenses),
        Decimal::from(-2000)
    );
    assert_eq!(
        stats::remaining_budget(Decimal::from(5000), &[]),
        Decimal::from(5000)
    );
}

#[test]
fn recent_expenses_newest_first_capped() {
    let expenses = [
        expense("old", 1, "2025-08-01T10:00:00Z"),
        expense("newest", 2, "2025-08-03T10:00:00Z"),
        expense("mid", 3, "2025-08-02T10:00:00Z"),
    ];
    let recent = stats::recent_expenses(&expenses, 2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].id, "newest");
    assert_eq!(recent[1].id, "mid");
}

#[test]
fn upcoming_debts_skips_settled_and_sorts_by_due_date() {
    let debts = [
        debt("later", 100, 50, "2025-12-01T00:00:00Z"),
        debt("paid", 100, 0, "2025-09-01T00:00:00Z"),
        debt("soon", 100, 10, "2025-10-01T00:00:00Z"),
    ];
    let upcoming = stats::upcoming_debts(&debts, 3);
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].id, "soon");
    assert_eq!(upcoming[1].id, "later");
}

#[test]
fn overdue_is_strictly_before_now() {
    let now = at("2025-08-28T12:00:00Z");
    let debts = [
        debt("past", 100, 100, "2025-08-27T12:00:00Z"),
        debt("exact", 100, 100, "2025-08-28T12:00:00Z"),
        debt("future", 100, 100, "2025-08-29T12:00:00Z"),
    ];
    assert_eq!(stats::overdue_count(&debts, now), 1);
}

#[test]
fn paid_percent_handles_zero_total() {
    let half = debt("d1", 10000, 5000, "2025-09-01T00:00:00Z");
    assert_eq!(stats::paid_percent(&half), Decimal::from(50));

    let zero = debt("d2", 0, 0, "2025-09-01T00:00:00Z");
    assert_eq!(stats::paid_percent(&zero), Decimal::ZERO);
}

#[test]
fn days_until_due_signed() {
    let now = Utc::now();
    let future = Debt {
        due_date: now + Duration::days(10),
        ..debt("d1", 100, 100, "2025-09-01T00:00:00Z")
    };
    assert_eq!(stats::days_until_due(&future, now), 10);

    let past = Debt {
        due_date: now - Duration::days(3),
        ..debt("d2", 100, 100, "2025-09-01T00:00:00Z")
    };
    assert_eq!(stats::days_until_due(&past, now), -3);
}
