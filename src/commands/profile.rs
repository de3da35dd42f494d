// Copyright (c) 2025 Centavo Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use crate::models::ProfilePatch;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;

pub async fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(client, sub).await?,
        Some(("set", sub)) => set(client, sub).await?,
        _ => {}
    }
    Ok(())
}

async fn show(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let profile = client.profile().await?;
    if maybe_print_json(json_flag, jsonl_flag, &profile)? {
        return Ok(());
    }
    let rows = vec![
        vec!["Email".to_string(), profile.email.clone()],
        vec![
            "Name".to_string(),
            match (&profile.first_name, &profile.last_name) {
                (Some(f), Some(l)) => format!("{} {}", f, l),
                (Some(f), None) => f.clone(),
                (None, Some(l)) => l.clone(),
                (None, None) => String::new(),
            },
        ],
        vec!["Monthly income".to_string(), fmt_money(&profile.salary)],
        vec![
            "Member since".to_string(),
            profile.created_at.date_naive().to_string(),
        ],
    ];
    println!("{}", pretty_table(&["Field", "Value"], rows));
    Ok(())
}

async fn set(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let mut patch = ProfilePatch {
        email: sub.get_one::<String>("email").cloned(),
        first_name: sub.get_one::<String>("first-name").cloned(),
        last_name: sub.get_one::<String>("last-name").cloned(),
        ..ProfilePatch::default()
    };
    if let Some(s) = sub.get_one::<String>("salary") {
        let salary = parse_decimal(s)?;
        if salary.is_sign_negative() {
            anyhow::bail!("Salary must not be negative");
        }
        patch.salary = Some(salary);
    }
    if patch.email.is_none()
        && patch.first_name.is_none()
        && patch.last_name.is_none()
        && patch.salary.is_none()
    {
        anyhow::bail!("Nothing to update; pass at least one field");
    }
    let profile = client.update_profile(&patch).await?;
    println!(
        "Profile updated: {} (monthly income {})",
        profile.email,
        fmt_money(&profile.salary)
    );
    Ok(())
}
