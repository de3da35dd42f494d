// Copyright (c) 2025 Centavo Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use crate::models::UserSummary;
use crate::utils::{fmt_money, parse_decimal};
use anyhow::Result;

pub async fn login(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let email = m.get_one::<String>("email").unwrap();
    let password = m.get_one::<String>("password").unwrap();
    let session = client.login(email, password).await?;
    println!("Logged in as {}", session.user.email);
    Ok(())
}

pub async fn register(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let email = m.get_one::<String>("email").unwrap();
    let password = m.get_one::<String>("password").unwrap();
    let salary = parse_decimal(m.get_one::<String>("salary").unwrap())?;
    if salary.is_sign_negative() {
        anyhow::bail!("Salary must not be negative");
    }
    let session = client.register(email, password, salary).await?;
    println!(
        "Registered {} (monthly income {})",
        session.user.email,
        fmt_money(&session.user.salary)
    );
    Ok(())
}

pub fn logout(client: &ApiClient) -> Result<()> {
    client.logout()?;
    println!("Session cleared");
    Ok(())
}

pub fn whoami(client: &ApiClient) -> Result<()> {
    match client.session()? {
        Some(s) => println!("{}", display_name(&s.user)),
        None => println!("Not logged in"),
    }
    Ok(())
}

/// Whichever name parts exist, followed by the email; email alone when
/// neither part is set.
pub fn display_name(user: &UserSummary) -> String {
    match (&user.first_name, &user.last_name) {
        (Some(f), Some(l)) => format!("{} {} <{}>", f, l, user.email),
        (Some(f), None) => format!("{} <{}>", f, user.email),
        (None, Some(l)) => format!("{} <{}>", l, user.email),
        (None, None) => user.email.clone(),
    }
}
