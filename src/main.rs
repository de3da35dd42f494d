// Copyright (c) 2025 Centavo Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use centavo::{api::ApiClient, cli, commands, session::FileSessionStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = FileSessionStore::new()?;
    let client = ApiClient::from_env(Box::new(store))?;

    match matches.subcommand() {
        Some(("login", sub)) => commands::auth::login(&client, sub).await?,
        Some(("register", sub)) => commands::auth::register(&client, sub).await?,
        Some(("logout", _)) => commands::auth::logout(&client)?,
        Some(("whoami", _)) => commands::auth::whoami(&client)?,
        Some(("expense", sub)) => commands::expenses::handle(&client, sub).await?,
        Some(("debt", sub)) => commands::debts::handle(&client, sub).await?,
        Some(("payment", sub)) => commands::payments::handle(&client, sub).await?,
        Some(("profile", sub)) => commands::profile::handle(&client, sub).await?,
        Some(("dashboard", _)) => commands::dashboard::handle(&client).await?,
        Some(("export", sub)) => commands::exporter::handle(&client, sub).await?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
