// Copyright (c) 2025 Centavo Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

// Money options must accept hyphen-leading values so that a negative
// amount reaches the form-layer guard instead of dying in the parser.
fn money_arg(name: &'static str) -> Arg {
    Arg::new(name).long(name).allow_negative_numbers(true)
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("centavo")
        .about("Expense, debt, and payment tracking against the Centavo API")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(
            Command::new("login")
                .about("Sign in and persist the session")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(
            Command::new("register")
                .about("Create an account and persist the session")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true))
                .arg(
                    money_arg("salary")
                        .required(true)
                        .help("Declared monthly income"),
                ),
        )
        .subcommand(Command::new("logout").about("Drop the persisted session"))
        .subcommand(Command::new("whoami").about("Show the cached session, if any"))
        .subcommand(
            Command::new("expense")
                .about("Record and review expenses")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(money_arg("amount").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        )
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("edit")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("category").long("category"))
                        .arg(money_arg("amount"))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD"))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(Command::new("delete").arg(Arg::new("id").required(true))),
        )
        .subcommand(
            Command::new("debt")
                .about("Track debts and their remainders")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name"))
                        .arg(money_arg("total").required(true))
                        .arg(money_arg("remaining").help("Defaults to the full total"))
                        .arg(
                            Arg::new("due-date")
                                .long("due-date")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        ),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("edit")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").long("name"))
                        .arg(money_arg("total"))
                        .arg(money_arg("remaining"))
                        .arg(Arg::new("due-date").long("due-date").help("YYYY-MM-DD")),
                )
                .subcommand(Command::new("delete").arg(Arg::new("id").required(true))),
        )
        .subcommand(
            Command::new("payment")
                .about("Log payments against debts")
                .subcommand(
                    Command::new("add")
                        .arg(
                            Arg::new("debt")
                                .long("debt")
                                .required(true)
                                .help("Id of the debt being paid"),
                        )
                        .arg(money_arg("amount").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        ),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("edit")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("debt").long("debt"))
                        .arg(money_arg("amount"))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD")),
                )
                .subcommand(Command::new("delete").arg(Arg::new("id").required(true))),
        )
        .subcommand(
            Command::new("profile")
                .about("Show or update the user profile")
                .subcommand(json_flags(Command::new("show")))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("email").long("email"))
                        .arg(money_arg("salary"))
                        .arg(Arg::new("first-name").long("first-name"))
                        .arg(Arg::new("last-name").long("last-name")),
                ),
        )
        .subcommand(Command::new("dashboard").about("Aggregate view of expenses, debts, and budget"))
        .subcommand(
            Command::new("export")
                .about("Export a collection to a file")
                .subcommand(export_sub("expenses"))
                .subcommand(export_sub("debts"))
                .subcommand(export_sub("payments")),
        )
}

fn export_sub(name: &'static str) -> Command {
    Command::new(name)
        .arg(
            Arg::new("format")
                .long("format")
                .default_value("csv")
                .help("csv or json"),
        )
        .arg(Arg::new("out").long("out").required(true))
}
