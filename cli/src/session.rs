//! Interactive session
//!
//! Parses one input line at a time as an explicit subcommand and applies it
//! to the in-memory ledger. All state is process-lifetime only, so the
//! commands operate inside a single session rather than as one-shot
//! invocations.
//!
//! Recoverable errors (unknown user, bad amount, duplicate name) are
//! reported, leave the ledger untouched, and mark the session so the process
//! exits non-zero after a run that saw malformed input.

use anyhow::{bail, Result};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use split_settle_core::{settle, Ledger, TransactionLog};

use crate::money::{format_cents, parse_amount};

#[derive(Parser)]
#[command(
    name = "split-settle",
    about = "Shared expense tracking and debt settlement",
    disable_version_flag = true
)]
struct LineCommand {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Register a new user with a zero balance
    AddUser { name: String },

    /// Record an expense paid by one user, split evenly across participants
    AddExpense {
        /// Who paid
        payer: String,
        /// Decimal amount, e.g. 30.00
        amount: String,
        /// Free-text description (quote it if it contains spaces)
        description: String,
        /// Users sharing the expense (the payer may be among them)
        #[arg(required = true)]
        participants: Vec<String>,
    },

    /// Show every balance in registration order
    Balances,

    /// Compute pairwise payments that settle all outstanding balances
    Settle,

    /// Dump the expense log as JSON
    Log,

    /// End the session
    Exit,
}

/// What the read loop should do after a dispatched line
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// One interactive session: a ledger, its audit log, and an error flag that
/// decides the final exit code.
pub struct Session {
    ledger: Ledger,
    log: TransactionLog,
    had_errors: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
            log: TransactionLog::new(),
            had_errors: false,
        }
    }

    /// True if any line in this session was malformed or rejected
    pub fn had_errors(&self) -> bool {
        self.had_errors
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Tokenize, parse, and execute one input line
    pub fn dispatch(&mut self, line: &str) -> Outcome {
        let tokens = match split_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.report(err);
                return Outcome::Continue;
            }
        };
        if tokens.is_empty() {
            return Outcome::Continue;
        }

        let parsed = LineCommand::try_parse_from(
            std::iter::once("split-settle".to_string()).chain(tokens),
        );
        match parsed {
            Ok(command) => self.execute(command.action),
            Err(err) => {
                // `help` is not malformed input
                let is_help = matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
                );
                let _ = err.print();
                if !is_help {
                    self.had_errors = true;
                }
                Outcome::Continue
            }
        }
    }

    fn execute(&mut self, action: Action) -> Outcome {
        match action {
            Action::AddUser { name } => match self.ledger.register_user(&name) {
                Ok(()) => println!("registered {name}"),
                Err(err) => self.report(err),
            },

            Action::AddExpense {
                payer,
                amount,
                description,
                participants,
            } => {
                let cents = match parse_amount(&amount) {
                    Ok(cents) => cents,
                    Err(err) => {
                        self.report(err);
                        return Outcome::Continue;
                    }
                };
                let participant_refs: Vec<&str> =
                    participants.iter().map(String::as_str).collect();
                match self.ledger.apply_expense(
                    &payer,
                    &participant_refs,
                    &description,
                    cents,
                    &mut self.log,
                ) {
                    Ok(()) => println!(
                        "recorded {} paid by {payer}, split {} ways",
                        format_cents(cents),
                        participants.len()
                    ),
                    Err(err) => self.report(err),
                }
            }

            Action::Balances => {
                for entry in self.ledger.snapshot() {
                    println!("{}: {}", entry.name, format_cents(entry.balance));
                }
            }

            Action::Settle => match settle(&mut self.ledger) {
                Ok(report) => {
                    if report.instructions.is_empty() {
                        println!("nothing to settle");
                    }
                    for instruction in &report.instructions {
                        println!(
                            "{} pays {}: {}",
                            instruction.payer,
                            instruction.payee,
                            format_cents(instruction.amount)
                        );
                    }
                    if let Some(residual) = &report.residual {
                        eprintln!(
                            "warning: residual balance of {} left on {}",
                            format_cents(residual.amount),
                            residual.user
                        );
                    }
                }
                Err(err) => self.report(err),
            },

            Action::Log => match self.log.to_json() {
                Ok(json) => println!("{json}"),
                Err(err) => self.report(err),
            },

            Action::Exit => return Outcome::Exit,
        }
        Outcome::Continue
    }

    fn report(&mut self, err: impl std::fmt::Display) {
        eprintln!("error: {err}");
        self.had_errors = true;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Whitespace tokenizer with double-quote support, so descriptions can
/// contain spaces: `add-expense ALICE 30.00 "team dinner" ALICE BOB`
fn split_line(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() || quoted {
                    tokens.push(std::mem::take(&mut current));
                    quoted = false;
                }
            }
            c => current.push(c),
        }
    }
    if in_quotes {
        bail!("unterminated quote in input");
    }
    if !current.is_empty() || quoted {
        tokens.push(current);
    }
    Ok(tokens)
}
