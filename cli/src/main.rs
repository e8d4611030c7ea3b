//! split-settle - interactive shared-expense tracker
//!
//! Reads one command per line from stdin and keeps all state in memory for
//! the life of the process:
//!
//! ```bash
//! split-settle <<'EOF'
//! add-user ALICE
//! add-user BOB
//! add-expense ALICE 30.00 "team dinner" ALICE BOB
//! balances
//! settle
//! exit
//! EOF
//! ```
//!
//! Exit code is 0 on a graceful exit (`exit` or EOF) and non-zero if any
//! line in the session was malformed or rejected.

use std::io::{self, BufRead};
use std::process::ExitCode;

mod money;
mod session;

use session::{Outcome, Session};

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();

    println!("split-settle interactive session (type 'help' for commands, 'exit' to quit)");

    let mut session = Session::new();
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("error: failed to read input: {err}");
                return ExitCode::FAILURE;
            }
        };
        if session.dispatch(&line) == Outcome::Exit {
            break;
        }
    }

    tracing::debug!(had_errors = session.had_errors(), "session ended");
    if session.had_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
