//! Reads the testcases of a challenge definition, solves them and collects the responses
//!
//! A challenge definition looks like this:
//!
//! ```json
//! {
//!     "testcases": {
//!         "b856d760-023d-4b00-bad2-56a8b1ec1e1a": {
//!             "action": "add",
//!             "arguments": { "a": "123", "b": "77" }
//!         }
//!     }
//! }
//! ```
//!
//! and the response to it like this:
//!
//! ```json
//! { "responses": { "b856d760-023d-4b00-bad2-56a8b1ec1e1a": { "result": "200" } } }
//! ```

use std::collections::HashMap;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use threadpool::ThreadPool;
use uuid::Uuid;

use crate::common::veprintln;
use crate::settings::{Settings, SettingsOverride};

pub mod arith;
pub mod compare;
pub mod expr;

/// How long to wait for the next testcase to finish before giving up on all that are left
pub const TIMEOUT: Duration = Duration::from_secs(30);

pub type ManyTestcases = HashMap<Uuid, Testcase>;
pub type Responses = HashMap<Uuid, serde_json::Value>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // arith
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Neg,
    Pow,
    // compare
    Cmp,
    Eq,
    Normalize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Testcase {
    pub action: Action,
    pub arguments: serde_json::Value,
}

impl Testcase {
    pub fn new(action: Action, arguments: serde_json::Value) -> Self {
        Self { action, arguments }
    }
}

impl Default for Testcase {
    fn default() -> Self {
        Testcase::new(Action::Add, serde_json::json!({"a": "123", "b": "77"}))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Challenge {
    testcases: ManyTestcases,
    #[serde(default)]
    settings: Option<SettingsOverride>,
}

/// Solve a single testcase, returning what goes into its `result` field.
pub fn run_testcase(testcase: &Testcase, settings: Settings) -> Result<serde_json::Value> {
    if settings.verbose {
        veprintln("testcase", format_args!("{testcase:?}"));
    }
    match testcase.action {
        Action::Add
        | Action::Sub
        | Action::Mul
        | Action::Div
        | Action::Rem
        | Action::Neg
        | Action::Pow => arith::run_testcase(testcase, settings),
        Action::Cmp | Action::Eq | Action::Normalize => compare::run_testcase(testcase, settings),
    }
}

/// Solve all testcases of a challenge definition on a thread pool.
///
/// Testcases that fail, panic or take too long are reported on stderr and left out of the
/// responses, the rest is not affected.
pub fn run_challenges(
    raw_json: &serde_json::Value,
    settings: Settings,
) -> Result<serde_json::Value> {
    let challenge: Challenge = serde_json::from_value(raw_json.clone())
        .inspect_err(|e| eprintln!("! the challenge definition has the wrong format: {e}"))?;
    let settings = match challenge.settings {
        Some(doc_settings) => settings.merge(doc_settings),
        None => settings,
    };

    let amount = challenge.testcases.len();
    let threads = settings.worker_count();
    eprintln!("* solving {amount} testcases with {threads} threads");

    let pool = ThreadPool::new(threads);
    let (tx, rx) = mpsc::channel();
    for (uuid, testcase) in challenge.testcases {
        let tx = tx.clone();
        pool.execute(move || {
            let res = run_testcase(&testcase, settings);
            // the receiver is only gone after a timeout
            let _ = tx.send((uuid, res));
        });
    }
    // only the workers hold senders now, so a disconnect means everyone is done
    drop(tx);

    let mut responses: Responses = HashMap::with_capacity(amount);
    let mut failed: usize = 0;
    loop {
        match rx.recv_timeout(TIMEOUT) {
            Ok((uuid, Ok(result))) => {
                if settings.verbose {
                    veprintln("solved", format_args!("{uuid} => {result}"));
                }
                responses.insert(uuid, serde_json::json!({ "result": result }));
            }
            Ok((uuid, Err(e))) => {
                eprintln!("! failed to solve testcase {uuid}: {e:#}");
                failed += 1;
            }
            Err(RecvTimeoutError::Timeout) => {
                eprintln!("! gave up waiting for the remaining testcases after {TIMEOUT:?}");
                break;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    let lost = amount - responses.len() - failed;
    if lost > 0 {
        eprintln!("! {lost} testcases did not finish");
    }
    eprintln!("* solved {} of {amount} testcases", responses.len());

    Ok(serde_json::json!({ "responses": responses }))
}
