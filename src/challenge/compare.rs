//! Takes care of the actions that look at values instead of calculating new ones: cmp, eq and
//! normalize

use std::cmp::Ordering;

use anyhow::Result;

use crate::common::interface::{get_bigint, put_bigint};

use super::{Action, Testcase};
use crate::settings::Settings;

pub fn run_testcase(testcase: &Testcase, _settings: Settings) -> Result<serde_json::Value> {
    let args = &testcase.arguments;
    Ok(match testcase.action {
        Action::Cmp => {
            let a = get_bigint(args, "a")?;
            let b = get_bigint(args, "b")?;
            ordering_name(a.compare_to(&b)).into()
        }
        Action::Eq => {
            let a = get_bigint(args, "a")?;
            let b = get_bigint(args, "b")?;
            (a == b).into()
        }
        Action::Normalize => put_bigint(&get_bigint(args, "a")?),
        _ => unreachable!(),
    })
}

pub fn ordering_name(ord: Ordering) -> &'static str {
    match ord {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}
