//! Takes care of the arithmetic actions: add, sub, mul, div, rem, neg and pow

use anyhow::Result;
use decint::BigInteger;

use crate::common::interface::{get_any, get_bigint, put_bigint};
use crate::common::veprintln;
use crate::settings::Settings;

use super::{Action, Testcase};

pub fn run_testcase(testcase: &Testcase, settings: Settings) -> Result<serde_json::Value> {
    let args = &testcase.arguments;
    let res: BigInteger = match testcase.action {
        Action::Add => {
            let (a, b) = get_operands(args)?;
            a + b
        }
        Action::Sub => {
            let (a, b) = get_operands(args)?;
            a - b
        }
        Action::Mul => {
            let (a, b) = get_operands(args)?;
            a * b
        }
        Action::Div => {
            let (a, b) = get_operands(args)?;
            a.div(&b)?
        }
        Action::Rem => {
            let (a, b) = get_operands(args)?;
            a.rem(&b)?
        }
        Action::Neg => -get_bigint(args, "a")?,
        Action::Pow => {
            let a = get_bigint(args, "a")?;
            let exp: u32 = get_any(args, "exp")?;
            a.pow(exp)
        }
        _ => unreachable!(),
    };
    if settings.verbose {
        veprintln("digits", format_args!("{}", res.digit_count()));
    }
    Ok(put_bigint(&res))
}

fn get_operands(args: &serde_json::Value) -> Result<(BigInteger, BigInteger)> {
    Ok((get_bigint(args, "a")?, get_bigint(args, "b")?))
}
