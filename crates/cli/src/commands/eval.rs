use std::fmt::Write;

use satq_kernel::{Evaluator, SaturationConfig, Trace};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inputs {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
}

#[derive(Serialize, Debug)]
struct EvalReport {
    config: SaturationConfig,
    inputs: Inputs,
    q: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<Trace>,
}

pub fn run(config: SaturationConfig, inputs: Inputs, trace: bool, json: bool) -> anyhow::Result<()> {
    println!("{}", render(config, inputs, trace, json)?);
    Ok(())
}

pub fn render(config: SaturationConfig, inputs: Inputs, trace: bool, json: bool) -> anyhow::Result<String> {
    let Inputs { a, b, c, d } = inputs;
    let t = Evaluator::new(config).trace(a, b, c, d);

    if t.saturated() {
        tracing::debug!(div = ?t.div, q = t.q, "result saturated");
    }

    if json {
        let report = EvalReport {
            config,
            inputs,
            q: t.q,
            trace: trace.then_some(t),
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = String::new();
    writeln!(out, "a={}, b={}, c={}, d={}", a, b, c, d)?;
    if trace {
        writeln!(out, "sub1 = a - b              = {}", t.sub1)?;
        writeln!(out, "add1 = 1 + 3c             = {}", t.add1)?;
        writeln!(out, "mul3 = 4d                 = {}", t.mul3)?;
        writeln!(out, "sub2 = sub1 * add1 - mul3 = {}", term(t.sub2))?;
        writeln!(out, "div  = sub2 >> 1          = {}", term(t.div))?;
    }
    write!(out, "q={}", t.q)?;
    if trace && t.saturated() {
        write!(out, " (saturated to [{}, {}])", config.min_val(), config.max_val())?;
    }
    Ok(out)
}

fn term(value: Option<i128>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "overflow (beyond i128)".to_string(),
    }
}
