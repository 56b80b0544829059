use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use satq_kernel::{Evaluator, SaturationConfig};
use serde::Serialize;

use crate::cases::REFERENCE_CASES;

#[derive(Serialize, Debug)]
struct CaseReport {
    name: &'static str,
    a: i64,
    b: i64,
    c: i64,
    d: i64,
    q: i64,
    saturated: bool,
}

pub fn run(config: SaturationConfig, json: bool) -> anyhow::Result<()> {
    println!("{}", render(Evaluator::new(config), json)?);
    Ok(())
}

pub fn render(evaluator: Evaluator, json: bool) -> anyhow::Result<String> {
    let reports: Vec<CaseReport> = REFERENCE_CASES
        .iter()
        .map(|case| {
            let t = evaluator.trace(case.a, case.b, case.c, case.d);
            CaseReport {
                name: case.name,
                a: case.a,
                b: case.b,
                c: case.c,
                d: case.d,
                q: t.q,
                saturated: t.saturated(),
            }
        })
        .collect();

    let config = evaluator.config();
    tracing::info!(cases = reports.len(), bit_width = config.bit_width(), "evaluated reference cases");

    if json {
        return Ok(serde_json::to_string_pretty(&reports)?);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Case", "a", "b", "c", "d", "q", "Saturated"]);

    for r in &reports {
        table.add_row(vec![
            r.name.to_string(),
            r.a.to_string(),
            r.b.to_string(),
            r.c.to_string(),
            r.d.to_string(),
            r.q.to_string(),
            if r.saturated { "yes" } else { "" }.to_string(),
        ]);
    }

    Ok(format!(
        "Reference cases (N={}, range [{}, {}])\n\n{table}",
        config.bit_width(),
        config.min_val(),
        config.max_val()
    ))
}
