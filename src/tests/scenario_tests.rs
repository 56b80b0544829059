// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Reference scenarios for the default 8-bit configuration.

use crate::config::SaturationConfig;
use crate::formula::Evaluator;

struct Scenario {
    inputs: (i64, i64, i64, i64),
    sub2: i128,
    div: i128,
    q: i64,
}

const SCENARIOS: [Scenario; 7] = [
    Scenario { inputs: (1, 2, 3, 4), sub2: -26, div: -13, q: -13 },
    Scenario { inputs: (10, 20, 5, 10), sub2: -200, div: -100, q: -100 },
    Scenario { inputs: (-5, 10, -20, -1), sub2: 889, div: 444, q: 127 },
    Scenario { inputs: (120, -25, 7, 6), sub2: 3166, div: 1583, q: 127 },
    Scenario { inputs: (-120, 25, 7, 6), sub2: -3214, div: -1607, q: -128 },
    Scenario { inputs: (0, 0, 0, 0), sub2: 0, div: 0, q: 0 },
    Scenario { inputs: (127, -128, 127, -128), sub2: 97922, div: 48961, q: 127 },
];

#[test]
fn test_reference_scenarios() {
    let e = Evaluator::new(SaturationConfig::DEFAULT);
    for s in &SCENARIOS {
        let (a, b, c, d) = s.inputs;
        let t = e.trace(a, b, c, d);
        assert_eq!(t.sub2, Some(s.sub2), "sub2 for {:?}", s.inputs);
        assert_eq!(t.div, Some(s.div), "div for {:?}", s.inputs);
        assert_eq!(t.q, s.q, "q for {:?}", s.inputs);
        assert_eq!(e.evaluate(a, b, c, d), s.q);
        assert_eq!(e.evaluate_checked(a, b, c, d), Ok(s.q));
    }
}

#[test]
fn test_scenarios_stay_in_range_for_every_width() {
    for n in 2..=64 {
        let cfg = SaturationConfig::new(n).unwrap();
        let e = Evaluator::new(cfg);
        for s in &SCENARIOS {
            let (a, b, c, d) = s.inputs;
            let q = e.evaluate(a, b, c, d);
            assert!(q >= cfg.min_val() && q <= cfg.max_val(), "N={} q={}", n, q);
            if cfg.contains(s.div) {
                assert_eq!(q as i128, s.div);
            }
        }
    }
}
