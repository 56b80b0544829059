use proptest::prelude::*;
use satq_kernel::config::{MAX_BIT_WIDTH, MIN_BIT_WIDTH};
use satq_kernel::fxp::ops::saturate;
use satq_kernel::{Evaluator, SaturationConfig};

fn config() -> impl Strategy<Value = SaturationConfig> {
    (MIN_BIT_WIDTH..=MAX_BIT_WIDTH).prop_map(|n| SaturationConfig::new(n).unwrap())
}

// Property 1: Totality (result always within [min_val, max_val])
proptest! {
    #[test]
    fn prop_result_in_range(
        cfg in config(),
        a in any::<i64>(),
        b in any::<i64>(),
        c in any::<i64>(),
        d in any::<i64>(),
    ) {
        let q = Evaluator::new(cfg).evaluate(a, b, c, d);
        prop_assert!(q >= cfg.min_val() && q <= cfg.max_val(), "q={} outside N={}", q, cfg.bit_width());
    }
}

// Property 2: Clamping is idempotent
proptest! {
    #[test]
    fn prop_clamp_idempotent(cfg in config(), x in any::<i128>()) {
        let once = cfg.clamp(x);
        prop_assert_eq!(cfg.clamp(once as i128), once);
        prop_assert_eq!(saturate(once as i128, cfg.min_val(), cfg.max_val()), once);
    }
}

// Property 3: In-range results pass through unchanged
proptest! {
    #[test]
    fn prop_no_spurious_clamping(
        cfg in config(),
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
        c in -1_000_000i64..1_000_000,
        d in -1_000_000i64..1_000_000,
    ) {
        let t = Evaluator::new(cfg).trace(a, b, c, d);
        let div = t.div.unwrap();
        if cfg.contains(div) {
            prop_assert_eq!(t.q as i128, div);
            prop_assert!(!t.saturated());
        } else {
            prop_assert!(t.saturated());
        }
    }
}

// Property 4: Shift is floor division, not truncation
proptest! {
    #[test]
    fn prop_shift_is_floor_division(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
        c in -1_000_000i64..1_000_000,
        d in -1_000_000i64..1_000_000,
    ) {
        let t = Evaluator::new(SaturationConfig::DEFAULT).trace(a, b, c, d);
        let sub2 = t.sub2.unwrap();
        prop_assert_eq!(t.div.unwrap(), sub2.div_euclid(2));
    }
}

// Property 5: Checked narrow path agrees with the wide path when it succeeds
proptest! {
    #[test]
    fn prop_checked_agrees_with_wide(
        cfg in config(),
        a in any::<i64>(),
        b in any::<i64>(),
        c in any::<i64>(),
        d in any::<i64>(),
    ) {
        let e = Evaluator::new(cfg);
        if let Ok(q) = e.evaluate_checked(a, b, c, d) {
            prop_assert_eq!(q, e.evaluate(a, b, c, d));
        }
    }
}
