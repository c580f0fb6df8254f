use approx::assert_relative_eq;
use carbon_dash::ticks::{build_ticks, nice_step, TARGET_TICKS};

// ─── Test 1: small ranges always use the 0.5 step ───────────────────────

#[test]
fn test_small_range_step() {
    assert_relative_eq!(nice_step(1.8, TARGET_TICKS), 0.5);
    assert_relative_eq!(nice_step(2.0, TARGET_TICKS), 0.5);
    assert_relative_eq!(nice_step(0.3, TARGET_TICKS), 0.5);
}

// ─── Test 2: the mantissa snaps upward within its decade ────────────────

#[test]
fn test_nice_step_snapping() {
    // raw 9.4 -> magnitude 10, normalized 0.94 -> 10
    assert_relative_eq!(nice_step(47.0, TARGET_TICKS), 10.0);
    // raw 2.0 -> magnitude 10, normalized 0.2 -> 2
    assert_relative_eq!(nice_step(10.0, TARGET_TICKS), 2.0);
    // raw 3.0 -> normalized 0.3 -> 5
    assert_relative_eq!(nice_step(15.0, TARGET_TICKS), 5.0);
    // raw 0.5 -> magnitude 1, normalized 0.5 -> 0.5
    assert_relative_eq!(nice_step(2.5, TARGET_TICKS), 0.5);
    // raw 10 -> step 10
    assert_relative_eq!(nice_step(50.0, TARGET_TICKS), 10.0);
    // raw 940 -> step 1000
    assert_relative_eq!(nice_step(4700.0, TARGET_TICKS), 1000.0);
}

// ─── Test 3: ticks run from the origin up to the bound ──────────────────

#[test]
fn test_tick_emission() {
    let ticks = build_ticks(10.0);
    let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

    for pair in ticks.windows(2) {
        assert!(pair[0].value < pair[1].value, "ticks must ascend");
    }
    assert!(ticks.iter().all(|t| t.value <= 10.0 + 1e-9));
}

// ─── Test 4: the origin tick is present but unlabeled ───────────────────

#[test]
fn test_origin_tick_unlabeled() {
    let ticks = build_ticks(10.0);
    assert_eq!(ticks[0].value, 0.0);
    assert_eq!(ticks[0].label, "");
    for tick in &ticks[1..] {
        assert!(!tick.label.is_empty(), "non-origin ticks carry labels");
    }
    assert_eq!(ticks[1].label, "2");
}

// ─── Test 5: sub-unit steps label with one decimal ──────────────────────

#[test]
fn test_fractional_labels() {
    let ticks = build_ticks(1.8);
    let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![0.0, 0.5, 1.0, 1.5]);
    assert_eq!(ticks[1].label, "0.5");
    assert_eq!(ticks[3].label, "1.5");
}

// ─── Test 6: degenerate bounds still show the axis origin ───────────────

#[test]
fn test_degenerate_upper() {
    let zero = build_ticks(0.0);
    assert_eq!(zero.len(), 1);
    assert_eq!(zero[0].value, 0.0);
    assert_eq!(zero[0].label, "");

    assert_eq!(build_ticks(-3.0).len(), 1);
    assert_eq!(build_ticks(f64::NAN).len(), 1);
}
