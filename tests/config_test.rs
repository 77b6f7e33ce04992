// config_test.rs

mod common;

use std::sync::Arc;

use history_calc::{CalcError, Calculator, CalculatorConfig, InMemoryHistory, OverflowPolicy};

#[test]
fn config_from_lookup_drives_calculator() -> anyhow::Result<()> {
    common::init_logging();
    let config = CalculatorConfig::from_lookup(|_| Some("wrapping".to_string()))?;
    assert_eq!(config.overflow, OverflowPolicy::Wrapping);

    let hist = InMemoryHistory::new();
    let calc = Calculator::with_config(Arc::new(hist.clone()), config);
    assert_eq!(calc.multiply(i64::MAX, 2)?, -2);
    assert_eq!(hist.entries(), vec![format!("{} * 2 = -2", i64::MAX)]);
    Ok(())
}

#[test]
fn default_policy_rejects_overflow() {
    common::init_logging();
    let hist = InMemoryHistory::new();
    let calc = Calculator::new(Arc::new(hist.clone()));
    assert!(matches!(calc.add(i64::MAX, 1), Err(CalcError::Overflow { .. })));
    assert!(hist.is_empty());
    // small values are unaffected
    assert_eq!(calc.add(i64::MAX - 1, 1), Ok(i64::MAX));
}
