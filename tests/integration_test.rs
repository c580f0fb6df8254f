use approx::assert_relative_eq;
use carbon_dash::aggregate::CompareMode;
use carbon_dash::compare::{compare, ComparisonResult};
use carbon_dash::config::PolicyConstants;
use carbon_dash::data_source;
use carbon_dash::outcomes::OUTCOMES;
use carbon_dash::output;
use carbon_dash::scenario::{self, ScenarioKey, Selection};
use carbon_dash::series::build_series;
use carbon_dash::store::RowStore;

const TABLE: &str = "\
market,instrument,cbam,level,time,emissions_total
Total,Tax,0,0,0,100
Total,Tax,0,0,1,90
Total,Tax,0,50,0,80
Total,Tax,0,50,1,60
";

// ─── Test 1: full pipeline from CSV text to a plotted series ────────────

#[test]
fn test_csv_to_series() {
    let store = RowStore::from_csv_str(TABLE).unwrap();

    let sel = Selection::default_for(&store).unwrap();
    assert_eq!(sel.key.market, "Total");
    assert_eq!(sel.key.instrument, "Tax");
    assert_eq!(sel.outcome, "emissions_total");

    let grid = scenario::level_grid(&store, &sel.key);
    assert_eq!(grid, vec![0.0, 50.0]);

    // Move the slider to the second level.
    let rows = scenario::select(&store, &sel.key, 1);
    assert_eq!(scenario::level_label(&grid, 1), "50");

    let series = build_series(&rows, &sel.outcome);
    assert_eq!(series.x, vec![0, 1]);
    assert_eq!(series.y, vec![80.0, 60.0]);
}

// ─── Test 2: baseline vs policy at period 0 is a 20% cut ────────────────

#[test]
fn test_point_comparison_end_to_end() {
    let store = RowStore::from_csv_str(TABLE).unwrap();
    let key = ScenarioKey::new("Total", "Tax", 0);
    let baseline = scenario::select(&store, &key, 0);
    let policy = scenario::select(&store, &key, 1);

    let result = compare(
        &baseline,
        &policy,
        CompareMode::AtYear(2025),
        OUTCOMES,
        &PolicyConstants::default(),
    );
    let entries = match result {
        ComparisonResult::Entries(e) => e,
        ComparisonResult::NothingToCompare => panic!("expected a comparable outcome"),
    };

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].outcome, "emissions_total");
    assert_relative_eq!(entries[0].percent_change, -20.0, epsilon = 1e-12);
}

// ─── Test 3: the download blob matches the plotted series ───────────────

#[test]
fn test_series_download_blob() {
    let store = RowStore::from_csv_str(TABLE).unwrap();
    let key = ScenarioKey::new("Total", "Tax", 0);
    let rows = scenario::select(&store, &key, 1);
    let series = build_series(&rows, "emissions_total");

    let blob = output::series_csv(&series, &PolicyConstants::default()).unwrap();
    assert_eq!(blob, "time,year,value\n0,2025,80\n1,2028,60\n");
}

// ─── Test 4: loading from disk goes through the same ingestion ──────────

#[test]
fn test_load_table_from_disk() {
    let path = std::env::temp_dir().join("carbon_dash_integration_table.csv");
    std::fs::write(&path, TABLE).unwrap();

    let store = data_source::load_table(&path).unwrap();
    assert_eq!(store.len(), 4);
    assert_eq!(store.markets(), vec!["Total".to_string()]);

    let _ = std::fs::remove_file(&path);
}

// ─── Test 5: constants override from TOML feeds the whole pipeline ──────

#[test]
fn test_constants_override() {
    let constants = PolicyConstants::from_toml_str(
        "discount_factor = 1.0\nbase_year = 2020\nperiod_length_years = 10\n",
    )
    .unwrap();
    assert_relative_eq!(constants.discount_factor, 1.0);
    assert_eq!(constants.base_year, 2020);
    assert_eq!(constants.period_length_years, 10);
    // Untouched key keeps its default.
    assert_relative_eq!(constants.baseline_epsilon, 1e-10);

    let store = RowStore::from_csv_str(TABLE).unwrap();
    let key = ScenarioKey::new("Total", "Tax", 0);
    let rows = scenario::select(&store, &key, 0);

    let result = compare(
        &rows,
        &rows,
        CompareMode::AtYear(2030),
        OUTCOMES,
        &constants,
    );
    let entries = match result {
        ComparisonResult::Entries(e) => e,
        ComparisonResult::NothingToCompare => panic!("expected a comparable outcome"),
    };
    // 2030 is period 1 on the 2020 + 10n grid; comparing a scenario with
    // itself changes nothing.
    assert_relative_eq!(entries[0].value_a, 90.0);
    assert_relative_eq!(entries[0].percent_change, 0.0, epsilon = 1e-12);
}
