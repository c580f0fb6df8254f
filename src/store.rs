use thiserror::Error;

use crate::outcomes::{OutcomeSpec, OUTCOMES};

/// One row of the precomputed policy path table. Key fields are always
/// present after ingestion; outcome columns may be null when a metric was
/// unmeasured or unparseable.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRow {
    pub market: String,
    pub instrument: String,
    /// Border-adjustment regime toggle, 0 or 1.
    pub cbam: u8,
    /// Policy intensity; only a finite discrete set occurs per family.
    pub level: f64,
    /// 0-based period index.
    pub time: u32,

    pub price: Option<f64>,
    pub emissions_total: Option<f64>,
    pub profit_total: Option<f64>,
    pub market_quantity: Option<f64>,
    pub imports: Option<f64>,
    pub leakage: Option<f64>,
    pub consumer_surplus: Option<f64>,
    pub carbon_revenue: Option<f64>,
    pub damage: Option<f64>,
}

impl SimulationRow {
    /// Look up an outcome column by key. Unknown keys read as null.
    pub fn outcome(&self, key: &str) -> Option<f64> {
        match key {
            "price" => self.price,
            "emissions_total" => self.emissions_total,
            "profit_total" => self.profit_total,
            "market_quantity" => self.market_quantity,
            "imports" => self.imports,
            "leakage" => self.leakage,
            "consumer_surplus" => self.consumer_surplus,
            "carbon_revenue" => self.carbon_revenue,
            "damage" => self.damage,
            _ => None,
        }
    }
}

/// Fatal failures to obtain a usable table. Row- and field-level problems
/// never surface here; they degrade to dropped rows or null values.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("simulation table is empty")]
    EmptyTable,
    #[error("simulation table contains no rows with a complete scenario key")]
    NoValidRows,
}

/// Parse a numeric field; anything that is not a finite number reads as
/// null.
pub fn parse_num(field: &str) -> Option<f64> {
    let v: f64 = field.trim().parse().ok()?;
    if v.is_finite() {
        Some(v)
    } else {
        None
    }
}

/// Column positions resolved from the CSV header once per load. A column
/// missing from the file leaves every row's value null.
struct Columns {
    market: Option<usize>,
    instrument: Option<usize>,
    cbam: Option<usize>,
    level: Option<usize>,
    time: Option<usize>,
    price: Option<usize>,
    emissions_total: Option<usize>,
    profit_total: Option<usize>,
    market_quantity: Option<usize>,
    imports: Option<usize>,
    leakage: Option<usize>,
    consumer_surplus: Option<usize>,
    carbon_revenue: Option<usize>,
    damage: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Columns {
        let col = |name: &str| headers.iter().position(|h| h.trim() == name);
        Columns {
            market: col("market"),
            instrument: col("instrument"),
            cbam: col("cbam"),
            level: col("level"),
            time: col("time"),
            price: col("price"),
            emissions_total: col("emissions_total"),
            profit_total: col("profit_total"),
            market_quantity: col("marketQuantity"),
            imports: col("imports"),
            leakage: col("leakage"),
            consumer_surplus: col("consumerSurplus"),
            carbon_revenue: col("carbonRevenue"),
            damage: col("damage"),
        }
    }
}

fn text_field(record: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    let s = record.get(idx?)?.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn num_field(record: &csv::StringRecord, idx: Option<usize>) -> Option<f64> {
    record.get(idx?).and_then(parse_num)
}

/// Period indices are small non-negative integers; anything else is a
/// malformed key.
fn to_period(v: f64) -> Option<u32> {
    if v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX) {
        Some(v as u32)
    } else {
        None
    }
}

/// Build a row from one CSV record; None when any key field is missing or
/// malformed.
fn row_from_record(cols: &Columns, record: &csv::StringRecord) -> Option<SimulationRow> {
    let market = text_field(record, cols.market)?;
    let instrument = text_field(record, cols.instrument)?;
    let cbam = match num_field(record, cols.cbam)? {
        v if v == 0.0 => 0u8,
        v if v == 1.0 => 1u8,
        _ => return None,
    };
    let level = num_field(record, cols.level)?;
    let time = to_period(num_field(record, cols.time)?)?;

    Some(SimulationRow {
        market,
        instrument,
        cbam,
        level,
        time,
        price: num_field(record, cols.price),
        emissions_total: num_field(record, cols.emissions_total),
        profit_total: num_field(record, cols.profit_total),
        market_quantity: num_field(record, cols.market_quantity),
        imports: num_field(record, cols.imports),
        leakage: num_field(record, cols.leakage),
        consumer_surplus: num_field(record, cols.consumer_surplus),
        carbon_revenue: num_field(record, cols.carbon_revenue),
        damage: num_field(record, cols.damage),
    })
}

/// The parsed simulation table. Built once, immutable afterwards.
#[derive(Debug, Clone)]
pub struct RowStore {
    rows: Vec<SimulationRow>,
}

impl RowStore {
    /// Parse CSV text into the store, dropping rows without a complete
    /// (market, instrument, cbam, level, time) key.
    pub fn from_csv_str(text: &str) -> Result<RowStore, LoadError> {
        if text.trim().is_empty() {
            return Err(LoadError::EmptyTable);
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());
        let cols = match reader.headers() {
            Ok(headers) => Columns::resolve(headers),
            Err(_) => return Err(LoadError::NoValidRows),
        };

        let mut rows = Vec::new();
        let mut dropped = 0usize;
        for result in reader.records() {
            let record = match result {
                Ok(r) => r,
                Err(_) => {
                    dropped += 1;
                    continue;
                }
            };
            match row_from_record(&cols, &record) {
                Some(row) => rows.push(row),
                None => dropped += 1,
            }
        }

        if rows.is_empty() {
            return Err(LoadError::NoValidRows);
        }
        if dropped > 0 {
            log::warn!("dropped {dropped} rows with incomplete or malformed keys");
        }
        log::info!("loaded {} simulation rows", rows.len());

        Ok(RowStore { rows })
    }

    pub fn rows(&self) -> &[SimulationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct market names, sorted.
    pub fn markets(&self) -> Vec<String> {
        uniq_sorted(self.rows.iter().map(|r| r.market.clone()))
    }

    /// Distinct instrument names, sorted.
    pub fn instruments(&self) -> Vec<String> {
        uniq_sorted(self.rows.iter().map(|r| r.instrument.clone()))
    }

    /// Catalog entries for which at least one stored row carries a value,
    /// in catalog order.
    pub fn available_outcomes(&self) -> Vec<&'static OutcomeSpec> {
        OUTCOMES
            .iter()
            .filter(|spec| self.rows.iter().any(|r| r.outcome(spec.key).is_some()))
            .collect()
    }
}

fn uniq_sorted(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut v: Vec<String> = values.collect();
    v.sort();
    v.dedup();
    v
}
