use std::path::Path;

use crate::store::{LoadError, RowStore};

/// Fetch the precomputed path table from a URL. Non-success statuses and
/// empty bodies are load failures; there is nothing to explore without the
/// table.
pub fn fetch_csv(url: &str) -> Result<String, Box<dyn std::error::Error>> {
    let client = reqwest::blocking::Client::new();
    let resp = client.get(url).send()?;
    if !resp.status().is_success() {
        return Err(format!("failed to fetch table: HTTP {}", resp.status()).into());
    }

    let text = resp.text()?;
    if text.trim().is_empty() {
        return Err(Box::new(LoadError::EmptyTable));
    }
    Ok(text)
}

/// Load and parse the table from a local CSV file.
pub fn load_table(path: &Path) -> Result<RowStore, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(RowStore::from_csv_str(&text)?)
}
