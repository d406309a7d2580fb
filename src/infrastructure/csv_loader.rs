//! Daily OHLCV loading from CSV exports.
//!
//! Accepts plain `Date,Open,High,Low,Close,Volume` files as well as the
//! multi-header layout written by yfinance, where the date column is labelled
//! `Price` and two junk rows follow the header. Rows whose date or close
//! cannot be parsed are skipped.

use crate::domain::errors::MarketDataError;
use crate::domain::market::{PriceBar, PriceSeries};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::StringRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

struct Columns {
    date: usize,
    close: usize,
    open: Option<usize>,
    high: Option<usize>,
    low: Option<usize>,
    volume: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, MarketDataError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let has_close = find("Close").is_some() || find("Adj Close").is_some();
        let date = find("Date")
            .or_else(|| find("Price").filter(|_| has_close))
            .ok_or_else(|| MarketDataError::MissingColumn {
                column: "Date".to_string(),
            })?;

        let close = find("Close")
            .or_else(|| find("Adj Close"))
            .or_else(|| find("Price").filter(|idx| *idx != date))
            .ok_or_else(|| MarketDataError::MissingColumn {
                column: "Close".to_string(),
            })?;

        Ok(Self {
            date,
            close,
            open: find("Open"),
            high: find("High"),
            low: find("Low"),
            volume: find("Volume"),
        })
    }
}

fn parse_date(field: &str) -> Option<NaiveDate> {
    let field = field.trim();
    // "2024-01-02" or "2024-01-02 00:00:00+00:00"
    let day = field.get(..10).unwrap_or(field);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn parse_number(record: &StringRecord, idx: Option<usize>) -> f64 {
    idx.and_then(|i| record.get(i))
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

pub fn read_price_bars<R: Read>(reader: R) -> Result<Vec<PriceBar>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers().context("Failed to read CSV header")?.clone();
    let columns = Columns::resolve(&headers)?;

    for (name, idx) in [
        ("Open", columns.open),
        ("High", columns.high),
        ("Low", columns.low),
        ("Volume", columns.volume),
    ] {
        if idx.is_none() {
            warn!("Column '{}' is missing. Filling with 0.", name);
        }
    }

    let mut bars = Vec::new();
    let mut skipped = 0usize;
    for result in rdr.records() {
        let record = result.context("Failed to read CSV row")?;

        let date = record.get(columns.date).and_then(parse_date);
        let close = record
            .get(columns.close)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|c| c.is_finite());

        match (date, close) {
            (Some(date), Some(close)) => bars.push(PriceBar {
                date,
                open: parse_number(&record, columns.open),
                high: parse_number(&record, columns.high),
                low: parse_number(&record, columns.low),
                close,
                volume: parse_number(&record, columns.volume),
            }),
            _ => skipped += 1,
        }
    }

    bars.sort_by_key(|b| b.date);
    let before = bars.len();
    // Keep the last row seen for a repeated date
    let mut deduped: Vec<PriceBar> = Vec::with_capacity(bars.len());
    for bar in bars {
        match deduped.last_mut() {
            Some(last) if last.date == bar.date => *last = bar,
            _ => deduped.push(bar),
        }
    }
    if deduped.len() < before {
        warn!("Dropped {} rows with duplicate dates", before - deduped.len());
    }
    if skipped > 0 {
        warn!("Skipped {} unparseable rows", skipped);
    }

    Ok(deduped)
}

pub fn load_price_bars(path: &Path) -> Result<Vec<PriceBar>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open price data {:?}", path))?;
    let bars = read_price_bars(BufReader::new(file))
        .with_context(|| format!("Failed to load price data {:?}", path))?;
    info!("Loaded {} daily bars from {:?}", bars.len(), path);
    Ok(bars)
}

pub fn load_price_series(path: &Path) -> Result<PriceSeries> {
    let bars = load_price_bars(path)?;
    let series = PriceSeries::from_bars(&bars)
        .with_context(|| format!("Invalid price series in {:?}", path))?;
    Ok(series)
}
