use crate::domain::errors::MarketDataError;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// One daily OHLCV bar as delivered by a market-data source or CSV export
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Validated daily close series.
///
/// Dates are strictly increasing and every close is finite and non-negative.
/// The series is read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    dates: Vec<NaiveDate>,
    closes: Vec<f64>,
}

impl PriceSeries {
    pub fn new(points: Vec<(NaiveDate, f64)>) -> Result<Self, MarketDataError> {
        let mut dates = Vec::with_capacity(points.len());
        let mut closes = Vec::with_capacity(points.len());

        for (date, close) in points {
            if !close.is_finite() || close < 0.0 {
                return Err(MarketDataError::InvalidPrice { date, value: close });
            }
            if let Some(&previous) = dates.last() {
                if date <= previous {
                    return Err(MarketDataError::NonIncreasingDates {
                        previous,
                        next: date,
                    });
                }
            }
            dates.push(date);
            closes.push(close);
        }

        Ok(Self { dates, closes })
    }

    pub fn from_bars(bars: &[PriceBar]) -> Result<Self, MarketDataError> {
        Self::new(bars.iter().map(|b| (b.date, b.close)).collect())
    }

    /// Builds a series with one close per calendar day starting at `start`.
    pub fn daily(start: NaiveDate, closes: &[f64]) -> Result<Self, MarketDataError> {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let date = start
                    .checked_add_days(Days::new(i as u64))
                    .unwrap_or(NaiveDate::MAX);
                (date, close)
            })
            .collect();
        Self::new(points)
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// The most recent `n` closes (or all of them when fewer exist).
    pub fn tail(&self, n: usize) -> &[f64] {
        let start = self.closes.len().saturating_sub(n);
        &self.closes[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_rejects_duplicate_dates() {
        let result = PriceSeries::new(vec![(day(1), 10.0), (day(1), 11.0)]);
        assert_eq!(
            result,
            Err(MarketDataError::NonIncreasingDates {
                previous: day(1),
                next: day(1)
            })
        );
    }

    #[test]
    fn test_rejects_negative_and_nan_prices() {
        assert!(PriceSeries::new(vec![(day(1), -1.0)]).is_err());
        assert!(PriceSeries::new(vec![(day(1), f64::NAN)]).is_err());
    }

    #[test]
    fn test_daily_series_and_tail() {
        let series = PriceSeries::daily(day(1), &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(series.len(), 4);
        assert_eq!(series.last_date(), Some(day(4)));
        assert_eq!(series.tail(2), &[3.0, 4.0]);
        assert_eq!(series.tail(10), &[1.0, 2.0, 3.0, 4.0]);
    }
}
