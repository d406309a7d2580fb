use anyhow::{Result, anyhow};
use ta::Next;
use ta::indicators::RelativeStrengthIndex;

/// RSI over a close series using the `ta` implementation.
///
/// `ta` smooths gains and losses with a standard EMA rather than Wilder's
/// smoothing, so values close to 30 or 70 can differ from other charting tools.
#[derive(Debug, Clone, Copy)]
pub struct RsiCalculator {
    period: usize,
}

impl RsiCalculator {
    pub fn new(period: usize) -> Result<Self> {
        RelativeStrengthIndex::new(period)
            .map_err(|e| anyhow!("Invalid RSI period {}: {:?}", period, e))?;
        Ok(Self { period })
    }

    /// One value per close; the first `period` values are warm-up and `None`.
    pub fn series(&self, closes: &[f64]) -> Vec<Option<f64>> {
        let mut rsi = match RelativeStrengthIndex::new(self.period) {
            Ok(rsi) => rsi,
            Err(_) => return vec![None; closes.len()],
        };

        closes
            .iter()
            .enumerate()
            .map(|(i, close)| {
                let value = rsi.next(*close);
                (i >= self.period).then_some(value)
            })
            .collect()
    }

    /// Most recent RSI, if the series is longer than the warm-up.
    pub fn latest(&self, closes: &[f64]) -> Option<f64> {
        self.series(closes).into_iter().rev().flatten().next()
    }
}
