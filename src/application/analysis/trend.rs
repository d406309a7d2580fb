use crate::domain::forecast::ForecastTrajectory;
use crate::domain::signals::TrendLabel;

/// Direction of the net move between the first and last price.
///
/// Intermediate swings are ignored. Fewer than two prices, an exact zero
/// displacement or a non-finite one are all `Neutral`.
pub fn classify(prices: &[f64]) -> TrendLabel {
    let (first, last) = match (prices.first(), prices.last()) {
        (Some(first), Some(last)) if prices.len() >= 2 => (*first, *last),
        _ => return TrendLabel::Neutral,
    };

    let slope = last - first;
    if slope > 0.0 {
        TrendLabel::Up
    } else if slope < 0.0 {
        TrendLabel::Down
    } else {
        TrendLabel::Neutral
    }
}

pub fn classify_trajectory(trajectory: &ForecastTrajectory) -> TrendLabel {
    classify(&trajectory.prices())
}
