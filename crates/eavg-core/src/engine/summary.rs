use crate::core::models::series::TimeSeries;
use tracing::warn;

/// Combines per-species series into one summary series.
///
/// At each index the value is the sum of every species' energy divided by
/// the number of species whose energy is strictly positive. The divisor
/// ignores zero (no-data) entries while the numerator does not; with
/// non-negative energies the two agree. An index with no positive energy
/// has nothing to average and yields NaN, which the series writer prints as
/// `nan`. Times are taken from the first series.
pub fn summarize<'a, I>(series: I) -> TimeSeries
where
    I: IntoIterator<Item = &'a TimeSeries>,
{
    let series: Vec<&TimeSeries> = series.into_iter().collect();
    let Some(first) = series.first() else {
        return TimeSeries::new();
    };

    let mut summary = TimeSeries::with_capacity(first.len());
    for (index, point) in first.iter().enumerate() {
        let energies: Vec<f64> = series
            .iter()
            .filter_map(|s| s.get(index))
            .map(|p| p.energy_ev)
            .collect();

        let total: f64 = energies.iter().sum();
        let positive = energies.iter().filter(|&&e| e > 0.0).count();

        let value = if positive == 0 {
            warn!(
                time_ns = point.time_ns,
                "No species has a positive energy; summary value is NaN."
            );
            f64::NAN
        } else {
            total / positive as f64
        };
        summary.push(point.time_ns, value);
    }
    summary
}
