/// One row of an energy time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub time_ns: f64,
    pub energy_ev: f64,
}

/// Average energy per snapshot, in the order the snapshots were processed.
///
/// Points are never re-sorted by time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    points: Vec<SeriesPoint>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, time_ns: f64, energy_ev: f64) {
        self.points.push(SeriesPoint { time_ns, energy_ev });
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&SeriesPoint> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesPoint> {
        self.points.iter()
    }
}

impl FromIterator<(f64, f64)> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self {
            points: iter
                .into_iter()
                .map(|(time_ns, energy_ev)| SeriesPoint { time_ns, energy_ev })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a SeriesPoint;
    type IntoIter = std::slice::Iter<'a, SeriesPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
