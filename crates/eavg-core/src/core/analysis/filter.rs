use crate::core::models::interval::{BoundingBox, Interval};
use crate::core::models::particles::{Column, ParticleTable};

/// Marks every value strictly inside `interval`.
pub fn range_mask<'a, I>(values: I, interval: &Interval) -> Vec<bool>
where
    I: IntoIterator<Item = &'a f64>,
{
    values.into_iter().map(|&v| interval.contains(v)).collect()
}

/// Keeps the particles whose position lies strictly inside `region`.
///
/// The result is a new table with the surviving rows in their original order;
/// `table` itself is left untouched. An empty table is returned as-is.
pub fn spatial_filter(table: &ParticleTable, region: &BoundingBox) -> ParticleTable {
    if table.is_empty() {
        return table.clone();
    }

    let x_mask = range_mask(table.column(Column::X), &region.x);
    let y_mask = range_mask(table.column(Column::Y), &region.y);
    let z_mask = range_mask(table.column(Column::Z), &region.z);

    let keep: Vec<usize> = x_mask
        .iter()
        .zip(&y_mask)
        .zip(&z_mask)
        .enumerate()
        .filter(|(_, ((x, y), z))| **x && **y && **z)
        .map(|(row, _)| row)
        .collect();

    table.select_rows(&keep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn unit_box() -> BoundingBox {
        BoundingBox::new(
            Interval::new(0.0, 1.0),
            Interval::new(0.0, 1.0),
            Interval::new(0.0, 1.0),
        )
    }

    #[test]
    fn range_mask_matches_strict_bounds_for_random_inputs() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let a: f64 = rng.gen_range(-50.0..50.0);
            let b: f64 = rng.gen_range(-50.0..50.0);
            let interval = Interval::new(a.min(b), a.max(b));

            let mut values: Vec<f64> = (0..64).map(|_| rng.gen_range(-60.0..60.0)).collect();
            values.push(interval.lo);
            values.push(interval.hi);

            let mask = range_mask(&values, &interval);
            assert_eq!(mask.len(), values.len());
            for (v, inside) in values.iter().zip(&mask) {
                assert_eq!(*inside, interval.lo < *v && *v < interval.hi, "value {v}");
            }
        }
    }

    #[test]
    fn range_mask_excludes_values_on_the_boundary() {
        let mask = range_mask(&[1.0, 1.5, 2.0], &Interval::new(1.0, 2.0));
        assert_eq!(mask, vec![false, true, false]);
    }

    #[test]
    fn range_mask_of_inverted_interval_is_all_false() {
        let mask = range_mask(&[0.0, 5.0, 10.0], &Interval::new(10.0, 0.0));
        assert_eq!(mask, vec![false, false, false]);
    }

    #[test]
    fn spatial_filter_on_empty_table_returns_it_unchanged() {
        let empty = ParticleTable::empty();
        let filtered = spatial_filter(&empty, &unit_box());
        assert_eq!(filtered, empty);
        assert!(filtered.is_empty());
    }

    #[test]
    fn spatial_filter_keeps_exactly_the_rows_inside_the_box() {
        let table = ParticleTable::from_rows(&[
            [0.5, 0.5, 0.5, 1.0, 0.0, 0.0, 1.0],  // inside
            [1.5, 0.5, 0.5, 2.0, 0.0, 0.0, 1.0],  // x outside
            [0.5, 0.5, 1.0, 3.0, 0.0, 0.0, 1.0],  // z on the bound
            [0.1, 0.9, 0.2, 4.0, 0.0, 0.0, 2.0],  // inside
            [0.5, -0.1, 0.5, 5.0, 0.0, 0.0, 1.0], // y outside
        ]);

        let filtered = spatial_filter(&table, &unit_box());

        let expected = ParticleTable::from_rows(&[
            [0.5, 0.5, 0.5, 1.0, 0.0, 0.0, 1.0],
            [0.1, 0.9, 0.2, 4.0, 0.0, 0.0, 2.0],
        ]);
        assert_eq!(filtered, expected);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn spatial_filter_never_returns_rows_outside_the_box() {
        let mut rng = StdRng::seed_from_u64(42);
        let rows: Vec<[f64; 7]> = (0..500)
            .map(|_| {
                [
                    rng.gen_range(-1.0..2.0),
                    rng.gen_range(-1.0..2.0),
                    rng.gen_range(-1.0..2.0),
                    0.0,
                    0.0,
                    0.0,
                    1.0,
                ]
            })
            .collect();
        let table = ParticleTable::from_rows(&rows);
        let region = unit_box();

        let filtered = spatial_filter(&table, &region);

        let expected_count = (0..table.len())
            .filter(|&row| region.contains(&table.position(row)))
            .count();
        assert_eq!(filtered.len(), expected_count);
        for row in 0..filtered.len() {
            assert!(region.contains(&filtered.position(row)));
        }
    }

    #[test]
    fn spatial_filter_can_remove_every_row() {
        let table = ParticleTable::from_rows(&[[5.0, 5.0, 5.0, 0.0, 0.0, 0.0, 1.0]]);
        let filtered = spatial_filter(&table, &unit_box());
        assert!(filtered.is_empty());
    }
}
