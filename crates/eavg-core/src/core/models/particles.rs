use nalgebra::{Dyn, OMatrix, Point3, U7, Vector3};
use thiserror::Error;

/// Row-per-particle storage with the seven attribute columns.
pub type ParticleMatrix = OMatrix<f64, Dyn, U7>;

/// The seven per-particle attributes, in table column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    X,
    Y,
    Z,
    Vx,
    Vy,
    Vz,
    W, // statistical weight
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::X,
        Column::Y,
        Column::Z,
        Column::Vx,
        Column::Vy,
        Column::Vz,
        Column::W,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Dataset name inside a species group of a snapshot file.
    pub fn name(self) -> &'static str {
        match self {
            Column::X => "x",
            Column::Y => "y",
            Column::Z => "z",
            Column::Vx => "Vx",
            Column::Vy => "Vy",
            Column::Vz => "Vz",
            Column::W => "w",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Column '{column}' has {found} values, expected {expected} (length of column 'x')")]
    ColumnLengthMismatch {
        column: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Particles of one species in one snapshot.
///
/// Columns are always `x, y, z, Vx, Vy, Vz, w`. Rows have no identity beyond
/// their position and no ordering is implied.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleTable {
    data: ParticleMatrix,
}

impl ParticleTable {
    pub fn empty() -> Self {
        Self {
            data: ParticleMatrix::zeros(0),
        }
    }

    /// Assembles a table from the seven columns given in [`Column::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnLengthMismatch`] if any column differs in
    /// length from the `x` column.
    pub fn from_columns(columns: [Vec<f64>; 7]) -> Result<Self, TableError> {
        let rows = columns[0].len();
        for (column, values) in Column::ALL.iter().zip(&columns) {
            if values.len() != rows {
                return Err(TableError::ColumnLengthMismatch {
                    column: column.name(),
                    expected: rows,
                    found: values.len(),
                });
            }
        }
        Ok(Self {
            data: ParticleMatrix::from_fn(rows, |r, c| columns[c][r]),
        })
    }

    pub fn from_rows(rows: &[[f64; 7]]) -> Self {
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Self {
            data: ParticleMatrix::from_row_slice(&flat),
        }
    }

    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// All values of one attribute, one entry per particle.
    pub fn column(&self, column: Column) -> &[f64] {
        let rows = self.len();
        let start = column.index() * rows;
        &self.data.as_slice()[start..start + rows]
    }

    pub fn row(&self, row: usize) -> [f64; 7] {
        std::array::from_fn(|c| self.data[(row, c)])
    }

    pub fn position(&self, row: usize) -> Point3<f64> {
        Point3::new(
            self.data[(row, Column::X.index())],
            self.data[(row, Column::Y.index())],
            self.data[(row, Column::Z.index())],
        )
    }

    pub fn velocity(&self, row: usize) -> Vector3<f64> {
        Vector3::new(
            self.data[(row, Column::Vx.index())],
            self.data[(row, Column::Vy.index())],
            self.data[(row, Column::Vz.index())],
        )
    }

    pub fn weight(&self, row: usize) -> f64 {
        self.data[(row, Column::W.index())]
    }

    /// Copies the given rows, in the given order, into a new table.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range.
    pub fn select_rows(&self, rows: &[usize]) -> Self {
        Self {
            data: self.data.select_rows(rows),
        }
    }
}

impl Default for ParticleTable {
    fn default() -> Self {
        Self::empty()
    }
}
