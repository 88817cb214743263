//! Parameters for scalar field dilation.

use std::ops::Range;

use crate::error::{DilateError, DilateResult};

/// Which input columns to dilate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnSelection {
    /// Every column; the output has as many columns as the input.
    #[default]
    All,
    /// One column; the output has exactly one column.
    Single(usize),
}

impl ColumnSelection {
    /// Interpret a signed column index where `-1` means "all columns".
    ///
    /// # Errors
    ///
    /// Returns [`DilateError::InvalidColumn`] for any other negative index
    /// or an index `>= column_count`.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_dilate::ColumnSelection;
    ///
    /// assert_eq!(ColumnSelection::from_signed(-1, 3).ok(), Some(ColumnSelection::All));
    /// assert_eq!(ColumnSelection::from_signed(2, 3).ok(), Some(ColumnSelection::Single(2)));
    /// assert!(ColumnSelection::from_signed(3, 3).is_err());
    /// assert!(ColumnSelection::from_signed(-2, 3).is_err());
    /// ```
    pub fn from_signed(index: i64, column_count: usize) -> DilateResult<Self> {
        if index == -1 {
            return Ok(Self::All);
        }
        match usize::try_from(index) {
            Ok(column) if column < column_count => Ok(Self::Single(column)),
            _ => Err(DilateError::InvalidColumn {
                column: index,
                column_count,
            }),
        }
    }

    /// Input column indices covered by this selection.
    #[must_use]
    pub const fn indices(self, column_count: usize) -> Range<usize> {
        match self {
            Self::All => 0..column_count,
            Self::Single(column) => column..column + 1,
        }
    }
}

/// Parameters for [`dilate`](crate::dilate).
///
/// # Example
///
/// ```
/// use mesh_dilate::{ColumnSelection, DilationParams};
///
/// let params = DilationParams::with_distance(4.0)
///     .column(ColumnSelection::Single(1))
///     .parallel(false);
///
/// assert!((params.distance - 4.0).abs() < f64::EPSILON);
/// assert_eq!(params.column, ColumnSelection::Single(1));
/// assert!(!params.parallel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DilationParams {
    /// Geodesic search radius for good nodes, in mesh units.
    pub distance: f64,

    /// Columns to process.
    pub column: ColumnSelection,

    /// Process the nodes of a column on the rayon thread pool.
    /// Results are identical either way.
    pub parallel: bool,
}

impl Default for DilationParams {
    fn default() -> Self {
        Self {
            distance: 0.0,
            column: ColumnSelection::All,
            parallel: true,
        }
    }
}

impl DilationParams {
    /// Create params with a search radius and all other settings default.
    #[must_use]
    pub const fn with_distance(distance: f64) -> Self {
        Self {
            distance,
            column: ColumnSelection::All,
            parallel: true,
        }
    }

    /// Set the search radius.
    #[must_use]
    pub const fn distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Set the column selection.
    #[must_use]
    pub const fn column(mut self, column: ColumnSelection) -> Self {
        self.column = column;
        self
    }

    /// Enable or disable parallel processing.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
