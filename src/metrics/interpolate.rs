//! Piecewise-linear interpolation over validated breakpoint tables, shared by
//! every pollutant sub-index.

use crate::metrics::error::TableError;

/// An ordered table of concentration breakpoints and the index values they
/// map to.
///
/// `indices` holds one entry more than `breakpoints`: its last element is the
/// cap returned for concentrations beyond the final breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointTable {
    breakpoints: Vec<f64>,
    indices: Vec<f64>,
}

impl BreakpointTable {
    /// Builds a table after checking that both sequences are finite and
    /// strictly increasing and that their lengths line up.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] describing the first problem found.
    ///
    /// # Examples
    ///
    /// ```
    /// use skydeck::BreakpointTable;
    ///
    /// let table = BreakpointTable::new(
    ///     &[0.0, 30.0, 60.0, 90.0, 120.0, 250.0],
    ///     &[0.0, 50.0, 100.0, 200.0, 300.0, 400.0, 500.0],
    /// ).unwrap();
    /// assert_eq!(table.interpolate(45.0), 75.0);
    ///
    /// assert!(BreakpointTable::new(&[0.0, 30.0, 30.0], &[0.0, 50.0, 100.0, 150.0]).is_err());
    /// ```
    pub fn new(breakpoints: &[f64], indices: &[f64]) -> Result<Self, TableError> {
        if breakpoints.len() < 2 {
            return Err(TableError::TooFewBreakpoints(breakpoints.len()));
        }
        if indices.len() != breakpoints.len() + 1 {
            return Err(TableError::LengthMismatch {
                breakpoints: breakpoints.len(),
                indices: indices.len(),
            });
        }
        check_strictly_increasing("Breakpoint", breakpoints)?;
        check_strictly_increasing("Index", indices)?;

        Ok(Self {
            breakpoints: breakpoints.to_vec(),
            indices: indices.to_vec(),
        })
    }

    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    pub fn indices(&self) -> &[f64] {
        &self.indices
    }

    /// Interpolates the index value for a concentration.
    ///
    /// Values at or below the first breakpoint give `0`. Between breakpoints the
    /// index is interpolated linearly and rounded to the nearest integer, so an
    /// exact breakpoint yields exactly its index. Values above the last
    /// breakpoint give the table's cap.
    pub fn interpolate(&self, value: f64) -> f64 {
        if value.is_nan() || value <= self.breakpoints[0] {
            return 0.0;
        }
        for i in 1..self.breakpoints.len() {
            if value <= self.breakpoints[i] {
                let (bp_low, bp_high) = (self.breakpoints[i - 1], self.breakpoints[i]);
                let (index_low, index_high) = (self.indices[i - 1], self.indices[i]);
                // fraction first: it is exactly 1.0 at the upper breakpoint
                let fraction = (value - bp_low) / (bp_high - bp_low);
                return (index_low + (index_high - index_low) * fraction).round();
            }
        }
        self.indices[self.indices.len() - 1]
    }
}

fn check_strictly_increasing(table: &'static str, values: &[f64]) -> Result<(), TableError> {
    if let Some(position) = values.iter().position(|v| !v.is_finite()) {
        return Err(TableError::NonFinite { table, position });
    }
    match values.windows(2).position(|pair| pair[1] <= pair[0]) {
        Some(position) => Err(TableError::NotStrictlyIncreasing {
            table,
            position: position + 1,
        }),
        None => Ok(()),
    }
}

/// Convenience wrapper that validates the raw arrays before interpolating.
///
/// # Errors
///
/// Returns a [`TableError`] if the arrays do not form a valid table.
pub fn interpolate(value: f64, breakpoints: &[f64], indices: &[f64]) -> Result<f64, TableError> {
    Ok(BreakpointTable::new(breakpoints, indices)?.interpolate(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BREAKPOINTS: [f64; 6] = [0.0, 30.0, 60.0, 90.0, 120.0, 250.0];
    const INDICES: [f64; 7] = [0.0, 50.0, 100.0, 200.0, 300.0, 400.0, 500.0];

    fn table() -> BreakpointTable {
        BreakpointTable::new(&BREAKPOINTS, &INDICES).unwrap()
    }

    #[test]
    fn test_zero_and_below_floor_give_zero() {
        let table = table();
        assert_eq!(table.interpolate(0.0), 0.0);
        assert_eq!(table.interpolate(-12.0), 0.0);
        assert_eq!(table.interpolate(f64::NAN), 0.0);
    }

    #[test]
    fn test_exact_breakpoints_hit_their_index() {
        let table = table();
        for (i, bp) in BREAKPOINTS.iter().enumerate() {
            assert_eq!(table.interpolate(*bp), INDICES[i], "breakpoint {}", bp);
        }
    }

    #[test]
    fn test_exact_breakpoints_on_awkward_spacing() {
        let table = BreakpointTable::new(
            &[0.0, 0.1, 0.3, 0.7, 1.9, 3.3],
            &[0.0, 7.0, 13.0, 29.0, 61.0, 97.0, 131.0],
        )
        .unwrap();
        for (bp, index) in table.breakpoints().iter().zip(table.indices()) {
            assert_eq!(table.interpolate(*bp), *index);
        }
    }

    #[test]
    fn test_interpolates_and_rounds_between_breakpoints() {
        let table = table();
        assert_eq!(table.interpolate(15.0), 25.0);
        assert_eq!(table.interpolate(1.0), 2.0); // 1.67
        assert_eq!(table.interpolate(75.0), 150.0);
        assert_eq!(table.interpolate(185.0), 350.0);
        assert_eq!(table.interpolate(0.6), 1.0);
    }

    #[test]
    fn test_above_last_breakpoint_returns_cap() {
        let table = table();
        assert_eq!(table.interpolate(250.000_1), 500.0);
        assert_eq!(table.interpolate(10_000.0), 500.0);
        assert_eq!(table.interpolate(f64::INFINITY), 500.0);
    }

    #[test]
    fn test_rejects_malformed_tables() {
        assert_eq!(
            BreakpointTable::new(&[0.0], &[0.0, 1.0]),
            Err(TableError::TooFewBreakpoints(1))
        );
        assert_eq!(
            BreakpointTable::new(&BREAKPOINTS, &INDICES[..6]),
            Err(TableError::LengthMismatch {
                breakpoints: 6,
                indices: 6
            })
        );
        assert_eq!(
            BreakpointTable::new(&[0.0, 30.0, 20.0], &[0.0, 1.0, 2.0, 3.0]),
            Err(TableError::NotStrictlyIncreasing {
                table: "Breakpoint",
                position: 2
            })
        );
        assert_eq!(
            BreakpointTable::new(&[0.0, 1.0, 2.0], &[0.0, 5.0, 5.0, 6.0]),
            Err(TableError::NotStrictlyIncreasing {
                table: "Index",
                position: 2
            })
        );
        assert_eq!(
            BreakpointTable::new(&[0.0, f64::NAN], &[0.0, 1.0, 2.0]),
            Err(TableError::NonFinite {
                table: "Breakpoint",
                position: 1
            })
        );
    }

    #[test]
    fn test_free_function_validates() {
        assert_eq!(interpolate(60.0, &BREAKPOINTS, &INDICES), Ok(100.0));
        assert!(interpolate(60.0, &[0.0, 0.0], &[0.0, 1.0, 2.0]).is_err());
    }
}
