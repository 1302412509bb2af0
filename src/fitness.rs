//! Closed-tour length evaluation.
//!
//! Lower is better. Tour length is invariant under rotation of the
//! order and under full reversal — both represent the same physical
//! tour — so equal fitness does not imply equal orders.

use crate::cities::CityTable;

/// Total length of the closed tour that visits `order` and returns to
/// its starting city.
///
/// Sums the distance of each consecutive leg plus the closing leg from
/// the last city back to the first.
///
/// # Panics
/// Panics if `order` references an index outside the table.
pub fn tour_length(cities: &CityTable, order: &[usize]) -> f64 {
    let n = order.len();
    if n < 2 {
        return 0.0;
    }
    let mut length = 0.0;
    for i in 0..n - 1 {
        length += cities.distance(order[i], order[i + 1]);
    }
    length + cities.distance(order[n - 1], order[0])
}
