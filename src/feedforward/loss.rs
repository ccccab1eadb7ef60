use ndarray::{Array2, ArrayView2, ShapeError};

/// Views `labels` with the shape of the output `al`.
///
/// Labels are reshaped, not validated: any layout holding the same number of values
/// is accepted, a different number fails with ndarray's `ShapeError`.
pub fn labels_like<'y>(
    al: &Array2<f64>,
    labels: &'y Array2<f64>,
) -> Result<ArrayView2<'y, f64>, ShapeError> {
    labels.view().into_shape(al.raw_dim())
}

/// Binary cross-entropy of the output `al` given the `labels`, averaged over the examples:
/// `-1/m * sum(Y * log(AL) + (1 - Y) * log(1 - AL))`.
///
/// Outputs saturated to exactly `0.0` or `1.0` make the result infinite or NaN;
/// this is not guarded against.
///
/// # Examples
/// ```
/// # use ndarray::array;
/// # use rpdeepnet::feedforward::cost;
/// let al = array![[0.5, 0.5]];
/// let y = array![[1.0, 0.0]];
/// let c = cost(&al, &y).unwrap();
/// assert!((c - std::f64::consts::LN_2).abs() < 1e-12);
/// ```
pub fn cost(al: &Array2<f64>, labels: &Array2<f64>) -> Result<f64, ShapeError> {
    let y = labels_like(al, labels)?;
    let m = al.ncols() as f64;

    let log_likelihood =
        &y * &al.mapv(f64::ln) + &(1.0 - &y) * &al.mapv(|a| (1.0 - a).ln());

    Ok(-log_likelihood.sum() / m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn known_value() {
        let al = array![[0.8, 0.9, 0.4]];
        let y = array![[1.0, 1.0, 0.0]];
        let expected = -(0.8f64.ln() + 0.9f64.ln() + 0.6f64.ln()) / 3.0;
        assert_abs_diff_eq!(cost(&al, &y).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn symmetric_under_flip() {
        let al = array![[0.8, 0.9, 0.4, 0.1, 0.55]];
        let y = array![[1.0, 0.0, 0.0, 1.0, 1.0]];
        let flipped = cost(&(1.0 - &al), &(1.0 - &y)).unwrap();
        assert_abs_diff_eq!(cost(&al, &y).unwrap(), flipped, epsilon = 1e-12);
    }

    #[test]
    fn perfect_predictions_approach_zero() {
        let y = array![[1.0, 0.0]];
        let close = cost(&array![[0.999999, 0.000001]], &y).unwrap();
        let far = cost(&array![[0.6, 0.4]], &y).unwrap();
        assert!(close > 0.0);
        assert!(close < far);
    }

    #[test]
    fn labels_are_reshaped() {
        let al = array![[0.8, 0.3]];
        let column = array![[1.0], [0.0]];
        let row = array![[1.0, 0.0]];
        assert_eq!(cost(&al, &column).unwrap(), cost(&al, &row).unwrap());
    }

    #[test]
    fn wrong_label_count_fails() {
        let al = array![[0.8, 0.3]];
        let y = array![[1.0, 0.0, 1.0]];
        assert!(cost(&al, &y).is_err());
    }

    #[test]
    fn saturation_is_not_hidden() {
        // 0 * log(0) is NaN, 1 * log(0) is infinite
        let c = cost(&array![[1.0, 0.5]], &array![[1.0, 1.0]]).unwrap();
        assert!(c.is_nan());
        let c = cost(&array![[0.0, 0.5]], &array![[1.0, 1.0]]).unwrap();
        assert!(c.is_infinite() || c.is_nan());
    }
}
