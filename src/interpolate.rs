use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use tracing::trace;

use crate::{
    error::{RecoveryError, RecoveryResult},
    shares::SharePoint,
};

/// Lagrange basis weight of point `i` evaluated at x = 0, as the unreduced
/// pair (Π_{j≠i} -x_j, Π_{j≠i} (x_i - x_j)).
pub fn lagrange_weight_at_zero(
    points: &[SharePoint],
    i: usize,
) -> RecoveryResult<(BigInt, BigInt)> {
    let xi = points
        .get(i)
        .ok_or_else(|| {
            RecoveryError::malformed(format!("point index {} out of {} points", i, points.len()))
        })?
        .x();
    let mut num = BigInt::one();
    let mut den = BigInt::one();

    for (j, point) in points.iter().enumerate() {
        if j == i {
            continue;
        }
        let xj = point.x();
        let diff = xi - xj;
        if diff.is_zero() {
            return Err(RecoveryError::DuplicateAbscissa(xi.clone()));
        }
        num *= -xj;
        den *= diff;
    }
    Ok((num, den))
}

/// Evaluates at x = 0 the unique polynomial of degree < `points.len()`
/// passing through `points`, i.e. recovers the shared secret.
///
/// Each term y_i * num_i / den_i is kept as an exact fraction and the terms
/// are summed over a common denominator. The final quotient must leave no
/// remainder; otherwise the points do not lie on one integer-coefficient
/// polynomial and `InconsistentShares` is returned.
pub fn interpolate_at_zero(points: &[SharePoint]) -> RecoveryResult<BigInt> {
    if points.is_empty() {
        return Err(RecoveryError::InsufficientShares {
            threshold: 1,
            available: 0,
        });
    }

    let mut acc_num = BigInt::zero();
    let mut acc_den = BigInt::one();

    for (i, point) in points.iter().enumerate() {
        let (num, den) = lagrange_weight_at_zero(points, i)?;
        let (term_num, term_den) = reduce(point.y() * num, den);
        trace!(x = %point.x(), %term_num, %term_den, "lagrange term");

        let (sum_num, sum_den) = reduce(
            &acc_num * &term_den + term_num * &acc_den,
            acc_den * term_den,
        );
        acc_num = sum_num;
        acc_den = sum_den;
    }

    let (secret, remainder) = acc_num.div_rem(&acc_den);
    if !remainder.is_zero() {
        return Err(RecoveryError::InconsistentShares);
    }
    Ok(secret)
}

// Lowest terms with a positive denominator. `den` must be non-zero.
fn reduce(num: BigInt, den: BigInt) -> (BigInt, BigInt) {
    let (num, den) = if den.sign() == Sign::Minus {
        (-num, -den)
    } else {
        (num, den)
    };
    let g = num.gcd(&den);
    (num / &g, den / &g)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(x: i64) -> SharePoint {
        SharePoint::new(x, 5 + 3 * x)
    }

    #[test]
    fn weights_for_consecutive_abscissae() {
        let points = [line(1), line(2), line(3)];
        let (num, den) = lagrange_weight_at_zero(&points, 0).unwrap();
        assert_eq!(num, BigInt::from(6));
        assert_eq!(den, BigInt::from(2));
        let (num, den) = lagrange_weight_at_zero(&points, 1).unwrap();
        assert_eq!(num, BigInt::from(3));
        assert_eq!(den, BigInt::from(-1));
    }

    #[test]
    fn weight_index_out_of_range() {
        let points = [line(1), line(2)];
        assert!(matches!(
            lagrange_weight_at_zero(&points, 2),
            Err(RecoveryError::MalformedInput(_))
        ));
        assert!(matches!(
            lagrange_weight_at_zero(&[], 0),
            Err(RecoveryError::MalformedInput(_))
        ));
    }

    #[test]
    fn recovers_constant_term_of_line() {
        let points = [line(1), line(2), line(3)];
        assert_eq!(interpolate_at_zero(&points).unwrap(), BigInt::from(5));
    }

    #[test]
    fn single_point_is_the_secret() {
        let points = [SharePoint::new(7, 42)];
        assert_eq!(interpolate_at_zero(&points).unwrap(), BigInt::from(42));
    }

    #[test]
    fn fractional_terms_still_sum_exactly() {
        // 11 * -5 / -3 is not an integer, yet f(0) = 5 is.
        let points = [line(2), line(5)];
        assert_eq!(interpolate_at_zero(&points).unwrap(), BigInt::from(5));
    }

    #[test]
    fn handles_negative_abscissae_and_values() {
        // f(x) = -7 + 2x - x^2
        let f = |x: i64| SharePoint::new(x, -7 + 2 * x - x * x);
        let points = [f(-3), f(4), f(9)];
        assert_eq!(interpolate_at_zero(&points).unwrap(), BigInt::from(-7));
    }

    #[test]
    fn detects_points_from_different_polynomials() {
        // (1, 8) lies on 5 + 3x, (3, 15) on 6 + 3x: the line through them hits 9/2.
        let points = [SharePoint::new(1, 8), SharePoint::new(3, 15)];
        assert!(matches!(interpolate_at_zero(&points), Err(RecoveryError::InconsistentShares)));
    }

    #[test]
    fn rejects_duplicate_abscissa() {
        let points = [line(1), line(4), SharePoint::new(1, 9)];
        match interpolate_at_zero(&points) {
            Err(RecoveryError::DuplicateAbscissa(x)) => assert_eq!(x, BigInt::from(1)),
            other => panic!("expected DuplicateAbscissa, got {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            interpolate_at_zero(&[]),
            Err(RecoveryError::InsufficientShares { threshold: 1, available: 0 })
        ));
    }
}
