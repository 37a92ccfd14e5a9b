//! Number theory helpers

/// Greatest common divisor, always non-negative
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, 0 when either argument is 0
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b) * b).abs()
}

/// Least common multiple of all `numbers`, `None` when there are none
///
/// ```
/// use aoc_solutions::utils::math::lcm_all;
///
/// assert_eq!(lcm_all([4, 6, 10]), Some(60));
/// assert_eq!(lcm_all(std::iter::empty()), None);
/// ```
pub fn lcm_all<I>(numbers: I) -> Option<i64>
where
    I: IntoIterator<Item = i64>,
{
    numbers.into_iter().reduce(lcm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(-4, 6), 12);
        assert_eq!(lcm(0, 6), 0);
        assert_eq!(lcm_all([2, 3, 4, 5, 6]), Some(60));
        assert_eq!(lcm_all([13]), Some(13));
    }

    proptest! {
        #[test]
        fn prop_lcm_is_common_multiple(a in 1..10_000i64, b in 1..10_000i64) {
            let m = lcm(a, b);
            prop_assert_eq!(m % a, 0);
            prop_assert_eq!(m % b, 0);
            prop_assert_eq!(m * gcd(a, b), a * b);
        }
    }
}
