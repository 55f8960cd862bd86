//! Trade-size divisor.

/// Trial-division primality check. Values below 2 are not prime.
#[must_use]
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// How many identical trades an order is split into.
///
/// A prime smallest quantity cannot be split evenly across the other legs
/// in general, so the order goes in as a single trade.
#[must_use]
pub const fn number_of_trades(min_quantity: u64) -> u64 {
    if is_prime(min_quantity) {
        1
    } else {
        min_quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, false)]
    #[test_case(1, false)]
    #[test_case(2, true)]
    #[test_case(3, true)]
    #[test_case(4, false)]
    #[test_case(5, true)]
    #[test_case(6, false)]
    #[test_case(7, true)]
    #[test_case(9, false)]
    #[test_case(25, false)]
    #[test_case(97, true)]
    fn primality(n: u64, expected: bool) {
        assert_eq!(is_prime(n), expected);
    }

    #[test_case(1, 1 ; "one")]
    #[test_case(2, 1 ; "prime")]
    #[test_case(4, 4 ; "composite")]
    #[test_case(10, 10 ; "ten")]
    fn trades(min_quantity: u64, expected: u64) {
        assert_eq!(number_of_trades(min_quantity), expected);
    }
}
