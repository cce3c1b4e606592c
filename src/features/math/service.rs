use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// First `count` Fibonacci numbers, starting `0, 1, 1, 2, ...`.
pub fn fibonacci(count: usize) -> Vec<BigUint> {
    let mut sequence = Vec::with_capacity(count);
    let mut current = BigUint::zero();
    let mut next = BigUint::one();

    for _ in 0..count {
        let following = &current + &next;
        sequence.push(std::mem::replace(&mut current, next));
        next = following;
    }

    sequence
}

pub fn is_prime(value: i64) -> bool {
    if value < 2 {
        return false;
    }
    if value == 2 {
        return true;
    }
    if value % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    while divisor <= value / divisor {
        if value % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}

pub fn primes(values: &[i64]) -> Vec<i64> {
    values.iter().copied().filter(|value| is_prime(*value)).collect()
}

/// Euclid on absolute values; `gcd(a, 0) == |a|`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.magnitude().clone();
    let mut b = b.magnitude().clone();

    while !b.is_zero() {
        let remainder = &a % &b;
        a = b;
        b = remainder;
    }

    BigInt::from(a)
}

fn lcm_pair(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }

    let divisor = gcd(a, b);
    let product: BigInt = (a / divisor) * b;
    BigInt::from(product.magnitude().clone())
}

pub fn lcm(values: &[BigInt]) -> BigInt {
    values
        .iter()
        .fold(BigInt::one(), |acc, value| lcm_pair(&acc, value))
}

/// Seeded with the first element, so a single element is returned as-is.
pub fn hcf(values: &[BigInt]) -> Option<BigInt> {
    let (first, rest) = values.split_first()?;

    Some(rest.iter().fold(first.clone(), |acc, value| gcd(&acc, value)))
}
