use crate::isqrt;

#[derive(Debug, Clone)]
pub struct SqrtExpansion {
    n: u64,
    a0: u64,
    m: u64,
    d: u64,
    a: u64,
    started: bool,
}

impl SqrtExpansion {
    pub fn new(n: u64) -> Option<Self> {
        let a0 = isqrt(n);
        if a0 * a0 == n {
            return None;
        }
        Some(SqrtExpansion { n, a0, m: 0, d: 1, a: a0, started: false })
    }
}

// m' = d * a - m, d' = (n - m'^2) / d, a' = (a0 + m') / d'
impl Iterator for SqrtExpansion {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if !self.started {
            self.started = true;
            return Some(self.a0);
        }

        let m = self.d * self.a - self.m;
        let d = (self.n - m * m) / self.d;
        let a = (self.a0 + m) / d;

        self.m = m;
        self.d = d;
        self.a = a;
        Some(a)
    }
}

pub fn exact_period(n: u64) -> Option<(u64, Vec<u64>)> {
    let mut expansion = SqrtExpansion::new(n)?;
    let a0 = expansion.next()?;

    let mut period = Vec::new();
    for a in expansion {
        period.push(a);
        if a == 2 * a0 {
            break;
        }
    }
    Some((a0, period))
}


#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    use super::*;
    use crate::utils::is_perfect_square;

    #[test]
    fn test_known_periods() {
        assert_eq!(exact_period(2), Some((1, vec![2])));
        assert_eq!(exact_period(3), Some((1, vec![1, 2])));
        assert_eq!(exact_period(7), Some((2, vec![1, 1, 1, 4])));
        assert_eq!(exact_period(13), Some((3, vec![1, 1, 1, 1, 6])));
        assert_eq!(exact_period(23), Some((4, vec![1, 3, 1, 8])));
        assert_eq!(exact_period(94), Some((9, vec![1, 2, 3, 1, 1, 5, 1, 8, 1, 5, 1, 1, 3, 2, 1, 18])));
    }

    #[test]
    fn test_perfect_squares_rejected() {
        for r in 0..50u64 {
            assert!(exact_period(r * r).is_none(), "{} is a square", r * r);
            assert!(SqrtExpansion::new(r * r).is_none());
        }
    }

    #[test]
    fn test_iterator_repeats_period() {
        let terms = SqrtExpansion::new(7).unwrap().take(9).collect::<Vec<_>>();
        assert_eq!(terms, vec![2, 1, 1, 1, 4, 1, 1, 1, 4]);
    }

    #[test]
    fn test_period_shape_random() {
        let mut rng = StdRng::seed_from_u64(64);
        for _ in 0..2000 {
            let n = rng.gen_range(2..1_000_000_000u64);
            if is_perfect_square(n) {
                continue;
            }
            let (a0, period) = exact_period(n).unwrap();
            assert_eq!(a0, isqrt(n));
            assert_eq!(*period.last().unwrap(), 2 * a0, "n = {}", n);

            let body = &period[..period.len() - 1];
            let reversed = body.iter().rev().copied().collect::<Vec<_>>();
            assert_eq!(body, &reversed[..], "n = {} period body is not a palindrome", n);
            assert!(body.iter().all(|&a| a >= 1 && a <= a0), "n = {}", n);
        }
    }

    #[test]
    fn test_large_n() {
        let r = 3_000_000_000u64;
        assert_eq!(exact_period(r * r + 1), Some((r, vec![2 * r])));
        assert_eq!(exact_period(r * r - 1).map(|(_, p)| p), Some(vec![1, 2 * (r - 1)]));
    }
}
