use ibig::{IBig, UBig, ubig};

pub fn pell_convergent(a0: u64, period: &[u64]) -> (UBig, UBig) {
    let mut h = (ubig!(1), UBig::from(a0));
    let mut k = (ubig!(0), ubig!(1));

    // the last term of the period closes the cycle and is not needed
    for &a in period.iter().take(period.len().saturating_sub(1)) {
        let a = UBig::from(a);
        h = (h.1.clone(), &a * &h.1 + &h.0);
        k = (k.1.clone(), &a * &k.1 + &k.0);
    }
    (h.1, k.1)
}

pub fn pell_norm(n: u64, x: &UBig, y: &UBig) -> IBig {
    IBig::from(x * x) - IBig::from(UBig::from(n) * y * y)
}

pub fn pell_check(n: u64, a0: u64, period: &[u64]) -> bool {
    let (x, y) = pell_convergent(a0, period);
    let expected = if period.len() % 2 == 0 { IBig::from(1) } else { IBig::from(-1) };
    pell_norm(n, &x, &y) == expected
}
