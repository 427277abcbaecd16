pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }

    // float guess, then integer newton steps
    let mut x = (n as f64).sqrt() as u64;
    loop {
        let y = (x + n / x) / 2;
        if y == x || y == x + 1 {
            break;
        }
        x = y;
    }

    while x.checked_mul(x).map_or(true, |sq| sq > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).map_or(false, |sq| sq <= n) {
        x += 1;
    }
    x
}

pub fn is_perfect_square(n: u64) -> bool {
    let r = isqrt(n);
    r * r == n
}

pub fn non_squares(from: u64) -> impl Iterator<Item=u64> {
    (from..).filter(|&n| !is_perfect_square(n))
}

pub fn join_terms(terms: &[u64]) -> String {
    terms.iter().map(|x| x.to_string()).collect::<Vec<_>>().join(",")
}
