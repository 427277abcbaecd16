pub const DEFAULT_TERMS: usize = 17;

pub fn float_terms(n: u64, max_terms: usize) -> Vec<u64> {
    let mut result = Vec::with_capacity(max_terms);
    let mut x = (n as f64).sqrt();

    for _ in 0..max_terms.max(1) {
        let a = x.floor();
        result.push(a as u64);

        let frac = x - a;
        if frac == 0.0 {
            break;
        }
        x = 1.0 / frac;
    }
    result
}

fn prefix_equal(one: &[u64], two: &[u64]) -> bool {
    one.iter().zip(two.iter()).all(|(a, b)| a == b)
}

fn is_repeating(l: &[u64], block: &[u64]) -> bool {
    let limit = block.len() * 3 + 1;
    l.iter()
        .take(limit + 1)
        .enumerate()
        .all(|(i, x)| *x == block[i % block.len()])
}

/// Length of the shortest block that the first `3 * len + 2` terms of `l` repeat, if any.
pub fn find_repeats(l: &[u64]) -> Option<usize> {
    for i in 1..l.len() / 2 {
        if prefix_equal(&l[..i], &l[i..(2 * i).min(l.len())]) && is_repeating(l, &l[..i]) {
            return Some(i);
        }
    }
    None
}

pub fn float_period(n: u64, max_terms: usize) -> (u64, Option<Vec<u64>>) {
    let terms = float_terms(n, max_terms);
    let a0 = terms[0];
    let tail = &terms[1..];
    (a0, find_repeats(tail).map(|len| tail[..len].to_vec()))
}
