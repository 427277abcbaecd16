use std::fmt;

use rayon::prelude::*;

use crate::{exact_period, float_period, isqrt, join_terms, non_squares, pell_check};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Exact,
    Float { terms: usize },
}

/// Expansion of sqrt(n); `period` is `None` when the float method ran out of terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodResult {
    pub n: u64,
    pub a0: u64,
    pub period: Option<Vec<u64>>,
}

impl PeriodResult {
    pub fn compute(n: u64, method: Method) -> Self {
        let (a0, period) = match method {
            Method::Exact => match exact_period(n) {
                Some((a0, period)) => (a0, Some(period)),
                None => (isqrt(n), None),
            },
            Method::Float { terms } => float_period(n, terms),
        };
        PeriodResult { n, a0, period }
    }

    pub fn is_odd(&self) -> bool {
        self.period.as_ref().map_or(false, |p| p.len() % 2 == 1)
    }
}

impl fmt::Display for PeriodResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.period {
            Some(p) => write!(f, "sqrt({})=[{};({})]", self.n, self.a0, join_terms(p)),
            None => write!(f, "sqrt({})=[{};(?)]", self.n, self.a0),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Survey {
    pub results: Vec<PeriodResult>,
    pub odd: usize,
    pub unresolved: usize,
}

pub fn survey(count: usize, method: Method) -> Survey {
    let candidates = non_squares(2).take(count).collect::<Vec<_>>();
    let results = candidates.into_par_iter()
        .map(|n| PeriodResult::compute(n, method))
        .collect::<Vec<_>>();

    let odd = results.iter().filter(|r| r.is_odd()).count();
    let unresolved = results.iter().filter(|r| r.period.is_none()).count();
    Survey { results, odd, unresolved }
}

pub fn float_mismatches(results: &[PeriodResult], terms: usize) -> Vec<u64> {
    results.par_iter()
        .filter_map(|r| {
            let exact = PeriodResult::compute(r.n, Method::Exact);
            let float = PeriodResult::compute(r.n, Method::Float { terms });
            if exact != float {
                Some(r.n)
            } else {
                None
            }
        })
        .collect()
}

pub fn pell_failures(results: &[PeriodResult]) -> Vec<u64> {
    results.par_iter()
        .filter_map(|r| match exact_period(r.n) {
            Some((a0, period)) if !pell_check(r.n, a0, &period) => Some(r.n),
            Some(_) => None,
            None => Some(r.n),
        })
        .collect()
}
