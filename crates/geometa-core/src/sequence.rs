//! Canonical ordering of decoded lists.

use std::cmp::Ordering;

use crate::schema::ListEntry;
use crate::types::Spanned;

/// Stable sort with an injected comparator.
pub fn sort_records<R, F>(records: &mut [R], cmp: F)
where
    F: FnMut(&R, &R) -> Ordering,
{
    records.sort_by(cmp);
}

pub fn by_code<R: ListEntry>(a: &R, b: &R) -> Ordering {
    a.code().trim().cmp(b.code().trim())
}

pub fn by_start<R: Spanned>(a: &R, b: &R) -> Ordering {
    a.span().start.cmp(&b.span().start)
}

pub fn by_code_then_start<R: ListEntry + Spanned>(a: &R, b: &R) -> Ordering {
    by_code(a, b).then_with(|| by_start(a, b))
}

/// Order a freshly decoded list by code. Duplicate codes are kept.
pub fn sequence<R: ListEntry>(mut records: Vec<R>) -> Vec<R> {
    sort_records(&mut records, by_code);
    records
}
