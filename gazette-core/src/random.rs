//! Random picks for "related articles" style widgets.

use rand::seq::SliceRandom;
use rand::Rng;

/// One uniformly random element, `None` when `items` is empty
pub fn random_element<T>(items: &[T]) -> Option<&T> {
    random_element_with_rng(items, &mut rand::thread_rng())
}

pub fn random_element_with_rng<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}

/// `n` distinct random elements of `items`
///
/// Runs a partial Fisher–Yates shuffle over a vector of references, so the
/// caller's slice is never reordered. Asking for more than `items.len()`
/// returns every element in shuffled order.
pub fn random_elements<T>(items: &[T], n: usize) -> Vec<&T> {
    random_elements_with_rng(items, n, &mut rand::thread_rng())
}

pub fn random_elements_with_rng<'a, T, R>(items: &'a [T], n: usize, rng: &mut R) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    let mut pool: Vec<&T> = items.iter().collect();
    let n = n.min(pool.len());

    for i in 0..n {
        let j = rng.gen_range(i..pool.len());
        pool.swap(i, j);
    }

    pool.truncate(n);
    pool
}
