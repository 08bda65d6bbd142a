//! Binary insertion sort.
//!
//! The prefix `xs[..i]` is kept sorted; `xs[i]` is placed by binary search
//! for the first element it sorts before, then the gap is opened by
//! rotating the run right by one. O(n log n) comparisons, O(n²) moves.

/// Sorts `xs` in place, growing the sorted prefix one element per loop.
pub fn iterative<T, F>(xs: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..xs.len() {
        insert(xs, i, &mut less);
    }
}

/// Sorts `xs[..n-1]` recursively, then inserts the last element. Nests once
/// per element.
pub fn recursive<T, F>(xs: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    recurse(xs, &mut less);
}

fn recurse<T, F>(xs: &mut [T], less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let n = xs.len();
    if n <= 1 {
        return;
    }
    recurse(&mut xs[..n - 1], less);
    insert(xs, n - 1, less);
}

/// Moves `xs[i]` into the sorted prefix `xs[..i]`.
fn insert<T, F>(xs: &mut [T], i: usize, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let low = position(&xs[..i], &xs[i], less);
    xs[low..=i].rotate_right(1);
}

/// Leftmost index in `sorted` whose element `key` sorts before, or
/// `sorted.len()` if there is none. Equal elements stay ahead of `key`.
fn position<T, F>(sorted: &[T], key: &T, less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut low = 0;
    let mut high = sorted.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if less(key, &sorted[mid]) {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    low
}
