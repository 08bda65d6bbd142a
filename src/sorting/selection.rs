//! Selection sort.
//!
//! Each pass scans the unsorted tail for its first minimum and swaps it to
//! the front of the tail. Θ(n²) comparisons, at most n - 1 swaps.

/// Sorts `xs` in place with one loop per output position.
pub fn iterative<T, F>(xs: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for start in 0..xs.len().saturating_sub(1) {
        let min = minimum(xs, start, &mut less);
        xs.swap(start, min);
    }
}

/// Sorts `xs` in place by placing the minimum at `start` and recursing on
/// `start + 1`. Nests once per element.
pub fn recursive<T, F>(xs: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    recurse(xs, 0, &mut less);
}

fn recurse<T, F>(xs: &mut [T], start: usize, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if start + 1 >= xs.len() {
        return;
    }
    let min = minimum(xs, start, less);
    xs.swap(start, min);
    recurse(xs, start + 1, less);
}

/// Index of the first minimum of `xs[start..]`. The candidate only moves on
/// a strictly smaller element, so earlier duplicates win.
fn minimum<T, F>(xs: &[T], start: usize, less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    (start + 1..xs.len()).fold(start, |min, j| if less(&xs[j], &xs[min]) { j } else { min })
}
