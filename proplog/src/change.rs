//! Functions from `T` to `T` that return whether the output differs from the input.

/// Change we can believe in.
///
/// `true` if there has been a change, `false` if not.
pub type Change = bool;

/// Apply a change function to a value as long as the function reports change.
///
/// ~~~
/// use proplog::change::fix;
/// let halve = |x: u32| if x % 2 == 0 && x > 0 { (true, x / 2) } else { (false, x) };
/// assert_eq!(fix(40, halve), 5);
/// ~~~
pub fn fix<T>(mut x: T, f: impl Fn(T) -> (Change, T)) -> T {
    loop {
        let (change, y) = f(x);
        x = y;
        if !change {
            return x;
        }
    }
}

/// Apply the first change function that reports a change.
///
/// Functions after the first changing one are not tried.
pub fn first<T, F: Fn(T) -> (Change, T)>(mut x: T, fs: &[F]) -> (Change, T) {
    for f in fs {
        let (change, y) = f(x);
        if change {
            return (true, y);
        }
        x = y;
    }
    (false, x)
}

/// Apply a change function to every element, reporting whether any changed.
pub fn map_all<T>(xs: impl IntoIterator<Item = T>, f: impl Fn(T) -> (Change, T)) -> (Change, alloc::vec::Vec<T>) {
    let mut change = false;
    let ys = xs
        .into_iter()
        .map(|x| {
            let (change_y, y) = f(x);
            change |= change_y;
            y
        })
        .collect();
    (change, ys)
}
