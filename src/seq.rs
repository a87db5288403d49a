//! Sequence helpers: index mapping, construction, and reshaping.

use itertools::Itertools;

use crate::combinators::when;

/// Ascending positions `0..items.len()`.
pub fn indexes<T>(items: &[T]) -> Vec<usize> {
    (0..items.len()).collect()
}

/// Map `f` over the positions of `items`, not over the elements.
pub fn map_indexes<T, B>(f: impl FnMut(usize) -> B, items: &[T]) -> Vec<B> {
    indexes(items).into_iter().map(f).collect()
}

/// Map `f(x, y)` over every position of a two-dimensional sequence.
///
/// The output is shaped like the input's per-row lengths: ragged rows stay
/// ragged.
pub fn map_indexes_2d<T, B>(mut f: impl FnMut(usize, usize) -> B, rows: &[Vec<T>]) -> Vec<Vec<B>> {
    map_indexes(|x| map_indexes(|y| f(x, y), &rows[x]), rows)
}

/// A sequence of `length` clones of `init`.
pub fn make_array<T: Clone>(length: usize, init: T) -> Vec<T> {
    vec![init; length]
}

/// Invoke `f` once per row, handing it the row's elements as its positional
/// payload.
pub fn spread_map<T, B>(mut f: impl FnMut(&[T]) -> B, rows: &[Vec<T>]) -> Vec<B> {
    rows.iter().map(|row| f(row)).collect()
}

/// The reversed pair `(b, a)`; callers account for the order.
pub fn pair_with<A, B>(a: A, b: B) -> (B, A) {
    (b, a)
}

/// New sequence with `value` placed before every element of `items`.
pub fn prepend<T: Clone>(value: T, items: &[T]) -> Vec<T> {
    std::iter::once(value).chain(items.iter().cloned()).collect()
}

/// Pair `items` (kept whole) with `value`.
///
/// Despite the name this does not splice `value` onto the end of `items`:
/// the sequence stays intact as the first element of the pair and `value`
/// follows it. Historical behavior, kept.
pub fn append<T: Clone>(value: T, items: &[T]) -> (Vec<T>, T) {
    (items.to_vec(), value)
}

/// Join text elements with `separator`.
pub fn join<S: AsRef<str>>(separator: &str, items: &[S]) -> String {
    items.iter().map(|s| s.as_ref()).join(separator)
}

/// Map `f` over the elements satisfying `predicate`; keep the rest
/// unchanged.
pub fn map_if<T>(predicate: impl Fn(&T) -> bool, f: impl Fn(T) -> T, values: Vec<T>) -> Vec<T> {
    values.into_iter().map(when(predicate, f)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes() {
        assert_eq!(indexes(&['a', 'b', 'c']), vec![0, 1, 2]);
        assert_eq!(indexes::<u8>(&[]), Vec::<usize>::new());
    }

    #[test]
    fn test_map_indexes_sees_positions() {
        let doubled = map_indexes(|i| i * 2, &["x", "y", "z"]);
        assert_eq!(doubled, vec![0, 2, 4]);
    }

    #[test]
    fn test_map_indexes_2d_keeps_ragged_shape() {
        let rows = vec![vec![10, 11], vec![20], vec![30, 31, 32]];
        let coords = map_indexes_2d(|x, y| (x, y), &rows);
        assert_eq!(
            coords,
            vec![
                vec![(0, 0), (0, 1)],
                vec![(1, 0)],
                vec![(2, 0), (2, 1), (2, 2)],
            ]
        );
    }

    #[test]
    fn test_make_array() {
        assert_eq!(make_array(3, "x"), vec!["x", "x", "x"]);
        assert_eq!(make_array(0, 1), Vec::<i32>::new());
    }

    #[test]
    fn test_spread_map_hands_each_row() {
        let rows = vec![vec![1, 2], vec![3, 4, 5]];
        let sums = spread_map(|row| row.iter().sum::<i32>(), &rows);
        assert_eq!(sums, vec![3, 12]);
    }

    #[test]
    fn test_pair_with_reverses() {
        assert_eq!(pair_with(1, 2), (2, 1));
    }

    #[test]
    fn test_prepend() {
        assert_eq!(prepend(0, &[1, 2]), vec![0, 1, 2]);
        assert_eq!(prepend('a', &[]), vec!['a']);
    }

    #[test]
    fn test_append_keeps_sequence_whole() {
        // Not a splice: the input sequence is the first element of the pair.
        assert_eq!(append(3, &[1, 2]), (vec![1, 2], 3));
    }

    #[test]
    fn test_join() {
        assert_eq!(join(", ", &["a", "b", "c"]), "a, b, c");
        assert_eq!(join("-", &Vec::<String>::new()), "");
    }

    #[test]
    fn test_map_if_transforms_matches_only() {
        let result = map_if(|n: &i32| *n < 0, |n| -n, vec![-1, 2, -3, 4]);
        assert_eq!(result, vec![1, 2, 3, 4]);
    }
}
