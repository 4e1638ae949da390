// Copyright (c) 2025 - Cowboy AI, LLC.

//! Higher-order helpers over ordered sequences
//!
//! These are independent of the algebraic types; order of the input is
//! preserved in every output.

/// Apply `f` to every item, collecting the results in order
pub fn map<T, R, I, F>(items: I, f: F) -> Vec<R>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> R,
{
    items.into_iter().map(f).collect()
}

/// Keep the items for which `predicate` holds
pub fn filter<T, I, P>(items: I, mut predicate: P) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).collect()
}

/// Fold the items left to right starting from `initial`
pub fn reduce<T, R, I, F>(items: I, initial: R, reducer: F) -> R
where
    I: IntoIterator<Item = T>,
    F: FnMut(R, T) -> R,
{
    items.into_iter().fold(initial, reducer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map() {
        assert_eq!(map(vec![2, 3, 4], |x| x * 2), vec![4, 6, 8]);
        assert_eq!(map(&["a", "bc"], |s| s.len()), vec![1, 2]);
    }

    #[test]
    fn test_filter() {
        let evens = filter(vec![1, 2, 3, 4, 5, 6], |x| x % 2 == 0);
        assert_eq!(evens, vec![2, 4, 6]);
    }

    #[test]
    fn test_reduce() {
        assert_eq!(reduce(vec![1, 2, 3, 4], 0, |acc, x| acc + x), 10);
        assert_eq!(
            reduce(["a", "b", "c"], String::new(), |acc, s| acc + s),
            "abc"
        );
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<i32> = Vec::new();

        assert!(map(empty.clone(), |x| x + 1).is_empty());
        assert!(filter(empty.clone(), |_| true).is_empty());
        assert_eq!(reduce(empty, 7, |acc, x| acc + x), 7);
    }
}
