use {
    crate::compare::Compare,
    core::{cmp::Ordering, marker::PhantomData, mem},
};

/// A trait for sorting a detached sequence of values with a [`Compare`] policy.
pub trait Sorter {
    /// The type of the elements to sort.
    type Item;

    /// Sorts `items` in the order given by `comparator`.
    fn sort<C>(items: &mut Vec<Self::Item>, comparator: &C)
    where
        C: Compare<Self::Item> + ?Sized;
}

/// Sorts `items` with the sorter `S`.
pub fn sort<T, S, C>(items: &mut Vec<T>, comparator: &C)
where
    S: Sorter<Item = T>,
    C: Compare<T> + ?Sized,
{
    S::sort(items, comparator)
}

/// Stable top-down merge sort over a `Vec`.
///
/// Runs in O(n log n) comparisons with O(n) auxiliary space. Elements the comparator deems equal
/// keep their relative order.
pub struct MergeSort<T> {
    _marker: PhantomData<T>,
}

impl<T> Sorter for MergeSort<T> {
    type Item = T;

    fn sort<C>(items: &mut Vec<T>, comparator: &C)
    where
        C: Compare<T> + ?Sized,
    {
        if items.len() <= 1 {
            return;
        }

        // `items` keeps the lower half, `right` owns the upper one.
        let mid = items.len() / 2;
        let mut right = items.split_off(mid);

        Self::sort(items, comparator);
        Self::sort(&mut right, comparator);

        let left = mem::take(items);
        *items = merge(left, right, comparator);
    }
}

/// Merges two sorted runs. On ties the element of `left` goes first.
fn merge<T, C>(left: Vec<T>, right: Vec<T>, comparator: &C) -> Vec<T>
where
    C: Compare<T> + ?Sized,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => comparator.compare(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }

    merged
}

#[cfg(test)]
mod tests {
    use {
        super::{sort, MergeSort, Sorter},
        crate::compare::{from_fn, Compare},
        proptest::prelude::*,
        std::cmp::Ordering,
    };

    fn natural() -> impl Compare<i32> {
        from_fn(|a: &i32, b: &i32| a.cmp(b))
    }

    #[test]
    fn sorts_odd_length_with_duplicates() {
        let mut pids = vec![9625, 119, 13, 325, 65, 119, 4025, 291, 13];
        MergeSort::sort(&mut pids, &natural());
        assert_eq!(pids, &[13, 13, 65, 119, 119, 291, 325, 4025, 9625]);
    }

    #[test]
    fn empty_and_singleton_are_unchanged() {
        let mut empty: Vec<i32> = vec![];
        MergeSort::sort(&mut empty, &natural());
        assert!(empty.is_empty());

        let mut one = vec![7];
        MergeSort::sort(&mut one, &natural());
        assert_eq!(one, &[7]);
    }

    #[test]
    fn dispatch_through_free_function() {
        let mut list = vec![2, 3, 1];
        sort::<_, MergeSort<_>, _>(&mut list, &from_fn(|a: &i32, b: &i32| b.cmp(a)));
        assert_eq!(list, &[3, 2, 1]);
    }

    #[test]
    fn ties_keep_original_order() {
        let mut list = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')];
        MergeSort::sort(&mut list, &from_fn(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0)));
        assert_eq!(list, &[(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c'), (1, 'e')]);
    }

    #[test]
    fn inconsistent_comparator_does_not_panic() {
        let mut list: Vec<i32> = (0..100).collect();
        MergeSort::sort(&mut list, &from_fn(|_: &i32, _: &i32| Ordering::Greater));
        list.sort_unstable();
        assert_eq!(list, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn accepts_trait_objects() {
        let comparator: Box<dyn Compare<i32>> = Box::new(natural());
        let mut list = vec![5, 4, 3];
        MergeSort::sort(&mut list, comparator.as_ref());
        assert_eq!(list, &[3, 4, 5]);
    }

    proptest! {
        #[test]
        fn prop_matches_std_stable_sort(mut values in prop::collection::vec((0u8..8, any::<u16>()), 0..200)) {
            let mut expected = values.clone();
            expected.sort_by(|a, b| a.0.cmp(&b.0));
            MergeSort::sort(&mut values, &from_fn(|a: &(u8, u16), b: &(u8, u16)| a.0.cmp(&b.0)));
            prop_assert_eq!(values, expected);
        }

        #[test]
        fn prop_is_a_permutation(mut values in prop::collection::vec(any::<i32>(), 0..200)) {
            let mut expected = values.clone();
            expected.sort_unstable();
            MergeSort::sort(&mut values, &natural());
            prop_assert_eq!(values, expected);
        }
    }
}
