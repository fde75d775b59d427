//! Set arithmetic over small integer rosters, as displayed by the Venn
//! diagram. Inputs may contain duplicates; results are deduplicated and
//! keep first-seen order so the rendered rosters are deterministic.

pub fn union(a: &[i32], b: &[i32]) -> Vec<i32> {
    let mut out = Vec::new();
    for &x in a.iter().chain(b.iter()) {
        if !out.contains(&x) {
            out.push(x);
        }
    }
    out
}

pub fn intersection(a: &[i32], b: &[i32]) -> Vec<i32> {
    let mut out = Vec::new();
    for &x in a {
        if b.contains(&x) && !out.contains(&x) {
            out.push(x);
        }
    }
    out
}

pub fn difference(a: &[i32], b: &[i32]) -> Vec<i32> {
    let mut out = Vec::new();
    for &x in a {
        if !b.contains(&x) && !out.contains(&x) {
            out.push(x);
        }
    }
    out
}

/// Roster notation: `{1, 2, 3}`, or `{}` for the empty set.
pub fn format_set(xs: &[i32]) -> String {
    let inner = xs
        .iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_dedups_and_keeps_first_seen_order() {
        assert_eq!(union(&[1, 2, 3, 5], &[3, 4, 5, 6]), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(union(&[2, 2, 1], &[1, 1]), vec![2, 1]);
    }

    #[test]
    fn intersection_contains_each_common_element_once() {
        assert_eq!(intersection(&[1, 2, 3, 5], &[3, 4, 5, 6]), vec![3, 5]);
        assert_eq!(intersection(&[3, 3, 5], &[5, 3]), vec![3, 5]);
    }

    #[test]
    fn intersection_is_subset_of_both_inputs() {
        let a = [1, 2, 3, 7];
        let b = [3, 4, 5, 7];
        for x in intersection(&a, &b) {
            assert!(a.contains(&x));
            assert!(b.contains(&x));
        }
    }

    #[test]
    fn difference_is_asymmetric() {
        assert_eq!(difference(&[1, 2, 3, 5], &[3, 4, 5, 6]), vec![1, 2]);
        assert_eq!(difference(&[3, 4, 5, 6], &[1, 2, 3, 5]), vec![4, 6]);
    }

    #[test]
    fn difference_shares_nothing_with_subtrahend() {
        let a = [1, 2, 3, 4, 5];
        let b = [4, 5, 6, 7];
        for x in difference(&a, &b) {
            assert!(!b.contains(&x));
        }
    }

    #[test]
    fn empty_inputs_follow_set_semantics() {
        let empty: [i32; 0] = [];
        assert!(union(&empty, &empty).is_empty());
        assert!(intersection(&[1, 2], &empty).is_empty());
        assert!(intersection(&empty, &[1, 2]).is_empty());
        assert_eq!(difference(&[1, 2], &empty), vec![1, 2]);
        assert!(difference(&empty, &[1, 2]).is_empty());
    }

    #[test]
    fn roster_formatting() {
        assert_eq!(format_set(&[1, 2, 3]), "{1, 2, 3}");
        assert_eq!(format_set(&[]), "{}");
    }
}
