use std::collections::HashMap;

/// Counts how many times each distinct value appears in `input`.
pub fn count_ints(input: &[i64]) -> HashMap<i64, usize> {
    let mut counts = HashMap::with_capacity(input.len());
    for &value in input {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_occurrences() {
        let cases: [(&[i64], &[(i64, usize)]); 4] = [
            (&[1, 5, 7, 3, 1, 1, 2], &[(1, 3), (5, 1), (3, 1), (7, 1), (2, 1)]),
            (&[-1, 3, 14, 5, 5, 5, 5], &[(-1, 1), (3, 1), (14, 1), (5, 4)]),
            (&[], &[]),
            (&[0], &[(0, 1)]),
        ];

        for (input, expected) in cases {
            let expected: HashMap<i64, usize> = expected.iter().copied().collect();
            assert_eq!(count_ints(input), expected, "input: {input:?}");
        }
    }
}
