// src/harvest/normalize.rs
// =============================================================================
// Turns the raw pile of links from every page into the final answer:
// sorted, with every duplicate removed.
// =============================================================================

// Sorts the links and removes duplicates, reusing the same allocation
//
// After sorting, equal values sit next to each other, so collapsing
// adjacent runs removes every duplicate, not just neighbours from the
// original order. Running it twice gives the same result as running it once.
pub fn sort_dedup(mut links: Vec<String>) -> Vec<String> {
    links.sort_unstable();
    links.dedup();
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn is_strictly_increasing(links: &[String]) -> bool {
        links.windows(2).all(|pair| pair[0] < pair[1])
    }

    #[test]
    fn test_sorts_and_removes_duplicates() {
        let links = strings(&["https://b.com", "https://a.com", "https://a.com"]);
        assert_eq!(sort_dedup(links), strings(&["https://a.com", "https://b.com"]));
    }

    #[test]
    fn test_non_adjacent_duplicates() {
        let links = strings(&["x", "y", "x", "z", "y", "x"]);
        assert_eq!(sort_dedup(links), strings(&["x", "y", "z"]));
    }

    #[test]
    fn test_empty_and_single() {
        assert!(sort_dedup(Vec::new()).is_empty());
        assert_eq!(sort_dedup(strings(&["only"])), strings(&["only"]));
    }

    #[test]
    fn test_byte_order() {
        // Uppercase sorts before lowercase in byte order
        let links = strings(&["https://example.com/b", "https://example.com/B", "https://example.com/a"]);
        assert_eq!(
            sort_dedup(links),
            strings(&["https://example.com/B", "https://example.com/a", "https://example.com/b"])
        );
    }

    #[test]
    fn test_idempotent_and_keeps_every_distinct_value() {
        let inputs = [
            strings(&[]),
            strings(&["c", "b", "a"]),
            strings(&["same", "same", "same"]),
            strings(&["mailto:x@y.z", "https://a.com/#top", "https://a.com/", "https://a.com/"]),
        ];

        for input in inputs {
            let once = sort_dedup(input.clone());
            assert!(is_strictly_increasing(&once));
            assert_eq!(sort_dedup(once.clone()), once);

            let distinct: std::collections::BTreeSet<_> = input.into_iter().collect();
            assert_eq!(once, distinct.into_iter().collect::<Vec<_>>());
        }
    }
}
