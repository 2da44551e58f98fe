//! Greedy brand partitioning for subcategories larger than the hit cap.
//!
//! Brands are walked in the order the backend reported them. Each brand is
//! appended to the open partition while the running count stays below the
//! cap; the brand that would push the sum to the cap or beyond closes the open
//! partition and starts the next one on its own. One linear pass, no
//! backtracking, so the same ordered input always yields the same groups.
//!
//! A brand whose own count is at or above the cap still gets a partition of
//! its own; the query for it is capped like any other and will be truncated.

use indexmap::IndexMap;

/// A set of brands queried together, plus the sum of their facet counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandPartition {
    pub brands: Vec<String>,
    /// Sum of the facet counts of `brands`, as reported by the facet query.
    pub declared_total: u64,
}

impl BrandPartition {
    fn starting_with(brand: &str, count: u64) -> Self {
        Self {
            brands: vec![brand.to_owned()],
            declared_total: count,
        }
    }

    /// `true` when a capped query cannot return every product in this partition.
    #[must_use]
    pub fn exceeds(&self, cap: u32) -> bool {
        self.declared_total > u64::from(cap)
    }
}

/// Splits ordered brand counts into partitions whose declared totals stay
/// under `cap`.
///
/// An empty partition is never emitted: when the very first brand already
/// reaches the cap it simply opens the first partition.
#[must_use]
pub fn partition_brands(counts: &IndexMap<String, u64>, cap: u32) -> Vec<BrandPartition> {
    let cap = u64::from(cap);
    let mut partitions = Vec::new();
    let mut current: Option<BrandPartition> = None;

    for (brand, &count) in counts {
        if let Some(open) = current.as_mut() {
            if open.declared_total.saturating_add(count) < cap {
                open.brands.push(brand.clone());
                open.declared_total += count;
                continue;
            }
        }
        partitions.extend(current.replace(BrandPartition::starting_with(brand, count)));
    }

    partitions.extend(current);
    partitions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> IndexMap<String, u64> {
        pairs.iter().map(|(b, c)| ((*b).to_owned(), *c)).collect()
    }

    fn brand_sets(partitions: &[BrandPartition]) -> Vec<Vec<&str>> {
        partitions
            .iter()
            .map(|p| p.brands.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn empty_counts_yield_no_partitions() {
        assert!(partition_brands(&IndexMap::new(), 750).is_empty());
    }

    #[test]
    fn reference_trace_groups_ab_and_cd() {
        let parts = partition_brands(
            &counts(&[("A", 400), ("B", 300), ("C", 500), ("D", 100)]),
            750,
        );
        assert_eq!(brand_sets(&parts), vec![vec!["A", "B"], vec!["C", "D"]]);
        assert_eq!(parts[0].declared_total, 700);
        assert_eq!(parts[1].declared_total, 600);
    }

    #[test]
    fn reaching_cap_exactly_triggers_flush() {
        let parts = partition_brands(&counts(&[("A", 500), ("B", 250), ("C", 10)]), 750);
        assert_eq!(brand_sets(&parts), vec![vec!["A"], vec!["B", "C"]]);
    }

    #[test]
    fn everything_fits_in_one_partition() {
        let parts = partition_brands(&counts(&[("A", 1), ("B", 2), ("C", 3)]), 750);
        assert_eq!(brand_sets(&parts), vec![vec!["A", "B", "C"]]);
        assert_eq!(parts[0].declared_total, 6);
    }

    #[test]
    fn oversized_first_brand_does_not_emit_empty_partition() {
        let parts = partition_brands(&counts(&[("Huge", 900), ("Small", 10)]), 750);
        assert_eq!(brand_sets(&parts), vec![vec!["Huge"], vec!["Small"]]);
        assert!(parts[0].exceeds(750));
        assert!(!parts[1].exceeds(750));
    }

    #[test]
    fn oversized_middle_brand_gets_its_own_partition() {
        let parts = partition_brands(&counts(&[("A", 100), ("Huge", 800), ("B", 50)]), 750);
        assert_eq!(brand_sets(&parts), vec![vec!["A"], vec!["Huge"], vec!["B"]]);
    }

    #[test]
    fn every_brand_lands_in_exactly_one_partition() {
        let input = counts(&[
            ("A", 120),
            ("B", 340),
            ("C", 90),
            ("D", 700),
            ("E", 10),
            ("F", 300),
            ("G", 460),
        ]);
        let parts = partition_brands(&input, 750);
        let flattened: Vec<&str> = parts
            .iter()
            .flat_map(|p| p.brands.iter().map(String::as_str))
            .collect();
        let expected: Vec<&str> = input.keys().map(String::as_str).collect();
        assert_eq!(flattened, expected);
        assert_eq!(
            parts.iter().map(|p| p.declared_total).sum::<u64>(),
            input.values().sum::<u64>()
        );
        assert!(parts.iter().all(|p| !p.exceeds(750)));
    }

    #[test]
    fn partitioning_is_deterministic() {
        let input = counts(&[("A", 400), ("B", 300), ("C", 500), ("D", 100)]);
        assert_eq!(partition_brands(&input, 750), partition_brands(&input, 750));
    }
}
