//! Precomputed weighted sampling via Vose's alias method.
//!
//! For distributions that are sampled repeatedly (name pools, trait
//! frequency tables) the linear scan in [`crate::rng::SeededRng`] wastes a
//! pass per draw. [`WeightedTable`] pays an O(n) construction cost once and
//! then samples in O(1): one float draw decides both the column and whether
//! the column keeps the pick or redirects through its alias.

use crate::error::{Error, Result};
use crate::rng::SeededRng;

/// Immutable alias table over a fixed weighted distribution.
///
/// `probability` and `alias` are the two parallel arrays of the classic
/// Vose construction; they never change after `new` returns, so a built
/// table can be shared freely across generations.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    items: Vec<T>,
    probability: Vec<f64>,
    alias: Vec<usize>,
}

impl<T> WeightedTable<T> {
    /// Build the alias table from parallel item/weight vectors.
    ///
    /// Weights are non-negative integers; at least one must be positive.
    pub fn new(items: Vec<T>, weights: &[u32]) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyInput);
        }
        if items.len() != weights.len() {
            return Err(Error::Configuration(format!(
                "weights length {} does not match item count {}",
                weights.len(),
                items.len()
            )));
        }
        let n = items.len();
        let mut total = 0.0f64;
        for &w in weights {
            total += f64::from(w);
        }
        if total <= 0.0 {
            return Err(Error::Configuration(
                "weight vector must have a positive sum".to_owned(),
            ));
        }

        // Scale each weight so the average column height is exactly 1.
        let mut scaled: Vec<f64> = weights
            .iter()
            .map(|&w| f64::from(w) * n as f64 / total)
            .collect();
        let mut small = Vec::new();
        let mut large = Vec::new();
        for (i, &s) in scaled.iter().enumerate() {
            if s < 1.0 {
                small.push(i);
            } else {
                large.push(i);
            }
        }

        let mut probability = vec![0.0f64; n];
        let mut alias = vec![0usize; n];
        while let (Some(&s), Some(&l)) = (small.last(), large.last()) {
            small.pop();
            large.pop();
            probability[s] = scaled[s];
            alias[s] = l;
            // Hand the large column's leftover mass back to whichever
            // bucket it now belongs in.
            scaled[l] = scaled[l] + scaled[s] - 1.0;
            if scaled[l] < 1.0 {
                small.push(l);
            } else {
                large.push(l);
            }
        }
        while let Some(l) = large.pop() {
            probability[l] = 1.0;
        }
        while let Some(s) = small.pop() {
            probability[s] = 1.0;
        }

        Ok(Self {
            items,
            probability,
            alias,
        })
    }

    /// Draw one item in O(1). Mutates only the engine, never the table.
    pub fn sample<'a>(&'a self, rng: &mut SeededRng) -> &'a T {
        let n = self.items.len();
        let r = rng.next_float01() * n as f64;
        let i = r as usize;
        if r - i as f64 <= self.probability[i] {
            &self.items[i]
        } else {
            &self.items[self.alias[i]]
        }
    }

    /// Draw `count` independent items.
    pub fn sample_many<'a>(&'a self, rng: &mut SeededRng, count: usize) -> Vec<&'a T> {
        (0..count).map(|_| self.sample(rng)).collect()
    }

    /// Direct item access by index.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the table is empty (never true for a built table).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> WeightedTable<char> {
        WeightedTable::new(vec!['a', 'b', 'c', 'd'], &[1, 1, 2, 4]).unwrap()
    }

    #[test]
    fn construction_matches_vose_reference() {
        let t = table();
        assert_eq!(t.probability, vec![0.5, 0.5, 1.0, 1.0]);
        assert_eq!(t.alias, vec![3, 3, 0, 0]);
    }

    #[test]
    fn samples_match_reference_sequence() {
        let t = table();
        let mut rng = SeededRng::new(9);
        let picks: String = (0..10).map(|_| *t.sample(&mut rng)).collect();
        assert_eq!(picks, "ddbdbbcdbc");
    }

    #[test]
    fn empirical_frequency_converges_to_weights() {
        let t = table();
        let mut rng = SeededRng::new(9);
        let mut counts = [0u32; 4];
        const N: u32 = 100_000;
        for _ in 0..N {
            match *t.sample(&mut rng) {
                'a' => counts[0] += 1,
                'b' => counts[1] += 1,
                'c' => counts[2] += 1,
                _ => counts[3] += 1,
            }
        }
        let expected = [0.125, 0.125, 0.25, 0.5];
        for (i, &count) in counts.iter().enumerate() {
            let freq = f64::from(count) / f64::from(N);
            assert!(
                (freq - expected[i]).abs() < 0.01,
                "item {i}: freq {freq} vs expected {}",
                expected[i]
            );
        }
    }

    #[test]
    fn zero_weight_item_is_never_sampled() {
        let t = WeightedTable::new(vec!["never", "always"], &[0, 1]).unwrap();
        let mut rng = SeededRng::new(4);
        for _ in 0..10_000 {
            assert_eq!(*t.sample(&mut rng), "always");
        }
    }

    #[test]
    fn sample_many_only_advances_the_engine() {
        let t = table();
        let mut a = SeededRng::new(123);
        let mut b = SeededRng::new(123);
        let batch: Vec<char> = t.sample_many(&mut a, 16).into_iter().copied().collect();
        let singles: Vec<char> = (0..16).map(|_| *t.sample(&mut b)).collect();
        assert_eq!(batch, singles);
    }

    #[test]
    fn get_checks_bounds() {
        let t = table();
        assert_eq!(*t.get(0).unwrap(), 'a');
        assert_eq!(
            t.get(4).unwrap_err(),
            Error::IndexOutOfRange { index: 4, len: 4 }
        );
    }

    #[test]
    fn empty_items_error() {
        let err = WeightedTable::<u8>::new(vec![], &[]).unwrap_err();
        assert_eq!(err, Error::EmptyInput);
    }

    #[test]
    fn length_mismatch_errors() {
        let err = WeightedTable::new(vec!['a', 'b'], &[1]).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn all_zero_weights_error() {
        let err = WeightedTable::new(vec!['a', 'b'], &[0, 0]).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
