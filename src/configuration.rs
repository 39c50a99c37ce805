use std::ops::Index;
use itertools::Itertools;

/// Binary configuration of a chain of asymmetric centers
///
/// Position `p` holds the spatial state of the center `p + 1` along the
/// backbone, with each center in one of two states. Generation order stores
/// bit `p` of the generation counter at position `p`, least significant bit
/// first, so the all-zero configuration has generation index zero.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct Configuration {
    // One-line representation, each element 0 or 1
    pub bits: Vec<u8>
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits.iter().format(""))
    }
}

impl Configuration {
    /// Initialize the all-zero configuration of specific size
    ///
    /// This configuration has index zero within the generation order of
    /// configurations.
    ///
    /// ```
    /// # use aldose::configuration::Configuration;
    /// assert_eq!(Configuration::homogeneous(3).bits, vec![0, 0, 0])
    /// ```
    pub fn homogeneous(n: usize) -> Configuration {
        Configuration {bits: vec![0; n]}
    }

    /// Number of configurations of a chain of `n` centers
    ///
    /// Returns `None` when `2^n` overflows the generation counter domain.
    /// Enumeration refuses to start in that case rather than wrap silently.
    pub fn set_count(n: usize) -> Option<u64> {
        u32::try_from(n).ok().and_then(|n| 1u64.checked_shl(n))
    }

    /// Initialize the `i`-th configuration by generation order of size `n`
    ///
    /// Bit `p` of `i` lands at position `p`, least significant bit first,
    /// zero-padded to length `n`. If `i` is not within the `2^n`
    /// configurations of that size, `None` is returned.
    ///
    /// ```
    /// # use aldose::configuration::Configuration;
    /// assert_eq!(Configuration::try_from_index(3, 0).unwrap().bits, vec![0, 0, 0]);
    /// assert_eq!(Configuration::try_from_index(3, 1).unwrap().bits, vec![1, 0, 0]);
    /// assert_eq!(Configuration::try_from_index(3, 6).unwrap().bits, vec![0, 1, 1]);
    /// assert_eq!(Configuration::try_from_index(3, 8), None);
    /// ```
    pub fn try_from_index(n: usize, i: u64) -> Option<Configuration> {
        if let Some(count) = Self::set_count(n) {
            if i >= count {
                return None;
            }
        }

        let bits = (0..n)
            .map(|p| if p < u64::BITS as usize { ((i >> p) & 1) as u8 } else { 0 })
            .collect();
        Some(Configuration {bits})
    }

    /// Determine the generation index of a configuration
    ///
    /// Inverse of [`Configuration::try_from_index`]. Only meaningful for
    /// chain sizes where [`Configuration::set_count`] is `Some`.
    ///
    /// ```
    /// # use aldose::configuration::Configuration;
    /// for i in 0..16 {
    ///     assert_eq!(Configuration::try_from_index(4, i).unwrap().index(), i);
    /// }
    /// ```
    pub fn index(&self) -> u64 {
        self.bits.iter().enumerate()
            .filter(|(_, bit)| **bit != 0)
            .fold(0, |acc, (p, _)| acc | (1 << p))
    }

    /// Number of asymmetric centers in the chain
    pub fn set_size(&self) -> usize {
        self.bits.len()
    }

    /// Mirror the molecule across the plane perpendicular to its backbone
    ///
    /// The bit at position `p` of the result equals the bit at position
    /// `n - p - 1` of `self`. An involution: reversing twice restores the
    /// original configuration.
    pub fn reverse(&self) -> Configuration {
        let bits = self.bits.iter().rev().copied().collect();
        Configuration {bits}
    }

    /// Mirror the molecule across the plane of projection
    ///
    /// Every center's state flips. An involution, like [`Configuration::reverse`].
    pub fn invert(&self) -> Configuration {
        let bits = self.bits.iter().map(|bit| 1 - bit).collect();
        Configuration {bits}
    }

    /// Rotate the molecule 180° within the plane of projection
    ///
    /// Composition of [`Configuration::reverse`] and [`Configuration::invert`],
    /// which commute since one acts on positions and the other on values.
    /// Configurations related by this rotation are the same physical isomer.
    ///
    /// ```
    /// # use aldose::configuration::Configuration;
    /// let c = Configuration::try_from_index(3, 4).unwrap();
    /// assert_eq!(c.canonical_partner(), c.reverse().invert());
    /// assert_eq!(c.canonical_partner().canonical_partner(), c);
    /// ```
    pub fn canonical_partner(&self) -> Configuration {
        self.invert().reverse()
    }

    /// A dyad is fixed under the 180° rotation
    ///
    /// ```
    /// # use aldose::configuration::Configuration;
    /// assert!(Configuration {bits: vec![1, 0]}.is_dyad());
    /// assert!(!Configuration {bits: vec![1, 1]}.is_dyad());
    /// ```
    pub fn is_dyad(&self) -> bool {
        *self == self.canonical_partner()
    }

    /// An achiral configuration is palindromic under reversal alone
    ///
    /// Mirror-symmetric independent of inversion: its mirror image across the
    /// perpendicular plane is itself.
    pub fn is_achiral(&self) -> bool {
        *self == self.reverse()
    }

    /// Transform into the next configuration within generation order
    ///
    /// Ripple increment from the least significant position. Returns `false`
    /// on wraparound back to the all-zero configuration.
    ///
    /// ```
    /// # use aldose::configuration::Configuration;
    /// let mut configuration = Configuration::homogeneous(4);
    /// for i in 1..16 {
    ///     assert_eq!(configuration.next_configuration(), true);
    ///     assert_eq!(configuration, Configuration::try_from_index(4, i).unwrap());
    /// }
    /// assert_eq!(configuration.next_configuration(), false);
    /// ```
    pub fn next_configuration(&mut self) -> bool {
        for bit in self.bits.iter_mut() {
            if *bit == 0 {
                *bit = 1;
                return true;
            }

            *bit = 0;
        }

        false
    }
}

/// Implements indexing, letting Configuration behave as a container directly
impl Index<usize> for Configuration {
    type Output = u8;

    fn index(&self, i: usize) -> &Self::Output {
        &self.bits[i]
    }
}

/// Iterator adaptor for iterating through all configurations of a chain size
///
/// See [`configurations`]
pub struct ConfigurationIterator {
    configuration: Configuration,
    increment: bool
}

impl Iterator for ConfigurationIterator {
    type Item = Configuration;

    fn next(&mut self) -> Option<Self::Item> {
        if self.increment && !self.configuration.next_configuration() {
            return None;
        }

        self.increment = true;
        Some(self.configuration.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = Configuration::set_count(self.configuration.set_size())
            .map(|count| count - self.configuration.index())
            .and_then(|remaining| usize::try_from(remaining).ok());
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

/// Yields configurations in increasing generation order
///
/// ```
/// # use aldose::configuration::{Configuration, configurations};
/// let mut iter = configurations(1);
/// assert_eq!(iter.next(), Some(Configuration {bits: vec![0]}));
/// assert_eq!(iter.next(), Some(Configuration {bits: vec![1]}));
/// assert_eq!(iter.next(), None);
/// ```
pub fn configurations(n: usize) -> ConfigurationIterator {
    ConfigurationIterator {configuration: Configuration::homogeneous(n), increment: false}
}

#[cfg(test)]
mod tests {
    use crate::configuration::*;

    #[test]
    fn small_configurations() {
        assert_eq!(Configuration::homogeneous(0).bits.len(), 0);
        assert_eq!(Configuration::homogeneous(0).index(), 0);
        assert_eq!(Configuration::homogeneous(0).next_configuration(), false);
        assert_eq!(configurations(0).count(), 1);

        assert_eq!(Configuration::homogeneous(1).bits.len(), 1);
        assert_eq!(Configuration::try_from_index(1, 1).unwrap().bits, vec![1]);
        assert_eq!(Configuration::try_from_index(1, 2), None);
    }

    #[test]
    fn generation_order_is_exhaustive() {
        for n in 0..=6 {
            let count = Configuration::set_count(n).expect("Small chain") as usize;
            let generated: Vec<_> = configurations(n).collect();
            assert_eq!(generated.len(), count);

            for (i, configuration) in generated.iter().enumerate() {
                assert_eq!(configuration.index(), i as u64);
                assert_eq!(Configuration::try_from_index(n, i as u64).as_ref(), Some(configuration));
            }
        }
    }

    #[test]
    fn counter_overflow() {
        assert_eq!(Configuration::set_count(63), Some(1 << 63));
        assert_eq!(Configuration::set_count(64), None);
        assert_eq!(Configuration::set_count(usize::MAX), None);
    }

    #[test]
    fn transforms_are_involutions() {
        for n in 0..=6 {
            for configuration in configurations(n) {
                assert_eq!(configuration.reverse().reverse(), configuration);
                assert_eq!(configuration.invert().invert(), configuration);
                assert_eq!(configuration.canonical_partner().canonical_partner(), configuration);
            }
        }
    }

    #[test]
    fn transforms_commute() {
        for n in 0..=6 {
            for configuration in configurations(n) {
                assert_eq!(
                    configuration.invert().reverse(),
                    configuration.reverse().invert()
                );
            }
        }
    }

    #[test]
    fn rendering_is_injective() {
        // The bit-string rendering must be an identity-preserving key
        for n in 0..=6 {
            let renderings: std::collections::HashSet<String> = configurations(n)
                .map(|configuration| configuration.to_string())
                .collect();
            assert_eq!(renderings.len(), Configuration::set_count(n).unwrap() as usize);
        }

        assert_eq!(Configuration {bits: vec![1, 0, 0]}.to_string(), "100");
    }

    #[test]
    fn empty_chain() {
        let empty = Configuration::homogeneous(0);
        assert_eq!(empty.reverse(), empty);
        assert_eq!(empty.invert(), empty);
        assert!(empty.is_dyad());
        assert!(empty.is_achiral());
    }
}
