use std::collections::HashMap;
use thiserror::Error;

use crate::configuration::{configurations, Configuration};

/// Errors in isomer enumeration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EnumerationError {
    /// The chain has too many centers for the generation counter
    #[error("2^{0} configurations overflow the generation counter")]
    CounterOverflow(usize),
}

/// A distinct optical isomer surviving symmetry reduction
///
/// Carries the representative configuration together with its two transform
/// siblings and the symmetry classification flags.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Isomer {
    /// Representative configuration, first of its rotational pair in generation order
    pub configuration: Configuration,
    /// The representative's 180° rotation partner
    pub partner: Configuration,
    /// The representative with every center flipped
    pub inverted: Configuration,
    /// Fixed under the 180° rotation
    pub dyad: bool,
    /// Palindromic under reversal alone
    pub achiral: bool
}

impl std::fmt::Display for Isomer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.configuration, self.partner, self.inverted)?;
        if self.dyad {
            write!(f, " dyad")?;
        }
        if self.achiral {
            write!(f, " achiral")?;
        }
        Ok(())
    }
}

impl Isomer {
    fn new(configuration: Configuration) -> Isomer {
        let inverted = configuration.invert();
        let partner = inverted.reverse();
        let dyad = configuration == partner;
        let achiral = configuration.is_achiral();
        Isomer {configuration, partner, inverted, dyad, achiral}
    }
}

/// Enumerate the distinct optical isomers of a chain of `n` asymmetric centers
///
/// Walks all `2^n` configurations in generation order and suppresses each
/// configuration whose 180° rotation partner was emitted earlier, so every
/// physically distinct isomer appears exactly once. Emission order and flags
/// are fully determined by `n`.
///
/// The observed set only ever records emitted originals, and candidates are
/// tested by their rotation partner's key. Each rotational pair is therefore
/// represented by its member of lower generation index.
///
/// Brute force over `2^n` states: each additional center doubles the runtime,
/// and the observed set retains every emitted configuration. Chains beyond
/// ~24 centers take unreasonable time, and beyond ~30 the observed set
/// exhausts memory first.
///
/// ```
/// # use aldose::isomers::distinct_isomers;
/// let isomers = distinct_isomers(1).unwrap();
/// assert_eq!(isomers.len(), 1);
/// assert_eq!(isomers[0].to_string(), "0 1 1 achiral");
/// ```
pub fn distinct_isomers(n: usize) -> Result<Vec<Isomer>, EnumerationError> {
    Configuration::set_count(n).ok_or(EnumerationError::CounterOverflow(n))?;

    let mut observed: HashMap<Configuration, u64> = HashMap::new();
    let mut isomers = Vec::new();

    for (i, configuration) in configurations(n).enumerate() {
        let isomer = Isomer::new(configuration);
        if observed.contains_key(&isomer.partner) {
            // Rotational duplicate of an earlier isomer
            continue;
        }

        observed.insert(isomer.configuration.clone(), i as u64);
        isomers.push(isomer);
    }

    Ok(isomers)
}
