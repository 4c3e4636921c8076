//! common routines to be included by benches

use twos_bigint::BigInt;

/// Generate `count` integers of up to `max_words` random words each
///
/// Roughly half of the values are negative. The same seed always gives the
/// same values.
pub fn random_bigints(count: usize, max_words: u32, seed: u64) -> Vec<BigInt> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count)
        .map(|_| {
            let len = rng.rand_range(1..max_words + 1) as usize;
            let words: Vec<u32> = (0..len).map(|_| rng.rand_u32()).collect();
            let negative = rng.rand_u32() & 1 == 1;
            BigInt::from_slice(negative, &words)
        })
        .collect()
}

/// Decimal strings of the given integers
pub fn decimal_strings(values: &[BigInt]) -> Vec<String> {
    values.iter().map(|n| n.to_string()).collect()
}


/// Randomly iterates through items in vector
pub struct RandomIterator<'a, T> {
    v: &'a Vec<T>,
    rng: oorandom::Rand32,
}

impl<'a, T: Copy> RandomIterator<'a, T> {
    pub fn new(v: &'a Vec<T>) -> Self {
        let seed = v.as_ptr() as u64;
        Self::new_with_seed(v, seed)
    }

    pub fn new_with_seed(v: &'a Vec<T>, seed: u64) -> Self {
        Self {
            v: v,
            rng: oorandom::Rand32::new(seed),
        }
    }

    pub fn next(&mut self) -> T {
        let idx = self.rng.rand_u32() as usize % self.v.len();
        self.v[idx]
    }
}
