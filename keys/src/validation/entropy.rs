//! # Password Entropy Estimation
//!
//! miniLock will not derive a key from a password it considers guessable.
//! How "guessable" is measured is pluggable: anything that implements
//! [`EntropyEstimator`] (including a plain closure) can be handed to the
//! [`KeyGenerator`](crate::identity::KeyGenerator).
//!
//! The default, [`PatternEstimator`], runs zxcvbn's matchers (dictionaries,
//! keyboard walks, repeats, sequences, dates) and sums `log2(guesses)` over
//! the cheapest match sequence it finds. zxcvbn's own total is a saturating
//! `u64`, which tops out at 64 bits and could never clear a 100-bit floor,
//! so the per-match figures are summed in floating point instead.
//!
//! [`CharsetEstimator`] is the plain brute-force model: each character is
//! worth `log2(pool)` bits, where the pool is the union of the character
//! classes the password uses, and single-character repeats and steps
//! (`aaaa`, `abcd`, `4321`) are worth one bit each. It knows nothing about
//! words, so `passwordpassword` looks strong to it.

use zxcvbn::matching::patterns::MatchPattern;
use zxcvbn::Match;

/// Scores a password in bits of entropy.
pub trait EntropyEstimator: Send + Sync {
    /// Estimated entropy of `password`, in bits.
    fn estimate_bits(&self, password: &str) -> f64;
}

impl<F> EntropyEstimator for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn estimate_bits(&self, password: &str) -> f64 {
        self(password)
    }
}

const LOWERCASE_POOL: u32 = 26;
const UPPERCASE_POOL: u32 = 26;
const DIGIT_POOL: u32 = 10;
/// Printable ASCII punctuation plus space.
const SYMBOL_POOL: u32 = 33;
/// Rough allowance for anything outside ASCII.
const NON_ASCII_POOL: u32 = 100;
/// What a predictable character (repeat or sequence step) is worth.
const PREDICTABLE_CHAR_BITS: f64 = 1.0;

/// Character-pool brute-force estimator. See the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharsetEstimator;

impl CharsetEstimator {
    fn pool_size(password: &str) -> u32 {
        let (mut lower, mut upper, mut digit, mut symbol, mut other) =
            (false, false, false, false, false);
        for c in password.chars() {
            match c {
                'a'..='z' => lower = true,
                'A'..='Z' => upper = true,
                '0'..='9' => digit = true,
                c if c.is_ascii() => symbol = true,
                _ => other = true,
            }
        }
        [
            (lower, LOWERCASE_POOL),
            (upper, UPPERCASE_POOL),
            (digit, DIGIT_POOL),
            (symbol, SYMBOL_POOL),
            (other, NON_ASCII_POOL),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, size)| size)
        .sum()
    }
}

impl EntropyEstimator for CharsetEstimator {
    fn estimate_bits(&self, password: &str) -> f64 {
        let pool = Self::pool_size(password);
        if pool == 0 {
            return 0.0;
        }
        let per_char = f64::from(pool).log2();

        let mut bits = 0.0;
        let mut previous: Option<char> = None;
        for c in password.chars() {
            bits += match previous {
                Some(p) if is_predictable_step(p, c) => PREDICTABLE_CHAR_BITS,
                _ => per_char,
            };
            previous = Some(c);
        }
        bits
    }
}

/// zxcvbn-backed estimator. See the module docs.
///
/// Only the first 100 characters are analysed; zxcvbn ignores the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternEstimator;

impl PatternEstimator {
    /// Bits for one element of zxcvbn's match sequence.
    ///
    /// Unmatched stretches are priced by zxcvbn at ten guesses per
    /// character, which undersells random mixed-case text, so those take
    /// the larger of that and the charset figure.
    fn match_bits(m: &Match) -> f64 {
        let charset = || CharsetEstimator.estimate_bits(&m.token);
        match (&m.pattern, m.guesses) {
            (MatchPattern::BruteForce, Some(guesses)) => log2_guesses(guesses).max(charset()),
            (_, Some(guesses)) => log2_guesses(guesses),
            (_, None) => charset(),
        }
    }
}

impl EntropyEstimator for PatternEstimator {
    fn estimate_bits(&self, password: &str) -> f64 {
        let analysis = zxcvbn::zxcvbn(password, &[]);
        analysis.sequence().iter().map(Self::match_bits).sum()
    }
}

fn log2_guesses(guesses: u64) -> f64 {
    (guesses.max(1) as f64).log2()
}

/// Same character again, or one step up/down the code point range.
fn is_predictable_step(previous: char, current: char) -> bool {
    let delta = (current as i64 - previous as i64).abs();
    delta <= 1 && current.is_alphanumeric() && previous.is_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSPHRASE: &str = "magnetometers payee induce tangibly polonaises unrestricted oilfield";

    #[test]
    fn empty_password_has_no_entropy() {
        assert_eq!(CharsetEstimator.estimate_bits(""), 0.0);
    }

    #[test]
    fn single_class_pool() {
        let bits = CharsetEstimator.estimate_bits("zq");
        assert!((bits - 2.0 * 26f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn mixed_classes_widen_the_pool() {
        assert_eq!(CharsetEstimator::pool_size("aA1!"), 26 + 26 + 10 + 33);
        assert_eq!(CharsetEstimator::pool_size("a b"), 26 + 33);
        assert_eq!(CharsetEstimator::pool_size("ü"), 100);
    }

    #[test]
    fn repeats_and_sequences_are_cheap() {
        let per_char = 26f64.log2();
        let repeated = CharsetEstimator.estimate_bits("aaaa");
        assert!((repeated - (per_char + 3.0)).abs() < 1e-9);

        let sequence = CharsetEstimator.estimate_bits("abcdef");
        assert!((sequence - (per_char + 5.0)).abs() < 1e-9);

        let descending = CharsetEstimator.estimate_bits("4321");
        assert!((descending - (10f64.log2() + 3.0)).abs() < 1e-9);
    }

    #[test]
    fn single_word_is_below_minilock_floor() {
        assert!(CharsetEstimator.estimate_bits("magnetometers") < 100.0);
    }

    #[test]
    fn long_passphrase_clears_minilock_floor() {
        assert!(CharsetEstimator.estimate_bits(PASSPHRASE) >= 100.0);
    }

    #[test]
    fn pattern_estimator_sees_through_repeated_words() {
        for weak in [
            "passwordpasswordpasswordpassword",
            "qwertyuiopqwertyuiopqwertyuiop",
            "Password1!Password1!Password1!",
        ] {
            assert!(CharsetEstimator.estimate_bits(weak) >= 100.0, "{weak}");
            let bits = PatternEstimator.estimate_bits(weak);
            assert!(bits < 100.0, "{weak} scored {bits}");
        }
    }

    #[test]
    fn pattern_estimator_scores_dictionary_words_low() {
        assert!(PatternEstimator.estimate_bits("password") < 10.0);
        assert!(PatternEstimator.estimate_bits("magnetometers") < 100.0);
    }

    #[test]
    fn pattern_estimator_passes_long_passphrase() {
        assert!(PatternEstimator.estimate_bits(PASSPHRASE) >= 100.0);
    }

    #[test]
    fn pattern_estimator_is_not_capped_at_64_bits() {
        let entropy = zxcvbn::zxcvbn(PASSPHRASE, &[]);
        assert!(entropy.guesses_log10() * std::f64::consts::LOG2_10 <= 64.0 + 1e-9);
        assert!(PatternEstimator.estimate_bits(PASSPHRASE) > 64.0);
    }

    #[test]
    fn pattern_estimator_empty_password() {
        assert_eq!(PatternEstimator.estimate_bits(""), 0.0);
    }

    #[test]
    fn unmatched_text_keeps_its_charset_price() {
        let bruteforce = Match {
            pattern: MatchPattern::BruteForce,
            token: "vQ7#".into(),
            guesses: Some(10_000),
            ..Match::default()
        };
        let bits = PatternEstimator::match_bits(&bruteforce);
        assert!((bits - 4.0 * 95f64.log2()).abs() < 1e-9);

        let dictionary = Match {
            pattern: MatchPattern::Dictionary(Default::default()),
            token: "vQ7#".into(),
            guesses: Some(1024),
            ..Match::default()
        };
        assert_eq!(PatternEstimator::match_bits(&dictionary), 10.0);
    }

    #[test]
    fn closures_are_estimators() {
        let fixed = |_: &str| 42.0;
        assert_eq!(fixed.estimate_bits("anything"), 42.0);
    }
}
