use thiserror::Error;

/// Failure modes of [`CodeCracker::crack`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CrackError {
    /// Every allowed round produced a guess the validator rejected.
    #[error("no valid guess after {attempts} attempt(s)")]
    Exhausted { attempts: u32 },
}

/// Bounded guess-and-check loop over an encoded text.
///
/// `make_guess` proposes a decoding for `(text, round)` and `validate`
/// accepts or rejects it; the first accepted guess wins. Both policies are
/// caller-supplied, so the cracker knows nothing about the cipher it is
/// breaking.
pub struct CodeCracker<G, V> {
    attempts: u32,
    make_guess: G,
    validate: V,
}

impl<G, V> CodeCracker<G, V>
where
    G: FnMut(&str, u32) -> String,
    V: FnMut(&str) -> bool,
{
    pub fn new(attempts: u32, make_guess: G, validate: V) -> Self {
        Self {
            attempts,
            make_guess,
            validate,
        }
    }

    /// Run up to the configured number of rounds.
    ///
    /// Zero configured attempts exhausts immediately, without ever calling
    /// the guesser.
    pub fn crack(&mut self, text: &str) -> Result<String, CrackError> {
        for round in 0..self.attempts {
            let guess = (self.make_guess)(text, round);
            if (self.validate)(&guess) {
                return Ok(guess);
            }
        }
        Err(CrackError::Exhausted {
            attempts: self.attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_valid_guess_wins() {
        let mut cracker = CodeCracker::new(
            10,
            |text: &str, round: u32| format!("{text}-{round}"),
            |guess: &str| guess.ends_with("-3"),
        );

        assert_eq!(cracker.crack("code"), Ok("code-3".to_string()));
    }

    #[test]
    fn stops_guessing_after_the_first_hit() {
        let mut rounds_run = 0u32;
        let mut cracker = CodeCracker::new(
            10,
            |_text: &str, round: u32| {
                rounds_run += 1;
                round.to_string()
            },
            |guess: &str| guess == "2",
        );

        assert_eq!(cracker.crack("ignored"), Ok("2".to_string()));
        drop(cracker);
        assert_eq!(rounds_run, 3);
    }

    #[test]
    fn exhausts_when_nothing_validates() {
        let mut cracker = CodeCracker::new(
            5,
            |text: &str, _round: u32| text.to_string(),
            |_guess: &str| false,
        );

        assert_eq!(cracker.crack("code"), Err(CrackError::Exhausted { attempts: 5 }));
    }

    #[test]
    fn zero_attempts_never_invokes_the_guesser() {
        let mut guesses = 0u32;
        let mut cracker = CodeCracker::new(
            0,
            |text: &str, _round: u32| {
                guesses += 1;
                text.to_string()
            },
            |_guess: &str| true,
        );

        assert_eq!(cracker.crack("code"), Err(CrackError::Exhausted { attempts: 0 }));
        drop(cracker);
        assert_eq!(guesses, 0);
    }

    #[test]
    fn exhaustion_reads_like_a_report() {
        let err = CrackError::Exhausted { attempts: 4 };

        assert_eq!(err.to_string(), "no valid guess after 4 attempt(s)");
    }
}
