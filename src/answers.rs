/// Winning coordinates for one challenge stage.
pub struct Answer {
    pub competition: &'static str,
    pub challenge: &'static str,
    /// (latitude, longitude)
    pub coords: (f64, f64),
}

/// The solved answer table. Slice order is the order the flag fragments are
/// concatenated in, so reordering entries changes the final flag.
pub const CHALLENGES: &[Answer] = &[
    Answer {
        competition: "easy",
        challenge: "one",
        coords: (0.0, 0.0),
    },
    Answer {
        competition: "second",
        challenge: "two",
        coords: (0.0, 0.0),
    },
    Answer {
        competition: "third",
        challenge: "three",
        coords: (0.0, 0.0),
    },
    Answer {
        competition: "fourth",
        challenge: "four",
        coords: (0.0, 0.0),
    },
];

#[cfg(test)]
mod tests {
    use super::CHALLENGES;

    #[test]
    fn challenge_names_are_unique() {
        for (i, a) in CHALLENGES.iter().enumerate() {
            for b in &CHALLENGES[i + 1..] {
                assert!(
                    (a.competition, a.challenge) != (b.competition, b.challenge),
                    "duplicate entry {}-{}",
                    a.competition,
                    a.challenge
                );
            }
        }
    }
}
