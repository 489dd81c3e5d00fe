//! Noise strategies.
//!
//! Each [`Noise`] variant is a stateless strategy: it turns an animal's
//! full name into one narrated line. Animals hold a `Noise` by value, so
//! one "instance" per kind is trivially shared.

use zoo_types::Noise;

use crate::narration::Narrator;

/// How an animal vocalizes.
pub trait NoiseStrategy {
    /// The verb phrase appended to the full name, including the period.
    fn verb_phrase(&self) -> &'static str;

    /// Narrate `"{full_name} {verb_phrase}"`.
    fn make_noise(&self, full_name: &str, out: &mut dyn Narrator) {
        out.narrate(&format!("{full_name} {}", self.verb_phrase()));
    }
}

impl NoiseStrategy for Noise {
    fn verb_phrase(&self) -> &'static str {
        match self {
            Self::Roar => "roars.",
            Self::Silence => "is silent.",
            Self::Hoot => "hoots.",
            Self::Hiss => "hisses.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narration::Transcript;

    #[test]
    fn each_noise_has_fixed_text() {
        let mut out = Transcript::new();
        for noise in [Noise::Roar, Noise::Silence, Noise::Hoot, Noise::Hiss] {
            noise.make_noise("Tony the T. rex", &mut out);
        }
        assert_eq!(
            out.lines(),
            [
                "Tony the T. rex roars.",
                "Tony the T. rex is silent.",
                "Tony the T. rex hoots.",
                "Tony the T. rex hisses.",
            ]
        );
    }
}
