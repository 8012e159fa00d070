use std::fmt;

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Counts derived from a transcription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub word_count: usize,
    pub character_count: usize,
    pub space_count: usize,
    pub vowel_count: usize,
}

impl TextStats {
    /// Only the literal space character separates words and is excluded from
    /// the character count; tabs and newlines count as characters.
    pub fn analyze(text: &str) -> Self {
        let word_count = text.split(' ').filter(|token| !token.is_empty()).count();

        let mut stats = Self {
            word_count,
            ..Self::default()
        };

        for c in text.chars() {
            if c == ' ' {
                stats.space_count += 1;
            } else {
                stats.character_count += 1;
            }

            if VOWELS.contains(&c.to_ascii_uppercase()) {
                stats.vowel_count += 1;
            }
        }

        stats
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Word Count: {}\n\nCharacter Count: {}\n\nSpace Count: {}\n\nVowel Count: {}",
            self.word_count, self.character_count, self.space_count, self.vowel_count
        )
    }
}
