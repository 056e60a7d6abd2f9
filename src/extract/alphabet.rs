/// Punctuation tried after letters and digits, and again in the fallback pass
pub const PUNCTUATION: &str = "{}_-!@#$%^&*()[]|:;<>,.?/~`+=";

/// Candidate characters, in the order they are tried
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    primary: Vec<char>,
    fallback: Vec<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        let primary = ('a'..='z')
            .chain('A'..='Z')
            .chain('0'..='9')
            .chain(PUNCTUATION.chars())
            .collect();

        Self {
            primary,
            fallback: PUNCTUATION.chars().collect(),
        }
    }
}

impl Alphabet {
    pub fn new(primary: &str, fallback: &str) -> Self {
        Self {
            primary: primary.chars().collect(),
            fallback: fallback.chars().collect(),
        }
    }

    /// Same primary set, no second pass
    pub fn without_fallback(mut self) -> Self {
        self.fallback.clear();
        self
    }

    pub fn primary(&self) -> &[char] {
        &self.primary
    }

    pub fn fallback(&self) -> &[char] {
        &self.fallback
    }
}
