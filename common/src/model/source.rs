use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Answers offered to "How did you hear about this event?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    InstagramAd,
    InstagramNonAd,
    Flyer,
    Luma,
    WordOfMouth,
    /// Free-text answer typed by the operator.
    Other,
}

impl Source {
    /// Every option, in the order the dialog lists them.
    pub const ALL: [Source; 6] = [
        Source::InstagramAd,
        Source::InstagramNonAd,
        Source::Flyer,
        Source::Luma,
        Source::WordOfMouth,
        Source::Other,
    ];

    /// Text shown in the dialog and stored on the record.
    pub fn label(self) -> &'static str {
        match self {
            Source::InstagramAd => "Instagram Ad",
            Source::InstagramNonAd => "Instagram Non-Ad",
            Source::Flyer => "Flyer",
            Source::Luma => "Luma",
            Source::WordOfMouth => "Word of Mouth",
            Source::Other => "Other",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown source option '{0}'")]
pub struct UnknownSource(pub String);

impl FromStr for Source {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .into_iter()
            .find(|source| source.label() == s)
            .ok_or_else(|| UnknownSource(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for source in Source::ALL {
            assert_eq!(source.label().parse::<Source>(), Ok(source));
        }
        assert!("Radio".parse::<Source>().is_err());
    }
}
