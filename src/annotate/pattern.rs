/// Grid pattern vocabulary.
///
/// A slide heading is tagged with exactly one of these patterns. The
/// reveal.js theme maps each `data-state` value to a background image of the
/// same name, which [`crate::backgrounds`] renders.
use crate::common::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Background grid applied to a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridPattern {
    /// Very dense grid (25px spacing)
    Dense,
    /// Fine grid with good visibility (40px spacing)
    Fine,
    /// Medium spacing grid (60px spacing)
    Medium,
    /// Coarse grid with low visibility (80px spacing)
    Coarse,
    /// Sparse grid (100px spacing)
    Sparse,
    /// Plain dark background, used for slides with figures or frames
    None,
}

static PATTERN_NAMES: phf::Map<&'static str, GridPattern> = phf::phf_map! {
    "grid-dense" => GridPattern::Dense,
    "grid-fine" => GridPattern::Fine,
    "grid-medium" => GridPattern::Medium,
    "grid-coarse" => GridPattern::Coarse,
    "grid-sparse" => GridPattern::Sparse,
    "grid-none" => GridPattern::None,
};

impl GridPattern {
    /// Every pattern, including [`GridPattern::None`].
    pub const ALL: [GridPattern; 6] = [
        GridPattern::Dense,
        GridPattern::Fine,
        GridPattern::Medium,
        GridPattern::Coarse,
        GridPattern::Sparse,
        GridPattern::None,
    ];

    /// Patterns eligible for random assignment, in selection order.
    pub const RANDOMIZED: [GridPattern; 5] = [
        GridPattern::Dense,
        GridPattern::Fine,
        GridPattern::Medium,
        GridPattern::Coarse,
        GridPattern::Sparse,
    ];

    /// The `data-state` value written into slide headings.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            GridPattern::Dense => "grid-dense",
            GridPattern::Fine => "grid-fine",
            GridPattern::Medium => "grid-medium",
            GridPattern::Coarse => "grid-coarse",
            GridPattern::Sparse => "grid-sparse",
            GridPattern::None => "grid-none",
        }
    }

    /// File name of the rendered background for this pattern.
    ///
    /// ```rust
    /// use slidegrid::GridPattern;
    ///
    /// assert_eq!(GridPattern::Fine.background_file_name(), "grid_fine.png");
    /// ```
    pub fn background_file_name(self) -> String {
        format!("{}.png", self.as_str().replace('-', "_"))
    }

    /// Whether this is the distinguished "no grid" pattern.
    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, GridPattern::None)
    }
}

impl fmt::Display for GridPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GridPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PATTERN_NAMES
            .get(s)
            .copied()
            .ok_or_else(|| Error::UnknownPattern(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for pattern in GridPattern::ALL {
            assert_eq!(pattern.as_str().parse::<GridPattern>().unwrap(), pattern);
        }
    }

    #[test]
    fn test_randomized_excludes_none() {
        assert!(GridPattern::RANDOMIZED.iter().all(|p| !p.is_none()));
        assert_eq!(GridPattern::RANDOMIZED.len() + 1, GridPattern::ALL.len());
    }

    #[test]
    fn test_unknown_name() {
        let err = "grid-diagonal".parse::<GridPattern>().unwrap_err();
        assert!(matches!(err, Error::UnknownPattern(name) if name == "grid-diagonal"));
    }

    #[test]
    fn test_background_file_names() {
        assert_eq!(GridPattern::None.background_file_name(), "grid_none.png");
        assert_eq!(GridPattern::Sparse.background_file_name(), "grid_sparse.png");
    }
}
