//! Whitespace relation between a term and the term before it.

use serde::Serialize;

/// Whether a term is separated from its predecessor in romanized output,
/// and whether that was spelled out in the source or inferred from the
/// locale's convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Spacing {
    Space,
    NoSpace,
    ImplicitSpace,
    ImplicitNoSpace,
}

impl Spacing {
    /// Explicit spacing from a source `space:` flag.
    pub fn explicit(space: bool) -> Self {
        if space {
            Self::Space
        } else {
            Self::NoSpace
        }
    }

    /// Implicit spacing from the locale convention.
    pub fn implicit(spaceless: bool) -> Self {
        if spaceless {
            Self::ImplicitNoSpace
        } else {
            Self::ImplicitSpace
        }
    }

    /// True when a visible space goes before the term.
    pub fn has_space(self) -> bool {
        matches!(self, Self::Space | Self::ImplicitSpace)
    }

    pub fn is_implicit(self) -> bool {
        matches!(self, Self::ImplicitSpace | Self::ImplicitNoSpace)
    }
}

impl From<Spacing> for bool {
    fn from(spacing: Spacing) -> bool {
        spacing.has_space()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(Spacing::Space.has_space());
        assert!(Spacing::ImplicitSpace.has_space());
        assert!(!Spacing::NoSpace.has_space());
        assert!(!Spacing::ImplicitNoSpace.has_space());
        assert!(bool::from(Spacing::ImplicitSpace));
    }

    #[test]
    fn constructors() {
        assert_eq!(Spacing::explicit(true), Spacing::Space);
        assert_eq!(Spacing::explicit(false), Spacing::NoSpace);
        assert_eq!(Spacing::implicit(true), Spacing::ImplicitNoSpace);
        assert_eq!(Spacing::implicit(false), Spacing::ImplicitSpace);
        assert!(Spacing::implicit(true).is_implicit());
        assert!(!Spacing::explicit(true).is_implicit());
    }
}
