/// The truth value a literal requires of its variable.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// State marker used in diagnostics: `[+]`, `[-]`.
    pub fn symbol(self) -> &'static str {
        match self {
            Sign::Positive => "[+]",
            Sign::Negative => "[-]",
        }
    }
}

impl From<bool> for Sign {
    #[inline]
    fn from(x: bool) -> Self {
        if x {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

impl From<Sign> for bool {
    #[inline]
    fn from(sign: Sign) -> Self {
        matches!(sign, Sign::Positive)
    }
}

impl std::ops::Not for Sign {
    type Output = Sign;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", if self == &Sign::Negative { "-" } else { "" },)
    }
}

impl std::fmt::Debug for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", if self == &Sign::Positive { "+" } else { "-" },)
    }
}

#[test]
fn negation_flips() {
    assert_eq!(!Sign::Positive, Sign::Negative);
    assert_eq!(!Sign::Negative, Sign::Positive);
    assert!(bool::from(Sign::from(true)));
    assert_eq!(Sign::Negative.symbol(), "[-]");
}
