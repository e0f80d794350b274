use crate::{Assignments, Evaluate, Sign, Variable};

/// A variable paired with the sign it is required to take.
///
/// Packed as `var << 1 | positive`, so complementary literals differ only in
/// the low bit and literals order by variable first.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Literal {
    code: Variable,
}

impl Literal {
    #[inline]
    pub fn new(var: Variable, sign: impl Into<Sign>) -> Self {
        assert!(var < (Variable::MAX >> 1));
        let sign = sign.into();
        Literal {
            code: (var << 1) | matches!(sign, Sign::Positive) as Variable,
        }
    }

    #[inline]
    pub(crate) fn code(self) -> Variable {
        self.code
    }

    #[inline]
    pub fn var(self) -> Variable {
        self.code >> 1
    }

    #[inline]
    pub fn sign(self) -> Sign {
        ((self.code & 1) == 1).into()
    }

    /// The signed, 1-based integer DIMACS uses for this literal.
    pub fn to_dimacs(self) -> isize {
        let var = (self.var() + 1) as isize;
        match self.sign() {
            Sign::Positive => var,
            Sign::Negative => -var,
        }
    }
}

impl Evaluate for Literal {
    fn evaluate(&self, assignments: &Assignments) -> Option<bool> {
        assignments
            .get(self.var())
            .map(|assignment| assignment.sign() == self.sign())
    }
}

impl std::ops::Not for Literal {
    type Output = Literal;

    #[inline]
    fn not(self) -> Self::Output {
        Literal {
            code: self.code ^ 1,
        }
    }
}

/// Converts a DIMACS literal (1-based, signed) into a 0-based literal.
impl From<isize> for Literal {
    fn from(x: isize) -> Self {
        assert_ne!(x, 0, "literals can only be parsed from non-zero inputs");
        Self::new(x.unsigned_abs() - 1, x > 0)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}

impl std::fmt::Debug for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}{}", self.sign(), self.var())
    }
}

#[test]
fn dimacs_conversion() {
    let l = Literal::from(-3);
    assert_eq!(l.var(), 2);
    assert_eq!(l.sign(), Sign::Negative);
    assert_eq!(l.to_dimacs(), -3);
    assert_eq!((!l).to_dimacs(), 3);
    assert_eq!(format!("{}", Literal::from(7)), "7");
}

#[test]
fn complementary_literals_share_variable() {
    let l = Literal::new(4, Sign::Positive);
    assert_eq!((!l).var(), l.var());
    assert_ne!(!l, l);
    assert_eq!(!!l, l);
    assert!(Literal::new(1, false) < Literal::new(1, true));
    assert!(Literal::new(1, true) < Literal::new(2, false));
}
