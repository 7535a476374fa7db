use {
    super::Unbox,
    crate::syntax_tree::logic::{
        Atom, BinaryConnective, Formula, Proposition, Quantification, UnaryConnective,
    },
};

pub enum UnboxedFormula {
    Proposition(Proposition),
    Atom(Atom),
    UnaryFormula {
        connective: UnaryConnective,
        formula: Formula,
    },
    QuantifiedFormula {
        quantification: Quantification,
        formula: Formula,
    },
    BinaryFormula {
        connective: BinaryConnective,
        lhs: Formula,
        rhs: Formula,
    },
}

impl UnboxedFormula {
    pub fn rebox(self) -> Formula {
        match self {
            Self::Proposition(p) => Formula::Proposition(p),
            Self::Atom(a) => Formula::Atom(a),
            Self::UnaryFormula {
                connective,
                formula,
            } => Formula::UnaryFormula {
                connective,
                formula: Box::new(formula),
            },
            Self::QuantifiedFormula {
                quantification,
                formula,
            } => Formula::QuantifiedFormula {
                quantification,
                formula: Box::new(formula),
            },
            Self::BinaryFormula {
                connective,
                lhs,
                rhs,
            } => Formula::BinaryFormula {
                connective,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
        }
    }
}

impl Unbox for Formula {
    type Unboxed = UnboxedFormula;

    fn unbox(self) -> UnboxedFormula {
        match self {
            Self::Proposition(p) => UnboxedFormula::Proposition(p),
            Self::Atom(a) => UnboxedFormula::Atom(a),
            Self::UnaryFormula {
                connective,
                formula,
            } => UnboxedFormula::UnaryFormula {
                connective,
                formula: *formula,
            },
            Self::QuantifiedFormula {
                quantification,
                formula,
            } => UnboxedFormula::QuantifiedFormula {
                quantification,
                formula: *formula,
            },
            Self::BinaryFormula {
                connective,
                lhs,
                rhs,
            } => UnboxedFormula::BinaryFormula {
                connective,
                lhs: *lhs,
                rhs: *rhs,
            },
        }
    }
}
