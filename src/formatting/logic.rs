use {
    crate::syntax_tree::{
        logic::{
            Atom, BinaryConnective, Constant, Formula, Predicate, Proposition, Quantification,
            Quantifier, Term, UnaryConnective, Variable,
        },
        Node,
    },
    std::fmt::{self, Display, Formatter},
};

pub struct Format<'a, N: Node>(pub &'a N);

impl Display for Format<'_, Variable> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 .0)
    }
}

impl Display for Format<'_, Constant> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 .0)
    }
}

impl Display for Format<'_, Term> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Term::Variable(v) => Format(v).fmt(f),
            Term::Constant(c) => Format(c).fmt(f),
        }
    }
}

impl Display for Format<'_, Proposition> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 .0)
    }
}

impl Display for Format<'_, Predicate> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 .0)
    }
}

impl Display for Format<'_, Atom> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let predicate = Format(&self.0.predicate);
        let lhs = Format(&self.0.terms[0]);
        let rhs = Format(&self.0.terms[1]);
        write!(f, "{predicate}({lhs},{rhs})")
    }
}

impl Display for Format<'_, UnaryConnective> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            UnaryConnective::Negation => write!(f, "~"),
        }
    }
}

impl Display for Format<'_, Quantifier> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Quantifier::Forall => write!(f, "A"),
            Quantifier::Exists => write!(f, "E"),
        }
    }
}

impl Display for Format<'_, Quantification> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let quantifier = Format(&self.0.quantifier);
        let variable = Format(&self.0.variable);
        write!(f, "{quantifier}{variable}")
    }
}

impl Display for Format<'_, BinaryConnective> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            BinaryConnective::Conjunction => write!(f, "&"),
            BinaryConnective::Disjunction => write!(f, "\\/"),
            BinaryConnective::Implication => write!(f, "->"),
        }
    }
}

impl Display for Format<'_, Formula> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Formula::Proposition(p) => Format(p).fmt(f),

            Formula::Atom(a) => Format(a).fmt(f),

            Formula::UnaryFormula {
                connective,
                formula,
            } => {
                let connective = Format(connective);
                let formula = Format(&**formula);
                write!(f, "{connective}{formula}")
            }

            Formula::QuantifiedFormula {
                quantification,
                formula,
            } => {
                let quantification = Format(quantification);
                let formula = Format(&**formula);
                write!(f, "{quantification}{formula}")
            }

            Formula::BinaryFormula {
                connective,
                lhs,
                rhs,
            } => {
                let connective = Format(connective);
                let lhs = Format(&**lhs);
                let rhs = Format(&**rhs);
                write!(f, "({lhs}{connective}{rhs})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::Format,
        crate::syntax_tree::logic::{
            Atom, BinaryConnective, Constant, Formula, Predicate, Proposition, Term, Variable,
        },
    };

    #[test]
    fn format_atom() {
        assert_eq!(
            Format(&Atom {
                predicate: Predicate('P'),
                terms: [Term::Variable(Variable('x')), Term::Constant(Constant('a'))],
            })
            .to_string(),
            "P(x,a)"
        )
    }

    #[test]
    fn format_binary_connective() {
        assert_eq!(Format(&BinaryConnective::Conjunction).to_string(), "&");
        assert_eq!(Format(&BinaryConnective::Disjunction).to_string(), "\\/");
        assert_eq!(Format(&BinaryConnective::Implication).to_string(), "->");
    }

    #[test]
    fn format_formula() {
        assert_eq!(
            Format(&Formula::BinaryFormula {
                connective: BinaryConnective::Implication,
                lhs: Formula::Proposition(Proposition('p')).into(),
                rhs: Formula::Proposition(Proposition('q')).negate().into(),
            })
            .to_string(),
            "(p->~q)"
        )
    }
}
