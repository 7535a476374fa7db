use {
    crate::syntax_tree::logic::{Formula, Quantifier, UnaryConnective},
    std::fmt::{self, Display, Formatter},
};

/// The nine syntactic categories of the concrete syntax, with the wire
/// codes of the batch report format.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    NotAFormula,
    FolAtom,
    FolNegation,
    UniversallyQuantified,
    ExistentiallyQuantified,
    FolBinary,
    Proposition,
    PropositionalNegation,
    PropositionalBinary,
}

impl Category {
    pub fn of(formula: &Formula) -> Category {
        match formula {
            Formula::Proposition(_) => Category::Proposition,

            Formula::Atom(_) => Category::FolAtom,

            Formula::UnaryFormula {
                connective: UnaryConnective::Negation,
                formula,
            } => {
                if formula.is_propositional() {
                    Category::PropositionalNegation
                } else {
                    Category::FolNegation
                }
            }

            Formula::QuantifiedFormula {
                quantification, ..
            } => match quantification.quantifier {
                Quantifier::Forall => Category::UniversallyQuantified,
                Quantifier::Exists => Category::ExistentiallyQuantified,
            },

            Formula::BinaryFormula { lhs, rhs, .. } => {
                if lhs.is_propositional() && rhs.is_propositional() {
                    Category::PropositionalBinary
                } else {
                    Category::FolBinary
                }
            }
        }
    }

    pub fn code(self) -> usize {
        match self {
            Category::NotAFormula => 0,
            Category::FolAtom => 1,
            Category::FolNegation => 2,
            Category::UniversallyQuantified => 3,
            Category::ExistentiallyQuantified => 4,
            Category::FolBinary => 5,
            Category::Proposition => 6,
            Category::PropositionalNegation => 7,
            Category::PropositionalBinary => 8,
        }
    }

    pub fn is_binary(self) -> bool {
        matches!(self, Category::FolBinary | Category::PropositionalBinary)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Category::NotAFormula => write!(f, "not a formula"),
            Category::FolAtom => write!(f, "an atom"),
            Category::FolNegation => {
                write!(f, "a negation of a first order logic formula")
            }
            Category::UniversallyQuantified => {
                write!(f, "a universally quantified formula")
            }
            Category::ExistentiallyQuantified => {
                write!(f, "an existentially quantified formula")
            }
            Category::FolBinary => {
                write!(f, "a binary connective first order formula")
            }
            Category::Proposition => write!(f, "a proposition"),
            Category::PropositionalNegation => {
                write!(f, "a negation of a propositional formula")
            }
            Category::PropositionalBinary => {
                write!(f, "a binary connective propositional formula")
            }
        }
    }
}

/// Classify an arbitrary string. Total: anything the grammar rejects is
/// `NotAFormula`.
pub fn classify(input: &str) -> Category {
    match input.parse::<Formula>() {
        Ok(formula) => Category::of(&formula),
        Err(_) => Category::NotAFormula,
    }
}

/// The left operand of a binary formula, in canonical text. `None` unless
/// the input is a binary formula.
pub fn lhs(input: &str) -> Option<String> {
    match input.parse::<Formula>() {
        Ok(Formula::BinaryFormula { lhs, .. }) => Some(lhs.to_string()),
        _ => None,
    }
}

/// The main connective of a binary formula: `&`, `\/`, or `->`.
pub fn connective(input: &str) -> Option<String> {
    match input.parse::<Formula>() {
        Ok(Formula::BinaryFormula { connective, .. }) => Some(connective.to_string()),
        _ => None,
    }
}

/// The right operand of a binary formula, in canonical text.
pub fn rhs(input: &str) -> Option<String> {
    match input.parse::<Formula>() {
        Ok(Formula::BinaryFormula { rhs, .. }) => Some(rhs.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, connective, lhs, rhs, Category};

    #[test]
    fn classify_spot_checks() {
        for (input, code) in [
            ("p", 6),
            ("q", 6),
            ("r", 6),
            ("s", 6),
            ("P(x,y)", 1),
            ("Q(a,a)", 1),
            ("R(x,a)", 1),
            ("~p", 7),
            ("~~q", 7),
            ("~(p&q)", 7),
            ("~(p->q)", 7),
            ("~P(x,y)", 2),
            ("~AxP(x,x)", 2),
            ("~Axp", 2),
            ("AxP(x,x)", 3),
            ("Axp", 3),
            ("AzEwQ(z,w)", 3),
            ("ExP(x,x)", 4),
            ("Ex~P(x,x)", 4),
            ("(p&q)", 8),
            ("(p\\/q)", 8),
            ("(p->q)", 8),
            ("((p\\/q)->r)", 8),
            ("(~p&~(q->r))", 8),
            ("(P(x,y)->Q(z,w))", 5),
            ("(p&P(x,x))", 5),
            ("(ExP(x,x)&Ax~P(x,x))", 5),
        ] {
            assert_eq!(classify(input).code(), code, "classifying {input}")
        }
    }

    #[test]
    fn classify_rejections() {
        for input in [
            "",
            "p&q",
            "P(x)",
            "P(x,y,z)",
            "x",
            "a",
            "t",
            "T(x,y)",
            "(p&q",
            "p&q)",
            "(p)",
            "(p&q\\/r)",
            "(p->q->r)",
            "~",
            "~x",
            "A",
            "Ax",
            "Ap",
            "Axx",
            "P[x,y]",
            "P(x, y)",
            " p",
            "p ",
            "(p & q)",
            "pq",
            "~~",
        ] {
            assert_eq!(
                classify(input),
                Category::NotAFormula,
                "classifying {input}"
            )
        }
    }

    #[test]
    fn classify_is_total_on_junk() {
        for input in [
            "\u{0}",
            "((((((((",
            "~~~~~~~~~",
            "AxAyAzAw",
            "P(x,y)P(x,y)",
            "->",
            "\\/",
            "))((",
            "PARSE",
            "🦀",
            "p\nq",
        ] {
            let _ = classify(input).code();
        }
    }

    #[test]
    fn accessors() {
        for (input, left, con, right) in [
            ("(p&q)", "p", "&", "q"),
            ("((p\\/q)->r)", "(p\\/q)", "->", "r"),
            ("(P(x,y)->Q(z,w))", "P(x,y)", "->", "Q(z,w)"),
            ("(~p\\/~(q&r))", "~p", "\\/", "~(q&r)"),
            ("(ExP(x,x)&Ax~P(x,x))", "ExP(x,x)", "&", "Ax~P(x,x)"),
        ] {
            assert_eq!(lhs(input).as_deref(), Some(left), "lhs of {input}");
            assert_eq!(connective(input).as_deref(), Some(con), "connective of {input}");
            assert_eq!(rhs(input).as_deref(), Some(right), "rhs of {input}");
        }
    }

    #[test]
    fn accessors_on_non_binary_inputs() {
        for input in ["p", "~p", "P(x,y)", "AxP(x,x)", "~(p&q)", "p&q", ""] {
            assert_eq!(lhs(input), None, "lhs of {input}");
            assert_eq!(connective(input), None, "connective of {input}");
            assert_eq!(rhs(input), None, "rhs of {input}");
        }
    }

    #[test]
    fn accessors_agree_with_input_text() {
        for input in [
            "(p&q)",
            "((p\\/q)->r)",
            "(P(x,y)->Q(z,w))",
            "((p->q)&(p&~q))",
            "(ExP(x,x)&Ax~P(x,x))",
        ] {
            assert!(classify(input).is_binary());
            let recombined = format!(
                "{}{}{}",
                lhs(input).unwrap(),
                connective(input).unwrap(),
                rhs(input).unwrap()
            );
            assert_eq!(recombined, input[1..input.len() - 1], "operands of {input}");
            assert_ne!(classify(&lhs(input).unwrap()).code(), 0);
            assert_ne!(classify(&rhs(input).unwrap()).code(), 0);
        }
    }
}
