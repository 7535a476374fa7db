use crate::{
    formatting::logic::Format,
    parsing::logic::{
        AtomParser, BinaryConnectiveParser, ConstantParser, FormulaParser, PredicateParser,
        PropositionParser, QuantificationParser, QuantifierParser, TermParser,
        UnaryConnectiveParser, VariableParser,
    },
    syntax_tree::impl_node,
};

use indexmap::IndexSet;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Variable(pub char);

impl Variable {
    pub const NAMES: [char; 4] = ['x', 'y', 'z', 'w'];
}

impl_node!(Variable, Format, VariableParser);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Constant(pub char);

impl Constant {
    /// All legal constants in allocation order: `a` to `z`, variables excluded.
    pub fn all() -> impl Iterator<Item = Constant> {
        ('a'..='z')
            .filter(|c| !Variable::NAMES.contains(c))
            .map(Constant)
    }
}

impl_node!(Constant, Format, ConstantParser);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Term {
    Variable(Variable),
    Constant(Constant),
}

impl Term {
    fn substitute(self, variable: Variable, constant: Constant) -> Term {
        match self {
            Term::Variable(v) if v == variable => Term::Constant(constant),
            x => x,
        }
    }
}

impl_node!(Term, Format, TermParser);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Proposition(pub char);

impl Proposition {
    pub const NAMES: [char; 4] = ['p', 'q', 'r', 's'];
}

impl_node!(Proposition, Format, PropositionParser);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Predicate(pub char);

impl Predicate {
    pub const NAMES: [char; 4] = ['P', 'Q', 'R', 'S'];
}

impl_node!(Predicate, Format, PredicateParser);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Atom {
    pub predicate: Predicate,
    pub terms: [Term; 2],
}

impl Atom {
    fn substitute(self, variable: Variable, constant: Constant) -> Atom {
        Atom {
            predicate: self.predicate,
            terms: self.terms.map(|term| term.substitute(variable, constant)),
        }
    }

    fn constants(&self) -> impl Iterator<Item = Constant> + '_ {
        self.terms.iter().filter_map(|term| match term {
            Term::Constant(c) => Some(*c),
            Term::Variable(_) => None,
        })
    }
}

impl_node!(Atom, Format, AtomParser);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UnaryConnective {
    Negation,
}

impl_node!(UnaryConnective, Format, UnaryConnectiveParser);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Quantifier {
    Forall,
    Exists,
}

impl_node!(Quantifier, Format, QuantifierParser);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Quantification {
    pub quantifier: Quantifier,
    pub variable: Variable,
}

impl_node!(Quantification, Format, QuantificationParser);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BinaryConnective {
    Conjunction,
    Disjunction,
    Implication,
}

impl_node!(BinaryConnective, Format, BinaryConnectiveParser);

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Formula {
    Proposition(Proposition),
    Atom(Atom),
    UnaryFormula {
        connective: UnaryConnective,
        formula: Box<Formula>,
    },
    QuantifiedFormula {
        quantification: Quantification,
        formula: Box<Formula>,
    },
    BinaryFormula {
        connective: BinaryConnective,
        lhs: Box<Formula>,
        rhs: Box<Formula>,
    },
}

impl_node!(Formula, Format, FormulaParser);

impl Formula {
    pub fn negate(self) -> Formula {
        Formula::UnaryFormula {
            connective: UnaryConnective::Negation,
            formula: self.into(),
        }
    }

    /// True on atoms and negated atoms, propositional or first-order.
    pub fn is_literal(&self) -> bool {
        match self {
            Formula::Proposition(_) | Formula::Atom(_) => true,
            Formula::UnaryFormula {
                connective: UnaryConnective::Negation,
                formula,
            } => matches!(**formula, Formula::Proposition(_) | Formula::Atom(_)),
            _ => false,
        }
    }

    /// True if no predicate atom and no quantifier occurs anywhere.
    pub fn is_propositional(&self) -> bool {
        match self {
            Formula::Proposition(_) => true,
            Formula::Atom(_) | Formula::QuantifiedFormula { .. } => false,
            Formula::UnaryFormula { formula, .. } => formula.is_propositional(),
            Formula::BinaryFormula { lhs, rhs, .. } => {
                lhs.is_propositional() && rhs.is_propositional()
            }
        }
    }

    /// Every constant occurring in an atom, including under quantifiers.
    pub fn constants(&self) -> IndexSet<Constant> {
        match self {
            Formula::Proposition(_) => IndexSet::new(),
            Formula::Atom(atom) => atom.constants().collect(),
            Formula::UnaryFormula { formula, .. }
            | Formula::QuantifiedFormula { formula, .. } => formula.constants(),
            Formula::BinaryFormula { lhs, rhs, .. } => {
                let mut constants = lhs.constants();
                constants.extend(rhs.constants());
                constants
            }
        }
    }

    /// Replace every free occurrence of `variable` by `constant`.
    ///
    /// A quantifier over the same variable stops the descent, so bound
    /// occurrences are never touched.
    pub fn substitute(self, variable: Variable, constant: Constant) -> Formula {
        match self {
            x @ Formula::Proposition(_) => x,

            Formula::Atom(atom) => Formula::Atom(atom.substitute(variable, constant)),

            Formula::UnaryFormula {
                connective,
                formula,
            } => Formula::UnaryFormula {
                connective,
                formula: formula.substitute(variable, constant).into(),
            },

            Formula::QuantifiedFormula {
                quantification,
                formula,
            } => {
                if quantification.variable == variable {
                    Formula::QuantifiedFormula {
                        quantification,
                        formula,
                    }
                } else {
                    Formula::QuantifiedFormula {
                        quantification,
                        formula: formula.substitute(variable, constant).into(),
                    }
                }
            }

            Formula::BinaryFormula {
                connective,
                lhs,
                rhs,
            } => Formula::BinaryFormula {
                connective,
                lhs: lhs.substitute(variable, constant).into(),
                rhs: rhs.substitute(variable, constant).into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{Constant, Formula, Variable},
        indexmap::IndexSet,
    };

    #[test]
    fn substitute() {
        for (src, variable, constant, target) in [
            ("P(x,y)", 'x', 'a', "P(a,y)"),
            ("P(x,x)", 'x', 'c', "P(c,c)"),
            ("~P(x,w)", 'w', 'b', "~P(x,b)"),
            ("(P(x,x)&Q(x,z))", 'x', 'a', "(P(a,a)&Q(a,z))"),
            ("AxP(x,y)", 'x', 'a', "AxP(x,y)"),
            ("AyP(x,y)", 'x', 'a', "AyP(a,y)"),
            ("Ex(P(x,x)->AxQ(x,x))", 'x', 'a', "Ex(P(x,x)->AxQ(x,x))"),
            ("(ExP(x,x)\\/Q(x,x))", 'x', 'b', "(ExP(x,x)\\/Q(b,b))"),
            ("Ay~P(y,x)", 'x', 'd', "Ay~P(y,d)"),
            ("p", 'x', 'a', "p"),
        ] {
            let formula: Formula = src.parse().unwrap();
            assert_eq!(
                formula.substitute(Variable(variable), Constant(constant)),
                target.parse().unwrap(),
                "substituting {constant} for {variable} in {src}"
            )
        }
    }

    #[test]
    fn constants() {
        for (src, target) in [
            ("p", vec![]),
            ("P(x,y)", vec![]),
            ("P(x,a)", vec!['a']),
            ("P(p,q)", vec!['p', 'q']),
            ("AxP(x,a)", vec!['a']),
            ("(P(a,b)->ExQ(c,x))", vec!['a', 'b', 'c']),
            ("~~P(b,b)", vec!['b']),
        ] {
            let formula: Formula = src.parse().unwrap();
            let target: IndexSet<Constant> = target.into_iter().map(Constant).collect();
            assert_eq!(formula.constants(), target, "constants of {src}")
        }
    }

    #[test]
    fn is_literal() {
        for (src, target) in [
            ("p", true),
            ("~p", true),
            ("P(x,y)", true),
            ("~P(a,b)", true),
            ("~~p", false),
            ("(p&q)", false),
            ("~(p&q)", false),
            ("AxP(x,x)", false),
        ] {
            let formula: Formula = src.parse().unwrap();
            assert_eq!(formula.is_literal(), target, "is_literal({src})")
        }
    }

    #[test]
    fn is_propositional() {
        for (src, target) in [
            ("p", true),
            ("~p", true),
            ("(p&(q\\/~r))", true),
            ("~(p->q)", true),
            ("P(x,y)", false),
            ("Axp", false),
            ("(p&P(x,x))", false),
            ("~ExP(x,x)", false),
        ] {
            let formula: Formula = src.parse().unwrap();
            assert_eq!(formula.is_propositional(), target, "is_propositional({src})")
        }
    }

    #[test]
    fn negate() {
        for (src, target) in [("p", "~p"), ("~p", "~~p"), ("(p&q)", "~(p&q)")] {
            let formula: Formula = src.parse().unwrap();
            assert_eq!(formula.negate(), target.parse().unwrap())
        }
    }
}
