use {
    crate::{
        convenience::unbox::{logic::UnboxedFormula, Unbox as _},
        deciding::branch::Branch,
        syntax_tree::logic::{
            BinaryConnective, Constant, Formula, Quantification, Quantifier, UnaryConnective,
        },
    },
    indexmap::IndexSet,
};

/// Every non-literal formula matches exactly one rule by structure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rule {
    DoubleNegation,
    NegatedUniversal,
    NegatedExistential,
    Conjunction,
    NegatedImplication,
    NegatedDisjunction,
    Disjunction,
    Implication,
    NegatedConjunction,
    Existential,
    Universal,
}

impl Rule {
    /// The rule a formula expands by, or `None` on literals.
    pub fn of(formula: &Formula) -> Option<Rule> {
        match formula {
            Formula::Proposition(_) | Formula::Atom(_) => None,

            Formula::UnaryFormula {
                connective: UnaryConnective::Negation,
                formula,
            } => match formula.as_ref() {
                Formula::Proposition(_) | Formula::Atom(_) => None,

                Formula::UnaryFormula { .. } => Some(Rule::DoubleNegation),

                Formula::QuantifiedFormula {
                    quantification, ..
                } => match quantification.quantifier {
                    Quantifier::Forall => Some(Rule::NegatedUniversal),
                    Quantifier::Exists => Some(Rule::NegatedExistential),
                },

                Formula::BinaryFormula { connective, .. } => match connective {
                    BinaryConnective::Conjunction => Some(Rule::NegatedConjunction),
                    BinaryConnective::Disjunction => Some(Rule::NegatedDisjunction),
                    BinaryConnective::Implication => Some(Rule::NegatedImplication),
                },
            },

            Formula::QuantifiedFormula {
                quantification, ..
            } => match quantification.quantifier {
                Quantifier::Forall => Some(Rule::Universal),
                Quantifier::Exists => Some(Rule::Existential),
            },

            Formula::BinaryFormula { connective, .. } => match connective {
                BinaryConnective::Conjunction => Some(Rule::Conjunction),
                BinaryConnective::Disjunction => Some(Rule::Disjunction),
                BinaryConnective::Implication => Some(Rule::Implication),
            },
        }
    }

    /// Selection order: simplifications, then the remaining α rules, then
    /// β, then δ, then γ.
    pub fn priority(self) -> usize {
        match self {
            Rule::DoubleNegation | Rule::NegatedUniversal | Rule::NegatedExistential => 0,
            Rule::Conjunction | Rule::NegatedImplication | Rule::NegatedDisjunction => 1,
            Rule::Disjunction | Rule::Implication | Rule::NegatedConjunction => 2,
            Rule::Existential => 3,
            Rule::Universal => 4,
        }
    }
}

/// The successors of one rule application.
pub enum Expansion {
    Single(Branch),
    Split(Branch, Branch),
    /// A δ needed a fresh witness and every legal constant was already on
    /// the branch.
    Exhausted,
}

/// The constants a universal is instantiated with: the branch constant
/// set, or `{a}` on a branch without constants.
fn instantiation_set(branch: &Branch) -> IndexSet<Constant> {
    let constants = branch.constants();
    if constants.is_empty() {
        IndexSet::from([Constant('a')])
    } else {
        constants
    }
}

/// True if instantiating `universal` can still add a formula to the
/// branch: some constant is unledgered for it and yields a new instance.
fn advances(branch: &Branch, universal: &Formula) -> bool {
    let Formula::QuantifiedFormula {
        quantification,
        formula,
    } = universal
    else {
        return false;
    };

    instantiation_set(branch).into_iter().any(|constant| {
        !branch.is_instantiated(universal, constant)
            && !branch.contains(
                &formula
                    .as_ref()
                    .clone()
                    .substitute(quantification.variable, constant),
            )
    })
}

/// Pick the next formula to expand: lowest rule priority first, insertion
/// order within a priority class. A γ that cannot advance the branch is
/// skipped entirely; `None` means the branch is open and complete.
pub fn select(branch: &Branch) -> Option<(Formula, Rule)> {
    let mut selected: Option<(Formula, Rule)> = None;

    for formula in branch.formulas() {
        let Some(rule) = Rule::of(formula) else {
            continue;
        };

        if rule == Rule::Universal && !advances(branch, formula) {
            continue;
        }

        match &selected {
            Some((_, incumbent)) if incumbent.priority() <= rule.priority() => {}
            _ => selected = Some((formula.clone(), rule)),
        }
    }

    selected
}

/// Apply `rule` to `target` on `branch`. The caller guarantees the pair
/// came from `select`, so the shapes line up.
pub fn apply(rule: Rule, target: Formula, mut branch: Branch) -> Expansion {
    match rule {
        Rule::Universal => {
            let UnboxedFormula::QuantifiedFormula {
                quantification,
                formula,
            } = target.clone().unbox()
            else {
                unreachable!("γ selected a non-universal: {target}");
            };

            // the universal stays on the branch for constants that appear later
            for constant in instantiation_set(&branch) {
                if branch.is_instantiated(&target, constant) {
                    continue;
                }
                branch.record_instantiation(target.clone(), constant);
                branch.insert(formula.clone().substitute(quantification.variable, constant));
            }
            Expansion::Single(branch)
        }

        Rule::Existential => {
            // freshness is measured before the existential is removed, so
            // constants occurring only in its body stay off limits
            let witness = branch.fresh_constant();
            branch.remove(&target);

            let UnboxedFormula::QuantifiedFormula {
                quantification,
                formula,
            } = target.unbox()
            else {
                unreachable!("δ selected a non-existential");
            };

            match witness {
                Some(constant) => {
                    branch.introduce(constant);
                    branch.insert(formula.substitute(quantification.variable, constant));
                    Expansion::Single(branch)
                }
                None => Expansion::Exhausted,
            }
        }

        _ => {
            branch.remove(&target);
            decompose(rule, target, branch)
        }
    }
}

fn decompose(rule: Rule, target: Formula, mut branch: Branch) -> Expansion {
    match (rule, target.unbox()) {
        (
            Rule::DoubleNegation,
            UnboxedFormula::UnaryFormula {
                formula: Formula::UnaryFormula { formula, .. },
                ..
            },
        ) => {
            branch.insert(*formula);
            Expansion::Single(branch)
        }

        (
            Rule::NegatedUniversal | Rule::NegatedExistential,
            UnboxedFormula::UnaryFormula {
                formula:
                    Formula::QuantifiedFormula {
                        quantification,
                        formula,
                    },
                ..
            },
        ) => {
            let quantifier = match quantification.quantifier {
                Quantifier::Forall => Quantifier::Exists,
                Quantifier::Exists => Quantifier::Forall,
            };
            branch.insert(Formula::QuantifiedFormula {
                quantification: Quantification {
                    quantifier,
                    variable: quantification.variable,
                },
                formula: formula.negate().into(),
            });
            Expansion::Single(branch)
        }

        (Rule::Conjunction, UnboxedFormula::BinaryFormula { lhs, rhs, .. }) => {
            branch.insert(lhs);
            branch.insert(rhs);
            Expansion::Single(branch)
        }

        (
            Rule::NegatedImplication,
            UnboxedFormula::UnaryFormula {
                formula: Formula::BinaryFormula { lhs, rhs, .. },
                ..
            },
        ) => {
            branch.insert(*lhs);
            branch.insert(rhs.negate());
            Expansion::Single(branch)
        }

        (
            Rule::NegatedDisjunction,
            UnboxedFormula::UnaryFormula {
                formula: Formula::BinaryFormula { lhs, rhs, .. },
                ..
            },
        ) => {
            branch.insert(lhs.negate());
            branch.insert(rhs.negate());
            Expansion::Single(branch)
        }

        (Rule::Disjunction, UnboxedFormula::BinaryFormula { lhs, rhs, .. }) => {
            let mut left = branch.clone();
            let mut right = branch;
            left.insert(lhs);
            right.insert(rhs);
            Expansion::Split(left, right)
        }

        (Rule::Implication, UnboxedFormula::BinaryFormula { lhs, rhs, .. }) => {
            let mut left = branch.clone();
            let mut right = branch;
            left.insert(lhs.negate());
            right.insert(rhs);
            Expansion::Split(left, right)
        }

        (
            Rule::NegatedConjunction,
            UnboxedFormula::UnaryFormula {
                formula: Formula::BinaryFormula { lhs, rhs, .. },
                ..
            },
        ) => {
            let mut left = branch.clone();
            let mut right = branch;
            left.insert(lhs.negate());
            right.insert(rhs.negate());
            Expansion::Split(left, right)
        }

        (rule, formula) => {
            unreachable!("rule {rule:?} does not apply to {}", formula.rebox())
        }
    }
}
