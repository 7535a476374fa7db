use crate::{
    parsing::PestParser,
    syntax_tree::logic::{
        Atom, BinaryConnective, Constant, Formula, Predicate, Proposition, Quantification,
        Quantifier, Term, UnaryConnective, Variable,
    },
};

mod internal {
    #[derive(pest_derive::Parser)]
    #[grammar = "parsing/logic/grammar.pest"]
    pub struct Parser;
}

fn single_char(pair: pest::iterators::Pair<'_, internal::Rule>) -> char {
    let mut chars = pair.as_str().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => panic!("expected a single-character lexeme, got `{}`", pair.as_str()),
    }
}

pub struct VariableParser;

impl PestParser for VariableParser {
    type Node = Variable;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::variable;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::variable => Variable(single_char(pair)),
            _ => Self::report_unexpected_pair(pair),
        }
    }
}

pub struct ConstantParser;

impl PestParser for ConstantParser {
    type Node = Constant;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::constant;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::constant => Constant(single_char(pair)),
            _ => Self::report_unexpected_pair(pair),
        }
    }
}

pub struct TermParser;

impl PestParser for TermParser {
    type Node = Term;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::term;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::term => Self::translate_pairs(pair.into_inner()),
            internal::Rule::variable => Term::Variable(VariableParser::translate_pair(pair)),
            internal::Rule::constant => Term::Constant(ConstantParser::translate_pair(pair)),
            _ => Self::report_unexpected_pair(pair),
        }
    }
}

pub struct PropositionParser;

impl PestParser for PropositionParser {
    type Node = Proposition;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::proposition;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::proposition => Proposition(single_char(pair)),
            _ => Self::report_unexpected_pair(pair),
        }
    }
}

pub struct PredicateParser;

impl PestParser for PredicateParser {
    type Node = Predicate;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::predicate;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::predicate => Predicate(single_char(pair)),
            _ => Self::report_unexpected_pair(pair),
        }
    }
}

pub struct AtomParser;

impl PestParser for AtomParser {
    type Node = Atom;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::atom;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::atom => {
                let mut pairs = pair.into_inner();
                let predicate = PredicateParser::translate_pair(
                    pairs.next().unwrap_or_else(|| Self::report_missing_pair()),
                );
                let lhs = TermParser::translate_pair(
                    pairs.next().unwrap_or_else(|| Self::report_missing_pair()),
                );
                let rhs = TermParser::translate_pair(
                    pairs.next().unwrap_or_else(|| Self::report_missing_pair()),
                );
                if let Some(pair) = pairs.next() {
                    Self::report_unexpected_pair(pair)
                }
                Atom {
                    predicate,
                    terms: [lhs, rhs],
                }
            }
            _ => Self::report_unexpected_pair(pair),
        }
    }
}

pub struct UnaryConnectiveParser;

impl PestParser for UnaryConnectiveParser {
    type Node = UnaryConnective;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::unary_connective;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::unary_connective => Self::translate_pairs(pair.into_inner()),
            internal::Rule::negation => UnaryConnective::Negation,
            _ => Self::report_unexpected_pair(pair),
        }
    }
}

pub struct QuantifierParser;

impl PestParser for QuantifierParser {
    type Node = Quantifier;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::quantifier;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::quantifier => Self::translate_pairs(pair.into_inner()),
            internal::Rule::forall => Quantifier::Forall,
            internal::Rule::exists => Quantifier::Exists,
            _ => Self::report_unexpected_pair(pair),
        }
    }
}

pub struct QuantificationParser;

impl PestParser for QuantificationParser {
    type Node = Quantification;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::quantification;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::quantification => {
                let mut pairs = pair.into_inner();
                let quantifier = QuantifierParser::translate_pair(
                    pairs.next().unwrap_or_else(|| Self::report_missing_pair()),
                );
                let variable = VariableParser::translate_pair(
                    pairs.next().unwrap_or_else(|| Self::report_missing_pair()),
                );
                if let Some(pair) = pairs.next() {
                    Self::report_unexpected_pair(pair)
                }
                Quantification {
                    quantifier,
                    variable,
                }
            }
            _ => Self::report_unexpected_pair(pair),
        }
    }
}

pub struct BinaryConnectiveParser;

impl PestParser for BinaryConnectiveParser {
    type Node = BinaryConnective;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::binary_connective;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::binary_connective => Self::translate_pairs(pair.into_inner()),
            internal::Rule::conjunction => BinaryConnective::Conjunction,
            internal::Rule::disjunction => BinaryConnective::Disjunction,
            internal::Rule::implication => BinaryConnective::Implication,
            _ => Self::report_unexpected_pair(pair),
        }
    }
}

pub struct FormulaParser;

impl PestParser for FormulaParser {
    type Node = Formula;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::formula;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::formula => Self::translate_pairs(pair.into_inner()),

            internal::Rule::proposition => {
                Formula::Proposition(PropositionParser::translate_pair(pair))
            }

            internal::Rule::atom => Formula::Atom(AtomParser::translate_pair(pair)),

            internal::Rule::unary_formula => {
                let mut pairs = pair.into_inner();
                let connective = UnaryConnectiveParser::translate_pair(
                    pairs.next().unwrap_or_else(|| Self::report_missing_pair()),
                );
                let formula = FormulaParser::translate_pair(
                    pairs.next().unwrap_or_else(|| Self::report_missing_pair()),
                );
                if let Some(pair) = pairs.next() {
                    Self::report_unexpected_pair(pair)
                }
                Formula::UnaryFormula {
                    connective,
                    formula: formula.into(),
                }
            }

            internal::Rule::quantified_formula => {
                let mut pairs = pair.into_inner();
                let quantification = QuantificationParser::translate_pair(
                    pairs.next().unwrap_or_else(|| Self::report_missing_pair()),
                );
                let formula = FormulaParser::translate_pair(
                    pairs.next().unwrap_or_else(|| Self::report_missing_pair()),
                );
                if let Some(pair) = pairs.next() {
                    Self::report_unexpected_pair(pair)
                }
                Formula::QuantifiedFormula {
                    quantification,
                    formula: formula.into(),
                }
            }

            internal::Rule::binary_formula => {
                let mut pairs = pair.into_inner();
                let lhs = FormulaParser::translate_pair(
                    pairs.next().unwrap_or_else(|| Self::report_missing_pair()),
                );
                let connective = BinaryConnectiveParser::translate_pair(
                    pairs.next().unwrap_or_else(|| Self::report_missing_pair()),
                );
                let rhs = FormulaParser::translate_pair(
                    pairs.next().unwrap_or_else(|| Self::report_missing_pair()),
                );
                if let Some(pair) = pairs.next() {
                    Self::report_unexpected_pair(pair)
                }
                Formula::BinaryFormula {
                    connective,
                    lhs: lhs.into(),
                    rhs: rhs.into(),
                }
            }

            _ => Self::report_unexpected_pair(pair),
        }
    }
}
