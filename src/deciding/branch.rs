use {
    crate::syntax_tree::logic::{Constant, Formula, UnaryConnective},
    indexmap::{IndexMap, IndexSet},
    itertools::Itertools,
    std::fmt::{self, Display, Formatter},
};

/// One conjunctive alternative of the proof search: an insertion-ordered,
/// duplicate-free collection of formulas plus the bookkeeping the γ and δ
/// rules need. β-splits clone the whole value, ledgers included.
#[derive(Clone, Debug)]
pub struct Branch {
    formulas: IndexSet<Formula>,
    instantiated: IndexMap<Formula, IndexSet<Constant>>,
    introduced: IndexSet<Constant>,
}

impl Branch {
    pub fn new(formulas: impl IntoIterator<Item = Formula>) -> Branch {
        Branch {
            formulas: formulas.into_iter().collect(),
            instantiated: IndexMap::new(),
            introduced: IndexSet::new(),
        }
    }

    pub fn formulas(&self) -> impl Iterator<Item = &Formula> {
        self.formulas.iter()
    }

    pub fn contains(&self, formula: &Formula) -> bool {
        self.formulas.contains(formula)
    }

    pub fn insert(&mut self, formula: Formula) -> bool {
        self.formulas.insert(formula)
    }

    pub fn remove(&mut self, formula: &Formula) -> bool {
        self.formulas.shift_remove(formula)
    }

    /// A branch closes as soon as it contains both a formula and its
    /// negation.
    pub fn is_closed(&self) -> bool {
        self.formulas.iter().any(|formula| match formula {
            Formula::UnaryFormula {
                connective: UnaryConnective::Negation,
                formula,
            } => self.formulas.contains(formula.as_ref()),
            _ => false,
        })
    }

    /// Every constant occurring anywhere on the branch, quantifier bodies
    /// and binary subtrees included. Recomputed on demand.
    pub fn constants(&self) -> IndexSet<Constant> {
        let mut constants = IndexSet::new();
        for formula in &self.formulas {
            constants.extend(formula.constants());
        }
        constants
    }

    /// The first constant in `a`-to-`z` order absent from the branch, or
    /// `None` when all 22 are taken.
    pub fn fresh_constant(&self) -> Option<Constant> {
        let taken = self.constants();
        Constant::all().find(|constant| !taken.contains(constant))
    }

    pub fn is_instantiated(&self, universal: &Formula, constant: Constant) -> bool {
        self.instantiated
            .get(universal)
            .is_some_and(|constants| constants.contains(&constant))
    }

    pub fn record_instantiation(&mut self, universal: Formula, constant: Constant) {
        self.instantiated
            .entry(universal)
            .or_default()
            .insert(constant);
    }

    pub fn introduce(&mut self, witness: Constant) {
        self.introduced.insert(witness);
    }

    /// How many δ-witnesses this branch has allocated beyond the constants
    /// it started with. γ instantiation with pre-existing constants does
    /// not count.
    pub fn introduced_constants(&self) -> usize {
        self.introduced.len()
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.formulas.iter().format(", "))
    }
}

#[cfg(test)]
mod tests {
    use {
        super::Branch,
        crate::syntax_tree::logic::{Constant, Formula},
    };

    fn branch(formulas: &[&str]) -> Branch {
        Branch::new(
            formulas
                .iter()
                .map(|src| src.parse::<Formula>().unwrap()),
        )
    }

    #[test]
    fn closure() {
        for (formulas, closed) in [
            (vec!["p"], false),
            (vec!["p", "~p"], true),
            (vec!["~p", "p"], true),
            (vec!["P(a,a)", "~P(a,a)"], true),
            (vec!["P(a,a)", "~P(a,b)"], false),
            (vec!["~(p&q)", "(p&q)"], true),
            (vec!["~~p", "~p"], true),
            (vec!["p", "q", "r", "s"], false),
        ] {
            assert_eq!(
                branch(&formulas).is_closed(),
                closed,
                "closure of {formulas:?}"
            )
        }
    }

    #[test]
    fn constants() {
        let branch = branch(&["AxP(x,a)", "(Q(b,b)->ExR(x,c))", "p"]);
        let constants: Vec<char> = branch.constants().into_iter().map(|c| c.0).collect();
        assert_eq!(constants, vec!['a', 'b', 'c'])
    }

    #[test]
    fn fresh_constant_skips_used_letters() {
        assert_eq!(branch(&["p"]).fresh_constant(), Some(Constant('a')));
        assert_eq!(branch(&["P(a,b)"]).fresh_constant(), Some(Constant('c')));
        assert_eq!(branch(&["P(a,c)"]).fresh_constant(), Some(Constant('b')));
    }

    #[test]
    fn fresh_constant_never_yields_a_variable_letter() {
        // a through v is every legal constant; w, x, y, z are variables
        let branch = branch(&[
            "P(a,b)", "P(c,d)", "P(e,f)", "P(g,h)", "P(i,j)", "P(k,l)", "P(m,n)", "P(o,p)",
            "P(q,r)", "P(s,t)", "P(u,v)",
        ]);
        assert_eq!(branch.fresh_constant(), None)
    }

    #[test]
    fn instantiation_ledger() {
        let universal: Formula = "AxP(x,x)".parse().unwrap();
        let mut branch = branch(&["AxP(x,x)"]);

        assert!(!branch.is_instantiated(&universal, Constant('a')));
        branch.record_instantiation(universal.clone(), Constant('a'));
        assert!(branch.is_instantiated(&universal, Constant('a')));
        assert!(!branch.is_instantiated(&universal, Constant('b')));
    }

    #[test]
    fn introduced_constants_are_counted_once() {
        let mut branch = branch(&["p"]);
        branch.introduce(Constant('a'));
        branch.introduce(Constant('b'));
        branch.introduce(Constant('a'));
        assert_eq!(branch.introduced_constants(), 2)
    }

    #[test]
    fn duplicates_are_suppressed() {
        let mut branch = branch(&["p", "q"]);
        assert!(!branch.insert("p".parse().unwrap()));
        assert!(branch.insert("r".parse().unwrap()));
        assert_eq!(branch.formulas().count(), 3)
    }
}
