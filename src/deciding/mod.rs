pub mod branch;
pub mod expansion;

use {
    crate::{
        deciding::{
            branch::Branch,
            expansion::{apply, select, Expansion},
        },
        syntax_tree::logic::Formula,
    },
    std::{
        collections::VecDeque,
        fmt::{self, Display, Formatter},
    },
};

/// Cap on δ-introduced constants per branch, beyond those present
/// initially.
pub const MAX_CONSTANTS: usize = 10;

/// Safety net against pathological inputs; not part of the logical
/// procedure.
const MAX_ITERATIONS: usize = 10_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Unsatisfiable,
    Satisfiable,
    Undetermined,
}

impl Verdict {
    pub fn code(self) -> usize {
        match self {
            Verdict::Unsatisfiable => 0,
            Verdict::Satisfiable => 1,
            Verdict::Undetermined => 2,
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Unsatisfiable => write!(f, "is not satisfiable"),
            Verdict::Satisfiable => write!(f, "is satisfiable"),
            Verdict::Undetermined => write!(f, "may or may not be satisfiable"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Options {
    pub max_constants: usize,
    pub max_iterations: usize,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            max_constants: MAX_CONSTANTS,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

/// Decide the satisfiability of a single formula.
pub fn decide(formula: Formula) -> Verdict {
    decide_with(Branch::new([formula]), Options::default())
}

/// Decide the satisfiability of an initial branch.
///
/// Deterministic: the first open branch is worked on, the target formula
/// is fixed by `select`, and β puts the left-operand branch first, so the
/// verdict and the step sequence are reproducible from the input alone.
pub fn decide_with(initial: Branch, options: Options) -> Verdict {
    let mut open = VecDeque::from([initial]);

    for _ in 0..options.max_iterations {
        let Some(branch) = open.pop_front() else {
            return Verdict::Unsatisfiable;
        };

        if branch.is_closed() {
            log::debug!("discarding closed branch {branch}");
            continue;
        }

        if branch.introduced_constants() > options.max_constants {
            log::debug!("constant cap exceeded on {branch}");
            return Verdict::Undetermined;
        }

        let Some((target, rule)) = select(&branch) else {
            log::debug!("open complete branch {branch}");
            return Verdict::Satisfiable;
        };

        log::trace!("applying {rule:?} to {target} on {branch}");

        match apply(rule, target, branch) {
            Expansion::Single(successor) => open.push_front(successor),
            Expansion::Split(left, right) => {
                open.push_front(right);
                open.push_front(left);
            }
            Expansion::Exhausted => {
                log::debug!("constant alphabet exhausted");
                return Verdict::Undetermined;
            }
        }
    }

    log::debug!("iteration cap hit with {} open branches", open.len());
    if open
        .iter()
        .any(|branch| !branch.is_closed() && select(branch).is_none())
    {
        Verdict::Satisfiable
    } else {
        Verdict::Undetermined
    }
}
