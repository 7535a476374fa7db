use {
    crate::{
        classifying,
        command_line::{Arguments, Command},
        deciding,
        syntax_tree::logic::Formula,
    },
    anyhow::{Context, Result},
    clap::Parser as _,
    std::{fs::read_to_string, path::Path},
};

pub fn main() -> Result<()> {
    env_logger::init();

    match Arguments::parse().command {
        Command::Classify { formula } => {
            println!("{}", classification_report(&formula));
            Ok(())
        }

        Command::Decide { formula } => {
            println!("{}", decision_report(&formula));
            Ok(())
        }

        Command::Batch { input } => batch(&input),
    }
}

/// The batch driver: the first line of the file activates parse mode if it
/// contains `PARSE` and sat mode if it contains `SAT`; both may be active.
/// Every following non-empty line is one formula.
fn batch(path: &Path) -> Result<()> {
    let content = read_to_string(path)
        .with_context(|| format!("could not read file `{}`", path.display()))?;

    let mut lines = content.lines();
    let header = lines.next().unwrap_or_default();
    let parse_mode = header.contains("PARSE");
    let sat_mode = header.contains("SAT");

    for line in lines {
        if line.is_empty() {
            continue;
        }
        if parse_mode {
            println!("{}", classification_report(line));
        }
        if sat_mode {
            println!("{}", decision_report(line));
        }
    }

    Ok(())
}

fn classification_report(line: &str) -> String {
    let category = classifying::classify(line);
    let mut report = format!("{line} is {category}.");

    // the accessors answer exactly on binary formulas
    if let (Some(lhs), Some(connective), Some(rhs)) = (
        classifying::lhs(line),
        classifying::connective(line),
        classifying::rhs(line),
    ) {
        report.push_str(&format!(
            " Its left hand side is {lhs}, its connective is {connective}, and its right hand side is {rhs}."
        ));
    }

    report
}

fn decision_report(line: &str) -> String {
    match line.parse::<Formula>() {
        Ok(formula) => format!("{line} {}.", deciding::decide(formula)),
        Err(_) => format!("{line} is not a formula."),
    }
}

#[cfg(test)]
mod tests {
    use super::{classification_report, decision_report};

    #[test]
    fn classification_reports() {
        for (line, report) in [
            ("p", "p is a proposition."),
            ("P(x,y)", "P(x,y) is an atom."),
            ("~p", "~p is a negation of a propositional formula."),
            (
                "~P(x,y)",
                "~P(x,y) is a negation of a first order logic formula.",
            ),
            ("AxP(x,x)", "AxP(x,x) is a universally quantified formula."),
            (
                "ExP(x,x)",
                "ExP(x,x) is an existentially quantified formula.",
            ),
            (
                "(p&q)",
                "(p&q) is a binary connective propositional formula. \
                 Its left hand side is p, its connective is &, and its right hand side is q.",
            ),
            (
                "(P(x,y)->Q(z,w))",
                "(P(x,y)->Q(z,w)) is a binary connective first order formula. \
                 Its left hand side is P(x,y), its connective is ->, and its right hand side is Q(z,w).",
            ),
            ("p&q", "p&q is not a formula."),
            ("", " is not a formula."),
        ] {
            assert_eq!(classification_report(line), report)
        }
    }

    #[test]
    fn decision_reports() {
        for (line, report) in [
            ("(p&~p)", "(p&~p) is not satisfiable."),
            ("(p\\/q)", "(p\\/q) is satisfiable."),
            (
                "AxEyP(x,y)",
                "AxEyP(x,y) may or may not be satisfiable.",
            ),
            ("P(x)", "P(x) is not a formula."),
        ] {
            assert_eq!(decision_report(line), report)
        }
    }
}
