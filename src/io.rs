use std::io::{BufRead, BufReader, BufWriter, Read, Write};

use crate::{
    error::{Error, Result},
    formula::{Clause, ClauseSet, Literal},
};

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}

fn to_literal(lit: i64) -> Literal<usize> {
    Literal::with_polarity(lit.unsigned_abs() as usize, lit > 0)
}

/// Reads a DIMACS CNF formula in which every clause has exactly three literals.
pub fn read_formula(reader: &mut impl Read) -> Result<ClauseSet<usize>> {
    let mut lines = BufReader::new(reader).lines().enumerate();

    let (var_count, clause_count) = loop {
        let (i, line) = match lines.next() {
            Some((i, line)) => (i + 1, line?),
            None => return Err(parse_error(0, "missing problem line")),
        };

        if line.starts_with('c') || line.trim().is_empty() {
            // comment line
            continue;
        }

        // problem line
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[..] {
            ["p", "cnf", vars, clauses] => {
                let vars = vars
                    .parse::<usize>()
                    .map_err(|err| parse_error(i, err.to_string()))?;
                let clauses = clauses
                    .parse::<usize>()
                    .map_err(|err| parse_error(i, err.to_string()))?;
                break (vars, clauses);
            }
            _ => return Err(parse_error(i, format!("expected problem line, got {line:?}"))),
        }
    };

    let mut clauses = ClauseSet::default();
    let mut clause = vec![];
    let mut last_line = 0;

    for (i, line) in lines {
        let line = line?;
        last_line = i + 1;

        // SATLIB benchmarks end with a `%` line
        if line.starts_with('%') {
            break;
        }
        if line.starts_with('c') {
            continue;
        }

        for word in line.split_whitespace() {
            let lit = word
                .parse::<i64>()
                .map_err(|err| parse_error(last_line, format!("{word:?}: {err}")))?;
            match lit {
                0 => {
                    let literals = std::mem::take(&mut clause);
                    clauses.add_clause(Clause::try_from(literals)?);
                }
                _ => {
                    if !(1..=var_count).contains(&(lit.unsigned_abs() as usize)) {
                        return Err(parse_error(
                            last_line,
                            format!(
                                "variable {} out of range 1..={var_count}",
                                lit.unsigned_abs()
                            ),
                        ));
                    }
                    clause.push(to_literal(lit));
                }
            }
        }
    }

    if !clause.is_empty() {
        return Err(parse_error(last_line, "unterminated clause"));
    }
    if clauses.len() != clause_count {
        return Err(parse_error(
            last_line,
            format!("expected {clause_count} clauses, found {}", clauses.len()),
        ));
    }

    Ok(clauses)
}

/// Writes `clauses` in DIMACS CNF; the header reflects the current set.
pub fn write_formula(writer: &mut impl Write, clauses: &ClauseSet<usize>) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    writeln!(writer, "c Reduced by sat-reducer.")?;

    let var_count = clauses.variables().into_iter().max().unwrap_or(0);
    writeln!(writer, "p cnf {var_count} {}", clauses.len())?;

    for clause in clauses {
        let clause_str = clause.literals().iter().fold(String::new(), |str, lit| {
            str + &lit.to_string() + " "
        });
        writeln!(writer, "{clause_str}0")?;
    }

    writer.flush()?;
    Ok(())
}
