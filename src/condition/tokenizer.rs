//! Rule text normalisation and tokenisation

use crate::condition::ast::Connective;
use crate::course::{is_course_code, CourseCode};
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading "pre-requisite:" style label
static LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^pre[^:]*:\s*").expect("label regex"));

/// Connective keywords as whole words
static CONNECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:and|or|in)\b").expect("connective regex"));

/// One lexical unit of a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    Connective(Connective),
    OpenParen,
    CloseParen,
    Course(CourseCode),
    /// Quantity phrase, explicit course list, or unrecognised text
    Fragment(String),
}

/// Lower-case the rule, collapse whitespace and drop a leading
/// "pre-requisite:" label.
pub fn normalize(rule: &str) -> String {
    let collapsed = rule.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    LABEL.replace(&collapsed, "").into_owned()
}

/// Split normalised rule text into atoms.
///
/// Expects the output of [`normalize`]; connectives are only recognised in
/// lower case.
pub fn tokenize(normalized: &str) -> Vec<Atom> {
    let mut atoms = Vec::new();
    let mut last_end = 0;

    for found in CONNECTIVE.find_iter(normalized) {
        push_operand(&normalized[last_end..found.start()], &mut atoms);
        if let Some(connective) = Connective::from_keyword(found.as_str()) {
            atoms.push(Atom::Connective(connective));
        }
        last_end = found.end();
    }
    push_operand(&normalized[last_end..], &mut atoms);

    atoms
}

fn push_operand(operand: &str, atoms: &mut Vec<Atom>) {
    let operand = operand.trim();
    if operand.is_empty() {
        return;
    }

    let follows_in = atoms.last() == Some(&Atom::Connective(Connective::In));
    if is_quantity_phrase(operand) || (follows_in && is_single_course_list(operand)) {
        push_phrase(operand, atoms);
        return;
    }

    let spaced = operand.replace('(', " ( ").replace(')', " ) ");
    for piece in spaced.split_whitespace() {
        let atom = match piece {
            "(" => Atom::OpenParen,
            ")" => Atom::CloseParen,
            _ => course_atom(piece).unwrap_or_else(|| Atom::Fragment(piece.to_string())),
        };
        atoms.push(atom);
    }
}

/// A course code, allowing sentence punctuation after it ("comp1511.")
fn course_atom(piece: &str) -> Option<Atom> {
    let code = piece.trim_end_matches(['.', ';', ':']);
    if !is_course_code(code) {
        return None;
    }
    CourseCode::new(code).ok().map(Atom::Course)
}

/// "(comp1511)" on the right of `in`: a one-entry course list
fn is_single_course_list(operand: &str) -> bool {
    operand.contains('(')
        && is_course_code(operand.trim_matches(|c: char| c == '(' || c == ')' || c.is_whitespace()))
}

/// Quantity phrases and course lists must not be split on spaces
fn is_quantity_phrase(operand: &str) -> bool {
    operand.contains(',')
        || operand
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| word == "units" || word == "courses")
}

/// Push a phrase as one fragment, peeling off grouping parens that belong to
/// the surrounding expression rather than to the phrase itself. Parens around
/// a course list stay on the fragment.
fn push_phrase(phrase: &str, atoms: &mut Vec<Atom>) {
    let mut body = phrase;

    while paren_balance(body) > 0 {
        match body.strip_prefix('(') {
            Some(rest) => {
                atoms.push(Atom::OpenParen);
                body = rest.trim_start();
            }
            None => break,
        }
    }

    let mut closing = 0;
    while paren_balance(body) < 0 {
        match body.strip_suffix(')') {
            Some(rest) => {
                closing += 1;
                body = rest.trim_end();
            }
            None => break,
        }
    }

    while let Some(inner) = enclosed(body) {
        if is_course_list(inner) {
            break;
        }
        atoms.push(Atom::OpenParen);
        closing += 1;
        body = inner.trim();
    }

    if !body.is_empty() {
        atoms.push(Atom::Fragment(body.to_string()));
    }
    atoms.extend(std::iter::repeat(Atom::CloseParen).take(closing));
}

/// Inside of `text` when one paren pair wraps all of it
fn enclosed(text: &str) -> Option<&str> {
    let inner = text.strip_prefix('(')?.strip_suffix(')')?;
    let mut depth = 0;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return None,
            ')' => depth -= 1,
            _ => {}
        }
    }
    (depth == 0).then_some(inner)
}

fn is_course_list(inner: &str) -> bool {
    inner.contains(',') || is_course_code(inner.trim())
}

fn paren_balance(text: &str) -> i32 {
    text.chars().fold(0, |balance, c| match c {
        '(' => balance + 1,
        ')' => balance - 1,
        _ => balance,
    })
}
