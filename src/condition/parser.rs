//! Rule parser: infix atoms to postfix, postfix to expression tree

use crate::condition::ast::{Connective, Node};
use crate::condition::quantity::COMPLETION;
use crate::condition::tokenizer::{normalize, tokenize, Atom};
use crate::course::CompletedCourses;
use crate::error::{PrereqError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

static COMPLETION_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bcompletion\b").expect("completion regex"));

/// Parse a raw rule into an expression tree.
///
/// Course leaves are resolved against `completed` while the tree is built.
pub fn parse(rule: &str, completed: &CompletedCourses) -> Result<Node> {
    parse_normalized(&normalize(rule), completed)
}

/// Parse rule text that has already been through [`normalize`]
pub fn parse_normalized(normalized: &str, completed: &CompletedCourses) -> Result<Node> {
    tracing::debug!(rule = normalized, "parsing rule");

    let atoms = tokenize(normalized);
    let postfix = to_postfix(atoms)?;
    tracing::debug!(atoms = postfix.len(), "converted rule to postfix");
    let tree = build_tree(postfix, completed)?;

    tracing::trace!(tree = %tree, "parsed rule");
    Ok(tree)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackEntry {
    Open,
    Connective(Connective),
}

/// Reorder infix atoms into postfix order (shunting-yard).
///
/// An incoming connective pops at most one operator: the stack top, when it
/// binds strictly tighter. `and` and `or` never pop each other, so a run of
/// them groups to the right once the stack is flushed.
pub fn to_postfix(atoms: Vec<Atom>) -> Result<Vec<Atom>> {
    let mut output = Vec::with_capacity(atoms.len());
    let mut operators: SmallVec<[StackEntry; 8]> = SmallVec::new();

    for atom in atoms {
        match atom {
            Atom::Course(_) | Atom::Fragment(_) => output.push(atom),
            Atom::OpenParen => operators.push(StackEntry::Open),
            Atom::CloseParen => loop {
                match operators.pop() {
                    Some(StackEntry::Open) => break,
                    Some(StackEntry::Connective(connective)) => {
                        output.push(Atom::Connective(connective))
                    }
                    None => {
                        return Err(PrereqError::Structural(
                            "Unmatched closing parenthesis".to_string(),
                        ))
                    }
                }
            },
            Atom::Connective(incoming) => {
                if let Some(&StackEntry::Connective(top)) = operators.last() {
                    if top.precedence() < incoming.precedence() {
                        operators.pop();
                        output.push(Atom::Connective(top));
                    }
                }
                operators.push(StackEntry::Connective(incoming));
            }
        }
    }

    while let Some(entry) = operators.pop() {
        match entry {
            StackEntry::Connective(connective) => output.push(Atom::Connective(connective)),
            StackEntry::Open => {
                return Err(PrereqError::Structural(
                    "Unmatched opening parenthesis".to_string(),
                ))
            }
        }
    }

    Ok(output)
}

/// Build an expression tree from postfix atoms
pub fn build_tree(postfix: Vec<Atom>, completed: &CompletedCourses) -> Result<Node> {
    let mut stack: Vec<Node> = Vec::with_capacity(postfix.len());

    for atom in postfix {
        match atom {
            Atom::Connective(connective) => {
                let (left, right) = pop_operands(&mut stack, connective)?;
                let node = match connective {
                    Connective::And => Node::and(left, right),
                    Connective::Or => Node::or(left, right),
                    Connective::In => membership(left, right)?,
                };
                stack.push(node);
            }
            Atom::Course(code) => {
                let present = completed.contains(&code);
                stack.push(Node::CoursePresence { code, present });
            }
            Atom::Fragment(text) => stack.push(fragment_node(text)),
            Atom::OpenParen | Atom::CloseParen => {
                return Err(PrereqError::Structural(
                    "Parenthesis in postfix sequence".to_string(),
                ))
            }
        }
    }

    let root = stack
        .pop()
        .ok_or_else(|| PrereqError::Structural("Rule has no conditions".to_string()))?;
    if !stack.is_empty() {
        return Err(PrereqError::Structural(format!(
            "{} operands left without a connective",
            stack.len() + 1
        )));
    }

    Ok(root)
}

fn pop_operands(stack: &mut Vec<Node>, connective: Connective) -> Result<(Node, Node)> {
    match (stack.pop(), stack.pop()) {
        (Some(right), Some(left)) => Ok((left, right)),
        _ => Err(PrereqError::Structural(format!(
            "'{}' needs two operands",
            connective.keyword()
        ))),
    }
}

fn membership(left: Node, right: Node) -> Result<Node> {
    match (left, right) {
        (Node::RawLeaf(condition), Node::RawLeaf(requirement)) => Ok(Node::Membership {
            condition,
            requirement,
        }),
        (left, right) => Err(PrereqError::Structural(format!(
            "'in' needs quantity text on both sides, got {} and {}",
            left, right
        ))),
    }
}

/// "completion of N units" phrasing carries its own membership test
fn fragment_node(text: String) -> Node {
    match COMPLETION_WORD.find(&text) {
        Some(found) => Node::Membership {
            condition: COMPLETION.to_string(),
            requirement: text[found.end()..].trim().to_string(),
        },
        None => Node::RawLeaf(text),
    }
}
