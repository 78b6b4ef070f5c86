//! Abstract Syntax Tree for prerequisite expressions

use crate::course::CourseCode;
use std::fmt;

/// AST node for prerequisite expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Both sides must hold
    And(Box<Node>, Box<Node>),
    /// Either side must hold
    Or(Box<Node>, Box<Node>),
    /// Quantity test like "12 units of credit" in "level 3 comp courses"
    Membership {
        /// Count-or-credit specifier, or `"completion"`
        condition: String,
        /// What is being counted
        requirement: String,
    },
    /// Single course; `present` is resolved when the tree is built
    CoursePresence { code: CourseCode, present: bool },
    /// Unresolved text, only meaningful as a membership operand
    RawLeaf(String),
}

impl Node {
    pub fn and(left: Node, right: Node) -> Self {
        Node::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Node, right: Node) -> Self {
        Node::Or(Box::new(left), Box::new(right))
    }
}

/// Connective keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
    /// Membership: "<quantity> in <requirement>"
    In,
}

impl Connective {
    /// Binding strength; a lower number binds tighter.
    #[inline]
    pub fn precedence(self) -> u8 {
        match self {
            Connective::In => 1,
            Connective::And | Connective::Or => 2,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Connective::And => "and",
            Connective::Or => "or",
            Connective::In => "in",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "and" => Some(Connective::And),
            "or" => Some(Connective::Or),
            "in" => Some(Connective::In),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::And(left, right) => write!(f, "(AND {} {})", left, right),
            Node::Or(left, right) => write!(f, "(OR {} {})", left, right),
            Node::Membership {
                condition,
                requirement,
            } => write!(f, "(IN {:?} {:?})", condition, requirement),
            Node::CoursePresence { code, .. } => write!(f, "{}", code),
            Node::RawLeaf(text) => write!(f, "{:?}", text),
        }
    }
}
