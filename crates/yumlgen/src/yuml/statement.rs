//! yUML DSL statements
//!
//! A statement is an immutable line of yUML class-diagram DSL. Node
//! statements describe one model each; edge statements describe one
//! relationship or inheritance link.

use std::fmt;

/// A single yUML DSL statement
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    /// A class node, e.g. `[blog.Post|(pk) id: Auto;]`
    Node(String),
    /// A relationship edge, e.g. `[auth.User]<-posts-[blog.Post]`
    Edge(String),
}

impl Statement {
    pub fn node(text: impl Into<String>) -> Self {
        Statement::Node(text.into())
    }

    pub fn edge(text: impl Into<String>) -> Self {
        Statement::Edge(text.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Statement::Node(text) | Statement::Edge(text) => text,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Statement::Node(_))
    }

    pub fn is_edge(&self) -> bool {
        matches!(self, Statement::Edge(_))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Join statements with commas into a single DSL text, the form the remote
/// rendering service expects.
pub fn join_dsl(statements: &[Statement]) -> String {
    statements
        .iter()
        .map(Statement::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
