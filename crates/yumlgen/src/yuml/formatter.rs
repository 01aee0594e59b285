//! yUML DSL formatter
//!
//! Converts a set of selected applications into an ordered sequence of yUML
//! class-diagram statements: one node statement per model, one edge
//! statement per relationship or inheritance link, followed by external stub
//! nodes for models referenced from unselected applications.

use std::collections::HashSet;

use tracing::debug;

use crate::core::schema::{Application, Field, FieldKind, Model, ModelRef};
use crate::core::FieldLabel;
use crate::yuml::statement::Statement;

const PK_PREFIX: &str = "(pk) ";
const EXTERNAL_BODY: &str = "...{bg:orange}";

/// Formatter turning model metadata into yUML statements
///
/// The formatter is pure: the same applications and label selection always
/// produce the same statement sequence, nodes first, then edges in
/// discovery order.
#[derive(Debug, Clone, Default)]
pub struct YumlFormatter {
    labels: Vec<FieldLabel>,
}

impl YumlFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter that annotates fields with the given labels
    pub fn with_labels(labels: Vec<FieldLabel>) -> Self {
        Self { labels }
    }

    /// Format the selected applications into an ordered statement sequence
    pub fn format(&self, applications: &[&Application]) -> Vec<Statement> {
        let selected: HashSet<&str> = applications.iter().map(|a| a.label.as_str()).collect();

        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        // External models keep first-reference order; the set only
        // deduplicates.
        let mut externals: Vec<ModelRef> = Vec::new();
        let mut seen_externals: HashSet<ModelRef> = HashSet::new();

        let mut note_external = |target: &ModelRef| {
            if !selected.contains(target.app.as_str()) && !seen_externals.contains(target) {
                seen_externals.insert(target.clone());
                externals.push(target.clone());
            }
        };

        for application in applications {
            for model in &application.models {
                let mut body = String::new();

                for field in model.direct_fields() {
                    body.push_str(&self.field_segment(field, true));
                    if let Some(relation) = field.relation() {
                        edges.push(Statement::edge(relation_edge(
                            &relation.to,
                            relation.related_name.as_deref(),
                            model,
                        )));
                        note_external(&relation.to);
                    }
                }

                // Many-to-many fields come after the direct fields and never
                // carry label annotations.
                for field in model.many_to_many_fields() {
                    body.push_str(&self.field_segment(field, false));
                    if let Some(m2m) = field.as_many_to_many() {
                        let related = m2m.related_name.as_deref();
                        if m2m.through.is_some() {
                            edges.push(Statement::edge(through_edge(&m2m.to, related, model)));
                        } else {
                            edges.push(Statement::edge(relation_edge(&m2m.to, related, model)));
                        }
                        note_external(&m2m.to);
                    }
                }

                nodes.push(Statement::node(format!("[{}|{}]", model.label(), body)));

                for parent in &model.parents {
                    edges.push(Statement::edge(format!(
                        "[{}]^--[{}]",
                        parent.label(),
                        model.label()
                    )));
                    note_external(parent);
                }
            }
        }

        for external in &externals {
            nodes.push(Statement::node(format!(
                "[{}|{};]",
                external.label(),
                EXTERNAL_BODY
            )));
        }

        debug!(
            node_count = nodes.len(),
            edge_count = edges.len(),
            external_count = externals.len(),
            "formatted statements"
        );

        nodes.extend(edges);
        nodes
    }

    /// Render a single field as `(pk) <name>: <Type>;`
    fn field_segment(&self, field: &Field, with_labels: bool) -> String {
        let mut segment = String::new();
        if field.primary_key {
            segment.push_str(PK_PREFIX);
        }

        let mut type_text = match &field.kind {
            FieldKind::Scalar { type_name } => type_name
                .strip_suffix("Field")
                .unwrap_or(type_name)
                .to_string(),
            FieldKind::ForeignKey(rel) | FieldKind::OneToOne(rel) => rel.to.label(),
            FieldKind::ManyToMany(m2m) => m2m.to.label(),
        };

        if with_labels && !self.labels.is_empty() {
            let annotations = self.annotations(field);
            if !annotations.is_empty() {
                type_text.push_str(&format!(" ({})", annotations.join(" - ")));
            }
        }

        segment.push_str(&field.name);
        segment.push_str(": ");
        segment.push_str(&type_text);
        segment.push(';');
        segment
    }

    fn annotations(&self, field: &Field) -> Vec<String> {
        let mut annotations = Vec::new();
        for label in &self.labels {
            match label {
                FieldLabel::DbIndex if field.db_index => {
                    annotations.push("indexed".to_string());
                }
                FieldLabel::Null if field.null => {
                    annotations.push("null".to_string());
                }
                FieldLabel::Default => {
                    if let Some(value) = &field.default {
                        annotations.push(format!("Default: {}", value));
                    }
                }
                _ => {}
            }
        }
        annotations
    }
}

/// Plain relation edge: `[Target]<-related-[Owner]`
///
/// An unset related name leaves the middle segment empty, producing `<--`.
fn relation_edge(target: &ModelRef, related_name: Option<&str>, owner: &Model) -> String {
    format!(
        "[{}]<-{}-[{}]",
        target.label(),
        related_name.unwrap_or(""),
        owner.label()
    )
}

/// Dashed edge through an explicit join model: `[Target]<-.-related[Owner]`
fn through_edge(target: &ModelRef, related_name: Option<&str>, owner: &Model) -> String {
    format!(
        "[{}]<-.-{}[{}]",
        target.label(),
        related_name.unwrap_or(""),
        owner.label()
    )
}
