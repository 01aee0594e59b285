//! Yumlgen - Turn data-model schemas into yUML class diagrams
//!
//! A library for describing applications, models, and relationships and
//! emitting the compact yUML class-diagram DSL, optionally rendered to an
//! image by the yuml.me web service.
//!
//! # Quick Start
//!
//! ```rust
//! use yumlgen::generate_all;
//!
//! let schema = r#"{
//!     "applications": [
//!         {"label": "blog", "models": [
//!             {"name": "Post", "fields": [
//!                 {"name": "id", "type": "AutoField", "primary_key": true}
//!             ]}
//!         ]}
//!     ]
//! }"#;
//!
//! let statements = generate_all(schema, &[]).unwrap();
//! assert_eq!(statements[0].as_str(), "[blog.Post|(pk) id: Auto;]");
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use yumlgen::prelude::*;
//!
//! let mut post = Model::new("blog", "Post");
//! post.add_field(Field::scalar("id", "AutoField").with_primary_key());
//! post.add_field(Field::foreign_key("author", ModelRef::new("auth", "User")));
//! let app = Application::new("blog").with_model(post);
//!
//! let formatter = YumlFormatter::new();
//! let statements = formatter.format(&[&app]);
//! assert!(statements.iter().any(|s| s.is_edge()));
//! ```

pub mod core;
pub mod yuml;

pub use core::*;
pub use yuml::{join_dsl, Statement, YumlClient, YumlFormatter, YUML_BASE_URL};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Application, Direction, Field, FieldKind, FieldLabel, ManyToMany, MetadataProvider, Model,
        ModelRef, Relation, RenderOptions, SchemaProvider, Style, YumlError,
    };
    pub use crate::yuml::{join_dsl, Statement, YumlClient, YumlFormatter};
}

/// Generate yUML statements for the named applications of a schema document
///
/// # Arguments
/// * `schema_json` - JSON schema document describing applications and models
/// * `apps` - labels of the applications to include
/// * `labels` - field annotations to render (indexed, null, default)
///
/// # Returns
/// * `Ok(Vec<Statement>)` - node statements followed by edge statements
/// * `Err` - if the document is invalid or an application is unknown
pub fn generate(
    schema_json: &str,
    apps: &[&str],
    labels: &[FieldLabel],
) -> anyhow::Result<Vec<Statement>> {
    let provider = SchemaProvider::from_json(schema_json)?;
    let selected = apps
        .iter()
        .map(|label| provider.application(label))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(YumlFormatter::with_labels(labels.to_vec()).format(&selected))
}

/// Generate yUML statements for every application in a schema document
pub fn generate_all(schema_json: &str, labels: &[FieldLabel]) -> anyhow::Result<Vec<Statement>> {
    let provider = SchemaProvider::from_json(schema_json)?;
    let selected: Vec<&Application> = provider.applications().iter().collect();
    Ok(YumlFormatter::with_labels(labels.to_vec()).format(&selected))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"{
        "applications": [
            {"label": "blog", "models": [
                {"name": "Post", "fields": [
                    {"name": "id", "type": "AutoField", "primary_key": true},
                    {"name": "author", "relation": "fk", "to": "auth.User",
                     "related_name": "posts"}
                ]}
            ]},
            {"label": "auth", "models": [
                {"name": "User", "fields": [
                    {"name": "id", "type": "AutoField", "primary_key": true}
                ]}
            ]}
        ]
    }"#;

    #[test]
    fn test_generate_selected_app() {
        let statements = generate(SCHEMA, &["blog"], &[]).unwrap();
        assert!(statements
            .iter()
            .any(|s| s.as_str() == "[auth.User|...{bg:orange};]"));
        assert!(statements
            .iter()
            .any(|s| s.as_str() == "[auth.User]<-posts-[blog.Post]"));
    }

    #[test]
    fn test_generate_all_has_no_stubs() {
        let statements = generate_all(SCHEMA, &[]).unwrap();
        assert!(!statements.iter().any(|s| s.as_str().contains("{bg:orange}")));
        assert_eq!(statements.iter().filter(|s| s.is_node()).count(), 2);
    }

    #[test]
    fn test_generate_unknown_app() {
        let result = generate(SCHEMA, &["shop"], &[]);
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("shop"));
    }

    #[test]
    fn test_generate_invalid_schema() {
        assert!(generate("{", &[], &[]).is_err());
    }
}
