//! Model metadata providers
//!
//! The formatter never talks to a concrete ORM. It consumes the
//! [`MetadataProvider`] trait, and any source that can enumerate
//! applications and their models can drive diagram generation.
//!
//! [`SchemaProvider`] is the bundled implementation: it loads a JSON schema
//! document describing applications, models, and fields.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::core::schema::{Application, Field, Model, ModelRef};
use crate::core::YumlError;

/// Source of application/model metadata
pub trait MetadataProvider {
    /// Labels of every application this provider knows about
    fn application_labels(&self) -> Vec<String>;

    /// Look up a single application by label
    fn application(&self, label: &str) -> Result<&Application, YumlError>;
}

/// Relation keyword in a schema document field entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RelationDoc {
    Fk,
    OneToOne,
    ManyToMany,
}

/// Field entry as written in the schema document
#[derive(Debug, Deserialize)]
struct FieldDoc {
    name: String,
    #[serde(rename = "type")]
    type_name: Option<String>,
    relation: Option<RelationDoc>,
    to: Option<String>,
    related_name: Option<String>,
    through: Option<String>,
    #[serde(default)]
    primary_key: bool,
    #[serde(default)]
    db_index: bool,
    #[serde(default)]
    null: bool,
    default: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ModelDoc {
    name: String,
    #[serde(default)]
    parents: Vec<String>,
    #[serde(default)]
    fields: Vec<FieldDoc>,
}

#[derive(Debug, Deserialize)]
struct ApplicationDoc {
    label: String,
    #[serde(default)]
    models: Vec<ModelDoc>,
}

#[derive(Debug, Deserialize)]
struct SchemaDoc {
    applications: Vec<ApplicationDoc>,
}

/// Metadata provider backed by a JSON schema document
#[derive(Debug, Default)]
pub struct SchemaProvider {
    applications: Vec<Application>,
}

impl SchemaProvider {
    /// Load a schema document from a JSON string
    pub fn from_json(json: &str) -> Result<Self, YumlError> {
        let doc: SchemaDoc = serde_json::from_str(json)
            .map_err(|e| YumlError::schema_error(format!("invalid schema document: {}", e)))?;

        let mut applications = Vec::with_capacity(doc.applications.len());
        for app_doc in doc.applications {
            applications.push(convert_application(app_doc)?);
        }

        debug!(
            application_count = applications.len(),
            "loaded schema document"
        );
        Ok(Self { applications })
    }

    /// Load a schema document from a file path
    pub fn from_file(path: &Path) -> Result<Self, YumlError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// All applications in document order
    pub fn applications(&self) -> &[Application] {
        &self.applications
    }
}

impl MetadataProvider for SchemaProvider {
    fn application_labels(&self) -> Vec<String> {
        self.applications.iter().map(|a| a.label.clone()).collect()
    }

    fn application(&self, label: &str) -> Result<&Application, YumlError> {
        self.applications
            .iter()
            .find(|a| a.label == label)
            .ok_or_else(|| {
                YumlError::lookup_error(format!("Specified application not found: {}", label))
            })
    }
}

fn convert_application(doc: ApplicationDoc) -> Result<Application, YumlError> {
    let mut app = Application::new(doc.label.clone());
    for model_doc in doc.models {
        app.add_model(convert_model(&doc.label, model_doc)?);
    }
    Ok(app)
}

fn convert_model(app_label: &str, doc: ModelDoc) -> Result<Model, YumlError> {
    let mut model = Model::new(app_label, doc.name.clone());
    for parent in doc.parents {
        model = model.with_parent(ModelRef::parse(&parent)?);
    }
    for field_doc in doc.fields {
        let field = convert_field(app_label, &doc.name, field_doc)?;
        model.add_field(field);
    }
    Ok(model)
}

fn convert_field(app_label: &str, model_name: &str, doc: FieldDoc) -> Result<Field, YumlError> {
    let mut field = match doc.relation {
        None => {
            let type_name = doc.type_name.unwrap_or_default();
            Field::scalar(doc.name, type_name)
        }
        Some(kind) => {
            let to = doc.to.ok_or_else(|| {
                YumlError::schema_error(format!(
                    "relation field \"{}\" on {}.{} has no \"to\" target",
                    doc.name, app_label, model_name
                ))
            })?;
            let target = ModelRef::parse(&to)?;
            let mut field = match kind {
                RelationDoc::Fk => Field::foreign_key(doc.name, target),
                RelationDoc::OneToOne => Field::one_to_one(doc.name, target),
                RelationDoc::ManyToMany => Field::many_to_many(doc.name, target),
            };
            if let Some(related_name) = doc.related_name {
                field = field.with_related_name(related_name);
            }
            if let Some(through) = doc.through {
                if kind != RelationDoc::ManyToMany {
                    return Err(YumlError::schema_error(format!(
                        "field \"{}\" on {}.{} declares \"through\" but is not many_to_many",
                        field.name, app_label, model_name
                    )));
                }
                field = field.with_through(ModelRef::parse(&through)?);
            }
            field
        }
    };

    if doc.primary_key {
        field = field.with_primary_key();
    }
    if doc.db_index {
        field = field.with_db_index();
    }
    if doc.null {
        field = field.with_null();
    }
    if let Some(value) = doc.default {
        field = field.with_default(default_to_string(value));
    }
    Ok(field)
}

/// Render a JSON default value the way it should appear in the diagram:
/// strings verbatim, everything else in JSON notation.
fn default_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
