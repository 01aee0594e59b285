//! Data-model schema types
//!
//! Stores applications, models, fields, and relationship metadata for
//! diagram generation. These types are the in-memory shape every metadata
//! provider produces.

use std::fmt;

use crate::core::YumlError;

/// Reference to a model by application label and class name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelRef {
    pub app: String,
    pub name: String,
}

impl ModelRef {
    pub fn new(app: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            name: name.into(),
        }
    }

    /// Parse a `"app.ModelName"` reference string
    pub fn parse(reference: &str) -> Result<Self, YumlError> {
        match reference.split_once('.') {
            Some((app, name)) if !app.is_empty() && !name.is_empty() => {
                Ok(Self::new(app, name))
            }
            _ => Err(YumlError::schema_error(format!(
                "invalid model reference \"{}\" (expected \"app.ModelName\")",
                reference
            ))),
        }
    }

    /// Diagram label for this model: `<app>.<Name>`
    pub fn label(&self) -> String {
        format!("{}.{}", self.app, self.name)
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.app, self.name)
    }
}

/// Direct relation metadata (foreign key or one-to-one)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub to: ModelRef,
    pub related_name: Option<String>,
}

impl Relation {
    pub fn new(to: ModelRef) -> Self {
        Self {
            to,
            related_name: None,
        }
    }
}

/// Many-to-many relation metadata
///
/// `through` names an explicit join model; when absent the join table is
/// auto-created by the host framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManyToMany {
    pub to: ModelRef,
    pub related_name: Option<String>,
    pub through: Option<ModelRef>,
}

impl ManyToMany {
    pub fn new(to: ModelRef) -> Self {
        Self {
            to,
            related_name: None,
            through: None,
        }
    }
}

/// The kind of a model field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Scalar column with a declared type name (e.g. `CharField`)
    Scalar { type_name: String },
    /// Foreign key to another model
    ForeignKey(Relation),
    /// One-to-one link to another model
    OneToOne(Relation),
    /// Many-to-many link to another model
    ManyToMany(ManyToMany),
}

/// A model field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub primary_key: bool,
    pub db_index: bool,
    pub null: bool,
    pub default: Option<String>,
}

impl Field {
    fn with_kind(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            primary_key: false,
            db_index: false,
            null: false,
            default: None,
        }
    }

    pub fn scalar(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            FieldKind::Scalar {
                type_name: type_name.into(),
            },
        )
    }

    pub fn foreign_key(name: impl Into<String>, to: ModelRef) -> Self {
        Self::with_kind(name, FieldKind::ForeignKey(Relation::new(to)))
    }

    pub fn one_to_one(name: impl Into<String>, to: ModelRef) -> Self {
        Self::with_kind(name, FieldKind::OneToOne(Relation::new(to)))
    }

    pub fn many_to_many(name: impl Into<String>, to: ModelRef) -> Self {
        Self::with_kind(name, FieldKind::ManyToMany(ManyToMany::new(to)))
    }

    pub fn with_primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn with_db_index(mut self) -> Self {
        self.db_index = true;
        self
    }

    pub fn with_null(mut self) -> Self {
        self.null = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Set the reverse relation name; no-op for scalar fields
    pub fn with_related_name(mut self, related_name: impl Into<String>) -> Self {
        match &mut self.kind {
            FieldKind::ForeignKey(rel) | FieldKind::OneToOne(rel) => {
                rel.related_name = Some(related_name.into());
            }
            FieldKind::ManyToMany(m2m) => {
                m2m.related_name = Some(related_name.into());
            }
            FieldKind::Scalar { .. } => {}
        }
        self
    }

    /// Set an explicit join model; no-op for anything but many-to-many
    pub fn with_through(mut self, through: ModelRef) -> Self {
        if let FieldKind::ManyToMany(m2m) = &mut self.kind {
            m2m.through = Some(through);
        }
        self
    }

    /// Direct relation metadata, if this is a foreign key or one-to-one
    pub fn relation(&self) -> Option<&Relation> {
        match &self.kind {
            FieldKind::ForeignKey(rel) | FieldKind::OneToOne(rel) => Some(rel),
            _ => None,
        }
    }

    /// Many-to-many metadata, if this is a many-to-many field
    pub fn as_many_to_many(&self) -> Option<&ManyToMany> {
        match &self.kind {
            FieldKind::ManyToMany(m2m) => Some(m2m),
            _ => None,
        }
    }

    /// Target model for any relation kind
    pub fn target(&self) -> Option<&ModelRef> {
        match &self.kind {
            FieldKind::Scalar { .. } => None,
            FieldKind::ForeignKey(rel) | FieldKind::OneToOne(rel) => Some(&rel.to),
            FieldKind::ManyToMany(m2m) => Some(&m2m.to),
        }
    }
}

/// A model in the schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub app: String,
    pub name: String,
    pub fields: Vec<Field>,
    pub parents: Vec<ModelRef>,
}

impl Model {
    pub fn new(app: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            name: name.into(),
            fields: Vec::new(),
            parents: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_parent(mut self, parent: ModelRef) -> Self {
        self.parents.push(parent);
        self
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Reference to this model
    pub fn reference(&self) -> ModelRef {
        ModelRef::new(self.app.clone(), self.name.clone())
    }

    /// Diagram label for this model: `<app>.<Name>`
    pub fn label(&self) -> String {
        format!("{}.{}", self.app, self.name)
    }

    /// Fields listed in the node body first: scalars and direct relations
    pub fn direct_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .filter(|f| !matches!(f.kind, FieldKind::ManyToMany(_)))
    }

    /// Many-to-many fields, listed after the direct fields
    pub fn many_to_many_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .filter(|f| matches!(f.kind, FieldKind::ManyToMany(_)))
    }
}

/// A named grouping of models
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub label: String,
    pub models: Vec<Model>,
}

impl Application {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            models: Vec::new(),
        }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.models.push(model);
        self
    }

    pub fn add_model(&mut self, model: Model) {
        self.models.push(model);
    }

    pub fn get_model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}
