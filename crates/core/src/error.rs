use serde::Serialize;
use serde_path_to_error::Segment;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// One malformed field found while building a [`ShipmentDocument`].
///
/// [`ShipmentDocument`]: crate::document::ShipmentDocument
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Dotted/indexed path, e.g. `cartons[2].items[0].upc`.
    pub field: String,
    pub message: String,
}

/// Raw input could not be coerced into a shipment document.
///
/// Always carries at least one [`FieldIssue`]; issues are sorted by path so
/// the error is stable for the same input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe_first(.issues))]
pub struct StructuralError {
    issues: Vec<FieldIssue>,
}

impl StructuralError {
    /// Build an error for a single field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![FieldIssue {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    /// The first offending field (lowest path).
    pub fn field(&self) -> &str {
        self.issues.first().map(|i| i.field.as_str()).unwrap_or("document")
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Map a serde decoding failure (wrong type, missing field, bad JSON)
    /// to the indexed path where it happened.
    pub fn from_serde(err: &serde_path_to_error::Error<serde_json::Error>) -> Self {
        let inner = err.inner();
        let mut field = decode_path(err.path());
        if let Some(missing) = missing_field_name(inner) {
            field = if field.is_empty() {
                missing
            } else {
                format!("{field}.{missing}")
            };
        }
        if field.is_empty() {
            field = "document".to_string();
        }
        Self::new(field, inner.to_string())
    }

    /// Flatten the nested `validator` error tree into indexed field paths.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut issues = Vec::new();
        collect_issues("", errors, &mut issues);
        if issues.is_empty() {
            issues.push(FieldIssue {
                field: "document".to_string(),
                message: "failed structural validation".to_string(),
            });
        }
        issues.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
        Self { issues }
    }
}

fn describe_first(issues: &[FieldIssue]) -> String {
    match issues.first() {
        Some(issue) => format!("Invalid field `{}`: {}", issue.field, issue.message),
        None => "Invalid shipment document".to_string(),
    }
}

fn collect_issues(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldIssue>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                out.extend(list.iter().map(|err| FieldIssue {
                    field: path.clone(),
                    message: describe(err),
                }));
            }
            ValidationErrorsKind::Struct(inner) => collect_issues(&path, inner, out),
            ValidationErrorsKind::List(entries) => {
                for (index, inner) in entries {
                    collect_issues(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}

/// Human message for a field error; built-in validators carry no message.
fn describe(err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }
    match &*err.code {
        "length" => "must not be empty".to_string(),
        "range" => match (err.params.get("exclusive_min"), err.params.get("min")) {
            (Some(min), _) => format!("must be greater than {min}"),
            (None, Some(min)) => format!("must be at least {min}"),
            _ => "is out of range".to_string(),
        },
        code => format!("failed `{code}` check"),
    }
}

/// `cartons[0].weight`; empty for the document root.
fn decode_path(path: &serde_path_to_error::Path) -> String {
    let mut out = String::new();
    for segment in path.iter() {
        match segment {
            Segment::Seq { index } => out.push_str(&format!("[{index}]")),
            Segment::Map { key } => push_key(&mut out, key),
            Segment::Enum { variant } => push_key(&mut out, variant),
            Segment::Unknown => push_key(&mut out, "?"),
        }
    }
    out
}

fn push_key(out: &mut String, key: &str) {
    if !out.is_empty() {
        out.push('.');
    }
    out.push_str(key);
}

/// A missing field is reported at its parent; serde only names it in the
/// message ("missing field `name`").
fn missing_field_name(err: &serde_json::Error) -> Option<String> {
    let text = err.to_string();
    let rest = text.strip_prefix("missing field `")?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}
