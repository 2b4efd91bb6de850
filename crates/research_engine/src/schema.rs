use std::fmt;

use research_core::{RecordDefect, SourceField, SourceRecord};
use serde_json::{json, Map, Value};

/// Output schema attached to source requests: an array of objects with exactly
/// `title`, `url` and `summary`, all required strings.
pub fn source_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": {
                    "type": "STRING",
                    "description": "The concise title of the website or article."
                },
                "url": {
                    "type": "STRING",
                    "description": "The full URL of the resource."
                },
                "summary": {
                    "type": "STRING",
                    "description": "A 2-3 sentence summary of its relevance."
                }
            },
            "required": ["title", "url", "summary"],
            "propertyOrdering": ["title", "url", "summary"]
        }
    })
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("response is not valid JSON: {0}")]
    NotJson(String),
    #[error("expected an array of sources, found {found}")]
    NotAnArray { found: &'static str },
    #[error("source {index}: {defect}")]
    Element { index: usize, defect: ElementDefect },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementDefect {
    NotAnObject,
    Missing(SourceField),
    NotAString(SourceField),
    UnknownField(String),
    Invalid(RecordDefect),
}

impl fmt::Display for ElementDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementDefect::NotAnObject => write!(f, "not an object"),
            ElementDefect::Missing(field) => write!(f, "missing {field}"),
            ElementDefect::NotAString(field) => write!(f, "{field} is not a string"),
            ElementDefect::UnknownField(name) => write!(f, "unexpected field {name:?}"),
            ElementDefect::Invalid(defect) => write!(f, "{defect}"),
        }
    }
}

/// Parses a structured source reply.
///
/// Records come back in the order the backend sent them; nothing is
/// deduplicated, sorted or rewritten.
pub fn validate_source_list(raw: &str) -> Result<Vec<SourceRecord>, ValidationFailure> {
    let value: Value = serde_json::from_str(raw.trim())
        .map_err(|err| ValidationFailure::NotJson(err.to_string()))?;
    let Value::Array(items) = value else {
        return Err(ValidationFailure::NotAnArray {
            found: json_kind(&value),
        });
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            validate_element(item).map_err(|defect| ValidationFailure::Element { index, defect })
        })
        .collect()
}

fn validate_element(item: &Value) -> Result<SourceRecord, ElementDefect> {
    let object = item.as_object().ok_or(ElementDefect::NotAnObject)?;
    if let Some(unknown) = object
        .keys()
        .find(|key| !SourceField::ALL.iter().any(|field| field.name() == key.as_str()))
    {
        return Err(ElementDefect::UnknownField(unknown.clone()));
    }

    let record = SourceRecord::new(
        string_field(object, SourceField::Title)?,
        string_field(object, SourceField::Url)?,
        string_field(object, SourceField::Summary)?,
    );
    record.check().map_err(ElementDefect::Invalid)?;
    Ok(record)
}

fn string_field(object: &Map<String, Value>, field: SourceField) -> Result<String, ElementDefect> {
    match object.get(field.name()) {
        None => Err(ElementDefect::Missing(field)),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(ElementDefect::NotAString(field)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
