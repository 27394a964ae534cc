//! Declarative input schemas for tools.
//!
//! A [`Schema`] lists the named fields a tool accepts, their primitive type,
//! whether they are required and what default fills them in when absent.
//! [`Schema::validate`] turns a raw argument map into a complete
//! [`Arguments`] set or reports the first field that does not fit.
//!
//! Fields present in the raw map but not declared are ignored.

use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;

use super::error::ToolError;

/// Primitive type of a declared field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// A JSON string.
    String,
    /// A JSON number (integers and floats alike).
    Number,
    /// A string restricted to a fixed set of literals.
    Enum(&'static [&'static str]),
}

impl FieldType {
    fn json_type(&self) -> &'static str {
        match self {
            Self::String | Self::Enum(_) => "string",
            Self::Number => "number",
        }
    }

    /// Empty value substituted for optional fields without an explicit default.
    fn empty_value(&self) -> Value {
        match self {
            Self::String => Value::String(String::new()),
            Self::Number => json!(0),
            Self::Enum(choices) => Value::String(choices.first().copied().unwrap_or_default().to_string()),
        }
    }
}

/// Specification of a single named field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: &'static str,
    kind: FieldType,
    required: bool,
    default: Option<Value>,
    description: Option<&'static str>,
}

impl FieldSpec {
    fn new(name: &'static str, kind: FieldType) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
            description: None,
        }
    }

    /// A required string field.
    pub fn string(name: &'static str) -> Self {
        Self::new(name, FieldType::String)
    }

    /// A required number field.
    pub fn number(name: &'static str) -> Self {
        Self::new(name, FieldType::Number)
    }

    /// A required field restricted to the given literals.
    pub fn enumeration(name: &'static str, choices: &'static [&'static str]) -> Self {
        Self::new(name, FieldType::Enum(choices))
    }

    /// Make the field optional, filled with `value` when absent.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.required = false;
        self.default = Some(value.into());
        self
    }

    /// Make the field optional, filled with the type's empty value when absent.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Attach a human-readable description.
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> &FieldType {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The value used when an optional field is absent.
    pub fn resolved_default(&self) -> Value {
        self.default
            .clone()
            .unwrap_or_else(|| self.kind.empty_value())
    }

    fn coerce(&self, value: &Value) -> Result<Value, ValidationReason> {
        match (&self.kind, value) {
            (FieldType::String, Value::String(_)) => Ok(value.clone()),
            (FieldType::Number, Value::Number(_)) => Ok(value.clone()),
            (FieldType::Enum(choices), Value::String(s)) => {
                if choices.contains(&s.as_str()) {
                    Ok(value.clone())
                } else {
                    Err(ValidationReason::NotInEnum {
                        value: s.clone(),
                        allowed: choices.iter().map(|c| c.to_string()).collect(),
                    })
                }
            }
            (kind, other) => Err(ValidationReason::TypeMismatch {
                expected: kind.json_type(),
                found: json_kind(other),
            }),
        }
    }

    fn to_json_schema(&self) -> Value {
        let mut property = serde_json::Map::new();
        property.insert("type".into(), json!(self.kind.json_type()));
        if let FieldType::Enum(choices) = &self.kind {
            property.insert("enum".into(), json!(choices));
        }
        if let Some(default) = &self.default {
            property.insert("default".into(), default.clone());
        }
        if let Some(description) = self.description {
            property.insert("description".into(), json!(description));
        }
        Value::Object(property)
    }
}

/// Ordered set of field specifications for one tool.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Validate a raw argument map against this schema.
    ///
    /// Fields are checked in declaration order and the first failure is
    /// returned. On success every declared field is present in the result.
    pub fn validate(&self, raw: Option<&JsonObject>) -> Result<Arguments, ValidationError> {
        let mut typed = JsonObject::new();

        for spec in &self.fields {
            let value = match raw.and_then(|r| r.get(spec.name)) {
                Some(value) => spec
                    .coerce(value)
                    .map_err(|reason| ValidationError::new(spec.name, reason))?,
                None if spec.required => {
                    return Err(ValidationError::new(spec.name, ValidationReason::Missing));
                }
                None => spec.resolved_default(),
            };
            typed.insert(spec.name.to_string(), value);
        }

        Ok(Arguments(typed))
    }

    /// Render the schema as a JSON Schema object for `tools/list`.
    pub fn to_json_schema(&self) -> JsonObject {
        let properties: serde_json::Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.to_json_schema()))
            .collect();
        let required: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();

        let mut schema = JsonObject::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".into(), json!(required));
        }
        schema
    }
}

/// JSON Schema for tools that take no arguments.
pub fn empty_json_schema() -> JsonObject {
    Schema::new().to_json_schema()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Why a field failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationReason {
    #[error("missing required field")]
    Missing,

    #[error("expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("expected one of [{}], got '{value}'", .allowed.join(", "))]
    NotInEnum { value: String, allowed: Vec<String> },
}

/// First field of an argument map that failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid argument '{field}': {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: ValidationReason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }
}

/// A complete, validated argument set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments(JsonObject);

impl Arguments {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Deserialize into the tool's parameter struct.
    pub fn parse<P: DeserializeOwned>(self) -> Result<P, ToolError> {
        serde_json::from_value(Value::Object(self.0))
            .map_err(|e| ToolError::internal(format!("Failed to decode arguments: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn calc_schema() -> Schema {
        Schema::new()
            .field(FieldSpec::enumeration("operation", &["add", "subtract"]))
            .field(FieldSpec::number("a"))
            .field(FieldSpec::number("b").with_default(1))
    }

    #[test]
    fn test_validate_fills_defaults() {
        let args = calc_schema()
            .validate(Some(&raw(json!({"operation": "add", "a": 2}))))
            .unwrap();
        assert_eq!(args.get("b"), Some(&json!(1)));
        assert_eq!(args.get("a"), Some(&json!(2)));
    }

    #[test]
    fn test_validate_missing_required() {
        let err = calc_schema()
            .validate(Some(&raw(json!({"operation": "add"}))))
            .unwrap_err();
        assert_eq!(err.field, "a");
        assert_eq!(err.reason, ValidationReason::Missing);
    }

    #[test]
    fn test_validate_type_mismatch() {
        let err = calc_schema()
            .validate(Some(&raw(json!({"operation": "add", "a": "2"}))))
            .unwrap_err();
        assert_eq!(err.field, "a");
        assert_eq!(
            err.reason,
            ValidationReason::TypeMismatch {
                expected: "number",
                found: "string"
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid argument 'a': expected number, got string"
        );
    }

    #[test]
    fn test_validate_not_in_enum() {
        let err = calc_schema()
            .validate(Some(&raw(json!({"operation": "modulo", "a": 1}))))
            .unwrap_err();
        assert_eq!(err.field, "operation");
        assert!(matches!(err.reason, ValidationReason::NotInEnum { .. }));
        assert!(err.to_string().contains("add, subtract"));
    }

    #[test]
    fn test_validate_reports_first_failing_field() {
        let err = calc_schema().validate(Some(&JsonObject::new())).unwrap_err();
        assert_eq!(err.field, "operation");
    }

    #[test]
    fn test_undeclared_fields_are_ignored() {
        let args = calc_schema()
            .validate(Some(&raw(json!({"operation": "add", "a": 1, "extra": true}))))
            .unwrap();
        assert!(args.get("extra").is_none());
    }

    #[test]
    fn test_empty_schema_accepts_anything() {
        let args = Schema::new()
            .validate(Some(&raw(json!({"ignored": 1}))))
            .unwrap();
        assert!(args.is_empty());
        assert!(Schema::new().validate(None).unwrap().is_empty());
    }

    #[test]
    fn test_optional_without_default_uses_empty_value() {
        let schema = Schema::new()
            .field(FieldSpec::string("name").optional())
            .field(FieldSpec::number("count").optional());
        let args = schema.validate(None).unwrap();
        assert_eq!(args.get("name"), Some(&json!("")));
        assert_eq!(args.get("count"), Some(&json!(0)));
    }

    #[test]
    fn test_json_schema_shape() {
        let schema = calc_schema().to_json_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["operation"]["enum"], json!(["add", "subtract"]));
        assert_eq!(schema["properties"]["b"]["default"], json!(1));
        assert_eq!(schema["required"], json!(["operation", "a"]));
    }

    #[test]
    fn test_empty_json_schema_has_no_required() {
        let schema = empty_json_schema();
        assert_eq!(schema["type"], "object");
        assert!(schema.get("required").is_none());
    }
}
