use anyhow::{Context, Result, bail};
use schemars::{Schema, schema_for};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
    /// String restricted to the listed values.
    Choice(Vec<String>),
}

/// One scalar parameter the wizard can ask for.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

pub fn schema_for<T: schemars::JsonSchema>() -> Schema {
    schema_for!(T)
}

/// Scalar fields of the `params` object of the `kind_key` variant.
///
/// Object, array and nested-enum fields are left out; callers collect those
/// with their own prompts.
pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root = root.as_object().context("root schema is not an object")?;
    let branches = root
        .get("oneOf")
        .or_else(|| root.get("anyOf"))
        .and_then(Value::as_array)
        .context("missing oneOf/anyOf")?;

    let branch = branches
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|b| b.get("properties").and_then(Value::as_object))
        .find(|props| discriminant_matches(props, kind_key));
    let Some(props) = branch else {
        bail!("no branch found for type={kind_key}");
    };

    let Some(params) = props
        .get("params")
        .and_then(Value::as_object)
        .and_then(|p| resolve_ref(root, p))
    else {
        return Ok(vec![]);
    };
    let Some(fields) = params.get("properties").and_then(Value::as_object) else {
        return Ok(vec![]);
    };
    let required: Vec<&str> = params
        .get("required")
        .and_then(Value::as_array)
        .map(|a| a.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut out = Vec::new();
    for (name, field) in fields {
        let field = field
            .as_object()
            .with_context(|| format!("schema of '{name}' is not an object"))?;
        let target = resolve_ref(root, field)
            .with_context(|| format!("failed to resolve $ref of '{name}'"))?;
        let Some(kind) = field_kind(target) else {
            continue;
        };

        // keywords next to a $ref describe the field, those behind it the type
        let lookup = |key: &str| field.get(key).or_else(|| target.get(key));
        out.push(FieldSpec {
            name: name.clone(),
            title: lookup("title")
                .and_then(Value::as_str)
                .unwrap_or(name)
                .to_string(),
            description: lookup("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            required: required.contains(&name.as_str()),
            kind,
            default: field.get("default").cloned(),
            min: lookup("minimum")
                .or_else(|| lookup("exclusiveMinimum"))
                .and_then(Value::as_f64),
            max: lookup("maximum")
                .or_else(|| lookup("exclusiveMaximum"))
                .and_then(Value::as_f64),
        });
    }
    Ok(out)
}

fn discriminant_matches(props: &Map<String, Value>, kind_key: &str) -> bool {
    let Some(tag) = props.get("type").and_then(Value::as_object) else {
        return false;
    };
    if tag.get("const").and_then(Value::as_str) == Some(kind_key) {
        return true;
    }
    matches!(
        tag.get("enum").and_then(Value::as_array).map(Vec::as_slice),
        Some([only]) if only.as_str() == Some(kind_key)
    )
}

/// Follows a local `#/...` reference; objects without one are returned as is.
fn resolve_ref<'a>(
    root: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    let Some(reference) = obj.get("$ref") else {
        return Some(obj);
    };
    let path = reference.as_str()?.strip_prefix("#/")?;
    path.split('/').try_fold(root, |cur, raw| {
        // JSON Pointer unescape
        let seg = raw.replace("~1", "/").replace("~0", "~");
        cur.get(&seg)?.as_object()
    })
}

fn scalar_kind(name: &str) -> Option<FieldKind> {
    match name {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    }
}

fn field_kind(schema: &Map<String, Value>) -> Option<FieldKind> {
    if let Some(values) = schema.get("enum").and_then(Value::as_array) {
        let options: Vec<String> = values
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();
        if !options.is_empty() && options.len() == values.len() {
            return Some(FieldKind::Choice(options));
        }
    }
    match schema.get("type") {
        Some(Value::String(s)) => scalar_kind(s),
        // Option<T> shows up as ["T", "null"]
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .find_map(scalar_kind),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{LearnerChoice, UIChoice};

    fn spec<'a>(specs: &'a [FieldSpec], name: &str) -> &'a FieldSpec {
        specs.iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn enums_become_choices_and_options_stay_optional() {
        let specs = specs_for_kind(&LearnerChoice::schema(), "svc").unwrap();
        assert_eq!(
            spec(&specs, "kernel").kind,
            FieldKind::Choice(vec!["linear".into(), "rbf".into()])
        );
        let gamma = spec(&specs, "gamma");
        assert_eq!(gamma.kind, FieldKind::Number);
        assert!(!gamma.required);
        assert_eq!(spec(&specs, "c").title, "C");
    }

    #[test]
    fn ranges_are_read() {
        let specs = specs_for_kind(&LearnerChoice::schema(), "random-forest").unwrap();
        assert_eq!(spec(&specs, "n_estimators").min, Some(1.0));
        assert_eq!(spec(&specs, "min_samples_split").min, Some(2.0));
    }

    #[test]
    fn unknown_kind_is_an_error() {
        assert!(specs_for_kind(&LearnerChoice::schema(), "perceptron").is_err());
    }

    #[test]
    fn empty_params_have_no_fields() {
        assert!(
            specs_for_kind(&LearnerChoice::schema(), "naive")
                .unwrap()
                .is_empty()
        );
    }
}
