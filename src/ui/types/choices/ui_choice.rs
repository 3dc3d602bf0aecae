use anyhow::Result;
use schemars::{JsonSchema, Schema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use strum::{EnumMessage, IntoEnumIterator};

/// A `{type, params}` tagged enum the wizard can build field by field.
pub trait UIChoice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator;

    /// Menu line for `kind`: its message, then the detailed message dimmed.
    fn option_text(kind: Self::Kind) -> String {
        let label = kind.get_message().unwrap_or_else(|| kind.into());
        match kind.get_detailed_message() {
            Some(desc) if !desc.is_empty() => format!("{label}  \x1b[2m\x1b[3m{desc}\x1b[0m"),
            _ => label.to_string(),
        }
    }

    /// JSON Schema for the whole tagged enum.
    fn schema() -> Schema;

    fn prompt_label() -> &'static str {
        "Choose a type:"
    }
    fn prompt_help() -> Option<&'static str> {
        Some("↑/↓ to navigate, ↵ to select")
    }

    /// Default `params` JSON for a given kind (usually from `*Parameters::default()`).
    fn default_params(kind: Self::Kind) -> Value;

    /// Extra params collected by nested prompts, such as the dataset or a
    /// list of learners. Default: none.
    fn subprompts<D: crate::ui::cli::drivers::PromptDriver>(
        _driver: &D,
        _kind: Self::Kind,
    ) -> Result<Option<Map<String, Value>>> {
        Ok(None)
    }

    /// Build the typed enum from kind + params.
    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self> {
        let key: &'static str = kind.into();
        let v = json!({ "type": key, "params": params });
        Ok(serde_json::from_value(v)?)
    }
}
