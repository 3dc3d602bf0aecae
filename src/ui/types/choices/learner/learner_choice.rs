use crate::ui::types::build::BuildError;
use crate::ui::types::choices::UIChoice;
use crate::ui::types::choices::learner::*;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Empty parameter object so the wizard can still look under "params"
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct NoParams {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(LearnerKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum LearnerChoice {
    #[strum_discriminants(strum(
        message = "Support Vector Classifier",
        detailed_message = "Kernel SVM trained with SMO."
    ))]
    Svc(SvcParams),
    #[strum_discriminants(strum(
        message = "Random Forest",
        detailed_message = "Bagged CART trees with random feature subsets."
    ))]
    RandomForest(RandomForestParams),
    #[strum_discriminants(strum(
        message = "SGD Classifier",
        detailed_message = "Linear SVM trained by stochastic gradient descent."
    ))]
    Sgd(SgdParams),
    #[strum_discriminants(strum(
        message = "Decision Tree",
        detailed_message = "Single CART tree."
    ))]
    DecisionTree(DecisionTreeParams),
    #[strum_discriminants(strum(
        message = "Naive Predictor",
        detailed_message = "Predicts >50K for everyone."
    ))]
    Naive(NoParams),
}

impl LearnerChoice {
    /// Learners compared by the default report.
    pub fn report_defaults() -> Vec<LearnerChoice> {
        vec![
            LearnerChoice::Svc(SvcParams::default()),
            LearnerChoice::RandomForest(RandomForestParams::default()),
            LearnerChoice::Sgd(SgdParams::default()),
        ]
    }

    pub fn kind(&self) -> LearnerKind {
        LearnerKind::from(self)
    }

    /// Copy of `self` with some `params` entries replaced.
    ///
    /// Every key in `overrides` must name an existing parameter of this
    /// learner, and every value must deserialize into that parameter's type.
    pub fn with_params(&self, overrides: &Map<String, Value>) -> Result<Self, BuildError> {
        let kind: &'static str = self.kind().into();
        let mut tagged = serde_json::to_value(self)
            .map_err(|e| BuildError::InvalidParameter(format!("{kind}: {e}")))?;
        let params = tagged
            .get_mut("params")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| BuildError::InvalidParameter(format!("{kind} has no parameters")))?;

        for (key, value) in overrides {
            if !params.contains_key(key) {
                return Err(BuildError::InvalidParameter(format!(
                    "unknown parameter '{key}' for {kind}"
                )));
            }
            params.insert(key.clone(), value.clone());
        }
        serde_json::from_value(tagged)
            .map_err(|e| BuildError::InvalidParameter(format!("{kind}: {e}")))
    }
}

impl UIChoice for LearnerChoice {
    type Kind = LearnerKind;

    fn schema() -> Schema {
        schema_for!(LearnerChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a learner:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            LearnerKind::Svc => serde_json::to_value(SvcParams::default()),
            LearnerKind::RandomForest => serde_json::to_value(RandomForestParams::default()),
            LearnerKind::Sgd => serde_json::to_value(SgdParams::default()),
            LearnerKind::DecisionTree => serde_json::to_value(DecisionTreeParams::default()),
            LearnerKind::Naive => serde_json::to_value(NoParams::default()),
        }
        .unwrap_or_default()
    }
}
