use crate::tasks::{DEFAULT_TOP_K, ParamGrid, default_grid};
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::wizard::{prompt_choice, prompt_dataset, prompt_grid, prompt_learners};
use crate::ui::types::choices::{
    DatasetParameters, LearnerChoice, LearnerKind, RandomForestParams, SgdParams, UIChoice,
};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_learners() -> Vec<LearnerChoice> {
    LearnerChoice::report_defaults()
}
fn default_tuned() -> LearnerChoice {
    LearnerChoice::Sgd(SgdParams::default())
}
fn default_ranker() -> LearnerChoice {
    LearnerChoice::RandomForest(RandomForestParams::default())
}
fn default_folds() -> usize {
    5
}
fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ReportParams {
    #[serde(default)]
    pub data: DatasetParameters,

    #[serde(default = "default_learners")]
    #[schemars(description = "Learners compared on 1%, 10% and 100% of the training data")]
    pub learners: Vec<LearnerChoice>,

    #[serde(default = "default_tuned")]
    #[schemars(description = "Learner tuned by grid search")]
    pub tune: LearnerChoice,

    #[serde(default = "default_grid")]
    #[schemars(description = "Parameter name to candidate values")]
    pub grid: ParamGrid,

    #[serde(default = "default_folds")]
    #[schemars(
        title = "Folds",
        description = "Cross-validation folds for tuning",
        range(min = 2),
        default = "default_folds"
    )]
    pub folds: usize,

    #[serde(default = "default_ranker")]
    #[schemars(description = "Learner whose importances rank the features")]
    pub ranker: LearnerChoice,

    #[serde(default = "default_top_k")]
    #[schemars(
        title = "Top features",
        description = "Features kept for the reduced model",
        range(min = 1),
        default = "default_top_k"
    )]
    pub top_k: usize,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            data: DatasetParameters::default(),
            learners: default_learners(),
            tune: default_tuned(),
            grid: default_grid(),
            folds: default_folds(),
            ranker: default_ranker(),
            top_k: default_top_k(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CompareParams {
    #[serde(default)]
    pub data: DatasetParameters,

    #[serde(default = "default_learners")]
    pub learners: Vec<LearnerChoice>,
}

impl Default for CompareParams {
    fn default() -> Self {
        Self {
            data: DatasetParameters::default(),
            learners: default_learners(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TuneParams {
    #[serde(default)]
    pub data: DatasetParameters,

    #[serde(default = "default_tuned")]
    pub learner: LearnerChoice,

    #[serde(default = "default_grid")]
    pub grid: ParamGrid,

    #[serde(default = "default_folds")]
    #[schemars(
        title = "Folds",
        description = "Cross-validation folds",
        range(min = 2),
        default = "default_folds"
    )]
    pub folds: usize,
}

impl Default for TuneParams {
    fn default() -> Self {
        Self {
            data: DatasetParameters::default(),
            learner: default_tuned(),
            grid: default_grid(),
            folds: default_folds(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ImportanceParams {
    #[serde(default)]
    pub data: DatasetParameters,

    #[serde(default = "default_ranker")]
    pub ranker: LearnerChoice,

    #[serde(default = "default_tuned")]
    #[schemars(description = "Learner refit on the top features")]
    pub model: LearnerChoice,

    #[serde(default = "default_top_k")]
    #[schemars(
        title = "Top features",
        description = "Features kept for the reduced model",
        range(min = 1),
        default = "default_top_k"
    )]
    pub top_k: usize,
}

impl Default for ImportanceParams {
    fn default() -> Self {
        Self {
            data: DatasetParameters::default(),
            ranker: default_ranker(),
            model: default_tuned(),
            top_k: default_top_k(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Full report",
        detailed_message = "Explore, compare, tune and select features."
    ))]
    Report(ReportParams),
    #[strum_discriminants(strum(
        message = "Compare learners",
        detailed_message = "Train on 1%, 10% and 100% of the data."
    ))]
    Compare(CompareParams),
    #[strum_discriminants(strum(
        message = "Tune a learner",
        detailed_message = "Cross-validated grid search."
    ))]
    Tune(TuneParams),
    #[strum_discriminants(strum(
        message = "Feature importance",
        detailed_message = "Rank features and refit on the best ones."
    ))]
    Importance(ImportanceParams),
}

impl UIChoice for TaskChoice {
    type Kind = TaskKind;

    fn schema() -> Schema {
        schema_for!(TaskChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a task:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            TaskKind::Report => serde_json::to_value(ReportParams::default()),
            TaskKind::Compare => serde_json::to_value(CompareParams::default()),
            TaskKind::Tune => serde_json::to_value(TuneParams::default()),
            TaskKind::Importance => serde_json::to_value(ImportanceParams::default()),
        }
        .unwrap_or_default()
    }

    fn subprompts<D: PromptDriver>(
        driver: &D,
        kind: Self::Kind,
    ) -> anyhow::Result<Option<Map<String, Value>>> {
        let mut m = Map::new();
        m.insert("data".into(), serde_json::to_value(prompt_dataset(driver)?)?);
        match kind {
            TaskKind::Report => {
                if !driver.ask_bool(
                    "Use the default learners?",
                    "SVC, Random Forest and SGD",
                    true,
                )? {
                    m.insert("learners".into(), serde_json::to_value(prompt_learners(driver)?)?);
                }
            }
            TaskKind::Compare => {
                m.insert("learners".into(), serde_json::to_value(prompt_learners(driver)?)?);
            }
            TaskKind::Tune => {
                let learner = prompt_choice::<LearnerChoice, _>(driver)?;
                let grid = prompt_grid(driver, learner.kind() == LearnerKind::Sgd)?;
                m.insert("learner".into(), serde_json::to_value(learner)?);
                m.insert("grid".into(), serde_json::to_value(grid)?);
            }
            TaskKind::Importance => {
                let model = prompt_choice::<LearnerChoice, _>(driver)?;
                m.insert("model".into(), serde_json::to_value(model)?);
            }
        }
        Ok(Some(m))
    }
}
