use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

use crate::tasks::{ParamGrid, default_grid};
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{
    DatasetParameters, FieldKind, LearnerChoice, UIChoice, schema_for, specs_for_kind,
};

pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let kinds: Vec<C::Kind> = <C::Kind as IntoEnumIterator>::iter().collect();
    let texts = kinds.iter().map(|&k| C::option_text(k)).collect();
    let picked = driver.ask_select(C::prompt_label(), C::prompt_help(), texts, 0)?;
    let choice_kind = *kinds
        .get(picked)
        .with_context(|| format!("no option at index {picked}"))?;

    let key: &'static str = choice_kind.into();
    let schema = schema_for::<C>();
    let specs = specs_for_kind(&schema, key)?;

    let defaults = C::default_params(choice_kind);

    let mut params = Map::new();
    for s in specs {
        let init = s.default.clone().or_else(|| defaults.get(&s.name).cloned());
        let help = s.description.as_deref().unwrap_or("");

        let is_optional_numeric = !s.required
            && matches!(s.kind, FieldKind::Integer | FieldKind::Number)
            && matches!(init, None | Some(Value::Null));

        let val_opt: Option<Value> = if is_optional_numeric {
            let def_txt = match s.kind {
                FieldKind::Integer => init
                    .as_ref()
                    .and_then(|v| v.as_u64())
                    .map(|n| n.to_string()),
                FieldKind::Number => init
                    .as_ref()
                    .and_then(|v| v.as_f64())
                    .map(|x| x.to_string()),
                _ => None,
            }
            .unwrap_or_default();

            let answer = driver.ask_string(
                &s.title,
                &format!("{help}\n(leave blank for none)"),
                &def_txt,
            )?;

            let answer = answer.trim();
            if answer.is_empty() {
                None
            } else {
                Some(match s.kind {
                    FieldKind::Integer => {
                        let n: u64 = answer
                            .parse()
                            .with_context(|| format!("invalid integer for {}", s.title))?;
                        Value::from(n)
                    }
                    FieldKind::Number => {
                        let x: f64 = answer
                            .parse()
                            .with_context(|| format!("invalid number for {}", s.title))?;
                        Value::from(x)
                    }
                    _ => Value::String(answer.to_string()),
                })
            }
        } else {
            Some(match &s.kind {
                FieldKind::Boolean => {
                    let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
                    Value::Bool(driver.ask_bool(&s.title, help, def)?)
                }
                FieldKind::String => {
                    let def = init
                        .and_then(|v| v.as_str().map(|s| s.to_string()))
                        .unwrap_or_default();
                    Value::String(driver.ask_string(&s.title, help, &def)?)
                }
                FieldKind::Integer => {
                    let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
                    Value::from(driver.ask_u64(
                        &s.title,
                        help,
                        def,
                        s.min.map(|x| x as u64),
                        s.max.map(|x| x as u64),
                    )?)
                }
                FieldKind::Number => {
                    let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
                    Value::from(driver.ask_f64(&s.title, help, def, s.min, s.max)?)
                }
                FieldKind::Choice(options) => {
                    let def = init
                        .as_ref()
                        .and_then(Value::as_str)
                        .and_then(|d| options.iter().position(|o| o == d))
                        .unwrap_or(0);
                    let picked = driver.ask_select(&s.title, Some(help), options.clone(), def)?;
                    let value = options
                        .get(picked)
                        .with_context(|| format!("no option at index {picked} for {}", s.title))?;
                    Value::String(value.clone())
                }
            })
        };

        if let Some(val) = val_opt {
            params.insert(s.name.clone(), val);
        }
    }

    if let Some(extra) = C::subprompts(driver, choice_kind)? {
        params.extend(extra);
    }
    C::from_parts(choice_kind, Value::Object(params))
}

fn validate_path_str(
    input: &str,
    must_exist: bool,
    must_be_file: bool,
    allowed_exts: &[&str],
) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if must_exist && !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if must_be_file && p.exists() && !p.is_file() {
        return Err("Expected a file path, not a directory".into());
    }
    if !allowed_exts.is_empty() {
        match p.extension().and_then(|e| e.to_str()) {
            Some(ext) if allowed_exts.iter().any(|e| e.eq_ignore_ascii_case(&ext)) => {}
            _ => return Err(format!("Expected a .{} file", allowed_exts.join(" / ."))),
        }
    }
    Ok(())
}

fn prompt_path_until_ok<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: &str,
    must_exist: bool,
    must_be_file: bool,
    allowed_exts: &[&str],
) -> Result<PathBuf> {
    loop {
        let answer = driver.ask_string(title, help, default)?;
        match validate_path_str(&answer, must_exist, must_be_file, allowed_exts) {
            Ok(()) => return Ok(PathBuf::from(answer)),
            Err(msg) => {
                eprintln!("✗ {}", msg);
            }
        }
    }
}

/// Asks where the census CSV lives and how to split it.
pub fn prompt_dataset<D: PromptDriver>(driver: &D) -> Result<DatasetParameters> {
    let def = DatasetParameters::default();
    let path = prompt_path_until_ok(
        driver,
        "CSV path",
        "Path to census.csv",
        &def.path,
        true,
        true,
        &["csv"],
    )?;
    let test_fraction = prompt_fraction_until_ok(
        driver,
        "Test fraction",
        "Share of rows held out for testing, strictly between 0 and 1.",
        def.test_fraction,
    )?;
    let seed = driver.ask_u64("Split seed", "PRNG seed for the shuffle", def.seed, None, None)?;
    Ok(DatasetParameters {
        path: path.to_string_lossy().into_owned(),
        test_fraction,
        seed,
    })
}

/// Prompts learners until the user stops adding them.
pub fn prompt_learners<D: PromptDriver>(driver: &D) -> Result<Vec<LearnerChoice>> {
    let mut learners = Vec::new();
    loop {
        learners.push(prompt_choice::<LearnerChoice, _>(driver)?);
        if !driver.ask_bool("Add another learner?", "", false)? {
            return Ok(learners);
        }
    }
}

/// Reads a parameter grid as JSON, offering the SGD grid when it applies.
pub fn prompt_grid<D: PromptDriver>(driver: &D, sgd: bool) -> Result<ParamGrid> {
    let def = if sgd {
        serde_json::to_string(&default_grid())?
    } else {
        "{}".to_string()
    };
    let answer = driver.ask_string(
        "Parameter grid",
        "JSON object mapping parameter names to lists of values",
        &def,
    )?;
    serde_json::from_str(answer.trim()).context("invalid parameter grid")
}

fn validate_fraction(value: f64) -> Result<(), String> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(format!("Fraction must lie strictly between 0 and 1, got {value}"))
    }
}

fn prompt_fraction_until_ok<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: f64,
) -> Result<f64> {
    loop {
        let answer = driver.ask_f64(title, help, default, Some(0.0), Some(1.0))?;
        match validate_fraction(answer) {
            Ok(()) => return Ok(answer),
            Err(msg) => eprintln!("✗ {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{
        CompareParams, LearnerKind, NoParams, SgdParams, SvcParams, TaskChoice,
    };
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};

    /// Picks scripted options and answers, falling back to each prompt's default.
    #[derive(Default)]
    struct ScriptedDriver {
        selects: RefCell<HashMap<&'static str, VecDeque<usize>>>,
        bools: RefCell<VecDeque<bool>>,
        floats: RefCell<VecDeque<f64>>,
        strings: HashMap<&'static str, String>,
    }

    impl PromptDriver for ScriptedDriver {
        fn ask_select(
            &self,
            title: &str,
            _: Option<&str>,
            options: Vec<String>,
            default: usize,
        ) -> Result<usize> {
            let i = self
                .selects
                .borrow_mut()
                .get_mut(title)
                .and_then(VecDeque::pop_front)
                .unwrap_or(default);
            assert!(i < options.len());
            Ok(i)
        }

        fn ask_bool(&self, _: &str, _: &str, default: bool) -> Result<bool> {
            Ok(self.bools.borrow_mut().pop_front().unwrap_or(default))
        }

        fn ask_string(&self, title: &str, _: &str, default: &str) -> Result<String> {
            Ok(self
                .strings
                .get(title)
                .cloned()
                .unwrap_or_else(|| default.to_string()))
        }

        fn ask_u64(&self, _: &str, _: &str, d: u64, _: Option<u64>, _: Option<u64>) -> Result<u64> {
            Ok(d)
        }

        fn ask_f64(&self, _: &str, _: &str, d: f64, _: Option<f64>, _: Option<f64>) -> Result<f64> {
            Ok(self.floats.borrow_mut().pop_front().unwrap_or(d))
        }
    }

    fn index_of(kind: LearnerKind) -> usize {
        LearnerKind::iter().position(|k| k == kind).unwrap()
    }

    #[test]
    fn accepting_defaults_gives_default_params() {
        let driver = ScriptedDriver {
            selects: RefCell::new(HashMap::from([(
                "Choose a learner:",
                VecDeque::from([index_of(LearnerKind::Sgd)]),
            )])),
            ..Default::default()
        };
        let c = prompt_choice::<LearnerChoice, _>(&driver).unwrap();
        assert_eq!(c, LearnerChoice::Sgd(SgdParams::default()));
    }

    #[test]
    fn blank_optional_number_stays_unset() {
        let driver = ScriptedDriver {
            selects: RefCell::new(HashMap::from([(
                "Choose a learner:",
                VecDeque::from([index_of(LearnerKind::Svc)]),
            )])),
            ..Default::default()
        };
        let c = prompt_choice::<LearnerChoice, _>(&driver).unwrap();
        assert_eq!(c, LearnerChoice::Svc(SvcParams::default()));
    }

    #[test]
    fn compare_task_collects_dataset_and_learners() {
        let csv = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        let path = csv.path().to_string_lossy().into_owned();
        let driver = ScriptedDriver {
            selects: RefCell::new(HashMap::from([
                ("Choose a task:", VecDeque::from([1])),
                (
                    "Choose a learner:",
                    VecDeque::from([index_of(LearnerKind::Naive), index_of(LearnerKind::Sgd)]),
                ),
            ])),
            bools: RefCell::new(VecDeque::from([true, false])),
            strings: HashMap::from([("CSV path", path.clone())]),
            ..Default::default()
        };
        let c = prompt_choice::<TaskChoice, _>(&driver).unwrap();
        let expected = TaskChoice::Compare(CompareParams {
            data: DatasetParameters {
                path,
                ..DatasetParameters::default()
            },
            learners: vec![
                LearnerChoice::Naive(NoParams::default()),
                LearnerChoice::Sgd(SgdParams::default()),
            ],
        });
        assert_eq!(c, expected);
    }

    #[test]
    fn enum_fields_are_picked_from_their_options() {
        let driver = ScriptedDriver {
            selects: RefCell::new(HashMap::from([
                ("Choose a learner:", VecDeque::from([index_of(LearnerKind::Sgd)])),
                ("Penalty", VecDeque::from([1])),
            ])),
            ..Default::default()
        };
        let c = prompt_choice::<LearnerChoice, _>(&driver).unwrap();
        let LearnerChoice::Sgd(p) = c else {
            panic!("expected sgd");
        };
        assert_eq!(p.penalty, crate::classifiers::Penalty::L1);
    }

    #[test]
    fn paths_need_the_csv_extension() {
        assert!(validate_path_str("data.txt", false, false, &["csv"]).is_err());
        assert!(validate_path_str("  ", false, false, &["csv"]).is_err());
        assert!(validate_path_str("data.CSV", false, false, &["csv"]).is_ok());
        assert!(validate_path_str("/no/such/file.csv", true, true, &["csv"]).is_err());
    }

    #[test]
    fn test_fraction_is_asked_again_until_inside_the_unit_interval() {
        let csv = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        let driver = ScriptedDriver {
            floats: RefCell::new(VecDeque::from([0.0, 1.0, 0.3])),
            strings: HashMap::from([("CSV path", csv.path().to_string_lossy().into_owned())]),
            ..Default::default()
        };
        let data = prompt_dataset(&driver).unwrap();
        assert_eq!(data.test_fraction, 0.3);
        assert!(driver.floats.borrow().is_empty());
    }

    #[test]
    fn fraction_bounds_are_exclusive() {
        assert!(validate_fraction(0.0).is_err());
        assert!(validate_fraction(1.0).is_err());
        assert!(validate_fraction(f64::NAN).is_err());
        assert!(validate_fraction(0.2).is_ok());
    }

    #[test]
    fn grid_defaults_follow_the_learner() {
        let driver = ScriptedDriver::default();
        assert_eq!(prompt_grid(&driver, true).unwrap(), default_grid());
        assert!(prompt_grid(&driver, false).unwrap().is_empty());
    }
}
