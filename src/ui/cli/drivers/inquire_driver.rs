use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::validator::{ErrorMessage, Validation};
use inquire::{Confirm, CustomType, Select, Text};
use std::fmt::Display;
use std::str::FromStr;

/// Answers prompts on the terminal.
pub struct InquireDriver;

fn out_of_range<T: Display>(min: Option<T>, max: Option<T>) -> ErrorMessage {
    match (min, max) {
        (Some(lo), Some(hi)) => format!("Must be between {lo} and {hi}").into(),
        (Some(lo), None) => format!("Must be ≥ {lo}").into(),
        (None, Some(hi)) => format!("Must be ≤ {hi}").into(),
        (None, None) => ErrorMessage::Default,
    }
}

fn ask_bounded<T>(title: &str, help: &str, default: T, min: Option<T>, max: Option<T>) -> Result<T>
where
    T: Copy + PartialOrd + Display + FromStr + Clone + 'static,
{
    let q = CustomType::<T>::new(title)
        .with_default(default)
        .with_help_message(help)
        .with_validator(move |x: &T| {
            let low = min.is_some_and(|lo| *x < lo);
            let high = max.is_some_and(|hi| *x > hi);
            if low || high {
                Ok(Validation::Invalid(out_of_range(min, max)))
            } else {
                Ok(Validation::Valid)
            }
        });
    Ok(q.prompt()?)
}

impl PromptDriver for InquireDriver {
    fn ask_select(
        &self,
        title: &str,
        help: Option<&str>,
        options: Vec<String>,
        default: usize,
    ) -> Result<usize> {
        let mut q = Select::new(title, options).with_starting_cursor(default);
        if let Some(help) = help {
            q = q.with_help_message(help);
        }
        Ok(q.raw_prompt()?.index)
    }

    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        ask_bounded(title, help, default, min, max)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        ask_bounded(title, help, default, min, max)
    }
}
