use std::fmt::{Display, Formatter};

/// One named metric value, e.g. `accuracy` or `train_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
}

impl Measurement {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Display for Measurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={:.4}", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_name_and_rounded_value() {
        assert_eq!(Measurement::new("fbeta", 0.83333).to_string(), "fbeta=0.8333");
    }
}
