use crate::core::{Column, DataError, RawFrame};
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Feature columns of the census file, in file order.
pub const CENSUS_FEATURE_COLUMNS: [&str; 13] = [
    "age",
    "workclass",
    "education_level",
    "education-num",
    "marital-status",
    "occupation",
    "relationship",
    "race",
    "sex",
    "capital-gain",
    "capital-loss",
    "hours-per-week",
    "native-country",
];

/// Continuous columns; every other feature column is categorical.
pub const CENSUS_NUMERIC_COLUMNS: [&str; 5] = [
    "age",
    "education-num",
    "capital-gain",
    "capital-loss",
    "hours-per-week",
];

/// Heavily right-skewed columns that benefit from a log transform.
pub const CENSUS_SKEWED_COLUMNS: [&str; 2] = ["capital-gain", "capital-loss"];

/// One row of `census.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct CensusRecord {
    pub age: f64,
    pub workclass: String,
    #[serde(rename = "education_level", alias = "education")]
    pub education_level: String,
    #[serde(rename = "education-num")]
    pub education_num: f64,
    #[serde(rename = "marital-status")]
    pub marital_status: String,
    pub occupation: String,
    pub relationship: String,
    pub race: String,
    pub sex: String,
    #[serde(rename = "capital-gain")]
    pub capital_gain: f64,
    #[serde(rename = "capital-loss")]
    pub capital_loss: f64,
    #[serde(rename = "hours-per-week")]
    pub hours_per_week: f64,
    #[serde(rename = "native-country")]
    pub native_country: String,
    pub income: String,
}

/// Raw census features plus the encoded income label of each row.
#[derive(Debug, Clone)]
pub struct CensusData {
    pub frame: RawFrame,
    pub labels: Vec<u8>,
}

/// Maps the textual income bracket to the binary label.
pub fn parse_income(raw: &str) -> Result<u8, DataError> {
    match raw.trim().trim_end_matches('.') {
        "<=50K" => Ok(0),
        ">50K" => Ok(1),
        other => Err(DataError::UnknownIncome(other.to_string())),
    }
}

pub fn load_census_csv<P: AsRef<Path>>(path: P) -> Result<CensusData, DataError> {
    let file = File::open(path.as_ref())?;
    let data = census_from_reader(file)?;
    tracing::info!(
        path = %path.as_ref().display(),
        rows = data.labels.len(),
        "loaded census data"
    );
    Ok(data)
}

pub fn census_from_reader<R: Read>(reader: R) -> Result<CensusData, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in rdr.deserialize::<CensusRecord>() {
        records.push(row?);
    }
    if records.is_empty() {
        return Err(DataError::Empty);
    }

    let labels = records
        .iter()
        .map(|r| parse_income(&r.income))
        .collect::<Result<Vec<_>, _>>()?;

    let numeric = |f: fn(&CensusRecord) -> f64| Column::Numeric(records.iter().map(f).collect());
    let categorical = |f: fn(&CensusRecord) -> &str| {
        Column::Categorical(records.iter().map(|r| f(r).to_string()).collect())
    };

    let mut frame = RawFrame::new();
    frame.push_column("age", numeric(|r| r.age))?;
    frame.push_column("workclass", categorical(|r| r.workclass.as_str()))?;
    frame.push_column("education_level", categorical(|r| r.education_level.as_str()))?;
    frame.push_column("education-num", numeric(|r| r.education_num))?;
    frame.push_column("marital-status", categorical(|r| r.marital_status.as_str()))?;
    frame.push_column("occupation", categorical(|r| r.occupation.as_str()))?;
    frame.push_column("relationship", categorical(|r| r.relationship.as_str()))?;
    frame.push_column("race", categorical(|r| r.race.as_str()))?;
    frame.push_column("sex", categorical(|r| r.sex.as_str()))?;
    frame.push_column("capital-gain", numeric(|r| r.capital_gain))?;
    frame.push_column("capital-loss", numeric(|r| r.capital_loss))?;
    frame.push_column("hours-per-week", numeric(|r| r.hours_per_week))?;
    frame.push_column("native-country", categorical(|r| r.native_country.as_str()))?;

    Ok(CensusData { frame, labels })
}

/// Class balance of the income label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncomeSummary {
    pub n_records: usize,
    pub n_greater_50k: usize,
    pub n_at_most_50k: usize,
    pub greater_percent: f64,
}

impl IncomeSummary {
    pub fn from_labels(labels: &[u8]) -> Self {
        let n_records = labels.len();
        let n_greater_50k = labels.iter().filter(|&&y| y == 1).count();
        let greater_percent = if n_records > 0 {
            100.0 * n_greater_50k as f64 / n_records as f64
        } else {
            0.0
        };
        Self {
            n_records,
            n_greater_50k,
            n_at_most_50k: n_records - n_greater_50k,
            greater_percent,
        }
    }
}

impl Display for IncomeSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total number of records: {}", self.n_records)?;
        writeln!(
            f,
            "Individuals making more than $50,000: {}",
            self.n_greater_50k
        )?;
        writeln!(
            f,
            "Individuals making at most $50,000: {}",
            self.n_at_most_50k
        )?;
        write!(
            f,
            "Percentage of individuals making more than $50,000: {:.2}%",
            self.greater_percent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::CENSUS_SAMPLE_CSV;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_income_brackets() {
        assert_eq!(parse_income("<=50K").unwrap(), 0);
        assert_eq!(parse_income(" >50K ").unwrap(), 1);
        assert_eq!(parse_income(">50K.").unwrap(), 1);
        assert!(matches!(
            parse_income("50K").unwrap_err(),
            DataError::UnknownIncome(ref s) if s == "50K"
        ));
    }

    #[test]
    fn reads_sample_into_typed_columns() {
        let data = census_from_reader(CENSUS_SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(data.frame.n_columns(), CENSUS_FEATURE_COLUMNS.len());
        assert_eq!(data.frame.n_rows(), data.labels.len());
        assert_eq!(data.frame.names()[2], "education_level");

        for name in CENSUS_NUMERIC_COLUMNS {
            assert!(data.frame.column(name).unwrap().is_numeric(), "{name}");
        }
        match data.frame.column("workclass").unwrap() {
            Column::Categorical(v) => assert_eq!(v[0], "State-gov"),
            other => panic!("unexpected column {other:?}"),
        }
        assert_eq!(data.labels[0], 0);
        assert!(data.labels.contains(&1));
    }

    #[test]
    fn accepts_education_alias_header() {
        let csv = CENSUS_SAMPLE_CSV.replacen("education_level", "education", 1);
        let data = census_from_reader(csv.as_bytes()).unwrap();
        assert!(data.frame.column("education_level").is_some());
    }

    #[test]
    fn malformed_row_is_a_csv_error() {
        let mut csv = CENSUS_SAMPLE_CSV.to_string();
        csv.push_str(
            "abc, Private, HS-grad, 9.0, Divorced, Sales, Unmarried, White, Male, 0, 0, 40, Cuba, <=50K\n",
        );
        assert!(matches!(
            census_from_reader(csv.as_bytes()).unwrap_err(),
            DataError::Csv(_)
        ));
    }

    #[test]
    fn header_only_file_is_empty() {
        let header = CENSUS_SAMPLE_CSV.lines().next().unwrap();
        assert!(matches!(
            census_from_reader(header.as_bytes()).unwrap_err(),
            DataError::Empty
        ));
    }

    #[test]
    fn loads_from_disk() {
        let mut tf = NamedTempFile::new().unwrap();
        tf.write_all(CENSUS_SAMPLE_CSV.as_bytes()).unwrap();
        let data = load_census_csv(tf.path()).unwrap();
        assert!(!data.labels.is_empty());
    }

    #[test]
    fn summary_counts_and_percentage() {
        let s = IncomeSummary::from_labels(&[0, 1, 0, 0]);
        assert_eq!(s.n_records, 4);
        assert_eq!(s.n_greater_50k, 1);
        assert_eq!(s.n_at_most_50k, 3);
        assert!((s.greater_percent - 25.0).abs() < 1e-12);
        assert!(s.to_string().contains("Total number of records: 4"));
    }
}
