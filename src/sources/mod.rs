mod census_csv;

pub use census_csv::{
    CENSUS_FEATURE_COLUMNS, CENSUS_NUMERIC_COLUMNS, CENSUS_SKEWED_COLUMNS, CensusData,
    CensusRecord, IncomeSummary, census_from_reader, load_census_csv, parse_income,
};
