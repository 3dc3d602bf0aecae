use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// A few rows in the layout of `census.csv`, including its leading spaces.
pub const CENSUS_SAMPLE_CSV: &str = "\
age,workclass,education_level,education-num,marital-status,occupation,relationship,race,sex,capital-gain,capital-loss,hours-per-week,native-country,income
39, State-gov, Bachelors, 13.0, Never-married, Adm-clerical, Not-in-family, White, Male, 2174.0, 0.0, 40.0, United-States, <=50K
50, Self-emp-not-inc, Bachelors, 13.0, Married-civ-spouse, Exec-managerial, Husband, White, Male, 0.0, 0.0, 13.0, United-States, <=50K
38, Private, HS-grad, 9.0, Divorced, Handlers-cleaners, Not-in-family, White, Male, 0.0, 0.0, 40.0, United-States, <=50K
53, Private, 11th, 7.0, Married-civ-spouse, Handlers-cleaners, Husband, Black, Male, 0.0, 0.0, 40.0, United-States, <=50K
28, Private, Bachelors, 13.0, Married-civ-spouse, Prof-specialty, Wife, Black, Female, 0.0, 0.0, 40.0, Cuba, <=50K
37, Private, Masters, 14.0, Married-civ-spouse, Exec-managerial, Wife, White, Female, 0.0, 0.0, 40.0, United-States, <=50K
49, Private, 9th, 5.0, Married-spouse-absent, Other-service, Not-in-family, Black, Female, 0.0, 0.0, 16.0, Jamaica, <=50K
52, Self-emp-not-inc, HS-grad, 9.0, Married-civ-spouse, Exec-managerial, Husband, White, Male, 0.0, 0.0, 45.0, United-States, >50K
31, Private, Masters, 14.0, Never-married, Prof-specialty, Not-in-family, White, Female, 14084.0, 0.0, 50.0, United-States, >50K
42, Private, Bachelors, 13.0, Married-civ-spouse, Exec-managerial, Husband, White, Male, 5178.0, 0.0, 40.0, United-States, >50K
37, Private, Some-college, 10.0, Married-civ-spouse, Exec-managerial, Husband, Black, Male, 0.0, 0.0, 80.0, United-States, >50K
30, State-gov, Bachelors, 13.0, Married-civ-spouse, Prof-specialty, Husband, Asian-Pac-Islander, Male, 0.0, 0.0, 40.0, India, >50K
23, Private, Bachelors, 13.0, Never-married, Adm-clerical, Own-child, White, Female, 0.0, 0.0, 30.0, United-States, <=50K
32, Private, Assoc-acdm, 12.0, Never-married, Sales, Not-in-family, Black, Male, 0.0, 0.0, 50.0, United-States, <=50K
34, Private, 7th-8th, 4.0, Married-civ-spouse, Transport-moving, Husband, Amer-Indian-Eskimo, Male, 0.0, 0.0, 45.0, Mexico, <=50K
25, Self-emp-not-inc, HS-grad, 9.0, Never-married, Farming-fishing, Own-child, White, Male, 0.0, 0.0, 35.0, United-States, <=50K
40, Private, Doctorate, 16.0, Married-civ-spouse, Prof-specialty, Husband, White, Male, 0.0, 1902.0, 60.0, United-States, >50K
";

const WORKCLASS: [&str; 4] = ["Private", "Self-emp-not-inc", "Local-gov", "State-gov"];
const EDUCATION: [(&str, u8); 6] = [
    ("HS-grad", 9),
    ("Some-college", 10),
    ("Assoc-acdm", 12),
    ("Bachelors", 13),
    ("Masters", 14),
    ("Doctorate", 16),
];
const OCCUPATION: [&str; 5] = [
    "Adm-clerical",
    "Exec-managerial",
    "Prof-specialty",
    "Sales",
    "Craft-repair",
];
const RACE: [&str; 3] = ["White", "Black", "Asian-Pac-Islander"];
const COUNTRY: [&str; 3] = ["United-States", "Mexico", "India"];

/// Seeded census-shaped CSV with `n` rows.
///
/// Income is `>50K` exactly when the person is married with a degree of
/// Bachelors or higher, or has capital gains.
pub fn census_csv(n: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = String::from(
        "age,workclass,education_level,education-num,marital-status,occupation,relationship,race,sex,capital-gain,capital-loss,hours-per-week,native-country,income\n",
    );
    for _ in 0..n {
        let age = rng.random_range(18..70);
        let &(education, education_num) = EDUCATION.choose(&mut rng).unwrap_or(&EDUCATION[0]);
        let married = rng.random_bool(0.5);
        let female = rng.random_bool(0.4);
        let capital_gain = if rng.random_bool(0.08) {
            [5178.0, 7688.0, 15024.0][rng.random_range(0..3)]
        } else {
            0.0
        };
        let capital_loss = if rng.random_bool(0.05) { 1902.0 } else { 0.0 };
        let hours = rng.random_range(20..70);
        let (marital, relationship) = match (married, female) {
            (true, true) => ("Married-civ-spouse", "Wife"),
            (true, false) => ("Married-civ-spouse", "Husband"),
            (false, _) => ("Never-married", "Not-in-family"),
        };
        let rich = (married && education_num >= 13) || capital_gain > 0.0;
        out.push_str(&format!(
            "{age}, {}, {education}, {education_num}.0, {marital}, {}, {relationship}, {}, {}, {capital_gain:.1}, {capital_loss:.1}, {hours}.0, {}, {}\n",
            WORKCLASS.choose(&mut rng).unwrap_or(&WORKCLASS[0]),
            OCCUPATION.choose(&mut rng).unwrap_or(&OCCUPATION[0]),
            RACE.choose(&mut rng).unwrap_or(&RACE[0]),
            if female { "Female" } else { "Male" },
            COUNTRY.choose(&mut rng).unwrap_or(&COUNTRY[0]),
            if rich { ">50K" } else { "<=50K" },
        ));
    }
    out
}
