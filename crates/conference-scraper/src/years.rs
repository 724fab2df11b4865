//! `--year` argument parsing.
//!
//! A year spec is a comma list (`2018,2020`), an inclusive dash range
//! (`2018-2020`) or whitespace-separated values (`2019` or `2019 2020`).

use crate::error::YearSpecError;

/// Parse one year spec into discrete years.
pub fn parse_years(spec: &str) -> Result<Vec<i32>, YearSpecError> {
    let spec = spec.trim();

    let years = if spec.contains(',') {
        spec.split(',').map(parse_year).collect::<Result<Vec<_>, _>>()?
    } else if let Some((start, end)) = spec.split_once('-') {
        let (start, end) = (parse_year(start)?, parse_year(end)?);
        if start > end {
            return Err(YearSpecError::EmptyRange { start, end });
        }
        (start..=end).collect()
    } else {
        spec.split_whitespace().map(parse_year).collect::<Result<Vec<_>, _>>()?
    };

    if years.is_empty() {
        return Err(YearSpecError::Empty);
    }
    Ok(years)
}

/// Parse every spec given on the command line, in order.
pub fn parse_year_args<S: AsRef<str>>(specs: &[S]) -> Result<Vec<i32>, YearSpecError> {
    let mut years = Vec::new();
    for spec in specs {
        years.extend(parse_years(spec.as_ref())?);
    }
    if years.is_empty() {
        return Err(YearSpecError::Empty);
    }
    Ok(years)
}

fn parse_year(value: &str) -> Result<i32, YearSpecError> {
    let value = value.trim();
    value.parse().map_err(|_| YearSpecError::NotANumber { value: value.to_string() })
}
