use polars::prelude::*;
use std::collections::HashMap;
use std::hash::Hash;

/// Aggregates over a numeric column, nulls excluded
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericSummary {
    pub count: usize,
    pub sum: f64,
    /// None when there are no values
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Summarize a numeric Series using polars aggregations
pub fn summarize(series: &Series) -> PolarsResult<NumericSummary> {
    let series_f64 = series.cast(&DataType::Float64)?;
    let chunked = series_f64.f64()?;

    let count = chunked.len() - chunked.null_count();
    if count == 0 {
        return Ok(NumericSummary::default());
    }

    Ok(NumericSummary {
        count,
        sum: chunked.sum().unwrap_or(0.0),
        mean: chunked.mean(),
        min: chunked.min(),
        max: chunked.max(),
    })
}

/// Frequency table of the non-missing values, most frequent first.
///
/// Values with equal counts keep the order of their first occurrence, so the
/// head of the table is always the earliest-seen value among the most common.
pub fn tally<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = Option<T>>,
{
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values.into_iter().flatten() {
        match slots.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // sort_by is stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent non-missing value; ties go to the first one seen
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = Option<T>>,
{
    tally(values).into_iter().next().map(|(value, _)| value)
}

/// Frequency table of a string column with owned labels
pub fn tally_strings(chunked: &StringChunked) -> Vec<(String, usize)> {
    tally(chunked.into_iter())
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize() {
        let series = Series::new("test".into(), &[Some(1.0), None, Some(3.0), Some(5.0)]);
        let summary = summarize(&series).unwrap();

        assert_eq!(summary.count, 3);
        assert_eq!(summary.sum, 9.0);
        assert_eq!(summary.mean, Some(3.0));
        assert_eq!(summary.min, Some(1.0));
        assert_eq!(summary.max, Some(5.0));
    }

    #[test]
    fn test_summarize_integer_series() {
        let series = Series::new("test".into(), &[600i64, 300, 900]);
        let summary = summarize(&series).unwrap();
        assert_eq!(summary.sum, 1800.0);
        assert_eq!(summary.mean, Some(600.0));
    }

    #[test]
    fn test_empty_series() {
        let data: Vec<f64> = vec![];
        let series = Series::new("test".into(), &data);
        let summary = summarize(&series).unwrap();

        assert_eq!(summary.count, 0);
        assert_eq!(summary.sum, 0.0);
        assert_eq!(summary.mean, None);
        assert_eq!(summary.min, None);
    }

    #[test]
    fn test_tally_orders_by_count_then_first_seen() {
        let values = ["b", "a", "c", "a", "c", "d"].map(Some);
        let counts = tally(values);
        assert_eq!(counts, vec![("a", 2), ("c", 2), ("b", 1), ("d", 1)]);
    }

    #[test]
    fn test_tally_skips_missing() {
        let counts = tally([None, Some(2), None, Some(2), Some(7)]);
        assert_eq!(counts, vec![(2, 2), (7, 1)]);
    }

    #[test]
    fn test_mode_tie_break() {
        assert_eq!(mode([Some(1), Some(1), Some(2)]), Some(1));
        assert_eq!(mode([Some(9), Some(4), Some(4), Some(9)]), Some(9));
        assert_eq!(mode(Vec::<Option<i32>>::new()), None);
        assert_eq!(mode([None::<i32>, None]), None);
    }

    #[test]
    fn test_tally_strings() {
        let series = Series::new(
            "User Type".into(),
            &[Some("Subscriber"), Some("Customer"), None, Some("Subscriber")],
        );
        let counts = tally_strings(series.str().unwrap());
        assert_eq!(
            counts,
            vec![("Subscriber".to_string(), 2), ("Customer".to_string(), 1)]
        );
    }
}
