//! Run configuration produced by the argument parser.

/// Which columns the describe report summarizes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DescribeSelector {
    /// `--describe` was not given; the report is skipped.
    #[default]
    Absent,
    /// `--describe` with no names: every column.
    All,
    /// `--describe` with names: exactly these, in order, duplicates kept.
    Columns(Vec<String>),
}

impl From<Option<Vec<String>>> for DescribeSelector {
    fn from(names: Option<Vec<String>>) -> Self {
        match names {
            None => Self::Absent,
            Some(names) if names.is_empty() => Self::All,
            Some(names) => Self::Columns(names),
        }
    }
}

/// Everything one invocation needs after argument parsing.
#[derive(Debug, Clone)]
pub struct Config {
    pub file_path: String,
    pub show_head: bool,
    pub show_info: bool,
    pub describe: DescribeSelector,
    /// Rows shown by the head report.
    pub head_rows: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_from_parser_value() {
        assert_eq!(DescribeSelector::from(None), DescribeSelector::Absent);
        assert_eq!(DescribeSelector::from(Some(vec![])), DescribeSelector::All);
        assert_eq!(
            DescribeSelector::from(Some(vec!["a".to_owned()])),
            DescribeSelector::Columns(vec!["a".to_owned()])
        );
    }
}
