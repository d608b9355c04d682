use std::collections::HashSet;

use auditdesk_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// One table column with its persisted width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Column key.
    pub key: String,
    /// Rendered width in pixels.
    pub width: u32,
}

/// Ordered column layout for one dashboard table, persisted per browser and
/// keyed by a page-specific name. Column order is the vector order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    columns: Vec<ColumnLayout>,
}

impl TableLayout {
    /// Creates a validated layout: at least one column, unique non-empty
    /// keys, positive widths.
    pub fn new(columns: Vec<ColumnLayout>) -> AppResult<Self> {
        if columns.is_empty() {
            return Err(AppError::Validation(
                "table layout must contain at least one column".to_owned(),
            ));
        }

        let mut seen_keys = HashSet::new();
        for column in &columns {
            if column.key.trim().is_empty() {
                return Err(AppError::Validation(
                    "table layout column key must not be empty".to_owned(),
                ));
            }

            if column.width == 0 {
                return Err(AppError::Validation(format!(
                    "table layout column '{}' must have a positive width",
                    column.key
                )));
            }

            if !seen_keys.insert(column.key.as_str()) {
                return Err(AppError::Validation(format!(
                    "duplicate table layout column '{}'",
                    column.key
                )));
            }
        }

        Ok(Self { columns })
    }

    /// Returns the ordered columns.
    #[must_use]
    pub fn columns(&self) -> &[ColumnLayout] {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::{ColumnLayout, TableLayout};

    fn column(key: &str, width: u32) -> ColumnLayout {
        ColumnLayout {
            key: key.to_owned(),
            width,
        }
    }

    #[test]
    fn layout_rejects_duplicate_columns() {
        let layout = TableLayout::new(vec![column("status", 120), column("status", 90)]);
        assert!(layout.is_err());
    }

    #[test]
    fn layout_rejects_zero_width() {
        let layout = TableLayout::new(vec![column("status", 0)]);
        assert!(layout.is_err());
    }

    #[test]
    fn layout_preserves_column_order() {
        let columns = vec![
            column("key", 100),
            column("summary", 320),
            column("status", 120),
        ];
        let layout = TableLayout::new(columns.clone());
        assert!(layout.is_ok());
        assert_eq!(
            layout.map(|layout| layout.columns().to_vec()).ok(),
            Some(columns)
        );
    }
}
