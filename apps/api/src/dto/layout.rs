use auditdesk_core::AppResult;
use auditdesk_domain::{ColumnLayout, TableLayout};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ColumnLayoutDto {
    pub key: String,
    pub width: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TableLayoutDto {
    pub columns: Vec<ColumnLayoutDto>,
}

impl From<&TableLayout> for TableLayoutDto {
    fn from(layout: &TableLayout) -> Self {
        Self {
            columns: layout
                .columns()
                .iter()
                .map(|column| ColumnLayoutDto {
                    key: column.key.clone(),
                    width: column.width,
                })
                .collect(),
        }
    }
}

impl TableLayoutDto {
    /// Validates the request body into a domain layout.
    pub fn into_layout(self) -> AppResult<TableLayout> {
        TableLayout::new(
            self.columns
                .into_iter()
                .map(|column| ColumnLayout {
                    key: column.key,
                    width: column.width,
                })
                .collect(),
        )
    }
}
