use serde::{Deserialize, Serialize};

/// One assessed maturity dimension with its capability group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityDimension {
    /// Dimension name, e.g. `Data Analytics`.
    pub dimension: String,
    /// Capability group the dimension belongs to.
    pub group: String,
    /// Score for the 2024 assessment (1.0–5.0 scale).
    pub score_2024: f64,
    /// Score for the 2025 assessment (1.0–5.0 scale).
    pub score_2025: f64,
}

impl MaturityDimension {
    /// Returns the combined `dimension (group)` label used on radar charts.
    #[must_use]
    pub fn full_label(&self) -> String {
        format!("{} ({})", self.dimension, self.group)
    }
}

/// Audit maturity assessment: yearly averages plus per-dimension scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityScores {
    /// Average score across dimensions for 2024.
    pub average_2024: f64,
    /// Average score across dimensions for 2025.
    pub average_2025: f64,
    /// Assessed dimensions.
    pub dimensions: Vec<MaturityDimension>,
}

#[cfg(test)]
mod tests {
    use super::MaturityDimension;

    #[test]
    fn full_label_combines_dimension_and_group() {
        let dimension = MaturityDimension {
            dimension: "Audit Tools".to_owned(),
            group: "Use of Technology".to_owned(),
            score_2024: 3.5,
            score_2025: 4.0,
        };
        assert_eq!(dimension.full_label(), "Audit Tools (Use of Technology)");
    }
}
