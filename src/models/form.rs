use serde::{Deserialize, Serialize};

use super::estimate::{ClaimPackage, EstimateRecord, LineItem};
use crate::core::{DocumentError, DocumentResult};

/// Payload of the finalize form: metadata plus three parallel row arrays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClaimSubmission {
    pub client_name: String,
    #[serde(default)]
    pub claim_text: String,
    pub claimant: String,
    pub property: String,
    pub estimator: String,
    pub estimate_type: String,
    pub date_entered: String,
    pub date_completed: String,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub justification: Vec<String>,
    #[serde(default)]
    pub total: Vec<String>,
}

impl ClaimSubmission {
    /// Zips the parallel arrays into rows, dropping blank ones.
    pub fn rows(&self) -> Vec<LineItem> {
        self.category
            .iter()
            .zip(&self.justification)
            .zip(&self.total)
            .map(|((category, justification), total)| {
                LineItem::new(category.trim(), justification.trim(), parse_amount(total))
            })
            .filter(|row| !row.is_blank())
            .collect()
    }

    pub fn into_package(self) -> DocumentResult<ClaimPackage> {
        if self.client_name.trim().is_empty() {
            return Err(DocumentError::Validation("client_name is required".to_string()));
        }
        if self.client_name.contains(&['/', '\\'][..]) || self.client_name.trim() == ".." {
            return Err(DocumentError::Validation(
                "client_name must not contain path separators".to_string(),
            ));
        }

        let rows = self.rows();
        let estimate = EstimateRecord {
            claimant: self.claimant,
            property: self.property,
            estimator: self.estimator,
            estimate_type: self.estimate_type,
            date_entered: self.date_entered,
            date_completed: self.date_completed,
            rows,
        };

        Ok(ClaimPackage::new(self.client_name.trim(), self.claim_text, estimate))
    }
}

/// Blank or non-numeric amounts count as zero.
fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ClaimSubmission {
        ClaimSubmission {
            client_name: "Jane Doe".to_string(),
            claim_text: "Pipe burst".to_string(),
            claimant: "Jane Doe".to_string(),
            property: "12 Elm St".to_string(),
            estimator: "R. Diaz".to_string(),
            estimate_type: "Contents".to_string(),
            date_entered: "2024-03-01".to_string(),
            date_completed: "2024-03-09".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn parallel_arrays_become_rows_in_order() {
        let mut form = submission();
        form.category = vec![" Sofa ".into(), "TV".into()];
        form.justification = vec!["Water damage".into(), "Cracked screen ".into()];
        form.total = vec!["450".into(), "899.99".into()];

        assert_eq!(
            form.rows(),
            vec![
                LineItem::new("Sofa", "Water damage", 450.0),
                LineItem::new("TV", "Cracked screen", 899.99),
            ]
        );
    }

    #[test]
    fn blank_rows_are_dropped_and_bad_amounts_default_to_zero() {
        let mut form = submission();
        form.category = vec!["".into(), "Lamp".into(), "  ".into()];
        form.justification = vec!["".into(), "".into(), "".into()];
        form.total = vec!["".into(), "abc".into(), "0".into()];

        assert_eq!(form.rows(), vec![LineItem::new("Lamp", "", 0.0)]);
    }

    #[test]
    fn amount_only_rows_survive() {
        let mut form = submission();
        form.category = vec!["".into()];
        form.justification = vec!["".into()];
        form.total = vec!["12.5".into()];

        assert_eq!(form.rows(), vec![LineItem::new("", "", 12.5)]);
    }

    #[test]
    fn shortest_array_wins() {
        let mut form = submission();
        form.category = vec!["A".into(), "B".into()];
        form.justification = vec!["x".into()];
        form.total = vec!["1".into(), "2".into()];

        assert_eq!(form.rows().len(), 1);
    }

    #[test]
    fn path_like_client_is_rejected() {
        let mut form = submission();
        form.client_name = "../etc/Jane".into();
        assert!(matches!(form.into_package(), Err(DocumentError::Validation(_))));
    }

    #[test]
    fn blank_client_is_rejected() {
        let mut form = submission();
        form.client_name = "   ".into();
        assert!(matches!(form.into_package(), Err(DocumentError::Validation(_))));
    }

    #[test]
    fn package_carries_total() {
        let mut form = submission();
        form.category = vec!["Sofa".into(), "TV".into()];
        form.justification = vec!["Water damage".into(), "Cracked screen".into()];
        form.total = vec!["450.00".into(), "899.99".into()];

        let package = form.into_package().unwrap();
        assert_eq!(package.client_name, "Jane Doe");
        assert_eq!(package.total_display(), "$1,349.99");
    }
}
