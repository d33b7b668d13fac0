use serde::{Deserialize, Serialize};

use crate::core::{format_currency, round_cents};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub justification: String,
    #[serde(default, alias = "total")]
    pub amount: f64,
}

impl LineItem {
    pub fn new(category: impl Into<String>, justification: impl Into<String>, amount: f64) -> Self {
        LineItem {
            category: category.into(),
            justification: justification.into(),
            amount,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.category.trim().is_empty() && self.justification.trim().is_empty() && self.amount <= 0.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimateRecord {
    pub claimant: String,
    pub property: String,
    pub estimator: String,
    pub estimate_type: String,
    pub date_entered: String,
    pub date_completed: String,
    #[serde(default)]
    pub rows: Vec<LineItem>,
}

impl EstimateRecord {
    pub fn field(&self, field: MetadataField) -> &str {
        match field {
            MetadataField::Claimant => &self.claimant,
            MetadataField::Property => &self.property,
            MetadataField::Estimator => &self.estimator,
            MetadataField::EstimateType => &self.estimate_type,
            MetadataField::DateEntered => &self.date_entered,
            MetadataField::DateCompleted => &self.date_completed,
        }
    }
}

/// Campos de cabecera, en orden de presentación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    Claimant,
    Property,
    Estimator,
    EstimateType,
    DateEntered,
    DateCompleted,
}

impl MetadataField {
    pub const ALL: [MetadataField; 6] = [
        MetadataField::Claimant,
        MetadataField::Property,
        MetadataField::Estimator,
        MetadataField::EstimateType,
        MetadataField::DateEntered,
        MetadataField::DateCompleted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetadataField::Claimant => "Claimant",
            MetadataField::Property => "Property",
            MetadataField::Estimator => "Estimator",
            MetadataField::EstimateType => "Estimate Type",
            MetadataField::DateEntered => "Date Entered",
            MetadataField::DateCompleted => "Date Completed",
        }
    }
}

/// Representación canónica que consumen ambos renderers.
///
/// El total se calcula una sola vez aquí; el PDF y el XLSX leen el mismo
/// texto, por lo que no pueden divergir.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimPackage {
    pub client_name: String,
    pub narrative: String,
    pub estimate: EstimateRecord,
    total: f64,
}

impl ClaimPackage {
    pub fn new(client_name: impl Into<String>, narrative: impl Into<String>, estimate: EstimateRecord) -> Self {
        let total = round_cents(estimate.rows.iter().map(|row| row.amount).sum());
        ClaimPackage {
            client_name: client_name.into(),
            narrative: narrative.into(),
            estimate,
            total,
        }
    }

    pub fn rows(&self) -> &[LineItem] {
        &self.estimate.rows
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn total_display(&self) -> String {
        format_currency(self.total)
    }

    pub fn total_banner(&self) -> String {
        format!("Total Replacement Cost Value: {}", self.total_display())
    }

    pub fn artifact_stem(&self) -> String {
        artifact_stem(&self.client_name)
    }
}

pub fn artifact_stem(client_name: &str) -> String {
    client_name.replace(' ', "_")
}

pub fn document_file_name(client_name: &str) -> String {
    format!("{}_Claim.pdf", artifact_stem(client_name))
}

pub fn workbook_file_name(client_name: &str) -> String {
    format!("{}_Claim.xlsx", artifact_stem(client_name))
}
