use std::sync::Arc;

use crate::claims::{ClaimService, FileRegistry};
use crate::core::{AppConfig, RenderStyle};
use crate::generators::ComposerSettings;
use crate::metrics::ClaimMetrics;

#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<ClaimService>,
}

impl ApiState {
    pub fn new(config: &AppConfig, registry: Arc<dyn FileRegistry>, metrics: Option<ClaimMetrics>) -> Self {
        let settings = ComposerSettings::from_config(config, RenderStyle::default());
        let mut service = ClaimService::new(&settings, config.logo_path.clone(), registry);
        if let Some(metrics) = metrics {
            service = service.with_metrics(metrics);
        }
        ApiState::from_service(service)
    }

    pub fn from_service(service: ClaimService) -> Self {
        ApiState {
            service: Arc::new(service),
        }
    }
}
