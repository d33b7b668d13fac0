use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry};

/// Métricas de generación de reclamos
#[derive(Clone)]
pub struct ClaimMetrics {
    pub documents_generated: IntCounterVec,
    pub generation_failures: IntCounter,
    pub generation_duration: Histogram,
}

impl ClaimMetrics {
    pub fn new() -> prometheus::Result<Self> {
        Ok(ClaimMetrics {
            documents_generated: IntCounterVec::new(
                Opts::new("claim_documents_generated_total", "Artifacts written, by kind"),
                &["kind"],
            )?,
            generation_failures: IntCounter::new(
                "claim_generation_failures_total",
                "Claim finalisations that failed",
            )?,
            generation_duration: Histogram::with_opts(
                HistogramOpts::new(
                    "claim_generation_duration_seconds",
                    "Time to write both artifacts for one claim",
                )
                .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
            )?,
        })
    }

    pub fn register(&self, registry: &Registry) -> prometheus::Result<()> {
        registry.register(Box::new(self.documents_generated.clone()))?;
        registry.register(Box::new(self.generation_failures.clone()))?;
        registry.register(Box::new(self.generation_duration.clone()))?;
        Ok(())
    }
}
