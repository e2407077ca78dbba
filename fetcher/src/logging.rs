use tracing::{error, info, warn};
use vdl_parking_core::Tier;

pub(crate) const TARGET: &str = "vdl_parking_fetcher";

#[derive(Clone, Default)]
pub(crate) struct Logger {
    garage: Option<String>,
    tier: Option<Tier>,
    status_code: Option<u16>,
    path: Option<String>,
    error_text: Option<String>,
}

impl Logger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn garage(mut self, garage: impl Into<String>) -> Self {
        self.garage = Some(garage.into());
        self
    }

    pub(crate) fn tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub(crate) fn status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub(crate) fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub(crate) fn error_text(mut self, error_text: impl Into<String>) -> Self {
        self.error_text = Some(error_text.into());
        self
    }

    pub(crate) fn info(&self, event: &'static str, message: &str) {
        let garage = self.garage.as_deref();
        let tier = self.tier.map(Tier::as_str);
        let path = self.path.as_deref();
        info!(
            target: TARGET,
            event,
            garage = garage,
            tier = tier,
            status_code = self.status_code,
            path = path,
            error_text = ?self.error_text,
            "{}",
            message
        );
    }

    pub(crate) fn warn(&self, event: &'static str, message: &str) {
        let garage = self.garage.as_deref();
        let tier = self.tier.map(Tier::as_str);
        let path = self.path.as_deref();
        warn!(
            target: TARGET,
            event,
            garage = garage,
            tier = tier,
            status_code = self.status_code,
            path = path,
            error_text = ?self.error_text,
            "{}",
            message
        );
    }

    pub(crate) fn error<E: std::fmt::Debug>(&self, event: &'static str, err: &E, message: &str) {
        let garage = self.garage.as_deref();
        let tier = self.tier.map(Tier::as_str);
        let path = self.path.as_deref();
        error!(
            target: TARGET,
            event,
            garage = garage,
            tier = tier,
            status_code = self.status_code,
            path = path,
            error_text = ?self.error_text,
            error = ?err,
            "{}",
            message
        );
    }
}
