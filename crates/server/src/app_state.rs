use std::time::Instant;

use tera::Tera;

use crate::config::Settings;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) settings: Settings,
    pub(crate) templates: Tera,
    pub(crate) started_at: Instant,
}

impl AppState {
    pub(crate) fn new(settings: Settings, templates: Tera) -> Self {
        Self {
            settings,
            templates,
            started_at: Instant::now(),
        }
    }

    pub(crate) fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
