use std::sync::Arc;

use crate::classifier::Classifier;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub config: AppConfig,
}
