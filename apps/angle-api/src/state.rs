use std::sync::Arc;

use angle_service::AngleService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<AngleService>,
}
impl AppState {
	pub fn new(config: angle_config::Config) -> Self {
		Self::with_service(AngleService::new(config))
	}

	pub fn with_service(service: AngleService) -> Self {
		Self { service: Arc::new(service) }
	}
}
