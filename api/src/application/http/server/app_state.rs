use std::sync::Arc;

use krishiarogya_core::application::KrishiService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: KrishiService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: KrishiService) -> Self {
        Self { args, service }
    }
}
