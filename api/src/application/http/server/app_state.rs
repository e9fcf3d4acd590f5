use std::sync::Arc;

use curely_core::application::CurelyService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CurelyService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CurelyService) -> Self {
        Self { args, service }
    }
}
