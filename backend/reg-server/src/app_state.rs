use reg_auth::RegistrationWorkflow;
use reg_db::RecordStore;

use std::sync::Arc;

/// Shared handler state. The store is reached through the workflow.
#[derive(Clone)]
pub struct AppState {
    pub workflow: Arc<RegistrationWorkflow>,
}

impl AppState {
    pub fn new(workflow: RegistrationWorkflow) -> Self {
        Self {
            workflow: Arc::new(workflow),
        }
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        self.workflow.store()
    }
}
