use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::services::ai::LlmProvider;
use crate::services::messaging::MessagingChannel;

pub struct AppState {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub llm: Box<dyn LlmProvider>,
    pub messaging: Box<dyn MessagingChannel>,
}
