use crate::{
    domain::common::{services::Service, MenuBotConfig},
    infrastructure::{llm::OpenAiLlmClient, menu::CsvMenuCatalog},
};

pub type MenuBotService = Service<CsvMenuCatalog, OpenAiLlmClient>;

/// Wires configuration into the concrete service. Both dependencies degrade
/// rather than fail: a missing menu file yields an empty catalog, a missing
/// API key yields a client that rejects every call as unconfigured.
pub fn create_service(config: MenuBotConfig) -> MenuBotService {
    let menu_catalog = CsvMenuCatalog::load(&config.menu.csv_path);
    if menu_catalog.is_empty() {
        tracing::warn!("menu dataset is empty; recommendations will be unavailable");
    }

    let llm_client = OpenAiLlmClient::new(config.llm);
    if llm_client.is_configured() {
        tracing::info!("OpenAI client initialized");
    } else {
        tracing::warn!("OPENAI_API_KEY not set; chat will answer with the fallback reply");
    }

    Service::new(menu_catalog, llm_client, config.menu.restaurant_name)
}
