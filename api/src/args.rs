use clap::Parser;
use menubot_core::domain::common::{LlmConfig, MenuBotConfig, MenuConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "menubot-api", about = "Conversational restaurant-menu assistant API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub menu: MenuArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/menubot".
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Left unset, the chat endpoint degrades to its fallback reply.
    #[arg(long, env = "OPENAI_API_KEY")]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-3.5-turbo")]
    pub openai_model: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct MenuArgs {
    #[arg(long, env = "MENU_CSV_PATH", default_value = "final_structured_menu.csv")]
    pub menu_csv_path: String,

    #[arg(long, env = "RESTAURANT_NAME", default_value = "Social Menu")]
    pub restaurant_name: String,
}

impl From<Args> for MenuBotConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LlmConfig {
                api_key: args.llm.openai_api_key,
                model: args.llm.openai_model,
                base_url: args.llm.openai_base_url,
            },
            menu: MenuConfig {
                csv_path: args.menu.menu_csv_path,
                restaurant_name: args.menu.restaurant_name,
            },
        }
    }
}
