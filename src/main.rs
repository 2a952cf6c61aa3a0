use clap::Parser;
use online_order::utils::{logger, validation::Validate};
use online_order::{
    CliConfig, HttpPricingFactory, OrderError, OrderHandler, OrderMessage, TomlConfig,
};

fn build_factory(
    config: &CliConfig,
    toml: Option<&TomlConfig>,
) -> Result<HttpPricingFactory, OrderError> {
    match toml {
        Some(toml) => {
            toml.validate()?;
            HttpPricingFactory::from_config(toml)
        }
        None => {
            config.validate()?;
            HttpPricingFactory::from_config(config)
        }
    }
}

fn fail(e: &OrderError) -> ! {
    tracing::error!("❌ Order failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let toml = match &config.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(toml) => Some(toml),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                std::process::exit(e.exit_code());
            }
        },
        None => None,
    };

    let verbose = config.verbose || toml.as_ref().is_some_and(TomlConfig::is_verbose);
    logger::init_cli_logger(verbose);

    tracing::info!("Starting online-order CLI");
    tracing::debug!("CLI config: {:?}", config);

    let factory = match build_factory(&config, toml.as_ref()) {
        Ok(factory) => factory,
        Err(e) => fail(&e),
    };

    let handler = OrderHandler::new(factory);
    let message = OrderMessage::new(config.flavour.clone(), config.quantity);

    match handler.handle(Some(message)).await {
        Ok(price) => {
            tracing::info!(
                "✅ {} x {} priced at {}",
                config.quantity,
                config.flavour,
                price
            );
            println!("{}", price.value());
        }
        Err(e) => fail(&e),
    }

    Ok(())
}
