//! Interactive LUIS dialog from the terminal
//!
//! Usage: `luis-dialog [query...]`. Without arguments the first query is
//! read from stdin. Configuration comes from `LUIS_*` environment variables.

use luis_dialog::{
    BlockingTransport, DialogDriver, Endpoint, HttpTransport, LoggingTransport, LuisClient,
    LuisConfig, Outcome, Prompt, Response, StdinPrompt, Transport,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "luis_dialog=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = LuisConfig::from_env();
    let endpoint = Endpoint::from_config(&config)?;
    tracing::info!(
        app_id = %endpoint.app_id(),
        blocking = config.blocking,
        verbose = config.verbose,
        "LUIS client configured"
    );

    let mut prompt = StdinPrompt::new();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let query = if args.is_empty() {
        prompt.next_answer("What would you like to do?").await?
    } else {
        args.join(" ")
    };

    if config.blocking {
        let transport = LoggingTransport::new(BlockingTransport::new(config.timeout));
        converse(transport, endpoint, &config, &query, &mut prompt).await
    } else {
        let transport = LoggingTransport::new(HttpTransport::new(config.timeout)?);
        converse(transport, endpoint, &config, &query, &mut prompt).await
    }
}

async fn converse<T: Transport>(
    transport: T,
    endpoint: Endpoint,
    config: &LuisConfig,
    query: &str,
    prompt: &mut StdinPrompt,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut driver = DialogDriver::new(LuisClient::new(endpoint, transport))
        .with_cancel_words(config.cancel_words.clone());

    match driver.run(query, prompt).await? {
        Outcome::Finished(response) => print_response(response),
        Outcome::Cancelled => println!("Cancelled."),
    }
    Ok(())
}

fn print_response(response: &Response) {
    let intent = &response.top_scoring_intent;
    println!("Intent: {} ({:.2})", intent.name, intent.score);

    for entity in &response.entities {
        println!("Entity: {} = {:?}", entity.entity_type, entity.value);
    }

    let Some(action) = intent.triggered_action() else {
        println!("No action triggered.");
        return;
    };
    println!("Action: {}", action.name);
    for parameter in &action.parameters {
        match &parameter.value {
            Some(value) => println!("  {} = {:?}", parameter.name, value.value),
            None if parameter.required => println!("  {} (missing)", parameter.name),
            None => println!("  {} (not set)", parameter.name),
        }
    }
}
