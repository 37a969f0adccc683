use tracing_subscriber::EnvFilter;

use danci_sim::{compare, default_vocabulary, SimulationConfig, Strategy};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let vocabulary = default_vocabulary();
    let config = SimulationConfig::default();
    tracing::debug!(
        words = vocabulary.len(),
        sessions = config.sessions,
        reviews_per_session = config.reviews_per_session,
        "starting comparison sweep"
    );

    match compare(&vocabulary, &Strategy::ALL, &config) {
        Ok(runs) => {
            for run in runs {
                let rates: Vec<String> = run.history.iter().map(|r| format!("{r:.2}")).collect();
                println!(
                    "Strategy: {}, Recall over time: [{}]",
                    run.strategy,
                    rates.join(", ")
                );
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "simulation failed");
            std::process::exit(1);
        }
    }
}
