mod questionnaire;

use upitnik_predict::PredictClient;
use upitnik_wizard::{FormWizard, run};
use upitnik_wizard_dialoguer::DialoguerWizard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set RUST_LOG=debug for verbose logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut wizard = FormWizard::new(questionnaire::sections());
    let mut backend = DialoguerWizard::new();
    let client = PredictClient::from_env();

    match run(&mut wizard, &mut backend, &client).await {
        Ok(()) => Ok(()),
        Err(err) if err.is_cancelled() => {
            println!("Cancelled.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
