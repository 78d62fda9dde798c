use std::io;

use anyhow::Context;
use linreg_fd::{dataset::InMemoryDataset, model::LinearRegression, prompt, trainer::TrainerBuilder};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = InMemoryDataset::<f32>::demo();
    let trainer = TrainerBuilder::new().build()?;
    let (model, report) = trainer.fit(LinearRegression::new(), &dataset)?;

    let mut stdout = io::stdout().lock();
    prompt::write_report(&mut stdout, &report)?;
    prompt::write_prompt(&mut stdout)?;

    let input: f32 = prompt::read_value(&mut io::stdin().lock())
        .context("failed to read X from standard input")?;
    info!("Predicting for x = {}", input);

    prompt::write_prediction(&mut stdout, input, model.predict(input))?;
    Ok(())
}
