mod settings;

use color_eyre::eyre::eyre;
use env_logger::Env;
use fpl_core::utils::TimeEstimation;
use fpl_core::{SquadGenerator, TransferAdvisor};
use fpl_database::PlayerRepository;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use settings::AppSettings;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let settings = AppSettings::from_env();

    let (repository, estimated) =
        TimeEstimation::estimate(|| PlayerRepository::load(&settings.repository));
    let repository = repository?;

    info!("database loaded: {} ms, {} players", estimated, repository.len());

    if repository.is_empty() {
        warn!("No eligible players in {}", settings.repository.database_path.display());
    }

    let seed = settings.seed.unwrap_or_else(rand::random::<u64>);
    info!("seed: {}", seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut generator = SquadGenerator::new(settings.generator);

    let (generated, estimated) =
        TimeEstimation::estimate(|| generator.generate(&repository, &mut rng));

    info!(
        "{} trials done in {} ms, {} valid",
        settings.generator.trials, estimated, generated.valid_trials
    );

    if !generated.is_found() {
        println!("Failed to find a team given the constraints");
        return Err(eyre!(
            "no valid squad in {} trials",
            settings.generator.trials
        ));
    }

    println!(
        "Found team worth {} with score {:.2}",
        generated.squad.value(),
        generated.score
    );
    println!();
    print!("{}", generated.squad);

    if let Some(transfer) = TransferAdvisor::suggest(&generated.squad, &repository) {
        println!();
        println!("{}", transfer);
    }

    Ok(())
}
