use database::{DatabaseConfig, DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use game_core::{GroupStandings, QualificationResult};
use log::{info, warn};
use std::env;
use std::path::PathBuf;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let config = DatabaseConfig {
        tournament_path: env::var_os("TOURNAMENT_DATA").map(PathBuf::from),
        predictions_path: env::var_os("PREDICTIONS_DATA").map(PathBuf::from),
    };

    let database = DatabaseLoader::load(&config)?;
    let data = DatabaseGenerator::generate(&database)?;
    let tournament = &data.tournament;

    let standings = tournament.standings()?;
    let qualification = tournament.qualification()?;

    info!("{}: standings", tournament.name);
    log_standings(&standings);
    log_qualification(&qualification);

    for predictions in &data.predictions {
        let predicted = match tournament.predicted_qualification(predictions) {
            Ok(predicted) => predicted,
            Err(err) => {
                warn!("{}: skipping predicted bracket: {}", predictions.user, err);
                continue;
            }
        };
        info!("{}: predicted knockout teams", predictions.user);
        log_qualification(&predicted);
    }

    info!("leaderboard");
    for entry in tournament.leaderboard(&data.predictions).entries {
        info!(
            "{:>3}. {:<16} {:>4} pts ({} exact, {} outcome, {} outright)",
            entry.rank, entry.user, entry.points, entry.exact_hits, entry.outcome_hits, entry.outright_hits
        );
    }

    Ok(())
}

fn log_standings(standings: &GroupStandings) {
    for (group, rows) in standings {
        info!("group {}", group);
        for (position, row) in rows.iter().enumerate() {
            info!("{}. {}", position + 1, row);
        }
    }
}

fn log_qualification(qualification: &QualificationResult) {
    for (group, qualifiers) in &qualification.groups {
        info!(
            "group {}: 1st {} / 2nd {} / 3rd {}",
            group,
            qualifiers.first.as_deref().unwrap_or("-"),
            qualifiers.second.as_deref().unwrap_or("-"),
            qualifiers.third.as_deref().unwrap_or("-")
        );
    }

    for third in &qualification.qualified_thirds {
        info!("third place slot {}: {} (group {})", third.slot, third.team, third.group);
    }
}
