use clap::Parser;
use plan_estimator::utils::{logger, validation::Validate};
use plan_estimator::{
    Architect, ArchitectOnly, ArchitecturalPlanning, BuildingDescriptor, CliConfig, PlanError,
    PlanningService, PlanningSettings, RawMaterialEstimator, WriterSink,
};

fn build_planner(config: &CliConfig, settings: &PlanningSettings) -> Box<dyn ArchitecturalPlanning> {
    let sink = WriterSink::stdout(settings.format);
    if config.plan_only {
        tracing::info!("Plan-only mode, skipping cost estimation");
        Box::new(ArchitectOnly::new(Architect::new(), sink))
    } else {
        Box::new(PlanningService::new(
            Architect::new(),
            RawMaterialEstimator::new(),
            settings.default_rate,
            sink,
        ))
    }
}

fn load_settings(config: &CliConfig) -> Result<PlanningSettings, PlanError> {
    config.validate()?;
    let file = config.load_file_config()?;
    let settings = config.resolve(file.as_ref());
    settings.validate()?;
    Ok(settings)
}

fn report_failure(e: &PlanError) -> ! {
    tracing::error!(
        "❌ Planning failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting plan-estimator");
    tracing::debug!("CLI config: {:?}", config);

    let settings = match load_settings(&config) {
        Ok(settings) => settings,
        Err(e) => report_failure(&e),
    };
    tracing::debug!("Effective settings: {:?}", settings);

    let building = BuildingDescriptor::new(config.name.as_str(), config.area);
    let planner = build_planner(&config, &settings);

    match planner.make_plan_for(&building) {
        Ok(outcome) => {
            if let Some(cost) = outcome.cost {
                tracing::info!("✅ Estimated cost {} at rate {}", cost.total, cost.rate);
            }
        }
        Err(e) => report_failure(&e),
    }
}
