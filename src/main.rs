use anyhow::Context;
use clap::Parser;
use rpn_calc::utils::{logger, validation::Validate};
use rpn_calc::{CalcConfig, CalcError, CalculatorModel, CalculatorState, CliConfig, Session};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入並驗證配置；日誌尚未初始化，直接輸出到 stderr
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    logger::init_logger(cli.verbose, &config.log_level(), config.log_format());
    tracing::info!("Starting rpn-calc with {} commands", cli.commands.len());
    tracing::debug!("CLI config: {:?}", cli);

    let mut session = Session::with_settings(CalculatorModel::new(), config.session_settings());

    if let Err(e) = session.run_tokens(&cli.commands) {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        print_state(&session.state(), cli.json)?;
        let exit_code = if e.is_operation_error() { 1 } else { 2 };
        std::process::exit(exit_code);
    }

    print_state(&session.state(), cli.json)?;
    Ok(())
}

fn load_config(cli: &CliConfig) -> Result<CalcConfig, CalcError> {
    cli.validate()?;

    let mut config = match &cli.config {
        Some(path) => CalcConfig::from_file(path)?,
        None => CalcConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

fn print_state(state: &CalculatorState, json: bool) -> anyhow::Result<()> {
    if json {
        let rendered = state
            .to_json_pretty()
            .context("Failed to serialize calculator state")?;
        println!("{}", rendered);
    } else {
        println!("{}", state);
    }
    Ok(())
}
