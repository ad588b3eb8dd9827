use crate::config::toml_config::CalcConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "rpn-calc")]
#[command(about = "A Reverse Polish Notation calculator")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print the final state as JSON")]
    pub json: bool,

    #[arg(long, help = "Skip failing commands instead of stopping")]
    pub keep_going: bool,

    /// Numbers and commands, applied in order (e.g. 3 push 4 +)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub commands: Vec<String>,
}

impl CliConfig {
    /// 命令列參數覆蓋檔案設定
    pub fn apply_overrides(&self, config: &mut CalcConfig) {
        if self.keep_going {
            config.session.stop_on_error = Some(false);
        }
        if self.verbose {
            config.logging.level = Some("debug".to_string());
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
