//! Check-style command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CheckStyleOptions;
use crate::error::ExportError;

impl FromCommand for CheckStyleOptions {
    fn from_command(command: Commands) -> Result<Self, ExportError> {
        match command {
            Commands::CheckStyle { styles } => {
                CheckStyleOptions::builder().with_styles(styles).build()
            }
            _ => Err(ExportError::ConfigurationError {
                message: "Invalid command type for CheckStyleOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckStyleOptions);

/// Execute the check-style command
pub fn execute_check_style_command(command: Commands) -> Result<()> {
    let config = CheckStyleOptions::from_command(command)
        .wrap_err("Failed to parse check-style command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check_style::CheckStyleExecutor;
    CheckStyleExecutor::execute(config)
}
