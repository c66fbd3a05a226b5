use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::WeightForm;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Reset) {
        let mut form = WeightForm::load(storage::open(&cfg.database));
        form.reset();
        success("Goal weight and target date cleared.");
    }

    Ok(())
}
