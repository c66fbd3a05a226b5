use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::WeightForm;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Goal { weight } = cmd {
        let mut form = WeightForm::load(storage::open(&cfg.database));
        form.set_goal_weight(weight);
        info(format!("Goal weight: {} kg", form.goal_weight()));
    }

    Ok(())
}
