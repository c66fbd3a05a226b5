use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::WeightForm;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages::info;
use crate::utils::date::pick_target_date;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Date { date } = cmd {
        let mut form = WeightForm::load(storage::open(&cfg.database));

        let picked = pick_target_date(date, form.target_date(), &Local::now())?;
        form.select_target_date(Some(picked));

        info(format!(
            "Target date: {}",
            form.target_date_label(&cfg.date_format)
        ));
    }

    Ok(())
}
