use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::WeightForm;
use crate::errors::AppResult;
use crate::storage;
use crate::utils::date::pick_target_date;
use chrono::{Local, Utc};

/// Handle the `calc` command.
///
/// `--goal` and `--date` behave exactly like the `goal` and `date`
/// commands (they are saved) and are applied before calculating.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        current,
        goal,
        date,
    } = cmd
    {
        let mut form = WeightForm::load(storage::open(&cfg.database));
        form.set_current_weight(current);

        if let Some(g) = goal {
            form.set_goal_weight(g);
        }

        if let Some(d) = date {
            let picked = pick_target_date(d, form.target_date(), &Local::now())?;
            form.select_target_date(Some(picked));
        }

        form.calculate(Utc::now())?;

        if let Some(line) = form.result_line() {
            println!("{}", line);
        }
    }

    Ok(())
}
