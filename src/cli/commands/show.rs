use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::WeightForm;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { json } = cmd {
        let form = WeightForm::load(storage::open(&cfg.database));

        if *json {
            println!("{}", serde_json::to_string_pretty(&form.snapshot())?);
            return Ok(());
        }

        let goal = match form.goal_weight() {
            "" => "-".to_string(),
            g => format!("{} kg", g),
        };

        header("Weight goal");
        println!("Goal weight : {}", goal);
        println!("Target date : {}", form.target_date_label(&cfg.date_format));
    }

    Ok(())
}
