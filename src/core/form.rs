//! The weight-goal form: four fields, one result, and the rules for when
//! each of them is saved.
//!
//! Goal weight and target date are written to the store on every change;
//! the current weight never is. Storage problems are reported as warnings
//! and otherwise ignored, so the in-memory form can run ahead of what is
//! persisted.

use crate::core::calculator::{daily_loss_grams, format_grams};
use crate::errors::ValidationError;
use crate::storage::{GOAL_WEIGHT_KEY, KeyValueStore, TARGET_DATE_KEY};
use crate::ui::messages::warning;
use crate::utils::date::{display_local, from_iso_string, to_iso_string};
use chrono::{DateTime, SubsecRound, Utc};
use serde::Serialize;

pub struct WeightForm<S: KeyValueStore> {
    store: S,
    current_weight: String,
    goal_weight: String,
    target_date: Option<DateTime<Utc>>,
    result: Option<String>,
}

/// Persisted part of the form, as shown by `show --json`.
#[derive(Debug, Serialize)]
pub struct FormSnapshot {
    #[serde(rename = "goalWeight")]
    pub goal_weight: Option<String>,
    #[serde(rename = "targetDate")]
    pub target_date: Option<String>,
}

impl<S: KeyValueStore> WeightForm<S> {
    /// Build the form from whatever the store holds. Each key is read on its
    /// own; a failure on one does not stop the other from loading.
    pub fn load(store: S) -> Self {
        let mut form = Self {
            store,
            current_weight: String::new(),
            goal_weight: String::new(),
            target_date: None,
            result: None,
        };

        match form.store.get_item(GOAL_WEIGHT_KEY) {
            Ok(Some(goal)) => form.goal_weight = goal,
            Ok(None) => {}
            Err(e) => warning(format!("Failed to load goal weight: {}", e)),
        }

        match form.store.get_item(TARGET_DATE_KEY) {
            Ok(Some(raw)) => match from_iso_string(&raw) {
                Some(dt) => form.target_date = Some(dt),
                None => warning(format!("Ignoring unreadable saved target date '{}'", raw)),
            },
            Ok(None) => {}
            Err(e) => warning(format!("Failed to load target date: {}", e)),
        }

        form
    }

    pub fn current_weight(&self) -> &str {
        &self.current_weight
    }

    pub fn goal_weight(&self) -> &str {
        &self.goal_weight
    }

    pub fn target_date(&self) -> Option<DateTime<Utc>> {
        self.target_date
    }

    /// Last successful result, already formatted (`"500.00"`).
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current weight lives only in memory.
    pub fn set_current_weight(&mut self, text: &str) {
        self.current_weight = text.to_string();
    }

    /// Goal weight is saved verbatim on every change, valid number or not.
    pub fn set_goal_weight(&mut self, text: &str) {
        self.goal_weight = text.to_string();

        if let Err(e) = self.store.set_item(GOAL_WEIGHT_KEY, text) {
            warning(format!("Failed to save goal weight: {}", e));
            return;
        }
        self.record("goal", GOAL_WEIGHT_KEY, &format!("Goal weight set to '{}'", text));
    }

    /// `None` means the picker was dismissed: nothing changes. The date is
    /// kept at millisecond precision, the same as what gets stored.
    pub fn select_target_date(&mut self, selected: Option<DateTime<Utc>>) {
        let Some(date) = selected else {
            return;
        };
        let date = date.trunc_subsecs(3);
        self.target_date = Some(date);

        let iso = to_iso_string(&date);
        if let Err(e) = self.store.set_item(TARGET_DATE_KEY, &iso) {
            warning(format!("Failed to save target date: {}", e));
            return;
        }
        self.record("date", TARGET_DATE_KEY, &format!("Target date set to {}", iso));
    }

    /// Run the calculator on the current fields. A failure leaves any
    /// earlier result in place.
    pub fn calculate(&mut self, now: DateTime<Utc>) -> Result<&str, ValidationError> {
        let grams = daily_loss_grams(
            &self.current_weight,
            &self.goal_weight,
            self.target_date,
            now,
        )?;
        Ok(self.result.insert(format_grams(grams)).as_str())
    }

    /// Forget goal weight, target date and result, here and in the store.
    /// The current weight stays.
    pub fn reset(&mut self) {
        self.goal_weight.clear();
        self.target_date = None;
        self.result = None;

        let mut cleared = true;
        for key in [GOAL_WEIGHT_KEY, TARGET_DATE_KEY] {
            if let Err(e) = self.store.remove_item(key) {
                warning(format!("Failed to clear '{}' from storage: {}", key, e));
                cleared = false;
            }
        }
        if cleared {
            self.record("reset", "", "Goal weight and target date cleared");
        }
    }

    pub fn result_line(&self) -> Option<String> {
        self.result
            .as_ref()
            .map(|r| format!("You need to lose approximately {} grams per day.", r))
    }

    pub fn target_date_label(&self, format: &str) -> String {
        match &self.target_date {
            Some(dt) => display_local(dt, format),
            None => "Select date".to_string(),
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            goal_weight: Some(self.goal_weight.clone()).filter(|g| !g.is_empty()),
            target_date: self.target_date.as_ref().map(to_iso_string),
        }
    }

    fn record(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.store.record(operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}
