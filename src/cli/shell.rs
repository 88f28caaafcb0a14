//! Interactive menu loop wiring prompts, tracker operations, and reports.

use std::io;

use crate::config::ConfigManager;
use crate::core::services::SummaryService;
use crate::core::Tracker;
use crate::errors::TrackerError;
use crate::storage::FlatFile;

use super::prompts::{self, PromptSource};
use super::{output, render};

/// When set, every prompt reads one line from stdin instead of the terminal.
pub const SCRIPT_MODE_ENV: &str = "CROP_LEDGER_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

pub fn run_cli() -> Result<(), TrackerError> {
    let mut source = if std::env::var_os(SCRIPT_MODE_ENV).is_some() {
        PromptSource::script(io::BufReader::new(io::stdin()))
    } else {
        PromptSource::interactive()
    };

    let config_manager = ConfigManager::new()?;
    let config = config_manager.load()?;
    let data_file = config_manager.resolve_data_file(&config);
    tracing::info!(path = %data_file.display(), "opening data file");

    let mut tracker = Tracker::open(FlatFile::new(data_file))?;
    output::info(format!("Loaded {} entries.", tracker.store().len()));

    loop {
        print_menu();
        let Some(choice) = prompts::prompt_choice(&mut source, "Choose an option", 8)? else {
            break;
        };
        match dispatch(&mut tracker, &mut source, choice)? {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }

    tracker.clear();
    Ok(())
}

fn print_menu() {
    output::section("Crops Financial Tracker");
    println!("1. Add Crop Entry");
    println!("2. Display All Entries");
    println!("3. Search by Season");
    println!("4. Calculate Seasonal Profit/Loss");
    println!("5. Calculate Annual Profit");
    println!("6. Delete Entry");
    println!("7. Add Expense by Season");
    println!("8. Add Income by Season");
    println!("0. Exit");
}

fn dispatch(
    tracker: &mut Tracker,
    source: &mut PromptSource,
    choice: usize,
) -> Result<LoopControl, TrackerError> {
    match choice {
        1 => add_entry(tracker, source),
        2 => display_all(tracker),
        3 => search_by_season(tracker, source),
        4 => seasonal_profit(tracker, source),
        5 => annual_profit(tracker),
        6 => delete_entry(tracker, source),
        7 => add_expense(tracker, source),
        8 => add_income(tracker, source),
        _ => {
            output::info("Goodbye.");
            Ok(LoopControl::Exit)
        }
    }
}

fn add_entry(tracker: &mut Tracker, source: &mut PromptSource) -> Result<LoopControl, TrackerError> {
    let Some(season) = prompts::prompt_season_pick(source)? else {
        return Ok(LoopControl::Exit);
    };
    let Some(crop) = prompts::prompt_crop_name(source)? else {
        return Ok(LoopControl::Exit);
    };
    let Some(expenses) = prompts::prompt_amount(source, "Enter expense")? else {
        return Ok(LoopControl::Exit);
    };

    tracker.add_entry(season, crop, expenses)?;
    output::success("Crop entry saved. Income starts at $0; use option 8 to record it later.");
    Ok(LoopControl::Continue)
}

fn display_all(tracker: &Tracker) -> Result<LoopControl, TrackerError> {
    let entries = SummaryService::sorted_by_season(tracker.store());
    if entries.is_empty() {
        output::info("No entries recorded.");
    } else {
        print!("{}", render::entry_table(&entries));
    }
    Ok(LoopControl::Continue)
}

fn search_by_season(
    tracker: &Tracker,
    source: &mut PromptSource,
) -> Result<LoopControl, TrackerError> {
    let Some(name) = prompts::prompt_line(source, "Enter season name to search")? else {
        return Ok(LoopControl::Exit);
    };
    let matches = SummaryService::search_by_season(tracker.store(), &name);
    if matches.is_empty() {
        output::info(format!("No entries found for season '{name}'."));
    } else {
        print!("{}", render::entry_table(&matches));
    }
    Ok(LoopControl::Continue)
}

fn seasonal_profit(
    tracker: &Tracker,
    source: &mut PromptSource,
) -> Result<LoopControl, TrackerError> {
    let Some(name) = prompts::prompt_line(source, "Enter season name to summarize")? else {
        return Ok(LoopControl::Exit);
    };
    let totals = SummaryService::seasonal_totals(tracker.store(), &name);
    if totals.entry_count == 0 {
        output::info(format!("No entries found for season '{name}'."));
    } else {
        println!("{}", render::season_totals_report(&totals));
    }
    Ok(LoopControl::Continue)
}

fn annual_profit(tracker: &Tracker) -> Result<LoopControl, TrackerError> {
    let rows = SummaryService::annual_totals(tracker.store());
    if rows.is_empty() {
        output::info("No entries recorded.");
    } else {
        print!("{}", render::annual_report(&rows));
    }
    Ok(LoopControl::Continue)
}

fn delete_entry(
    tracker: &mut Tracker,
    source: &mut PromptSource,
) -> Result<LoopControl, TrackerError> {
    output::section("Delete Entry");
    println!("1. Delete by Season Name");
    println!("2. Delete by Crop Name");
    let Some(option) = prompts::prompt_choice_in(source, "Enter your choice (1 or 2)", 1, 2)?
    else {
        return Ok(LoopControl::Exit);
    };

    let removed = if option == 1 {
        let Some(name) = prompts::prompt_line(source, "Enter the season name")? else {
            return Ok(LoopControl::Exit);
        };
        tracker.delete_by_season(&name)?
    } else {
        let Some(name) = prompts::prompt_line(source, "Enter the crop name")? else {
            return Ok(LoopControl::Exit);
        };
        tracker.delete_by_crop(&name)?
    };

    if removed == 0 {
        output::info("No matching entries found.");
    } else {
        output::success(format!("Removed {removed} entries."));
    }
    Ok(LoopControl::Continue)
}

fn add_expense(
    tracker: &mut Tracker,
    source: &mut PromptSource,
) -> Result<LoopControl, TrackerError> {
    apply_season_update(tracker, source, "Enter expense amount to add", Tracker::add_expense)
}

fn add_income(
    tracker: &mut Tracker,
    source: &mut PromptSource,
) -> Result<LoopControl, TrackerError> {
    apply_season_update(tracker, source, "Enter income amount to add", Tracker::add_income)
}

fn apply_season_update(
    tracker: &mut Tracker,
    source: &mut PromptSource,
    amount_label: &str,
    update: fn(&mut Tracker, &str, f64) -> Result<usize, TrackerError>,
) -> Result<LoopControl, TrackerError> {
    let Some(name) = prompts::prompt_line(source, "Enter season name")? else {
        return Ok(LoopControl::Exit);
    };
    let Some(amount) = prompts::prompt_amount(source, amount_label)? else {
        return Ok(LoopControl::Exit);
    };

    let touched = update(tracker, &name, amount)?;
    if touched == 0 {
        output::info(format!("No entries found for season '{name}'."));
    } else {
        output::success(format!("Updated {touched} entries."));
    }
    Ok(LoopControl::Continue)
}
