use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::catalog::{SortKey, StormCatalog};
use crate::constants::MENU_OPTION_QUIT;
use crate::report;

const MENU: &str = "\t 1 - Print all hurricane data \n\
                    \t 2 - Print maximum and minimum data \n\
                    \t 3 - Print averages \n\
                    \t 4 - Sort hurricanes by year \n\
                    \t 5 - Sort hurricanes by name \n\
                    \t 6 - Sort hurricanes by category, descending \n\
                    \t 7 - Sort hurricanes by pressure, descending \n\
                    \t 8 - Sort hurricanes by speed \n\
                    \t 9 - Search for hurricanes for a given year \n\
                    \t10 - Search for a given hurricane by name \n\
                    \t11 - Quit \n";

/// One menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PrintAll,
    Extremes,
    Averages,
    Sort(SortKey),
    SearchYear,
    SearchName,
    Quit,
}

impl MenuChoice {
    pub fn from_number(number: u32) -> Option<Self> {
        let choice = match number {
            1 => MenuChoice::PrintAll,
            2 => MenuChoice::Extremes,
            3 => MenuChoice::Averages,
            4 => MenuChoice::Sort(SortKey::Year),
            5 => MenuChoice::Sort(SortKey::Name),
            6 => MenuChoice::Sort(SortKey::Category),
            7 => MenuChoice::Sort(SortKey::Pressure),
            8 => MenuChoice::Sort(SortKey::Speed),
            9 => MenuChoice::SearchYear,
            10 => MenuChoice::SearchName,
            MENU_OPTION_QUIT => MenuChoice::Quit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Interactive menu over a catalog. Console input and output are injected so the session
/// can be driven by any reader and writer.
pub struct MenuSession<R, W> {
    catalog: StormCatalog,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    pub fn new(catalog: StormCatalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    pub fn catalog(&self) -> &StormCatalog {
        &self.catalog
    }

    pub fn into_parts(self) -> (StormCatalog, R, W) {
        (self.catalog, self.input, self.output)
    }

    /// Runs until the user quits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        while !self.interact_once()? {}
        self.output.flush()?;
        Ok(())
    }

    /// Shows the menu, reads one choice and acts on it. Returns `true` once the session is
    /// over.
    pub fn interact_once(&mut self) -> Result<bool> {
        writeln!(self.output, "\n\nEnter option: ")?;
        writeln!(self.output, "{}", MENU)?;

        let line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(true),
        };

        let number = match line.trim().parse::<u32>() {
            Ok(number) => number,
            Err(_) => {
                warn!("Ignoring menu input '{}'", line.trim());
                writeln!(self.output, "Invalid choice: {}", line.trim())?;
                return Ok(false);
            }
        };

        // Numbers outside the menu just show it again.
        let Some(choice) = MenuChoice::from_number(number) else {
            debug!("No menu option {}", number);
            return Ok(false);
        };

        debug!("Menu choice {:?}", choice);
        self.apply(choice)
    }

    fn apply(&mut self, choice: MenuChoice) -> Result<bool> {
        match choice {
            MenuChoice::PrintAll => {
                report::write_records(&mut self.output, self.catalog.records())?;
            }
            MenuChoice::Extremes => {
                report::write_aggregate(&mut self.output, report::extremes(&self.catalog))?;
            }
            MenuChoice::Averages => {
                report::write_aggregate(&mut self.output, report::averages(&self.catalog))?;
            }
            MenuChoice::Sort(key) => {
                self.catalog.sort_by(key);
                report::write_records(&mut self.output, self.catalog.records())?;
            }
            MenuChoice::SearchYear => {
                write!(self.output, "\n\tWhich year do you want to search for?\n\t")?;
                self.output.flush()?;
                let Some(answer) = self.read_line()? else {
                    return Ok(true);
                };
                match answer.trim().parse::<i32>() {
                    Ok(year) => {
                        let matches = self.catalog.search_year(year);
                        report::write_records(&mut self.output, &matches)?;
                    }
                    Err(_) => writeln!(self.output, "Invalid year: {}", answer.trim())?,
                }
            }
            MenuChoice::SearchName => {
                write!(self.output, "\n\tWhich name do you want to search for?\n\t")?;
                self.output.flush()?;
                let Some(answer) = self.read_line()? else {
                    return Ok(true);
                };
                let name = answer.split_whitespace().next().unwrap_or_default();
                let matches = self.catalog.search_name(name);
                report::write_records(&mut self.output, &matches)?;
            }
            MenuChoice::Quit => return Ok(true),
        }
        Ok(false)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
