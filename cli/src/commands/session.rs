//! # Interactive Menu Session
//!
//! Runs the numbered menu against a [`Registry`] until the operator picks exit or
//! the input ends. The session owns the registry along with its reader and writer,
//! so the same loop runs on a locked stdin/stdout pair or on in-memory buffers.

use std::io::{BufRead, Write};

use colored::*;
use housing_common::error::InputError;
use housing_core::bill::{Bill, format_money};
use housing_core::registry::{Registry, RegistryError};
use housing_core::validation::{self, MenuChoice};
use tracing::{info, trace};

use crate::terminal::{colors, print};

const BILL_KEY_WIDTH: usize = 10;

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Menu,
    Quit,
}

pub struct Session<R, W> {
    registry: Registry,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(registry: Registry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Consumes the session, handing back the registry and the writer.
    pub fn into_parts(self) -> (Registry, W) {
        (self.registry, self.output)
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.show_menu()?;
            let Some(line) = self.read_line("Choose an action: ")? else {
                return Ok(());
            };

            let step = match validation::parse_menu_choice(&line) {
                Ok(MenuChoice::AddResident) => self.add_resident()?,
                Ok(MenuChoice::AddService) => self.add_service()?,
                Ok(MenuChoice::ResidentBill) => self.resident_bill()?,
                Ok(MenuChoice::Exit) => Step::Quit,
                Err(err) => {
                    info!(input = %line, "rejected menu input");
                    print::error(&mut self.output, &err)?;
                    Step::Menu
                }
            };

            if step == Step::Quit {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> anyhow::Result<()> {
        for choice in MenuChoice::ALL {
            print::menu_entry(&mut self.output, choice.number(), choice.label())?;
        }
        Ok(())
    }

    fn add_resident(&mut self) -> anyhow::Result<Step> {
        let Some(line) = self.read_line("Enter resident name: ")? else {
            return Ok(Step::Quit);
        };

        match validation::validate_name(&line) {
            Ok(name) => {
                self.registry.add_resident(name);
                print::success(&mut self.output, "Resident added.")?;
            }
            Err(err) => print::error(&mut self.output, &err)?,
        }
        Ok(Step::Menu)
    }

    fn add_service(&mut self) -> anyhow::Result<Step> {
        let Some(name) = self.read_line("Enter resident name: ")? else {
            return Ok(Step::Quit);
        };
        if !self.registry.resident_exists(&name) {
            let err = RegistryError::ResidentNotFound(name);
            print::error(&mut self.output, &err)?;
            return Ok(Step::Menu);
        }

        let Some(service) = self.read_until_valid(
            "Enter service type (0 - Water, 1 - Electricity, 2 - Gas): ",
            validation::parse_service_selector,
        )?
        else {
            return Ok(Step::Quit);
        };

        let amount_prompt = format!("Enter amount (1 - {}): ", validation::MAX_AMOUNT);
        let Some(amount) = self.read_until_valid(&amount_prompt, validation::parse_amount)? else {
            return Ok(Step::Quit);
        };

        match self.registry.add_service(&name, service, amount) {
            Ok(()) => print::success(&mut self.output, "Service added.")?,
            Err(err) => print::error(&mut self.output, &err)?,
        }
        Ok(Step::Menu)
    }

    fn resident_bill(&mut self) -> anyhow::Result<Step> {
        let Some(name) = self.read_line("Enter resident name: ")? else {
            return Ok(Step::Quit);
        };

        match self.registry.resident_bill(&name) {
            Ok(bill) => self.print_bill(&bill)?,
            Err(err) => print::error(&mut self.output, &err)?,
        }
        Ok(Step::Menu)
    }

    fn print_bill(&mut self, bill: &Bill) -> anyhow::Result<()> {
        let out = &mut self.output;
        print::header(out, "resident bill")?;
        print::aligned_line(out, BILL_KEY_WIDTH, "Resident", bill.resident.as_str())?;

        let items: Vec<(String, ColoredString)> = bill
            .lines
            .iter()
            .map(|line| {
                let detail = format!(
                    "{} x {} = {}",
                    line.amount,
                    format_money(line.unit_price),
                    format_money(line.subtotal())
                );
                (line.service.to_string(), detail.normal())
            })
            .collect();
        print::as_tree_one_level(out, items)?;

        let total: ColoredString = bill.formatted_total().color(colors::MONEY).bold();
        print::aligned_line(out, BILL_KEY_WIDTH, "Total cost", total)?;
        print::fat_separator(out)?;
        Ok(())
    }

    /// Prompts until `parse` accepts the line. `None` means the input ended.
    fn read_until_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> anyhow::Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    trace!(input = %line, %err, "re-prompting");
                    print::error(&mut self.output, &err)?;
                }
            }
        }
    }

    /// Prints `prompt` and reads one line without its line ending.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        print::prompt(&mut self.output, prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(validation::trim_line_ending(&line).to_string()))
    }
}
