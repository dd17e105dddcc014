//! Interactive menu loop over an `ItemStore`.
//!
//! # Responsibility
//! - Collect field values through line prompts and call store use-cases.
//! - Render listings, summaries and outcome messages in the active locale.
//!
//! # Invariants
//! - The shell is the only owner of the store for the session.
//! - Store errors are reported and the loop continues; only I/O errors end it.
//! - End of input and a blank menu answer behave like choosing exit.

use crate::locale::{Locale, Messages};
use log::{debug, info};
use shoplist_core::{
    InputError, Item, ItemDraft, ItemEdit, ItemStore, ListQuery, SortKey, StoreError,
};
use std::io::{self, BufRead, Write};

/// Parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    List,
    Edit,
    Remove,
    TogglePurchased,
    FullList,
    Summary,
    Exit,
    Invalid,
}

impl MenuChoice {
    fn parse(value: &str) -> Self {
        match value.trim() {
            "1" => Self::Add,
            "2" => Self::List,
            "3" => Self::Edit,
            "4" => Self::Remove,
            "5" => Self::TogglePurchased,
            "6" => Self::FullList,
            "7" => Self::Summary,
            "0" | "" => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

/// Line-oriented console session.
pub struct Shell<R, W> {
    store: ItemStore,
    input: R,
    output: W,
    messages: &'static Messages,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, locale: Locale) -> Self {
        Self {
            store: ItemStore::new(),
            input,
            output,
            messages: locale.messages(),
        }
    }

    /// Consumes the shell, returning the final store and the output sink.
    #[cfg(test)]
    pub fn into_parts(self) -> (ItemStore, W) {
        (self.store, self.output)
    }

    /// Runs the menu loop until exit is chosen or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        info!("event=shell_start module=shell status=ok");
        loop {
            let choice = self.read_menu_choice()?;
            debug!("event=menu_select module=shell choice={choice:?}");
            match choice {
                MenuChoice::Add => self.add_item()?,
                MenuChoice::List => self.list_items()?,
                MenuChoice::Edit => self.edit_item()?,
                MenuChoice::Remove => self.remove_item()?,
                MenuChoice::TogglePurchased => self.toggle_item()?,
                MenuChoice::FullList => self.show_full_list()?,
                MenuChoice::Summary => self.show_summary()?,
                MenuChoice::Invalid => self.say(self.messages.invalid_option)?,
                MenuChoice::Exit => {
                    self.say(self.messages.exiting)?;
                    break;
                }
            }
        }
        info!(
            "event=shell_exit module=shell status=ok items={}",
            self.store.len()
        );
        Ok(())
    }

    fn read_menu_choice(&mut self) -> io::Result<MenuChoice> {
        let messages = self.messages;
        writeln!(self.output, "{}", messages.menu_title)?;
        for option in messages.menu_options {
            writeln!(self.output, "{option}")?;
        }
        writeln!(self.output, "{}", "-".repeat(messages.menu_title.chars().count()))?;

        Ok(match self.prompt(messages.menu_prompt)? {
            Some(answer) => MenuChoice::parse(&answer),
            None => MenuChoice::Exit,
        })
    }

    fn add_item(&mut self) -> io::Result<()> {
        let messages = self.messages;
        let draft = ItemDraft {
            name: self.prompt(messages.name_prompt)?,
            quantity: self.prompt(messages.quantity_prompt)?,
            category: self.prompt(messages.category_prompt)?,
        };

        match draft.into_item() {
            Ok(item) => {
                let added = serde_json::to_string(self.store.add(item))?;
                writeln!(self.output, "{} {added}", messages.item_added_prefix)
            }
            Err(err) => self.report(&StoreError::InvalidInput(err)),
        }
    }

    fn list_items(&mut self) -> io::Result<()> {
        let messages = self.messages;

        let sort_key = match self.prompt_supplied(messages.sort_prompt)? {
            None => SortKey::default(),
            Some(text) => match text.parse::<SortKey>() {
                Ok(key) => key,
                Err(_) => {
                    return writeln!(self.output, "{} {text}", messages.invalid_sort_prefix);
                }
            },
        };
        let category = self.prompt_supplied(messages.category_filter_prompt)?;
        let purchased = match self.prompt_supplied(messages.status_filter_prompt)? {
            None => None,
            Some(text) => match self.parse_answer(&text) {
                Some(flag) => Some(flag),
                None => {
                    return writeln!(self.output, "{} {text}", messages.invalid_answer_prefix);
                }
            },
        };

        let listed = self.store.list(&ListQuery {
            sort_key,
            category,
            purchased,
        });

        self.say(messages.list_title)?;
        if listed.is_empty() {
            return self.say(messages.no_items);
        }
        for item in &listed {
            let status = if item.purchased {
                messages.purchased
            } else {
                messages.not_purchased
            };
            writeln!(
                self.output,
                "{} ({}) - {} - {status}",
                item.name, item.quantity, item.category
            )?;
        }
        Ok(())
    }

    fn edit_item(&mut self) -> io::Result<()> {
        let messages = self.messages;
        let Some(target) = self.prompt_supplied(messages.edit_target_prompt)? else {
            return Ok(());
        };
        let Some(current) = self.store.get(&target).map(|item| item.name.clone()) else {
            return self.say(messages.not_found);
        };

        let name = self.prompt(&format!(
            "{} {current}: {}",
            messages.new_name_prefix, messages.keep_hint
        ))?;
        let quantity = self.prompt(&format!(
            "{} {current}: {}",
            messages.new_quantity_prefix, messages.keep_hint
        ))?;
        let category = self.prompt(&format!(
            "{} {current}: {}",
            messages.new_category_prefix, messages.keep_hint
        ))?;

        let edit = match ItemEdit::from_input(name, quantity, category) {
            Ok(edit) => edit,
            Err(err) => return self.report(&StoreError::InvalidInput(err)),
        };
        if edit.is_empty() {
            return self.say(messages.nothing_changed);
        }

        match self.store.edit(&target, &edit) {
            Ok(item) => {
                let updated = serde_json::to_string(item)?;
                writeln!(self.output, "{} {updated}", messages.item_updated_prefix)
            }
            Err(err) => self.report(&err),
        }
    }

    fn remove_item(&mut self) -> io::Result<()> {
        let messages = self.messages;
        let Some(target) = self.prompt_supplied(messages.remove_target_prompt)? else {
            return Ok(());
        };
        if self.store.find_index(&target).is_none() {
            return self.say(messages.not_found);
        }

        let answer = self.prompt(&format!("{} {target}?", messages.confirm_remove_prefix))?;
        let confirmed = answer.and_then(|text| self.parse_answer(&text)) == Some(true);
        if !confirmed {
            return self.say(messages.removal_cancelled);
        }

        match self.store.remove(&target) {
            Ok(_) => self.say(messages.removed),
            Err(err) => self.report(&err),
        }
    }

    fn toggle_item(&mut self) -> io::Result<()> {
        let messages = self.messages;
        let Some(target) = self.prompt_supplied(messages.toggle_target_prompt)? else {
            return Ok(());
        };

        match self.store.toggle_purchased(&target) {
            Ok(item) => {
                let status = if item.purchased {
                    messages.purchased
                } else {
                    messages.not_purchased
                };
                let line = format!(
                    "{} {} {}.",
                    item.name,
                    messages.now_marked_as,
                    status.to_lowercase()
                );
                self.say(&line)
            }
            Err(err) => self.report(&err),
        }
    }

    fn show_full_list(&mut self) -> io::Result<()> {
        self.say(self.messages.full_list_title)?;
        for Item {
            name,
            quantity,
            purchased,
            ..
        } in self.store.items()
        {
            let mark = if *purchased { '✅' } else { '❌' };
            writeln!(self.output, "{name} ({quantity}) - {mark}")?;
        }
        Ok(())
    }

    fn show_summary(&mut self) -> io::Result<()> {
        let messages = self.messages;
        let summary = self.store.summarize();

        writeln!(self.output, "{}", messages.summary_title)?;
        writeln!(
            self.output,
            "  - {}: {}",
            messages.summary_total, summary.total_count
        )?;
        writeln!(
            self.output,
            "  - {}: {}",
            messages.summary_purchased, summary.purchased_count
        )?;
        writeln!(
            self.output,
            "  - {}: {}",
            messages.summary_unpurchased, summary.unpurchased_count
        )?;
        writeln!(self.output, "{}", messages.by_category_title)?;
        for entry in &summary.counts_by_category {
            writeln!(self.output, "- {}: {}", entry.category, entry.count)?;
        }
        Ok(())
    }

    fn report(&mut self, err: &StoreError) -> io::Result<()> {
        debug!("event=store_error module=shell error={err}");
        let messages = self.messages;
        match err {
            StoreError::NotFound(_) => self.say(messages.not_found),
            StoreError::InvalidInput(InputError::InvalidQuantity(value)) => writeln!(
                self.output,
                "{} {}",
                messages.invalid_quantity_prefix,
                value.trim()
            ),
            StoreError::InvalidInput(_) => self.say(messages.all_fields_required),
        }
    }

    fn parse_answer(&self, text: &str) -> Option<bool> {
        let normalized = text.trim().to_lowercase();
        if self.messages.yes_answers.contains(&normalized.as_str()) {
            Some(true)
        } else if self.messages.no_answers.contains(&normalized.as_str()) {
            Some(false)
        } else {
            None
        }
    }

    /// Like `prompt`, but blank answers become `None` too.
    fn prompt_supplied(&mut self, label: &str) -> io::Result<Option<String>> {
        Ok(self
            .prompt(label)?
            .filter(|answer| !answer.trim().is_empty()))
    }

    /// Prints `label` and reads one line. Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuChoice, Shell};
    use crate::locale::Locale;
    use shoplist_core::{Item, ItemStore};
    use std::io::Cursor;

    fn run_session(locale: Locale, script: &str) -> (ItemStore, String) {
        let mut shell = Shell::new(Cursor::new(script.as_bytes()), Vec::new(), locale);
        shell.run().unwrap();
        let (store, output) = shell.into_parts();
        (store, String::from_utf8(output).unwrap())
    }

    #[test]
    fn menu_choice_parses_known_numbers_only() {
        assert_eq!(MenuChoice::parse(" 1 "), MenuChoice::Add);
        assert_eq!(MenuChoice::parse("0"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("  "), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("8"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("abc"), MenuChoice::Invalid);
    }

    #[test]
    fn add_and_list_by_name() {
        let (store, output) = run_session(
            Locale::En,
            "1\nMilk\n2\nDairy\n1\nBread\n1\nBakery\n2\n\n\n\n0\n",
        );

        assert_eq!(store.len(), 2);
        assert!(output.contains(
            r#"Item added: {"name":"Milk","quantity":2,"category":"Dairy","purchased":false}"#
        ));
        let bread = output.find("Bread (1) - Bakery - Not purchased").unwrap();
        let milk = output.find("Milk (2) - Dairy - Not purchased").unwrap();
        assert!(bread < milk);
        assert!(output.ends_with("Exiting...\n"));
    }

    #[test]
    fn add_rejects_missing_and_non_numeric_fields() {
        let (store, output) =
            run_session(Locale::En, "1\nMilk\n\nDairy\n1\nMilk\nlots\nDairy\n0\n");

        assert!(store.is_empty());
        assert!(output.contains("All fields are required."));
        assert!(output.contains("Quantity must be a whole number, got: lots"));
    }

    #[test]
    fn list_applies_filters_and_sort_key() {
        let mut script = String::new();
        let items = [("Milk", 2, "Dairy"), ("Cheese", 1, "Dairy"), ("Bread", 1, "Bakery")];
        for (name, quantity, category) in items {
            script.push_str(&format!("1\n{name}\n{quantity}\n{category}\n"));
        }
        script.push_str("5\nCheese\n");
        script.push_str("2\nquantity\nDairy\nn\n");
        script.push_str("0\n");

        let (_, output) = run_session(Locale::En, &script);
        let listing = output.rsplit("Shopping list:").next().unwrap();
        assert!(listing.contains("Milk (2) - Dairy - Not purchased"));
        assert!(!listing.contains("Cheese"));
        assert!(!listing.contains("Bread"));
    }

    #[test]
    fn list_rejects_unknown_sort_key() {
        let (_, output) = run_session(Locale::En, "2\nprice\n0\n");
        assert!(output.contains("Unknown sort key: price"));
        assert!(!output.contains("Shopping list:"));
    }

    #[test]
    fn edit_blank_answers_keep_fields() {
        let (store, output) = run_session(
            Locale::En,
            "1\nMilk\n2\nDairy\n3\nMilk\n\n6\n\n3\nEggs\n0\n",
        );

        assert_eq!(store.items(), &[Item::new("Milk", 6, "Dairy")]);
        assert!(output.contains("New quantity for Milk: (leave blank to keep)"));
        assert!(output.contains("Item updated:"));
        assert!(output.contains("Item not found in the list."));
    }

    #[test]
    fn edit_with_bad_quantity_changes_no_field() {
        let (store, output) = run_session(
            Locale::En,
            "1\nMilk\n2\nDairy\n3\nMilk\nOat\nabc\nVegan\n0\n",
        );

        assert_eq!(store.items(), &[Item::new("Milk", 2, "Dairy")]);
        assert!(output.contains("Quantity must be a whole number, got: abc"));
        assert!(!output.contains("Item updated:"));
    }

    #[test]
    fn blank_menu_answer_exits() {
        let (store, output) = run_session(Locale::En, "1\nMilk\n2\nDairy\n\n7\n");
        assert_eq!(store.len(), 1);
        assert!(!output.contains("Invalid option."));
        assert!(!output.contains("Shopping list summary:"));
        assert!(output.ends_with("Exiting...\n"));
    }

    #[test]
    fn remove_requires_confirmation() {
        let (store, output) = run_session(
            Locale::En,
            "1\nMilk\n2\nDairy\n4\nMilk\nn\n4\nMilk\ny\n0\n",
        );

        assert!(store.is_empty());
        assert!(output.contains("Removal cancelled."));
        assert!(output.contains("Item removed!"));
    }

    #[test]
    fn toggle_and_summary_in_portuguese() {
        let (store, output) = run_session(
            Locale::Pt,
            "1\nLeite\n2\nLaticínios\n1\nPão\n1\nPadaria\n5\nLeite\n6\n7\n0\n",
        );

        assert!(store.items()[0].purchased);
        assert!(output.contains("Leite foi marcado como comprado."));
        assert!(output.contains("Leite (2) - ✅"));
        assert!(output.contains("Pão (1) - ❌"));
        assert!(output.contains("  - Total de itens: 2"));
        assert!(output.contains("  - Itens comprados: 1"));
        assert!(output.contains("  - Itens não comprados: 1"));
        assert!(output.contains("- Laticínios: 1\n- Padaria: 1\n"));
        assert!(output.ends_with("Saindo...\n"));
    }

    #[test]
    fn invalid_option_returns_to_menu_and_eof_exits() {
        let (store, output) = run_session(Locale::En, "9\n");
        assert!(store.is_empty());
        assert!(output.contains("Invalid option."));
        assert_eq!(output.matches("----- Shopping List Manager -----").count(), 2);
        assert!(output.ends_with("Exiting...\n"));
    }
}
