use crate::config::{AppConfig, Command};
use crate::core::report::render_common;
use crate::core::store::CardListStore;
use crate::core::{ConfigProvider, KeyValueStore};
use crate::utils::error::Result;
use crate::utils::validation::{validate_index, validate_non_empty_string};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

const BUNDLE_FILE_NAME: &str = "card-lists.zip";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The card list text had errors and nothing was added.
    Rejected,
}

pub fn run_command<S: KeyValueStore, W: Write>(
    store: &mut CardListStore<S>,
    command: &Command,
    config: &AppConfig,
    out: &mut W,
) -> Result<Outcome> {
    match command {
        Command::Add { file, name } => {
            let text = read_input(file)?;
            if let Some(name) = name {
                validate_non_empty_string("name", name)?;
            }

            let result = store.add_named_from_text(&text, name.as_deref().map(str::trim));
            if !result.success {
                writeln!(out, "❌ Card list was not added:")?;
                for error in store.errors() {
                    writeln!(out, "  {}", error)?;
                }
                return Ok(Outcome::Rejected);
            }

            let index = store.len() - 1;
            if let Some(list) = store.get(index) {
                writeln!(
                    out,
                    "✅ Added [{}] {} ({} cards)",
                    index,
                    list.name(),
                    list.total_cards()
                )?;
            }
        }
        Command::List => {
            if store.is_empty() {
                writeln!(out, "No card lists stored.")?;
            }
            for (index, list) in store.lists().iter().enumerate() {
                let marker = if list.is_collapsed() { "+" } else { "-" };
                writeln!(
                    out,
                    "{} [{}] {} ({} cards, {} entries)",
                    marker,
                    index,
                    list.name(),
                    list.total_cards(),
                    list.cards().len()
                )?;
            }
        }
        Command::Show { index } => {
            validate_index(*index, store.len())?;
            if let Some(text) = store.serialize_at(*index) {
                writeln!(out, "{}", text)?;
            }
        }
        Command::Remove { index } => {
            validate_index(*index, store.len())?;
            store.remove(*index);
            writeln!(out, "🗑️ Removed list {} ({} remaining)", index, store.len())?;
        }
        Command::Rename { index, name } => {
            validate_non_empty_string("name", name)?;
            validate_index(*index, store.len())?;
            store.rename(*index, name.trim());
            writeln!(out, "✏️ List {} is now '{}'", index, name.trim())?;
        }
        Command::Toggle { index } => {
            validate_index(*index, store.len())?;
            store.toggle_collapsed(*index);
            let state = match store.get(*index) {
                Some(list) if list.is_collapsed() => "collapsed",
                _ => "expanded",
            };
            writeln!(out, "List {} is {} (display only, saved with the next change)", index, state)?;
        }
        Command::Clear => {
            store.clear_all();
            writeln!(out, "🧹 Cleared all card lists")?;
        }
        Command::Common { format } => {
            let common = store.common_cards();
            writeln!(out, "{}", render_common(&common, store.lists(), *format)?)?;
        }
        Command::Export { index, output } => {
            validate_index(*index, store.len())?;
            if let Some(file) = store.export_at(*index) {
                let path = output_path(output.as_deref(), config, &file.file_name);
                write_file(&path, file.content.as_bytes())?;
                writeln!(out, "📁 Exported list {} to {}", index, path.display())?;
            }
        }
        Command::ExportAll { output } => {
            let bytes = store.export_all()?;
            let path = output_path(output.as_deref(), config, BUNDLE_FILE_NAME);
            write_file(&path, &bytes)?;
            writeln!(out, "📁 Exported {} lists to {}", store.len(), path.display())?;
        }
    }

    Ok(Outcome::Done)
}

fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(file)?)
}

fn output_path(explicit: Option<&str>, config: &AppConfig, default_name: &str) -> PathBuf {
    match explicit {
        Some(path) => PathBuf::from(path),
        None => Path::new(config.export_dir()).join(default_name),
    }
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, data)?;
    Ok(())
}
