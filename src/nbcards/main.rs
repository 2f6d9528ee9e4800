use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use nbcards::api::{
    CardUpdate, CardsApi, CardsPaths, CmdMessage, CollapseTarget, ConfigAction, Direction,
    MessageLevel,
};
use nbcards::config::KEYS;
use nbcards::error::{CardsError, Result};
use nbcards::index::DisplayCard;
use nbcards::logging;
use nbcards::model::Card;
use nbcards::store::fs::FileDeck;
use serde_json::Value;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Runs the command; `Ok(false)` means it reported an error message.
fn run() -> Result<bool> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut api = init_api(&cli)?;
    api.on_export_complete(|| log::info!("export finished"));

    let messages = match cli.command {
        Some(Commands::Add {
            title,
            source,
            kernel,
            cell,
            cell_file,
        }) => handle_add(&mut api, title, source, kernel, cell, cell_file)?,
        Some(Commands::Note { title, text }) => api.add_note(title, text)?.messages,
        Some(Commands::Import { files }) => api.import_cards(&files)?.messages,
        Some(Commands::Edit {
            index,
            title,
            source,
            kernel,
            cell,
            markdown,
            code,
            from,
        }) => match from {
            Some(path) => api.replace_card(&index, read_card(&path)?)?.messages,
            None => {
                let update = CardUpdate {
                    title,
                    kernel,
                    source_code: source,
                    jupyter_data: cell.as_deref().map(parse_cell).transpose()?,
                    is_custom_markdown: match (markdown, code) {
                        (true, _) => Some(true),
                        (_, true) => Some(false),
                        _ => None,
                    },
                };
                api.edit_card(&index, &update)?.messages
            }
        },
        Some(Commands::Title { index, title }) => api.set_title(&index, &title)?.messages,
        Some(Commands::Up { index }) => api.move_card(&index, Direction::Up)?.messages,
        Some(Commands::Down { index }) => api.move_card(&index, Direction::Down)?.messages,
        Some(Commands::Delete { indexes }) => api.delete_cards(&indexes)?.messages,
        Some(Commands::Collapse {
            indexes,
            code,
            output,
            off,
        }) => {
            let target = if code {
                CollapseTarget::Code
            } else if output {
                CollapseTarget::Output
            } else {
                CollapseTarget::Card
            };
            api.collapse(&indexes, target, !off)?.messages
        }
        Some(Commands::List { kernel }) => handle_list(&api, kernel.as_deref())?,
        Some(Commands::View { indexes }) => handle_view(&api, &indexes)?,
        Some(Commands::Export { indexes }) => handle_export(&mut api, &indexes)?,
        Some(Commands::Config { key, value }) => handle_config(&mut api, key, value)?,
        Some(Commands::Init) => api.init()?.messages,
        None => handle_list(&api, None)?,
    };

    print_messages(&messages);
    Ok(!messages.iter().any(|m| m.level == MessageLevel::Error))
}

fn init_api(cli: &Cli) -> Result<CardsApi<FileDeck>> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let deck_dir = deck_dir(cli.global, &cwd)?;
    log::debug!("using deck directory {}", deck_dir.display());

    let paths = CardsPaths {
        deck_dir: deck_dir.clone(),
        workspace: Some(cwd),
    };
    CardsApi::new(FileDeck::new(deck_dir), paths)
}

fn deck_dir(global: bool, cwd: &Path) -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("NBCARDS_HOME") {
        return Ok(PathBuf::from(home));
    }
    if !global {
        return Ok(cwd.join(".nbcards"));
    }
    let dirs = ProjectDirs::from("com", "nbcards", "nbcards")
        .ok_or_else(|| CardsError::Store("Could not determine the global data directory".into()))?;
    Ok(dirs.data_dir().to_path_buf())
}

fn handle_add(
    api: &mut CardsApi<FileDeck>,
    title: String,
    source: String,
    kernel: Option<String>,
    cell: Option<String>,
    cell_file: Option<PathBuf>,
) -> Result<Vec<CmdMessage>> {
    let cell = match (cell, cell_file) {
        (Some(json), _) => Some(parse_cell(&json)?),
        (None, Some(path)) => Some(parse_cell(&std::fs::read_to_string(path)?)?),
        (None, None) => None,
    };
    Ok(api.add_card(title, kernel, source, cell)?.messages)
}

fn handle_list(api: &CardsApi<FileDeck>, kernel: Option<&str>) -> Result<Vec<CmdMessage>> {
    let result = api.list_cards(kernel)?;
    print_cards(&result.listed_cards);
    Ok(result.messages)
}

fn handle_view(api: &CardsApi<FileDeck>, indexes: &[String]) -> Result<Vec<CmdMessage>> {
    let result = api.view_cards(indexes)?;
    print_full_cards(&result.listed_cards);
    Ok(result.messages)
}

fn handle_export(api: &mut CardsApi<FileDeck>, indexes: &[String]) -> Result<Vec<CmdMessage>> {
    let result = api.export(indexes)?;
    log::debug!("{} notebook(s) written", result.written.len());
    Ok(result.messages)
}

fn handle_config(
    api: &mut CardsApi<FileDeck>,
    key: Option<String>,
    value: Option<String>,
) -> Result<Vec<CmdMessage>> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = api.config_action(action)?;
    if let (true, Some(config)) = (show_all, &result.config) {
        for key in KEYS {
            println!("{} = {}", key, config.get(key).unwrap_or_default());
        }
    }
    Ok(result.messages)
}

fn parse_cell(json: &str) -> Result<Value> {
    Ok(serde_json::from_str(json)?)
}

fn read_card(path: &Path) -> Result<Card> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_full_cards(cards: &[DisplayCard]) {
    for (i, dc) in cards.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {} {}",
            dc.index.to_string().yellow(),
            dc.card.title.bold(),
            format!("[{}]", kernel_label(&dc.card)).dimmed()
        );
        println!("--------------------------------");
        println!("{}", dc.card.source_code);
    }
}

const LINE_WIDTH: usize = 100;
const KERNEL_WIDTH: usize = 10;
const COLLAPSED_MARKER: &str = "▸";

fn print_cards(cards: &[DisplayCard]) {
    for dc in cards {
        let idx_str = format!("{}. ", dc.index);
        let left_prefix = if dc.card.collapsed {
            format!("  {} ", COLLAPSED_MARKER)
        } else {
            "    ".to_string()
        };

        let preview: String = dc
            .card
            .source_code
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = if preview.is_empty() {
            dc.card.title.clone()
        } else {
            format!("{} {}", dc.card.title, preview)
        };

        let fixed_width = left_prefix.width() + idx_str.width() + KERNEL_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        let label = kernel_label(&dc.card);
        let label_colored = if dc.card.is_custom_markdown {
            label.cyan()
        } else {
            label.dimmed()
        };

        println!(
            "{}{}{}{}  {}",
            left_prefix,
            idx_str.yellow(),
            title_display,
            " ".repeat(padding),
            label_colored
        );
    }
}

fn kernel_label(card: &Card) -> String {
    if card.is_custom_markdown {
        "markdown".to_string()
    } else {
        card.kernel.clone()
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
