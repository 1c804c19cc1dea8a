// src/cli/menu.rs
use inquire::{InquireError, Select, Text};
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use console::style;

use crate::core::config::Config;
use crate::core::session::GeneratorSession;
use crate::generators::analyze;
use crate::models::CharacterClass;
use crate::utils::{format_strength, format_toggle};

enum MenuAction {
    Generate,
    SetLength(usize),
    Toggle(CharacterClass, bool),
    Details,
    Exit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::Generate => write!(f, "🔁  Generate new"),
            MenuAction::SetLength(length) => write!(f, "📏  Length ({})", length),
            MenuAction::Toggle(class, enabled) => write!(
                f,
                "{}  {:<10} {}",
                format_toggle(*enabled),
                class.name(),
                class.sample()
            ),
            MenuAction::Details => write!(f, "🔍  Strength details"),
            MenuAction::Exit => write!(f, "❌  Exit"),
        }
    }
}

fn print_current(session: &GeneratorSession) {
    println!();
    println!("{}", style("RESULT").bold().reverse());
    println!("  {}", style(session.password()).bold());
    println!("{}", format_strength(session.strength()));
    println!();
}

fn menu_actions(session: &GeneratorSession) -> Vec<MenuAction> {
    let options = session.options();
    let mut actions = vec![
        MenuAction::Generate,
        MenuAction::SetLength(options.length),
    ];
    actions.extend(
        CharacterClass::ALL
            .into_iter()
            .map(|class| MenuAction::Toggle(class, options.includes(class))),
    );
    actions.push(MenuAction::Details);
    actions.push(MenuAction::Exit);
    actions
}

fn prompt_length(min: usize, max: usize, current: usize) -> Result<usize, InquireError> {
    Text::new(&format!("Password length ({}-{}):", min, max))
        .with_default(&current.to_string())
        .prompt()
        .and_then(|s| {
            s.trim()
                .parse()
                .map_err(|_| InquireError::Custom("Invalid number".into()))
        })
}

pub fn run_cli_menu(
    config: &Config,
    should_exit: Arc<AtomicBool>,
) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║          🦀 PASSWORD GENERATOR        ║");
    println!("╚══════════════════════════════════════╝");

    let mut session = GeneratorSession::new(
        config.default_options(),
        config.min_password_length,
        config.max_password_length,
    )?;

    while !should_exit.load(Ordering::SeqCst) {
        print_current(&session);

        let selection = Select::new("Choose an option:", menu_actions(&session))
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .with_page_size(10)
            .prompt_skippable();

        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        match selection {
            Ok(Some(MenuAction::Generate)) => session.regenerate(),
            Ok(Some(MenuAction::SetLength(current))) => {
                let (min, max) = session.length_bounds();
                match prompt_length(min, max, current) {
                    Ok(length) => session.set_length(length),
                    Err(InquireError::Custom(e)) => println!("❌ {}", e),
                    Err(InquireError::OperationCanceled) => {}
                    Err(e) => return Err(Box::new(e)),
                }
            }
            Ok(Some(MenuAction::Toggle(class, _))) => {
                if !session.toggle(class) {
                    println!("⚠️ At least one character type must stay selected.");
                }
            }
            Ok(Some(MenuAction::Details)) => {
                let report = analyze(session.password());
                println!("Points: {}/6 ({})", report.points, report.rating);
                for line in &report.feedback {
                    println!("  • {}", line);
                }
            }
            Ok(Some(MenuAction::Exit)) | Ok(None) => break,
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(Box::new(e)),
        }
    }

    if should_exit.load(Ordering::SeqCst) {
        log::info!("Interrupted, leaving the interactive generator");
    }
    println!("\n👋 Goodbye!");
    log::info!("Interactive generator closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_flag_ends_menu_without_prompting() {
        let should_exit = Arc::new(AtomicBool::new(true));
        assert!(run_cli_menu(&Config::default(), should_exit).is_ok());
    }

    #[test]
    fn test_inverted_length_bounds_are_reported() {
        let config = Config {
            min_password_length: 20,
            max_password_length: 10,
            ..Config::default()
        };
        let err = run_cli_menu(&config, Arc::new(AtomicBool::new(true))).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
    }
}
