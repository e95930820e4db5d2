// courier — interactive messaging console
//
// Thin collaborator over MessagingService: reads menu choices and message
// fields from stdin, renders results through the presenter. No messaging
// logic lives here.

mod presenter;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use courier_core::{MemoryStore, MessagingService};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "courier")]
#[command(about = "Courier — session-scoped messaging console", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let _cli = Cli::parse();
    tracing::debug!("starting messaging console");

    // One store for the process lifetime, injected into the service.
    let service = MessagingService::new(Arc::new(MemoryStore::new()));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    run_menu(&service, &mut lines)
}

fn run_menu(
    service: &MessagingService,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    loop {
        println!();
        println!("{}", "===== Messaging System =====".bold());
        println!("1. Send a Message");
        println!("2. View Messages by Recipient");
        println!("3. Exit");

        let Some(choice) = prompt(lines, "Choose an option: ")? else {
            return Ok(()); // EOF behaves like exit
        };

        match choice.trim() {
            "1" => {
                if cmd_send(service, lines)?.is_none() {
                    return Ok(());
                }
            }
            "2" => {
                if cmd_view(service, lines)?.is_none() {
                    return Ok(());
                }
            }
            "3" => {
                println!("Exiting messaging system. Goodbye!");
                return Ok(());
            }
            _ => println!("{}", "Invalid option. Please try again.".red()),
        }
    }
}

/// Prompt for the three message fields and send. Returns `None` on EOF.
fn cmd_send(
    service: &MessagingService,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<()>> {
    let Some(sender) = prompt(lines, "Enter sender name: ")? else {
        return Ok(None);
    };
    let Some(recipient) = prompt(lines, "Enter recipient name: ")? else {
        return Ok(None);
    };
    let Some(content) = prompt(lines, "Enter message content: ")? else {
        return Ok(None);
    };

    service
        .send_message(&content, &sender, &recipient)
        .context("sending message")?;
    println!("{}", "Message sent successfully!".green());
    Ok(Some(()))
}

/// Prompt for a recipient and render their messages. Returns `None` on EOF.
fn cmd_view(
    service: &MessagingService,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<()>> {
    let Some(recipient) = prompt(lines, "Enter recipient name to view messages: ")? else {
        return Ok(None);
    };

    let messages = service
        .messages_for_recipient(&recipient)
        .context("listing messages")?;

    println!();
    println!("Messages for {}:", recipient.bold());
    print!("{}", presenter::render_messages(&messages));
    Ok(Some(()))
}

/// Print `label` and read one line. `Ok(None)` means stdin hit EOF.
/// Fields are passed along as typed — no trimming, no validation.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush().context("flushing prompt")?;

    match lines.next() {
        Some(line) => Ok(Some(line.context("reading from stdin")?)),
        None => Ok(None),
    }
}
