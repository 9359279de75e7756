//! Application loop. Wires the registry, launcher and panel together.

use std::time::Duration;

use gameshelf_launcher::ProcessLauncher;
use gameshelf_library::LibraryPanel;
use gameshelf_registry::JsonRegistry;
use tokio::runtime::Runtime;

use crate::command::{Command, HELP, ParseError, Selector};
use crate::config::Config;
use crate::console::{Console, print_prompt};

type Panel = LibraryPanel<JsonRegistry, ProcessLauncher, Console>;

/// Runs the library until the user quits or stdin closes.
pub fn run(runtime: &Runtime, config: Config) -> anyhow::Result<()> {
    let registry = JsonRegistry::open(&config.library_path)?;
    let launcher = ProcessLauncher::new(runtime.handle().clone());
    let mut panel = LibraryPanel::new(registry, launcher, Console::spawn());

    let poll = Duration::from_millis(config.poll_interval_ms.max(1));

    println!("{HELP}");
    print_list(&panel);
    print_prompt("gameshelf> ");

    loop {
        // -- Launch outcomes --
        if panel.pump_launch_events() > 0 {
            println!();
        }
        for notice in panel.take_notices() {
            Console::show_notice(&notice);
        }

        // -- User input --
        let line = match runtime.block_on(tokio::time::timeout(
            poll,
            panel.dialogs_mut().next_line(),
        )) {
            Ok(Some(line)) => line,
            Ok(None) => {
                tracing::info!("input closed, shutting down");
                break;
            }
            Err(_) => continue,
        };

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(&mut panel, command),
            Err(ParseError::Empty) => {}
            Err(e) => println!("{e}"),
        }

        print_prompt("gameshelf> ");
    }

    if panel.is_running() {
        tracing::info!("leaving while a game is still running");
    }

    Ok(())
}

fn execute(panel: &mut Panel, command: Command) {
    match command {
        Command::List => print_list(panel),
        Command::Select(selector) => {
            let found = match &selector {
                Selector::Position(n) => panel.select_index(n - 1),
                Selector::Name(name) => panel.select(name),
            };
            if found {
                if let Some(name) = panel.list().selected() {
                    println!("selected {name}");
                }
            } else {
                println!("no such game");
            }
        }
        Command::Add => {
            panel.add_game();
            print_list(panel);
        }
        Command::Remove => {
            panel.remove_selected();
            print_list(panel);
        }
        Command::Launch => panel.launch_selected(),
        Command::Status => match panel.launcher().session() {
            Some(session) => println!(
                "{:?}: {} (pid {})",
                session.state,
                session.executable.display(),
                session
                    .pid
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "-".into()),
            ),
            None => println!("nothing running"),
        },
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
}

fn print_list(panel: &Panel) {
    let list = panel.list();
    if list.is_empty() {
        println!("(library is empty, use `add`)");
        return;
    }

    for (i, name) in list.entries().iter().enumerate() {
        let marker = if list.selected_index() == Some(i) { '*' } else { ' ' };
        println!("{marker} {:>2}. {name}", i + 1);
    }
}
