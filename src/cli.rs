use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::ArgAction;
use stint::{InternshipBook, JsonStorage, LogicManager, Storage, UserPrefs};

mod terminal;
use terminal::Colorize;

/// Interactive command-line internship record keeper.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The directory holding the data and preferences files
    #[arg(short, long, default_value = "data")]
    root: PathBuf,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let prefs_file = self.root.join("preferences.json");
        let bootstrap = JsonStorage::new(prefs_file.clone(), self.root.join("internships.json"));
        let prefs = match bootstrap.load_prefs() {
            Ok(Some(prefs)) => prefs,
            Ok(None) => UserPrefs::default(),
            Err(error) => {
                eprintln!(
                    "{}",
                    format!("Could not read preferences: {error}. Using defaults.").warning()
                );
                UserPrefs::default()
            }
        };

        let storage = JsonStorage::new(prefs_file, prefs.data_file_in(&self.root));
        storage.save_prefs(&prefs)?;

        let book = match storage.load_book() {
            Ok(Some(book)) => book,
            Ok(None) => InternshipBook::new(),
            Err(error) => {
                eprintln!(
                    "{}",
                    format!(
                        "Data file could not be loaded: {error}. Starting with an empty \
                         internship book."
                    )
                    .warning()
                );
                InternshipBook::new()
            }
        };

        println!(
            "{}",
            format!("Internship book ready: {} internships loaded", book.len()).success()
        );
        let due = book.due_tasks();
        if !due.is_empty() {
            println!("{}", "Tasks due soon:".dim());
            for task in due {
                println!("  • {task}");
            }
        }
        println!(
            "{}",
            "Type a command (e.g. `add c/Acme d/Backend s/Applied`), or `exit` to quit.".dim()
        );

        let mut manager = LogicManager::new(book, prefs, storage);
        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match manager.execute(line) {
                Ok(result) => {
                    println!("{}", result.feedback());
                    if result.show_view() {
                        for (position, internship) in manager.book().filtered().iter().enumerate()
                        {
                            println!("{}. {internship}", position + 1);
                        }
                    }
                    if result.is_exit() {
                        break;
                    }
                }
                // Every failure is terminal for its command only; keep
                // accepting input.
                Err(error) => println!("{}", error.to_string().warning()),
            }
        }

        Ok(())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
