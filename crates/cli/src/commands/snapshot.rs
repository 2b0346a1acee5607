//! Visual snapshot maintenance commands

use clap::Subcommand;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use storecheck_common::SuiteConfig;
use storecheck_harness::VisualComparator;

#[derive(Subcommand)]
pub enum SnapshotCommands {
    /// List snapshot names and their artifact files
    List,

    /// Promote current captures to baselines
    Update {
        /// Only update this snapshot; all captured names when omitted
        name: Option<String>,
    },

    /// Delete all diff images
    Clean,

    /// Compare every captured snapshot against its baseline
    Verify,
}

pub fn run(config: &SuiteConfig, cmd: SnapshotCommands) -> anyhow::Result<()> {
    let comparator = VisualComparator::new(&config.visual)?;
    let store = comparator.store();

    match cmd {
        SnapshotCommands::List => {
            let mut names = store.baseline_names()?;
            for name in store.current_names()? {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
            names.sort();

            if names.is_empty() {
                println!("No snapshots in {}", store.dir().display());
                return Ok(());
            }

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["Name", "Baseline", "Current", "Diff"]);

            for name in names {
                let paths = store.paths(&name);
                table.add_row(vec![
                    name.clone(),
                    file_cell(&paths.baseline),
                    file_cell(&paths.current),
                    file_cell(&paths.diff),
                ]);
            }
            println!("{table}");
        }

        SnapshotCommands::Update { name } => {
            let names = match name {
                Some(name) => vec![name],
                None => store.current_names()?,
            };
            if names.is_empty() {
                println!("Nothing to update: no current captures found.");
                return Ok(());
            }
            for name in names {
                comparator.update_baseline(&name)?;
                println!("{} baseline updated for '{}'", "✓".green(), name);
            }
        }

        SnapshotCommands::Clean => {
            let removed = store.clean_diffs()?;
            println!("Removed {} diff image(s)", removed);
        }

        SnapshotCommands::Verify => {
            let names = store.current_names()?;
            if names.is_empty() {
                println!("No current captures to verify.");
                return Ok(());
            }
            let mut failed = 0;
            for name in names {
                match comparator.compare(&name) {
                    Ok(c) if c.matches => {
                        println!("{} {}", "✓".green(), name);
                    }
                    Ok(c) => {
                        failed += 1;
                        println!(
                            "{} {} — {} pixels differ ({:.2}%)",
                            "✗".red(),
                            name,
                            c.diff_pixels,
                            c.diff_percent
                        );
                    }
                    Err(e) => {
                        failed += 1;
                        println!("{} {} — {}", "✗".red(), name, e);
                    }
                }
            }
            if failed > 0 {
                anyhow::bail!("{} snapshot(s) failed verification", failed);
            }
        }
    }

    Ok(())
}

fn file_cell(path: &std::path::Path) -> String {
    match std::fs::metadata(path) {
        Ok(meta) => format!("{} B", meta.len()),
        Err(_) => "—".to_string(),
    }
}
