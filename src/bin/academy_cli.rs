// Command-line front end driving the same roster and analyzer components as the GUI.
use std::io::{BufRead, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use academy_billing::client::config::{parse_base_url, ClientConfig};
use academy_billing::client::models::analyzer_state::{AnalyzerEvent, AnalyzerState, NO_RESULTS};
use academy_billing::client::models::effect::{Notice, NoticeLevel};
use academy_billing::client::models::roster_state::{RosterEvent, RosterState, DELETE_CONFIRM_PROMPT, EMPTY_ROSTER};
use academy_billing::client::models::student::{StudentId, StudentRow};
use academy_billing::client::services::api_client::{BackendApi, HttpApi};
use academy_billing::client::services::dispatcher::{drive_analyzer, drive_roster};
use academy_billing::utils::logger::init_logger;
use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "academy-cli")]
#[command(about = "Academy billing console: roster management and receipt analysis")]
struct Args {
    /// Backend API base URL (overrides ACADEMY_API_BASE)
    #[arg(long)]
    api_base: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the registered students
    List,
    /// Bulk-register students, one "name fee [교재비 fee]" per line
    Register {
        /// Read a multi-line batch from a file
        #[arg(long, conflicts_with = "words")]
        file: Option<PathBuf>,
        /// A single student line, e.g. `이영희 280000 교재비 30000`.
        /// Without words or --file the batch is read from stdin.
        words: Vec<String>,
    },
    /// Delete a student by id
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Send bank text and/or a receipt image for matching
    Analyze {
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        image: Option<PathBuf>,
    },
}

/// Prints notices; true when any of them was an error or a rejected input.
fn print_notices(notices: &[Notice]) -> bool {
    let mut failed = false;
    for notice in notices {
        match notice.level {
            NoticeLevel::Error => {
                failed = true;
                eprintln!("[오류] {}", notice.message);
            }
            NoticeLevel::Warning => {
                failed = true;
                eprintln!("[주의] {}", notice.message);
            }
            NoticeLevel::Success | NoticeLevel::Info => println!("{}", notice.message),
        }
    }
    failed
}

fn print_roster(state: &RosterState) {
    println!("등록된 학생 ({}명)", state.students.len());
    if state.students.is_empty() {
        println!("{}", EMPTY_ROSTER);
        return;
    }
    for student in &state.students {
        let row = StudentRow::from(student);
        println!("#{:<5} {}", row.id.0, row.summary_line());
    }
}

/// Words on the command line form one student line; multi-line batches come
/// from `--file` or stdin.
fn batch_text(file: Option<PathBuf>, words: &[String]) -> anyhow::Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(&path).with_context(|| format!("cannot read '{}'", path.display()));
    }
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut batch = String::new();
    std::io::stdin().lock().read_to_string(&mut batch).context("cannot read batch from stdin")?;
    Ok(batch)
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "예"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = ClientConfig::from_env();
    init_logger(&config.log_level);
    let args = Args::parse();
    if let Some(raw) = &args.api_base {
        config.api_base = parse_base_url(raw).with_context(|| format!("invalid --api-base '{}'", raw))?;
    }
    let api: Arc<dyn BackendApi> = Arc::new(HttpApi::new(&config.api_base)?);

    let failed = match args.command {
        Command::List => {
            let mut roster = RosterState::default();
            let notices = drive_roster(&mut roster, &api, RosterEvent::LoadRequested).await;
            let failed = print_notices(&notices);
            if !failed {
                print_roster(&roster);
            }
            failed
        }
        Command::Register { file, words } => {
            let batch = batch_text(file, &words)?;
            let mut roster = RosterState::default();
            drive_roster(&mut roster, &api, RosterEvent::DraftChanged(batch)).await;
            let notices = drive_roster(&mut roster, &api, RosterEvent::SubmitPressed).await;
            let failed = print_notices(&notices);
            if !failed {
                println!("등록된 학생 ({}명)", roster.students.len());
            }
            failed
        }
        Command::Delete { id, yes } => {
            let mut roster = RosterState::default();
            drive_roster(&mut roster, &api, RosterEvent::DeletePressed(StudentId(id))).await;
            let confirmed = yes || confirm(&format!("#{} {}", id, DELETE_CONFIRM_PROMPT))?;
            let answer = if confirmed { RosterEvent::DeleteConfirmed } else { RosterEvent::DeleteCancelled };
            let notices = drive_roster(&mut roster, &api, answer).await;
            let failed = print_notices(&notices);
            if confirmed && !failed {
                println!("삭제 완료");
                print_roster(&roster);
            }
            failed
        }
        Command::Analyze { text, image } => {
            let mut analyzer = AnalyzerState::default();
            let mut notices = Vec::new();
            if let Some(path) = image {
                let path = path.to_string_lossy().into_owned();
                notices.extend(drive_analyzer(&mut analyzer, &api, AnalyzerEvent::ImagePathChanged(path)).await);
                notices.extend(drive_analyzer(&mut analyzer, &api, AnalyzerEvent::ImageRequested).await);
            }
            if let Some(text) = text {
                notices.extend(drive_analyzer(&mut analyzer, &api, AnalyzerEvent::TextChanged(text)).await);
            }
            let attach_failed = notices.iter().any(|n| n.level != NoticeLevel::Info);
            if !attach_failed {
                notices.extend(drive_analyzer(&mut analyzer, &api, AnalyzerEvent::SubmitPressed).await);
            }
            let failed = print_notices(&notices);
            if !failed {
                if analyzer.results.is_empty() {
                    println!("{}", NO_RESULTS);
                }
                for line in &analyzer.results {
                    println!("{} {}", line.kind().marker(), line.message);
                }
            }
            failed
        }
    };

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unquoted_words_form_a_single_line() {
        let words: Vec<String> = ["이영희", "280000", "교재비", "30000"].iter().map(|w| w.to_string()).collect();
        assert_eq!(batch_text(None, &words).unwrap(), "이영희 280000 교재비 30000");
    }

    #[test]
    fn file_keeps_its_lines() {
        let path = std::env::temp_dir().join(format!("academy_batch_{}.txt", std::process::id()));
        std::fs::write(&path, "김철수 250000\n이영희 280000 교재비 30000\n").unwrap();
        let batch = batch_text(Some(path.clone()), &[]).unwrap();
        assert_eq!(batch.lines().count(), 2);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn register_args_parse() {
        let args = Args::try_parse_from(["academy-cli", "register", "이영희", "280000"]).unwrap();
        assert!(matches!(args.command, Command::Register { file: None, ref words } if words.len() == 2));
        assert!(Args::try_parse_from(["academy-cli", "register", "--file", "a.txt", "x"]).is_err());
    }
}
