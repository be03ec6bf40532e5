use std::{env, fs};

use anyhow::{bail, Context, Result};
use footprintbase::accounts::{AccountStore, SessionStore, UserAccount};
use footprintbase::history::{summarize, HistoryStore, Trend};
use footprintbase::scoring::{score, FootprintCategory, SurveyRecord};
use footprintbase::storage::FileStorage;
use footprintbase::workspace;

fn main() -> Result<()> {
    let paths = workspace::ensure_workspace_structure()?;
    let command = Command::parse()?;

    match command {
        Command::Register {
            name,
            email,
            password,
        } => {
            let mut accounts = AccountStore::new(FileStorage::new(&paths.data_dir));
            let user = accounts.register(&name, &email, &password)?;
            println!("Registered {} <{}>", user.name, user.email);
        }
        Command::Score { email, survey_path } => {
            // An unseen --user email is registered on the fly; scoring never
            // requires a prior `footprint register`.
            let user = match email.as_deref() {
                Some(email) => {
                    let mut accounts = AccountStore::new(FileStorage::new(&paths.data_dir));
                    accounts.find_or_register(email)?
                }
                None => resolve_user(&paths.data_dir, None)?,
            };
            let survey = read_survey(&survey_path)?;

            let result = score(&survey);
            let mut history = HistoryStore::new(FileStorage::new(&paths.data_dir));
            history.append(&user.id.to_string(), result.clone(), survey)?;

            let mut session = SessionStore::new(FileStorage::new(&paths.data_dir));
            session.set_current(&user)?;
            let mut config = workspace::load_or_default()?;
            config.last_active_user_id = Some(user.id.to_string());
            workspace::save(&config)?;

            println!(
                "Footprint for {}: {:.0} kg CO2e/year ({})",
                user.name,
                result.total_score,
                category_label(result.category)
            );
            println!("Tip: {}", result.tip);
            let log = history.read_all(&user.id.to_string())?;
            print_summary(&user, &log);
        }
        Command::Dashboard { email } => {
            let user = resolve_user(&paths.data_dir, email.as_deref())?;
            let history = HistoryStore::new(FileStorage::new(&paths.data_dir));
            let log = history.read_all(&user.id.to_string())?;
            print_summary(&user, &log);
        }
        Command::Logout => {
            let mut session = SessionStore::new(FileStorage::new(&paths.data_dir));
            session.clear()?;
            println!("Signed out.");
        }
    }

    Ok(())
}

enum Command {
    Register {
        name: String,
        email: String,
        password: String,
    },
    Score {
        email: Option<String>,
        survey_path: String,
    },
    Dashboard {
        email: Option<String>,
    },
    Logout,
}

impl Command {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let Some(command) = args.next() else {
            bail!("Usage: footprint <register|score|dashboard|logout> [args]");
        };
        match command.as_str() {
            "register" => {
                let name = args.next().context("Expected a name after register")?;
                let email = args.next().context("Expected an email after the name")?;
                let password = args.next().context("Expected a password after the email")?;
                Ok(Self::Register {
                    name,
                    email,
                    password,
                })
            }
            "score" => {
                let mut email = None;
                let mut survey_path = None;
                while let Some(arg) = args.next() {
                    match arg.as_str() {
                        "--user" => email = Some(args.next().context("Expected an email after --user")?),
                        "--survey" => {
                            survey_path =
                                Some(args.next().context("Expected a file path after --survey")?)
                        }
                        other => bail!("Unknown score option {other}"),
                    }
                }
                let survey_path = survey_path.context("score requires --survey <path.json>")?;
                Ok(Self::Score { email, survey_path })
            }
            "dashboard" => {
                let mut email = None;
                while let Some(arg) = args.next() {
                    match arg.as_str() {
                        "--user" => email = Some(args.next().context("Expected an email after --user")?),
                        other => bail!("Unknown dashboard option {other}"),
                    }
                }
                Ok(Self::Dashboard { email })
            }
            "logout" => Ok(Self::Logout),
            other => bail!("Unknown command {other}"),
        }
    }
}

fn print_summary(user: &UserAccount, log: &[footprintbase::HistoryEntry]) {
    let summary = summarize(log);
    println!("Dashboard for {} ({} calculations)", user.name, log.len());
    match summary.latest {
        Some(latest) => println!(
            "Latest: {:.0} kg CO2e/year ({}) on {}",
            latest.result.total_score,
            category_label(latest.result.category),
            latest.date.format("%Y-%m-%d")
        ),
        None => println!("No calculations yet."),
    }
    println!("Average: {:.0} kg CO2e/year", summary.average_score);
    println!("Good results: {}", summary.good_count);
    match summary.trend {
        Some(Trend::Improving) => println!("Trend: improving"),
        Some(Trend::Worsening) => println!("Trend: worsening"),
        None => println!("Trend: not enough data"),
    }
}

/// Explicit `--user` email wins; otherwise fall back to the session's
/// signed-in user. Unlike the score path, this never creates an account.
fn resolve_user(data_dir: &std::path::Path, email: Option<&str>) -> Result<UserAccount> {
    if let Some(email) = email {
        let accounts = AccountStore::new(FileStorage::new(data_dir));
        return accounts
            .find_by_email(email)?
            .with_context(|| format!("No account registered for {email}"));
    }
    let session = SessionStore::new(FileStorage::new(data_dir));
    session
        .current()?
        .context("No user given and nobody is signed in; pass --user <email>")
}

fn read_survey(path: &str) -> Result<SurveyRecord> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read survey file {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse survey file {path}"))
}

fn category_label(category: FootprintCategory) -> &'static str {
    match category {
        FootprintCategory::Good => "good",
        FootprintCategory::Bad => "bad",
    }
}
