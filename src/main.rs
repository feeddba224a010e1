use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use wellquest::api::{ApiClient, ApiError, DiaryMood, NewDiaryEntry, NewGoal, DEFAULT_GOAL_CATEGORY};
use wellquest::challenges::{PoolCategory, PoolFilter};
use wellquest::config::Config;
use wellquest::credentials::{self, CredentialError};
use wellquest::questionnaire::Answers;
use wellquest::scoring::ScoringConfig;

const EXIT_SUCCESS: i32 = 0;
const EXIT_AUTH: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum GoalCommand {
    /// List personal goals
    List {
        #[arg(long)]
        json: bool,
    },
    /// Add a personal goal
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = DEFAULT_GOAL_CATEGORY)]
        category: String,
    },
    /// Delete a personal goal
    Remove { id: String },
}

#[derive(Subcommand, Debug)]
enum DiaryCommand {
    /// List diary entries, newest first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Write today's diary entry
    Add {
        content: String,
        /// amazing, happy, neutral, sad or stressed
        #[arg(long, default_value_t = DiaryMood::Happy)]
        mood: DiaryMood,
    },
    /// Delete a diary entry
    Remove { id: String },
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the daily questionnaire
    Questions,
    /// Score a saved questionnaire (YAML or JSON, `-` for stdin)
    Score {
        #[arg(short, long)]
        answers: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// List the points each answer contributed
        #[arg(long)]
        explain: bool,
    },
    /// Generate today's challenges from a saved questionnaire
    Generate {
        #[arg(short, long)]
        answers: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Answer the questionnaire interactively, then score and generate
    Ask {
        #[arg(long)]
        json: bool,
        /// Send the total to the backend afterwards
        #[arg(long)]
        submit: bool,
    },
    /// Score a saved questionnaire and send the total to the backend
    Submit {
        #[arg(short, long)]
        answers: PathBuf,
    },
    /// List the tagged challenge pool
    Pool {
        /// mental, nature, digital, selfcare, routine or social
        #[arg(long)]
        category: Option<PoolCategory>,
        /// Only challenges that need proof of completion
        #[arg(long)]
        proof: bool,
        /// Highest difficulty to include (1-5)
        #[arg(long)]
        max_difficulty: Option<u8>,
        #[arg(long)]
        json: bool,
    },
    /// List the daily challenge catalog
    Catalog {
        #[arg(long)]
        json: bool,
    },
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: Option<String>,
    },
    /// Create an account and remember the session
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Forget the saved session
    Logout,
    /// Show level, XP and streaks
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Show this week's quest
    Weekly,
    /// Show the best quest your points unlock
    Quest {
        #[arg(long)]
        json: bool,
    },
    /// Manage personal goals (lists them by default)
    Goals {
        #[command(subcommand)]
        action: Option<GoalCommand>,
    },
    /// Manage the personal diary (lists it by default)
    Diary {
        #[command(subcommand)]
        action: Option<DiaryCommand>,
    },
    /// Mark a backend challenge as completed
    Complete {
        /// Challenge id from the backend
        id: String,
    },
    /// Check the scoring tables against the questionnaire
    Validate,
}

#[derive(Parser, Debug)]
#[command(name = "wellquest")]
#[command(about = "Daily wellness questionnaire, scores and challenges", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/wellquest/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn fail(code: i32, msg: impl std::fmt::Display) -> ! {
    eprintln!("{}", msg);
    std::process::exit(code);
}

/// Exit code for a failed backend call.
fn backend_exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ApiError>() {
        Some(api) if api.is_auth() => EXIT_AUTH,
        _ => EXIT_NETWORK,
    }
}

fn load_answers_or_exit(path: &Path) -> Answers {
    match wellquest::questionnaire::load_answers(path) {
        Ok(a) => a,
        Err(e) => fail(EXIT_CONFIG, format!("Answers error: {:#}", e)),
    }
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => fail(EXIT_CONFIG, format!("Failed to serialize output: {}", e)),
    }
}

fn session_path_or_exit() -> PathBuf {
    match wellquest::session::get_session_path() {
        Ok(p) => p,
        Err(e) => fail(EXIT_CONFIG, format!("Config error: {:#}", e)),
    }
}

fn client_without_auth(config: &Config) -> ApiClient {
    match ApiClient::new(&config.api.base_url, None) {
        Ok(c) => c,
        Err(e) => fail(EXIT_NETWORK, format!("Failed to create backend client: {:#}", e)),
    }
}

/// Backend client with a resolved token, or exit with the auth code.
fn authed_client(config: &Config) -> ApiClient {
    let session_path = session_path_or_exit();
    let token = match credentials::resolve_token(config.api.token.as_deref(), &session_path) {
        Ok(t) => t,
        Err(e @ CredentialError::TokenNotFound) => fail(EXIT_AUTH, e),
        Err(e) => fail(EXIT_CONFIG, e),
    };
    client_without_auth(config).with_token(token)
}

async fn submit_total(config: &Config, total: i64) {
    let client = authed_client(config);
    if let Err(e) = client.send_form_points(total).await {
        fail(backend_exit_code(&e), format!("Failed to submit points: {:#}", e));
    }
    println!("Submitted {} points.", total);
}

fn save_login(token: String, email: &str) {
    let session = wellquest::session::Session::new(token, Some(email.to_string()));
    let path = session_path_or_exit();
    if let Err(e) = wellquest::session::save_session(&path, &session) {
        fail(EXIT_CONFIG, format!("Failed to save session: {:#}", e));
    }
    tracing::debug!(path = %path.display(), "session saved");
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+). An error
    // means a provider is already installed.
    let _ = rustls::crypto::ring::default_provider().install_default();

    let cli = Cli::parse();
    wellquest::telemetry::init_tracing(cli.verbose);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match wellquest::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => fail(EXIT_CONFIG, format!("Config error: {:#}", e)),
    };
    tracing::debug!(base_url = %config.api.base_url, "config loaded");

    // Validate scoring tables at startup
    let scoring: ScoringConfig = config.effective_scoring();
    if let Err(errors) = wellquest::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let use_colors = wellquest::output::should_use_colors();

    match cli.command {
        Commands::Questions => {
            println!("{}", wellquest::output::format_questions(use_colors));
        }
        Commands::Score {
            answers,
            json,
            explain,
        } => {
            let answers = load_answers_or_exit(&answers);
            let mut result = wellquest::scoring::calculate_scores(&answers, &scoring);
            if json {
                if !explain {
                    result.breakdown.clear();
                }
                print_json(&result);
            } else {
                println!("{}", wellquest::output::format_scores(&result, explain, use_colors));
            }
        }
        Commands::Generate { answers, json } => {
            let answers = load_answers_or_exit(&answers);
            let set = wellquest::challenges::generate_daily_challenges(&answers);
            if json {
                print_json(&set);
            } else {
                println!("{}", wellquest::output::format_challenges(&set, use_colors));
            }
        }
        Commands::Ask { json, submit } => {
            let answers = match wellquest::questionnaire::ask_interactive() {
                Ok(a) => a,
                Err(e) => fail(EXIT_CONFIG, format!("Input error: {:#}", e)),
            };
            if answers.is_empty() {
                tracing::warn!("no questions answered");
            }

            let mut result = wellquest::scoring::calculate_scores(&answers, &scoring);
            let set = wellquest::challenges::generate_daily_challenges(&answers);

            if json {
                result.breakdown.clear();
                print_json(&serde_json::json!({
                    "answers": answers,
                    "scores": result,
                    "challenges": set.challenges,
                }));
            } else {
                println!();
                println!("{}", wellquest::output::format_scores(&result, false, use_colors));
                println!();
                println!("{}", wellquest::output::format_challenges(&set, use_colors));
            }

            if submit {
                submit_total(&config, result.total).await;
            }
        }
        Commands::Submit { answers } => {
            let answers = load_answers_or_exit(&answers);
            let result = wellquest::scoring::calculate_scores(&answers, &scoring);
            submit_total(&config, result.total).await;
        }
        Commands::Pool {
            category,
            proof,
            max_difficulty,
            json,
        } => {
            let filter = PoolFilter {
                category,
                proof_only: proof,
                max_difficulty,
            };
            let entries = wellquest::challenges::filter_pool(&filter);
            if json {
                print_json(&entries);
            } else {
                println!("{}", wellquest::output::format_pool(&entries, use_colors));
            }
        }
        Commands::Catalog { json } => {
            let catalog = wellquest::challenges::CATALOG;
            if json {
                print_json(&catalog);
            } else {
                println!("{}", wellquest::output::format_catalog(catalog, use_colors));
            }
        }
        Commands::Login { email } => {
            let email = match email {
                Some(e) => e,
                None => match credentials::prompt_for_email() {
                    Ok(e) => e,
                    Err(e) => fail(EXIT_AUTH, format!("{:#}", e)),
                },
            };
            let password = match credentials::prompt_for_password() {
                Ok(p) => p,
                Err(e) => fail(EXIT_AUTH, format!("{:#}", e)),
            };

            let client = client_without_auth(&config);
            let token = match client.login(&email, &password).await {
                Ok(t) => t,
                Err(e) => fail(backend_exit_code(&e), format!("Login failed: {:#}", e)),
            };
            save_login(token, &email);
            println!("Logged in as {}.", email);
        }
        Commands::Register { name, email } => {
            let password = match credentials::prompt_for_password() {
                Ok(p) => p,
                Err(e) => fail(EXIT_AUTH, format!("{:#}", e)),
            };

            let client = client_without_auth(&config);
            let token = match client.register(&name, &email, &password).await {
                Ok(t) => t,
                Err(e) => fail(backend_exit_code(&e), format!("Registration failed: {:#}", e)),
            };
            save_login(token, &email);
            println!("Registered and logged in as {}.", email);
        }
        Commands::Logout => {
            let path = session_path_or_exit();
            match wellquest::session::clear_session(&path) {
                Ok(true) => println!("Logged out."),
                Ok(false) => println!("No saved session."),
                Err(e) => fail(EXIT_CONFIG, format!("{:#}", e)),
            }
        }
        Commands::Status { json } => {
            let client = authed_client(&config);
            let user = match client.me().await {
                Ok(u) => u,
                Err(e) => fail(backend_exit_code(&e), format!("Failed to load profile: {:#}", e)),
            };
            let progress = wellquest::progress::LevelProgress::from_points(user.points);
            if json {
                print_json(&serde_json::json!({ "user": user, "progress": progress }));
            } else {
                println!("{}", wellquest::output::format_status(&user, &progress, use_colors));
            }
        }
        Commands::Weekly => {
            let client = authed_client(&config);
            match client.weekly_quest().await {
                Ok(q) => println!("{}", wellquest::output::format_quest(&q, use_colors)),
                Err(e) => fail(backend_exit_code(&e), format!("Failed to load weekly quest: {:#}", e)),
            }
        }
        Commands::Quest { json } => {
            let client = authed_client(&config);
            let quest = match client.matched_quest().await {
                Ok(q) => q,
                Err(e) => fail(backend_exit_code(&e), format!("Failed to load quest: {:#}", e)),
            };
            match (quest, json) {
                (quest, true) => print_json(&quest),
                (Some(q), false) => println!("{}", wellquest::output::format_quest(&q, use_colors)),
                (None, false) => println!("No quest available for your points yet."),
            }
        }
        Commands::Goals { action } => {
            let client = authed_client(&config);
            match action.unwrap_or(GoalCommand::List { json: false }) {
                GoalCommand::List { json } => {
                    let goals = match client.goals().await {
                        Ok(g) => g,
                        Err(e) => fail(backend_exit_code(&e), format!("Failed to load goals: {:#}", e)),
                    };
                    if json {
                        print_json(&goals);
                    } else {
                        println!("{}", wellquest::output::format_goals(&goals, use_colors));
                    }
                }
                GoalCommand::Add {
                    title,
                    description,
                    category,
                } => {
                    let goal = match NewGoal::new(&title, &description, &category) {
                        Ok(g) => g,
                        Err(e) => fail(EXIT_CONFIG, e),
                    };
                    match client.create_goal(&goal).await {
                        Ok(Some(created)) => println!("Added goal {} ({}).", created.name, created.id),
                        Ok(None) => println!("Added goal {}.", goal.name),
                        Err(e) => fail(backend_exit_code(&e), format!("Failed to add goal: {:#}", e)),
                    }
                }
                GoalCommand::Remove { id } => {
                    if let Err(e) = client.delete_goal(&id).await {
                        fail(backend_exit_code(&e), format!("Failed to delete goal: {:#}", e));
                    }
                    println!("Deleted goal {}.", id);
                }
            }
        }
        Commands::Diary { action } => {
            let client = authed_client(&config);
            match action.unwrap_or(DiaryCommand::List { json: false }) {
                DiaryCommand::List { json } => {
                    let entries = match client.diary().await {
                        Ok(d) => d,
                        Err(e) => fail(backend_exit_code(&e), format!("Failed to load diary: {:#}", e)),
                    };
                    if json {
                        print_json(&entries);
                    } else {
                        println!("{}", wellquest::output::format_diary(&entries, use_colors));
                    }
                }
                DiaryCommand::Add { content, mood } => {
                    let today = chrono::Local::now().date_naive();
                    let entry = match NewDiaryEntry::new(today, mood, &content) {
                        Ok(e) => e,
                        Err(e) => fail(EXIT_CONFIG, e),
                    };
                    if let Err(e) = client.create_diary_entry(&entry).await {
                        fail(backend_exit_code(&e), format!("Failed to write diary entry: {:#}", e));
                    }
                    println!("Saved diary entry for {}.", entry.date);
                }
                DiaryCommand::Remove { id } => {
                    if let Err(e) = client.delete_diary_entry(&id).await {
                        fail(backend_exit_code(&e), format!("Failed to delete diary entry: {:#}", e));
                    }
                    println!("Deleted diary entry {}.", id);
                }
            }
        }
        Commands::Complete { id } => {
            let client = authed_client(&config);
            if let Err(e) = client.complete_challenge(&id).await {
                fail(backend_exit_code(&e), format!("Failed to complete challenge: {:#}", e));
            }
            println!("Challenge {} completed.", id);
        }
        Commands::Validate => {
            println!("Scoring tables cover every questionnaire option.");
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
