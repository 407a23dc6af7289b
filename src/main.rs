use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_VALIDATION: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_BROWSER: i32 = 3;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a submission and print the winning archetype (default if no subcommand)
    Score {
        /// Path to the submission JSON file (reads stdin if omitted)
        submission: Option<PathBuf>,

        /// Emit tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Score a submission and open its result page in the browser
    Open {
        /// Path to the submission JSON file (reads stdin if omitted)
        submission: Option<PathBuf>,

        /// Directory holding the static result pages
        #[arg(long, default_value = ".")]
        pages_dir: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "clarity-quiz")]
#[command(about = "Personality archetype quiz scorer", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Score {
        submission: None,
        tsv: false,
    });

    let submission_path = match &command {
        Commands::Score { submission, .. } | Commands::Open { submission, .. } => {
            submission.clone()
        }
    };

    // Load submission
    let submission = match clarity_quiz::form::load_submission(submission_path.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Submission error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if cli.verbose {
        eprintln!("Loaded submission with {} fields", submission.answers.len());
    }

    // Validate required fields before any scoring happens. An invalid
    // submission aborts here: nothing is scored and no page is opened.
    if let Err(errors) = clarity_quiz::form::validate_submission(&submission) {
        eprintln!("Submission is incomplete:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_VALIDATION);
    }

    let result = clarity_quiz::scoring::score(&submission);

    if cli.verbose {
        eprintln!(
            "Classified {} of {} questions",
            result.board.total(),
            clarity_quiz::scoring::QUESTION_COUNT
        );
        eprintln!(
            "{}",
            clarity_quiz::output::format_breakdown(&result.breakdown, false)
        );
    }

    match command {
        Commands::Score { tsv, .. } => {
            if tsv {
                println!("{}", clarity_quiz::output::format_tsv(&result));
            } else {
                let use_colors = clarity_quiz::output::should_use_colors();
                println!(
                    "{}",
                    clarity_quiz::output::format_winner(result.winner, use_colors)
                );
                println!();
                println!(
                    "{}",
                    clarity_quiz::output::format_tally(&result, use_colors)
                );
            }
        }
        Commands::Open { pages_dir, .. } => {
            match clarity_quiz::browser::open_result_page(&pages_dir, result.winner) {
                Ok(page) => {
                    println!(
                        "Opening result page for {}: {}",
                        result.winner,
                        page.display()
                    );
                }
                Err(e) => {
                    eprintln!("Failed to open result page: {}", e);
                    std::process::exit(EXIT_BROWSER);
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
