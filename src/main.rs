use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use tracing::Level;

use is_illust::{batch, classify_path, Error, Label};

#[derive(Parser)]
#[command(name = "is-illust")]
#[command(version, about = "Tell illustrations from photographs", long_about = None)]
struct Cli {
    /// Image to classify
    #[arg(value_name = "IMAGE")]
    image: Option<PathBuf>,

    /// Directory of photographs to measure accuracy against (repeatable)
    #[arg(long, value_name = "DIR")]
    picture_dir: Vec<PathBuf>,

    /// Directory of illustrations to measure accuracy against (repeatable)
    #[arg(long, value_name = "DIR")]
    illust_dir: Vec<PathBuf>,

    /// Number of parallel threads in batch mode
    #[arg(short = 'j', long, value_name = "N")]
    threads: Option<usize>,

    /// Log intermediate features (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.verbose);

    let batch_mode = !cli.picture_dir.is_empty() || !cli.illust_dir.is_empty();

    let result = match (cli.image, batch_mode) {
        (Some(image), false) => run_single(image),
        (None, true) => run_batch(cli.picture_dir, cli.illust_dir, cli.threads),
        (Some(_), true) => Err(Error::Usage(
            "give either one IMAGE or batch directories, not both".to_owned(),
        )),
        (None, false) => Err(Error::Usage("expected exactly one IMAGE argument".to_owned())),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_single(image: PathBuf) -> Result<(), Error> {
    let classification = classify_path(&image)?;

    eprintln!(
        "score: {:.3} --> {}",
        classification.score, classification.label
    );
    println!("{}", classification.label);

    Ok(())
}

fn run_batch(
    picture_dirs: Vec<PathBuf>,
    illust_dirs: Vec<PathBuf>,
    threads: Option<usize>,
) -> Result<(), Error> {
    if let Some(num_threads) = threads {
        batch::configure_threads(num_threads)?;
    }

    let dirs = picture_dirs
        .into_iter()
        .map(|dir| (dir, Label::Picture))
        .chain(illust_dirs.into_iter().map(|dir| (dir, Label::Illust)));

    for (dir, expected) in dirs {
        println!("----- {} -----", dir.display());

        // an unreadable directory is reported like any other failed item
        let report = match batch::run_directory(&dir, expected) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        for item in &report.items {
            match &item.outcome {
                Ok(c) => println!("{}: {:.3} --> {}", item.path.display(), c.score, c.label),
                Err(e) => println!("{}: {e}", item.path.display()),
            }
        }

        let accuracy = match report.accuracy() {
            Some(fraction) => format!("{fraction:.3}"),
            None => "n/a".to_owned(),
        };

        println!(
            "{}: accuracy {}/{} ({accuracy}), {} failed",
            dir.display(),
            report.correct(),
            report.total(),
            report.failed(),
        );
    }

    Ok(())
}
