extern crate tokio;

use std::process::ExitCode;

use clap::Parser;
use grammr::{inflection::Inflections, token::Token};
use grammr_repo::{
    batch,
    cli::{Cli, Command},
    config::Config,
    engine::GrammrFacade,
    error::Error,
    read::read_json,
    render,
};
use serde_json::json;
use tracing::{error, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = Config::load(cli.global.config.as_ref()).await?.with_env();
    let mut config = cli.global.apply(config);
    let json = cli.global.json;

    match cli.command {
        Command::Translate(args) => {
            if let Some(spoken) = args.spoken {
                config.language_spoken = spoken;
            }
            if let Some(learned) = args.learned {
                config.language_learned = learned;
            }

            let engine = GrammrFacade::new(config.validate()?)?;
            let analysis = engine.translate(&args.phrase).await?;
            let display = analysis.aligned_tokens()?;

            if json {
                let output = json!({
                    "sourcePhrase": analysis.source_phrase,
                    "translatedPhrase": analysis.translated_phrase(),
                    "tokens": display,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", render::line(&display));
                print!("{}", render::words(&display));
            }
        }

        Command::Inflect(args) => {
            if let Some(language) = args.language {
                config.language_learned = language;
            }

            let engine = GrammrFacade::new(config.validate()?)?;
            let (inflections, table) = engine.inflect(Token::from(args.word)).await?;

            print_table(&inflections, &table, json)?;
        }

        Command::Align(args) => {
            let analyses = read_json(&args.file).await?;
            let results = batch::align_all(analyses, args.threads);

            if json {
                let output = results
                    .iter()
                    .map(|result| match result {
                        Ok(analysis) => json!({ "ok": analysis }),
                        Err(err) => json!({ "error": err.to_string() }),
                    })
                    .collect::<Vec<_>>();
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                results.iter().enumerate().for_each(|(index, result)| match result {
                    Ok(analysis) => {
                        let texts = analysis
                            .analyzed_tokens
                            .iter()
                            .map(|token| token.text.as_str())
                            .collect::<Vec<_>>();
                        println!("{index}: {}", texts.join(" | "));
                    }
                    Err(err) => println!("{index}: error: {err}"),
                });
            }
        }

        Command::Table(args) => {
            let inflections: Inflections = read_json(&args.file).await?;
            let table = inflections.table();

            print_table(&inflections, &table, json)?;
        }
    }

    Ok(())
}

fn print_table(
    inflections: &Inflections,
    table: &grammr::InflectionTable,
    json: bool,
) -> Result<(), Error> {
    if json {
        let output = json!({
            "lemma": inflections.lemma,
            "partOfSpeech": inflections.part_of_speech,
            "table": table,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} ({})", inflections.lemma, inflections.part_of_speech);
        print!("{}", render::table(&inflections.part_of_speech, table));
    }

    Ok(())
}
