//! thai-deck CLI - Anki decks for Thai consonants and vowels

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thai_deck::{
    audio::{self, AudioJob, AudioOptions, AudioReport},
    config::DeckConfig,
    data::{builtin_consonants, VowelFormTable, VowelSymbolIndex},
    deck,
    engines::gtts::{GttsEngine, GttsInferenceParams},
    SynthesisEngine,
};

#[derive(Parser)]
#[command(name = "thai-deck")]
#[command(version)]
#[command(about = "Generate Anki decks (TSV + audio) for Thai consonants and vowels", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the vowel deck
    Vowels {
        /// Output TSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Vowel table JSON to use instead of the built-in one
        #[arg(long)]
        table: Option<PathBuf>,

        #[command(flatten)]
        audio: AudioArgs,
    },

    /// Write the consonant deck
    Consonants {
        /// Output TSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        audio: AudioArgs,
    },

    /// Print every distinct vowel rendering in the table
    UniqueVowels {
        /// Vowel table JSON to use instead of the built-in one
        #[arg(long)]
        table: Option<PathBuf>,
    },

    /// Generate a few sample consonant files to check the TTS service
    AudioCheck {
        /// Directory for the sample files
        #[arg(long, default_value = "test_sounds")]
        dir: PathBuf,
    },
}

#[derive(Args)]
struct AudioArgs {
    /// Also generate audio files
    #[arg(long)]
    audio: bool,

    /// Directory for audio files
    #[arg(long)]
    sounds_dir: Option<PathBuf>,

    /// Pause between TTS requests in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// TTS language code
    #[arg(long)]
    lang: Option<String>,

    /// Slower speech
    #[arg(long)]
    slow: bool,
}

impl AudioArgs {
    fn apply(&self, config: &mut DeckConfig) {
        config.generate_audio |= self.audio;
        config.slow |= self.slow;
        if let Some(dir) = &self.sounds_dir {
            config.sounds_dir = dir.clone();
        }
        if let Some(ms) = self.delay_ms {
            config.request_delay_ms = ms;
        }
        if let Some(lang) = &self.lang {
            config.language = lang.clone();
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn output_path(config: &DeckConfig, output: Option<PathBuf>, default_name: &str) -> PathBuf {
    output.unwrap_or_else(|| config.output_dir.join(default_name))
}

fn load_vowel_table(path: Option<&Path>) -> Result<VowelFormTable, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(VowelFormTable::from_json_path(path)?),
        None => Ok(VowelFormTable::builtin()),
    }
}

fn run_audio(
    config: &DeckConfig,
    jobs: &[AudioJob],
    options: &AudioOptions,
) -> Result<AudioReport, Box<dyn std::error::Error>> {
    println!("Generating {} audio files...", jobs.len());
    println!("This may take a few minutes due to API rate limits...");

    let mut engine = GttsEngine::new();
    engine.connect()?;
    let params = GttsInferenceParams {
        lang: config.language.clone(),
        slow: config.slow,
    };
    let report = audio::generate_audio(&mut engine, jobs, Some(params), options)?;
    engine.disconnect();

    println!(
        "Audio: {} generated, {} already present, {} failed (in '{}')",
        report.generated,
        report.skipped,
        report.failed.len(),
        options.sounds_dir.display()
    );
    if !report.failed.is_empty() {
        println!("Failed: {}", report.failed.join(" "));
    }
    Ok(report)
}

fn print_import_steps(tsv: &Path, with_audio: bool, sounds_dir: &Path) {
    println!();
    println!("To import into Anki:");
    println!("1. Open Anki");
    println!("2. File -> Import");
    println!("3. Select {}", tsv.display());
    println!("4. Choose 'Basic' as the note type");
    println!("5. Map Front and Back fields");
    println!("6. Import");
    if with_audio {
        println!();
        println!("For audio files:");
        println!(
            "1. Copy files from '{}' to your Anki media folder",
            sounds_dir.display()
        );
        println!("2. Restart Anki to load the audio files");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => DeckConfig::load(path)?,
        None => DeckConfig::default(),
    };

    match cli.command {
        Commands::Vowels {
            output,
            table,
            audio: audio_args,
        } => {
            audio_args.apply(&mut config);
            if table.is_some() {
                config.vowel_table = table;
            }

            let table = load_vowel_table(config.vowel_table.as_deref())?;
            let cards = deck::vowel::build_cards(&table);
            let path = output_path(&config, output, "thai_vowels.tsv");
            deck::write_tsv(&path, &cards)?;
            println!("Created {} with {} vowel cards", path.display(), cards.len());

            if config.generate_audio {
                let index = VowelSymbolIndex::build(&table);
                let jobs = audio::vowel_audio_jobs(&index);
                run_audio(&config, &jobs, &config.audio_options())?;
            } else {
                println!("Skipping audio generation.");
            }
            print_import_steps(&path, config.generate_audio, &config.sounds_dir);
        }
        Commands::Consonants {
            output,
            audio: audio_args,
        } => {
            audio_args.apply(&mut config);

            let consonants = builtin_consonants();
            let cards = deck::consonant::build_cards(consonants);
            let path = output_path(&config, output, "thai_consonants.tsv");
            deck::write_tsv(&path, &cards)?;
            println!(
                "Created {} with {} consonant cards",
                path.display(),
                cards.len()
            );

            if config.generate_audio {
                let jobs = audio::consonant_audio_jobs(consonants);
                run_audio(&config, &jobs, &config.audio_options())?;
            } else {
                println!("Skipping audio generation.");
            }
            print_import_steps(&path, config.generate_audio, &config.sounds_dir);
        }
        Commands::UniqueVowels { table } => {
            let table = load_vowel_table(table.or(config.vowel_table).as_deref())?;
            for cell in table.unique_cells() {
                println!("{cell}");
            }
        }
        Commands::AudioCheck { dir } => {
            let jobs = audio::sample_audio_jobs(builtin_consonants());
            let options = AudioOptions {
                sounds_dir: dir,
                ..config.audio_options()
            };
            let report = run_audio(&config, &jobs, &options)?;
            if report.failed.is_empty() {
                println!("Sample audio OK. Run `thai-deck consonants --audio` for the full set.");
            }
        }
    }

    Ok(())
}
