use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sarf_analyzer::Analyzer;
use sarf_core::{
    from_buckwalter, parse_arabic, render_arabic, to_buckwalter, ConjugationParameters, Dialect,
    EngineConfig, Gender, Mood, Number, Person, Root, Stem, Stem1Context, Tashkil, Tense, Voice,
    VocalizedLetter,
};
use sarf_engine::{generate, paradigm, participle, verbal_nouns};
use tracing::info;
use tracing_subscriber::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "sarf", about = "Conjugate and analyze Arabic verbs")]
struct Cli {
    /// Path to the engine config file (JSON). Falls back to $SARF_CONFIG.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Json)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Json,
    Pretty,
}

/// Stem I vowels and output options shared by the generating commands.
#[derive(Debug, Args)]
struct VerbArgs {
    /// Root, e.g. ك-ت-ب
    #[arg(long)]
    root: Root,
    #[arg(long)]
    stem: Stem,
    /// Stem I perfect vowel of R2 (a, i or u)
    #[arg(long, value_parser = parse_vowel)]
    past: Option<Tashkil>,
    /// Stem I present vowel of R2 (a, i or u)
    #[arg(long, value_parser = parse_vowel)]
    present: Option<Tashkil>,
    /// Conjugate a hollow or assimilated stem I root as sound
    #[arg(long)]
    sound_override: bool,
    /// Print Buckwalter transliteration instead of Arabic script
    #[arg(long)]
    buckwalter: bool,
}

impl VerbArgs {
    fn context(&self) -> Option<Stem1Context> {
        let (past, present) = (self.past?, self.present?);
        let ctx = Stem1Context::new(past, present);
        Some(if self.sound_override {
            ctx.with_sound_override()
        } else {
            ctx
        })
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate one paradigm cell
    Conjugate {
        #[command(flatten)]
        verb: VerbArgs,
        #[arg(long, default_value_t = Voice::Active)]
        voice: Voice,
        #[arg(long)]
        tense: Tense,
        /// Present tense only
        #[arg(long)]
        mood: Option<Mood>,
        #[arg(long)]
        person: Person,
        #[arg(long)]
        gender: Gender,
        #[arg(long)]
        number: Number,
        #[arg(long)]
        dialect: Option<Dialect>,
    },
    /// Print every cell of a paradigm
    Paradigm {
        #[command(flatten)]
        verb: VerbArgs,
        #[arg(long)]
        dialect: Option<Dialect>,
    },
    /// Recover the roots and stems of a surface form, printed as JSON
    Analyze {
        form: String,
        #[arg(long)]
        dialect: Option<Dialect>,
        /// Include matching cells and vowel contexts
        #[arg(long)]
        detailed: bool,
        /// Read the form as Buckwalter transliteration
        #[arg(long)]
        buckwalter: bool,
    },
    /// Build an MSA participle
    Participle {
        #[command(flatten)]
        verb: VerbArgs,
        #[arg(long, default_value_t = Voice::Active)]
        voice: Voice,
    },
    /// List the MSA verbal nouns of a stem
    VerbalNoun {
        /// Root, e.g. ك-ت-ب
        #[arg(long)]
        root: Root,
        #[arg(long)]
        stem: Stem,
        /// Print Buckwalter transliteration instead of Arabic script
        #[arg(long)]
        buckwalter: bool,
    },
}

fn parse_vowel(s: &str) -> Result<Tashkil, String> {
    match s.trim().to_lowercase().as_str() {
        "a" | "fatha" => Ok(Tashkil::Fatha),
        "i" | "kasra" => Ok(Tashkil::Kasra),
        "u" | "dhamma" | "damma" => Ok(Tashkil::Dhamma),
        other => Err(format!("unknown vowel '{other}', expected a, i or u")),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => EngineConfig::from_env_or_default().context("failed to load config from $SARF_CONFIG"),
    }
}

fn render(word: &[VocalizedLetter], buckwalter: bool) -> String {
    if buckwalter {
        to_buckwalter(word)
    } else {
        render_arabic(word)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_observability(cli.log_format);
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Conjugate {
            verb,
            voice,
            tense,
            mood,
            person,
            gender,
            number,
            dialect,
        } => {
            let params = ConjugationParameters {
                stem: verb.stem,
                voice,
                tense,
                mood: match tense {
                    Tense::Present => Some(mood.unwrap_or(Mood::Indicative)),
                    Tense::Perfect => mood,
                },
                person,
                gender,
                number,
                dialect: dialect.unwrap_or(config.default_dialect),
            };
            let ctx = verb.context();
            let result = generate(&verb.root, &params, ctx.as_ref())
                .with_context(|| format!("cannot conjugate {} as {params}", verb.root))?;
            let bw = verb.buckwalter || config.render_buckwalter;
            for form in result.iter() {
                println!("{}", render(form, bw));
            }
        }
        Commands::Paradigm { verb, dialect } => {
            let dialect = dialect.unwrap_or(config.default_dialect);
            let ctx = verb.context();
            let cells = paradigm(&verb.root, verb.stem, ctx.as_ref(), dialect)
                .with_context(|| format!("cannot build the stem {} paradigm of {}", verb.stem, verb.root))?;
            let bw = verb.buckwalter || config.render_buckwalter;
            for (params, result) in &cells {
                let forms: Vec<String> = result.iter().map(|w| render(w, bw)).collect();
                println!("{params}\t{}", forms.join(" / "));
            }
            info!(root = %verb.root, cells = cells.len(), "paradigm printed");
        }
        Commands::Analyze {
            form,
            dialect,
            detailed,
            buckwalter,
        } => {
            let word = if buckwalter {
                from_buckwalter(&form)
            } else {
                parse_arabic(&form)
            }
            .with_context(|| format!("cannot read '{form}'"))?;
            let analyzer = Analyzer::new(config);
            let json = if detailed {
                serde_json::to_string_pretty(&analyzer.analyze_detailed(&word, dialect))?
            } else {
                serde_json::to_string_pretty(&analyzer.analyze(&word, dialect))?
            };
            println!("{json}");
        }
        Commands::Participle { verb, voice } => {
            let ctx = verb.context();
            let word = participle(&verb.root, verb.stem, voice, ctx.as_ref())
                .with_context(|| format!("cannot build the participle of {}", verb.root))?;
            println!("{}", render(&word, verb.buckwalter || config.render_buckwalter));
        }
        Commands::VerbalNoun {
            root,
            stem,
            buckwalter,
        } => {
            let nouns = verbal_nouns(&root, stem)
                .with_context(|| format!("cannot build the stem {stem} verbal nouns of {root}"))?;
            for noun in &nouns {
                println!("{}", render(noun, buckwalter || config.render_buckwalter));
            }
        }
    }

    Ok(())
}

fn init_observability(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn,sarf_engine=info,sarf_analyzer=info".into());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true);

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt_layer.json())
            .with(env_filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt_layer.pretty())
            .with(env_filter)
            .init(),
    }
}
