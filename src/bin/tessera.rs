//! Tessera CLI binary.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde_json::json;

use tessera::analysis::StopWords;
use tessera::error::Result;
use tessera::lexicon::Lexicon;

/// Tessera - weighted lexical index for knowledge-base matching
#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(about = "Weighted lexical index for knowledge-base matching")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct TesseraArgs {
    /// Emit JSON instead of human-readable output
    #[arg(long)]
    json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Show lexicon statistics
    Stats {
        /// Lexicon file (tab-separated)
        file: PathBuf,
    },
    /// Resolve a raw name to its candidate classes
    Lookup {
        /// Lexicon file (tab-separated)
        file: PathBuf,
        /// Raw name to resolve
        name: String,
        /// Restrict resolution to internal entries
        #[arg(long)]
        internal: bool,
    },
    /// Run the synonym generators and report index growth
    Synonyms {
        /// Lexicon file (tab-separated)
        file: PathBuf,
        /// Write the enriched lexicon to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let args = TesseraArgs::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: TesseraArgs) -> Result<()> {
    match args.command {
        Command::Stats { file } => stats(&file, args.json),
        Command::Lookup {
            file,
            name,
            internal,
        } => lookup(&file, &name, internal, args.json),
        Command::Synonyms { file, output } => synonyms(&file, output.as_deref(), args.json),
    }
}

fn stats(file: &std::path::Path, as_json: bool) -> Result<()> {
    let lexicon = Lexicon::load(file)?;
    let mut languages: Vec<(String, u64)> = lexicon
        .languages()
        .map(|l| (l.to_string(), lexicon.language_count(l)))
        .collect();
    languages.sort();

    if as_json {
        let value = json!({
            "names": lexicon.name_count(),
            "classes": lexicon.class_count(),
            "entries": lexicon.len(),
            "languages": languages.iter().map(|(l, c)| json!({"language": l, "entries": c})).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("Names:   {}", lexicon.name_count());
        println!("Classes: {}", lexicon.class_count());
        println!("Entries: {}", lexicon.len());
        for (language, count) in languages {
            println!("  {language}: {count}");
        }
    }
    Ok(())
}

fn lookup(file: &std::path::Path, name: &str, internal: bool, as_json: bool) -> Result<()> {
    let lexicon = Lexicon::load(file)?;
    let key = lexicon.index_key(name);
    let mut candidates: Vec<(u32, f64)> = lexicon
        .classes_of(&key)
        .into_iter()
        .map(|id| (id, lexicon.weight(&key, id)))
        .collect();
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    let best = lexicon.best_class(&key, internal);

    if as_json {
        let value = json!({
            "name": name,
            "key": key,
            "candidates": candidates.iter().map(|(id, w)| json!({"class": id, "weight": w})).collect::<Vec<_>>(),
            "best": best,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("Key: {key}");
        for (id, weight) in &candidates {
            println!("  {id}  {weight:.4}");
        }
        match best {
            Some(id) => println!("Best: {id}"),
            None => println!("Best: not found (no hit or tie)"),
        }
    }
    Ok(())
}

fn synonyms(file: &std::path::Path, output: Option<&std::path::Path>, as_json: bool) -> Result<()> {
    let mut lexicon = Lexicon::load(file)?;
    let before = lexicon.len();
    lexicon.generate_parenthesis_synonyms();
    lexicon.generate_stop_word_synonyms(&StopWords::new());
    let after = lexicon.len();

    if let Some(path) = output {
        lexicon.save(path)?;
    }

    if as_json {
        let value = json!({
            "entries_before": before,
            "entries_after": after,
            "generated": after - before,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("Entries before: {before}");
        println!("Entries after:  {after}");
        println!("Generated:      {}", after - before);
    }
    Ok(())
}
