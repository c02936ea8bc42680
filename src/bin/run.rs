use clap::Parser;
use log::{info, warn};
use opinion_miner::{
    compile::compile,
    corpus::{read_reviews, save_opinions, write_opinions},
    tagger::{Lexicon, PreTagged, Tag},
    Extractor,
};
use std::{
    collections::HashSet,
    io::{self, Write},
    path::PathBuf,
};

#[derive(Parser)]
#[clap(
    version = "1.0",
    about = "Extracts opinion phrases from reviews, one review per line."
)]
struct Opts {
    /// File with one review per line.
    #[clap(long, short)]
    reviews: PathBuf,
    /// Lexicon dump to tag with. Can be given multiple times, every lexicon is run separately.
    #[clap(long, short)]
    lexicon: Vec<PathBuf>,
    /// Lines to remove from all lexicon dumps.
    #[clap(long)]
    remove: Vec<PathBuf>,
    /// Also read the reviews as already tagged `word/TAG` text.
    #[clap(long)]
    pre_tagged: bool,
    /// JSON configuration of patterns and tag conversions.
    #[clap(long, short)]
    config: Option<PathBuf>,
    /// Directory to write `opinions_with_<tagger>.txt` files to. Prints to stdout if not set.
    #[clap(long, short)]
    output: Option<PathBuf>,
}

/// Returns `name`, or `name_<n>` with the smallest free `n` if `name` is already taken.
fn unique_name(name: &str, taken: &mut HashSet<String>) -> String {
    let mut unique = name.to_string();
    let mut n = 2;

    while taken.contains(&unique) {
        unique = format!("{}_{}", name, n);
        n += 1;
    }
    if unique != name {
        warn!("tagger name {} is used twice, writing to {} instead", name, unique);
    }

    taken.insert(unique.clone());
    unique
}

/// Writes the opinions of one tagger, preceded by a header if there are several taggers.
fn write_section<W: Write, S: AsRef<str>>(
    mut writer: W,
    name: &str,
    with_header: bool,
    opinions: &[S],
) -> Result<(), opinion_miner::Error> {
    if with_header {
        writeln!(writer, "==> {} <==", name)?;
    }
    write_opinions(writer, opinions)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let opts = Opts::parse();

    let extractor = match &opts.config {
        Some(path) => compile(path)?,
        None => Extractor::default(),
    };
    let reviews = read_reviews(&opts.reviews)?;
    info!("loaded {} reviews", reviews.len());

    let mut taggers: Vec<(String, Box<dyn Tag>)> = Vec::new();
    let mut names = HashSet::new();

    for path in &opts.lexicon {
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "lexicon".into());
        let name = unique_name(&stem, &mut names);

        let lexicon = match Lexicon::from_dumps(&[path], &opts.remove) {
            Ok(lexicon) => Some(lexicon),
            Err(error) => {
                warn!("not able to load lexicon {}: {}", path.display(), error);
                None
            }
        };
        taggers.push((name, Box::new(lexicon)));
    }

    if opts.pre_tagged {
        let name = unique_name("pre_tagged", &mut names);
        taggers.push((name, Box::new(PreTagged::default())));
    }

    if taggers.is_empty() {
        warn!("no tagger given, use --lexicon or --pre-tagged");
    }

    let with_header = taggers.len() > 1;

    for (name, tagger) in &taggers {
        info!("processing reviews with {}", name);
        let opinions = extractor.process(&reviews, tagger);

        match &opts.output {
            Some(dir) => {
                save_opinions(dir.join(format!("opinions_with_{}.txt", name)), &opinions)?
            }
            None => write_section(io::stdout().lock(), name, with_header, &opinions)?,
        }
    }

    Ok(())
}
