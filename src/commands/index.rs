use crate::args::IndexArgs;
use crate::constants::INDEX_EXTENSION;
use crate::errors::*;
use crate::index::ReferenceIndex;
use crate::source::ReferenceSource;

pub fn main(args: &IndexArgs) -> Result<()> {
    let filename = match (&args.output, &args.reference) {
        (Some(filename), _) => filename.clone(),
        (None, ReferenceSource::File(path)) => format!("{}{}", path.display(), INDEX_EXTENSION),
        (None, ReferenceSource::Stdin) => {
            return Err("an output file is required when reading the reference from STDIN".into())
        }
    };

    info!("Reading 20-mers from {}", args.reference);
    let index = ReferenceIndex::build(args.reference.open()?)
        .chain_err(|| format!("failed to build index from {}", args.reference))?;
    info!("  {}", index.summarize());

    info!("Writing index to {:?}", filename);
    index
        .write(&filename)
        .chain_err(|| format!("failed to write index {:?}", filename))
}
