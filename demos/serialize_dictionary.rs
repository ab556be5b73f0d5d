use anyhow::Result;
use ordfinder::{codec, Dictionary, Finder};
use std::fs::File;
use std::io::prelude::*;
use std::time::Instant;

const WORDFILE: &str = "wordlists/words-da.txt";
const BINFILE: &str = "wordlists/words-da.bin";

fn main() -> Result<()> {
    env_logger::init();
    let dictionary = Dictionary::from_file(WORDFILE, codec::danish())?;
    println!("{}", dictionary);
    // save to bin file
    let serialized = bincode::serialize(&dictionary)?;
    let mut file = File::create(BINFILE)?;
    file.write_all(&serialized)?;

    let t0 = Instant::now();
    let finder = Finder::default().with_dictionary_deserialize_from(BINFILE)?;
    println!("{} in {:?}", finder, t0.elapsed());
    Ok(())
}
