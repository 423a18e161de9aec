use std::env;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;

use anno::annotate::machine;
use anno::record::query;
use annofile as anno;
use flate2::read::GzDecoder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let chromosome = env::args().nth(1).expect("missing chromosome");
    let position = env::args().nth(2).expect("missing position");
    let src = env::args().nth(3).expect("missing annotations src");

    let file = File::open(&src)?;
    let inner: Box<dyn BufRead> = if src.ends_with(".gz") {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let reader = anno::Reader::new(inner);
    let machine = machine::Builder::default().try_build_from(reader)?;

    let query = query::Record::new(chromosome, position);
    println!("{}", machine.annotate(&query));

    Ok(())
}
