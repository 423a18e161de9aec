use std::env;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;

use anno::annotate::machine;
use annofile as anno;
use flate2::read::GzDecoder;
use tabled::builder::Builder;
use tabled::settings::Alignment;
use tabled::settings::Style;
use tabled::settings::object::Rows;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let src = env::args().nth(1).expect("missing annotations src");

    let file = File::open(&src)?;
    let inner: Box<dyn BufRead> = if src.ends_with(".gz") {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let reader = anno::Reader::new(inner);
    let machine = machine::Builder::default().try_build_from(reader)?;

    let mut chromosomes = machine.chromosomes().collect::<Vec<_>>();
    chromosomes.sort();

    let mut builder = Builder::default();
    builder.push_record(["Chromosome", "Features", "Boundaries", "First", "Last"]);

    for chromosome in chromosomes {
        let index = machine
            .index(chromosome.as_str())
            .expect("chromosome to be indexed");

        let features = (index.len() / 2).to_string();
        let boundaries = index.len().to_string();

        let first = index
            .boundaries()
            .first()
            .map(|boundary| boundary.position().to_string())
            .unwrap_or(String::from("<None>"));

        let last = index
            .boundaries()
            .last()
            .map(|boundary| boundary.position().to_string())
            .unwrap_or(String::from("<None>"));

        builder.push_record([
            chromosome.as_str(),
            features.as_str(),
            boundaries.as_str(),
            first.as_str(),
            last.as_str(),
        ]);
    }

    let table = builder
        .build()
        .with(Style::rounded())
        .modify(Rows::new(1..), Alignment::left())
        .to_string();

    println!("{}", table);

    Ok(())
}
