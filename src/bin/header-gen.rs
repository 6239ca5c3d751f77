extern crate bctools;

use std::env;
use log::info;

use bctools::{table, header};

#[derive(Debug)]
enum GenError {
    IoError(std::io::Error),
    TableError(table::TableError),
}

impl From<std::io::Error> for GenError {
    fn from(error: std::io::Error) -> Self {
       GenError::IoError(error)
    }
}

impl From<table::TableError> for GenError {
    fn from(error: table::TableError) -> Self {
       GenError::TableError(error)
    }
}

fn main() -> Result<(), GenError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} CSV_FILE PATH_TO_GENERATED_HEADER_FILE", args[0]);
        return Ok(());
    }

    // read the table before touching the output path, so a bad input leaves
    // the previously generated header alone
    let input = std::fs::read_to_string(&args[1])?;
    let table = table::OpcodeTable::new(&input)?;
    info!("{}: {} instruction rows", args[1], table.row_mnemonics().len());

    header::write(&table, &args[2])?;
    Ok(())
}
