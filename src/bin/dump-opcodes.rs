extern crate bctools;

use std::env;

use bctools::table;

#[derive(Debug)]
enum DumpError {
    IoError(std::io::Error),
    TableError(table::TableError),
}

impl From<std::io::Error> for DumpError {
    fn from(error: std::io::Error) -> Self {
       DumpError::IoError(error)
    }
}

impl From<table::TableError> for DumpError {
    fn from(error: table::TableError) -> Self {
       DumpError::TableError(error)
    }
}

fn main() -> Result<(), DumpError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        panic!("usage: {} instructions.csv", args[0]);
    }

    let input = std::fs::read_to_string(&args[1])?;
    let table = table::OpcodeTable::new(&input)?;

    let mut assigned = 0;
    for (opcode, mnemonic) in table.slots().iter().enumerate() {
        if mnemonic.as_str() != table::UNKNOWN {
            println!("{:02x} {}", opcode, mnemonic);
            assigned += 1;
        }
    }
    println!("{} of 256 opcodes assigned", assigned);
    Ok(())
}
