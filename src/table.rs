use log::warn;

// Mnemonic assigned to every opcode the input does not mention; the generated
// header pairs it with the catch-all handler.
pub const UNKNOWN: &str = "unknown";

#[derive(Debug)]
pub enum TableError {
    MissingOpcodeField(usize),
    BadOpcodeValue(usize, String),
    BadMnemonic(usize, String),
}

pub struct OpcodeTable {
    slots: Vec<String>,
    rows: Vec<String>,
}

impl OpcodeTable {
    pub fn new(input: &str) -> Result<OpcodeTable, TableError> {
        let mut slots: Vec<String> = vec![UNKNOWN.to_string(); 256];
        let mut rows: Vec<String> = Vec::new();

        // line 0 is the column header, skipped unconditionally
        for (n, line) in input.lines().enumerate().skip(1) {
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            let mnemonic = fields[0];
            if fields.len() < 2 {
                return Err(TableError::MissingOpcodeField(n + 1));
            }
            if !is_identifier(mnemonic) {
                return Err(TableError::BadMnemonic(n + 1, mnemonic.to_string()));
            }
            let opcode = u8::from_str_radix(fields[1], 16)
                .map_err(|_| TableError::BadOpcodeValue(n + 1, fields[1].to_string()))?;

            if slots[opcode as usize] != UNKNOWN {
                warn!("opcode {:02x}: '{}' replaces '{}'", opcode, mnemonic, slots[opcode as usize]);
            }
            slots[opcode as usize] = mnemonic.to_string();
            rows.push(mnemonic.to_string());
        }

        Ok(OpcodeTable{ slots, rows })
    }

    pub fn mnemonic(&self, opcode: u8) -> &str {
        &self.slots[opcode as usize]
    }

    /// All 256 slots in ascending opcode order.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Mnemonics of the accepted input rows, in input order, repeats included.
    pub fn row_mnemonics(&self) -> &[String] {
        &self.rows
    }
}

// Mnemonics are spliced into C identifiers, so restrict them accordingly.
fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
