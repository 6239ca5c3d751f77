use std::fs;

use crate::table::{OpcodeTable, UNKNOWN};

const BANNER: &str = "// DO NOT EDIT THIS FILE. ALL CHANGES WILL BE ERASED WHEN THIS FILE IS REGENERATED\n\n";
const INCLUDES: &str = "#include <stdbool.h>\n#include \"jthread.h\"\n\n";

fn declaration(mnemonic: &str) -> String {
    format!("int handle_instr_{}(bc_interpreter_t *interpreter, bool wide);\n", mnemonic)
}

/// Renders the complete generated header. Pure function of the table, so the
/// same table always yields the same bytes.
pub fn render(table: &OpcodeTable) -> String {
    let mut out = String::new();
    out += BANNER;
    out += INCLUDES;

    // name table, one literal per opcode in ascending order
    out += "static const char *instr_names[256] = {\n";
    for mnemonic in table.slots() {
        out += &format!("\t\"{}\",\n", mnemonic);
    }
    out += "};\n\n";

    // catch-all handler first, then one declaration per input row
    out += &declaration(UNKNOWN);
    for mnemonic in table.row_mnemonics() {
        if mnemonic.as_str() != UNKNOWN {
            out += &declaration(mnemonic);
        }
    }

    // dispatch table, positionally aligned with instr_names
    out += "\nstatic int (* const instr_table[256])(bc_interpreter_t *interpreter, bool wide) = {\n";
    for mnemonic in table.slots() {
        out += &format!("\thandle_instr_{},\n", mnemonic);
    }
    out += "};";
    out
}

pub fn write(table: &OpcodeTable, path: &str) -> Result<(), std::io::Error> {
    fs::write(path, render(table))
}
