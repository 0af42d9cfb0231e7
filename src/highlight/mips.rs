//! Built-in MIPS instruction, directive and register tables

/// Machine instructions and assembler pseudo-instructions
pub const OPERATIONS: &[&str] = &[
    // Arithmetic and logic
    "ADD", "ADDU", "ADDI", "ADDIU", "SUB", "SUBU", "AND", "ANDI", "OR", "ORI", "XOR", "XORI",
    "NOR", "LUI", "SLT", "SLTU", "SLTI", "SLTIU", "CLO", "CLZ", "MOVN", "MOVZ",
    // Shifts
    "SLL", "SLLV", "SRL", "SRLV", "SRA", "SRAV",
    // Multiply and divide
    "MULT", "MULTU", "DIV", "DIVU", "MUL", "MADD", "MADDU", "MSUB", "MSUBU",
    "MFHI", "MFLO", "MTHI", "MTLO",
    // Branches and jumps
    "BEQ", "BNE", "BGEZ", "BGEZAL", "BGTZ", "BLEZ", "BLTZ", "BLTZAL", "BEQL", "BNEL",
    "J", "JAL", "JR", "JALR",
    // Loads and stores
    "LB", "LBU", "LH", "LHU", "LW", "LWL", "LWR", "SB", "SH", "SW", "SWL", "SWR", "LL", "SC",
    // Traps
    "TEQ", "TEQI", "TNE", "TNEI", "TGE", "TGEU", "TGEI", "TGEIU", "TLT", "TLTU", "TLTI", "TLTIU",
    // System
    "SYSCALL", "BREAK", "ERET", "NOP", "SSNOP", "SYNC", "WAIT", "CACHE", "PREF",
    "MFC0", "MTC0", "TLBP", "TLBR", "TLBWI", "TLBWR",
    // Pseudo-instructions
    "LI", "LA", "MOVE", "NEG", "NEGU", "NOT", "ABS", "B", "BAL", "BEQZ", "BNEZ",
    "BGE", "BGEU", "BGT", "BGTU", "BLE", "BLEU", "BLT", "BLTU",
    "SEQ", "SNE", "SGE", "SGEU", "SGT", "SGTU", "SLE", "SLEU",
    "REM", "REMU", "ROL", "ROR", "ULW", "USW",
];

/// Assembler directives, without their leading `.`
pub const DIRECTIVES: &[&str] = &[
    "ALIGN", "ASCII", "ASCIIZ", "BYTE", "HALF", "WORD", "DWORD", "FLOAT", "DOUBLE", "SPACE",
    "DATA", "TEXT", "KDATA", "KTEXT", "GLOBL", "EXTERN", "ORG", "SET", "EQU",
];

/// General-purpose registers in ordinal order; `$0` is `ZERO`
pub const REGISTERS: &[&str] = &[
    "ZERO", "AT", "V0", "V1", "A0", "A1", "A2", "A3",
    "T0", "T1", "T2", "T3", "T4", "T5", "T6", "T7",
    "S0", "S1", "S2", "S3", "S4", "S5", "S6", "S7",
    "T8", "T9", "K0", "K1", "GP", "SP", "FP", "RA",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_register_count() {
        assert_eq!(REGISTERS.len(), 32);
        assert_eq!(REGISTERS[29], "SP");
        assert_eq!(REGISTERS[31], "RA");
    }

    #[test]
    fn test_tables_are_unique_when_folded() {
        for table in [OPERATIONS, DIRECTIVES, REGISTERS] {
            let folded: HashSet<String> = table.iter().map(|name| name.to_ascii_uppercase()).collect();
            assert_eq!(folded.len(), table.len());
        }
    }
}
