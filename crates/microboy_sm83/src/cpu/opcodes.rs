//! Flat dispatch table for the base (unprefixed) opcode space.
//!
//! Every defined opcode gets a table row carrying its mnemonic and handler;
//! the 11 reserved holes are [`Op::Illegal`]. Handlers are plain function
//! pointers, so dispatch is a single indexed load.

use super::operand::{Addr, Cond, Src8, Target8};
use super::regs::{R16, R8};
use super::{Bus, Cpu};

pub(super) type OpFn = fn(&mut Cpu, &mut dyn Bus);

pub(super) enum Op {
    Exec(&'static str, OpFn),
    Illegal,
}

/// Mnemonic of a base-table opcode, or `None` for a reserved hole.
pub fn mnemonic(opcode: u8) -> Option<&'static str> {
    match OPCODES[opcode as usize] {
        Op::Exec(name, _) => Some(name),
        Op::Illegal => None,
    }
}

pub(super) static OPCODES: [Op; 256] = [
    // 0x00
    Op::Exec("NOP", |cpu, _| cpu.op_nop()),
    Op::Exec("LD BC,n16", |cpu, bus| cpu.op_ld_rr_nn(bus, R16::Bc)),
    Op::Exec("LD (BC),A", |cpu, bus| cpu.op_ld_mem_a(bus, Addr::Bc)),
    Op::Exec("INC BC", |cpu, bus| cpu.op_inc16(bus, R16::Bc)),
    Op::Exec("INC B", |cpu, bus| cpu.op_inc8(bus, Target8::Reg(R8::B))),
    Op::Exec("DEC B", |cpu, bus| cpu.op_dec8(bus, Target8::Reg(R8::B))),
    Op::Exec("LD B,n8", |cpu, bus| cpu.op_ld8(bus, Target8::Reg(R8::B), Src8::Imm)),
    Op::Exec("RLCA", |cpu, _| cpu.op_rlca()),
    Op::Exec("LD (a16),SP", |cpu, bus| cpu.op_ld_nn_sp(bus)),
    Op::Exec("ADD HL,BC", |cpu, bus| cpu.op_add_hl_rr(bus, R16::Bc)),
    Op::Exec("LD A,(BC)", |cpu, bus| cpu.op_ld_a_mem(bus, Addr::Bc)),
    Op::Exec("DEC BC", |cpu, bus| cpu.op_dec16(bus, R16::Bc)),
    Op::Exec("INC C", |cpu, bus| cpu.op_inc8(bus, Target8::Reg(R8::C))),
    Op::Exec("DEC C", |cpu, bus| cpu.op_dec8(bus, Target8::Reg(R8::C))),
    Op::Exec("LD C,n8", |cpu, bus| cpu.op_ld8(bus, Target8::Reg(R8::C), Src8::Imm)),
    Op::Exec("RRCA", |cpu, _| cpu.op_rrca()),
    // 0x10
    Op::Exec("STOP", |cpu, _| cpu.op_stop()),
    Op::Exec("LD DE,n16", |cpu, bus| cpu.op_ld_rr_nn(bus, R16::De)),
    Op::Exec("LD (DE),A", |cpu, bus| cpu.op_ld_mem_a(bus, Addr::De)),
    Op::Exec("INC DE", |cpu, bus| cpu.op_inc16(bus, R16::De)),
    Op::Exec("INC D", |cpu, bus| cpu.op_inc8(bus, Target8::Reg(R8::D))),
    Op::Exec("DEC D", |cpu, bus| cpu.op_dec8(bus, Target8::Reg(R8::D))),
    Op::Exec("LD D,n8", |cpu, bus| cpu.op_ld8(bus, Target8::Reg(R8::D), Src8::Imm)),
    Op::Exec("RLA", |cpu, _| cpu.op_rla()),
    Op::Exec("JR e8", |cpu, bus| cpu.op_jr(bus)),
    Op::Exec("ADD HL,DE", |cpu, bus| cpu.op_add_hl_rr(bus, R16::De)),
    Op::Exec("LD A,(DE)", |cpu, bus| cpu.op_ld_a_mem(bus, Addr::De)),
    Op::Exec("DEC DE", |cpu, bus| cpu.op_dec16(bus, R16::De)),
    Op::Exec("INC E", |cpu, bus| cpu.op_inc8(bus, Target8::Reg(R8::E))),
    Op::Exec("DEC E", |cpu, bus| cpu.op_dec8(bus, Target8::Reg(R8::E))),
    Op::Exec("LD E,n8", |cpu, bus| cpu.op_ld8(bus, Target8::Reg(R8::E), Src8::Imm)),
    Op::Exec("RRA", |cpu, _| cpu.op_rra()),
    // 0x20
    Op::Exec("JR NZ,e8", |cpu, bus| cpu.op_jr_cc(bus, Cond::Nz)),
    Op::Exec("LD HL,n16", |cpu, bus| cpu.op_ld_rr_nn(bus, R16::Hl)),
    Op::Exec("LD (HL+),A", |cpu, bus| cpu.op_ld_mem_a(bus, Addr::HlInc)),
    Op::Exec("INC HL", |cpu, bus| cpu.op_inc16(bus, R16::Hl)),
    Op::Exec("INC H", |cpu, bus| cpu.op_inc8(bus, Target8::Reg(R8::H))),
    Op::Exec("DEC H", |cpu, bus| cpu.op_dec8(bus, Target8::Reg(R8::H))),
    Op::Exec("LD H,n8", |cpu, bus| cpu.op_ld8(bus, Target8::Reg(R8::H), Src8::Imm)),
    Op::Exec("DAA", |cpu, _| cpu.op_daa()),
    Op::Exec("JR Z,e8", |cpu, bus| cpu.op_jr_cc(bus, Cond::Z)),
    Op::Exec("ADD HL,HL", |cpu, bus| cpu.op_add_hl_rr(bus, R16::Hl)),
    Op::Exec("LD A,(HL+)", |cpu, bus| cpu.op_ld_a_mem(bus, Addr::HlInc)),
    Op::Exec("DEC HL", |cpu, bus| cpu.op_dec16(bus, R16::Hl)),
    Op::Exec("INC L", |cpu, bus| cpu.op_inc8(bus, Target8::Reg(R8::L))),
    Op::Exec("DEC L", |cpu, bus| cpu.op_dec8(bus, Target8::Reg(R8::L))),
    Op::Exec("LD L,n8", |cpu, bus| cpu.op_ld8(bus, Target8::Reg(R8::L), Src8::Imm)),
    Op::Exec("CPL", |cpu, _| cpu.op_cpl()),
    // 0x30
    Op::Exec("JR NC,e8", |cpu, bus| cpu.op_jr_cc(bus, Cond::Nc)),
    Op::Exec("LD SP,n16", |cpu, bus| cpu.op_ld_rr_nn(bus, R16::Sp)),
    Op::Exec("LD (HL-),A", |cpu, bus| cpu.op_ld_mem_a(bus, Addr::HlDec)),
    Op::Exec("INC SP", |cpu, bus| cpu.op_inc16(bus, R16::Sp)),
    Op::Exec("INC (HL)", |cpu, bus| cpu.op_inc8(bus, Target8::HlInd)),
    Op::Exec("DEC (HL)", |cpu, bus| cpu.op_dec8(bus, Target8::HlInd)),
    Op::Exec("LD (HL),n8", |cpu, bus| cpu.op_ld8(bus, Target8::HlInd, Src8::Imm)),
    Op::Exec("SCF", |cpu, _| cpu.op_scf()),
    Op::Exec("JR C,e8", |cpu, bus| cpu.op_jr_cc(bus, Cond::C)),
    Op::Exec("ADD HL,SP", |cpu, bus| cpu.op_add_hl_rr(bus, R16::Sp)),
    Op::Exec("LD A,(HL-)", |cpu, bus| cpu.op_ld_a_mem(bus, Addr::HlDec)),
    Op::Exec("DEC SP", |cpu, bus| cpu.op_dec16(bus, R16::Sp)),
    Op::Exec("INC A", |cpu, bus| cpu.op_inc8(bus, Target8::Reg(R8::A))),
    Op::Exec("DEC A", |cpu, bus| cpu.op_dec8(bus, Target8::Reg(R8::A))),
    Op::Exec("LD A,n8", |cpu, bus| cpu.op_ld8(bus, Target8::Reg(R8::A), Src8::Imm)),
    Op::Exec("CCF", |cpu, _| cpu.op_ccf()),
    // 0x40
    Op::Exec("LD B,B", |cpu, _| cpu.op_ld_r_r(R8::B, R8::B)),
    Op::Exec("LD B,C", |cpu, _| cpu.op_ld_r_r(R8::B, R8::C)),
    Op::Exec("LD B,D", |cpu, _| cpu.op_ld_r_r(R8::B, R8::D)),
    Op::Exec("LD B,E", |cpu, _| cpu.op_ld_r_r(R8::B, R8::E)),
    Op::Exec("LD B,H", |cpu, _| cpu.op_ld_r_r(R8::B, R8::H)),
    Op::Exec("LD B,L", |cpu, _| cpu.op_ld_r_r(R8::B, R8::L)),
    Op::Exec("LD B,(HL)", |cpu, bus| cpu.op_ld8(bus, Target8::Reg(R8::B), Src8::HlInd)),
    Op::Exec("LD B,A", |cpu, _| cpu.op_ld_r_r(R8::B, R8::A)),
    Op::Exec("LD C,B", |cpu, _| cpu.op_ld_r_r(R8::C, R8::B)),
    Op::Exec("LD C,C", |cpu, _| cpu.op_ld_r_r(R8::C, R8::C)),
    Op::Exec("LD C,D", |cpu, _| cpu.op_ld_r_r(R8::C, R8::D)),
    Op::Exec("LD C,E", |cpu, _| cpu.op_ld_r_r(R8::C, R8::E)),
    Op::Exec("LD C,H", |cpu, _| cpu.op_ld_r_r(R8::C, R8::H)),
    Op::Exec("LD C,L", |cpu, _| cpu.op_ld_r_r(R8::C, R8::L)),
    Op::Exec("LD C,(HL)", |cpu, bus| cpu.op_ld8(bus, Target8::Reg(R8::C), Src8::HlInd)),
    Op::Exec("LD C,A", |cpu, _| cpu.op_ld_r_r(R8::C, R8::A)),
    // 0x50
    Op::Exec("LD D,B", |cpu, _| cpu.op_ld_r_r(R8::D, R8::B)),
    Op::Exec("LD D,C", |cpu, _| cpu.op_ld_r_r(R8::D, R8::C)),
    Op::Exec("LD D,D", |cpu, _| cpu.op_ld_r_r(R8::D, R8::D)),
    Op::Exec("LD D,E", |cpu, _| cpu.op_ld_r_r(R8::D, R8::E)),
    Op::Exec("LD D,H", |cpu, _| cpu.op_ld_r_r(R8::D, R8::H)),
    Op::Exec("LD D,L", |cpu, _| cpu.op_ld_r_r(R8::D, R8::L)),
    Op::Exec("LD D,(HL)", |cpu, bus| cpu.op_ld8(bus, Target8::Reg(R8::D), Src8::HlInd)),
    Op::Exec("LD D,A", |cpu, _| cpu.op_ld_r_r(R8::D, R8::A)),
    Op::Exec("LD E,B", |cpu, _| cpu.op_ld_r_r(R8::E, R8::B)),
    Op::Exec("LD E,C", |cpu, _| cpu.op_ld_r_r(R8::E, R8::C)),
    Op::Exec("LD E,D", |cpu, _| cpu.op_ld_r_r(R8::E, R8::D)),
    Op::Exec("LD E,E", |cpu, _| cpu.op_ld_r_r(R8::E, R8::E)),
    Op::Exec("LD E,H", |cpu, _| cpu.op_ld_r_r(R8::E, R8::H)),
    Op::Exec("LD E,L", |cpu, _| cpu.op_ld_r_r(R8::E, R8::L)),
    Op::Exec("LD E,(HL)", |cpu, bus| cpu.op_ld8(bus, Target8::Reg(R8::E), Src8::HlInd)),
    Op::Exec("LD E,A", |cpu, _| cpu.op_ld_r_r(R8::E, R8::A)),
    // 0x60
    Op::Exec("LD H,B", |cpu, _| cpu.op_ld_r_r(R8::H, R8::B)),
    Op::Exec("LD H,C", |cpu, _| cpu.op_ld_r_r(R8::H, R8::C)),
    Op::Exec("LD H,D", |cpu, _| cpu.op_ld_r_r(R8::H, R8::D)),
    Op::Exec("LD H,E", |cpu, _| cpu.op_ld_r_r(R8::H, R8::E)),
    Op::Exec("LD H,H", |cpu, _| cpu.op_ld_r_r(R8::H, R8::H)),
    Op::Exec("LD H,L", |cpu, _| cpu.op_ld_r_r(R8::H, R8::L)),
    Op::Exec("LD H,(HL)", |cpu, bus| cpu.op_ld8(bus, Target8::Reg(R8::H), Src8::HlInd)),
    Op::Exec("LD H,A", |cpu, _| cpu.op_ld_r_r(R8::H, R8::A)),
    Op::Exec("LD L,B", |cpu, _| cpu.op_ld_r_r(R8::L, R8::B)),
    Op::Exec("LD L,C", |cpu, _| cpu.op_ld_r_r(R8::L, R8::C)),
    Op::Exec("LD L,D", |cpu, _| cpu.op_ld_r_r(R8::L, R8::D)),
    Op::Exec("LD L,E", |cpu, _| cpu.op_ld_r_r(R8::L, R8::E)),
    Op::Exec("LD L,H", |cpu, _| cpu.op_ld_r_r(R8::L, R8::H)),
    Op::Exec("LD L,L", |cpu, _| cpu.op_ld_r_r(R8::L, R8::L)),
    Op::Exec("LD L,(HL)", |cpu, bus| cpu.op_ld8(bus, Target8::Reg(R8::L), Src8::HlInd)),
    Op::Exec("LD L,A", |cpu, _| cpu.op_ld_r_r(R8::L, R8::A)),
    // 0x70
    Op::Exec("LD (HL),B", |cpu, bus| cpu.op_ld8(bus, Target8::HlInd, Src8::Reg(R8::B))),
    Op::Exec("LD (HL),C", |cpu, bus| cpu.op_ld8(bus, Target8::HlInd, Src8::Reg(R8::C))),
    Op::Exec("LD (HL),D", |cpu, bus| cpu.op_ld8(bus, Target8::HlInd, Src8::Reg(R8::D))),
    Op::Exec("LD (HL),E", |cpu, bus| cpu.op_ld8(bus, Target8::HlInd, Src8::Reg(R8::E))),
    Op::Exec("LD (HL),H", |cpu, bus| cpu.op_ld8(bus, Target8::HlInd, Src8::Reg(R8::H))),
    Op::Exec("LD (HL),L", |cpu, bus| cpu.op_ld8(bus, Target8::HlInd, Src8::Reg(R8::L))),
    Op::Exec("HALT", |cpu, _| cpu.op_halt()),
    Op::Exec("LD (HL),A", |cpu, bus| cpu.op_ld8(bus, Target8::HlInd, Src8::Reg(R8::A))),
    Op::Exec("LD A,B", |cpu, _| cpu.op_ld_r_r(R8::A, R8::B)),
    Op::Exec("LD A,C", |cpu, _| cpu.op_ld_r_r(R8::A, R8::C)),
    Op::Exec("LD A,D", |cpu, _| cpu.op_ld_r_r(R8::A, R8::D)),
    Op::Exec("LD A,E", |cpu, _| cpu.op_ld_r_r(R8::A, R8::E)),
    Op::Exec("LD A,H", |cpu, _| cpu.op_ld_r_r(R8::A, R8::H)),
    Op::Exec("LD A,L", |cpu, _| cpu.op_ld_r_r(R8::A, R8::L)),
    Op::Exec("LD A,(HL)", |cpu, bus| cpu.op_ld8(bus, Target8::Reg(R8::A), Src8::HlInd)),
    Op::Exec("LD A,A", |cpu, _| cpu.op_ld_r_r(R8::A, R8::A)),
    // 0x80
    Op::Exec("ADD A,B", |cpu, bus| cpu.op_add_a(bus, Src8::Reg(R8::B), false)),
    Op::Exec("ADD A,C", |cpu, bus| cpu.op_add_a(bus, Src8::Reg(R8::C), false)),
    Op::Exec("ADD A,D", |cpu, bus| cpu.op_add_a(bus, Src8::Reg(R8::D), false)),
    Op::Exec("ADD A,E", |cpu, bus| cpu.op_add_a(bus, Src8::Reg(R8::E), false)),
    Op::Exec("ADD A,H", |cpu, bus| cpu.op_add_a(bus, Src8::Reg(R8::H), false)),
    Op::Exec("ADD A,L", |cpu, bus| cpu.op_add_a(bus, Src8::Reg(R8::L), false)),
    Op::Exec("ADD A,(HL)", |cpu, bus| cpu.op_add_a(bus, Src8::HlInd, false)),
    Op::Exec("ADD A,A", |cpu, bus| cpu.op_add_a(bus, Src8::Reg(R8::A), false)),
    Op::Exec("ADC A,B", |cpu, bus| cpu.op_add_a(bus, Src8::Reg(R8::B), true)),
    Op::Exec("ADC A,C", |cpu, bus| cpu.op_add_a(bus, Src8::Reg(R8::C), true)),
    Op::Exec("ADC A,D", |cpu, bus| cpu.op_add_a(bus, Src8::Reg(R8::D), true)),
    Op::Exec("ADC A,E", |cpu, bus| cpu.op_add_a(bus, Src8::Reg(R8::E), true)),
    Op::Exec("ADC A,H", |cpu, bus| cpu.op_add_a(bus, Src8::Reg(R8::H), true)),
    Op::Exec("ADC A,L", |cpu, bus| cpu.op_add_a(bus, Src8::Reg(R8::L), true)),
    Op::Exec("ADC A,(HL)", |cpu, bus| cpu.op_add_a(bus, Src8::HlInd, true)),
    Op::Exec("ADC A,A", |cpu, bus| cpu.op_add_a(bus, Src8::Reg(R8::A), true)),
    // 0x90
    Op::Exec("SUB A,B", |cpu, bus| cpu.op_sub_a(bus, Src8::Reg(R8::B), false)),
    Op::Exec("SUB A,C", |cpu, bus| cpu.op_sub_a(bus, Src8::Reg(R8::C), false)),
    Op::Exec("SUB A,D", |cpu, bus| cpu.op_sub_a(bus, Src8::Reg(R8::D), false)),
    Op::Exec("SUB A,E", |cpu, bus| cpu.op_sub_a(bus, Src8::Reg(R8::E), false)),
    Op::Exec("SUB A,H", |cpu, bus| cpu.op_sub_a(bus, Src8::Reg(R8::H), false)),
    Op::Exec("SUB A,L", |cpu, bus| cpu.op_sub_a(bus, Src8::Reg(R8::L), false)),
    Op::Exec("SUB A,(HL)", |cpu, bus| cpu.op_sub_a(bus, Src8::HlInd, false)),
    Op::Exec("SUB A,A", |cpu, bus| cpu.op_sub_a(bus, Src8::Reg(R8::A), false)),
    Op::Exec("SBC A,B", |cpu, bus| cpu.op_sub_a(bus, Src8::Reg(R8::B), true)),
    Op::Exec("SBC A,C", |cpu, bus| cpu.op_sub_a(bus, Src8::Reg(R8::C), true)),
    Op::Exec("SBC A,D", |cpu, bus| cpu.op_sub_a(bus, Src8::Reg(R8::D), true)),
    Op::Exec("SBC A,E", |cpu, bus| cpu.op_sub_a(bus, Src8::Reg(R8::E), true)),
    Op::Exec("SBC A,H", |cpu, bus| cpu.op_sub_a(bus, Src8::Reg(R8::H), true)),
    Op::Exec("SBC A,L", |cpu, bus| cpu.op_sub_a(bus, Src8::Reg(R8::L), true)),
    Op::Exec("SBC A,(HL)", |cpu, bus| cpu.op_sub_a(bus, Src8::HlInd, true)),
    Op::Exec("SBC A,A", |cpu, bus| cpu.op_sub_a(bus, Src8::Reg(R8::A), true)),
    // 0xA0
    Op::Exec("AND A,B", |cpu, bus| cpu.op_and_a(bus, Src8::Reg(R8::B))),
    Op::Exec("AND A,C", |cpu, bus| cpu.op_and_a(bus, Src8::Reg(R8::C))),
    Op::Exec("AND A,D", |cpu, bus| cpu.op_and_a(bus, Src8::Reg(R8::D))),
    Op::Exec("AND A,E", |cpu, bus| cpu.op_and_a(bus, Src8::Reg(R8::E))),
    Op::Exec("AND A,H", |cpu, bus| cpu.op_and_a(bus, Src8::Reg(R8::H))),
    Op::Exec("AND A,L", |cpu, bus| cpu.op_and_a(bus, Src8::Reg(R8::L))),
    Op::Exec("AND A,(HL)", |cpu, bus| cpu.op_and_a(bus, Src8::HlInd)),
    Op::Exec("AND A,A", |cpu, bus| cpu.op_and_a(bus, Src8::Reg(R8::A))),
    Op::Exec("XOR A,B", |cpu, bus| cpu.op_xor_a(bus, Src8::Reg(R8::B))),
    Op::Exec("XOR A,C", |cpu, bus| cpu.op_xor_a(bus, Src8::Reg(R8::C))),
    Op::Exec("XOR A,D", |cpu, bus| cpu.op_xor_a(bus, Src8::Reg(R8::D))),
    Op::Exec("XOR A,E", |cpu, bus| cpu.op_xor_a(bus, Src8::Reg(R8::E))),
    Op::Exec("XOR A,H", |cpu, bus| cpu.op_xor_a(bus, Src8::Reg(R8::H))),
    Op::Exec("XOR A,L", |cpu, bus| cpu.op_xor_a(bus, Src8::Reg(R8::L))),
    Op::Exec("XOR A,(HL)", |cpu, bus| cpu.op_xor_a(bus, Src8::HlInd)),
    Op::Exec("XOR A,A", |cpu, bus| cpu.op_xor_a(bus, Src8::Reg(R8::A))),
    // 0xB0
    Op::Exec("OR A,B", |cpu, bus| cpu.op_or_a(bus, Src8::Reg(R8::B))),
    Op::Exec("OR A,C", |cpu, bus| cpu.op_or_a(bus, Src8::Reg(R8::C))),
    Op::Exec("OR A,D", |cpu, bus| cpu.op_or_a(bus, Src8::Reg(R8::D))),
    Op::Exec("OR A,E", |cpu, bus| cpu.op_or_a(bus, Src8::Reg(R8::E))),
    Op::Exec("OR A,H", |cpu, bus| cpu.op_or_a(bus, Src8::Reg(R8::H))),
    Op::Exec("OR A,L", |cpu, bus| cpu.op_or_a(bus, Src8::Reg(R8::L))),
    Op::Exec("OR A,(HL)", |cpu, bus| cpu.op_or_a(bus, Src8::HlInd)),
    Op::Exec("OR A,A", |cpu, bus| cpu.op_or_a(bus, Src8::Reg(R8::A))),
    Op::Exec("CP A,B", |cpu, bus| cpu.op_cp_a(bus, Src8::Reg(R8::B))),
    Op::Exec("CP A,C", |cpu, bus| cpu.op_cp_a(bus, Src8::Reg(R8::C))),
    Op::Exec("CP A,D", |cpu, bus| cpu.op_cp_a(bus, Src8::Reg(R8::D))),
    Op::Exec("CP A,E", |cpu, bus| cpu.op_cp_a(bus, Src8::Reg(R8::E))),
    Op::Exec("CP A,H", |cpu, bus| cpu.op_cp_a(bus, Src8::Reg(R8::H))),
    Op::Exec("CP A,L", |cpu, bus| cpu.op_cp_a(bus, Src8::Reg(R8::L))),
    Op::Exec("CP A,(HL)", |cpu, bus| cpu.op_cp_a(bus, Src8::HlInd)),
    Op::Exec("CP A,A", |cpu, bus| cpu.op_cp_a(bus, Src8::Reg(R8::A))),
    // 0xC0
    Op::Exec("RET NZ", |cpu, bus| cpu.op_ret_cc(bus, Cond::Nz)),
    Op::Exec("POP BC", |cpu, bus| cpu.op_pop(bus, R16::Bc)),
    Op::Exec("JP NZ,a16", |cpu, bus| cpu.op_jp_cc(bus, Cond::Nz)),
    Op::Exec("JP a16", |cpu, bus| cpu.op_jp(bus)),
    Op::Exec("CALL NZ,a16", |cpu, bus| cpu.op_call_cc(bus, Cond::Nz)),
    Op::Exec("PUSH BC", |cpu, bus| cpu.op_push(bus, R16::Bc)),
    Op::Exec("ADD A,n8", |cpu, bus| cpu.op_add_a(bus, Src8::Imm, false)),
    Op::Exec("RST $00", |cpu, bus| cpu.op_rst(bus, 0x0000)),
    Op::Exec("RET Z", |cpu, bus| cpu.op_ret_cc(bus, Cond::Z)),
    Op::Exec("RET", |cpu, bus| cpu.op_ret(bus)),
    Op::Exec("JP Z,a16", |cpu, bus| cpu.op_jp_cc(bus, Cond::Z)),
    Op::Exec("PREFIX", |cpu, bus| cpu.op_prefix_cb(bus)),
    Op::Exec("CALL Z,a16", |cpu, bus| cpu.op_call_cc(bus, Cond::Z)),
    Op::Exec("CALL a16", |cpu, bus| cpu.op_call(bus)),
    Op::Exec("ADC A,n8", |cpu, bus| cpu.op_add_a(bus, Src8::Imm, true)),
    Op::Exec("RST $08", |cpu, bus| cpu.op_rst(bus, 0x0008)),
    // 0xD0
    Op::Exec("RET NC", |cpu, bus| cpu.op_ret_cc(bus, Cond::Nc)),
    Op::Exec("POP DE", |cpu, bus| cpu.op_pop(bus, R16::De)),
    Op::Exec("JP NC,a16", |cpu, bus| cpu.op_jp_cc(bus, Cond::Nc)),
    Op::Illegal,
    Op::Exec("CALL NC,a16", |cpu, bus| cpu.op_call_cc(bus, Cond::Nc)),
    Op::Exec("PUSH DE", |cpu, bus| cpu.op_push(bus, R16::De)),
    Op::Exec("SUB A,n8", |cpu, bus| cpu.op_sub_a(bus, Src8::Imm, false)),
    Op::Exec("RST $10", |cpu, bus| cpu.op_rst(bus, 0x0010)),
    Op::Exec("RET C", |cpu, bus| cpu.op_ret_cc(bus, Cond::C)),
    Op::Exec("RETI", |cpu, bus| cpu.op_reti(bus)),
    Op::Exec("JP C,a16", |cpu, bus| cpu.op_jp_cc(bus, Cond::C)),
    Op::Illegal,
    Op::Exec("CALL C,a16", |cpu, bus| cpu.op_call_cc(bus, Cond::C)),
    Op::Illegal,
    Op::Exec("SBC A,n8", |cpu, bus| cpu.op_sub_a(bus, Src8::Imm, true)),
    Op::Exec("RST $18", |cpu, bus| cpu.op_rst(bus, 0x0018)),
    // 0xE0
    Op::Exec("LDH (a8),A", |cpu, bus| cpu.op_ld_mem_a(bus, Addr::HighImm)),
    Op::Exec("POP HL", |cpu, bus| cpu.op_pop(bus, R16::Hl)),
    Op::Exec("LDH (C),A", |cpu, bus| cpu.op_ld_mem_a(bus, Addr::HighC)),
    Op::Illegal,
    Op::Illegal,
    Op::Exec("PUSH HL", |cpu, bus| cpu.op_push(bus, R16::Hl)),
    Op::Exec("AND A,n8", |cpu, bus| cpu.op_and_a(bus, Src8::Imm)),
    Op::Exec("RST $20", |cpu, bus| cpu.op_rst(bus, 0x0020)),
    Op::Exec("ADD SP,e8", |cpu, bus| cpu.op_add_sp_e8(bus)),
    Op::Exec("JP HL", |cpu, _| cpu.op_jp_hl()),
    Op::Exec("LD (a16),A", |cpu, bus| cpu.op_ld_mem_a(bus, Addr::Abs)),
    Op::Illegal,
    Op::Illegal,
    Op::Illegal,
    Op::Exec("XOR A,n8", |cpu, bus| cpu.op_xor_a(bus, Src8::Imm)),
    Op::Exec("RST $28", |cpu, bus| cpu.op_rst(bus, 0x0028)),
    // 0xF0
    Op::Exec("LDH A,(a8)", |cpu, bus| cpu.op_ld_a_mem(bus, Addr::HighImm)),
    Op::Exec("POP AF", |cpu, bus| cpu.op_pop(bus, R16::Af)),
    Op::Exec("LDH A,(C)", |cpu, bus| cpu.op_ld_a_mem(bus, Addr::HighC)),
    Op::Exec("DI", |cpu, _| cpu.op_di()),
    Op::Illegal,
    Op::Exec("PUSH AF", |cpu, bus| cpu.op_push(bus, R16::Af)),
    Op::Exec("OR A,n8", |cpu, bus| cpu.op_or_a(bus, Src8::Imm)),
    Op::Exec("RST $30", |cpu, bus| cpu.op_rst(bus, 0x0030)),
    Op::Exec("LD HL,SP+e8", |cpu, bus| cpu.op_ld_hl_sp_e8(bus)),
    Op::Exec("LD SP,HL", |cpu, bus| cpu.op_ld_sp_hl(bus)),
    Op::Exec("LD A,(a16)", |cpu, bus| cpu.op_ld_a_mem(bus, Addr::Abs)),
    Op::Exec("EI", |cpu, _| cpu.op_ei()),
    Op::Illegal,
    Op::Illegal,
    Op::Exec("CP A,n8", |cpu, bus| cpu.op_cp_a(bus, Src8::Imm)),
    Op::Exec("RST $38", |cpu, bus| cpu.op_rst(bus, 0x0038)),
];
