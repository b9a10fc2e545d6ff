//! Dispatch table and handlers for the CB-prefixed opcode space.
//!
//! Unlike the base table this one is total; every byte after a CB prefix is a
//! defined rotate/shift/bit operation.

use super::opcodes::Op;
use super::operand::Target8;
use super::regs::R8;
use super::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_cb(&mut self, bus: &mut dyn Bus, opcode: u8) {
        match CB_OPCODES[opcode as usize] {
            Op::Exec(_, f) => f(self, bus),
            // The CB table has no holes.
            Op::Illegal => unreachable!(),
        }
    }

    fn cb_rlc(&mut self, bus: &mut dyn Bus, target: Target8) {
        let value = self.read_target8(bus, target);
        let result = self.alu_rlc(value);
        self.write_target8(bus, target, result);
    }

    fn cb_rrc(&mut self, bus: &mut dyn Bus, target: Target8) {
        let value = self.read_target8(bus, target);
        let result = self.alu_rrc(value);
        self.write_target8(bus, target, result);
    }

    fn cb_rl(&mut self, bus: &mut dyn Bus, target: Target8) {
        let value = self.read_target8(bus, target);
        let result = self.alu_rl(value);
        self.write_target8(bus, target, result);
    }

    fn cb_rr(&mut self, bus: &mut dyn Bus, target: Target8) {
        let value = self.read_target8(bus, target);
        let result = self.alu_rr(value);
        self.write_target8(bus, target, result);
    }

    fn cb_sla(&mut self, bus: &mut dyn Bus, target: Target8) {
        let value = self.read_target8(bus, target);
        let result = self.alu_sla(value);
        self.write_target8(bus, target, result);
    }

    fn cb_sra(&mut self, bus: &mut dyn Bus, target: Target8) {
        let value = self.read_target8(bus, target);
        let result = self.alu_sra(value);
        self.write_target8(bus, target, result);
    }

    fn cb_swap(&mut self, bus: &mut dyn Bus, target: Target8) {
        let value = self.read_target8(bus, target);
        let result = self.alu_swap(value);
        self.write_target8(bus, target, result);
    }

    fn cb_srl(&mut self, bus: &mut dyn Bus, target: Target8) {
        let value = self.read_target8(bus, target);
        let result = self.alu_srl(value);
        self.write_target8(bus, target, result);
    }

    /// BIT is read-only, so the (HL) form costs one data access, not two.
    fn cb_bit(&mut self, bus: &mut dyn Bus, bit: u8, target: Target8) {
        let value = self.read_target8(bus, target);
        self.alu_bit(bit, value);
    }

    fn cb_res(&mut self, bus: &mut dyn Bus, bit: u8, target: Target8) {
        let value = self.read_target8(bus, target);
        self.write_target8(bus, target, value & !(1 << bit));
    }

    fn cb_set(&mut self, bus: &mut dyn Bus, bit: u8, target: Target8) {
        let value = self.read_target8(bus, target);
        self.write_target8(bus, target, value | (1 << bit));
    }
}

/// Mnemonic of a CB-prefixed opcode. Total, since the CB space has no holes.
pub fn cb_mnemonic(opcode: u8) -> &'static str {
    match CB_OPCODES[opcode as usize] {
        Op::Exec(name, _) => name,
        Op::Illegal => unreachable!(),
    }
}

static CB_OPCODES: [Op; 256] = [
    // 0x00
    Op::Exec("RLC B", |cpu, bus| cpu.cb_rlc(bus, Target8::Reg(R8::B))),
    Op::Exec("RLC C", |cpu, bus| cpu.cb_rlc(bus, Target8::Reg(R8::C))),
    Op::Exec("RLC D", |cpu, bus| cpu.cb_rlc(bus, Target8::Reg(R8::D))),
    Op::Exec("RLC E", |cpu, bus| cpu.cb_rlc(bus, Target8::Reg(R8::E))),
    Op::Exec("RLC H", |cpu, bus| cpu.cb_rlc(bus, Target8::Reg(R8::H))),
    Op::Exec("RLC L", |cpu, bus| cpu.cb_rlc(bus, Target8::Reg(R8::L))),
    Op::Exec("RLC (HL)", |cpu, bus| cpu.cb_rlc(bus, Target8::HlInd)),
    Op::Exec("RLC A", |cpu, bus| cpu.cb_rlc(bus, Target8::Reg(R8::A))),
    Op::Exec("RRC B", |cpu, bus| cpu.cb_rrc(bus, Target8::Reg(R8::B))),
    Op::Exec("RRC C", |cpu, bus| cpu.cb_rrc(bus, Target8::Reg(R8::C))),
    Op::Exec("RRC D", |cpu, bus| cpu.cb_rrc(bus, Target8::Reg(R8::D))),
    Op::Exec("RRC E", |cpu, bus| cpu.cb_rrc(bus, Target8::Reg(R8::E))),
    Op::Exec("RRC H", |cpu, bus| cpu.cb_rrc(bus, Target8::Reg(R8::H))),
    Op::Exec("RRC L", |cpu, bus| cpu.cb_rrc(bus, Target8::Reg(R8::L))),
    Op::Exec("RRC (HL)", |cpu, bus| cpu.cb_rrc(bus, Target8::HlInd)),
    Op::Exec("RRC A", |cpu, bus| cpu.cb_rrc(bus, Target8::Reg(R8::A))),
    // 0x10
    Op::Exec("RL B", |cpu, bus| cpu.cb_rl(bus, Target8::Reg(R8::B))),
    Op::Exec("RL C", |cpu, bus| cpu.cb_rl(bus, Target8::Reg(R8::C))),
    Op::Exec("RL D", |cpu, bus| cpu.cb_rl(bus, Target8::Reg(R8::D))),
    Op::Exec("RL E", |cpu, bus| cpu.cb_rl(bus, Target8::Reg(R8::E))),
    Op::Exec("RL H", |cpu, bus| cpu.cb_rl(bus, Target8::Reg(R8::H))),
    Op::Exec("RL L", |cpu, bus| cpu.cb_rl(bus, Target8::Reg(R8::L))),
    Op::Exec("RL (HL)", |cpu, bus| cpu.cb_rl(bus, Target8::HlInd)),
    Op::Exec("RL A", |cpu, bus| cpu.cb_rl(bus, Target8::Reg(R8::A))),
    Op::Exec("RR B", |cpu, bus| cpu.cb_rr(bus, Target8::Reg(R8::B))),
    Op::Exec("RR C", |cpu, bus| cpu.cb_rr(bus, Target8::Reg(R8::C))),
    Op::Exec("RR D", |cpu, bus| cpu.cb_rr(bus, Target8::Reg(R8::D))),
    Op::Exec("RR E", |cpu, bus| cpu.cb_rr(bus, Target8::Reg(R8::E))),
    Op::Exec("RR H", |cpu, bus| cpu.cb_rr(bus, Target8::Reg(R8::H))),
    Op::Exec("RR L", |cpu, bus| cpu.cb_rr(bus, Target8::Reg(R8::L))),
    Op::Exec("RR (HL)", |cpu, bus| cpu.cb_rr(bus, Target8::HlInd)),
    Op::Exec("RR A", |cpu, bus| cpu.cb_rr(bus, Target8::Reg(R8::A))),
    // 0x20
    Op::Exec("SLA B", |cpu, bus| cpu.cb_sla(bus, Target8::Reg(R8::B))),
    Op::Exec("SLA C", |cpu, bus| cpu.cb_sla(bus, Target8::Reg(R8::C))),
    Op::Exec("SLA D", |cpu, bus| cpu.cb_sla(bus, Target8::Reg(R8::D))),
    Op::Exec("SLA E", |cpu, bus| cpu.cb_sla(bus, Target8::Reg(R8::E))),
    Op::Exec("SLA H", |cpu, bus| cpu.cb_sla(bus, Target8::Reg(R8::H))),
    Op::Exec("SLA L", |cpu, bus| cpu.cb_sla(bus, Target8::Reg(R8::L))),
    Op::Exec("SLA (HL)", |cpu, bus| cpu.cb_sla(bus, Target8::HlInd)),
    Op::Exec("SLA A", |cpu, bus| cpu.cb_sla(bus, Target8::Reg(R8::A))),
    Op::Exec("SRA B", |cpu, bus| cpu.cb_sra(bus, Target8::Reg(R8::B))),
    Op::Exec("SRA C", |cpu, bus| cpu.cb_sra(bus, Target8::Reg(R8::C))),
    Op::Exec("SRA D", |cpu, bus| cpu.cb_sra(bus, Target8::Reg(R8::D))),
    Op::Exec("SRA E", |cpu, bus| cpu.cb_sra(bus, Target8::Reg(R8::E))),
    Op::Exec("SRA H", |cpu, bus| cpu.cb_sra(bus, Target8::Reg(R8::H))),
    Op::Exec("SRA L", |cpu, bus| cpu.cb_sra(bus, Target8::Reg(R8::L))),
    Op::Exec("SRA (HL)", |cpu, bus| cpu.cb_sra(bus, Target8::HlInd)),
    Op::Exec("SRA A", |cpu, bus| cpu.cb_sra(bus, Target8::Reg(R8::A))),
    // 0x30
    Op::Exec("SWAP B", |cpu, bus| cpu.cb_swap(bus, Target8::Reg(R8::B))),
    Op::Exec("SWAP C", |cpu, bus| cpu.cb_swap(bus, Target8::Reg(R8::C))),
    Op::Exec("SWAP D", |cpu, bus| cpu.cb_swap(bus, Target8::Reg(R8::D))),
    Op::Exec("SWAP E", |cpu, bus| cpu.cb_swap(bus, Target8::Reg(R8::E))),
    Op::Exec("SWAP H", |cpu, bus| cpu.cb_swap(bus, Target8::Reg(R8::H))),
    Op::Exec("SWAP L", |cpu, bus| cpu.cb_swap(bus, Target8::Reg(R8::L))),
    Op::Exec("SWAP (HL)", |cpu, bus| cpu.cb_swap(bus, Target8::HlInd)),
    Op::Exec("SWAP A", |cpu, bus| cpu.cb_swap(bus, Target8::Reg(R8::A))),
    Op::Exec("SRL B", |cpu, bus| cpu.cb_srl(bus, Target8::Reg(R8::B))),
    Op::Exec("SRL C", |cpu, bus| cpu.cb_srl(bus, Target8::Reg(R8::C))),
    Op::Exec("SRL D", |cpu, bus| cpu.cb_srl(bus, Target8::Reg(R8::D))),
    Op::Exec("SRL E", |cpu, bus| cpu.cb_srl(bus, Target8::Reg(R8::E))),
    Op::Exec("SRL H", |cpu, bus| cpu.cb_srl(bus, Target8::Reg(R8::H))),
    Op::Exec("SRL L", |cpu, bus| cpu.cb_srl(bus, Target8::Reg(R8::L))),
    Op::Exec("SRL (HL)", |cpu, bus| cpu.cb_srl(bus, Target8::HlInd)),
    Op::Exec("SRL A", |cpu, bus| cpu.cb_srl(bus, Target8::Reg(R8::A))),
    // 0x40
    Op::Exec("BIT 0,B", |cpu, bus| cpu.cb_bit(bus, 0, Target8::Reg(R8::B))),
    Op::Exec("BIT 0,C", |cpu, bus| cpu.cb_bit(bus, 0, Target8::Reg(R8::C))),
    Op::Exec("BIT 0,D", |cpu, bus| cpu.cb_bit(bus, 0, Target8::Reg(R8::D))),
    Op::Exec("BIT 0,E", |cpu, bus| cpu.cb_bit(bus, 0, Target8::Reg(R8::E))),
    Op::Exec("BIT 0,H", |cpu, bus| cpu.cb_bit(bus, 0, Target8::Reg(R8::H))),
    Op::Exec("BIT 0,L", |cpu, bus| cpu.cb_bit(bus, 0, Target8::Reg(R8::L))),
    Op::Exec("BIT 0,(HL)", |cpu, bus| cpu.cb_bit(bus, 0, Target8::HlInd)),
    Op::Exec("BIT 0,A", |cpu, bus| cpu.cb_bit(bus, 0, Target8::Reg(R8::A))),
    Op::Exec("BIT 1,B", |cpu, bus| cpu.cb_bit(bus, 1, Target8::Reg(R8::B))),
    Op::Exec("BIT 1,C", |cpu, bus| cpu.cb_bit(bus, 1, Target8::Reg(R8::C))),
    Op::Exec("BIT 1,D", |cpu, bus| cpu.cb_bit(bus, 1, Target8::Reg(R8::D))),
    Op::Exec("BIT 1,E", |cpu, bus| cpu.cb_bit(bus, 1, Target8::Reg(R8::E))),
    Op::Exec("BIT 1,H", |cpu, bus| cpu.cb_bit(bus, 1, Target8::Reg(R8::H))),
    Op::Exec("BIT 1,L", |cpu, bus| cpu.cb_bit(bus, 1, Target8::Reg(R8::L))),
    Op::Exec("BIT 1,(HL)", |cpu, bus| cpu.cb_bit(bus, 1, Target8::HlInd)),
    Op::Exec("BIT 1,A", |cpu, bus| cpu.cb_bit(bus, 1, Target8::Reg(R8::A))),
    // 0x50
    Op::Exec("BIT 2,B", |cpu, bus| cpu.cb_bit(bus, 2, Target8::Reg(R8::B))),
    Op::Exec("BIT 2,C", |cpu, bus| cpu.cb_bit(bus, 2, Target8::Reg(R8::C))),
    Op::Exec("BIT 2,D", |cpu, bus| cpu.cb_bit(bus, 2, Target8::Reg(R8::D))),
    Op::Exec("BIT 2,E", |cpu, bus| cpu.cb_bit(bus, 2, Target8::Reg(R8::E))),
    Op::Exec("BIT 2,H", |cpu, bus| cpu.cb_bit(bus, 2, Target8::Reg(R8::H))),
    Op::Exec("BIT 2,L", |cpu, bus| cpu.cb_bit(bus, 2, Target8::Reg(R8::L))),
    Op::Exec("BIT 2,(HL)", |cpu, bus| cpu.cb_bit(bus, 2, Target8::HlInd)),
    Op::Exec("BIT 2,A", |cpu, bus| cpu.cb_bit(bus, 2, Target8::Reg(R8::A))),
    Op::Exec("BIT 3,B", |cpu, bus| cpu.cb_bit(bus, 3, Target8::Reg(R8::B))),
    Op::Exec("BIT 3,C", |cpu, bus| cpu.cb_bit(bus, 3, Target8::Reg(R8::C))),
    Op::Exec("BIT 3,D", |cpu, bus| cpu.cb_bit(bus, 3, Target8::Reg(R8::D))),
    Op::Exec("BIT 3,E", |cpu, bus| cpu.cb_bit(bus, 3, Target8::Reg(R8::E))),
    Op::Exec("BIT 3,H", |cpu, bus| cpu.cb_bit(bus, 3, Target8::Reg(R8::H))),
    Op::Exec("BIT 3,L", |cpu, bus| cpu.cb_bit(bus, 3, Target8::Reg(R8::L))),
    Op::Exec("BIT 3,(HL)", |cpu, bus| cpu.cb_bit(bus, 3, Target8::HlInd)),
    Op::Exec("BIT 3,A", |cpu, bus| cpu.cb_bit(bus, 3, Target8::Reg(R8::A))),
    // 0x60
    Op::Exec("BIT 4,B", |cpu, bus| cpu.cb_bit(bus, 4, Target8::Reg(R8::B))),
    Op::Exec("BIT 4,C", |cpu, bus| cpu.cb_bit(bus, 4, Target8::Reg(R8::C))),
    Op::Exec("BIT 4,D", |cpu, bus| cpu.cb_bit(bus, 4, Target8::Reg(R8::D))),
    Op::Exec("BIT 4,E", |cpu, bus| cpu.cb_bit(bus, 4, Target8::Reg(R8::E))),
    Op::Exec("BIT 4,H", |cpu, bus| cpu.cb_bit(bus, 4, Target8::Reg(R8::H))),
    Op::Exec("BIT 4,L", |cpu, bus| cpu.cb_bit(bus, 4, Target8::Reg(R8::L))),
    Op::Exec("BIT 4,(HL)", |cpu, bus| cpu.cb_bit(bus, 4, Target8::HlInd)),
    Op::Exec("BIT 4,A", |cpu, bus| cpu.cb_bit(bus, 4, Target8::Reg(R8::A))),
    Op::Exec("BIT 5,B", |cpu, bus| cpu.cb_bit(bus, 5, Target8::Reg(R8::B))),
    Op::Exec("BIT 5,C", |cpu, bus| cpu.cb_bit(bus, 5, Target8::Reg(R8::C))),
    Op::Exec("BIT 5,D", |cpu, bus| cpu.cb_bit(bus, 5, Target8::Reg(R8::D))),
    Op::Exec("BIT 5,E", |cpu, bus| cpu.cb_bit(bus, 5, Target8::Reg(R8::E))),
    Op::Exec("BIT 5,H", |cpu, bus| cpu.cb_bit(bus, 5, Target8::Reg(R8::H))),
    Op::Exec("BIT 5,L", |cpu, bus| cpu.cb_bit(bus, 5, Target8::Reg(R8::L))),
    Op::Exec("BIT 5,(HL)", |cpu, bus| cpu.cb_bit(bus, 5, Target8::HlInd)),
    Op::Exec("BIT 5,A", |cpu, bus| cpu.cb_bit(bus, 5, Target8::Reg(R8::A))),
    // 0x70
    Op::Exec("BIT 6,B", |cpu, bus| cpu.cb_bit(bus, 6, Target8::Reg(R8::B))),
    Op::Exec("BIT 6,C", |cpu, bus| cpu.cb_bit(bus, 6, Target8::Reg(R8::C))),
    Op::Exec("BIT 6,D", |cpu, bus| cpu.cb_bit(bus, 6, Target8::Reg(R8::D))),
    Op::Exec("BIT 6,E", |cpu, bus| cpu.cb_bit(bus, 6, Target8::Reg(R8::E))),
    Op::Exec("BIT 6,H", |cpu, bus| cpu.cb_bit(bus, 6, Target8::Reg(R8::H))),
    Op::Exec("BIT 6,L", |cpu, bus| cpu.cb_bit(bus, 6, Target8::Reg(R8::L))),
    Op::Exec("BIT 6,(HL)", |cpu, bus| cpu.cb_bit(bus, 6, Target8::HlInd)),
    Op::Exec("BIT 6,A", |cpu, bus| cpu.cb_bit(bus, 6, Target8::Reg(R8::A))),
    Op::Exec("BIT 7,B", |cpu, bus| cpu.cb_bit(bus, 7, Target8::Reg(R8::B))),
    Op::Exec("BIT 7,C", |cpu, bus| cpu.cb_bit(bus, 7, Target8::Reg(R8::C))),
    Op::Exec("BIT 7,D", |cpu, bus| cpu.cb_bit(bus, 7, Target8::Reg(R8::D))),
    Op::Exec("BIT 7,E", |cpu, bus| cpu.cb_bit(bus, 7, Target8::Reg(R8::E))),
    Op::Exec("BIT 7,H", |cpu, bus| cpu.cb_bit(bus, 7, Target8::Reg(R8::H))),
    Op::Exec("BIT 7,L", |cpu, bus| cpu.cb_bit(bus, 7, Target8::Reg(R8::L))),
    Op::Exec("BIT 7,(HL)", |cpu, bus| cpu.cb_bit(bus, 7, Target8::HlInd)),
    Op::Exec("BIT 7,A", |cpu, bus| cpu.cb_bit(bus, 7, Target8::Reg(R8::A))),
    // 0x80
    Op::Exec("RES 0,B", |cpu, bus| cpu.cb_res(bus, 0, Target8::Reg(R8::B))),
    Op::Exec("RES 0,C", |cpu, bus| cpu.cb_res(bus, 0, Target8::Reg(R8::C))),
    Op::Exec("RES 0,D", |cpu, bus| cpu.cb_res(bus, 0, Target8::Reg(R8::D))),
    Op::Exec("RES 0,E", |cpu, bus| cpu.cb_res(bus, 0, Target8::Reg(R8::E))),
    Op::Exec("RES 0,H", |cpu, bus| cpu.cb_res(bus, 0, Target8::Reg(R8::H))),
    Op::Exec("RES 0,L", |cpu, bus| cpu.cb_res(bus, 0, Target8::Reg(R8::L))),
    Op::Exec("RES 0,(HL)", |cpu, bus| cpu.cb_res(bus, 0, Target8::HlInd)),
    Op::Exec("RES 0,A", |cpu, bus| cpu.cb_res(bus, 0, Target8::Reg(R8::A))),
    Op::Exec("RES 1,B", |cpu, bus| cpu.cb_res(bus, 1, Target8::Reg(R8::B))),
    Op::Exec("RES 1,C", |cpu, bus| cpu.cb_res(bus, 1, Target8::Reg(R8::C))),
    Op::Exec("RES 1,D", |cpu, bus| cpu.cb_res(bus, 1, Target8::Reg(R8::D))),
    Op::Exec("RES 1,E", |cpu, bus| cpu.cb_res(bus, 1, Target8::Reg(R8::E))),
    Op::Exec("RES 1,H", |cpu, bus| cpu.cb_res(bus, 1, Target8::Reg(R8::H))),
    Op::Exec("RES 1,L", |cpu, bus| cpu.cb_res(bus, 1, Target8::Reg(R8::L))),
    Op::Exec("RES 1,(HL)", |cpu, bus| cpu.cb_res(bus, 1, Target8::HlInd)),
    Op::Exec("RES 1,A", |cpu, bus| cpu.cb_res(bus, 1, Target8::Reg(R8::A))),
    // 0x90
    Op::Exec("RES 2,B", |cpu, bus| cpu.cb_res(bus, 2, Target8::Reg(R8::B))),
    Op::Exec("RES 2,C", |cpu, bus| cpu.cb_res(bus, 2, Target8::Reg(R8::C))),
    Op::Exec("RES 2,D", |cpu, bus| cpu.cb_res(bus, 2, Target8::Reg(R8::D))),
    Op::Exec("RES 2,E", |cpu, bus| cpu.cb_res(bus, 2, Target8::Reg(R8::E))),
    Op::Exec("RES 2,H", |cpu, bus| cpu.cb_res(bus, 2, Target8::Reg(R8::H))),
    Op::Exec("RES 2,L", |cpu, bus| cpu.cb_res(bus, 2, Target8::Reg(R8::L))),
    Op::Exec("RES 2,(HL)", |cpu, bus| cpu.cb_res(bus, 2, Target8::HlInd)),
    Op::Exec("RES 2,A", |cpu, bus| cpu.cb_res(bus, 2, Target8::Reg(R8::A))),
    Op::Exec("RES 3,B", |cpu, bus| cpu.cb_res(bus, 3, Target8::Reg(R8::B))),
    Op::Exec("RES 3,C", |cpu, bus| cpu.cb_res(bus, 3, Target8::Reg(R8::C))),
    Op::Exec("RES 3,D", |cpu, bus| cpu.cb_res(bus, 3, Target8::Reg(R8::D))),
    Op::Exec("RES 3,E", |cpu, bus| cpu.cb_res(bus, 3, Target8::Reg(R8::E))),
    Op::Exec("RES 3,H", |cpu, bus| cpu.cb_res(bus, 3, Target8::Reg(R8::H))),
    Op::Exec("RES 3,L", |cpu, bus| cpu.cb_res(bus, 3, Target8::Reg(R8::L))),
    Op::Exec("RES 3,(HL)", |cpu, bus| cpu.cb_res(bus, 3, Target8::HlInd)),
    Op::Exec("RES 3,A", |cpu, bus| cpu.cb_res(bus, 3, Target8::Reg(R8::A))),
    // 0xA0
    Op::Exec("RES 4,B", |cpu, bus| cpu.cb_res(bus, 4, Target8::Reg(R8::B))),
    Op::Exec("RES 4,C", |cpu, bus| cpu.cb_res(bus, 4, Target8::Reg(R8::C))),
    Op::Exec("RES 4,D", |cpu, bus| cpu.cb_res(bus, 4, Target8::Reg(R8::D))),
    Op::Exec("RES 4,E", |cpu, bus| cpu.cb_res(bus, 4, Target8::Reg(R8::E))),
    Op::Exec("RES 4,H", |cpu, bus| cpu.cb_res(bus, 4, Target8::Reg(R8::H))),
    Op::Exec("RES 4,L", |cpu, bus| cpu.cb_res(bus, 4, Target8::Reg(R8::L))),
    Op::Exec("RES 4,(HL)", |cpu, bus| cpu.cb_res(bus, 4, Target8::HlInd)),
    Op::Exec("RES 4,A", |cpu, bus| cpu.cb_res(bus, 4, Target8::Reg(R8::A))),
    Op::Exec("RES 5,B", |cpu, bus| cpu.cb_res(bus, 5, Target8::Reg(R8::B))),
    Op::Exec("RES 5,C", |cpu, bus| cpu.cb_res(bus, 5, Target8::Reg(R8::C))),
    Op::Exec("RES 5,D", |cpu, bus| cpu.cb_res(bus, 5, Target8::Reg(R8::D))),
    Op::Exec("RES 5,E", |cpu, bus| cpu.cb_res(bus, 5, Target8::Reg(R8::E))),
    Op::Exec("RES 5,H", |cpu, bus| cpu.cb_res(bus, 5, Target8::Reg(R8::H))),
    Op::Exec("RES 5,L", |cpu, bus| cpu.cb_res(bus, 5, Target8::Reg(R8::L))),
    Op::Exec("RES 5,(HL)", |cpu, bus| cpu.cb_res(bus, 5, Target8::HlInd)),
    Op::Exec("RES 5,A", |cpu, bus| cpu.cb_res(bus, 5, Target8::Reg(R8::A))),
    // 0xB0
    Op::Exec("RES 6,B", |cpu, bus| cpu.cb_res(bus, 6, Target8::Reg(R8::B))),
    Op::Exec("RES 6,C", |cpu, bus| cpu.cb_res(bus, 6, Target8::Reg(R8::C))),
    Op::Exec("RES 6,D", |cpu, bus| cpu.cb_res(bus, 6, Target8::Reg(R8::D))),
    Op::Exec("RES 6,E", |cpu, bus| cpu.cb_res(bus, 6, Target8::Reg(R8::E))),
    Op::Exec("RES 6,H", |cpu, bus| cpu.cb_res(bus, 6, Target8::Reg(R8::H))),
    Op::Exec("RES 6,L", |cpu, bus| cpu.cb_res(bus, 6, Target8::Reg(R8::L))),
    Op::Exec("RES 6,(HL)", |cpu, bus| cpu.cb_res(bus, 6, Target8::HlInd)),
    Op::Exec("RES 6,A", |cpu, bus| cpu.cb_res(bus, 6, Target8::Reg(R8::A))),
    Op::Exec("RES 7,B", |cpu, bus| cpu.cb_res(bus, 7, Target8::Reg(R8::B))),
    Op::Exec("RES 7,C", |cpu, bus| cpu.cb_res(bus, 7, Target8::Reg(R8::C))),
    Op::Exec("RES 7,D", |cpu, bus| cpu.cb_res(bus, 7, Target8::Reg(R8::D))),
    Op::Exec("RES 7,E", |cpu, bus| cpu.cb_res(bus, 7, Target8::Reg(R8::E))),
    Op::Exec("RES 7,H", |cpu, bus| cpu.cb_res(bus, 7, Target8::Reg(R8::H))),
    Op::Exec("RES 7,L", |cpu, bus| cpu.cb_res(bus, 7, Target8::Reg(R8::L))),
    Op::Exec("RES 7,(HL)", |cpu, bus| cpu.cb_res(bus, 7, Target8::HlInd)),
    Op::Exec("RES 7,A", |cpu, bus| cpu.cb_res(bus, 7, Target8::Reg(R8::A))),
    // 0xC0
    Op::Exec("SET 0,B", |cpu, bus| cpu.cb_set(bus, 0, Target8::Reg(R8::B))),
    Op::Exec("SET 0,C", |cpu, bus| cpu.cb_set(bus, 0, Target8::Reg(R8::C))),
    Op::Exec("SET 0,D", |cpu, bus| cpu.cb_set(bus, 0, Target8::Reg(R8::D))),
    Op::Exec("SET 0,E", |cpu, bus| cpu.cb_set(bus, 0, Target8::Reg(R8::E))),
    Op::Exec("SET 0,H", |cpu, bus| cpu.cb_set(bus, 0, Target8::Reg(R8::H))),
    Op::Exec("SET 0,L", |cpu, bus| cpu.cb_set(bus, 0, Target8::Reg(R8::L))),
    Op::Exec("SET 0,(HL)", |cpu, bus| cpu.cb_set(bus, 0, Target8::HlInd)),
    Op::Exec("SET 0,A", |cpu, bus| cpu.cb_set(bus, 0, Target8::Reg(R8::A))),
    Op::Exec("SET 1,B", |cpu, bus| cpu.cb_set(bus, 1, Target8::Reg(R8::B))),
    Op::Exec("SET 1,C", |cpu, bus| cpu.cb_set(bus, 1, Target8::Reg(R8::C))),
    Op::Exec("SET 1,D", |cpu, bus| cpu.cb_set(bus, 1, Target8::Reg(R8::D))),
    Op::Exec("SET 1,E", |cpu, bus| cpu.cb_set(bus, 1, Target8::Reg(R8::E))),
    Op::Exec("SET 1,H", |cpu, bus| cpu.cb_set(bus, 1, Target8::Reg(R8::H))),
    Op::Exec("SET 1,L", |cpu, bus| cpu.cb_set(bus, 1, Target8::Reg(R8::L))),
    Op::Exec("SET 1,(HL)", |cpu, bus| cpu.cb_set(bus, 1, Target8::HlInd)),
    Op::Exec("SET 1,A", |cpu, bus| cpu.cb_set(bus, 1, Target8::Reg(R8::A))),
    // 0xD0
    Op::Exec("SET 2,B", |cpu, bus| cpu.cb_set(bus, 2, Target8::Reg(R8::B))),
    Op::Exec("SET 2,C", |cpu, bus| cpu.cb_set(bus, 2, Target8::Reg(R8::C))),
    Op::Exec("SET 2,D", |cpu, bus| cpu.cb_set(bus, 2, Target8::Reg(R8::D))),
    Op::Exec("SET 2,E", |cpu, bus| cpu.cb_set(bus, 2, Target8::Reg(R8::E))),
    Op::Exec("SET 2,H", |cpu, bus| cpu.cb_set(bus, 2, Target8::Reg(R8::H))),
    Op::Exec("SET 2,L", |cpu, bus| cpu.cb_set(bus, 2, Target8::Reg(R8::L))),
    Op::Exec("SET 2,(HL)", |cpu, bus| cpu.cb_set(bus, 2, Target8::HlInd)),
    Op::Exec("SET 2,A", |cpu, bus| cpu.cb_set(bus, 2, Target8::Reg(R8::A))),
    Op::Exec("SET 3,B", |cpu, bus| cpu.cb_set(bus, 3, Target8::Reg(R8::B))),
    Op::Exec("SET 3,C", |cpu, bus| cpu.cb_set(bus, 3, Target8::Reg(R8::C))),
    Op::Exec("SET 3,D", |cpu, bus| cpu.cb_set(bus, 3, Target8::Reg(R8::D))),
    Op::Exec("SET 3,E", |cpu, bus| cpu.cb_set(bus, 3, Target8::Reg(R8::E))),
    Op::Exec("SET 3,H", |cpu, bus| cpu.cb_set(bus, 3, Target8::Reg(R8::H))),
    Op::Exec("SET 3,L", |cpu, bus| cpu.cb_set(bus, 3, Target8::Reg(R8::L))),
    Op::Exec("SET 3,(HL)", |cpu, bus| cpu.cb_set(bus, 3, Target8::HlInd)),
    Op::Exec("SET 3,A", |cpu, bus| cpu.cb_set(bus, 3, Target8::Reg(R8::A))),
    // 0xE0
    Op::Exec("SET 4,B", |cpu, bus| cpu.cb_set(bus, 4, Target8::Reg(R8::B))),
    Op::Exec("SET 4,C", |cpu, bus| cpu.cb_set(bus, 4, Target8::Reg(R8::C))),
    Op::Exec("SET 4,D", |cpu, bus| cpu.cb_set(bus, 4, Target8::Reg(R8::D))),
    Op::Exec("SET 4,E", |cpu, bus| cpu.cb_set(bus, 4, Target8::Reg(R8::E))),
    Op::Exec("SET 4,H", |cpu, bus| cpu.cb_set(bus, 4, Target8::Reg(R8::H))),
    Op::Exec("SET 4,L", |cpu, bus| cpu.cb_set(bus, 4, Target8::Reg(R8::L))),
    Op::Exec("SET 4,(HL)", |cpu, bus| cpu.cb_set(bus, 4, Target8::HlInd)),
    Op::Exec("SET 4,A", |cpu, bus| cpu.cb_set(bus, 4, Target8::Reg(R8::A))),
    Op::Exec("SET 5,B", |cpu, bus| cpu.cb_set(bus, 5, Target8::Reg(R8::B))),
    Op::Exec("SET 5,C", |cpu, bus| cpu.cb_set(bus, 5, Target8::Reg(R8::C))),
    Op::Exec("SET 5,D", |cpu, bus| cpu.cb_set(bus, 5, Target8::Reg(R8::D))),
    Op::Exec("SET 5,E", |cpu, bus| cpu.cb_set(bus, 5, Target8::Reg(R8::E))),
    Op::Exec("SET 5,H", |cpu, bus| cpu.cb_set(bus, 5, Target8::Reg(R8::H))),
    Op::Exec("SET 5,L", |cpu, bus| cpu.cb_set(bus, 5, Target8::Reg(R8::L))),
    Op::Exec("SET 5,(HL)", |cpu, bus| cpu.cb_set(bus, 5, Target8::HlInd)),
    Op::Exec("SET 5,A", |cpu, bus| cpu.cb_set(bus, 5, Target8::Reg(R8::A))),
    // 0xF0
    Op::Exec("SET 6,B", |cpu, bus| cpu.cb_set(bus, 6, Target8::Reg(R8::B))),
    Op::Exec("SET 6,C", |cpu, bus| cpu.cb_set(bus, 6, Target8::Reg(R8::C))),
    Op::Exec("SET 6,D", |cpu, bus| cpu.cb_set(bus, 6, Target8::Reg(R8::D))),
    Op::Exec("SET 6,E", |cpu, bus| cpu.cb_set(bus, 6, Target8::Reg(R8::E))),
    Op::Exec("SET 6,H", |cpu, bus| cpu.cb_set(bus, 6, Target8::Reg(R8::H))),
    Op::Exec("SET 6,L", |cpu, bus| cpu.cb_set(bus, 6, Target8::Reg(R8::L))),
    Op::Exec("SET 6,(HL)", |cpu, bus| cpu.cb_set(bus, 6, Target8::HlInd)),
    Op::Exec("SET 6,A", |cpu, bus| cpu.cb_set(bus, 6, Target8::Reg(R8::A))),
    Op::Exec("SET 7,B", |cpu, bus| cpu.cb_set(bus, 7, Target8::Reg(R8::B))),
    Op::Exec("SET 7,C", |cpu, bus| cpu.cb_set(bus, 7, Target8::Reg(R8::C))),
    Op::Exec("SET 7,D", |cpu, bus| cpu.cb_set(bus, 7, Target8::Reg(R8::D))),
    Op::Exec("SET 7,E", |cpu, bus| cpu.cb_set(bus, 7, Target8::Reg(R8::E))),
    Op::Exec("SET 7,H", |cpu, bus| cpu.cb_set(bus, 7, Target8::Reg(R8::H))),
    Op::Exec("SET 7,L", |cpu, bus| cpu.cb_set(bus, 7, Target8::Reg(R8::L))),
    Op::Exec("SET 7,(HL)", |cpu, bus| cpu.cb_set(bus, 7, Target8::HlInd)),
    Op::Exec("SET 7,A", |cpu, bus| cpu.cb_set(bus, 7, Target8::Reg(R8::A))),
];
