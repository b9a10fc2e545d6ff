//! Instruction handlers for the base opcode table.
//!
//! Each handler performs the full semantics of one instruction family:
//! operand fetches, data accesses and internal cycles all go through the
//! timed helpers, so cycle accounting falls out of the access sequence.

mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::operand::Src8;
use super::{Bus, Cpu, Flag};

impl Cpu {
    pub(super) fn op_add_a(&mut self, bus: &mut dyn Bus, src: Src8, use_carry: bool) {
        let value = self.read_src8(bus, src);
        self.alu_add(value, use_carry);
    }

    pub(super) fn op_sub_a(&mut self, bus: &mut dyn Bus, src: Src8, use_carry: bool) {
        let value = self.read_src8(bus, src);
        self.alu_sub(value, use_carry);
    }

    pub(super) fn op_and_a(&mut self, bus: &mut dyn Bus, src: Src8) {
        let value = self.read_src8(bus, src);
        self.alu_and(value);
    }

    pub(super) fn op_xor_a(&mut self, bus: &mut dyn Bus, src: Src8) {
        let value = self.read_src8(bus, src);
        self.alu_xor(value);
    }

    pub(super) fn op_or_a(&mut self, bus: &mut dyn Bus, src: Src8) {
        let value = self.read_src8(bus, src);
        self.alu_or(value);
    }

    pub(super) fn op_cp_a(&mut self, bus: &mut dyn Bus, src: Src8) {
        let value = self.read_src8(bus, src);
        self.alu_cp(value);
    }

    pub(super) fn op_daa(&mut self) {
        self.alu_daa();
    }

    /// CPL: complement A. Sets N and H, preserves Z and C.
    pub(super) fn op_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
    }

    /// SCF: set carry. Clears N and H, preserves Z.
    pub(super) fn op_scf(&mut self) {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
    }

    /// CCF: complement carry. Clears N and H, preserves Z.
    pub(super) fn op_ccf(&mut self) {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
    }

    /// The accumulator rotates (RLCA/RRCA/RLA/RRA) reuse the CB-prefixed
    /// primitives but always clear Z afterwards.
    pub(super) fn op_rlca(&mut self) {
        let a = self.regs.a;
        self.regs.a = self.alu_rlc(a);
        self.set_flag(Flag::Z, false);
    }

    pub(super) fn op_rrca(&mut self) {
        let a = self.regs.a;
        self.regs.a = self.alu_rrc(a);
        self.set_flag(Flag::Z, false);
    }

    pub(super) fn op_rla(&mut self) {
        let a = self.regs.a;
        self.regs.a = self.alu_rl(a);
        self.set_flag(Flag::Z, false);
    }

    pub(super) fn op_rra(&mut self) {
        let a = self.regs.a;
        self.regs.a = self.alu_rr(a);
        self.set_flag(Flag::Z, false);
    }
}
