use crate::cpu::operand::Cond;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// Unconditional `JR e8`.
    pub(in crate::cpu) fn op_jr(&mut self, bus: &mut dyn Bus) {
        let offset = self.fetch8(bus) as i8;
        self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
        self.idle_cycle(bus);
    }

    /// `JR cc,e8`. The offset byte is always fetched; the internal cycle and
    /// the PC update happen only when the branch is taken.
    pub(in crate::cpu) fn op_jr_cc(&mut self, bus: &mut dyn Bus, cond: Cond) {
        let offset = self.fetch8(bus) as i8;
        if self.check_cond(cond) {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
            self.idle_cycle(bus);
        }
    }

    /// Unconditional `JP nn`.
    pub(in crate::cpu) fn op_jp(&mut self, bus: &mut dyn Bus) {
        let addr = self.fetch16(bus);
        self.regs.pc = addr;
        self.idle_cycle(bus);
    }

    /// `JP cc,nn`. Both operand bytes are always fetched.
    pub(in crate::cpu) fn op_jp_cc(&mut self, bus: &mut dyn Bus, cond: Cond) {
        let addr = self.fetch16(bus);
        if self.check_cond(cond) {
            self.regs.pc = addr;
            self.idle_cycle(bus);
        }
    }

    /// `JP HL`: no extra cycle, PC simply becomes HL.
    pub(in crate::cpu) fn op_jp_hl(&mut self) {
        self.regs.pc = self.regs.hl();
    }

    /// Unconditional `CALL nn`: fetch target, internal cycle, push return
    /// address, jump.
    pub(in crate::cpu) fn op_call(&mut self, bus: &mut dyn Bus) {
        let addr = self.fetch16(bus);
        self.idle_cycle(bus);
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = addr;
    }

    /// `CALL cc,nn`. Both operand bytes are always fetched.
    pub(in crate::cpu) fn op_call_cc(&mut self, bus: &mut dyn Bus, cond: Cond) {
        let addr = self.fetch16(bus);
        if self.check_cond(cond) {
            self.idle_cycle(bus);
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
        }
    }

    /// Unconditional `RET`: pop, then one internal cycle.
    pub(in crate::cpu) fn op_ret(&mut self, bus: &mut dyn Bus) {
        self.regs.pc = self.pop_u16(bus);
        self.idle_cycle(bus);
    }

    /// `RET cc`: one internal cycle to evaluate the condition, then the full
    /// return sequence if taken.
    pub(in crate::cpu) fn op_ret_cc(&mut self, bus: &mut dyn Bus, cond: Cond) {
        self.idle_cycle(bus);
        if self.check_cond(cond) {
            self.regs.pc = self.pop_u16(bus);
            self.idle_cycle(bus);
        }
    }

    /// `RETI`: like `RET`, and IME goes high immediately (no EI-style delay).
    pub(in crate::cpu) fn op_reti(&mut self, bus: &mut dyn Bus) {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
        self.idle_cycle(bus);
    }

    /// `RST vec`: internal cycle, push return address, jump to the fixed
    /// vector.
    pub(in crate::cpu) fn op_rst(&mut self, bus: &mut dyn Bus, vector: u16) {
        self.idle_cycle(bus);
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = vector;
    }
}
