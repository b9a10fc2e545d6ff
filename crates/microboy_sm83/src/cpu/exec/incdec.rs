use crate::cpu::operand::Target8;
use crate::cpu::regs::R16;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// `INC r` / `INC (HL)`.
    pub(in crate::cpu) fn op_inc8(&mut self, bus: &mut dyn Bus, target: Target8) {
        let value = self.read_target8(bus, target);
        let result = self.alu_inc8(value);
        self.write_target8(bus, target, result);
    }

    /// `DEC r` / `DEC (HL)`.
    pub(in crate::cpu) fn op_dec8(&mut self, bus: &mut dyn Bus, target: Target8) {
        let value = self.read_target8(bus, target);
        let result = self.alu_dec8(value);
        self.write_target8(bus, target, result);
    }

    /// `INC rr`: no flag effects, one internal cycle.
    pub(in crate::cpu) fn op_inc16(&mut self, bus: &mut dyn Bus, rr: R16) {
        let value = self.regs.get16(rr).wrapping_add(1);
        self.regs.set16(rr, value);
        self.idle_cycle(bus);
    }

    /// `DEC rr`: no flag effects, one internal cycle.
    pub(in crate::cpu) fn op_dec16(&mut self, bus: &mut dyn Bus, rr: R16) {
        let value = self.regs.get16(rr).wrapping_sub(1);
        self.regs.set16(rr, value);
        self.idle_cycle(bus);
    }

    /// `ADD HL,rr`: one internal cycle.
    pub(in crate::cpu) fn op_add_hl_rr(&mut self, bus: &mut dyn Bus, rr: R16) {
        let value = self.regs.get16(rr);
        self.alu_add16_hl(value);
        self.idle_cycle(bus);
    }

    /// `ADD SP,e8`: two internal cycles.
    pub(in crate::cpu) fn op_add_sp_e8(&mut self, bus: &mut dyn Bus) {
        let imm = self.fetch8(bus);
        let sp = self.regs.sp;
        self.regs.sp = self.alu_add16_signed(sp, imm);
        self.idle_cycle(bus);
        self.idle_cycle(bus);
    }
}
