use crate::cpu::operand::{Addr, Src8, Target8};
use crate::cpu::regs::{R16, R8};
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// The whole 8-bit load family: register, immediate and (HL) forms.
    pub(in crate::cpu) fn op_ld8(&mut self, bus: &mut dyn Bus, dst: Target8, src: Src8) {
        let value = self.read_src8(bus, src);
        self.write_target8(bus, dst, value);
    }

    /// `LD A,(x)` for every addressing form.
    pub(in crate::cpu) fn op_ld_a_mem(&mut self, bus: &mut dyn Bus, addr: Addr) {
        let addr = self.effective_addr(bus, addr);
        self.regs.a = self.read_cycle(bus, addr);
    }

    /// `LD (x),A` for every addressing form.
    pub(in crate::cpu) fn op_ld_mem_a(&mut self, bus: &mut dyn Bus, addr: Addr) {
        let addr = self.effective_addr(bus, addr);
        let a = self.regs.a;
        self.write_cycle(bus, addr, a);
    }

    /// `LD rr,nn`.
    pub(in crate::cpu) fn op_ld_rr_nn(&mut self, bus: &mut dyn Bus, rr: R16) {
        let value = self.fetch16(bus);
        self.regs.set16(rr, value);
    }

    /// `LD (nn),SP`: store SP little-endian at the immediate address.
    pub(in crate::cpu) fn op_ld_nn_sp(&mut self, bus: &mut dyn Bus) {
        let addr = self.fetch16(bus);
        let [hi, lo] = self.regs.sp.to_be_bytes();
        self.write_cycle(bus, addr, lo);
        self.write_cycle(bus, addr.wrapping_add(1), hi);
    }

    /// `LD SP,HL`, with its one internal cycle.
    pub(in crate::cpu) fn op_ld_sp_hl(&mut self, bus: &mut dyn Bus) {
        self.regs.sp = self.regs.hl();
        self.idle_cycle(bus);
    }

    /// `LD HL,SP+e8`, with its one internal cycle.
    pub(in crate::cpu) fn op_ld_hl_sp_e8(&mut self, bus: &mut dyn Bus) {
        let imm = self.fetch8(bus);
        let sp = self.regs.sp;
        let result = self.alu_add16_signed(sp, imm);
        self.regs.set_hl(result);
        self.idle_cycle(bus);
    }

    /// `LD r,r` where both operands are plain registers, kept separate from
    /// [`Cpu::op_ld8`] so the table rows for the 49 register-to-register
    /// loads stay cheap.
    #[inline]
    pub(in crate::cpu) fn op_ld_r_r(&mut self, dst: R8, src: R8) {
        let value = self.regs.get8(src);
        self.regs.set8(dst, value);
    }
}
