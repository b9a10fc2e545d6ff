use crate::cpu::regs::R16;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// `PUSH rr`: one internal cycle before the two stack writes.
    pub(in crate::cpu) fn op_push(&mut self, bus: &mut dyn Bus, rr: R16) {
        self.idle_cycle(bus);
        let value = self.regs.get16(rr);
        self.push_u16(bus, value);
    }

    /// `POP rr`. Popping into AF masks the low nibble of F via
    /// [`crate::cpu::Registers::set16`].
    pub(in crate::cpu) fn op_pop(&mut self, bus: &mut dyn Bus, rr: R16) {
        let value = self.pop_u16(bus);
        self.regs.set16(rr, value);
    }
}
