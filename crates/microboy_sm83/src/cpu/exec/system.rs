use crate::cpu::{Bus, Cpu, Mode};

impl Cpu {
    pub(in crate::cpu) fn op_nop(&mut self) {}

    /// `HALT`: enter the low-power wait. The host decides when to wake the
    /// CPU (and whether to arm the halt bug) via [`Cpu::set_mode`].
    pub(in crate::cpu) fn op_halt(&mut self) {
        self.set_mode(Mode::Halt);
    }

    /// `STOP`: enter the deep low-power state. The padding byte that follows
    /// the opcode is not consumed; PC stays on it until the host wakes the
    /// CPU.
    pub(in crate::cpu) fn op_stop(&mut self) {
        self.set_mode(Mode::Stop);
    }

    /// `DI`: IME drops immediately, and any in-flight EI staging is
    /// cancelled.
    pub(in crate::cpu) fn op_di(&mut self) {
        self.ime = false;
        self.ime_pending = 0;
        if self.mode() == Mode::InterruptEnablePending {
            self.set_mode(Mode::Normal);
        }
    }

    /// `EI`: IME goes high after the *next* instruction. Staged with a
    /// two-step countdown that the end of every `step` decrements, so the
    /// enable lands between the following instruction and the one after.
    pub(in crate::cpu) fn op_ei(&mut self) {
        if !self.ime && self.ime_pending == 0 {
            self.ime_pending = 2;
            if self.mode() == Mode::Normal {
                self.set_mode(Mode::InterruptEnablePending);
            }
        }
    }

    /// `CB` prefix: fetch the second opcode byte and dispatch it.
    pub(in crate::cpu) fn op_prefix_cb(&mut self, bus: &mut dyn Bus) {
        let opcode = self.fetch8(bus);
        self.exec_cb(bus, opcode);
    }
}
