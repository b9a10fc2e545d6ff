use super::{Cpu, Mode, Registers};

impl Cpu {
    /// A core with all registers cleared, mode Normal, IME disabled and
    /// execution starting at address zero. Hosts that want the post-boot-ROM
    /// register values of a particular machine set them up themselves.
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
            ime: false,
            mode: Mode::Normal,
            ime_pending: 0,
            mcycles: 0,
        }
    }

    /// Return to the initial state, discarding all accumulated state
    /// including the cycle counter.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
