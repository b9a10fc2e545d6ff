use super::{Bus, Cpu};

/// Timed bus-access primitives.
///
/// Every method here accounts for exactly the machine cycles it spends, so
/// instruction handlers never touch the cycle counter directly.
impl Cpu {
    /// One machine cycle spent reading a byte. The tick fires before the
    /// access so peripherals observe time in the same order hardware does.
    #[inline]
    pub(super) fn read_cycle(&mut self, bus: &mut dyn Bus, addr: u16) -> u8 {
        bus.tick();
        self.mcycles += 1;
        bus.read8(addr)
    }

    /// One machine cycle spent writing a byte.
    #[inline]
    pub(super) fn write_cycle(&mut self, bus: &mut dyn Bus, addr: u16, value: u8) {
        bus.tick();
        self.mcycles += 1;
        bus.write8(addr, value);
    }

    /// One internal machine cycle with no memory access.
    #[inline]
    pub(super) fn idle_cycle(&mut self, bus: &mut dyn Bus) {
        bus.tick();
        self.mcycles += 1;
    }

    /// Fetch the byte at PC and advance it.
    #[inline]
    pub(super) fn fetch8(&mut self, bus: &mut dyn Bus) -> u8 {
        let value = self.read_cycle(bus, self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Fetch a 16-bit immediate, low byte first.
    #[inline]
    pub(super) fn fetch16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        u16::from_le_bytes([lo, hi])
    }

    /// Push a 16-bit value: decrement SP and write the high byte, then
    /// decrement again and write the low byte.
    pub(super) fn push_u16(&mut self, bus: &mut dyn Bus, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write_cycle(bus, self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write_cycle(bus, self.regs.sp, lo);
    }

    /// Pop a 16-bit value: read the low byte and increment SP, then the high
    /// byte and increment again.
    pub(super) fn pop_u16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = self.read_cycle(bus, self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = self.read_cycle(bus, self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from_le_bytes([lo, hi])
    }
}
