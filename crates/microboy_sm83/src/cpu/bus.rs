/// Abstraction over the memory bus the CPU executes against.
///
/// The address space is the full 16-bit range; single-byte accesses only. The
/// CPU never assumes anything about the backing store, so hosts are free to
/// map ROM, RAM and IO behind `read8`/`write8` however they like.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Timing hook, invoked exactly once per machine cycle the CPU spends:
    /// once before every `read8`/`write8` performed on the CPU's behalf
    /// (including the opcode fetch itself) and once per internal cycle with
    /// no memory access. Hosts override this to drive timers and other
    /// peripherals; the default implementation does nothing.
    fn tick(&mut self) {}
}

/// A 64 KiB flat memory with no banking or IO mapping.
///
/// This is the only bus the core itself ships; real machines wrap their own
/// address decoding behind [`Bus`] instead.
#[derive(Clone)]
pub struct FlatBus {
    pub memory: [u8; 0x10000],
}

impl Default for FlatBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }
}

impl FlatBus {
    /// Copy `bytes` into memory starting at `base`, truncating at the end of
    /// the address space.
    pub fn load(&mut self, base: u16, bytes: &[u8]) {
        let base = base as usize;
        let len = bytes.len().min(self.memory.len() - base);
        self.memory[base..base + len].copy_from_slice(&bytes[..len]);
    }
}

impl Bus for FlatBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}
