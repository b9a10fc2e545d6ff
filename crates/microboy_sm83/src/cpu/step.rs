use super::opcodes::{Op, OPCODES};
use super::{Bus, Cpu, Mode, StepError};

impl Cpu {
    /// Execute one instruction (or one low-power wait cycle) and return the
    /// T-cycles it took. Every machine cycle spent here fires [`Bus::tick`]
    /// exactly once; the return value is always four times the tick count,
    /// except in Stop mode where the CPU is off the bus entirely.
    pub fn step(&mut self, bus: &mut dyn Bus) -> Result<u32, StepError> {
        match self.mode() {
            // Deep sleep: no fetch, no tick, time passes only for the caller.
            Mode::Stop => return Ok(4),
            // Halt replays the fetch at PC as a no-op without advancing it.
            Mode::Halt => {
                let _ = self.read_cycle(bus, self.regs.pc);
                return Ok(4);
            }
            Mode::Normal | Mode::HaltBug | Mode::InterruptEnablePending => {}
        }

        let start = self.mcycles;
        let pc = self.regs.pc;
        let opcode = self.read_cycle(bus, pc);

        // The halt bug swallows exactly one PC increment.
        if self.mode() == Mode::HaltBug {
            self.set_mode(Mode::Normal);
        } else {
            self.regs.pc = pc.wrapping_add(1);
        }

        match OPCODES[opcode as usize] {
            Op::Exec(name, f) => {
                log::trace!("{pc:#06x}: {name}");
                f(self, bus);
            }
            Op::Illegal => {
                log::error!("illegal opcode {opcode:#04x} at pc={pc:#06x}");
                return Err(StepError::IllegalOpcode { opcode, pc });
            }
        }

        // EI enables IME one full instruction late: the countdown armed by
        // `ei` passes through this point twice before landing.
        if self.ime_pending > 0 {
            self.ime_pending -= 1;
            if self.ime_pending == 0 {
                self.ime = true;
                if self.mode() == Mode::InterruptEnablePending {
                    self.set_mode(Mode::Normal);
                }
            }
        }

        Ok(((self.mcycles - start) as u32) * 4)
    }
}
