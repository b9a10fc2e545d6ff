//! SM83 instruction-execution core.
//!
//! The CPU owns only its architectural state (registers, flags, execution
//! mode, interrupt-master-enable staging). Memory and peripherals live behind
//! the [`Bus`] trait; every access the CPU performs is paired with exactly one
//! [`Bus::tick`] invocation so the host can keep cycle-exact time.

mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod opcodes;
mod operand;
mod regs;
mod step;

#[cfg(test)]
mod tests;

pub use bus::{Bus, FlatBus};
pub use cb::cb_mnemonic;
pub use opcodes::mnemonic;
pub use regs::{Flag, Registers, R16, R8};

use thiserror::Error;

/// Execution mode of the CPU.
///
/// Transitions are driven by the `halt`/`stop`/`ei`/`di` instructions;
/// wake-ups (pending-interrupt delivery) are the host's job via
/// [`Cpu::set_mode`], since the interrupt controller lives outside this core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Low-power wait entered by `halt`. `step` performs the opcode fetch as
    /// a no-op (a timed read at PC that does not advance it).
    Halt,
    /// Pending halt bug: the next opcode fetch does not advance PC, then the
    /// mode falls back to Normal.
    HaltBug,
    /// Deep low-power state entered by `stop`. No bus activity until the host
    /// wakes the CPU.
    Stop,
    /// EI staging window: execution continues normally while the delayed
    /// interrupt-master-enable is still pending.
    InterruptEnablePending,
}

/// The only error the core itself can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// The fetched byte has no defined operation (one of the 11 reserved
    /// opcode holes). `pc` is the address the byte was fetched from.
    #[error("illegal opcode {opcode:#04x} at pc={pc:#06x}")]
    IllegalOpcode { opcode: u8, pc: u16 },
}

/// SM83 CPU core.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable. The core only stages it (`ei`/`di`/`reti`);
    /// delivery is up to the host.
    pub ime: bool,
    mode: Mode,
    /// EI latency counter: armed to 2 by `ei`, decremented once at the end of
    /// every `step`; IME goes high when it reaches zero.
    ime_pending: u8,
    /// Total machine cycles spent, i.e. `Bus::tick` invocations.
    mcycles: u64,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        let bit = flag as u8;
        (self.regs.f & (1 << bit)) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        let bit = flag as u8;
        if value {
            self.regs.f |= 1 << bit;
        } else {
            self.regs.f &= !(1 << bit);
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Force an execution-mode transition.
    ///
    /// Hosts use this to model wake-ups the core does not own: clearing Halt
    /// or Stop on a pending interrupt or joypad line, or arming HaltBug.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::debug!("cpu mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Total machine cycles spent so far (one per `Bus::tick` invocation).
    #[inline]
    pub fn mcycles(&self) -> u64 {
        self.mcycles
    }
}
