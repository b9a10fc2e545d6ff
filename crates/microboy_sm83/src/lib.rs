pub mod cpu;

pub use cpu::{Bus, Cpu, FlatBus, Mode, StepError};

/// SM83 master clock rate in T-cycles per second.
pub const CPU_FREQ: u32 = 4_194_304;
