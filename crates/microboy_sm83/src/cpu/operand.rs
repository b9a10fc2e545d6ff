use super::regs::R8;
use super::{Bus, Cpu, Flag};

/// 8-bit read-only source operand.
#[derive(Clone, Copy, Debug)]
pub(super) enum Src8 {
    Reg(R8),
    /// Immediate byte following the opcode.
    Imm,
    /// Byte at the address in HL.
    HlInd,
}

/// 8-bit read-write operand.
#[derive(Clone, Copy, Debug)]
pub(super) enum Target8 {
    Reg(R8),
    HlInd,
}

/// Addressing forms of the A-load/store family (`LD A,(x)` / `LD (x),A`).
#[derive(Clone, Copy, Debug)]
pub(super) enum Addr {
    Bc,
    De,
    /// (HL), post-incrementing HL.
    HlInc,
    /// (HL), post-decrementing HL.
    HlDec,
    /// 0xFF00 + immediate byte.
    HighImm,
    /// 0xFF00 + C.
    HighC,
    /// 16-bit immediate address.
    Abs,
}

/// Branch conditions.
#[derive(Clone, Copy, Debug)]
pub(super) enum Cond {
    Nz,
    Z,
    Nc,
    C,
}

impl Cpu {
    /// Read a source operand, spending a cycle only for memory forms.
    pub(super) fn read_src8(&mut self, bus: &mut dyn Bus, src: Src8) -> u8 {
        match src {
            Src8::Reg(r) => self.regs.get8(r),
            Src8::Imm => self.fetch8(bus),
            Src8::HlInd => self.read_cycle(bus, self.regs.hl()),
        }
    }

    pub(super) fn read_target8(&mut self, bus: &mut dyn Bus, target: Target8) -> u8 {
        match target {
            Target8::Reg(r) => self.regs.get8(r),
            Target8::HlInd => self.read_cycle(bus, self.regs.hl()),
        }
    }

    pub(super) fn write_target8(&mut self, bus: &mut dyn Bus, target: Target8, value: u8) {
        match target {
            Target8::Reg(r) => self.regs.set8(r, value),
            Target8::HlInd => self.write_cycle(bus, self.regs.hl(), value),
        }
    }

    /// Resolve an [`Addr`] to a concrete address, fetching any immediate bytes
    /// it needs. The HL± forms adjust HL here, before the data access.
    pub(super) fn effective_addr(&mut self, bus: &mut dyn Bus, addr: Addr) -> u16 {
        match addr {
            Addr::Bc => self.regs.bc(),
            Addr::De => self.regs.de(),
            Addr::HlInc => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            Addr::HlDec => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
            Addr::HighImm => 0xFF00 | self.fetch8(bus) as u16,
            Addr::HighC => 0xFF00 | self.regs.c as u16,
            Addr::Abs => self.fetch16(bus),
        }
    }

    #[inline]
    pub(super) fn check_cond(&self, cond: Cond) -> bool {
        match cond {
            Cond::Nz => !self.get_flag(Flag::Z),
            Cond::Z => self.get_flag(Flag::Z),
            Cond::Nc => !self.get_flag(Flag::C),
            Cond::C => self.get_flag(Flag::C),
        }
    }
}
