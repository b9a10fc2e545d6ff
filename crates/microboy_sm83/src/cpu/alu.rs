use super::{Cpu, Flag};

/// Flag-computation primitives behind the instruction handlers.
///
/// Operations that define all four flags build the F byte in one shot via
/// [`Cpu::set_znhc`]; the ones that must leave a flag untouched (INC/DEC and
/// `ADD HL,rr` spare C, BIT spares C, DAA spares N) patch bits individually.
impl Cpu {
    /// Replace the whole F byte from four flag values.
    #[inline]
    fn set_znhc(&mut self, z: bool, n: bool, h: bool, c: bool) {
        self.regs.f = (z as u8) << 7 | (n as u8) << 6 | (h as u8) << 5 | (c as u8) << 4;
    }

    /// Add into A. `use_carry` folds the current C flag in for the ADC forms.
    /// The half carry falls out of the nibble sum, the full carry out of a
    /// 16-bit sum so the wrap cannot hide it.
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let carry_in = (use_carry && self.get_flag(Flag::C)) as u8;
        let a = self.regs.a;
        let wide = a as u16 + value as u16 + carry_in as u16;
        let result = wide as u8;
        let half = (a & 0x0F) + (value & 0x0F) + carry_in > 0x0F;
        self.regs.a = result;
        self.set_znhc(result == 0, false, half, wide > 0xFF);
    }

    /// Subtract from A. `use_carry` folds the current C flag in as a borrow
    /// for the SBC forms. H and C report nibble and byte borrows.
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let borrow_in = (use_carry && self.get_flag(Flag::C)) as u8;
        let a = self.regs.a;
        let result = a.wrapping_sub(value).wrapping_sub(borrow_in);
        let half = (a & 0x0F) < (value & 0x0F) + borrow_in;
        let carry = (a as u16) < value as u16 + borrow_in as u16;
        self.regs.a = result;
        self.set_znhc(result == 0, true, half, carry);
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        self.regs.a &= value;
        let z = self.regs.a == 0;
        self.set_znhc(z, false, true, false);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        self.regs.a |= value;
        let z = self.regs.a == 0;
        self.set_znhc(z, false, false, false);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        self.regs.a ^= value;
        let z = self.regs.a == 0;
        self.set_znhc(z, false, false, false);
    }

    /// CP is a subtract that keeps the flags and throws the result away.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        let a = self.regs.a;
        self.alu_sub(value, false);
        self.regs.a = a;
    }

    /// BCD correction after an 8-bit add or subtract. N picks the direction;
    /// H and C say which digit overflowed. On the add path the digits are
    /// also inspected directly, on the subtract path only the flags matter.
    /// C ends up set iff a 0x60 correction was applied, H is always cleared,
    /// Z tracks the corrected value and N survives.
    pub(super) fn alu_daa(&mut self) {
        let a = self.regs.a;
        let subtracting = self.get_flag(Flag::N);
        let mut correction = 0u8;
        if self.get_flag(Flag::H) || (!subtracting && a & 0x0F > 0x09) {
            correction |= 0x06;
        }
        if self.get_flag(Flag::C) || (!subtracting && a > 0x99) {
            correction |= 0x60;
        }

        let result = if subtracting {
            a.wrapping_sub(correction)
        } else {
            a.wrapping_add(correction)
        };
        self.regs.a = result;

        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, correction >= 0x60);
    }

    /// INC spares C, so it cannot go through the add path.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, value & 0x0F == 0x0F);
        result
    }

    /// DEC spares C, like INC.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, value & 0x0F == 0);
        result
    }

    /// `ADD HL,rr`. Z survives; H and C come out of bits 11 and 15, tested
    /// in 32 bits.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, hl as u32 + value as u32 > 0xFFFF);
        self.regs.set_hl(hl.wrapping_add(value));
    }

    /// Signed-immediate add shared by `ADD SP,e8` and `LD HL,SP+e8`. The
    /// flags ignore the 16-bit result entirely: H and C come from the
    /// unsigned add of the low bytes, Z and N are forced clear.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let h = (base & 0x000F) + (imm8 as u16 & 0x000F) > 0x000F;
        let c = (base & 0x00FF) + imm8 as u16 > 0x00FF;
        self.set_znhc(false, false, h, c);
        base.wrapping_add(imm8 as i8 as i16 as u16)
    }

    // Rotate/shift primitives, shared by the CB table and the accumulator
    // forms (which clear Z on top).

    #[inline]
    pub(super) fn alu_rlc(&mut self, value: u8) -> u8 {
        let result = value.rotate_left(1);
        self.set_znhc(result == 0, false, false, value & 0x80 != 0);
        result
    }

    #[inline]
    pub(super) fn alu_rrc(&mut self, value: u8) -> u8 {
        let result = value.rotate_right(1);
        self.set_znhc(result == 0, false, false, value & 0x01 != 0);
        result
    }

    #[inline]
    pub(super) fn alu_rl(&mut self, value: u8) -> u8 {
        let result = value << 1 | self.get_flag(Flag::C) as u8;
        self.set_znhc(result == 0, false, false, value & 0x80 != 0);
        result
    }

    #[inline]
    pub(super) fn alu_rr(&mut self, value: u8) -> u8 {
        let result = value >> 1 | (self.get_flag(Flag::C) as u8) << 7;
        self.set_znhc(result == 0, false, false, value & 0x01 != 0);
        result
    }

    #[inline]
    pub(super) fn alu_sla(&mut self, value: u8) -> u8 {
        let result = value << 1;
        self.set_znhc(result == 0, false, false, value & 0x80 != 0);
        result
    }

    /// SRA keeps the sign bit in place while shifting.
    #[inline]
    pub(super) fn alu_sra(&mut self, value: u8) -> u8 {
        let result = value >> 1 | value & 0x80;
        self.set_znhc(result == 0, false, false, value & 0x01 != 0);
        result
    }

    #[inline]
    pub(super) fn alu_swap(&mut self, value: u8) -> u8 {
        let result = value.rotate_left(4);
        self.set_znhc(result == 0, false, false, false);
        result
    }

    #[inline]
    pub(super) fn alu_srl(&mut self, value: u8) -> u8 {
        let result = value >> 1;
        self.set_znhc(result == 0, false, false, value & 0x01 != 0);
        result
    }

    /// BIT spares C and reports the complement of the tested bit through Z.
    #[inline]
    pub(super) fn alu_bit(&mut self, bit: u8, value: u8) {
        self.set_flag(Flag::Z, value & (1 << bit) == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, true);
    }
}
