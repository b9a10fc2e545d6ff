use super::*;

/// Flat memory with a tick counter, so tests can check both data movement and
/// cycle accounting.
struct TestBus {
    mem: [u8; 0x10000],
    ticks: u32,
}

impl TestBus {
    fn new(program: &[u8]) -> Self {
        let mut bus = Self {
            mem: [0; 0x10000],
            ticks: 0,
        };
        bus.mem[0x0100..0x0100 + program.len()].copy_from_slice(program);
        bus
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.mem[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.mem[addr as usize] = value;
    }

    fn tick(&mut self) {
        self.ticks += 1;
    }
}

/// A freshly reset core pointed at the test program, with a live stack.
fn test_cpu() -> Cpu {
    let mut cpu = Cpu::new();
    cpu.regs.pc = 0x0100;
    cpu.regs.sp = 0xFFFE;
    cpu
}

fn run_one(program: &[u8]) -> (Cpu, TestBus, u32) {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(program);
    let cycles = cpu.step(&mut bus).unwrap();
    (cpu, bus, cycles)
}

#[test]
fn new_cpu_starts_cleared() {
    let cpu = Cpu::new();
    assert_eq!(cpu.regs.pc, 0);
    assert_eq!(cpu.regs.af(), 0);
    assert_eq!(cpu.mode(), Mode::Normal);
    assert!(!cpu.ime);
    assert_eq!(cpu.mcycles(), 0);
}

#[test]
fn self_move_changes_nothing_but_pc() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x40]); // LD B,B
    cpu.regs.set_bc(0x1234);
    cpu.regs.set_de(0x5678);
    cpu.regs.set_hl(0x9ABC);
    cpu.regs.a = 0xEE;
    cpu.regs.f = 0xF0;
    let mut expected = cpu.regs;
    expected.pc = expected.pc.wrapping_add(1);
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs, expected);
}

#[test]
fn ld_r_r_moves_value() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x41]); // LD B,C
    cpu.regs.c = 0x5A;
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.b, 0x5A);
    assert_eq!(cycles, 4);
}

#[test]
fn ld_r_n_fetches_immediate() {
    let (cpu, _, cycles) = run_one(&[0x06, 0x42]); // LD B,n8
    assert_eq!(cpu.regs.b, 0x42);
    assert_eq!(cpu.regs.pc, 0x0102);
    assert_eq!(cycles, 8);
}

#[test]
fn ld_hl_ind_store_and_load() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x77, 0x46]); // LD (HL),A ; LD B,(HL)
    cpu.regs.set_hl(0xC000);
    cpu.regs.a = 0x99;
    assert_eq!(cpu.step(&mut bus).unwrap(), 8);
    assert_eq!(bus.mem[0xC000], 0x99);
    assert_eq!(cpu.step(&mut bus).unwrap(), 8);
    assert_eq!(cpu.regs.b, 0x99);
}

#[test]
fn ld_a_hl_inc_adjusts_hl_after_access() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x2A]); // LD A,(HL+)
    cpu.regs.set_hl(0xC000);
    bus.mem[0xC000] = 0x7E;
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x7E);
    assert_eq!(cpu.regs.hl(), 0xC001);
}

#[test]
fn ld_hl_dec_a_stores_then_decrements() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x32]); // LD (HL-),A
    cpu.regs.set_hl(0xC000);
    cpu.regs.a = 0x11;
    cpu.step(&mut bus).unwrap();
    assert_eq!(bus.mem[0xC000], 0x11);
    assert_eq!(cpu.regs.hl(), 0xBFFF);
}

#[test]
fn ldh_uses_high_page() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xE0, 0x80, 0xF0, 0x80]); // LDH (a8),A ; LDH A,(a8)
    cpu.regs.a = 0x3C;
    assert_eq!(cpu.step(&mut bus).unwrap(), 12);
    assert_eq!(bus.mem[0xFF80], 0x3C);
    cpu.regs.a = 0x00;
    assert_eq!(cpu.step(&mut bus).unwrap(), 12);
    assert_eq!(cpu.regs.a, 0x3C);
}

#[test]
fn ldh_c_uses_c_register() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xE2]); // LDH (C),A
    cpu.regs.c = 0x44;
    cpu.regs.a = 0xAB;
    assert_eq!(cpu.step(&mut bus).unwrap(), 8);
    assert_eq!(bus.mem[0xFF44], 0xAB);
}

#[test]
fn ld_nn_sp_stores_little_endian() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x08, 0x00, 0xC0]); // LD (a16),SP
    cpu.regs.sp = 0xABCD;
    assert_eq!(cpu.step(&mut bus).unwrap(), 20);
    assert_eq!(bus.mem[0xC000], 0xCD);
    assert_eq!(bus.mem[0xC001], 0xAB);
}

#[test]
fn add_a_sets_half_and_full_carry() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x80]); // ADD A,B
    cpu.regs.a = 0xFF;
    cpu.regs.b = 0x01;
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(!cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn adc_consumes_carry_in() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x88]); // ADC A,B
    cpu.regs.a = 0x0F;
    cpu.regs.b = 0x00;
    cpu.set_flag(Flag::C, true);
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x10);
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn sub_a_sets_borrow_flags() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x90]); // SUB A,B
    cpu.regs.a = 0x10;
    cpu.regs.b = 0x20;
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0xF0);
    assert!(cpu.get_flag(Flag::N));
    assert!(!cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn sbc_borrows_through_carry() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x98]); // SBC A,B
    cpu.regs.a = 0x01;
    cpu.regs.b = 0x00;
    cpu.set_flag(Flag::C, true);
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.get_flag(Flag::Z));
}

#[test]
fn cp_leaves_a_untouched() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xFE, 0x42]); // CP A,n8
    cpu.regs.a = 0x42;
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x42);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::N));
}

#[test]
fn and_sets_h_or_xor_clear_it() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xA0, 0xB0, 0xA8]); // AND A,B ; OR A,B ; XOR A,B
    cpu.regs.a = 0xF0;
    cpu.regs.b = 0x0F;
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));

    cpu.regs.a = 0xF0;
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0xFF);
    assert_eq!(cpu.regs.f, 0x00);

    cpu.step(&mut bus).unwrap(); // 0xFF ^ 0x0F
    assert_eq!(cpu.regs.a, 0xF0);
    assert_eq!(cpu.regs.f, 0x00);
}

#[test]
fn inc_preserves_carry_dec_sets_n() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x3C, 0x3D]); // INC A ; DEC A
    cpu.regs.a = 0x0F;
    cpu.set_flag(Flag::C, true);
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x10);
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));

    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x0F);
    assert!(cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn inc_hl_ind_is_read_modify_write() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x34]); // INC (HL)
    cpu.regs.set_hl(0xC000);
    bus.mem[0xC000] = 0xFF;
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(bus.mem[0xC000], 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert_eq!(cycles, 12);
}

#[test]
fn inc16_has_no_flag_effects() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x03]); // INC BC
    cpu.regs.set_bc(0xFFFF);
    cpu.regs.f = 0xF0;
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.bc(), 0x0000);
    assert_eq!(cpu.regs.f, 0xF0);
    assert_eq!(cycles, 8);
}

#[test]
fn daa_corrects_bcd_addition() {
    let mut cpu = test_cpu();
    // 0x19 + 0x28 = 0x41, DAA -> 0x47
    let mut bus = TestBus::new(&[0x80, 0x27]); // ADD A,B ; DAA
    cpu.regs.a = 0x19;
    cpu.regs.b = 0x28;
    cpu.step(&mut bus).unwrap();
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x47);
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn daa_corrects_bcd_subtraction() {
    let mut cpu = test_cpu();
    // 0x20 - 0x13 = 0x0D, DAA -> 0x07 with N preserved
    let mut bus = TestBus::new(&[0x90, 0x27]); // SUB A,B ; DAA
    cpu.regs.a = 0x20;
    cpu.regs.b = 0x13;
    cpu.step(&mut bus).unwrap();
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x07);
    assert!(cpu.get_flag(Flag::N));
}

#[test]
fn daa_wraps_high_bcd_sum() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x27]); // DAA
    // 0x9A is past 0x99 with both digits invalid: corrected by 0x66 to 0x00.
    cpu.regs.a = 0x9A;
    cpu.regs.f = 0x00;
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::H));
}

#[test]
fn daa_leaves_valid_bcd_alone() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x27]); // DAA
    cpu.regs.a = 0x45;
    cpu.regs.f = 0x00;
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x45);
    assert!(!cpu.get_flag(Flag::Z));
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn add_hl_rr_preserves_z() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x09]); // ADD HL,BC
    cpu.regs.set_hl(0x0FFF);
    cpu.regs.set_bc(0x0001);
    cpu.set_flag(Flag::Z, true);
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.hl(), 0x1000);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::C));
    assert_eq!(cycles, 8);
}

#[test]
fn add_sp_e8_flags_come_from_low_byte() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xE8, 0x01]); // ADD SP,+1
    cpu.regs.sp = 0xFFFF;
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.sp, 0x0000);
    assert!(!cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));
    assert_eq!(cycles, 16);
}

#[test]
fn ld_hl_sp_e8_with_negative_offset() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xF8, 0xFE]); // LD HL,SP-2
    cpu.regs.sp = 0xFFFE;
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.hl(), 0xFFFC);
    assert_eq!(cycles, 12);
}

#[test]
fn rlca_always_clears_z() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x07]); // RLCA
    cpu.regs.a = 0x80;
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x01);
    assert!(!cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn rra_rotates_through_carry() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x1F]); // RRA
    cpu.regs.a = 0x01;
    cpu.set_flag(Flag::C, false);
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x00);
    assert!(!cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn cb_rlc_sets_z_unlike_rlca() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xCB, 0x00]); // RLC B
    cpu.regs.b = 0x00;
    let cycles = cpu.step(&mut bus).unwrap();
    assert!(cpu.get_flag(Flag::Z));
    assert_eq!(cycles, 8);
}

#[test]
fn cb_bit_preserves_carry() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xCB, 0x7F]); // BIT 7,A
    cpu.regs.a = 0x80;
    cpu.set_flag(Flag::C, true);
    cpu.step(&mut bus).unwrap();
    assert!(!cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn cb_bit_hl_is_read_only() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xCB, 0x46]); // BIT 0,(HL)
    cpu.regs.set_hl(0xC000);
    bus.mem[0xC000] = 0x00;
    let cycles = cpu.step(&mut bus).unwrap();
    assert!(cpu.get_flag(Flag::Z));
    assert_eq!(cycles, 12);
}

#[test]
fn cb_res_and_set_on_hl_ind() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xCB, 0xBE, 0xCB, 0xC6]); // RES 7,(HL) ; SET 0,(HL)
    cpu.regs.set_hl(0xC000);
    bus.mem[0xC000] = 0x80;
    assert_eq!(cpu.step(&mut bus).unwrap(), 16);
    assert_eq!(bus.mem[0xC000], 0x00);
    assert_eq!(cpu.step(&mut bus).unwrap(), 16);
    assert_eq!(bus.mem[0xC000], 0x01);
}

#[test]
fn cb_swap_exchanges_nibbles() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xCB, 0x37]); // SWAP A
    cpu.regs.a = 0xF1;
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 0x1F);
    assert_eq!(cpu.regs.f, 0x00);
}

#[test]
fn jr_taken_and_not_taken_cycles() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x20, 0x05]); // JR NZ,+5
    cpu.set_flag(Flag::Z, false);
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, 0x0107);
    assert_eq!(cycles, 12);

    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x20, 0x05]);
    cpu.set_flag(Flag::Z, true);
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, 0x0102);
    assert_eq!(cycles, 8);
}

#[test]
fn jr_backward_offset() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x18, 0xFE]); // JR -2 (tight loop)
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, 0x0100);
    assert_eq!(cycles, 12);
}

#[test]
fn jp_cc_always_fetches_operands() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xC2, 0x00, 0xC0]); // JP NZ,0xC000
    cpu.set_flag(Flag::Z, true);
    let cycles = cpu.step(&mut bus).unwrap();
    // Not taken: PC still moved past both operand bytes.
    assert_eq!(cpu.regs.pc, 0x0103);
    assert_eq!(cycles, 12);

    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xC2, 0x00, 0xC0]);
    cpu.set_flag(Flag::Z, false);
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, 0xC000);
    assert_eq!(cycles, 16);
}

#[test]
fn jp_hl_is_single_cycle() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xE9]); // JP HL
    cpu.regs.set_hl(0x4000);
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, 0x4000);
    assert_eq!(cycles, 4);
}

#[test]
fn call_pushes_return_address() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xCD, 0x00, 0xC0]); // CALL 0xC000
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, 0xC000);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    // Return address 0x0103, pushed high byte first.
    assert_eq!(bus.mem[0xFFFD], 0x01);
    assert_eq!(bus.mem[0xFFFC], 0x03);
    assert_eq!(cycles, 24);
}

#[test]
fn ret_pops_pc() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xC9]); // RET
    cpu.regs.sp = 0xFFFC;
    bus.mem[0xFFFC] = 0x34;
    bus.mem[0xFFFD] = 0x12;
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, 0x1234);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cycles, 16);
}

#[test]
fn ret_cc_cycles() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xC0]); // RET NZ
    cpu.set_flag(Flag::Z, true);
    assert_eq!(cpu.step(&mut bus).unwrap(), 8);
    assert_eq!(cpu.regs.pc, 0x0101);

    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xC0]);
    cpu.regs.sp = 0xFFFC;
    bus.mem[0xFFFC] = 0x00;
    bus.mem[0xFFFD] = 0x80;
    cpu.set_flag(Flag::Z, false);
    assert_eq!(cpu.step(&mut bus).unwrap(), 20);
    assert_eq!(cpu.regs.pc, 0x8000);
}

#[test]
fn rst_jumps_to_fixed_vector() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xEF]); // RST $28
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(bus.mem[0xFFFC], 0x01);
    assert_eq!(cycles, 16);
}

#[test]
fn push_pop_roundtrip() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xC5, 0xD1]); // PUSH BC ; POP DE
    cpu.regs.set_bc(0xBEEF);
    assert_eq!(cpu.step(&mut bus).unwrap(), 16);
    assert_eq!(cpu.step(&mut bus).unwrap(), 12);
    assert_eq!(cpu.regs.de(), 0xBEEF);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn af_writes_mask_low_nibble_for_every_byte() {
    for value in 0..=0xFFu8 {
        let mut regs = Registers::default();
        regs.set16(R16::Af, 0x5A00 | value as u16);
        assert_eq!(regs.a, 0x5A);
        assert_eq!(regs.f, value & 0xF0, "set16 value {value:#04x}");

        let mut regs = Registers::default();
        regs.set8(R8::F, value);
        assert_eq!(regs.f, value & 0xF0, "set8 value {value:#04x}");
    }
}

#[test]
fn pop_af_masks_low_nibble() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xF1]); // POP AF
    cpu.regs.sp = 0xFFFC;
    bus.mem[0xFFFC] = 0xFF;
    bus.mem[0xFFFD] = 0x12;
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.af(), 0x12F0);
}

#[test]
fn ei_enables_ime_one_instruction_late() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xFB, 0x00, 0x00]); // EI ; NOP ; NOP
    cpu.step(&mut bus).unwrap();
    assert!(!cpu.ime);
    assert_eq!(cpu.mode(), Mode::InterruptEnablePending);
    cpu.step(&mut bus).unwrap();
    assert!(cpu.ime);
    assert_eq!(cpu.mode(), Mode::Normal);
}

#[test]
fn di_cancels_pending_enable() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xFB, 0xF3, 0x00]); // EI ; DI ; NOP
    cpu.step(&mut bus).unwrap();
    cpu.step(&mut bus).unwrap();
    assert!(!cpu.ime);
    assert_eq!(cpu.mode(), Mode::Normal);
    cpu.step(&mut bus).unwrap();
    assert!(!cpu.ime);
}

#[test]
fn reti_enables_ime_immediately() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xD9]); // RETI
    cpu.regs.sp = 0xFFFC;
    bus.mem[0xFFFC] = 0x00;
    bus.mem[0xFFFD] = 0x02;
    let cycles = cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, 0x0200);
    assert!(cpu.ime);
    assert_eq!(cycles, 16);
}

#[test]
fn halt_steps_without_advancing_pc() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x76, 0x00]); // HALT ; NOP
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.mode(), Mode::Halt);
    let pc = cpu.regs.pc;
    let ticks_before = bus.ticks;
    assert_eq!(cpu.step(&mut bus).unwrap(), 4);
    assert_eq!(cpu.regs.pc, pc);
    // The no-op fetch still costs a timed bus cycle.
    assert_eq!(bus.ticks, ticks_before + 1);

    cpu.set_mode(Mode::Normal);
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, pc.wrapping_add(1));
}

#[test]
fn stop_makes_no_bus_accesses() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x10, 0x00]); // STOP
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.mode(), Mode::Stop);
    let ticks = bus.ticks;
    let pc = cpu.regs.pc;
    assert_eq!(cpu.step(&mut bus).unwrap(), 4);
    assert_eq!(bus.ticks, ticks);
    assert_eq!(cpu.regs.pc, pc);
}

#[test]
fn halt_bug_repeats_the_fetched_byte() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0x3C, 0x00]); // INC A
    cpu.regs.a = 0;
    cpu.set_mode(Mode::HaltBug);
    cpu.step(&mut bus).unwrap();
    // PC was not advanced, so the same INC A executes again.
    assert_eq!(cpu.regs.pc, 0x0100);
    assert_eq!(cpu.mode(), Mode::Normal);
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 2);
    assert_eq!(cpu.regs.pc, 0x0101);
}

#[test]
fn illegal_opcode_is_an_error() {
    let mut cpu = test_cpu();
    let mut bus = TestBus::new(&[0xD3]);
    let err = cpu.step(&mut bus).unwrap_err();
    assert_eq!(
        err,
        StepError::IllegalOpcode {
            opcode: 0xD3,
            pc: 0x0100
        }
    );
}

#[test]
fn ticks_match_reported_cycles() {
    let mut cpu = test_cpu();
    // A mix of fetch-only, memory and internal-cycle instructions.
    let program = [
        0x00, // NOP
        0x01, 0x34, 0x12, // LD BC,n16
        0xC5, // PUSH BC
        0xE8, 0x10, // ADD SP,e8
        0xCB, 0x86, // RES 0,(HL)
    ];
    let mut bus = TestBus::new(&program);
    let mut total = 0;
    for _ in 0..5 {
        total += cpu.step(&mut bus).unwrap();
    }
    assert_eq!(total, bus.ticks * 4);
    assert_eq!(cpu.mcycles() as u32, bus.ticks);
}

#[test]
fn every_cb_opcode_executes() {
    for opcode in 0..=0xFFu8 {
        let mut cpu = test_cpu();
        let mut bus = TestBus::new(&[0xCB, opcode]);
        cpu.regs.set_hl(0xC000);
        let cycles = cpu.step(&mut bus).unwrap();
        // 8 for register forms, 12 for BIT (HL), 16 for the (HL) writes.
        assert!(
            cycles == 8 || cycles == 12 || cycles == 16,
            "opcode {opcode:#04x} took {cycles} cycles"
        );
        assert!(!cb_mnemonic(opcode).is_empty());
    }
}

#[test]
fn mnemonic_lookup() {
    assert_eq!(mnemonic(0x00), Some("NOP"));
    assert_eq!(mnemonic(0x76), Some("HALT"));
    assert_eq!(mnemonic(0xD3), None);
    assert_eq!(cb_mnemonic(0x37), "SWAP A");
    assert_eq!(cb_mnemonic(0xFF), "SET 7,A");
}

#[test]
fn flat_bus_load_truncates() {
    let mut bus = FlatBus::default();
    bus.load(0xFFFE, &[1, 2, 3, 4]);
    assert_eq!(bus.memory[0xFFFE], 1);
    assert_eq!(bus.memory[0xFFFF], 2);
}
