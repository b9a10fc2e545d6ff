use std::path::PathBuf;

use microboy_sm83::{cpu, Cpu, FlatBus, Mode, StepError, CPU_FREQ};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let image_path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("Usage: sm83_trace <image_path> [max_steps]");
        std::process::exit(2);
    });
    let max_steps: u64 = args
        .next()
        .unwrap_or_else(|| "1000".to_string())
        .parse()
        .unwrap_or_else(|_| {
            eprintln!("Invalid step count; expected integer.");
            std::process::exit(2);
        });

    let image = std::fs::read(&image_path).unwrap_or_else(|err| {
        eprintln!("Failed to read '{}': {err}", image_path.display());
        std::process::exit(1);
    });

    let mut bus = FlatBus::default();
    bus.load(0x0000, &image);

    let mut cpu = Cpu::new();
    for _ in 0..max_steps {
        if cpu.mode() == Mode::Stop || cpu.mode() == Mode::Halt {
            println!("cpu entered {:?} mode, stopping trace", cpu.mode());
            break;
        }

        let pc = cpu.regs.pc;
        let opcode = bus.memory[pc as usize];
        let name = if opcode == 0xCB {
            cpu::cb_mnemonic(bus.memory[pc.wrapping_add(1) as usize])
        } else {
            cpu::mnemonic(opcode).unwrap_or("??")
        };

        match cpu.step(&mut bus) {
            Ok(cycles) => {
                println!(
                    "{pc:#06x}  {name:<12} af={:04x} bc={:04x} de={:04x} hl={:04x} sp={:04x} ({cycles}t)",
                    cpu.regs.af(),
                    cpu.regs.bc(),
                    cpu.regs.de(),
                    cpu.regs.hl(),
                    cpu.regs.sp,
                );
            }
            Err(StepError::IllegalOpcode { opcode, pc }) => {
                eprintln!("illegal opcode {opcode:#04x} at {pc:#06x}");
                std::process::exit(1);
            }
        }
    }

    let tcycles = cpu.mcycles() * 4;
    println!(
        "done after {} machine cycles ({:.6}s emulated)",
        cpu.mcycles(),
        tcycles as f64 / CPU_FREQ as f64
    );
}
