use std::cmp::Ordering;
use std::env;
use std::process::Command;

// Host vector extensions worth reporting
#[derive(PartialEq, Eq, Debug)]
struct VectorIsa {
    name: &'static str,
    detected: bool,
}

impl VectorIsa {
    // Priority between ISAs (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "rvv" => 0,
            "asimd" => 1,
            "neon" => 2,
            _ => usize::MAX,
        }
    }

    fn candidates() -> Vec<VectorIsa> {
        vec![
            VectorIsa {
                name: "neon",
                detected: false,
            },
            VectorIsa {
                name: "asimd",
                detected: false,
            },
            VectorIsa {
                name: "rvv",
                detected: false,
            },
        ]
    }
}

impl Ord for VectorIsa {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for VectorIsa {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

trait VectorIsaDetector {
    fn detect(&self, isas: &mut [VectorIsa]);
    fn is_applicable(&self) -> bool;
}

// `isa : rv64imafdcv_zicsr...`: the V extension is a single letter before the
// first multi-letter extension.
fn riscv_isa_has_v(cpuinfo: &str) -> bool {
    cpuinfo
        .lines()
        .filter(|line| line.trim_start().starts_with("isa"))
        .filter_map(|line| line.split(':').nth(1))
        .any(|isa| {
            let base = isa.trim().split('_').next().unwrap_or_default();
            base.strip_prefix("rv64")
                .or_else(|| base.strip_prefix("rv32"))
                .is_some_and(|letters| letters.contains('v'))
        })
}

// Linux: /proc/cpuinfo lists `asimd` (AArch64), `neon` (ARMv7) or the RISC-V isa string
struct LinuxDetector;
impl VectorIsaDetector for LinuxDetector {
    fn detect(&self, isas: &mut [VectorIsa]) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            let contents = cpuinfo.to_lowercase();
            let flags: Vec<&str> = contents
                .lines()
                .filter(|line| line.starts_with("features") || line.starts_with("flags"))
                .flat_map(|line| line.split_whitespace())
                .collect();

            for isa in isas.iter_mut() {
                isa.detected = match isa.name {
                    "rvv" => riscv_isa_has_v(&contents),
                    name => flags.contains(&name),
                };
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

// macOS: every Apple Silicon machine reports NEON through sysctl
struct MacOSDetector;
impl VectorIsaDetector for MacOSDetector {
    fn detect(&self, isas: &mut [VectorIsa]) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

            for isa in isas.iter_mut() {
                if isa.name == "asimd" {
                    isa.detected = contents.contains("hw.optional.neon: 1");
                }
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

struct PlatformDetector;
impl PlatformDetector {
    fn detectors() -> Vec<Box<dyn VectorIsaDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn detect(isas: &mut [VectorIsa]) {
        for detector in Self::detectors() {
            if detector.is_applicable() {
                detector.detect(isas);
                break;
            }
        }
    }

    fn apply(isas: &mut [VectorIsa]) {
        isas.sort();

        let name = isas
            .iter()
            .find(|isa| isa.detected)
            .map(|isa| isa.name)
            .unwrap_or("none");

        println!("cargo:rustc-env=NEONRVV_HOST_VECTOR_ISA={name}");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let mut isas = VectorIsa::candidates();

    // Detection only describes the machine we run on when it is also the target
    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();

    if host == target {
        PlatformDetector::detect(&mut isas);
    }

    PlatformDetector::apply(&mut isas);
}
