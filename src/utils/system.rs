// HashMeter - Free and Open Source Software Statement
//
// This project, hashmeter, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/system.rs
// Version: 1.0.0
//
// This file gathers host facts for the --system-info report and the run
// banner, located in the utils subdirectory. All probing goes through the
// sysinfo crate; fields the platform cannot provide degrade to "unknown".
//
// Tree Location:
// - src/utils/system.rs (host information)
// - Depends on: sysinfo, num_cpus

use sysinfo::System;

/// Print the system information report
pub fn display_system_info() {
    let mut sys = System::new_all();
    sys.refresh_all();

    println!("System Info 🖥️");
    println!("======================");
    println!("OS             : {}", System::long_os_version().unwrap_or_else(unknown));
    println!("Kernel         : {}", System::kernel_version().unwrap_or_else(unknown));
    println!("Host           : {}", System::host_name().unwrap_or_else(unknown));
    println!("Arch           : {}", System::cpu_arch());
    println!("CPU            : {}", cpu_brand(&sys));
    println!("Logical cores  : {}", num_cpus::get());
    println!("Physical cores : {}", num_cpus::get_physical());
    println!(
        "Total memory   : {:.1} GiB",
        sys.total_memory() as f64 / (1024.0 * 1024.0 * 1024.0)
    );
}

/// One-line CPU summary for run banners
pub fn cpu_summary() -> String {
    let mut sys = System::new_all();
    sys.refresh_all();
    format!("{} ({} threads)", cpu_brand(&sys), num_cpus::get())
}

fn cpu_brand(sys: &System) -> String {
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .filter(|brand| !brand.is_empty())
        .unwrap_or_else(|| "unknown CPU".to_string())
}

fn unknown() -> String {
    "unknown".to_string()
}


// Changelog:
// - v1.0.0 (2025-08-04): Initial version.
//   - --system-info report and cpu_summary() for the run banner, both over
//     sysinfo with "unknown" fallbacks.
