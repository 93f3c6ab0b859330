use crate::error::{Error, Result};
use std::fs;

/// Extract the archive file name from a URL, ignoring any query string
pub fn get_filename_from_url(url: &str) -> String {
    url.split('?')
        .next()
        .unwrap_or(url)
        .split('/')
        .next_back()
        .filter(|name| !name.is_empty())
        .unwrap_or("download")
        .to_string()
}

/// Last `/`-separated component of an in-archive path
pub fn base_name(entry_path: &str) -> Option<&str> {
    entry_path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
}

/// Operating system identifier exposed to templates as `os`
pub fn host_os() -> String {
    std::env::consts::OS.to_string()
}

/// CPU architecture identifier exposed to templates as `arch`
///
/// 32-bit ARM is reported as `armv<N>`, since the variant is only
/// discoverable from the running CPU.
pub fn host_arch() -> Result<String> {
    let arch = std::env::consts::ARCH;
    if arch != "arm" {
        return Ok(arch.to_string());
    }

    let cpuinfo = fs::read_to_string("/proc/cpuinfo")
        .map_err(|e| Error::Platform(format!("failed to read /proc/cpuinfo: {e}")))?;
    arm_variant_from_cpuinfo(&cpuinfo).ok_or_else(|| {
        Error::Platform("no usable 'CPU architecture' entry in /proc/cpuinfo".to_string())
    })
}

/// Derive `armv<N>` from the `CPU architecture` line of /proc/cpuinfo
pub fn arm_variant_from_cpuinfo(cpuinfo: &str) -> Option<String> {
    cpuinfo.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        if key.trim() != "CPU architecture" {
            return None;
        }
        let digits: String = value
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            None
        } else {
            Some(format!("armv{digits}"))
        }
    })
}
