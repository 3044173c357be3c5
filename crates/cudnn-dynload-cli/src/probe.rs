use serde::Serialize;

use cudnn_dynload::config::{default_config_path, DynloadConfig};
use cudnn_dynload::release::Release;
use cudnn_dynload::{routines, COMPILED_RELEASE, CUDNN};
use cudnn_dynload_common::platform::{cudnn_library_names, platform_name};

// ── Check result types ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Pass,
    Fail,
    Warn,
    Skip,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    name: String,
    status: CheckStatus,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<String>,
}

impl CheckResult {
    fn new(name: &str, status: CheckStatus, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.to_string(),
            details: Vec::new(),
        }
    }

    fn pass(name: &str, message: &str) -> Self {
        Self::new(name, CheckStatus::Pass, message)
    }

    fn fail(name: &str, message: &str) -> Self {
        Self::new(name, CheckStatus::Fail, message)
    }

    fn warn(name: &str, message: &str) -> Self {
        Self::new(name, CheckStatus::Warn, message)
    }

    fn skip(name: &str, message: &str) -> Self {
        Self::new(name, CheckStatus::Skip, message)
    }

    fn detail(mut self, detail: &str) -> Self {
        self.details.push(detail.to_string());
        self
    }
}

// ── Main entry point ────────────────────────────────────────────────────────

pub fn run_probe(json: bool) -> anyhow::Result<()> {
    let mut results: Vec<CheckResult> = Vec::new();

    check_config(&mut results);
    let loaded = check_library(&mut results);
    if loaded {
        check_version(&mut results);
        check_symbols(&mut results);
    } else {
        results.push(CheckResult::skip("Runtime version", "cuDNN not loaded"));
        results.push(CheckResult::skip("Entry points", "cuDNN not loaded"));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results_pretty(&results);
    }

    // Exit code 1 if any failures
    if results
        .iter()
        .any(|r| matches!(r.status, CheckStatus::Fail))
    {
        std::process::exit(1);
    }

    Ok(())
}

pub fn print_routines(json: bool) -> anyhow::Result<()> {
    let table = routines();

    if json {
        println!("{}", serde_json::to_string_pretty(table)?);
        return Ok(());
    }

    println!("Built against cuDNN {} ({} entry points)", COMPILED_RELEASE, table.len());
    for release in Release::ALL.iter().filter(|r| r.is_compiled()) {
        println!();
        println!("{}:", release);
        for routine in table.iter().filter(|r| r.since == *release) {
            println!("  {}", routine.name);
        }
    }
    Ok(())
}

// ── Check 1: Configuration ──────────────────────────────────────────────────

fn check_config(results: &mut Vec<CheckResult>) {
    let mut result = match default_config_path() {
        Some(path) => match DynloadConfig::load(&path) {
            Ok(_) => CheckResult::pass(
                "Configuration",
                &format!("Loaded from {}", path.display()),
            ),
            Err(e) => {
                results.push(CheckResult::fail(
                    "Configuration",
                    &format!("Failed to load {}: {}", path.display(), e),
                ));
                return;
            }
        },
        None => CheckResult::pass("Configuration", "No config file, using defaults"),
    };

    let effective = DynloadConfig::resolve();
    result = result.detail(&format!(
        "Search directory: {}",
        effective
            .cudnn
            .dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "(system loader paths)".to_string())
    ));
    result = result.detail(&format!(
        "Library override: {}",
        effective.cudnn.library.as_deref().unwrap_or("(none)")
    ));

    results.push(result);
}

// ── Check 2: Library ────────────────────────────────────────────────────────

fn check_library(results: &mut Vec<CheckResult>) -> bool {
    let searched = format!(
        "Platform {}: {}",
        platform_name(),
        cudnn_library_names().join(", ")
    );

    if let Some(path) = CUDNN.path() {
        results.push(
            CheckResult::pass("cuDNN library", &format!("Loaded from {}", path.display()))
                .detail(&searched),
        );
        return true;
    }

    let mut result = CheckResult::fail("cuDNN library", "Not available").detail(&searched);
    if let Some(e) = CUDNN.load_error() {
        result = result.detail(&e.to_string());
    }
    results.push(
        result.detail("Set CUDNN_DIR or CUDNN_LIBRARY, or add the cuDNN directory to the loader path"),
    );
    false
}

// ── Check 3: Runtime version ────────────────────────────────────────────────

fn check_version(results: &mut Vec<CheckResult>) {
    if !CUDNN.symbol_present("cudnnGetVersion") {
        results.push(CheckResult::fail(
            "Runtime version",
            "Library does not export cudnnGetVersion",
        ));
        return;
    }

    type FnGetVersion = unsafe extern "C" fn() -> usize;
    let version = unsafe { (CUDNN.resolve::<FnGetVersion>("cudnnGetVersion"))() };
    let runtime_release = Release::for_version(version);

    let result = if runtime_release < COMPILED_RELEASE {
        CheckResult::warn(
            "Runtime version",
            &format!("cuDNN {} is older than the headers this build targets", version),
        )
        .detail(&format!("Runtime provides {}", runtime_release))
        .detail(&format!("Built against {}", COMPILED_RELEASE))
    } else {
        CheckResult::pass("Runtime version", &format!("cuDNN {}", version))
    };
    results.push(result);
}

// ── Check 4: Entry points ───────────────────────────────────────────────────

fn check_symbols(results: &mut Vec<CheckResult>) {
    let table = routines();
    let missing: Vec<_> = table
        .iter()
        .filter(|r| !CUDNN.symbol_present(r.name))
        .collect();

    if missing.is_empty() {
        results.push(CheckResult::pass(
            "Entry points",
            &format!("All {} entry points resolve", table.len()),
        ));
        return;
    }

    let mut result = CheckResult::warn(
        "Entry points",
        &format!("{} of {} entry points missing", missing.len(), table.len()),
    );
    for routine in missing {
        result = result.detail(&format!("{} (since {})", routine.name, routine.since));
    }
    results.push(result);
}

// ── Output formatters ───────────────────────────────────────────────────────

fn print_results_pretty(results: &[CheckResult]) {
    println!();
    println!("cuDNN Dynamic Loading Probe");
    println!("===========================");
    println!();

    let mut pass_count = 0u32;
    let mut fail_count = 0u32;
    let mut warn_count = 0u32;

    for result in results {
        let (icon, color_start, color_end) = match result.status {
            CheckStatus::Pass => {
                pass_count += 1;
                ("[PASS]", "\x1b[32m", "\x1b[0m")
            }
            CheckStatus::Fail => {
                fail_count += 1;
                ("[FAIL]", "\x1b[31m", "\x1b[0m")
            }
            CheckStatus::Warn => {
                warn_count += 1;
                ("[WARN]", "\x1b[33m", "\x1b[0m")
            }
            CheckStatus::Skip => ("[SKIP]", "\x1b[90m", "\x1b[0m"),
        };

        println!(
            "  {}{}{} {} - {}",
            color_start, icon, color_end, result.name, result.message
        );

        for detail in &result.details {
            println!("         {}", detail);
        }
        println!();
    }

    println!("---------------------------");
    println!(
        "  {} passed, {} failed, {} warnings",
        pass_count, fail_count, warn_count
    );
    println!();
}
