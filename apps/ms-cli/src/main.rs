use clap::{Parser, Subcommand};
use ms_app::{
    AppResult, RunOptions, RunResponse, dense_curve_family, family_csv, load_compiled,
    min_current, run_scenario, solve_target, summarize, sweep, sweep_csv, template_yaml,
    trace_csv,
};
use ms_sim::IntegratorType;
use ms_solver::{
    CURRENT_LIMIT_MAX_PCT, CURRENT_LIMIT_MIN_PCT, CurrentRange, MinCurrentStatus,
    TargetTimeSolution,
};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "ms-cli")]
#[command(about = "Motor starting simulator - induction motor DOL and soft-start transients", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and values
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Print a scenario template built from the OEM presets
    Template,
    /// Simulate the start described by a scenario
    Run {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Integrate with RK4 instead of Forward Euler
        #[arg(long)]
        rk4: bool,
        /// Write the time trace as CSV to this path
        #[arg(long)]
        trace: Option<PathBuf>,
        /// Keep every N-th step in the trace
        #[arg(long, default_value_t = 10)]
        trace_every: usize,
    },
    /// Find the lowest safe constant current limit
    MinCurrent {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Solve for the current limit giving a target start time
    Solve {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Target start time in seconds (overrides the scenario)
        #[arg(long)]
        target_s: Option<f64>,
    },
    /// Start time against constant current limit
    Sweep {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Lowest current limit (% rated current)
        #[arg(long, default_value_t = CURRENT_LIMIT_MIN_PCT)]
        from: u32,
        /// Highest current limit (% rated current)
        #[arg(long, default_value_t = CURRENT_LIMIT_MAX_PCT)]
        to: u32,
        /// Step (% rated current)
        #[arg(long, default_value_t = 25)]
        step: u32,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the speed-indexed curve family as CSV
    Curves {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Template => cmd_template(),
        Commands::Run {
            scenario_path,
            rk4,
            trace,
            trace_every,
        } => cmd_run(&scenario_path, rk4, trace.as_deref(), trace_every),
        Commands::MinCurrent { scenario_path } => cmd_min_current(&scenario_path),
        Commands::Solve {
            scenario_path,
            target_s,
        } => cmd_solve(&scenario_path, target_s),
        Commands::Sweep {
            scenario_path,
            from,
            to,
            step,
            output,
        } => cmd_sweep(&scenario_path, from, to, step, output.as_deref()),
        Commands::Curves {
            scenario_path,
            output,
        } => cmd_curves(&scenario_path, output.as_deref()),
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let compiled = load_compiled(scenario_path)?;
    let summary = summarize(&compiled)?;
    println!("✓ Scenario is valid: {}", summary.name);
    println!("  Start mode:          {}", summary.start_mode);
    println!("  Rated power:         {:.1} kW", summary.rated_power_kw);
    println!("  Rated torque:        {:.1} Nm", summary.rated_torque_nm);
    println!("  Synchronous speed:   {:.0} rpm", summary.synchronous_speed_rpm);
    println!("  Locked-rotor current: {:.0} A", summary.locked_rotor_current_a);
    Ok(())
}

fn cmd_template() -> AppResult<()> {
    print!("{}", template_yaml()?);
    Ok(())
}

fn cmd_run(
    scenario_path: &Path,
    rk4: bool,
    trace: Option<&Path>,
    trace_every: usize,
) -> AppResult<()> {
    let compiled = load_compiled(scenario_path)?;
    let options = RunOptions {
        integrator: if rk4 {
            IntegratorType::RK4
        } else {
            IntegratorType::ForwardEuler
        },
        record_every: trace.map(|_| trace_every),
        ..RunOptions::default()
    };
    println!("Simulating {} start: {}", compiled.mode.label(), compiled.name);

    let response = run_scenario(&compiled, &options)?;
    print_run_report(&response);

    if let Some(path) = trace {
        let csv = trace_csv(&response.result)?;
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} trace points to {}",
            response.result.trace.len(),
            path.display()
        );
    }
    Ok(())
}

fn print_run_report(response: &RunResponse) {
    let result = &response.result;
    println!("\nResult: {}", result.status_label());
    if let Some(stall) = result.stall() {
        println!(
            "  Stalled at {:.2} s, {:.1} % speed ({})",
            stall.time_s, stall.speed_pct, stall.reason
        );
    }
    println!("  Final speed:    {:.2} %", result.final_speed_pct);
    println!("  Final slip:     {:.4}", result.final_slip());
    println!(
        "  Thermal stress: {:.1} % of withstand ({:.3e} A²s)",
        result.thermal.percent_of_withstand, result.thermal.ampere_squared_seconds
    );
    println!(
        "  Min margin:     {:.1} % ({:.1} Nm) at {:.1} % speed, slip {:.3}",
        result.min_margin.margin_pct,
        result.min_margin.margin_nm(),
        result.min_margin.speed_pct,
        result.min_margin.slip()
    );
    if let Some(speed) = result.ramp_end_speed_pct {
        println!("  Ramp ended at:  {:.1} % speed", speed);
    }
    if let Some(min) = &response.min_current {
        print_min_current(min);
    }
    debug!(steps = result.steps, wall_time_s = response.wall_time_s, "run report");
}

fn print_min_current(min: &ms_app::MinCurrentReport) {
    match min.result.status {
        MinCurrentStatus::Found => println!(
            "  Min starting current: {:.0} % ({:.0} A), critical at {:.0} % speed",
            min.result.current_limit_pct, min.current_a, min.result.critical_speed_pct
        ),
        MinCurrentStatus::NoSafeLevel => println!(
            "  Min starting current: none up to {:.0} %",
            min.result.current_limit_pct
        ),
    }
}

fn cmd_min_current(scenario_path: &Path) -> AppResult<()> {
    let compiled = load_compiled(scenario_path)?;
    let min = min_current(&compiled)?;
    print_min_current(&min);
    Ok(())
}

fn cmd_solve(scenario_path: &Path, target_s: Option<f64>) -> AppResult<()> {
    let compiled = load_compiled(scenario_path)?;
    let response = solve_target(&compiled, target_s, &RunOptions::default())?;

    println!("Target start time: {:.2} s", response.target_time_s);
    match response.solution {
        TargetTimeSolution::Found {
            current_limit_pct,
            achieved_time_s,
            iterations,
        } => {
            println!(
                "✓ Solution: {:.0} % ({:.0} A) → {:.2} s",
                current_limit_pct,
                response.current_a.unwrap_or_default(),
                achieved_time_s
            );
            println!("  Iterations: {iterations}");
        }
        TargetTimeSolution::NoSolution { fastest_time_s } => match fastest_time_s {
            Some(t) => println!(
                "✗ No solution: fastest start in range takes {:.2} s",
                t
            ),
            None => println!("✗ No solution: the start fails even at the top of the range"),
        },
    }
    println!("  Solve time: {:.3} s", response.wall_time_s);
    Ok(())
}

fn cmd_sweep(
    scenario_path: &Path,
    from: u32,
    to: u32,
    step: u32,
    output: Option<&Path>,
) -> AppResult<()> {
    let compiled = load_compiled(scenario_path)?;
    let range = CurrentRange::new(from, to, step)?;
    let points = sweep(&compiled, &range, &RunOptions::default())?;
    write_csv(&sweep_csv(&points), output, points.len())
}

fn cmd_curves(scenario_path: &Path, output: Option<&Path>) -> AppResult<()> {
    let compiled = load_compiled(scenario_path)?;
    let family = dense_curve_family(&compiled, &RunOptions::default())?;
    write_csv(&family_csv(&family), output, family.len())
}

fn write_csv(csv: &str, output: Option<&Path>, rows: usize) -> AppResult<()> {
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} rows to {}", rows, path.display());
    } else {
        print!("{}", csv);
    }
    Ok(())
}
