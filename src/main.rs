use starsim::{
    bench_sampling, bench_update, build_solar_system, default_solar_bodies, plot_orbits,
    plot_radial_velocities, plot_spectrum, render_top_down, BinaryConfig, BinaryScenario,
    BinarySystem, ScenarioConfig, SolarSystem, AU_KM, SPEED_OF_LIGHT_KMS,
};

use clap::{Parser, Subcommand};
use anyhow::{Context, Result};

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "Circular-orbit binary star and solar system teaching simulator")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Binary star system: parameter report plus PNG plots
    Binary {
        /// Scenario YAML with a `binary` section
        #[arg(short, long)]
        scenario: Option<PathBuf>,
        /// Prompt for the parameters instead of using a file or defaults
        #[arg(long)]
        interactive: bool,
        /// Directory for the generated PNG files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Interactive solar-system menu
    Solar {
        /// Scenario YAML with a `bodies` section
        #[arg(short, long)]
        scenario: Option<PathBuf>,
    },
    /// Scripted walkthrough of the solar-system features
    Demo,
    /// Generate the binary-star example plot gallery
    Examples {
        /// Directory for the generated PNG files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Run the timing sweeps
    Bench,
}

// loading lives here to keep the subcommand runners clean
fn load_scenario_from_yaml(path: &Path) -> Result<ScenarioConfig> {
    let file = File::open(path)
        .with_context(|| format!("failed to open scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", path.display()))?;
    Ok(cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Binary {
            scenario,
            interactive,
            out_dir,
        } => run_binary(scenario.as_deref(), interactive, &out_dir),
        Command::Solar { scenario } => run_solar(scenario.as_deref()),
        Command::Demo => {
            run_demo();
            Ok(())
        }
        Command::Examples { out_dir } => run_examples(&out_dir),
        Command::Bench => {
            bench_sampling()?;
            bench_update();
            Ok(())
        }
    }
}

// =========================================================================================
// Shared prompt helpers (all malformed input is handled here, never in the core)
// =========================================================================================

/// Read one trimmed line from stdin; `None` once stdin is closed
fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let n = io::stdin().read_line(&mut line)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a number, substituting `default` on empty or malformed input
fn prompt_f64(label: &str, default: f64) -> Result<f64> {
    let line = prompt_line(&format!("{label} [default: {default}]: "))?;
    Ok(line
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
        .unwrap_or(default))
}

/// Prompt for a 1-based body number; `None` when out of range or malformed
fn prompt_index(label: &str, len: usize) -> Result<Option<usize>> {
    let Some(line) = prompt_line(label)? else {
        return Ok(None);
    };
    Ok(line
        .parse::<usize>()
        .ok()
        .filter(|&i| i >= 1 && i <= len)
        .map(|i| i - 1))
}

// =========================================================================================
// Binary star subcommand
// =========================================================================================

fn run_binary(scenario: Option<&Path>, interactive: bool, out_dir: &Path) -> Result<()> {
    let cfg = if interactive {
        prompt_binary_config()?
    } else if let Some(path) = scenario {
        load_scenario_from_yaml(path)?
            .binary
            .with_context(|| format!("scenario {} has no binary section", path.display()))?
    } else {
        println!("Using default parameters (pass --interactive for custom values)");
        BinaryConfig::default()
    };

    let scenario = BinaryScenario::build(cfg)?;
    print_binary_report(&scenario);

    println!("\nGenerating visualizations...");

    let orbit_path = out_dir.join("orbital_motion.png");
    plot_orbits(&scenario.system, &orbit_path)?;
    println!("Plot saved to: {}", orbit_path.display());

    let rv_path = out_dir.join("radial_velocities.png");
    plot_radial_velocities(&scenario.system, scenario.inclination_deg, &rv_path)?;
    println!("Plot saved to: {}", rv_path.display());

    for phase in [0.0, 0.25, 0.5, 0.75] {
        let path = out_dir.join(format!("spectrum_phase_{phase:.2}.png"));
        plot_spectrum(&scenario.system, phase, scenario.inclination_deg, &path)?;
        println!("Plot saved to: {}", path.display());
    }

    println!("\nAll visualizations generated");
    Ok(())
}

fn prompt_binary_config() -> Result<BinaryConfig> {
    println!("\n{}", "=".repeat(60));
    println!("Binary Star System Simulator");
    println!("{}", "=".repeat(60));
    println!("\nEnter the parameters for the binary star system:");
    println!("(Press Enter to use default values)\n");

    let defaults = BinaryConfig::default();
    Ok(BinaryConfig {
        mass1: prompt_f64("Mass of Star 1 (solar masses)", defaults.mass1)?,
        mass2: prompt_f64("Mass of Star 2 (solar masses)", defaults.mass2)?,
        semi_major_axis: prompt_f64("Semi-major axis (AU)", defaults.semi_major_axis)?,
        period: prompt_f64("Orbital period (days)", defaults.period)?,
        inclination: Some(prompt_f64(
            "Orbital inclination (degrees, 90 = edge-on)",
            90.0,
        )?),
    })
}

fn print_binary_report(scenario: &BinaryScenario) {
    let system = &scenario.system;

    println!("\n{}", "=".repeat(60));
    println!("Binary Star System Parameters:");
    println!("{}", "=".repeat(60));
    println!("Star 1 mass: {:.2} solar masses", system.mass1);
    println!("Star 2 mass: {:.2} solar masses", system.mass2);
    println!("Semi-major axis: {:.2} AU", system.semi_major_axis);
    println!("Orbital period: {:.2} days", system.period);
    println!("Star 1 orbital radius: {:.3} AU", system.r1);
    println!("Star 2 orbital radius: {:.3} AU", system.r2);
    println!("Star 1 orbital velocity: {:.2} km/s", system.v1_kms);
    println!("Star 2 orbital velocity: {:.2} km/s", system.v2_kms);
    println!("Inclination: {:.1}°", scenario.inclination_deg);
    println!("{}", "=".repeat(60));
}

// =========================================================================================
// Solar system subcommand
// =========================================================================================

fn run_solar(scenario: Option<&Path>) -> Result<()> {
    let bodies = match scenario {
        Some(path) => load_scenario_from_yaml(path)?
            .bodies
            .with_context(|| format!("scenario {} has no bodies section", path.display()))?,
        None => default_solar_bodies(),
    };
    let mut system = build_solar_system(&bodies);

    println!("\n{}", "=".repeat(70));
    println!("Welcome to the Interactive Solar System Simulator");
    println!("A tool for teaching astronomy and celestial mechanics");
    println!("{}", "=".repeat(70));

    loop {
        print_menu();

        let Some(choice) = prompt_line("\nEnter your choice (0-7): ")? else {
            break;
        };

        match choice.as_str() {
            "0" => {
                println!("\nThank you for exploring the cosmos!");
                break;
            }
            "1" => display_info(&system),
            "2" => {
                system.update(1.0);
                println!("\nAdvanced 1 day");
            }
            "3" => {
                system.update(30.0);
                println!("\nAdvanced 30 days");
            }
            "4" => {
                system.update(365.0);
                println!("\nAdvanced 1 year");
            }
            "5" => show_visualization(&system),
            "6" => show_facts(),
            "7" => distance_dialog(&system)?,
            _ => println!("\nInvalid choice! Please enter a number between 0 and 7."),
        }

        if prompt_line("\nPress Enter to continue...")?.is_none() {
            break;
        }
    }
    Ok(())
}

fn print_menu() {
    println!("\n{}", "=".repeat(70));
    println!("Interactive Astronomy Teaching Tool");
    println!("{}", "=".repeat(70));
    println!("1. View current solar system status");
    println!("2. Advance time by 1 day");
    println!("3. Advance time by 30 days");
    println!("4. Advance time by 365 days (1 year)");
    println!("5. Show top-down visualization");
    println!("6. Show educational facts");
    println!("7. Calculate distance between bodies");
    println!("0. Exit");
    println!("{}", "=".repeat(70));
}

fn display_info(system: &SolarSystem) {
    println!("\n{}", "=".repeat(70));
    println!("Solar System Simulation");
    println!(
        "Time elapsed: {:.1} days ({:.2} years)",
        system.time_elapsed,
        system.time_elapsed / 365.25
    );
    println!("{}", "=".repeat(70));

    for body in &system.bodies {
        let pos = body.position();
        println!("\n{}:", body.name);
        println!(
            "  Distance from {}: {:.2} AU",
            system.central.name, body.distance
        );
        println!(
            "  Orbital Period: {:.1} days ({:.2} years)",
            body.orbital_period,
            body.orbital_period / 365.25
        );
        println!("  Current Position: ({:.2}, {:.2}) AU", pos.x, pos.y);
        println!("  Orbital Velocity: {:.2} km/s", body.velocity_kms());
        println!("  Angle in Orbit: {:.1}°", body.phase.to_degrees());
    }
}

/// One `(marker, x, y)` tuple per body, first letters de-duplicated by
/// lowercasing (Mercury takes M, Mars falls back to m)
fn body_markers(system: &SolarSystem) -> Vec<(char, f64, f64)> {
    let mut used = Vec::new();
    let mut markers = Vec::new();

    for body in &system.bodies {
        let first = body.name.chars().next().unwrap_or('?');
        let marker = if used.contains(&first) {
            first.to_ascii_lowercase()
        } else {
            first
        };
        used.push(marker);

        let pos = body.position();
        markers.push((marker, pos.x, pos.y));
    }
    markers
}

fn show_visualization(system: &SolarSystem) {
    println!("\n{}", "=".repeat(70));
    println!("Solar System View (Top-Down)");
    println!("{}", "=".repeat(70));

    let markers = body_markers(system);
    print!("{}", render_top_down(&markers, 40, 3.0));

    let legend: Vec<String> = markers
        .iter()
        .zip(system.bodies.iter())
        .map(|(&(marker, _, _), body)| format!("{} = {}", marker, body.name))
        .collect();
    println!("\nLegend: * = {}, {}", system.central.name, legend.join(", "));
}

fn show_facts() {
    println!("\n{}", "=".repeat(70));
    println!("Educational Astronomy Facts");
    println!("{}", "=".repeat(70));
    println!("\nAstronomical Unit (AU):");
    println!("  - 1 AU = 149,597,870.7 km (distance from Earth to Sun)");
    println!("  - Used as a convenient unit for measuring distances in the solar system");
    println!("\nKepler's Laws of Planetary Motion:");
    println!("  1. Planets move in elliptical orbits with the Sun at one focus");
    println!("  2. A line joining a planet and the Sun sweeps equal areas in equal times");
    println!("  3. The square of orbital period is proportional to the cube of semi-major axis");
    println!("\nOrbital Velocity:");
    println!("  - Earth orbits the Sun at approximately 30 km/s");
    println!("  - Closer planets move faster (Mercury ~48 km/s)");
    println!("  - Farther planets move slower (Neptune ~5.4 km/s)");
    println!("\nFun Facts:");
    println!("  - Jupiter is more massive than all other planets combined");
    println!("  - Venus rotates backwards compared to most planets");
    println!("  - Mars has the largest volcano in the solar system (Olympus Mons)");
    println!("  - Saturn's rings are made of ice and rock particles");
}

fn distance_dialog(system: &SolarSystem) -> Result<()> {
    println!("\nAvailable bodies:");
    for (i, body) in system.bodies.iter().enumerate() {
        println!("{}. {}", i + 1, body.name);
    }

    let first = prompt_index("Select first body (number): ", system.bodies.len())?;
    let second = prompt_index("Select second body (number): ", system.bodies.len())?;

    let (Some(a), Some(b)) = (first, second) else {
        println!("Invalid selection!");
        return Ok(());
    };

    match system.distance_between(a, b) {
        Some(d) => print_distance_report(&system.bodies[a].name, &system.bodies[b].name, d),
        None => println!("Invalid selection!"),
    }
    Ok(())
}

fn print_distance_report(name_a: &str, name_b: &str, distance_au: f64) {
    let distance_km = distance_au * AU_KM;
    println!("\nDistance between {name_a} and {name_b}:");
    println!("  {distance_au:.3} AU");
    println!("  {distance_km:.2e} km");
    println!(
        "  Light takes {:.2} seconds to travel this distance",
        distance_km / SPEED_OF_LIGHT_KMS
    );
}

// =========================================================================================
// Demo subcommand
// =========================================================================================

fn run_demo() {
    println!("\n{}", "=".repeat(70));
    println!("SOLAR SYSTEM DEMONSTRATION");
    println!("Showcasing the astronomy teaching tool capabilities");
    println!("{}", "=".repeat(70));

    let mut system = build_solar_system(&default_solar_bodies());

    println!("\n--- Demo 1: Initial Solar System State ---");
    display_info(&system);

    println!("\n\n--- Demo 2: Fast Forward 6 Months ---");
    system.update(182.5);
    display_info(&system);

    println!("\n\n--- Demo 3: Visual Representation ---");
    show_visualization(&system);

    println!("\n\n--- Demo 4: One Earth Year Later ---");
    system.update(182.5);
    println!("\nTotal time elapsed: {:.1} days", system.time_elapsed);
    println!("\nNotice how:");
    println!("- Mercury has completed ~4 orbits");
    println!("- Venus has completed ~1.6 orbits");
    println!("- Earth has completed exactly 1 orbit");
    println!("- Mars has completed ~0.5 orbits");
    println!("- Jupiter has moved just ~8% of its orbit");

    println!("\n\n--- Demo 5: Planetary Distances ---");
    // Earth and Mars are the third and fourth entries of the default table
    if let Some(d) = system.distance_between(2, 3) {
        print_distance_report("Earth", "Mars", d);
    }

    println!("\n\n--- Demo 6: Educational Content ---");
    show_facts();

    println!("\n\n--- Demo 7: Orbital Velocity Comparison ---");
    println!("\nBodies ordered by orbital velocity (fastest to slowest):");
    let mut by_speed: Vec<(String, f64)> = system
        .bodies
        .iter()
        .map(|b| (b.name.clone(), b.velocity_kms()))
        .collect();
    by_speed.sort_by(|a, b| b.1.total_cmp(&a.1));
    for (i, (name, v)) in by_speed.iter().enumerate() {
        println!("{}. {}: {:.2} km/s", i + 1, name, v);
    }
    println!("\nThis demonstrates Kepler's laws: bodies closer to the Sun");
    println!("move faster in their orbits!");

    println!("\n{}", "=".repeat(70));
    println!("END OF DEMONSTRATION");
    println!("Try the `solar` subcommand for interactive mode");
    println!("{}", "=".repeat(70));
}

// =========================================================================================
// Examples subcommand
// =========================================================================================

fn run_examples(out_dir: &Path) -> Result<()> {
    println!("{}", "=".repeat(60));
    println!("Binary Star System Simulator - Examples");
    println!("{}", "=".repeat(60));

    // Example 1: equal masses orbit at equal radii
    println!("\n=== Example 1: Equal Mass Binary System ===");
    let system = BinarySystem::new(1.0, 1.0, 4.0, 365.0)?;
    println!("Star 1 orbital radius: {:.3} AU", system.r1);
    println!("Star 2 orbital radius: {:.3} AU", system.r2);
    println!("Both stars orbit at equal distances from the center of mass");
    let path = out_dir.join("example1_equal_mass.png");
    plot_orbits(&system, &path)?;
    println!("Saved: {}", path.display());

    // Example 2: the massive star barely moves
    println!("\n=== Example 2: High Mass Ratio System ===");
    let system = BinarySystem::new(10.0, 0.5, 15.0, 1000.0)?;
    println!("Star 1 orbital radius: {:.3} AU (massive star)", system.r1);
    println!("Star 2 orbital radius: {:.3} AU (companion)", system.r2);
    let path = out_dir.join("example2_high_mass_ratio.png");
    plot_orbits(&system, &path)?;
    println!("Saved: {}", path.display());

    // Example 3: inclination controls the radial-velocity amplitude
    println!("\n=== Example 3: Effect of Orbital Inclination ===");
    let system = BinarySystem::new(1.5, 1.0, 5.0, 365.0)?;
    for inc in [90.0, 60.0, 30.0, 0.0] {
        let path = out_dir.join(format!("example3_rv_inclination_{inc:02.0}.png"));
        plot_radial_velocities(&system, inc, &path)?;
        println!("Saved: {}", path.display());
    }
    println!("Notice: the amplitude shrinks as the system tilts toward face-on");

    // Example 4: spectral lines swap sides through the orbit
    println!("\n=== Example 4: Doppler Shift Through Orbit ===");
    let system = BinarySystem::new(2.0, 1.5, 8.0, 500.0)?;
    for phase in [0.0, 0.25, 0.5, 0.75] {
        let path = out_dir.join(format!("example4_spectrum_phase_{phase:.2}.png"));
        plot_spectrum(&system, phase, 90.0, &path)?;
        println!("Saved: {}", path.display());
    }
    println!("Notice: lines shift blue and red as the stars approach and recede");

    // Example 5: short periods mean high speeds
    println!("\n=== Example 5: Short Period Binary System ===");
    let system = BinarySystem::new(1.2, 0.8, 0.2, 10.0)?;
    println!("Orbital period: {} days", system.period);
    println!("Star 1 velocity: {:.1} km/s", system.v1_kms);
    println!("Star 2 velocity: {:.1} km/s", system.v2_kms);
    let path = out_dir.join("example5_short_period.png");
    plot_radial_velocities(&system, 90.0, &path)?;
    println!("Saved: {}", path.display());

    println!("\n{}", "=".repeat(60));
    println!("All examples completed");
    println!("{}", "=".repeat(60));
    Ok(())
}
