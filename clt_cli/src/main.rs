//! # CLT Section CLI
//!
//! Reads a JSON job file, analyses the section and prints a report.
//!
//! ```text
//! clt_cli job.json --moment-knm 25 --shear-kn 40 --json
//! ```
//!
//! Job file layout:
//!
//! ```json
//! {
//!   "section": { "label": "...", "thicknesses_mm": [...], "orientations": [...], "materials": [...] },
//!   "forces": { "normal_kn": 0.0, "moment_knm": 25.0, "shear_kn": 40.0 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::info;
use serde::Deserialize;

use clt_core::calculations::{calculate, CltSectionInput, CltSectionResult, PointPosition, SectionForces};
use clt_core::{CalcError, CalcResult};

#[derive(Parser, Debug)]
#[command(name = "clt_cli", version, about = "Cross-laminated timber section calculator")]
struct Cli {
    /// JSON job file with the section and (optionally) the forces
    job: PathBuf,

    /// Normal force in kN/m, tension positive (overrides the job file)
    #[arg(long)]
    normal_kn: Option<f64>,

    /// Bending moment in kN·m/m (overrides the job file)
    #[arg(long)]
    moment_knm: Option<f64>,

    /// Shear force in kN/m (overrides the job file)
    #[arg(long)]
    shear_kn: Option<f64>,

    /// Print the full result as JSON after the report
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Deserialize)]
struct Job {
    section: CltSectionInput,
    #[serde(default)]
    forces: SectionForces,
}

fn load_job(path: &Path) -> CalcResult<Job> {
    let text = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(serde_json::from_str(&text)?)
}

fn run(cli: &Cli) -> CalcResult<CltSectionResult> {
    let job = load_job(&cli.job)?;
    info!("Loaded job {} ({} layers)", cli.job.display(), job.section.thicknesses_mm.len());

    let forces = SectionForces {
        normal_kn: cli.normal_kn.unwrap_or(job.forces.normal_kn),
        moment_knm: cli.moment_knm.unwrap_or(job.forces.moment_knm),
        shear_kn: cli.shear_kn.unwrap_or(job.forces.shear_kn),
    };

    calculate(&job.section, &forces)
}

fn print_report(result: &CltSectionResult) {
    let p = &result.properties;
    let f = &result.forces;

    println!("═══════════════════════════════════════");
    println!("  CLT SECTION: {}", if result.label.is_empty() { "(unnamed)" } else { result.label.as_str() });
    println!("═══════════════════════════════════════");
    println!();
    println!("Section (per 1000 mm strip):");
    println!("  Thickness   = {:.1} mm", p.thickness_mm);
    println!("  CoG         = {:.2} mm from top", p.center_of_gravity_mm);
    println!("  z_top/z_bot = {:.2} / {:.2} mm", p.z_top_mm, p.z_bottom_mm);
    println!("  A_net       = {:.0} mm²", p.active_area_mm2);
    println!("  I_net       = {:.4e} mm⁴", p.moment_of_inertia_mm4);
    println!("  W_top/W_bot = {:.4e} / {:.4e} mm³", p.section_modulus_top_mm3, p.section_modulus_bottom_mm3);
    println!("  AE_eff      = {:.4e} N/mm", p.ae_eff);
    println!();

    println!("Static moments (mm³):");
    for layer in &result.static_moments.layers {
        let points: Vec<String> = layer
            .points
            .iter()
            .map(|pt| {
                let tag = match pt.position {
                    PointPosition::Top => "top",
                    PointPosition::CenterOfGravity => "cog",
                    PointPosition::Middle => "mid",
                    PointPosition::Bottom => "bot",
                    PointPosition::Continuity => "cont",
                };
                format!("{}={:.0}", tag, pt.static_moment_mm3)
            })
            .collect();
        println!("  #{} {:>3}  {}", layer.layer, layer.orientation, points.join("  "));
    }
    println!();

    println!(
        "Stresses (N = {:.2} kN/m, M = {:.2} kNm/m, V = {:.2} kN/m):",
        f.normal_kn, f.moment_knm, f.shear_kn
    );
    let normal = &result.normal_stresses;
    for (i, bending) in result.bending_stresses.iter().enumerate() {
        println!(
            "  #{}  σt = {:7.3}  σc = {:7.3}  σm = [{:7.3} {:7.3} {:7.3}]",
            i, normal.tension[i], normal.compression[i], bending[0], bending[1], bending[2]
        );
    }
    println!("  max |σm| = {:.3} N/mm²", result.max_bending_stress());
    println!("  max |τ|  = {:.3} N/mm²", result.max_shear_stress());
    println!();

    let c = &result.capacities;
    println!("Characteristic capacities:");
    println!("  N_t,k = {:.1} kN/m", c.tension_kn);
    println!("  N_c,k = {:.1} kN/m", c.compression_kn);
    println!("  M_k   = {:.2} kNm/m", c.bending_knm);
    println!("  V_k   = {:.1} kN/m", c.shear_kn);
    println!("═══════════════════════════════════════");
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    info!("CLT section calculator v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(result) => {
            print_report(&result);
            if cli.json {
                println!();
                println!("JSON Output:");
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_path(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("jobs").join(name)
    }

    #[test]
    fn test_missing_job_file_is_a_file_error() {
        let err = load_job(&job_path("does_not_exist.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(matches!(err, CalcError::FileError { ref operation, .. } if operation == "read"));
    }

    #[test]
    fn test_sample_job_runs() {
        let cli = Cli::parse_from(["clt_cli", job_path("clt160_l5s.json").to_str().unwrap(), "--shear-kn", "10"]);
        let result = run(&cli).unwrap();
        assert_eq!(result.forces.shear_kn, 10.0);
        assert_eq!(result.forces.moment_knm, 25.0);
        assert!((result.properties.thickness_mm - 160.0).abs() < 1e-9);
    }
}
