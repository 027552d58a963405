//! # Beamcheck CLI Application
//!
//! Terminal front end for the beam capacity check engine. Prompts for a
//! load case and section, runs the evaluation, and renders the labeled
//! report. All decision logic lives in `beam_core`; this binary only
//! formats the result.

use std::io::{self, BufRead, Write};

use beam_core::{evaluate_design, LoadCase, SECTIONS};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    println!("Beamcheck CLI - Beam Capacity Check");
    println!("===================================");
    println!();
    println!("Available sections: {}", SECTIONS.section_ids().join(", "));
    println!();

    let span_ft = prompt_f64("Enter beam span (ft) [20.0]: ", 20.0);
    let point_load_kip = prompt_f64("Enter midspan point load (kip) [15.0]: ", 15.0);
    let area_load_psf = prompt_f64("Enter area load (psf) [30.0]: ", 30.0);
    let trib_width_ft = prompt_f64("Enter tributary width (ft) [20.0]: ", 20.0);
    let section = prompt_string("Enter section type [delta]: ", "delta");

    let loads = LoadCase::new(point_load_kip, area_load_psf, trib_width_ft, span_ft);

    match evaluate_design(&loads, &section) {
        Ok(result) => {
            println!();
            println!("Beam Design Example");
            println!("{}", "=".repeat(30));
            println!("Beam Length: {} ft", loads.span_ft);
            println!("Midspan Point Load: {} kip", loads.point_load_kip);
            println!("Area Load: {} psf", loads.area_load_psf);
            println!("Tributary Width: {} ft", loads.trib_width_ft);
            println!("Section Type: {}", section);
            println!();
            println!("Calculated Moment at Midspan: {:.2} kip-ft", result.moment_kipft);
            println!("Calculated Shear at Support: {:.2} kip", result.shear_kip);
            println!();
            println!("{}", result.load_check);
            println!();
            println!("Moment Capacity: {} kip-ft", result.moment_capacity_kipft);
            println!("Shear Capacity: {} kip", result.shear_capacity_kip);
            println!("Moment Capacity Status: {}", result.moment_status);
            println!("Shear Capacity Status: {}", result.shear_status);
            println!();
            println!(
                "Design Status: {}",
                if result.passes() { "Pass" } else { "Fail" }
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
