//! Rendering of the generated dispatch module

use std::path::Path;

// internal modules
use crate::dispatch::{Arm, Case, Dispatch, ElementUnit};
use crate::error::Result;

// bateman crates
use bateman_solver::render_terms;
use bateman_utils::f;

/// Warning banner so nobody edits a generated file by hand
const BANNER: &str = "\
//! Static radioactive decay dispatch
//!
//! This module has been auto generated by `decay-gen`. Do not modify
//! directly, regenerate from the decay data library instead.
";

/// Wrap width for the nuclide identifier table
const WRAP_WIDTH: usize = 78;

/// Render the complete dispatch module as Rust source text
///
/// The module is self-contained and data-free: a `NUC_COUNT` constant, the
/// `ALL_NUCS` identifier table fixing the output slot order, the public
/// `decay` function routing by proton number, and one case function per
/// element. Unknown species always pass through, so the generated code has
/// no failure path.
pub fn render_module(dispatch: &Dispatch) -> String {
    let mut src = String::from(BANNER);
    src.push('\n');
    src.push_str("use std::collections::BTreeMap;\n\n");

    src.push_str("/// Number of tracked nuclides\n");
    src.push_str(&f!(
        "pub const NUC_COUNT: usize = {};\n\n",
        dispatch.nucs.len()
    ));

    src.push_str("/// Tracked nuclide identifiers, in output slot order\n");
    src.push_str(&f!(
        "pub static ALL_NUCS: [u32; NUC_COUNT] = [\n{}\n];\n\n",
        render_nuc_ids(dispatch)
    ));

    src.push_str(&render_decay_fn(dispatch));

    for unit in &dispatch.elements {
        src.push('\n');
        src.push_str(&render_element_fn(unit));
    }

    src
}

/// Render and write the module to file
///
/// The `path` takes anything that can be turned into a `Path` reference,
/// such as a [&str], [String], [Path], etc...
pub fn write_module<P: AsRef<Path>>(dispatch: &Dispatch, path: P) -> Result<()> {
    std::fs::write(path.as_ref(), render_module(dispatch))?;
    Ok(())
}

/// The identifier table content, wrapped and indented
fn render_nuc_ids(dispatch: &Dispatch) -> String {
    let ids = dispatch
        .nucs
        .iter()
        .map(|nuc| nuc.0.to_string())
        .collect::<Vec<String>>()
        .join(", ");

    let options = textwrap::Options::new(WRAP_WIDTH)
        .initial_indent("    ")
        .subsequent_indent("    ");
    textwrap::fill(&ids, options)
}

/// The public entry point routing input species by proton number
fn render_decay_fn(dispatch: &Dispatch) -> String {
    let mut src = String::new();
    src.push_str("/// Decay every species in `comp` over `t` seconds\n");
    src.push_str("///\n");
    src.push_str("/// Tracked species follow their closed-form solutions, anything else\n");
    src.push_str("/// passes through unchanged. Zero-valued outputs are omitted.\n");
    src.push_str("pub fn decay(comp: &BTreeMap<u32, f64>, t: f64) -> BTreeMap<u32, f64> {\n");
    src.push_str("    let mut out = [0.0_f64; NUC_COUNT];\n");
    src.push_str("    let mut rest: BTreeMap<u32, f64> = BTreeMap::new();\n\n");
    src.push_str("    for (&nuc, &n0) in comp {\n");
    src.push_str("        match nuc / 10_000_000 {\n");
    for unit in &dispatch.elements {
        src.push_str(&f!(
            "            {} => decay_{}(nuc, n0, t, &mut out, &mut rest),\n",
            unit.z,
            unit.symbol()
        ));
    }
    src.push_str("            _ => {\n");
    src.push_str("                rest.insert(nuc, n0);\n");
    src.push_str("            }\n");
    src.push_str("        }\n");
    src.push_str("    }\n\n");
    src.push_str("    for (slot, &nuc) in ALL_NUCS.iter().enumerate() {\n");
    src.push_str("        if out[slot] > 0.0 {\n");
    src.push_str("            rest.insert(nuc, out[slot]);\n");
    src.push_str("        }\n");
    src.push_str("    }\n");
    src.push_str("    rest\n");
    src.push_str("}\n");
    src
}

/// One case function per element keeps every `match` small
fn render_element_fn(unit: &ElementUnit) -> String {
    // stable-only units never touch the elapsed time
    let time = if unit.uses_time() { "t" } else { "_t" };

    let mut src = f!(
        "fn decay_{}(nuc: u32, n0: f64, {time}: f64, out: &mut [f64; NUC_COUNT], rest: &mut BTreeMap<u32, f64>) {{\n",
        unit.symbol()
    );
    src.push_str("    match nuc {\n");
    for case in &unit.cases {
        src.push_str(&render_case(case));
    }
    src.push_str("        _ => {\n");
    src.push_str("            rest.insert(nuc, n0);\n");
    src.push_str("        }\n");
    src.push_str("    }\n");
    src.push_str("}\n");
    src
}

fn render_case(case: &Case) -> String {
    let mut src = f!("        {} => {{\n", case.nuclide.0);
    for arm in &case.arms {
        src.push_str(&render_arm(arm));
    }
    src.push_str("        }\n");
    src
}

fn render_arm(arm: &Arm) -> String {
    match arm {
        Arm::Passthrough { slot } => f!("            out[{slot}] += n0;\n"),
        Arm::Accumulate { slot, terms } => {
            f!("            out[{slot}] += n0 * ({});\n", render_terms(terms))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::build_dispatch;
    use bateman_data::{Branch, DecayRecord, Library, Zam};

    fn tritium_dispatch() -> Dispatch {
        let h3 = Zam::new(1, 3, 0);
        let he3 = Zam::new(2, 3, 0);
        let library = Library::from_records(vec![
            DecayRecord {
                nuclide: h3,
                half_life: Some(3.8852e8),
                branches: vec![Branch {
                    daughter: he3,
                    ratio: 1.0,
                }],
                ..Default::default()
            },
            DecayRecord {
                nuclide: he3,
                stable: true,
                ..Default::default()
            },
        ]);
        build_dispatch(&[h3, he3], &library)
    }

    #[test]
    fn module_structure() {
        let src = render_module(&tritium_dispatch());

        assert!(src.starts_with("//! Static radioactive decay dispatch"));
        assert!(src.contains("pub const NUC_COUNT: usize = 2;"));
        assert!(src.contains("pub static ALL_NUCS: [u32; NUC_COUNT] = [\n    10030000, 20030000\n];"));
        assert!(src.contains("pub fn decay(comp: &BTreeMap<u32, f64>, t: f64) -> BTreeMap<u32, f64> {"));
    }

    #[test]
    fn element_routing() {
        let src = render_module(&tritium_dispatch());

        assert!(src.contains("1 => decay_h(nuc, n0, t, &mut out, &mut rest),"));
        assert!(src.contains("2 => decay_he(nuc, n0, t, &mut out, &mut rest),"));

        // unknown elements and unknown isotopes both pass through
        assert_eq!(src.matches("rest.insert(nuc, n0);").count(), 3);
    }

    #[test]
    fn case_statements() {
        let src = render_module(&tritium_dispatch());

        // tritium decays itself into slot 0 and grows helium-3 in slot 1
        assert!(src.contains("        10030000 => {\n"));
        assert!(src.contains("out[0] += n0 * (f64::exp("));
        assert!(src.contains(" + 1.0);\n"));

        // stable helium-3 is a plain pass into its own slot
        assert!(src.contains("        20030000 => {\n            out[1] += n0;\n        }\n"));
    }

    #[test]
    fn stable_only_units_ignore_time() {
        let src = render_module(&tritium_dispatch());

        assert!(src.contains("fn decay_h(nuc: u32, n0: f64, t: f64"));
        assert!(src.contains("fn decay_he(nuc: u32, n0: f64, _t: f64"));
    }
}
