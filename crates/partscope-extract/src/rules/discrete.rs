//! Discrete semiconductors.

use super::{FieldRule, ValueCase};

pub const DIODE: &[FieldRule] = &[
    FieldRule::new("Vf", r"(vf|forward.*voltage)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new(
        "Vr",
        r"(vr|reverse.*voltage|max.*reverse)[:=]\s*([^\s,;]+)",
        2,
    ),
    FieldRule::new("Ir", r"(reverse.*leakage|ir)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("If", r"(if|forward.*current)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new(
        "Trr",
        r"(trr|reverse.*recovery.*time)[:=]\s*([^\s,;]+)",
        2,
    ),
];

pub const LED: &[FieldRule] = &[
    FieldRule::new("Vf", r"(vf|forward.*voltage)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("If", r"(if|forward.*current)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new(
        "Intensity",
        r"(luminous.*intensity|brightness)[:=]\s*([^\s,;]+)",
        2,
    ),
    FieldRule::new("Angle", r"(viewing.*angle)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Wavelength", r"(wavelength|λ)[:=]\s*([^\s,;]+)", 2),
];

pub const TRANSISTOR: &[FieldRule] = &[
    FieldRule::new("Type", r"\b(npn|pnp)\b", 1).cased(ValueCase::Upper),
    FieldRule::new("Ic", r"(ic|collector.*current)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new(
        "Vce",
        r"(vce|collector.*emitter.*voltage)[:=]\s*([^\s,;]+)",
        2,
    ),
    FieldRule::new("Gain", r"(hfe|beta|gain)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("fT", r"(ft|transition.*frequency)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Ptot", r"(power.*dissipation|ptot)[:=]\s*([^\s,;]+)", 2),
];

pub const MOSFET: &[FieldRule] = &[
    FieldRule::new("Type", r"\b(n-channel|p-channel)\b", 1).cased(ValueCase::Title),
    FieldRule::new("Vds", r"(vds|drain.*source.*voltage)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new(
        "Vgs(th)",
        r"(vgs|gate.*threshold.*voltage)[:=]\s*([^\s,;]+)",
        2,
    ),
    FieldRule::new("Id", r"(id|drain.*current)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Rds(on)", r"(rds|rds\(on\))[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Qg", r"(qg|gate.*charge)[:=]\s*([^\s,;]+)", 2),
];
