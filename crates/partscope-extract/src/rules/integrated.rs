//! Integrated circuits and sensors.

use super::FieldRule;

pub const VOLTAGE_REGULATOR: &[FieldRule] = &[
    FieldRule::new("Vin", r"(input.*voltage|vin)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Vout", r"(output.*voltage|vout)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Iout", r"(output.*current|iout)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Dropout", r"(dropout.*voltage)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Efficiency", r"efficiency[:=]\s*([^\s,;]+)", 1),
    FieldRule::new("Iq", r"(iq|quiescent.*current)[:=]\s*([^\s,;]+)", 2),
];

pub const OP_AMP: &[FieldRule] = &[
    FieldRule::new("Vos", r"(vos|offset.*voltage)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Ib", r"(ib|bias.*current)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Slew Rate", r"(slew.*rate)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("GBP", r"(gain.*bandwidth|gbp)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Vcc", r"(supply.*voltage|vcc)[:=]\s*([^\s,;]+)", 2),
];

pub const MICROCONTROLLER: &[FieldRule] = &[
    FieldRule::new(
        "Vcc",
        r"(supply.*voltage|vcc|operating.*voltage)[:=]\s*([^\s,;]+)",
        2,
    ),
    FieldRule::new(
        "Frequency",
        r"(operating.*frequency|clock.*speed)[:=]\s*([^\s,;]+)",
        2,
    ),
    FieldRule::new("Flash", r"flash[:=]\s*([^\s,;]+)", 1),
    FieldRule::new("RAM", r"ram[:=]\s*([^\s,;]+)", 1),
    FieldRule::new("EEPROM", r"eeprom[:=]\s*([^\s,;]+)", 1),
    FieldRule::new(
        "Temp Range",
        r"(temperature.*range|operating.*temp)[:=]\s*([^\s,;]+)",
        2,
    ),
];

pub const SENSOR: &[FieldRule] = &[
    FieldRule::new("Vcc", r"(supply.*voltage|vcc)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Output", r"(output.*type)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Range", r"(measurement.*range|range)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Sensitivity", r"sensitivity[:=]\s*([^\s,;]+)", 1),
    FieldRule::new("Accuracy", r"accuracy[:=]\s*([^\s,;]+)", 1),
];
