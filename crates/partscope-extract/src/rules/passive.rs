//! Passive and electromechanical parts.

use super::FieldRule;

pub const RESISTOR: &[FieldRule] = &[
    FieldRule::repeated("Resistance", r"(resistance|value)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Power", r"(power|wattage)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Tolerance", r"tolerance[:=]\s*[±]?([^\s,;]+)", 1),
    FieldRule::new(
        "Temp Coeff",
        r"(temp|temperature).*coefficient[:=]\s*([^\s,;]+)",
        2,
    ),
    FieldRule::new(
        "Max Voltage",
        r"(max|working|rated).*voltage[:=]\s*([^\s,;]+)",
        2,
    ),
];

pub const CAPACITOR: &[FieldRule] = &[
    FieldRule::repeated("Capacitance", r"(capacitance|value)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Voltage", r"(rated|working).*voltage[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Tolerance", r"tolerance[:=]\s*[±]?([^\s,;]+)", 1),
    FieldRule::new("ESR", r"esr[:=]\s*([^\s,;]+)", 1),
    FieldRule::new("Leakage", r"leakage.*current[:=]\s*([^\s,;]+)", 1),
];

pub const INDUCTOR: &[FieldRule] = &[
    FieldRule::repeated("Inductance", r"(inductance|value)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Sat Current", r"saturation.*current[:=]\s*([^\s,;]+)", 1),
    FieldRule::new("DCR", r"(dcr|dc.*resistance)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Q Factor", r"(q|quality).*factor[:=]\s*([^\s,;]+)", 2),
    FieldRule::new(
        "SRF",
        r"(srf|self.?resonant).*frequency[:=]\s*([^\s,;]+)",
        2,
    ),
];

pub const CRYSTAL: &[FieldRule] = &[
    FieldRule::new("Frequency", r"(frequency|freq)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Load Cap", r"(load.*capacitance|cl)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new(
        "Tolerance",
        r"(frequency.*tolerance|tolerance)[:=]\s*([^\s,;]+)",
        2,
    ),
    FieldRule::new("Drive Level", r"(drive.*level)[:=]\s*([^\s,;]+)", 2),
];

pub const RELAY: &[FieldRule] = &[
    FieldRule::new("Coil Voltage", r"(coil.*voltage)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Coil Resistance", r"(coil.*resistance)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Contact Rating", r"(contact.*rating)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new(
        "Contact Form",
        r"(contact.*form|configuration)[:=]\s*([^\s,;]+)",
        2,
    ),
];

pub const TRANSFORMER: &[FieldRule] = &[
    FieldRule::new("Primary V", r"(primary.*voltage)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Secondary V", r"(secondary.*voltage)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Power", r"(power.*rating|va|watts?)[:=]\s*([^\s,;]+)", 2),
    FieldRule::new("Turns Ratio", r"(turns.*ratio)[:=]\s*([^\s,;]+)", 2),
];
